use sha3::{Digest, Keccak256};

/// A 32-byte node value: leaf, intermediate node, root or proof entry.
pub type Hash = [u8; 32];

/// Value used to pad the leaf layer up to `2^depth` entries.
pub const ZERO_LEAF: Hash = [0u8; 32];

/// Keccak-256 of arbitrary bytes.
pub fn keccak256(data: &[u8]) -> Hash {
    Keccak256::digest(data).into()
}

/// Combine two sibling nodes: `keccak256(left || right)`.
pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}
