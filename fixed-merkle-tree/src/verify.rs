//! Proof verification for the fixed Merkle tree.
//!
//! Pure function, no tree required. Folds the proof steps over the target
//! leaf and compares the result with the expected root.

use tracing::trace;

use crate::{
    hash::{Hash, hash_pair},
    proof::{Position, ProofStep},
    tree::FixedMerkleTree,
};

/// Verify a positioned proof that `leaf` is committed to by `root`.
///
/// Returns `false` for an empty proof or a missing leaf or root. Only proofs
/// from [`FixedMerkleTree::proof`] have the required shape; legacy proofs
/// carry no positions and are not accepted here.
pub fn verify_proof(proof: &[ProofStep], leaf: Option<&Hash>, root: Option<&Hash>) -> bool {
    let (Some(leaf), Some(root)) = (leaf, root) else {
        return false;
    };
    if proof.is_empty() {
        return false;
    }

    let computed = proof.iter().fold(*leaf, |hash, step| match step.position {
        Position::Left => hash_pair(&step.data, &hash),
        Position::Right => hash_pair(&hash, &step.data),
    });

    if &computed != root {
        trace!(
            expected = %hex::encode(root),
            computed = %hex::encode(computed),
            "proof does not match root"
        );
        return false;
    }
    true
}

impl FixedMerkleTree {
    /// Verify a positioned proof. See [`verify_proof`].
    pub fn verify(proof: &[ProofStep], leaf: Option<&Hash>, root: Option<&Hash>) -> bool {
        verify_proof(proof, leaf, root)
    }
}
