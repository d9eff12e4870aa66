//! Inclusion proof generation for the fixed Merkle tree.
//!
//! Both proof formats walk the same leaf-to-root path and differ only in
//! what they record at each layer:
//!
//! - positioned proofs record the sibling together with the side it sits on,
//!   skipping layers where the node has no sibling;
//! - legacy proofs record the bare sibling hash for every layer below the
//!   root, with no bounds check and no position tag.

use tracing::trace;

use crate::{hash::Hash, tree::FixedMerkleTree};
#[cfg(feature = "encoding")]
use crate::{FixedMerkleError, tree::MAX_DEPTH};


/// Side of the running hash on which a sibling is concatenated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "encoding", derive(bincode::Encode, bincode::Decode))]
pub enum Position {
    /// Sibling is the left operand: `H(data || hash)`.
    Left,
    /// Sibling is the right operand: `H(hash || data)`.
    Right,
}

/// One step of a positioned inclusion proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "encoding", derive(bincode::Encode, bincode::Decode))]
pub struct ProofStep {
    /// Where `data` goes relative to the running hash.
    pub position: Position,
    /// Sibling node value.
    pub data: Hash,
}

impl FixedMerkleTree {
    /// Generate a positioned inclusion proof.
    ///
    /// With `index == None` the leaf is located by scanning the leaf layer
    /// (last match wins). An explicit index is used as given and is not
    /// checked against `leaf`. Returns an empty proof if the leaf is not in
    /// the tree or the index is outside the leaf layer. An out-of-range index
    /// is not walked at all, so no stray in-range pairs from upper layers end
    /// up in the proof.
    pub fn proof(&self, leaf: &Hash, index: Option<usize>) -> Vec<ProofStep> {
        let index = match index {
            Some(index) if index < self.capacity() => index,
            Some(index) => {
                trace!(index, capacity = self.capacity(), "proof index out of range");
                return Vec::new();
            }
            None => match self.leaf_index(leaf) {
                Some(index) => index,
                None => return Vec::new(),
            },
        };

        let mut proof = Vec::with_capacity(self.depth() as usize);
        self.walk_to_root(index, true, |layer, index| {
            let (pair_index, position) = if index % 2 == 1 {
                (index - 1, Position::Left)
            } else {
                (index + 1, Position::Right)
            };
            // no pair in the root layer or next to a carried node
            if let Some(data) = layer.get(pair_index) {
                proof.push(ProofStep {
                    position,
                    data: *data,
                });
            }
        });
        proof
    }

    /// Generate a legacy sibling-only proof for `leaf`.
    ///
    /// One entry is produced per layer below the root: the node next to the
    /// current one (`index + 1` for even indices, `index - 1` for odd). No
    /// position tags are recorded, so verifiers must track the leaf index
    /// themselves; [`FixedMerkleTree::verify`] cannot check these proofs.
    ///
    /// Entries are `None` where the computed sibling does not exist in its
    /// layer. If `leaf` is not in the tree every entry is `None`; such a proof
    /// is ill-formed and will not verify anywhere. Exit verifiers that walk
    /// index `-1` instead produce one missing entry followed by the siblings
    /// of node 0 in each upper layer; that shape is not reproduced here.
    pub fn legacy_proof(&self, leaf: &Hash) -> Vec<Option<Hash>> {
        let steps = self.layers().len() - 1;
        let Some(index) = self.leaf_index(leaf) else {
            return vec![None; steps];
        };

        let mut proof = Vec::with_capacity(steps);
        self.walk_to_root(index, false, |layer, index| {
            proof.push(layer.get(index ^ 1).copied());
        });
        proof
    }
}

/// Encode a positioned proof to bytes using bincode.
#[cfg(feature = "encoding")]
pub fn encode_proof(proof: &[ProofStep]) -> Result<Vec<u8>, FixedMerkleError> {
    let config = bincode::config::standard()
        .with_big_endian()
        .with_no_limit();
    bincode::encode_to_vec(proof, config)
        .map_err(|e| FixedMerkleError::InvalidProof(format!("encode error: {}", e)))
}

/// Decode a positioned proof from bytes using bincode.
///
/// A tree of [`MAX_DEPTH`] yields at most `MAX_DEPTH` steps; longer proofs
/// are rejected.
#[cfg(feature = "encoding")]
pub fn decode_proof(bytes: &[u8]) -> Result<Vec<ProofStep>, FixedMerkleError> {
    let config = bincode::config::standard()
        .with_big_endian()
        .with_limit::<{ 64 * 1024 }>();
    let (proof, _): (Vec<ProofStep>, _) = bincode::decode_from_slice(bytes, config)
        .map_err(|e| FixedMerkleError::InvalidProof(format!("decode error: {}", e)))?;
    if proof.len() > MAX_DEPTH as usize {
        return Err(FixedMerkleError::InvalidProof(format!(
            "proof has {} steps (max {})",
            proof.len(),
            MAX_DEPTH
        )));
    }
    Ok(proof)
}
