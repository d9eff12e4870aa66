use tracing::{debug, trace};

use crate::{
    FixedMerkleError,
    hash::{Hash, ZERO_LEAF, hash_pair},
};

/// Largest supported depth.
///
/// Every layer is held in memory: a depth-24 tree keeps 2^24 leaves
/// (512 MiB) plus roughly the same again for the layers above them.
pub const MAX_DEPTH: u8 = 24;

/// A fixed-depth Merkle tree over 32-byte leaves.
///
/// The leaf layer always holds exactly `2^depth` entries. All layers are
/// computed once at construction and never change afterwards, so a tree can
/// be shared freely between readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedMerkleTree {
    depth: u8,
    /// Leaf layer first, root layer (length 1) last.
    layers: Vec<Vec<Hash>>,
    root: Hash,
}

impl FixedMerkleTree {
    /// Build a tree of the given depth.
    ///
    /// `leaves` are padded with [`ZERO_LEAF`] up to `2^depth` entries.
    /// Fails if there are more leaves than the tree can hold, or if `depth`
    /// exceeds [`MAX_DEPTH`] or the padded leaf layer cannot be allocated.
    pub fn new(depth: u8, mut leaves: Vec<Hash>) -> Result<Self, FixedMerkleError> {
        let capacity = capacity_for_depth(depth)?;
        if leaves.len() > capacity {
            return Err(FixedMerkleError::CapacityExceeded {
                depth,
                capacity,
                leaf_count: leaves.len(),
            });
        }

        let leaf_count = leaves.len();
        leaves
            .try_reserve_exact(capacity - leaf_count)
            .map_err(|_| FixedMerkleError::DepthTooLarge {
                depth,
                max: MAX_DEPTH,
            })?;
        leaves.resize(capacity, ZERO_LEAF);

        let layers = build_layers(leaves);
        // build_layers always ends with a single-node layer
        let root = layers[layers.len() - 1][0];

        debug!(
            depth,
            leaf_count,
            capacity,
            layer_count = layers.len(),
            root = %hex::encode(root),
            "built fixed merkle tree"
        );

        Ok(Self {
            depth,
            layers,
            root,
        })
    }

    /// Depth the tree was built with.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Number of leaf slots, `2^depth`.
    pub fn capacity(&self) -> usize {
        self.leaves().len()
    }

    /// The padded leaf layer.
    pub fn leaves(&self) -> &[Hash] {
        &self.layers[0]
    }

    /// All layers, leaf layer first and root layer last.
    pub fn layers(&self) -> &[Vec<Hash>] {
        &self.layers
    }

    /// The root commitment.
    pub fn root(&self) -> Hash {
        self.root
    }

    /// Index of `leaf` in the padded leaf layer.
    ///
    /// When the value occurs more than once the last occurrence wins.
    pub fn leaf_index(&self, leaf: &Hash) -> Option<usize> {
        let index = self.leaves().iter().rposition(|candidate| candidate == leaf);
        if index.is_none() {
            trace!(leaf = %hex::encode(leaf), "leaf not found in tree");
        }
        index
    }

    /// Build a tree over `leaves` without padding, so layers may have odd
    /// lengths and carried nodes.
    #[cfg(test)]
    pub(crate) fn unpadded(leaves: Vec<Hash>) -> Self {
        let depth = leaves.len().next_power_of_two().trailing_zeros() as u8;
        let layers = build_layers(leaves);
        let root = layers[layers.len() - 1][0];
        Self {
            depth,
            layers,
            root,
        }
    }

    /// Walk from `index` in the leaf layer towards the root, calling `visit`
    /// with each layer and the node index within it.
    ///
    /// The root layer is only visited when `include_root` is set.
    pub(crate) fn walk_to_root<F>(&self, mut index: usize, include_root: bool, mut visit: F)
    where
        F: FnMut(&[Hash], usize),
    {
        let end = if include_root {
            self.layers.len()
        } else {
            self.layers.len() - 1
        };
        for layer in &self.layers[..end] {
            visit(layer, index);
            index /= 2;
        }
    }
}

/// Compute `2^depth`, rejecting depths above [`MAX_DEPTH`].
fn capacity_for_depth(depth: u8) -> Result<usize, FixedMerkleError> {
    let too_large = FixedMerkleError::DepthTooLarge {
        depth,
        max: MAX_DEPTH,
    };
    if depth > MAX_DEPTH {
        return Err(too_large);
    }
    1usize.checked_shl(depth as u32).ok_or(too_large)
}

/// Derive every layer above `leaves`, hashing adjacent pairs and carrying an
/// unpaired last node forward as is.
fn build_layers(leaves: Vec<Hash>) -> Vec<Vec<Hash>> {
    let mut layers = Vec::new();
    let mut current = leaves;

    while current.len() > 1 {
        let pairs = current.chunks_exact(2);
        let carry = pairs.remainder().first().copied();

        let mut next = Vec::with_capacity(current.len().div_ceil(2));
        next.extend(pairs.map(|pair| hash_pair(&pair[0], &pair[1])));
        next.extend(carry);

        layers.push(current);
        current = next;
    }
    layers.push(current);

    layers
}
