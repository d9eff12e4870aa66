use thiserror::Error;

/// Errors from fixed Merkle tree operations.
#[derive(Debug, Error)]
pub enum FixedMerkleError {
    /// More leaves were supplied than `2^depth`.
    #[error("leaf count exceeds tree capacity (depth {depth}, capacity {capacity}, leaves {leaf_count})")]
    CapacityExceeded {
        /// Requested depth.
        depth: u8,
        /// Leaf slots available, `2^depth`.
        capacity: usize,
        /// Leaves supplied.
        leaf_count: usize,
    },
    /// Depth is above [`MAX_DEPTH`](crate::MAX_DEPTH) or the leaf layer
    /// could not be allocated.
    #[error("depth {depth} is too large (max {max})")]
    DepthTooLarge {
        /// Requested depth.
        depth: u8,
        /// Largest supported depth.
        max: u8,
    },
    /// An encoded proof could not be encoded or decoded.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
}
