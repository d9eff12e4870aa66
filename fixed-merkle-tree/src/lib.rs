//! Fixed-depth Merkle tree using Keccak-256.
//!
//! A tree of depth `d` commits to exactly `2^d` leaves. Callers supply up to
//! `2^d` 32-byte leaf hashes; the remainder is padded with `[0; 32]`. Every
//! layer is kept in memory, from the padded leaves up to the single root
//! node:
//!
//! `parent = keccak256(left || right)`
//!
//! When a layer has an odd length its last node is carried into the next
//! layer unhashed.
//!
//! Two proof formats are produced:
//!
//! - [`FixedMerkleTree::proof`] returns positioned steps ([`ProofStep`]) that
//!   [`FixedMerkleTree::verify`] consumes.
//! - [`FixedMerkleTree::legacy_proof`] returns bare sibling hashes, as used by
//!   exit-style verifiers that track the leaf index themselves. These proofs
//!   carry no position tags and cannot be checked with
//!   [`FixedMerkleTree::verify`].

#![warn(missing_docs)]

mod error;
pub(crate) mod hash;
pub(crate) mod proof;
pub(crate) mod tree;
mod verify;


pub use error::FixedMerkleError;
pub use hash::{Hash, ZERO_LEAF, hash_pair, keccak256};
#[cfg(feature = "encoding")]
pub use proof::{decode_proof, encode_proof};
pub use proof::{Position, ProofStep};
pub use tree::{FixedMerkleTree, MAX_DEPTH};
pub use verify::verify_proof;
