//! # prooftree
//!
//! An unbalanced merkle search tree with compact membership proofs.
//!
//! prooftree lets the holder of a large dataset publish a single root
//! digest, then prove to anyone that a specific item belongs to the set by
//! sending a tree fragment proportional to one leaf's depth instead of the
//! whole dataset.
//!
//! ## Core Concepts
//!
//! - **Digest**: a 32-byte BLAKE3 hash of one data item, or of two
//!   concatenated child digests
//! - **Leaf / Branch**: the two node shapes; a branch's digest commits to
//!   exactly two children, placed by digest order on insert
//! - **Merkle root**: the top node's digest, summarizing the whole set
//! - **Proof tree**: a reduced snapshot in which every subtree off the
//!   target's path collapses to a single digest-only leaf
//!
//! ## Example
//!
//! ```
//! use prooftree::MerkleTree;
//!
//! let mut tree = MerkleTree::new("alpha");
//! tree.insert("beta");
//! tree.insert("gamma");
//!
//! // Publish the root, then hand out a proof for one item.
//! let root = tree.root_hash();
//! let proof = tree.proof_tree_for("beta").unwrap();
//!
//! // A verifier re-derives everything from the proof alone.
//! assert!(proof.contains("beta"));
//! assert!(proof.verify_root_hash(root));
//! ```

pub mod model;
pub mod tree;

mod error;

pub use error::{Error, Result};
pub use model::Digest;
pub use tree::{MerkleTree, TreeNode};
