//! The caller-facing merkle tree

use super::TreeNode;
use crate::model::Digest;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A merkle tree over the digests of inserted data items
///
/// The tree is an unbalanced binary search structure keyed on digest
/// magnitude: inserts place the numerically smaller digest to the left, and
/// nothing ever rebalances. Adversarial or merely unlucky insert orders
/// (e.g. strictly increasing digests) can skew the tree toward linear
/// depth, degrading proof size and traversal cost accordingly.
///
/// The tree never stores the original data, only digests, and it mutates
/// in place: one writer at a time, and readers must not overlap a writer.
/// Proof trees produced by [`proof_tree_for`](MerkleTree::proof_tree_for)
/// are independent snapshots and are themselves `MerkleTree` values.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MerkleTree {
    root: TreeNode,
}

impl MerkleTree {
    /// Create a tree over a single data item
    pub fn new(data: &str) -> Self {
        MerkleTree {
            root: TreeNode::leaf(Digest::of_str(data)),
        }
    }

    /// Insert a data item
    ///
    /// The item's digest is computed up front, then threaded down to a leaf
    /// chosen by digest order; every branch digest along the path is
    /// recomputed on the way back up.
    pub fn insert(&mut self, data: &str) {
        self.root.insert(Digest::of_str(data));
    }

    /// Check whether a data item was inserted into this tree
    pub fn contains(&self, data: &str) -> bool {
        self.contains_digest(Digest::of_str(data))
    }

    /// Check whether a digest is held by some leaf of this tree
    ///
    /// This is what a verifier calls after hashing the claimed data itself.
    pub fn contains_digest(&self, digest: Digest) -> bool {
        self.root.contains(digest)
    }

    /// Build a proof tree for a data item
    ///
    /// The result is a reduced snapshot, sized proportional to the target
    /// leaf's depth: along the path to the target every sibling subtree is
    /// collapsed to a single digest-only leaf. Its root digest equals this
    /// tree's root digest, so a holder of the published root can verify
    /// membership with [`verify_root_hash`](MerkleTree::verify_root_hash).
    ///
    /// Fails with [`Error::NotFound`] if the item is not in the tree; no
    /// proof of non-membership is supported.
    pub fn proof_tree_for(&self, data: &str) -> Result<MerkleTree> {
        let target = Digest::of_str(data);
        if !self.root.contains(target) {
            return Err(Error::NotFound(target.to_hex()));
        }
        Ok(MerkleTree {
            root: self.root.prove(target),
        })
    }

    /// The current root digest
    pub fn root_hash(&self) -> Digest {
        self.root.digest()
    }

    /// Recompute the root digest from the leaves up
    ///
    /// Stored branch digests are ignored, so a tree whose structure was
    /// tampered with recomputes to a different root than it reports.
    pub fn recalculate_root_hash(&self) -> Digest {
        self.root.recalculate()
    }

    /// Check that the recomputed root digest equals a known root
    pub fn verify_root_hash(&self, known_root: Digest) -> bool {
        self.recalculate_root_hash() == known_root
    }

    /// Number of leaves in the tree
    ///
    /// Counts inserted items in a source tree; in a proof tree the pruned
    /// stubs count as leaves too.
    pub fn size(&self) -> usize {
        self.root.leaf_count()
    }
}
