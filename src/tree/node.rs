//! Merkle tree node types

use crate::model::Digest;
use serde::{Deserialize, Serialize};

/// A node in the merkle tree
///
/// A node is a branch exactly when it has children, and every branch has
/// two. Digest-only stubs inside proof trees are ordinary leaves, so every
/// read-only operation treats "no children" as the one leaf case.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum TreeNode {
    /// A leaf holding the digest of one inserted data item, or the top
    /// digest of a subtree pruned out of a proof tree
    Leaf {
        /// The item (or pruned subtree) digest
        digest: Digest,
    },
    /// An interior node whose digest commits to both children
    Branch {
        /// `digest(left.digest || right.digest)`
        digest: Digest,
        /// Subtree holding the numerically smaller digests
        left: Box<TreeNode>,
        /// Subtree holding the numerically larger digests
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    /// Create a leaf node
    pub fn leaf(digest: Digest) -> Self {
        TreeNode::Leaf { digest }
    }

    /// The digest stored at this node
    pub fn digest(&self) -> Digest {
        match self {
            TreeNode::Leaf { digest } | TreeNode::Branch { digest, .. } => *digest,
        }
    }

    /// Check whether this node has no children
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Insert a digest below this node, recomputing digests along the path
    ///
    /// A leaf is promoted to a branch over the two digests in numeric order;
    /// a branch descends left when the new digest sorts below the right
    /// subtree's minimum, right otherwise. No rebalancing ever happens.
    pub(crate) fn insert(&mut self, new_digest: Digest) {
        match self {
            TreeNode::Leaf { digest } => {
                let existing = *digest;
                let (small, large) = if new_digest < existing {
                    (new_digest, existing)
                } else {
                    (existing, new_digest)
                };
                *self = TreeNode::Branch {
                    digest: combine(small, large),
                    left: Box::new(TreeNode::leaf(small)),
                    right: Box::new(TreeNode::leaf(large)),
                };
            }
            TreeNode::Branch {
                digest,
                left,
                right,
            } => {
                if new_digest < right.min_digest() {
                    left.insert(new_digest);
                } else {
                    right.insert(new_digest);
                }
                *digest = combine(left.digest(), right.digest());
            }
        }
    }

    /// Digest of the left-most leaf below this node
    ///
    /// Recomputed on every call; a cached copy would go stale under later
    /// inserts.
    fn min_digest(&self) -> Digest {
        match self {
            TreeNode::Leaf { digest } => *digest,
            TreeNode::Branch { left, .. } => left.min_digest(),
        }
    }

    /// Check whether some reachable leaf holds exactly this digest
    ///
    /// Both children are searched; placement order is not used to prune.
    pub fn contains(&self, target: Digest) -> bool {
        match self {
            TreeNode::Leaf { digest } => *digest == target,
            TreeNode::Branch { left, right, .. } => {
                left.contains(target) || right.contains(target)
            }
        }
    }

    /// Build the reduced copy used as a membership proof
    ///
    /// The side holding `target` is kept recursively; the other side
    /// collapses to a digest-only leaf. The caller must have established
    /// that `target` is present.
    pub(crate) fn prove(&self, target: Digest) -> TreeNode {
        match self {
            TreeNode::Leaf { .. } => self.clone(),
            TreeNode::Branch {
                digest,
                left,
                right,
            } => {
                let (left, right) = if left.contains(target) {
                    (left.prove(target), TreeNode::leaf(right.digest()))
                } else {
                    (TreeNode::leaf(left.digest()), right.prove(target))
                };
                TreeNode::Branch {
                    digest: *digest,
                    left: Box::new(left),
                    right: Box::new(right),
                }
            }
        }
    }

    /// Recompute this subtree's digest from the leaves up, ignoring the
    /// stored branch digests
    pub fn recalculate(&self) -> Digest {
        match self {
            TreeNode::Leaf { digest } => *digest,
            TreeNode::Branch { left, right, .. } => {
                combine(left.recalculate(), right.recalculate())
            }
        }
    }

    /// Number of leaves below (and including) this node
    pub fn leaf_count(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Branch { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Digest of a branch: hash of the children's digests, left bytes first
fn combine(left: Digest, right: Digest) -> Digest {
    Digest::of_parts(&[left.as_bytes(), right.as_bytes()])
}
