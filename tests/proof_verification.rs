//! Proof Verification Tests
//!
//! These tests play out the full protocol between a dataset owner and a
//! verifier: the owner publishes a root digest and hands out a proof tree,
//! and the verifier re-derives everything from the proof alone.

use prooftree::{Digest, Error, MerkleTree};

/// Build a tree from the string values of the integers 0 to 1000.
fn big_tree() -> MerkleTree {
    let mut tree = MerkleTree::new("0");
    for i in 1..=1000 {
        tree.insert(&i.to_string());
    }
    tree
}

// ============================================================================
// Owner Side
// ============================================================================

#[test]
fn test_big_tree_membership_and_size() {
    let tree = big_tree();
    assert_eq!(tree.size(), 1001);
    assert!(tree.contains("42"));
    assert!(!tree.contains("3.14"));
}

#[test]
fn test_proof_is_much_smaller_than_tree() {
    let tree = big_tree();
    let proof = tree.proof_tree_for("42").unwrap();

    assert!(proof.contains("42"));
    assert!(!proof.contains("3.14"));
    // One kept path plus one stub per level: proof size is on the order of
    // the leaf's depth, far below the 1001 leaves of the source tree.
    assert!(proof.size() < tree.size() / 10);
}

#[test]
fn test_proof_request_for_absent_data_fails() {
    let tree = big_tree();
    match tree.proof_tree_for("not-present") {
        Err(Error::NotFound(hex)) => {
            assert_eq!(hex, Digest::of_str("not-present").to_hex());
        }
        other => panic!("expected NotFound, got {:?}", other.map(|p| p.size())),
    }
}

// ============================================================================
// Verifier Side
// ============================================================================

#[test]
fn test_proof_verification_round_trip() {
    let tree = big_tree();

    // Assume the merkle root is published openly by the owner of the data
    // set, and the proof tree is all the owner sends us.
    let root = tree.root_hash();
    let proof = tree.proof_tree_for("42").unwrap();

    // We hash the claimed data ourselves because we don't trust the owner,
    // and check that our digest is indeed in the proof tree.
    let our_digest = Digest::of_str("42");
    assert!(proof.contains_digest(our_digest));

    // Then we re-hash from the leaves up to the root and compare against
    // the published root digest.
    assert_eq!(proof.recalculate_root_hash(), root);
    assert!(proof.verify_root_hash(root));
}

#[test]
fn test_proof_survives_transport() {
    let tree = big_tree();
    let root = tree.root_hash();
    let proof = tree.proof_tree_for("42").unwrap();

    // The owner ships the proof over the wire; the verifier decodes it and
    // runs the same checks on the reconstructed tree.
    let wire = bincode::serialize(&proof).unwrap();
    let received: MerkleTree = bincode::deserialize(&wire).unwrap();

    assert!(received.contains_digest(Digest::of_str("42")));
    assert!(received.verify_root_hash(root));
}

#[test]
fn test_proof_does_not_vouch_for_other_items() {
    let tree = big_tree();
    let root = tree.root_hash();

    // A proof for a different item does not verify a claim about "42"
    // unless that item's digest is checked instead.
    let proof = tree.proof_tree_for("7").unwrap();
    assert!(!proof.contains_digest(Digest::of_str("42")));
    // It still recomputes to the same published root, though.
    assert!(proof.verify_root_hash(root));

    // A root from some other dataset never verifies.
    let other_root = Digest::of_str("another dataset entirely");
    assert!(!proof.verify_root_hash(other_root));
}
