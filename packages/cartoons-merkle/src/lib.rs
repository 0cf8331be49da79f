//! Merkle allowlist proofs.
//!
//! Leaves are `keccak256(address)` and every inner node is the hash of its two
//! children in ascending byte order, so proofs carry no left/right flags. This
//! matches trees built off-chain with `merkletreejs` and `{ sortPairs: true }`.

use sha3::{Digest, Keccak256};
use thiserror::Error;

mod tree;

pub use tree::MerkleTree;

pub type Hash = [u8; 32];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MerkleError {
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[error("Invalid hash length: expected 32 bytes, got {0}")]
    InvalidLength(usize),
}

pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Leaf for an allowlisted address
pub fn leaf_hash(address: &str) -> Hash {
    keccak256(address.as_bytes())
}

/// Combines two nodes independently of which side each came from
pub fn hash_pair(a: &Hash, b: &Hash) -> Hash {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(lo);
    buf[32..].copy_from_slice(hi);
    keccak256(&buf)
}

/// Recomputes the root from `address` and its sibling path and compares it
/// against `root`. Never fails; any mismatch is simply `false`.
pub fn verify(root: &Hash, address: &str, proof: &[Hash]) -> bool {
    let computed = proof
        .iter()
        .fold(leaf_hash(address), |node, sibling| hash_pair(&node, sibling));
    &computed == root
}

/// Same as [`verify`] for hex encoded input. Malformed root or proof
/// elements make the proof invalid rather than raising.
pub fn verify_hex(root: &str, address: &str, proof: &[String]) -> bool {
    let root = match parse_hash(root) {
        Ok(root) => root,
        Err(_) => return false,
    };
    let proof = match proof
        .iter()
        .map(|p| parse_hash(p))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(proof) => proof,
        Err(_) => return false,
    };
    verify(&root, address, &proof)
}

/// Parses a 32 byte hash, with or without a `0x` prefix
pub fn parse_hash(input: &str) -> Result<Hash, MerkleError> {
    let trimmed = input.trim();
    let stripped = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let bytes = hex::decode(stripped).map_err(|e| MerkleError::InvalidHex(e.to_string()))?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| MerkleError::InvalidLength(len))
}

/// Lowercase hex, no prefix
pub fn to_hex(hash: &Hash) -> String {
    hex::encode(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMBERS: [&str; 6] = [
        "whitelist1",
        "whitelist2",
        "whitelist3",
        "whitelist4",
        "whitelist5",
        "whitelist6",
    ];

    #[test]
    fn hash_pair_is_order_independent() {
        let a = leaf_hash("a");
        let b = leaf_hash("b");
        assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));
        assert_ne!(hash_pair(&a, &b), hash_pair(&a, &a));
    }

    #[test]
    fn every_member_verifies() {
        let tree = MerkleTree::from_addresses(&MEMBERS);
        for member in MEMBERS {
            let proof = tree.proof(&leaf_hash(member)).unwrap();
            assert!(verify(&tree.root(), member, &proof), "{member}");
        }
    }

    #[test]
    fn proof_is_bound_to_its_address() {
        let tree = MerkleTree::from_addresses(&MEMBERS);
        let proof = tree.proof(&leaf_hash("whitelist1")).unwrap();
        assert!(!verify(&tree.root(), "whitelist2", &proof));
        assert!(!verify(&tree.root(), "hacker", &proof));
    }

    #[test]
    fn proof_from_other_tree_is_rejected() {
        let tree = MerkleTree::from_addresses(&MEMBERS);
        let mut with_hacker = MEMBERS.to_vec();
        with_hacker.push("hacker");
        let hacker_tree = MerkleTree::from_addresses(&with_hacker);

        let proof = hacker_tree.proof(&leaf_hash("hacker")).unwrap();
        assert!(verify(&hacker_tree.root(), "hacker", &proof));
        assert!(!verify(&tree.root(), "hacker", &proof));

        // non-member of the unmodified tree gets an empty proof
        assert!(tree.hex_proof("hacker").is_empty());
        assert!(!verify_hex(&tree.hex_root(), "hacker", &[]));
    }

    #[test]
    fn tampered_proof_fails() {
        let tree = MerkleTree::from_addresses(&MEMBERS);
        let mut proof = tree.proof(&leaf_hash("whitelist3")).unwrap();
        proof[0][0] ^= 0x01;
        assert!(!verify(&tree.root(), "whitelist3", &proof));

        let mut proof = tree.proof(&leaf_hash("whitelist3")).unwrap();
        proof.pop();
        assert!(!verify(&tree.root(), "whitelist3", &proof));
    }

    #[test]
    fn single_member_tree_has_empty_proof() {
        let tree = MerkleTree::from_addresses(&["solo"]);
        assert_eq!(tree.root(), leaf_hash("solo"));
        assert!(verify(&tree.root(), "solo", &[]));
        assert!(!verify(&tree.root(), "other", &[]));
    }

    #[test]
    fn hex_round_trip_accepts_prefix() {
        let tree = MerkleTree::from_addresses(&MEMBERS);
        let prefixed = tree.hex_proof("whitelist5");
        assert!(prefixed.iter().all(|p| p.starts_with("0x")));
        assert!(verify_hex(&tree.hex_root(), "whitelist5", &prefixed));

        let bare: Vec<String> = prefixed
            .iter()
            .map(|p| p.trim_start_matches("0x").to_uppercase())
            .collect();
        assert!(verify_hex(&to_hex(&tree.root()), "whitelist5", &bare));
    }

    #[test]
    fn malformed_hex_is_not_a_member() {
        let tree = MerkleTree::from_addresses(&MEMBERS);
        let mut proof = tree.hex_proof("whitelist2");
        proof[0] = "0xnot-hex".to_string();
        assert!(!verify_hex(&tree.hex_root(), "whitelist2", &proof));

        let proof = tree.hex_proof("whitelist2");
        assert!(!verify_hex("0x1234", "whitelist2", &proof));
    }

    #[test]
    fn parse_hash_errors() {
        assert_eq!(parse_hash("0xabcd"), Err(MerkleError::InvalidLength(2)));
        assert!(matches!(parse_hash("zz"), Err(MerkleError::InvalidHex(_))));
        let hash = leaf_hash("x");
        assert_eq!(parse_hash(&format!("0x{}", to_hex(&hash))), Ok(hash));
    }
}
