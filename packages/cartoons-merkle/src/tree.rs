use crate::{hash_pair, leaf_hash, to_hex, Hash};

/// Off-chain tree builder, used to produce roots for `PlantNewRoot` and
/// proofs for `WhitelistMint`. An odd node at the end of a layer is carried
/// up unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleTree {
    layers: Vec<Vec<Hash>>,
}

impl MerkleTree {
    pub fn new(leaves: Vec<Hash>) -> Self {
        let mut layers = vec![leaves];
        while layers.last().map_or(false, |layer| layer.len() > 1) {
            let next = layers
                .last()
                .map(|layer| {
                    layer
                        .chunks(2)
                        .map(|pair| match pair.get(1) {
                            Some(right) => hash_pair(&pair[0], right),
                            None => pair[0],
                        })
                        .collect()
                })
                .unwrap_or_default();
            layers.push(next);
        }
        MerkleTree { layers }
    }

    pub fn from_addresses(addresses: &[&str]) -> Self {
        Self::new(addresses.iter().map(|a| leaf_hash(a)).collect())
    }

    /// Root of the tree, all zeroes for an empty tree
    pub fn root(&self) -> Hash {
        self.layers
            .last()
            .and_then(|layer| layer.first())
            .copied()
            .unwrap_or_default()
    }

    pub fn hex_root(&self) -> String {
        format!("0x{}", to_hex(&self.root()))
    }

    pub fn leaves(&self) -> &[Hash] {
        self.layers.first().map(Vec::as_slice).unwrap_or_default()
    }

    /// Sibling path for `leaf`, or `None` if it is not in the tree
    pub fn proof(&self, leaf: &Hash) -> Option<Vec<Hash>> {
        let mut index = self.leaves().iter().position(|l| l == leaf)?;
        let mut proof = vec![];
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling = if index % 2 == 1 { index - 1 } else { index + 1 };
            if let Some(node) = layer.get(sibling) {
                proof.push(*node);
            }
            index /= 2;
        }
        Some(proof)
    }

    /// `0x` prefixed proof for `address`; empty when it is not a member
    pub fn hex_proof(&self, address: &str) -> Vec<String> {
        self.proof(&leaf_hash(address))
            .unwrap_or_default()
            .iter()
            .map(|node| format!("0x{}", to_hex(node)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_leaf_is_promoted() {
        let leaves: Vec<Hash> = ["a", "b", "c"].iter().map(|a| leaf_hash(a)).collect();
        let tree = MerkleTree::new(leaves.clone());

        let ab = hash_pair(&leaves[0], &leaves[1]);
        assert_eq!(tree.root(), hash_pair(&ab, &leaves[2]));
        // "c" has no sibling on the first layer
        assert_eq!(tree.proof(&leaves[2]).unwrap(), vec![ab]);
        assert_eq!(tree.proof(&leaves[0]).unwrap(), vec![leaves[1], leaves[2]]);
    }

    #[test]
    fn empty_tree() {
        let tree = MerkleTree::new(vec![]);
        assert_eq!(tree.root(), [0u8; 32]);
        assert!(tree.proof(&leaf_hash("a")).is_none());
    }

    #[test]
    fn adding_a_member_changes_the_root() {
        let six = MerkleTree::from_addresses(&["1", "2", "3", "4", "5", "6"]);
        let seven = MerkleTree::from_addresses(&["1", "2", "3", "4", "5", "6", "7"]);
        assert_ne!(six.root(), seven.root());
        assert_eq!(seven.leaves().len(), 7);
    }
}
