// SPDX-License-Identifier: CC0-1.0

//! DAG merkle tree functions.
//!
//! Leaves are hashed pairwise, level by level, with double-SHA256 over the
//! concatenation of the two children. A level with an odd number of nodes
//! pairs its last node with itself.
//!
//! # Examples
//!
//! ```
//! # use dagcore::hashes::{sha256d, Hash};
//! # use dagcore::merkle_tree;
//! let leaf = sha256d::Hash::hash(b"coinbase");
//! assert_eq!(merkle_tree::calculate_root([leaf]), Some(leaf));
//! assert_eq!(merkle_tree::calculate_root(Vec::<sha256d::Hash>::new()), None);
//! ```

use hashes::{Hash, HashEngine, sha256d};

/// Calculates the merkle root of a list of leaf hashes.
///
/// Returns `None` if `hashes` is empty. A single leaf is its own root.
pub fn calculate_root<I>(hashes: I) -> Option<sha256d::Hash>
where
    I: IntoIterator<Item = sha256d::Hash>,
{
    let mut level: Vec<sha256d::Hash> = hashes.into_iter().collect();
    if level.is_empty() {
        return None;
    }

    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                let left = pair[0];
                let right = pair.get(1).copied().unwrap_or(left);
                let mut engine = sha256d::Hash::engine();
                engine.input(left.as_byte_array());
                engine.input(right.as_byte_array());
                sha256d::Hash::from_engine(engine)
            })
            .collect();
    }

    level.pop()
}

#[cfg(test)]
mod tests {
    use hex_lit::hex;

    use super::*;

    fn genesis_merkle_leaf() -> sha256d::Hash {
        sha256d::Hash::from_byte_array(hex!(
            "d4dc8bb876579d7de99daedbf822d20da2e0bbbeedb0dbbaeb184d4201ffed9d"
        ))
    }

    #[test]
    fn single_leaf_is_root() {
        let leaf = genesis_merkle_leaf();
        assert_eq!(calculate_root([leaf]), Some(leaf));
    }

    #[test]
    fn two_leaves_hash_concatenation() {
        let leaf = genesis_merkle_leaf();
        let root = calculate_root([leaf, leaf]).unwrap();
        assert_eq!(
            root.to_byte_array(),
            hex!("fae7e4370eb9610fb92637fe89408a86c01589e9d7031532aff74aad721a3d99")
        );
    }

    #[test]
    fn odd_level_duplicates_last_node() {
        let a = sha256d::Hash::hash(b"a");
        let b = sha256d::Hash::hash(b"b");
        let c = sha256d::Hash::hash(b"c");
        assert_eq!(calculate_root([a, b, c]), calculate_root([a, b, c, c]));
        assert_ne!(calculate_root([a, b, c]), calculate_root([a, b]));
        assert_ne!(calculate_root([a, b]), calculate_root([b, a]));
    }
}
