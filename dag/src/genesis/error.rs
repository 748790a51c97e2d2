// SPDX-License-Identifier: CC0-1.0

//! Genesis integrity errors.

use core::fmt;

use thiserror::Error;

use crate::Network;
use crate::hash_types::{BlockHash, TxMerkleNode};

/// The part of a genesis entry an integrity check failed on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GenesisField {
    /// The header's parent hash set.
    ParentHashes,
    /// The block's transaction list.
    Transactions,
    /// The coinbase transaction's input.
    CoinbaseInput,
    /// The coinbase transaction's output.
    CoinbaseOutput,
    /// The coinbase transaction's subnetwork fields.
    CoinbaseSubnetwork,
    /// The header's accepted-id merkle root.
    AcceptedIdMerkleRoot,
    /// The header's UTXO commitment.
    UtxoCommitment,
    /// The merkle root recomputed from the block's transactions.
    TransactionsMerkleRoot,
    /// The merkle root recorded in the header.
    HeaderMerkleRoot,
    /// The block hash.
    Hash,
}

impl fmt::Display for GenesisField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            GenesisField::ParentHashes => "parent hashes",
            GenesisField::Transactions => "transactions",
            GenesisField::CoinbaseInput => "coinbase input",
            GenesisField::CoinbaseOutput => "coinbase output",
            GenesisField::CoinbaseSubnetwork => "coinbase subnetwork",
            GenesisField::AcceptedIdMerkleRoot => "accepted id merkle root",
            GenesisField::UtxoCommitment => "utxo commitment",
            GenesisField::TransactionsMerkleRoot => "transactions merkle root",
            GenesisField::HeaderMerkleRoot => "header merkle root",
            GenesisField::Hash => "hash",
        };
        f.write_str(name)
    }
}

/// A genesis entry disagrees with what its own contents compute to.
///
/// This is a constants-authoring defect. A node must not start with it, since
/// it would silently fork from every correctly built node.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenesisIntegrityError {
    #[error("{network} genesis: malformed {field}: {reason}")]
    Malformed { network: Network, field: GenesisField, reason: &'static str },

    #[error("{network} genesis: {field} mismatch: expected {expected}, computed {computed}")]
    MerkleRootMismatch {
        network: Network,
        field: GenesisField,
        expected: TxMerkleNode,
        computed: TxMerkleNode,
    },

    #[error("{network} genesis: hash mismatch: expected {expected}, computed {computed}")]
    HashMismatch { network: Network, expected: BlockHash, computed: BlockHash },

    #[error("{0} genesis: declared more than once")]
    DuplicateNetwork(Network),

    #[error("{0} genesis: missing from catalog")]
    MissingNetwork(Network),
}

impl GenesisIntegrityError {
    /// The network whose entry failed the check.
    pub fn network(&self) -> Network {
        match self {
            GenesisIntegrityError::Malformed { network, .. }
            | GenesisIntegrityError::MerkleRootMismatch { network, .. }
            | GenesisIntegrityError::HashMismatch { network, .. } => *network,
            GenesisIntegrityError::DuplicateNetwork(network)
            | GenesisIntegrityError::MissingNetwork(network) => *network,
        }
    }

    /// The field the check failed on, if the failure is about a single entry's contents.
    pub fn field(&self) -> Option<GenesisField> {
        match self {
            GenesisIntegrityError::Malformed { field, .. }
            | GenesisIntegrityError::MerkleRootMismatch { field, .. } => Some(*field),
            GenesisIntegrityError::HashMismatch { .. } => Some(GenesisField::Hash),
            GenesisIntegrityError::DuplicateNetwork(_)
            | GenesisIntegrityError::MissingNetwork(_) => None,
        }
    }
}
