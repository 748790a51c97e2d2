// SPDX-License-Identifier: CC0-1.0

//! # DAG Core Library
//!
//! Block primitives, their consensus encoding, and the genesis parameters every
//! supported network boots from.
//!
//! The genesis catalog is built once, checked against its declared hashes, and
//! only then handed out for lookups:
//!
//! ```rust
//! use dagcore::genesis::lookup_genesis;
//!
//! let entry = lookup_genesis("devnet").expect("devnet is a supported network");
//! assert!(entry.block().header.is_genesis());
//! assert_eq!(entry.block().block_hash(), entry.hash());
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "serde")]
extern crate actual_serde as serde;

pub extern crate hashes;

#[macro_use]
mod internal_macros;

pub mod blockdata;
pub mod consensus;
pub mod genesis;
pub mod hash_types;
pub mod merkle_tree;
pub mod pow;

pub use dag_network::{Network, UnknownNetworkError};

pub use crate::blockdata::block::{self, Block, Header};
pub use crate::blockdata::constants;
pub use crate::blockdata::script::ScriptBuf;
pub use crate::blockdata::transaction::{
    self, OutPoint, SubnetworkId, Transaction, TxIn, TxOut,
};
pub use crate::genesis::{GenesisCatalog, GenesisEntry, GenesisIntegrityError};
pub use crate::hash_types::{
    AcceptedIdMerkleRoot, BlockHash, TxHash, TxMerkleNode, Txid, UtxoCommitment,
};
pub use crate::pow::CompactTarget;
