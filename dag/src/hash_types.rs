// SPDX-License-Identifier: CC0-1.0

//! DAG hash types.
//!
//! This module defines types for hashes used throughout the library. These
//! types are needed in order to avoid mixing data of the same hash format
//! (e.g. `SHA256d`) but of different meaning (such as transaction id, block
//! hash).

use hashes::{hash_newtype, sha256d};

hash_newtype! {
    /// A DAG block hash: the double-SHA256 of a serialized block header.
    pub struct BlockHash(sha256d::Hash);
    /// A transaction id. Signature scripts of non-coinbase transactions do not contribute to it.
    pub struct Txid(sha256d::Hash);
    /// The hash of a fully serialized transaction, signature scripts included.
    pub struct TxHash(sha256d::Hash);
    /// A hash of the Merkle tree branch or root for transactions.
    pub struct TxMerkleNode(sha256d::Hash);
    /// Merkle root over the ids of the transactions a block accepts.
    pub struct AcceptedIdMerkleRoot(sha256d::Hash);
    /// Commitment to the UTXO set as of a block.
    pub struct UtxoCommitment(sha256d::Hash);
}

impl_hashencode!(BlockHash);
impl_hashencode!(Txid);
impl_hashencode!(TxHash);
impl_hashencode!(TxMerkleNode);
impl_hashencode!(AcceptedIdMerkleRoot);
impl_hashencode!(UtxoCommitment);
