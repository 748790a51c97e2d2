// SPDX-License-Identifier: CC0-1.0

//! DAG blocks.
//!
//! A block is a bundle of transactions with a proof-of-work attached,
//! which commits to one or more parent blocks so as to form a directed
//! acyclic graph of blocks.
//!

use core::fmt;
use std::io;

use hashes::Hash;

use crate::blockdata::transaction::Transaction;
use crate::consensus::encode::{self, Decodable, Encodable, serialize};
use crate::hash_types::{AcceptedIdMerkleRoot, BlockHash, TxMerkleNode, UtxoCommitment};
use crate::merkle_tree;
use crate::pow::CompactTarget;

/// The most parents a header can reference; the count is encoded in a single byte.
pub const MAX_PARENTS: usize = u8::MAX as usize;

/// Size in bytes of an encoded header without parents.
pub const BASE_HEADER_SIZE: usize = 4 + 1 + 32 * 3 + 8 + 4 + 8;

/// DAG block header.
///
/// Contains all the block's information except the actual transactions, but
/// including a root of a [merkle tree] committing to all transactions in the block.
///
/// [merkle tree]: https://en.wikipedia.org/wiki/Merkle_tree
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "actual_serde"))]
pub struct Header {
    /// Block version, now repurposed for soft fork signalling.
    pub version: Version,
    /// References to the parent blocks. Empty only for a genesis block.
    pub parent_hashes: Vec<BlockHash>,
    /// The root hash of the merkle tree of transactions in the block.
    pub hash_merkle_root: TxMerkleNode,
    /// The root hash of the merkle tree of the ids of accepted transactions.
    pub accepted_id_merkle_root: AcceptedIdMerkleRoot,
    /// Commitment to the UTXO set after this block.
    pub utxo_commitment: UtxoCommitment,
    /// The timestamp of the block, as claimed by the miner, in Unix seconds.
    pub timestamp: i64,
    /// The target value below which the blockhash must lie.
    pub bits: CompactTarget,
    /// The nonce, selected to obtain a low enough blockhash.
    pub nonce: u64,
}

impl Header {
    /// Returns the block hash.
    ///
    /// # Panics
    ///
    /// If the header references more than [`MAX_PARENTS`] parents.
    pub fn block_hash(&self) -> BlockHash {
        BlockHash::hash(&serialize(self))
    }

    /// Returns the block hash, or an `InvalidInput` error if the header
    /// references more than [`MAX_PARENTS`] parents.
    pub fn checked_block_hash(&self) -> Result<BlockHash, io::Error> {
        let mut buf = Vec::with_capacity(self.size());
        self.consensus_encode(&mut buf)?;
        Ok(BlockHash::hash(&buf))
    }

    /// Whether this header starts a DAG: it has no parents.
    pub fn is_genesis(&self) -> bool {
        self.parent_hashes.is_empty()
    }

    /// Returns the total encoded size of this header in bytes.
    pub fn size(&self) -> usize {
        BASE_HEADER_SIZE + 32 * self.parent_hashes.len()
    }
}

impl Encodable for Header {
    fn consensus_encode<W: io::Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
        let parent_count = u8::try_from(self.parent_hashes.len()).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidInput, "too many parent hashes for a header")
        })?;
        let mut len = 0;
        len += self.version.consensus_encode(w)?;
        len += parent_count.consensus_encode(w)?;
        for parent in &self.parent_hashes {
            len += parent.consensus_encode(w)?;
        }
        len += self.hash_merkle_root.consensus_encode(w)?;
        len += self.accepted_id_merkle_root.consensus_encode(w)?;
        len += self.utxo_commitment.consensus_encode(w)?;
        len += self.timestamp.consensus_encode(w)?;
        len += self.bits.consensus_encode(w)?;
        len += self.nonce.consensus_encode(w)?;
        Ok(len)
    }
}

impl Decodable for Header {
    fn consensus_decode<R: io::Read + ?Sized>(r: &mut R) -> Result<Self, encode::Error> {
        let version = Version::consensus_decode(r)?;
        let parent_count = u8::consensus_decode(r)?;
        let parent_hashes = (0..parent_count)
            .map(|_| BlockHash::consensus_decode(r))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Header {
            version,
            parent_hashes,
            hash_merkle_root: Decodable::consensus_decode(r)?,
            accepted_id_merkle_root: Decodable::consensus_decode(r)?,
            utxo_commitment: Decodable::consensus_decode(r)?,
            timestamp: Decodable::consensus_decode(r)?,
            bits: Decodable::consensus_decode(r)?,
            nonce: Decodable::consensus_decode(r)?,
        })
    }
}

/// DAG block version number.
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "actual_serde"))]
pub struct Version(i32);

impl Version {
    /// The original DAG block version.
    pub const ONE: Self = Self(1);

    /// Creates a [`Version`] from a signed 32 bit integer value.
    #[inline]
    pub const fn from_consensus(v: i32) -> Self {
        Version(v)
    }

    /// Returns the inner `i32` value.
    #[inline]
    pub const fn to_consensus(self) -> i32 {
        self.0
    }
}

impl Default for Version {
    fn default() -> Version {
        Self::ONE
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Encodable for Version {
    fn consensus_encode<W: io::Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
        self.0.consensus_encode(w)
    }
}

impl Decodable for Version {
    fn consensus_decode<R: io::Read + ?Sized>(r: &mut R) -> Result<Self, encode::Error> {
        Decodable::consensus_decode(r).map(Version)
    }
}

/// DAG block.
///
/// A collection of transactions with an attached proof of work.
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "actual_serde"))]
pub struct Block {
    /// The block header
    pub header: Header,
    /// List of transactions contained in the block
    pub txdata: Vec<Transaction>,
}

impl_consensus_encoding!(Block, header, txdata);

impl Block {
    /// Returns the block hash.
    pub fn block_hash(&self) -> BlockHash {
        self.header.block_hash()
    }

    /// Computes the transaction merkle root.
    ///
    /// Returns `None` for a block without transactions.
    pub fn compute_merkle_root(&self) -> Option<TxMerkleNode> {
        let hashes = self.txdata.iter().map(|tx| tx.tx_hash().to_raw_hash());
        merkle_tree::calculate_root(hashes).map(TxMerkleNode::from_raw_hash)
    }

    /// Checks if the merkle root of the header matches the merkle root of the transaction list.
    pub fn check_merkle_root(&self) -> bool {
        match self.compute_merkle_root() {
            Some(merkle_root) => self.header.hash_merkle_root == merkle_root,
            None => false,
        }
    }

    /// Returns the coinbase transaction, if one is present.
    pub fn coinbase(&self) -> Option<&Transaction> {
        self.txdata.first().filter(|tx| tx.is_coinbase())
    }
}
