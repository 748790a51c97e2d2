// SPDX-License-Identifier: CC0-1.0

//! Blockdata constants.
//!
//! This module provides various constants relating to the DAG and consensus
//! code. In particular, it defines the genesis block of every network and its
//! single coinbase transaction.
//!
//! Mainnet, regtest, testnet3 and simnet share one genesis block. Devnet keeps
//! the same coinbase transaction and merkle root but was mined at its own
//! difficulty, so its header and hash differ.
//!

use hashes::Hash;

use crate::Network;
use crate::blockdata::block::{self, Block};
use crate::blockdata::script::{OP_TRUE, ScriptBuf};
use crate::blockdata::transaction::{OutPoint, Transaction, TxIn, TxOut};
use crate::hash_types::{AcceptedIdMerkleRoot, TxMerkleNode, UtxoCommitment};
use crate::pow::CompactTarget;

/// How many atomic units are in one coin.
pub const COIN_VALUE: u64 = 100_000_000;

/// Value of the single output of the genesis coinbase transaction.
pub const GENESIS_COINBASE_VALUE: u64 = 0x12a05f200;

/// Signature script of the genesis coinbase input: `"\0\0\x0b/P2SH/btcd/"`.
#[rustfmt::skip]
pub const GENESIS_COINBASE_SCRIPT: [u8; 14] = [
    0x00, 0x00, 0x0b, 0x2f, 0x50, 0x32, 0x53, 0x48,
    0x2f, 0x62, 0x74, 0x63, 0x64, 0x2f,
];

/// Timestamp shared by every genesis header, in Unix seconds.
pub const GENESIS_TIMESTAMP: i64 = 0x5cdac4b0;

/// Difficulty bits of the shared genesis header.
pub const GENESIS_BITS: u32 = 0x207fffff;

/// Nonce of the shared genesis header.
pub const GENESIS_NONCE: u64 = 0;

/// Difficulty bits of the devnet genesis header.
pub const DEVNET_GENESIS_BITS: u32 = 0x1e7fffff;

/// Nonce of the devnet genesis header.
pub const DEVNET_GENESIS_NONCE: u64 = 0xc79c;

/// Hash of the genesis block shared by mainnet, regtest, testnet3 and simnet, in raw byte order.
#[rustfmt::skip]
pub const GENESIS_HASH: [u8; 32] = [
    0xdc, 0x5f, 0x5b, 0x5b, 0x1d, 0xc2, 0xa7, 0x25,
    0x49, 0xd5, 0x1d, 0x4d, 0xee, 0xd7, 0xa4, 0x8b,
    0xaf, 0xd3, 0x14, 0x4b, 0x56, 0x78, 0x98, 0xb1,
    0x8c, 0xfd, 0x9f, 0x69, 0xdd, 0xcf, 0xbb, 0x63,
];

/// Merkle root of the genesis transactions, in raw byte order. Shared by every network.
#[rustfmt::skip]
pub const GENESIS_MERKLE_ROOT: [u8; 32] = [
    0xd4, 0xdc, 0x8b, 0xb8, 0x76, 0x57, 0x9d, 0x7d,
    0xe9, 0x9d, 0xae, 0xdb, 0xf8, 0x22, 0xd2, 0x0d,
    0xa2, 0xe0, 0xbb, 0xbe, 0xed, 0xb0, 0xdb, 0xba,
    0xeb, 0x18, 0x4d, 0x42, 0x01, 0xff, 0xed, 0x9d,
];

/// Hash of the devnet genesis block, in raw byte order.
#[rustfmt::skip]
pub const DEVNET_GENESIS_HASH: [u8; 32] = [
    0xab, 0x03, 0xe2, 0x8e, 0xd4, 0x66, 0xf9, 0x75,
    0x21, 0xd8, 0x8b, 0x49, 0xb2, 0xb4, 0xeb, 0xc6,
    0x4a, 0x03, 0xbf, 0x9b, 0x41, 0xcb, 0x36, 0x79,
    0x33, 0x03, 0xc4, 0x4d, 0x37, 0x17, 0x00, 0x00,
];

/// Constructs and returns the coinbase (and only) transaction of every genesis block.
pub fn genesis_coinbase_tx() -> Transaction {
    // Inputs
    let input = TxIn {
        previous_output: OutPoint::null(),
        signature_script: ScriptBuf::from(&GENESIS_COINBASE_SCRIPT[..]),
        sequence: TxIn::MAX_SEQUENCE,
    };

    // Outputs
    let output =
        TxOut { value: GENESIS_COINBASE_VALUE, script_pubkey: ScriptBuf::from(vec![OP_TRUE]) };

    Transaction::new_native(1, vec![input], vec![output])
}

/// Constructs a genesis header over `merkle_root` with the given proof of work.
pub(crate) fn genesis_header(merkle_root: TxMerkleNode, bits: u32, nonce: u64) -> block::Header {
    block::Header {
        version: block::Version::ONE,
        parent_hashes: vec![],
        hash_merkle_root: merkle_root,
        accepted_id_merkle_root: AcceptedIdMerkleRoot::all_zeros(),
        utxo_commitment: UtxoCommitment::all_zeros(),
        timestamp: GENESIS_TIMESTAMP,
        bits: CompactTarget::from_consensus(bits),
        nonce,
    }
}

/// Returns the proof of work the genesis header of `network` was mined with.
pub(crate) fn genesis_pow(network: Network) -> (u32, u64) {
    match network {
        Network::Mainnet | Network::Regtest | Network::Testnet3 | Network::Simnet => {
            (GENESIS_BITS, GENESIS_NONCE)
        }
        Network::Devnet => (DEVNET_GENESIS_BITS, DEVNET_GENESIS_NONCE),
    }
}

/// Returns the declared genesis block hash of `network`, in raw byte order.
pub fn genesis_hash_bytes(network: Network) -> [u8; 32] {
    match network {
        Network::Mainnet | Network::Regtest | Network::Testnet3 | Network::Simnet => GENESIS_HASH,
        Network::Devnet => DEVNET_GENESIS_HASH,
    }
}

/// Constructs and returns the genesis block of `network`.
///
/// This builds a fresh, unchecked copy. Node startup should go through
/// [`crate::genesis::genesis_catalog`], which verifies every block against its
/// declared hash before handing it out.
pub fn genesis_block(network: Network) -> Block {
    let txdata = vec![genesis_coinbase_tx()];
    let merkle_root = TxMerkleNode::from_raw_hash(txdata[0].tx_hash().to_raw_hash());
    let (bits, nonce) = genesis_pow(network);
    Block { header: genesis_header(merkle_root, bits, nonce), txdata }
}

#[cfg(test)]
mod test {
    use hex_lit::hex;

    use super::*;
    use crate::consensus::encode::serialize;
    use crate::hash_types::{BlockHash, Txid};

    #[test]
    fn genesis_first_transaction() {
        let genesis = genesis_coinbase_tx();

        assert_eq!(genesis.version, 1);
        assert_eq!(genesis.input.len(), 1);
        assert_eq!(genesis.input[0].previous_output.txid, Txid::all_zeros());
        assert_eq!(genesis.input[0].previous_output.index, 0xFFFFFFFF);
        assert_eq!(serialize(&genesis.input[0].signature_script), hex!("0e00000b2f503253482f627463642f"));
        assert_eq!(genesis.input[0].sequence, u64::MAX);
        assert_eq!(genesis.output.len(), 1);
        assert_eq!(serialize(&genesis.output[0].script_pubkey), hex!("0151"));
        assert_eq!(genesis.output[0].value, 50 * COIN_VALUE);
        assert_eq!(genesis.lock_time, 0);
        assert!(genesis.subnetwork_id.is_native());
        assert!(genesis.is_coinbase());

        assert_eq!(
            serialize(&genesis),
            hex!(
                "01000000010000000000000000000000000000000000000000000000000000000000000000ffffffff0e00000b2f503253482f627463642fffffffffffffffff0100f2052a01000000015100000000000000000000000000000000000000000000000000000000"
            )
        );
        assert_eq!(genesis.tx_hash().to_byte_array(), GENESIS_MERKLE_ROOT);
    }

    #[test]
    fn genesis_full_block() {
        let genesis = genesis_block(Network::Mainnet);

        assert_eq!(genesis.header.version, block::Version::ONE);
        assert!(genesis.header.parent_hashes.is_empty());
        assert_eq!(genesis.header.hash_merkle_root.to_byte_array(), GENESIS_MERKLE_ROOT);
        assert_eq!(genesis.header.timestamp, 0x5cdac4b0);
        assert_eq!(genesis.header.bits, CompactTarget::from_consensus(0x207fffff));
        assert_eq!(genesis.header.nonce, 0);
        assert_eq!(
            serialize(&genesis.header),
            hex!(
                "0100000000d4dc8bb876579d7de99daedbf822d20da2e0bbbeedb0dbbaeb184d4201ffed9d00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000b0c4da5c00000000ffff7f200000000000000000"
            )
        );
        assert_eq!(genesis.block_hash(), BlockHash::from_byte_array(GENESIS_HASH));
    }

    #[test]
    fn devnet_genesis_full_block() {
        let genesis = genesis_block(Network::Devnet);

        assert_eq!(genesis.header.version, block::Version::ONE);
        assert!(genesis.header.parent_hashes.is_empty());
        assert_eq!(genesis.header.hash_merkle_root.to_byte_array(), GENESIS_MERKLE_ROOT);
        assert_eq!(genesis.header.timestamp, 0x5cdac4b0);
        assert_eq!(genesis.header.bits, CompactTarget::from_consensus(0x1e7fffff));
        assert_eq!(genesis.header.nonce, 0xc79c);
        assert_eq!(genesis.block_hash(), BlockHash::from_byte_array(DEVNET_GENESIS_HASH));
        assert_eq!(genesis.txdata, genesis_block(Network::Mainnet).txdata);
    }

    // These are sanity/regression tests: they verify that the const byte array
    // declared for each network is the same as that created by hashing its genesis block.
    fn declared_hash_and_genesis_block(network: Network) {
        let genesis_hash = genesis_block(network).block_hash();
        let declared = BlockHash::from_byte_array(genesis_hash_bytes(network));
        assert_eq!(genesis_hash, declared, "{network}");
    }

    macro_rules! declared_hash_genesis_block {
        ($($test_name:ident, $network:expr);* $(;)*) => {
            $(
                #[test]
                fn $test_name() {
                    declared_hash_and_genesis_block($network);
                }
            )*
        }
    }

    declared_hash_genesis_block! {
        mainnet_declared_hash_genesis_block, Network::Mainnet;
        regtest_declared_hash_genesis_block, Network::Regtest;
        testnet3_declared_hash_genesis_block, Network::Testnet3;
        simnet_declared_hash_genesis_block, Network::Simnet;
        devnet_declared_hash_genesis_block, Network::Devnet;
    }
}
