// SPDX-License-Identifier: CC0-1.0

//! Genesis catalog.
//!
//! One [`GenesisEntry`] per supported [`Network`]: the genesis block together
//! with the hash and merkle root it is declared to have. The catalog only comes
//! into existence after every entry has been recomputed from its own header and
//! transactions and found to match its declaration.
//!
//! Mainnet, regtest, testnet3 and simnet share a single [`Block`] allocation.
//! Devnet reuses the coinbase transaction and merkle root but overrides the
//! header's proof of work, and so its hash.
//!
//! ```rust
//! use dagcore::Network;
//! use dagcore::genesis::GenesisCatalog;
//!
//! let catalog = GenesisCatalog::build().expect("genesis constants are consistent");
//! let mainnet = catalog.get(Network::Mainnet);
//! let simnet = catalog.lookup("simnet").unwrap();
//! assert_eq!(mainnet.block(), simnet.block());
//! assert!(catalog.lookup("dash").is_err());
//! ```

mod error;

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use hashes::Hash;

pub use self::error::{GenesisField, GenesisIntegrityError};
use crate::blockdata::block::Block;
use crate::blockdata::constants;
use crate::blockdata::transaction::TxIn;
use crate::hash_types::{AcceptedIdMerkleRoot, BlockHash, TxMerkleNode, UtxoCommitment};
use crate::{Network, UnknownNetworkError};

/// The genesis block of one network, with the hash and merkle root it is declared to have.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenesisEntry {
    network: Network,
    block: Arc<Block>,
    hash: BlockHash,
    merkle_root: TxMerkleNode,
}

impl GenesisEntry {
    /// Bundles a genesis block with its declared hash and merkle root.
    ///
    /// Nothing is checked here; see [`GenesisEntry::verify`].
    pub fn new(
        network: Network,
        block: Arc<Block>,
        hash: BlockHash,
        merkle_root: TxMerkleNode,
    ) -> Self {
        GenesisEntry { network, block, hash, merkle_root }
    }

    /// The network this entry belongs to.
    pub fn network(&self) -> Network {
        self.network
    }

    /// The genesis block.
    pub fn block(&self) -> &Block {
        &self.block
    }

    /// The shared handle to the genesis block.
    pub fn shared_block(&self) -> &Arc<Block> {
        &self.block
    }

    /// The declared genesis block hash.
    pub fn hash(&self) -> BlockHash {
        self.hash
    }

    /// The declared merkle root of the genesis transactions.
    pub fn merkle_root(&self) -> TxMerkleNode {
        self.merkle_root
    }

    /// Recomputes the merkle root and block hash and compares them to the declared values.
    ///
    /// The block's shape is checked first: no parents, a single coinbase
    /// transaction with one input and one output, and zero accepted-id and
    /// UTXO commitments.
    pub fn verify(&self) -> Result<(), GenesisIntegrityError> {
        self.verify_structure()?;

        let computed = self.block.compute_merkle_root().ok_or_else(|| {
            self.malformed(GenesisField::Transactions, "no transactions to build a merkle root from")
        })?;
        if computed != self.merkle_root {
            return Err(GenesisIntegrityError::MerkleRootMismatch {
                network: self.network,
                field: GenesisField::TransactionsMerkleRoot,
                expected: self.merkle_root,
                computed,
            });
        }
        if self.block.header.hash_merkle_root != self.merkle_root {
            return Err(GenesisIntegrityError::MerkleRootMismatch {
                network: self.network,
                field: GenesisField::HeaderMerkleRoot,
                expected: self.merkle_root,
                computed: self.block.header.hash_merkle_root,
            });
        }

        let computed = self.block.block_hash();
        if computed != self.hash {
            return Err(GenesisIntegrityError::HashMismatch {
                network: self.network,
                expected: self.hash,
                computed,
            });
        }
        Ok(())
    }

    fn verify_structure(&self) -> Result<(), GenesisIntegrityError> {
        let header = &self.block.header;
        if !header.is_genesis() {
            return Err(self.malformed(GenesisField::ParentHashes, "genesis must have no parents"));
        }
        if header.accepted_id_merkle_root != AcceptedIdMerkleRoot::all_zeros() {
            return Err(self.malformed(GenesisField::AcceptedIdMerkleRoot, "must be the zero hash"));
        }
        if header.utxo_commitment != UtxoCommitment::all_zeros() {
            return Err(self.malformed(GenesisField::UtxoCommitment, "must be the zero hash"));
        }

        let [coinbase] = self.block.txdata.as_slice() else {
            return Err(self.malformed(
                GenesisField::Transactions,
                "expected exactly the coinbase transaction",
            ));
        };
        let [input] = coinbase.input.as_slice() else {
            return Err(self.malformed(GenesisField::CoinbaseInput, "expected exactly one input"));
        };
        if !input.previous_output.is_null() {
            return Err(self.malformed(GenesisField::CoinbaseInput, "must spend the null outpoint"));
        }
        if input.sequence != TxIn::MAX_SEQUENCE {
            return Err(self.malformed(GenesisField::CoinbaseInput, "sequence must be the maximum"));
        }
        if coinbase.output.len() != 1 {
            return Err(self.malformed(GenesisField::CoinbaseOutput, "expected exactly one output"));
        }
        if !coinbase.has_valid_subnetwork_fields() {
            return Err(self.malformed(
                GenesisField::CoinbaseSubnetwork,
                "gas or payload not allowed on its subnetwork",
            ));
        }
        Ok(())
    }

    fn malformed(&self, field: GenesisField, reason: &'static str) -> GenesisIntegrityError {
        GenesisIntegrityError::Malformed { network: self.network, field, reason }
    }
}

/// Every supported network's verified genesis entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenesisCatalog {
    entries: BTreeMap<Network, GenesisEntry>,
}

impl GenesisCatalog {
    /// Builds the catalog from the genesis constants and verifies it.
    ///
    /// The coinbase transaction and the shared genesis block are built once;
    /// regtest, testnet3 and simnet point at the mainnet block. Devnet gets
    /// its own header over the same transactions.
    pub fn build() -> Result<Self, GenesisIntegrityError> {
        let shared = Arc::new(constants::genesis_block(Network::Mainnet));
        let merkle_root = TxMerkleNode::from_byte_array(constants::GENESIS_MERKLE_ROOT);

        // `Block` owns its transactions, so devnet holds a copy of the shared
        // coinbase; `verify` checks it against the same merkle root.
        let devnet = {
            let (bits, nonce) = constants::genesis_pow(Network::Devnet);
            Arc::new(Block {
                header: constants::genesis_header(shared.header.hash_merkle_root, bits, nonce),
                txdata: shared.txdata.clone(),
            })
        };

        let entries = Network::ALL.into_iter().map(|network| {
            let block = match network {
                Network::Devnet => Arc::clone(&devnet),
                Network::Mainnet | Network::Regtest | Network::Testnet3 | Network::Simnet => {
                    Arc::clone(&shared)
                }
            };
            let hash = BlockHash::from_byte_array(constants::genesis_hash_bytes(network));
            GenesisEntry::new(network, block, hash, merkle_root)
        });

        Self::from_entries(entries)
    }

    /// Assembles a catalog from `entries`, verifying each of them.
    ///
    /// Fails on the first entry that does not verify, on a network declared
    /// twice, and on a supported network without an entry.
    pub fn from_entries<I>(entries: I) -> Result<Self, GenesisIntegrityError>
    where
        I: IntoIterator<Item = GenesisEntry>,
    {
        let mut map = BTreeMap::new();
        for entry in entries {
            let network = entry.network;
            if map.contains_key(&network) {
                return Err(GenesisIntegrityError::DuplicateNetwork(network));
            }
            entry.verify()?;
            tracing::debug!(%network, hash = %entry.hash, "verified genesis entry");
            map.insert(network, entry);
        }

        if let Some(missing) = Network::ALL.into_iter().find(|network| !map.contains_key(network)) {
            return Err(GenesisIntegrityError::MissingNetwork(missing));
        }

        tracing::info!(networks = map.len(), "genesis catalog verified");
        Ok(GenesisCatalog { entries: map })
    }

    /// Returns the genesis entry of `network`.
    pub fn get(&self, network: Network) -> &GenesisEntry {
        // Completeness is checked in `from_entries`.
        &self.entries[&network]
    }

    /// Returns the genesis entry of the network named by `identifier`.
    pub fn lookup(&self, identifier: &str) -> Result<&GenesisEntry, UnknownNetworkError> {
        let network: Network = identifier.parse()?;
        Ok(self.get(network))
    }

    /// Iterates over all entries in network order.
    pub fn iter(&self) -> impl Iterator<Item = &GenesisEntry> {
        self.entries.values()
    }
}

static GENESIS_CATALOG: OnceLock<GenesisCatalog> = OnceLock::new();

/// Returns the process-wide genesis catalog, building it on first access.
///
/// Concurrent first accesses build it once and all observe the same catalog.
///
/// # Panics
///
/// If the genesis constants fail verification. A node must not start with
/// inconsistent genesis data.
pub fn genesis_catalog() -> &'static GenesisCatalog {
    GENESIS_CATALOG.get_or_init(|| match GenesisCatalog::build() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(network = %e.network(), error = %e, "genesis integrity check failed");
            panic!("genesis integrity check failed: {e}");
        }
    })
}

/// Looks up the genesis entry of the network named by `identifier` in the
/// process-wide catalog.
pub fn lookup_genesis(identifier: &str) -> Result<&'static GenesisEntry, UnknownNetworkError> {
    genesis_catalog().lookup(identifier)
}
