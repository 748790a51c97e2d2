// SPDX-License-Identifier: CC0-1.0

//! DAG transactions.
//!
//! A transaction describes a transfer of money. It consumes previously-unspent
//! transaction outputs and produces new ones. Every transaction belongs to a
//! subnetwork; only non-native transactions carry gas and a payload on the wire.
//!

pub mod outpoint;
pub mod subnetwork;
pub mod txin;
pub mod txout;

use std::io;

use hashes::{Hash, sha256d};

use crate::blockdata::script::ScriptBuf;
use crate::consensus::encode::{self, Decodable, Encodable, VarInt, serialize};
use crate::hash_types::{TxHash, Txid};

pub use self::outpoint::OutPoint;
pub use self::subnetwork::SubnetworkId;
pub use self::txin::TxIn;
pub use self::txout::TxOut;

/// A DAG transaction, which describes an authenticated movement of coins.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "actual_serde"))]
pub struct Transaction {
    /// The protocol version.
    pub version: i32,
    /// List of transaction inputs.
    pub input: Vec<TxIn>,
    /// List of transaction outputs.
    pub output: Vec<TxOut>,
    /// Block time or blue score before which this transaction is invalid, or 0 for valid immediately.
    pub lock_time: u64,
    /// The subnetwork this transaction belongs to.
    pub subnetwork_id: SubnetworkId,
    /// Gas limit. Not encoded for native transactions.
    pub gas: u64,
    /// Subnetwork specific payload. Not encoded for native transactions.
    pub payload: Vec<u8>,
}

impl Transaction {
    /// Creates a transaction on the native subnetwork with no lock time.
    pub fn new_native(version: i32, input: Vec<TxIn>, output: Vec<TxOut>) -> Transaction {
        Transaction {
            version,
            input,
            output,
            lock_time: 0,
            subnetwork_id: SubnetworkId::NATIVE,
            gas: 0,
            payload: Vec::new(),
        }
    }

    /// Checks whether this is a coinbase transaction: exactly one input, spending the null outpoint.
    pub fn is_coinbase(&self) -> bool {
        self.input.len() == 1 && self.input[0].previous_output.is_null()
    }

    /// Double-SHA256 of the payload, as committed to on the wire.
    pub fn payload_hash(&self) -> sha256d::Hash {
        sha256d::Hash::hash(&self.payload)
    }

    /// Checks the gas and payload fields against the subnetwork rules.
    ///
    /// Native transactions carry neither gas nor payload, and registry
    /// transactions carry no gas.
    pub fn has_valid_subnetwork_fields(&self) -> bool {
        if self.subnetwork_id.is_native() {
            self.gas == 0 && self.payload.is_empty()
        } else if self.subnetwork_id == SubnetworkId::REGISTRY {
            self.gas == 0
        } else {
            true
        }
    }

    /// Computes the hash of the fully serialized transaction.
    ///
    /// This is the value merkle roots are built from.
    ///
    /// # Panics
    ///
    /// If a native transaction carries gas or a payload, which it cannot encode.
    pub fn tx_hash(&self) -> TxHash {
        TxHash::hash(&serialize(self))
    }

    /// Computes the transaction id.
    ///
    /// Signature scripts are serialized as empty scripts unless this is a
    /// coinbase transaction, so the id is stable under re-signing.
    ///
    /// # Panics
    ///
    /// If a native transaction carries gas or a payload, which it cannot encode.
    pub fn txid(&self) -> Txid {
        let mut buf = Vec::new();
        self.encode_fields(&mut buf, self.is_coinbase())
            .expect("in-memory writers only fail on unencodable native payloads");
        Txid::hash(&buf)
    }

    fn encode_fields<W: io::Write + ?Sized>(
        &self,
        w: &mut W,
        include_signature_scripts: bool,
    ) -> Result<usize, io::Error> {
        if self.subnetwork_id.is_native() && (self.gas != 0 || !self.payload.is_empty()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "native transactions carry neither gas nor payload",
            ));
        }
        let mut len = 0;
        len += self.version.consensus_encode(w)?;
        len += VarInt(self.input.len() as u64).consensus_encode(w)?;
        for input in &self.input {
            len += input.previous_output.consensus_encode(w)?;
            if include_signature_scripts {
                len += input.signature_script.consensus_encode(w)?;
            } else {
                len += ScriptBuf::new().consensus_encode(w)?;
            }
            len += input.sequence.consensus_encode(w)?;
        }
        len += self.output.consensus_encode(w)?;
        len += self.lock_time.consensus_encode(w)?;
        len += self.subnetwork_id.consensus_encode(w)?;
        if !self.subnetwork_id.is_native() {
            len += self.gas.consensus_encode(w)?;
            len += self.payload_hash().to_byte_array().consensus_encode(w)?;
            len += self.payload.consensus_encode(w)?;
        }
        Ok(len)
    }
}

impl Encodable for Transaction {
    fn consensus_encode<W: io::Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
        self.encode_fields(w, true)
    }
}

impl Decodable for Transaction {
    fn consensus_decode<R: io::Read + ?Sized>(r: &mut R) -> Result<Self, encode::Error> {
        let version = i32::consensus_decode(r)?;
        let input = Vec::<TxIn>::consensus_decode(r)?;
        let output = Vec::<TxOut>::consensus_decode(r)?;
        let lock_time = u64::consensus_decode(r)?;
        let subnetwork_id = SubnetworkId::consensus_decode(r)?;
        let (gas, payload) = if subnetwork_id.is_native() {
            (0, Vec::new())
        } else {
            let gas = u64::consensus_decode(r)?;
            let declared = sha256d::Hash::from_byte_array(Decodable::consensus_decode(r)?);
            let payload = Vec::<u8>::consensus_decode(r)?;
            let computed = sha256d::Hash::hash(&payload);
            if declared != computed {
                return Err(encode::Error::PayloadHashMismatch { declared, computed });
            }
            (gas, payload)
        };
        Ok(Transaction { version, input, output, lock_time, subnetwork_id, gas, payload })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::consensus::deserialize;

    fn spend(signature_script: &[u8]) -> Transaction {
        Transaction::new_native(
            1,
            vec![TxIn {
                previous_output: OutPoint::new(Txid::hash(b"funding"), 3),
                signature_script: ScriptBuf::from(signature_script),
                sequence: 7,
            }],
            vec![TxOut { value: 1_000, script_pubkey: ScriptBuf::from(vec![0x51]) }],
        )
    }

    #[test]
    fn coinbase_detection() {
        let mut tx = spend(b"sig");
        assert!(!tx.is_coinbase());
        tx.input[0].previous_output = OutPoint::null();
        assert!(tx.is_coinbase());
        tx.input.push(TxIn::default());
        assert!(!tx.is_coinbase());
    }

    #[test]
    fn txid_ignores_signature_scripts_of_regular_transactions() {
        let a = spend(b"first signature");
        let b = spend(b"second signature");
        assert_eq!(a.txid(), b.txid());
        assert_ne!(a.tx_hash(), b.tx_hash());
    }

    #[test]
    fn txid_of_coinbase_commits_to_signature_script() {
        let mut a = spend(b"first");
        let mut b = spend(b"second");
        a.input[0].previous_output = OutPoint::null();
        b.input[0].previous_output = OutPoint::null();
        assert_ne!(a.txid(), b.txid());
        assert_eq!(a.txid().to_byte_array(), a.tx_hash().to_byte_array());
    }

    #[test]
    fn native_transaction_round_trip() {
        let tx = spend(b"sig");
        let bytes = serialize(&tx);
        assert_eq!(deserialize::<Transaction>(&bytes).unwrap(), tx);
    }

    #[test]
    fn non_native_transaction_carries_payload() {
        let mut tx = spend(b"sig");
        tx.subnetwork_id = SubnetworkId::from_byte_array([9; 20]);
        tx.gas = 42;
        tx.payload = b"subnetwork data".to_vec();
        assert!(tx.has_valid_subnetwork_fields());

        let bytes = serialize(&tx);
        assert_eq!(bytes.len(), serialize(&spend(b"sig")).len() + 8 + 32 + 1 + 15);
        assert_eq!(deserialize::<Transaction>(&bytes).unwrap(), tx);
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let mut tx = spend(b"sig");
        tx.subnetwork_id = SubnetworkId::from_byte_array([9; 20]);
        tx.payload = b"payload".to_vec();
        let mut bytes = serialize(&tx);
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;
        assert_matches!(
            deserialize::<Transaction>(&bytes),
            Err(encode::Error::PayloadHashMismatch { .. })
        );
    }

    #[test]
    fn native_transaction_with_payload_cannot_be_encoded() {
        let mut tx = spend(b"sig");
        tx.payload = vec![1, 2, 3];
        let err = tx.consensus_encode(&mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let mut tx = spend(b"sig");
        tx.gas = 1;
        let err = tx.consensus_encode(&mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    #[should_panic]
    fn tx_hash_of_native_transaction_with_payload_panics() {
        let mut tx = spend(b"sig");
        tx.payload = vec![1, 2, 3];
        tx.tx_hash();
    }

    #[test]
    fn subnetwork_field_rules() {
        let mut tx = spend(b"sig");
        assert!(tx.has_valid_subnetwork_fields());
        tx.payload = vec![1];
        assert!(!tx.has_valid_subnetwork_fields());

        let mut registry = spend(b"sig");
        registry.subnetwork_id = SubnetworkId::REGISTRY;
        registry.gas = 1;
        assert!(!registry.has_valid_subnetwork_fields());
    }
}
