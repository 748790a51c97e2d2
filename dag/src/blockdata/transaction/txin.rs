// SPDX-License-Identifier: CC0-1.0

//! DAG TxIn.
//!
//! A TxIn is an input to a transaction.

use crate::blockdata::script::ScriptBuf;
use crate::blockdata::transaction::outpoint::OutPoint;

/// A transaction input, which defines old coins to be consumed.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "actual_serde"))]
pub struct TxIn {
    /// The reference to the previous output that is being used as an input.
    pub previous_output: OutPoint,
    /// The script which pushes values on the stack which will cause
    /// the referenced output's script to be accepted.
    pub signature_script: ScriptBuf,
    /// The sequence number, which suggests to miners which of two
    /// conflicting transactions should be preferred, or 0xFFFFFFFFFFFFFFFF
    /// to ignore this feature.
    pub sequence: u64,
}

impl TxIn {
    /// The largest sequence number; coinbase inputs carry it.
    pub const MAX_SEQUENCE: u64 = u64::MAX;
}

impl Default for TxIn {
    fn default() -> TxIn {
        TxIn {
            previous_output: OutPoint::default(),
            signature_script: ScriptBuf::new(),
            sequence: TxIn::MAX_SEQUENCE,
        }
    }
}

impl_consensus_encoding!(TxIn, previous_output, signature_script, sequence);
