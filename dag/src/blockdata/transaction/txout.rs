// SPDX-License-Identifier: CC0-1.0

//! DAG TxOut.
//!
//! A TxOut is an output of a transaction.

use crate::blockdata::script::ScriptBuf;

/// A transaction output, which defines new coins to be created from old ones.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "actual_serde"))]
pub struct TxOut {
    /// The value of the output, in the chain's atomic unit.
    pub value: u64,
    /// The script which must be satisfied for the output to be spent.
    pub script_pubkey: ScriptBuf,
}

impl_consensus_encoding!(TxOut, value, script_pubkey);
