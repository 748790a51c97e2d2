// SPDX-License-Identifier: CC0-1.0

//! DAG transaction outpoints.
//!
//! An outpoint names a single output of an earlier transaction.

use core::fmt;

use hashes::Hash;

use crate::hash_types::Txid;

/// A reference to a transaction output.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "actual_serde"))]
pub struct OutPoint {
    /// The referenced transaction's txid.
    pub txid: Txid,
    /// The index of the referenced output in its transaction's output list.
    pub index: u32,
}

impl_consensus_encoding!(OutPoint, txid, index);

impl OutPoint {
    /// Creates a new [`OutPoint`].
    #[inline]
    pub fn new(txid: Txid, index: u32) -> OutPoint {
        OutPoint { txid, index }
    }

    /// Creates a "null" `OutPoint`.
    ///
    /// This value is used for coinbase transactions because they don't have any previous outputs.
    #[inline]
    pub fn null() -> OutPoint {
        OutPoint { txid: Txid::all_zeros(), index: u32::MAX }
    }

    /// Checks if an `OutPoint` is "null".
    #[inline]
    pub fn is_null(&self) -> bool {
        *self == OutPoint::null()
    }
}

impl Default for OutPoint {
    fn default() -> Self {
        OutPoint::null()
    }
}

impl fmt::Display for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.txid, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::serialize;

    #[test]
    fn null_outpoint() {
        let null = OutPoint::null();
        assert!(null.is_null());
        assert_eq!(null.index, 0xffffffff);
        assert_eq!(null.txid, Txid::all_zeros());
        assert!(!OutPoint::new(Txid::all_zeros(), 0).is_null());
        assert!(!OutPoint::new(Txid::hash(b"prev"), u32::MAX).is_null());
    }

    #[test]
    fn outpoint_encoding() {
        let mut expected = vec![0u8; 32];
        expected.extend_from_slice(&[0xff; 4]);
        assert_eq!(serialize(&OutPoint::null()), expected);
    }
}
