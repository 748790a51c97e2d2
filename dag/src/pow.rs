// SPDX-License-Identifier: CC0-1.0

//! Proof-of-work related types.
//!
//! Only the compact encoding of the target is carried here; the arithmetic on
//! the expanded target belongs to difficulty adjustment.

use core::fmt;
use std::io;

use crate::consensus::encode::{self, Decodable, Encodable};

/// Encoding of 256-bit target as 32-bit float.
///
/// This is used to encode a target into the block header. Satoshi made this part of consensus code
/// in the original version of Bitcoin, likely copying an idea from OpenSSL.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "actual_serde"))]
pub struct CompactTarget(u32);

impl CompactTarget {
    /// Creates a [`CompactTarget`] from a consensus encoded `u32`.
    pub const fn from_consensus(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the consensus encoded `u32` representation of this [`CompactTarget`].
    pub const fn to_consensus(self) -> u32 {
        self.0
    }
}

impl From<CompactTarget> for u32 {
    fn from(c: CompactTarget) -> Self {
        c.0
    }
}

impl fmt::LowerHex for CompactTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl Encodable for CompactTarget {
    #[inline]
    fn consensus_encode<W: io::Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
        self.0.consensus_encode(w)
    }
}

impl Decodable for CompactTarget {
    #[inline]
    fn consensus_decode<R: io::Read + ?Sized>(r: &mut R) -> Result<Self, encode::Error> {
        u32::consensus_decode(r).map(CompactTarget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::serialize;

    #[test]
    fn compact_target_round_trips_consensus_u32() {
        let bits = CompactTarget::from_consensus(0x1e7fffff);
        assert_eq!(bits.to_consensus(), 0x1e7fffff);
        assert_eq!(u32::from(bits), 0x1e7fffff);
        assert_eq!(format!("{:x}", bits), "1e7fffff");
        assert_eq!(serialize(&bits), vec![0xff, 0xff, 0x7f, 0x1e]);
    }
}
