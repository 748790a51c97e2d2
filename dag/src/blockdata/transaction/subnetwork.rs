// SPDX-License-Identifier: CC0-1.0

//! Subnetwork identifiers.
//!
//! Every transaction belongs to a subnetwork. Native transactions carry no
//! payload; all others carry a gas limit and a payload committed to by its hash.

use core::fmt;
use std::io;

use crate::consensus::encode::{self, Decodable, Encodable};

/// Length in bytes of a [`SubnetworkId`].
pub const SUBNETWORK_ID_SIZE: usize = 20;

/// Identifies the subnetwork a transaction belongs to.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "actual_serde"))]
pub struct SubnetworkId([u8; SUBNETWORK_ID_SIZE]);

impl SubnetworkId {
    /// The native subnetwork: plain value transfers.
    pub const NATIVE: SubnetworkId = SubnetworkId([0; SUBNETWORK_ID_SIZE]);
    /// The subnetwork of coinbase transactions.
    pub const COINBASE: SubnetworkId = SubnetworkId::from_first_byte(1);
    /// The subnetwork used to register new subnetworks.
    pub const REGISTRY: SubnetworkId = SubnetworkId::from_first_byte(2);

    const fn from_first_byte(b: u8) -> SubnetworkId {
        let mut bytes = [0; SUBNETWORK_ID_SIZE];
        bytes[0] = b;
        SubnetworkId(bytes)
    }

    /// Wraps raw subnetwork id bytes.
    pub const fn from_byte_array(bytes: [u8; SUBNETWORK_ID_SIZE]) -> Self {
        SubnetworkId(bytes)
    }

    /// Returns the raw subnetwork id bytes.
    pub const fn to_byte_array(self) -> [u8; SUBNETWORK_ID_SIZE] {
        self.0
    }

    /// Whether this is the native subnetwork.
    pub fn is_native(&self) -> bool {
        *self == SubnetworkId::NATIVE
    }
}

impl fmt::Debug for SubnetworkId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SubnetworkId({})", hex::encode(self.0))
    }
}

impl fmt::Display for SubnetworkId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl Encodable for SubnetworkId {
    #[inline]
    fn consensus_encode<W: io::Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
        self.0.consensus_encode(w)
    }
}

impl Decodable for SubnetworkId {
    #[inline]
    fn consensus_decode<R: io::Read + ?Sized>(r: &mut R) -> Result<Self, encode::Error> {
        Ok(SubnetworkId(Decodable::consensus_decode(r)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_subnetworks() {
        assert!(SubnetworkId::NATIVE.is_native());
        assert!(!SubnetworkId::COINBASE.is_native());
        assert_eq!(SubnetworkId::REGISTRY.to_byte_array()[0], 2);
        assert_eq!(SubnetworkId::default(), SubnetworkId::NATIVE);
        assert_eq!(
            SubnetworkId::COINBASE.to_string(),
            "0100000000000000000000000000000000000000"
        );
    }
}
