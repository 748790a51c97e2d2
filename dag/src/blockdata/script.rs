// SPDX-License-Identifier: CC0-1.0

//! DAG scripts.
//!
//! Scripts are carried as opaque byte strings. Nothing in this crate executes
//! them; they only need to encode and hash deterministically.

use core::fmt;
use std::io;

use crate::consensus::encode::{self, Decodable, Encodable, consensus_encode_with_size};

/// Push the number 1 onto the stack; the whole of an anyone-can-spend script.
pub const OP_TRUE: u8 = 0x51;

/// An owned, opaque script.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "actual_serde"))]
pub struct ScriptBuf(Vec<u8>);

impl ScriptBuf {
    /// Creates a new empty script.
    pub const fn new() -> Self {
        ScriptBuf(Vec::new())
    }

    /// Wraps raw script bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        ScriptBuf(bytes)
    }

    /// Returns the script data as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length in bytes of the script.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the script is the empty script.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts the script into its underlying bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for ScriptBuf {
    fn from(v: Vec<u8>) -> Self {
        ScriptBuf(v)
    }
}

impl From<&[u8]> for ScriptBuf {
    fn from(v: &[u8]) -> Self {
        ScriptBuf(v.to_vec())
    }
}

impl AsRef<[u8]> for ScriptBuf {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for ScriptBuf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ScriptBuf({})", hex::encode(&self.0))
    }
}

impl fmt::Display for ScriptBuf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl Encodable for ScriptBuf {
    #[inline]
    fn consensus_encode<W: io::Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
        consensus_encode_with_size(&self.0, w)
    }
}

impl Decodable for ScriptBuf {
    #[inline]
    fn consensus_decode<R: io::Read + ?Sized>(r: &mut R) -> Result<Self, encode::Error> {
        Ok(ScriptBuf(Decodable::consensus_decode(r)?))
    }
}
