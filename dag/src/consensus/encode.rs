// SPDX-License-Identifier: CC0-1.0

//! DAG consensus-encodable types.
//!
//! Little-endian integers, compact-size counts and raw hash bytes, exactly as
//! the DAG wire protocol lays them out.
//!
//! Anything that is hashed for consensus (headers, transactions, merkle
//! leaves) goes through [`Encodable`], since those bytes must be identical on
//! every implementation and platform.

use std::io::{self, Cursor, Read, Write};
use std::mem;

use hashes::sha256d;
use thiserror::Error;

/// Maximum size, in bytes, of a vector we are allowed to decode.
pub const MAX_VEC_SIZE: usize = 4_000_000;

/// Encoding error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Tried to allocate an oversized vector.
    #[error("allocation of oversized vector: requested {requested}, maximum {max}")]
    OversizedVectorAllocation {
        /// The capacity requested.
        requested: usize,
        /// The maximum capacity.
        max: usize,
    },
    /// VarInt was encoded in a non-minimal way.
    #[error("non-minimal varint")]
    NonMinimalVarInt,
    /// The payload hash carried by a transaction does not commit to its payload.
    #[error("payload hash mismatch: declared {declared}, computed {computed}")]
    PayloadHashMismatch {
        /// Hash carried on the wire.
        declared: sha256d::Hash,
        /// Hash of the payload that followed it.
        computed: sha256d::Hash,
    },
    /// Input was not consumed entirely.
    #[error("data not consumed entirely when explicitly deserializing: {0} trailing bytes")]
    TrailingBytes(usize),
}

/// Encodes an object into a vector.
///
/// # Panics
///
/// If the value violates a wire-format limit, such as a header with more
/// parents than a single byte can count.
pub fn serialize<T: Encodable + ?Sized>(data: &T) -> Vec<u8> {
    let mut encoder = Vec::new();
    let len = data.consensus_encode(&mut encoder).expect("value exceeds a wire-format limit");
    debug_assert_eq!(len, encoder.len());
    encoder
}

/// Encodes an object into a hex-encoded string.
pub fn serialize_hex<T: Encodable + ?Sized>(data: &T) -> String {
    hex::encode(serialize(data))
}

/// Deserializes an object from a vector, will error if said deserialization
/// doesn't consume the entire vector.
pub fn deserialize<T: Decodable>(data: &[u8]) -> Result<T, Error> {
    let (rv, consumed) = deserialize_partial(data)?;

    if consumed == data.len() {
        Ok(rv)
    } else {
        Err(Error::TrailingBytes(data.len() - consumed))
    }
}

/// Deserializes an object from a vector, but will not report an error if said deserialization
/// doesn't consume the entire vector.
pub fn deserialize_partial<T: Decodable>(data: &[u8]) -> Result<(T, usize), Error> {
    let mut decoder = Cursor::new(data);
    let rv = Decodable::consensus_decode(&mut decoder)?;
    let consumed = decoder.position() as usize;

    Ok((rv, consumed))
}

/// Data which can be encoded in a consensus-consistent way.
pub trait Encodable {
    /// Encodes an object with a well-defined format.
    ///
    /// # Returns
    ///
    /// The number of bytes written on success. The only errors returned are errors propagated from
    /// the writer, or an [`io::ErrorKind::InvalidInput`] for a value the wire format cannot express.
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<usize, io::Error>;
}

/// Data which can be decoded in a consensus-consistent way.
pub trait Decodable: Sized {
    /// Decode an object with a well-defined format.
    fn consensus_decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self, Error>;
}

/// A variable-length unsigned integer.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct VarInt(pub u64);

impl VarInt {
    /// Gets the length of this VarInt when encoded.
    ///
    /// Returns 1 for 0..=0xFC, 3 for 0xFD..=(2^16-1), 5 for 0x10000..=(2^32-1),
    /// and 9 otherwise.
    #[inline]
    pub const fn len(&self) -> usize {
        match self.0 {
            0..=0xFC => 1,
            0xFD..=0xFFFF => 3,
            0x10000..=0xFFFFFFFF => 5,
            _ => 9,
        }
    }
}

impl Encodable for VarInt {
    #[inline]
    fn consensus_encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
        match self.0 {
            0..=0xFC => {
                (self.0 as u8).consensus_encode(w)?;
                Ok(1)
            }
            0xFD..=0xFFFF => {
                w.write_all(&[0xFD])?;
                (self.0 as u16).consensus_encode(w)?;
                Ok(3)
            }
            0x10000..=0xFFFFFFFF => {
                w.write_all(&[0xFE])?;
                (self.0 as u32).consensus_encode(w)?;
                Ok(5)
            }
            _ => {
                w.write_all(&[0xFF])?;
                self.0.consensus_encode(w)?;
                Ok(9)
            }
        }
    }
}

impl Decodable for VarInt {
    #[inline]
    fn consensus_decode<R: Read + ?Sized>(r: &mut R) -> Result<Self, Error> {
        let n = u8::consensus_decode(r)?;
        match n {
            0xFF => {
                let x = u64::consensus_decode(r)?;
                if x < 0x100000000 { Err(Error::NonMinimalVarInt) } else { Ok(VarInt(x)) }
            }
            0xFE => {
                let x = u32::consensus_decode(r)?;
                if x < 0x10000 { Err(Error::NonMinimalVarInt) } else { Ok(VarInt(x as u64)) }
            }
            0xFD => {
                let x = u16::consensus_decode(r)?;
                if x < 0xFD { Err(Error::NonMinimalVarInt) } else { Ok(VarInt(x as u64)) }
            }
            n => Ok(VarInt(n as u64)),
        }
    }
}

macro_rules! impl_int_encodable {
    ($ty:ident) => {
        impl Encodable for $ty {
            #[inline]
            fn consensus_encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
                w.write_all(&self.to_le_bytes())?;
                Ok(mem::size_of::<$ty>())
            }
        }

        impl Decodable for $ty {
            #[inline]
            fn consensus_decode<R: Read + ?Sized>(r: &mut R) -> Result<Self, Error> {
                let mut buf = [0u8; mem::size_of::<$ty>()];
                r.read_exact(&mut buf)?;
                Ok($ty::from_le_bytes(buf))
            }
        }
    };
}

impl_int_encodable!(u8);
impl_int_encodable!(u16);
impl_int_encodable!(u32);
impl_int_encodable!(u64);
impl_int_encodable!(i32);
impl_int_encodable!(i64);

macro_rules! impl_array {
    ($size:literal) => {
        impl Encodable for [u8; $size] {
            #[inline]
            fn consensus_encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
                w.write_all(&self[..])?;
                Ok(self.len())
            }
        }

        impl Decodable for [u8; $size] {
            #[inline]
            fn consensus_decode<R: Read + ?Sized>(r: &mut R) -> Result<Self, Error> {
                let mut ret = [0; $size];
                r.read_exact(&mut ret)?;
                Ok(ret)
            }
        }
    };
}

impl_array!(20);
impl_array!(32);

/// Writes `data` prefixed with its length as a [`VarInt`].
pub(crate) fn consensus_encode_with_size<W: Write + ?Sized>(
    data: &[u8],
    w: &mut W,
) -> Result<usize, io::Error> {
    let vi_len = VarInt(data.len() as u64).consensus_encode(w)?;
    w.write_all(data)?;
    Ok(vi_len + data.len())
}

/// Reads a [`VarInt`] element count and checks the allocation it implies.
pub(crate) fn read_element_count<R: Read + ?Sized>(
    r: &mut R,
    element_size: usize,
) -> Result<usize, Error> {
    let len = VarInt::consensus_decode(r)?.0;
    let requested = (len as usize).saturating_mul(element_size.max(1));
    if len > MAX_VEC_SIZE as u64 || requested > MAX_VEC_SIZE {
        return Err(Error::OversizedVectorAllocation { requested, max: MAX_VEC_SIZE });
    }
    Ok(len as usize)
}

impl Encodable for Vec<u8> {
    #[inline]
    fn consensus_encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
        consensus_encode_with_size(self, w)
    }
}

impl Decodable for Vec<u8> {
    #[inline]
    fn consensus_decode<R: Read + ?Sized>(r: &mut R) -> Result<Self, Error> {
        let len = read_element_count(r, 1)?;
        let mut ret = vec![0u8; len];
        r.read_exact(&mut ret)?;
        Ok(ret)
    }
}

/// Implements [`Encodable`] and [`Decodable`] for a vector of `$type`, prefixed by a [`VarInt`] count.
macro_rules! impl_vec {
    ($type:ty) => {
        impl Encodable for Vec<$type> {
            #[inline]
            fn consensus_encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
                let mut len = VarInt(self.len() as u64).consensus_encode(w)?;
                for c in self.iter() {
                    len += c.consensus_encode(w)?;
                }
                Ok(len)
            }
        }

        impl Decodable for Vec<$type> {
            #[inline]
            fn consensus_decode<R: Read + ?Sized>(r: &mut R) -> Result<Self, Error> {
                let len = read_element_count(r, mem::size_of::<$type>())?;
                let mut ret = Vec::with_capacity(len);
                for _ in 0..len {
                    ret.push(Decodable::consensus_decode(r)?);
                }
                Ok(ret)
            }
        }
    };
}

impl_vec!(crate::blockdata::transaction::TxIn);
impl_vec!(crate::blockdata::transaction::TxOut);
impl_vec!(crate::blockdata::transaction::Transaction);

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn serialize_int_test() {
        assert_eq!(serialize(&1u8), vec![1u8]);
        assert_eq!(serialize(&256u16), vec![0u8, 1]);
        assert_eq!(serialize(&0x207fffffu32), vec![0xffu8, 0xff, 0x7f, 0x20]);
        assert_eq!(serialize(&0xc79cu64), vec![0x9cu8, 0xc7, 0, 0, 0, 0, 0, 0]);
        assert_eq!(serialize(&-1i32), vec![0xffu8; 4]);
        assert_eq!(serialize(&0x5cdac4b0i64), vec![0xb0u8, 0xc4, 0xda, 0x5c, 0, 0, 0, 0]);
    }

    #[test]
    fn serialize_varint_test() {
        assert_eq!(serialize(&VarInt(10)), vec![10u8]);
        assert_eq!(serialize(&VarInt(0xFC)), vec![0xFCu8]);
        assert_eq!(serialize(&VarInt(0xFD)), vec![0xFDu8, 0xFD, 0]);
        assert_eq!(serialize(&VarInt(0xFFF)), vec![0xFDu8, 0xFF, 0xF]);
        assert_eq!(serialize(&VarInt(0xF0F0F0F)), vec![0xFEu8, 0xF, 0xF, 0xF, 0xF]);
        assert_eq!(
            serialize(&VarInt(0xF0F0F0F0F0E0)),
            vec![0xFFu8, 0xE0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0, 0]
        );
        for n in [0u64, 0xFC, 0xFD, 0xFFFF, 0x10000, 0xFFFFFFFF, 0x100000000] {
            assert_eq!(serialize(&VarInt(n)).len(), VarInt(n).len());
        }
    }

    #[test]
    fn deserialize_nonminimal_varint_test() {
        assert_matches!(
            deserialize::<VarInt>(&[0xfd, 0x00, 0x00]),
            Err(Error::NonMinimalVarInt)
        );
        assert_matches!(
            deserialize::<VarInt>(&[0xfe, 0xff, 0xff, 0x00, 0x00]),
            Err(Error::NonMinimalVarInt)
        );
        assert_matches!(
            deserialize::<VarInt>(&[0xff, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00]),
            Err(Error::NonMinimalVarInt)
        );
        assert_eq!(deserialize::<VarInt>(&[0xfd, 0xfd, 0x00]).unwrap(), VarInt(0xfd));
    }

    #[test]
    fn deserialize_vec_test() {
        assert_eq!(deserialize::<Vec<u8>>(&[3, 2, 3, 4]).unwrap(), vec![2u8, 3, 4]);
        assert_matches!(deserialize::<Vec<u8>>(&[4, 2, 3, 4]), Err(Error::Io(_)));
        assert_matches!(
            deserialize::<Vec<u8>>(&[0xfe, 0x00, 0x00, 0x00, 0x10]),
            Err(Error::OversizedVectorAllocation { .. })
        );
    }

    #[test]
    fn deserialize_trailing_bytes_test() {
        assert_matches!(deserialize::<u16>(&[1, 2, 3]), Err(Error::TrailingBytes(1)));
        let (value, consumed) = deserialize_partial::<u16>(&[1, 2, 3]).unwrap();
        assert_eq!(value, 0x0201);
        assert_eq!(consumed, 2);
    }

    #[test]
    fn serialize_hex_test() {
        assert_eq!(serialize_hex(&vec![0x51u8]), "0151");
    }
}
