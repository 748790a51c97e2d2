// SPDX-License-Identifier: CC0-1.0

//! Internal macros.
//!
//! Macros meant to be used inside the DAG core library.

/// Implements [`Encodable`] and [`Decodable`] for a struct by encoding its fields in order.
///
/// [`Encodable`]: crate::consensus::Encodable
/// [`Decodable`]: crate::consensus::Decodable
macro_rules! impl_consensus_encoding {
    ($thing:ident, $($field:ident),+) => (
        impl $crate::consensus::Encodable for $thing {
            #[inline]
            fn consensus_encode<W: std::io::Write + ?Sized>(
                &self,
                w: &mut W,
            ) -> Result<usize, std::io::Error> {
                let mut len = 0;
                $(len += $crate::consensus::Encodable::consensus_encode(&self.$field, w)?;)+
                Ok(len)
            }
        }

        impl $crate::consensus::Decodable for $thing {
            #[inline]
            fn consensus_decode<R: std::io::Read + ?Sized>(
                r: &mut R,
            ) -> Result<$thing, $crate::consensus::encode::Error> {
                Ok($thing {
                    $($field: $crate::consensus::Decodable::consensus_decode(r)?),+
                })
            }
        }
    );
}

/// Implements consensus encoding for a 32-byte hash newtype as its raw bytes.
macro_rules! impl_hashencode {
    ($hashtype:ident) => {
        impl $crate::consensus::Encodable for $hashtype {
            fn consensus_encode<W: std::io::Write + ?Sized>(
                &self,
                w: &mut W,
            ) -> Result<usize, std::io::Error> {
                $crate::consensus::Encodable::consensus_encode(
                    &<$hashtype as $crate::hashes::Hash>::to_byte_array(*self),
                    w,
                )
            }
        }

        impl $crate::consensus::Decodable for $hashtype {
            fn consensus_decode<R: std::io::Read + ?Sized>(
                r: &mut R,
            ) -> Result<Self, $crate::consensus::encode::Error> {
                Ok(<$hashtype as $crate::hashes::Hash>::from_byte_array(
                    <[u8; 32] as $crate::consensus::Decodable>::consensus_decode(r)?,
                ))
            }
        }
    };
}
