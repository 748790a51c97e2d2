// SPDX-License-Identifier: CC0-1.0

//! DAG consensus.
//!
//! This module defines structures, functions, and traits that are needed to
//! conform to the DAG consensus wire format.

pub mod encode;

pub use self::encode::{Decodable, Encodable, VarInt, deserialize, deserialize_partial, serialize};
