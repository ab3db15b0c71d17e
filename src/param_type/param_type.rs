// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The ABI type grammar.

use super::{Reader, Writer};
use crate::errors::Error;
use std::fmt;

/// Maximum tuple/array nesting depth accepted from an ABI descriptor (§5 resource bounds).
pub const MAX_NESTING_DEPTH: usize = 32;

/// A resolved ABI type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
	/// `address`, 20 bytes right-aligned in a 32-byte word.
	Address,
	/// `bytes`, dynamic length.
	Bytes,
	/// `intN`, two's-complement signed integer of `bits` width.
	Int(usize),
	/// `uintN`, unsigned integer of `bits` width.
	Uint(usize),
	/// `bool`.
	Bool,
	/// `string`, dynamic length, UTF-8.
	String,
	/// `T[]`, dynamic-length array of `T`.
	Array(Box<ParamType>),
	/// `bytesN`, 1..=32 bytes, left-aligned and zero-padded.
	FixedBytes(usize),
	/// `T[k]`, fixed-length array of `T`.
	FixedArray(Box<ParamType>, usize),
	/// `(T1,T2,...)`, a heterogeneous tuple.
	Tuple(Vec<ParamType>),
}

impl fmt::Display for ParamType {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", Writer::write(self))
	}
}

impl serde::Serialize for ParamType {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&Writer::write(self))
	}
}

impl<'de> serde::Deserialize<'de> for ParamType {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let s = String::deserialize(deserializer)?;
		Reader::read(&s).map_err(serde::de::Error::custom)
	}
}

impl ParamType {
	/// Whether a zero-length byte slice (`0x`) is a valid encoded form of this type, used by the
	/// decoder's empty-input guard.
	pub fn is_empty_bytes_valid_encoding(&self) -> bool {
		match self {
			ParamType::FixedBytes(len) => *len == 0,
			ParamType::FixedArray(_, len) => *len == 0,
			ParamType::Tuple(fields) => fields.is_empty(),
			_ => false,
		}
	}

	/// The dynamism predicate (§3): a type is dynamic iff it is `bytes`, `string`, a dynamic
	/// array, a fixed array of a dynamic type, or a tuple containing any dynamic field.
	pub fn is_dynamic(&self) -> bool {
		match self {
			ParamType::Bytes | ParamType::String | ParamType::Array(_) => true,
			ParamType::FixedArray(elem, _) => elem.is_dynamic(),
			ParamType::Tuple(fields) => fields.iter().any(ParamType::is_dynamic),
			ParamType::Address
			| ParamType::Int(_)
			| ParamType::Uint(_)
			| ParamType::Bool
			| ParamType::FixedBytes(_) => false,
		}
	}

	/// Static size in bytes, or `None` if the type is dynamic.
	pub fn static_size(&self) -> Option<usize> {
		if self.is_dynamic() {
			return None;
		}
		Some(match self {
			ParamType::Address | ParamType::Int(_) | ParamType::Uint(_) | ParamType::Bool | ParamType::FixedBytes(_) => 32,
			ParamType::FixedArray(elem, len) => elem.static_size()? * len,
			ParamType::Tuple(fields) => fields.iter().map(|f| f.static_size()).sum::<Option<usize>>()?,
			ParamType::Bytes | ParamType::String | ParamType::Array(_) => unreachable!("dynamic types handled above"),
		})
	}

	/// Head size in bytes when this type appears as a top-level/tuple-field/array-element
	/// argument: 32 for a dynamic type (it contributes an offset word), its static size otherwise.
	pub fn head_size(&self) -> usize {
		self.static_size().unwrap_or(32)
	}

	/// Validates the width/length invariants from §4.1, recursively, rejecting nesting deeper
	/// than [`MAX_NESTING_DEPTH`].
	pub fn validate(&self) -> Result<(), Error> {
		self.validate_at_depth(0)
	}

	fn validate_at_depth(&self, depth: usize) -> Result<(), Error> {
		if depth > MAX_NESTING_DEPTH {
			return Err(Error::AbiParseError(format!("type nesting exceeds {MAX_NESTING_DEPTH} levels")));
		}
		match self {
			ParamType::Uint(bits) | ParamType::Int(bits) => {
				if *bits == 0 || *bits > 256 || bits % 8 != 0 {
					return Err(Error::AbiParseError(format!("invalid integer width {bits}")));
				}
				Ok(())
			}
			ParamType::FixedBytes(n) => {
				if *n == 0 || *n > 32 {
					return Err(Error::AbiParseError(format!("invalid fixed bytes length {n}")));
				}
				Ok(())
			}
			ParamType::FixedArray(elem, len) => {
				if *len == 0 {
					return Err(Error::AbiParseError("zero-length fixed array".into()));
				}
				elem.validate_at_depth(depth + 1)
			}
			ParamType::Array(elem) => elem.validate_at_depth(depth + 1),
			ParamType::Tuple(fields) => {
				if fields.is_empty() {
					return Err(Error::AbiParseError("empty tuple".into()));
				}
				fields.iter().try_for_each(|f| f.validate_at_depth(depth + 1))
			}
			ParamType::Address | ParamType::Bytes | ParamType::Bool | ParamType::String => Ok(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::ParamType;

	#[test]
	fn test_param_type_display() {
		assert_eq!(format!("{}", ParamType::Address), "address");
		assert_eq!(format!("{}", ParamType::Bytes), "bytes");
		assert_eq!(format!("{}", ParamType::FixedBytes(32)), "bytes32");
		assert_eq!(format!("{}", ParamType::Uint(256)), "uint256");
		assert_eq!(format!("{}", ParamType::Int(64)), "int64");
		assert_eq!(format!("{}", ParamType::Bool), "bool");
		assert_eq!(format!("{}", ParamType::String), "string");
		assert_eq!(format!("{}", ParamType::Array(Box::new(ParamType::Bool))), "bool[]");
		assert_eq!(format!("{}", ParamType::FixedArray(Box::new(ParamType::String), 2)), "string[2]");
	}

	#[test]
	fn dynamism_classification() {
		assert!(!ParamType::Uint(256).is_dynamic());
		assert!(!ParamType::FixedBytes(32).is_dynamic());
		assert!(ParamType::Bytes.is_dynamic());
		assert!(ParamType::String.is_dynamic());
		assert!(ParamType::Array(Box::new(ParamType::Bool)).is_dynamic());
		assert!(ParamType::FixedArray(Box::new(ParamType::Bytes), 3).is_dynamic());
		assert!(!ParamType::FixedArray(Box::new(ParamType::Bool), 3).is_dynamic());
		assert!(ParamType::Tuple(vec![ParamType::Bool, ParamType::String]).is_dynamic());
		assert!(!ParamType::Tuple(vec![ParamType::Bool, ParamType::Uint(8)]).is_dynamic());
		// A tuple nested inside an array is dynamic iff the tuple itself is.
		assert!(ParamType::FixedArray(Box::new(ParamType::Tuple(vec![ParamType::String])), 2).is_dynamic());
	}

	#[test]
	fn static_sizes() {
		assert_eq!(ParamType::Uint(256).static_size(), Some(32));
		assert_eq!(ParamType::FixedArray(Box::new(ParamType::Uint(8)), 4).static_size(), Some(128));
		assert_eq!(ParamType::Tuple(vec![ParamType::Bool, ParamType::Uint(8)]).static_size(), Some(64));
		assert_eq!(ParamType::Bytes.static_size(), None);
		assert_eq!(ParamType::Array(Box::new(ParamType::Bool)).static_size(), None);
	}

	#[test]
	fn validation_rejects_bad_widths() {
		assert!(ParamType::Uint(7).validate().is_err());
		assert!(ParamType::Uint(264).validate().is_err());
		assert!(ParamType::Int(0).validate().is_err());
		assert!(ParamType::Uint(256).validate().is_ok());
	}

	#[test]
	fn validation_rejects_bad_fixed_bytes() {
		assert!(ParamType::FixedBytes(0).validate().is_err());
		assert!(ParamType::FixedBytes(33).validate().is_err());
		assert!(ParamType::FixedBytes(32).validate().is_ok());
	}

	#[test]
	fn validation_rejects_empty_tuple_and_zero_array() {
		assert!(ParamType::Tuple(vec![]).validate().is_err());
		assert!(ParamType::FixedArray(Box::new(ParamType::Bool), 0).validate().is_err());
	}
}
