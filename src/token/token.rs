// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decoded/pre-encoding representation of an ABI value.

use crate::{Address, Error, FixedBytes, Int, ParamType, Uint};
use ethereum_types::U256;
use std::fmt;

/// A value tokenized per one of the types in [`ParamType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
	/// `address`.
	Address(Address),
	/// `bytes`, dynamic length.
	Bytes(Vec<u8>),
	/// `intN`.
	Int(Int),
	/// `uintN`.
	Uint(Uint),
	/// `bool`.
	Bool(bool),
	/// `string`.
	String(String),
	/// `T[]`.
	Array(Vec<Token>),
	/// `bytesN`, fixed length (1..=32).
	FixedBytes(FixedBytes),
	/// `T[k]`.
	FixedArray(Vec<Token>),
	/// `(T1,T2,...)`.
	Tuple(Vec<Token>),
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Token::Bool(b) => write!(f, "{b}"),
			Token::String(s) => write!(f, "{s}"),
			Token::Address(a) => write!(f, "{a:x}"),
			Token::Bytes(bytes) | Token::FixedBytes(bytes) => write!(f, "{}", hex::encode(bytes)),
			Token::Uint(i) => write!(f, "{i}"),
			Token::Int(i) => write!(f, "{i}"),
			Token::Array(arr) | Token::FixedArray(arr) | Token::Tuple(arr) => {
				let s: Vec<String> = arr.iter().map(ToString::to_string).collect();
				write!(f, "({})", s.join(","))
			}
		}
	}
}

/// Checks that `value` has no bit set at position `bits` or above — the `uintN` encode/decode
/// bound from §4.3/§4.4.
pub(crate) fn check_uint_range(value: Uint, bits: usize) -> Result<(), Error> {
	if bits < 256 && (value >> bits) != U256::zero() {
		return Err(Error::RangeError {
			type_name: format!("uint{bits}"),
			detail: format!("{value} does not fit in {bits} bits"),
		});
	}
	Ok(())
}

/// Checks that `value`, read as a two's-complement 256-bit word, is properly sign-extended above
/// bit `bits - 1` — the `intN` encode/decode bound from §4.3/§4.4.
pub(crate) fn check_int_range(value: Int, bits: usize) -> Result<(), Error> {
	if bits >= 256 {
		return Ok(());
	}
	let negative = value.bit(255);
	let upper = value >> (bits - 1);
	let fits = if negative { upper == (U256::max_value() >> (bits - 1)) } else { upper.is_zero() };
	if !fits {
		return Err(Error::RangeError {
			type_name: format!("int{bits}"),
			detail: format!("value does not fit in a signed {bits}-bit range"),
		});
	}
	Ok(())
}

impl Token {
	/// Whether this token's shape is compatible with `param_type`, including — for `intN`/`uintN`
	/// — whether its magnitude actually fits the declared width.
	pub fn type_check(&self, param_type: &ParamType) -> bool {
		match (self, param_type) {
			(Token::Address(_), ParamType::Address)
			| (Token::Bytes(_), ParamType::Bytes)
			| (Token::Bool(_), ParamType::Bool)
			| (Token::String(_), ParamType::String) => true,
			(Token::Int(value), ParamType::Int(bits)) => check_int_range(*value, *bits).is_ok(),
			(Token::Uint(value), ParamType::Uint(bits)) => check_uint_range(*value, *bits).is_ok(),
			(Token::FixedBytes(bytes), ParamType::FixedBytes(len)) => bytes.len() == *len,
			(Token::Array(tokens), ParamType::Array(inner)) => tokens.iter().all(|t| t.type_check(inner)),
			(Token::FixedArray(tokens), ParamType::FixedArray(inner, len)) => {
				tokens.len() == *len && tokens.iter().all(|t| t.type_check(inner))
			}
			(Token::Tuple(tokens), ParamType::Tuple(inner)) => {
				tokens.len() == inner.len() && tokens.iter().zip(inner).all(|(t, p)| t.type_check(p))
			}
			_ => false,
		}
	}

	/// Whether every token in `tokens` matches its corresponding entry in `param_types`.
	pub fn types_check(tokens: &[Token], param_types: &[ParamType]) -> bool {
		param_types.len() == tokens.len() && param_types.iter().zip(tokens).all(|(pt, t)| t.type_check(pt))
	}

	/// Like [`Token::types_check`], but returns a precise [`Error`] identifying the first mismatch
	/// instead of a bare `bool`, and additionally rejects an `intN`/`uintN` token whose magnitude
	/// does not fit the declared width (`Token::Int`/`Token::Uint` carry a full 256-bit value with
	/// no width of their own — `param_type` is the only place the declared `bits` is known, so this
	/// is the one point upstream of [`crate::encode`] able to catch it).
	pub fn ensure_types_match(tokens: &[Token], param_types: &[ParamType]) -> Result<(), Error> {
		if tokens.len() != param_types.len() {
			return Err(Error::ArityMismatch { expected: param_types.len(), got: tokens.len() });
		}
		for (index, (token, param_type)) in tokens.iter().zip(param_types).enumerate() {
			match (token, param_type) {
				(Token::Uint(value), ParamType::Uint(bits)) => check_uint_range(*value, *bits)?,
				(Token::Int(value), ParamType::Int(bits)) => check_int_range(*value, *bits)?,
				_ if !token.type_check(param_type) => {
					return Err(Error::TypeMismatch { index, expected: param_type.to_string() })
				}
				_ => {}
			}
		}
		Ok(())
	}

	/// Whether this token's ABI encoding has a dynamic (variable-length) tail.
	pub fn is_dynamic(&self) -> bool {
		match self {
			Token::Bytes(_) | Token::String(_) | Token::Array(_) => true,
			Token::FixedArray(tokens) => tokens.iter().any(Token::is_dynamic),
			Token::Tuple(tokens) => tokens.iter().any(Token::is_dynamic),
			Token::Address(_) | Token::Int(_) | Token::Uint(_) | Token::Bool(_) | Token::FixedBytes(_) => false,
		}
	}
}
