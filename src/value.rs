// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Host-facing rendering of decoded values: the JSON surface exposed by
//! [`crate::Codec::decode_function_result`] and [`crate::Codec::decode_log`].

use serde::{
	ser::{SerializeMap, SerializeSeq},
	Serialize, Serializer,
};

use crate::{Address, Int, Token};

/// A decoded ABI value rendered for the JSON-facing surface.
///
/// Unlike [`crate::Token`], every integer crosses this boundary as a decimal string so a `U256`
/// or negative `I256` value never round-trips through a lossy `f64`, and every byte-like value is
/// a lowercase `0x`-prefixed hex string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
	/// `intN`/`uintN`, as an arbitrary-precision decimal string (negative values carry a `-`).
	Int(String),
	/// `bool`.
	Bool(bool),
	/// `address`, lowercase `0x`-prefixed hex. No EIP-55 checksum is computed.
	Address(String),
	/// `bytes`/`bytesN`, lowercase `0x`-prefixed hex.
	Bytes(String),
	/// `string`.
	String(String),
	/// `T[]`/`T[k]`.
	Array(Vec<Value>),
	/// `(T1,T2,...)`. Field names are `field0`, `field1`, ... — the resolved type tree a
	/// [`Token::Tuple`] decodes against no longer carries the component names past parsing, so
	/// there is nothing else to key by.
	Tuple(Vec<(String, Value)>),
}

impl Value {
	/// Converts a decoded [`Token`] into its host-facing representation.
	pub fn from_token(token: &Token) -> Value {
		match token {
			Token::Bool(b) => Value::Bool(*b),
			Token::String(s) => Value::String(s.clone()),
			Token::Address(a) => Value::Address(format_address(a)),
			Token::Bytes(b) | Token::FixedBytes(b) => Value::Bytes(format_bytes(b)),
			Token::Uint(u) => Value::Int(u.to_string()),
			Token::Int(i) => Value::Int(format_signed(i)),
			Token::Array(items) | Token::FixedArray(items) => {
				Value::Array(items.iter().map(Value::from_token).collect())
			}
			Token::Tuple(fields) => Value::Tuple(
				fields.iter().enumerate().map(|(i, field)| (format!("field{i}"), Value::from_token(field))).collect(),
			),
		}
	}

	/// Converts a list of top-level tokens into an ordered name-keyed map, pairing each token
	/// with the declared parameter name at the same position (falling back to `field{i}` for
	/// unnamed parameters, e.g. tuple components or anonymous outputs).
	pub fn named_from_tokens<'a>(names: impl Iterator<Item = &'a str>, tokens: &[Token]) -> Vec<(String, Value)> {
		names
			.enumerate()
			.zip(tokens)
			.map(|((i, name), token)| {
				let key = if name.is_empty() { format!("field{i}") } else { name.to_owned() };
				(key, Value::from_token(token))
			})
			.collect()
	}
}

fn format_address(address: &Address) -> String {
	format!("0x{address:x}")
}

fn format_bytes(bytes: &[u8]) -> String {
	format!("0x{}", hex::encode(bytes))
}

fn format_signed(value: &Int) -> String {
	if value.bit(255) {
		let magnitude = (!value).overflowing_add(Int::one()).0;
		format!("-{magnitude}")
	} else {
		value.to_string()
	}
}

impl Serialize for Value {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			Value::Int(s) | Value::Address(s) | Value::Bytes(s) | Value::String(s) => serializer.serialize_str(s),
			Value::Bool(b) => serializer.serialize_bool(*b),
			Value::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Value::Tuple(fields) => {
				let mut map = serializer.serialize_map(Some(fields.len()))?;
				for (name, value) in fields {
					map.serialize_entry(name, value)?;
				}
				map.end()
			}
		}
	}
}
