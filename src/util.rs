// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Primitive utilities shared by the encoder and decoder: hex/word padding helpers.

use crate::{Error, Word};

/// Converts a vector of bytes with len equal n * 32, to a vector of slices.
pub fn slice_data(data: &[u8]) -> Result<Vec<Word>, Error> {
	if data.len() % 32 != 0 {
		return Err(Error::Truncated(format!("data length {} is not a multiple of 32", data.len())));
	}

	let times = data.len() / 32;
	let mut result = Vec::with_capacity(times);
	for i in 0..times {
		let mut slice = [0u8; 32];
		let offset = 32 * i;
		slice.copy_from_slice(&data[offset..offset + 32]);
		result.push(slice);
	}
	Ok(result)
}

/// Converts a u32 to a right aligned array of 32 bytes.
pub fn pad_u32(value: u32) -> Word {
	let mut padded = [0u8; 32];
	padded[28] = (value >> 24) as u8;
	padded[29] = (value >> 16) as u8;
	padded[30] = (value >> 8) as u8;
	padded[31] = value as u8;
	padded
}

/// Converts an i128 to a right aligned, sign-extended array of 32 bytes.
pub fn pad_i128(value: i128) -> Word {
	if value >= 0 {
		let mut padded = [0u8; 32];
		padded[16..].copy_from_slice(&value.to_be_bytes());
		return padded;
	}

	let mut padded = [0xffu8; 32];
	for (idx, byte) in padded.iter_mut().enumerate().skip(16) {
		*byte = (value >> (8 * (31 - idx))) as u8;
	}
	padded
}

/// Reads a big-endian length word, rejecting values that don't fit a `usize` or that claim more
/// bytes than `remaining` makes available in the input buffer.
pub fn read_length(word: &Word, remaining: usize) -> Result<usize, Error> {
	if !word[..28].iter().all(|b| *b == 0) {
		return Err(Error::OffsetOutOfRange("length word exceeds u32::MAX".into()));
	}
	let len = u32::from_be_bytes([word[28], word[29], word[30], word[31]]) as usize;
	if len > remaining {
		return Err(Error::Truncated(format!("declared length {len} exceeds {remaining} remaining bytes")));
	}
	Ok(len)
}

/// Strips the `(...)` argument-list suffix some non-compliant ABI generators append to a
/// function or event `name` field (parity/parity#4122): `"foo(uint256)"` becomes `"foo"`.
pub mod sanitize_name {
	use serde::{Deserialize, Deserializer};

	pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
	where
		D: Deserializer<'de>,
	{
		let mut name = String::deserialize(deserializer)?;
		if let Some(i) = name.find('(') {
			name.truncate(i);
		}
		Ok(name)
	}
}

#[cfg(test)]
mod tests {
	use super::{pad_i128, pad_u32};
	use hex_literal::hex;

	#[test]
	fn test_pad_u32() {
		// this will fail if endianness is not supported
		assert_eq!(
			pad_u32(0).to_vec(),
			hex!("0000000000000000000000000000000000000000000000000000000000000000").to_vec()
		);
		assert_eq!(
			pad_u32(1).to_vec(),
			hex!("0000000000000000000000000000000000000000000000000000000000000001").to_vec()
		);
		assert_eq!(
			pad_u32(0x100).to_vec(),
			hex!("0000000000000000000000000000000000000000000000000000000000000100").to_vec()
		);
		assert_eq!(
			pad_u32(0xffffffff).to_vec(),
			hex!("00000000000000000000000000000000000000000000000000000000ffffffff").to_vec()
		);
	}

	#[test]
	fn test_pad_i128() {
		assert_eq!(
			pad_i128(0).to_vec(),
			hex!("0000000000000000000000000000000000000000000000000000000000000000").to_vec()
		);
		assert_eq!(
			pad_i128(-1).to_vec(),
			hex!("ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff").to_vec()
		);
		assert_eq!(
			pad_i128(-256).to_vec(),
			hex!("ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff00").to_vec()
		);
	}

	#[test]
	fn test_read_length_rejects_oversized_claim() {
		let mut word = [0u8; 32];
		word[31] = 100;
		assert!(super::read_length(&word, 50).is_err());
		assert_eq!(super::read_length(&word, 100).unwrap(), 100);
	}

	#[test]
	fn test_sanitize_name_strips_argument_list() {
		#[derive(serde::Deserialize)]
		struct Wrapper {
			#[serde(deserialize_with = "super::sanitize_name::deserialize")]
			name: String,
		}

		let w: Wrapper = serde_json::from_str(r#"{"name":"foo(uint256)"}"#).unwrap();
		assert_eq!(w.name, "foo");
		let w: Wrapper = serde_json::from_str(r#"{"name":"foo"}"#).unwrap();
		assert_eq!(w.name, "foo");
	}
}
