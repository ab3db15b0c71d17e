// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ABI decoder: the inverse of [`crate::encoder::encode`].

use crate::token::{check_int_range, check_uint_range};
use crate::util::slice_data;
use crate::{Error, ParamType, Token, Word};

struct DecodeResult {
	token: Token,
	new_offset: usize,
}

struct BytesTaken {
	bytes: Vec<u8>,
	new_offset: usize,
}

fn as_offset(slice: &Word) -> Result<usize, Error> {
	if !slice[..28].iter().all(|x| *x == 0) {
		return Err(Error::OffsetOutOfRange("offset word exceeds u32::MAX".into()));
	}

	Ok((((slice[28] as u32) << 24) + ((slice[29] as u32) << 16) + ((slice[30] as u32) << 8) + (slice[31] as u32))
		as usize)
}

fn as_bool(slice: &Word) -> Result<bool, Error> {
	if !slice[..31].iter().all(|x| *x == 0) || slice[31] > 1 {
		return Err(Error::TypeMismatch { index: 0, expected: "bool".into() });
	}

	Ok(slice[31] == 1)
}

/// Decodes an ABI-compliant byte slice into a vector of tokens described by `types`.
pub fn decode(types: &[ParamType], data: &[u8]) -> Result<Vec<Token>, Error> {
	let is_empty_bytes_valid_encoding = types.iter().all(|t| t.is_empty_bytes_valid_encoding());
	if !is_empty_bytes_valid_encoding && data.is_empty() {
		return Err(Error::Truncated(
			"failed to decode empty bytes: the contract or method likely does not exist".into(),
		));
	}

	let slices = slice_data(data)?;
	let mut tokens = Vec::with_capacity(types.len());
	let mut offset = 0;
	for param in types {
		let res = decode_param(param, &slices, offset)?;
		offset = res.new_offset;
		tokens.push(res.token);
	}
	Ok(tokens)
}

fn peek(slices: &[Word], position: usize) -> Result<&Word, Error> {
	slices.get(position).ok_or_else(|| Error::OffsetOutOfRange(format!("word {position} is out of range")))
}

fn take_bytes(slices: &[Word], position: usize, len: usize) -> Result<BytesTaken, Error> {
	let slices_len = (len + 31) / 32;

	let mut bytes_slices = Vec::with_capacity(slices_len);
	for i in 0..slices_len {
		let slice = peek(slices, position + i)?;
		bytes_slices.push(slice);
	}

	let bytes = bytes_slices.into_iter().flat_map(|slice| slice.to_vec()).take(len).collect();

	Ok(BytesTaken { bytes, new_offset: position + slices_len })
}

/// Reads the dynamic-value length word at `offset` and the subsequent payload.
fn take_dynamic_bytes(slices: &[Word], offset: usize) -> Result<BytesTaken, Error> {
	let offset_slice = peek(slices, offset)?;
	let len_offset = as_offset(offset_slice)? / 32;

	let len_slice = peek(slices, len_offset)?;
	let remaining_bytes = slices.len().saturating_sub(len_offset + 1) * 32;
	let len = crate::util::read_length(len_slice, remaining_bytes)?;

	take_bytes(slices, len_offset + 1, len)
}

fn decode_param(param: &ParamType, slices: &[Word], offset: usize) -> Result<DecodeResult, Error> {
	match param {
		ParamType::Address => {
			let slice = peek(slices, offset)?;
			let mut address = [0u8; 20];
			address.copy_from_slice(&slice[12..]);
			Ok(DecodeResult { token: Token::Address(address.into()), new_offset: offset + 1 })
		}
		ParamType::Int(bits) => {
			let slice = peek(slices, offset)?;
			let value: crate::Int = (*slice).into();
			check_int_range(value, *bits)?;
			Ok(DecodeResult { token: Token::Int(value), new_offset: offset + 1 })
		}
		ParamType::Uint(bits) => {
			let slice = peek(slices, offset)?;
			let value: crate::Uint = (*slice).into();
			check_uint_range(value, *bits)?;
			Ok(DecodeResult { token: Token::Uint(value), new_offset: offset + 1 })
		}
		ParamType::Bool => {
			let slice = peek(slices, offset)?;
			let b = as_bool(slice)?;
			Ok(DecodeResult { token: Token::Bool(b), new_offset: offset + 1 })
		}
		ParamType::FixedBytes(len) => {
			let taken = take_bytes(slices, offset, *len)?;
			Ok(DecodeResult { token: Token::FixedBytes(taken.bytes), new_offset: taken.new_offset })
		}
		ParamType::Bytes => {
			let taken = take_dynamic_bytes(slices, offset)?;
			Ok(DecodeResult { token: Token::Bytes(taken.bytes), new_offset: offset + 1 })
		}
		ParamType::String => {
			let taken = take_dynamic_bytes(slices, offset)?;
			let s = String::from_utf8(taken.bytes).map_err(|_| Error::InvalidUtf8)?;
			Ok(DecodeResult { token: Token::String(s), new_offset: offset + 1 })
		}
		ParamType::Array(t) => {
			let offset_slice = peek(slices, offset)?;
			let len_offset = as_offset(offset_slice)? / 32;

			let len_slice = peek(slices, len_offset)?;
			let remaining_words = slices.len().saturating_sub(len_offset + 1);
			let len = as_offset(len_slice)?;
			if len > remaining_words {
				return Err(Error::Truncated(format!("array of {len} elements exceeds {remaining_words} remaining words")));
			}

			let sub_slices = &slices[len_offset + 1..];
			let mut tokens = Vec::with_capacity(len);
			let mut new_offset = 0;
			for _ in 0..len {
				let res = decode_param(t, sub_slices, new_offset)?;
				new_offset = res.new_offset;
				tokens.push(res.token);
			}

			Ok(DecodeResult { token: Token::Array(tokens), new_offset: offset + 1 })
		}
		ParamType::FixedArray(t, len) => {
			let mut tokens = Vec::with_capacity(*len);
			let new_offset = if param.is_dynamic() {
				let offset_slice = peek(slices, offset)?;
				let tail_offset = as_offset(offset_slice)? / 32;
				let sub_slices = &slices[tail_offset..];
				let mut new_offset = 0;

				for _ in 0..*len {
					let res = decode_param(t, sub_slices, new_offset)?;
					new_offset = res.new_offset;
					tokens.push(res.token);
				}
				offset + 1
			} else {
				let mut new_offset = offset;

				for _ in 0..*len {
					let res = decode_param(t, slices, new_offset)?;
					new_offset = res.new_offset;
					tokens.push(res.token);
				}
				new_offset
			};

			Ok(DecodeResult { token: Token::FixedArray(tokens), new_offset })
		}
		ParamType::Tuple(fields) => {
			let mut tokens = Vec::with_capacity(fields.len());
			let new_offset = if param.is_dynamic() {
				let offset_slice = peek(slices, offset)?;
				let tail_offset = as_offset(offset_slice)? / 32;
				let sub_slices = &slices[tail_offset..];
				let mut new_offset = 0;

				for field in fields {
					let res = decode_param(field, sub_slices, new_offset)?;
					new_offset = res.new_offset;
					tokens.push(res.token);
				}
				offset + 1
			} else {
				let mut new_offset = offset;

				for field in fields {
					let res = decode_param(field, slices, new_offset)?;
					new_offset = res.new_offset;
					tokens.push(res.token);
				}
				new_offset
			};

			Ok(DecodeResult { token: Token::Tuple(tokens), new_offset })
		}
	}
}
