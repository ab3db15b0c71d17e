// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::{Error, ParamType};

/// Parses a canonical type string (`uint256`, `bytes32`, `(address,uint256)[]`, ...) into a
/// [`ParamType`].
///
/// This is pure grammar: it does not check width/length invariants, and a bare `tuple` keyword
/// parses to an empty [`ParamType::Tuple`] placeholder that the caller (`Param`'s ABI-JSON
/// deserializer) fills in from the sibling `components` array. Call [`ParamType::validate`] on
/// the fully-resolved type once components have been spliced in.
pub struct Reader;

impl Reader {
	/// Converts a type string to a [`ParamType`].
	pub fn read(name: &str) -> Result<ParamType, Error> {
		let name = name.trim();

		if name.starts_with('(') && name.ends_with(')') {
			return Reader::read_tuple(&name[1..name.len() - 1]);
		}

		if name.ends_with(']') {
			return Reader::read_array(name);
		}

		Reader::read_primitive(name)
	}

	fn read_tuple(s: &str) -> Result<ParamType, Error> {
		if s.is_empty() {
			return Ok(ParamType::Tuple(vec![]));
		}

		let mut subtypes = Vec::new();
		let mut start = 0;
		let mut parens = 0i32;

		for (i, c) in s.char_indices() {
			match c {
				'(' => parens += 1,
				')' => parens -= 1,
				',' if parens == 0 => {
					subtypes.push(Reader::read(&s[start..i])?);
					start = i + 1;
				}
				_ => (),
			}
		}
		subtypes.push(Reader::read(&s[start..])?);
		Ok(ParamType::Tuple(subtypes))
	}

	fn read_array(s: &str) -> Result<ParamType, Error> {
		let mut brackets = 0;
		let mut i = s.len() - 1;
		for c in s.chars().rev() {
			match c {
				']' => brackets += 1,
				'[' => {
					brackets -= 1;
					if brackets == 0 {
						break;
					}
				}
				_ => (),
			}
			i -= 1;
		}

		let size_str = &s[i + 1..s.len() - 1];
		let subtype = Reader::read(&s[..i])?;
		let size = if size_str.is_empty() { None } else { Some(size_str.parse::<usize>()?) };

		match size {
			Some(len) => Ok(ParamType::FixedArray(Box::new(subtype), len)),
			None => Ok(ParamType::Array(Box::new(subtype))),
		}
	}

	fn read_primitive(s: &str) -> Result<ParamType, Error> {
		match s {
			"address" => Ok(ParamType::Address),
			"bytes" => Ok(ParamType::Bytes),
			"bool" => Ok(ParamType::Bool),
			"string" => Ok(ParamType::String),
			"int" => Ok(ParamType::Int(256)),
			"tuple" => Ok(ParamType::Tuple(vec![])),
			"uint" => Ok(ParamType::Uint(256)),
			_ if s.starts_with("int") => Ok(ParamType::Int(s[3..].parse::<usize>()?)),
			_ if s.starts_with("uint") => Ok(ParamType::Uint(s[4..].parse::<usize>()?)),
			_ if s.starts_with("bytes") => Ok(ParamType::FixedBytes(s[5..].parse::<usize>()?)),
			_ => Err(Error::AbiParseError(format!("unrecognized type `{s}`"))),
		}
	}
}
