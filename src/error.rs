// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Contract custom error (Solidity `error Foo(...)`) specification.

use serde::{Deserialize, Serialize};

use crate::{decode, encode, signature::short_signature, Bytes, Param, ParamType, Result, Token};

/// A Solidity custom error declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
	/// Error name.
	#[serde(deserialize_with = "crate::util::sanitize_name::deserialize")]
	pub name: String,
	/// Error input.
	pub inputs: Vec<Param>,
}

impl Error {
	fn param_types(&self) -> Vec<ParamType> {
		self.inputs.iter().map(|p| p.kind.clone()).collect()
	}

	/// The 4-byte selector this error is revert-encoded with, identical in derivation to a
	/// function selector.
	pub fn selector(&self) -> [u8; 4] {
		short_signature(&self.name, &self.param_types().iter().map(ToString::to_string).collect::<Vec<_>>())
	}

	/// Encodes a revert payload: the 4-byte selector followed by the ABI-encoded arguments.
	pub fn encode(&self, tokens: &[Token]) -> Result<Bytes> {
		Token::ensure_types_match(tokens, &self.param_types())?;
		let signed = self.selector().to_vec();
		let encoded = encode(tokens);
		Ok(signed.into_iter().chain(encoded).collect())
	}

	/// Decodes a revert payload's argument data, without its leading 4-byte selector.
	pub fn decode(&self, data: &[u8]) -> Result<Vec<Token>> {
		decode(&self.param_types(), data)
	}
}
