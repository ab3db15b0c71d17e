// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Contract function call builder.

use serde::{Deserialize, Serialize};

use crate::{decode, encode, signature::short_signature, Bytes, Param, ParamType, Result, StateMutability, Token};

/// Contract function specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
	/// Function name.
	#[serde(deserialize_with = "crate::util::sanitize_name::deserialize")]
	pub name: String,
	/// Function input.
	pub inputs: Vec<Param>,
	/// Function output.
	pub outputs: Vec<Param>,
	/// Whether the function reads or modifies blockchain state.
	#[serde(rename = "stateMutability", default)]
	pub state_mutability: StateMutability,
}

impl Function {
	fn input_param_types(&self) -> Vec<ParamType> {
		self.inputs.iter().map(|p| p.kind.clone()).collect()
	}

	fn output_param_types(&self) -> Vec<ParamType> {
		self.outputs.iter().map(|p| p.kind.clone()).collect()
	}

	/// Encodes a full call: the 4-byte selector followed by the ABI-encoded arguments.
	pub fn encode_input(&self, tokens: &[Token]) -> Result<Bytes> {
		let params = self.input_param_types();
		Token::ensure_types_match(tokens, &params)?;

		let signed = self.short_signature().to_vec();
		let encoded = encode(tokens);
		Ok(signed.into_iter().chain(encoded).collect())
	}

	/// The 4-byte selector: the first 4 bytes of `keccak256(signature)`.
	pub fn short_signature(&self) -> [u8; 4] {
		short_signature(&self.name, &self.input_param_types().iter().map(ToString::to_string).collect::<Vec<_>>())
	}

	/// Decodes a call's return data (no selector prefix) into tokens.
	pub fn decode_output(&self, data: &[u8]) -> Result<Vec<Token>> {
		decode(&self.output_param_types(), data)
	}

	/// Decodes a call's argument data, without its leading 4-byte selector, into tokens.
	pub fn decode_input(&self, data: &[u8]) -> Result<Vec<Token>> {
		decode(&self.input_param_types(), data)
	}

	/// A signature uniquely identifying this function by name and argument/return types.
	///
	/// Examples:
	/// - `functionName()`
	/// - `functionName():(uint256)`
	/// - `functionName(bool):(uint256,string)`
	pub fn signature(&self) -> String {
		let inputs = self.inputs.iter().map(|p| p.kind.to_string()).collect::<Vec<_>>().join(",");
		let outputs = self.outputs.iter().map(|p| p.kind.to_string()).collect::<Vec<_>>().join(",");

		match outputs.len() {
			0 => format!("{}({})", self.name, inputs),
			_ => format!("{}({}):({})", self.name, inputs, outputs),
		}
	}
}
