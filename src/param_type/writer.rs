// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::ParamType;

/// Renders a [`ParamType`] to its canonical type string — the inverse of [`super::Reader`].
///
/// Bare `int`/`uint` never appear on this side: [`ParamType::Int`]/[`ParamType::Uint`] always
/// carry an explicit width, so the output always reads `int256`/`uint256` and so on.
pub struct Writer;

impl Writer {
	/// Writes the canonical type string for `param_type`.
	pub fn write(param_type: &ParamType) -> String {
		match param_type {
			ParamType::Address => "address".to_owned(),
			ParamType::Bytes => "bytes".to_owned(),
			ParamType::FixedBytes(len) => format!("bytes{len}"),
			ParamType::Int(len) => format!("int{len}"),
			ParamType::Uint(len) => format!("uint{len}"),
			ParamType::Bool => "bool".to_owned(),
			ParamType::String => "string".to_owned(),
			ParamType::FixedArray(param_type, len) => format!("{}[{}]", Writer::write(param_type), len),
			ParamType::Array(param_type) => format!("{}[]", Writer::write(param_type)),
			ParamType::Tuple(params) => {
				format!("({})", params.iter().map(Writer::write).collect::<Vec<_>>().join(","))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::Writer;
	use crate::ParamType;

	#[test]
	fn test_write_param() {
		assert_eq!(Writer::write(&ParamType::Address), "address");
		assert_eq!(Writer::write(&ParamType::Bytes), "bytes");
		assert_eq!(Writer::write(&ParamType::FixedBytes(32)), "bytes32");
		assert_eq!(Writer::write(&ParamType::Uint(256)), "uint256");
		assert_eq!(Writer::write(&ParamType::Int(64)), "int64");
		assert_eq!(Writer::write(&ParamType::Bool), "bool");
		assert_eq!(Writer::write(&ParamType::String), "string");
	}

	#[test]
	fn test_write_tuple() {
		let tuple = ParamType::Tuple(vec![ParamType::Address, ParamType::Array(Box::new(ParamType::Uint(256)))]);
		assert_eq!(Writer::write(&tuple), "(address,uint256[])");
	}

	#[test]
	fn test_write_nested_tuple() {
		let tuple = ParamType::Tuple(vec![
			ParamType::Tuple(vec![ParamType::Bool, ParamType::String]),
			ParamType::FixedArray(Box::new(ParamType::Uint(8)), 4),
		]);
		assert_eq!(Writer::write(&tuple), "((bool,string),uint8[4])");
	}
}
