// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use serde::{Deserialize, Serialize};

/// Whether a function reads or modifies blockchain state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateMutability {
	/// Specified not to read blockchain state.
	#[serde(rename = "pure")]
	Pure,
	/// Specified not to modify blockchain state.
	#[serde(rename = "view")]
	View,
	/// Does not accept Ether. The default when the ABI entry omits `stateMutability`.
	#[serde(rename = "nonpayable")]
	NonPayable,
	/// Accepts Ether.
	#[serde(rename = "payable")]
	Payable,
}

impl Default for StateMutability {
	fn default() -> Self {
		Self::NonPayable
	}
}

#[cfg(test)]
mod tests {
	use super::StateMutability;

	#[test]
	fn state_mutability_roundtrip() {
		let json = r#"["pure","view","nonpayable","payable"]"#;
		let deserialized: Vec<StateMutability> = serde_json::from_str(json).unwrap();
		assert_eq!(
			deserialized,
			vec![StateMutability::Pure, StateMutability::View, StateMutability::NonPayable, StateMutability::Payable]
		);
		assert_eq!(serde_json::to_string(&deserialized).unwrap(), json);
	}

	#[test]
	fn state_mutability_default_is_nonpayable() {
		assert_eq!(StateMutability::default(), StateMutability::NonPayable);
	}
}
