// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Derives function selectors and event topics from canonical signatures (§4.2), memoized
//! through a [`BoundedCache`] so repeatedly hashing the same signature string is cheap.

use crate::cache::{BoundedCache, DEFAULT_CAPACITY};
use crate::keccak::keccak256;
use crate::Hash;
use once_cell::sync::Lazy;

static SIGNATURE_CACHE: Lazy<BoundedCache<String, Hash>> = Lazy::new(|| BoundedCache::new(DEFAULT_CAPACITY));

/// Builds the canonical `name(type1,type2,...)` signature string for a function, event or error.
pub fn long_signature(name: &str, type_names: &[String]) -> String {
	format!("{name}({})", type_names.join(","))
}

/// Hashes `signature`, going through the process-wide memoization cache.
fn hashed_signature(signature: &str) -> Hash {
	SIGNATURE_CACHE.get_or_insert_with(&signature.to_owned(), || keccak256(signature.as_bytes()))
}

/// The 4-byte function selector: the first 4 bytes of `keccak256(signature)`.
pub fn short_signature(name: &str, type_names: &[String]) -> [u8; 4] {
	let hash = hashed_signature(&long_signature(name, type_names));
	let mut selector = [0u8; 4];
	selector.copy_from_slice(&hash.as_bytes()[..4]);
	selector
}

/// The full 32-byte event topic: `keccak256(signature)`.
pub fn event_topic(name: &str, type_names: &[String]) -> Hash {
	hashed_signature(&long_signature(name, type_names))
}

#[cfg(test)]
mod tests {
	use super::{event_topic, short_signature};
	use hex_literal::hex;

	#[test]
	fn transfer_selector_matches_known_value() {
		let selector = short_signature("transfer", &["address".to_owned(), "uint256".to_owned()]);
		assert_eq!(selector, hex!("a9059cbb"));
	}

	#[test]
	fn transfer_event_topic_matches_known_value() {
		let topic = event_topic("Transfer", &["address".to_owned(), "address".to_owned(), "uint256".to_owned()]);
		assert_eq!(
			topic.as_bytes(),
			&hex!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef")[..]
		);
	}

	#[test]
	fn cache_hit_and_miss_agree() {
		let a = short_signature("foo", &["uint256".to_owned()]);
		let b = short_signature("foo", &["uint256".to_owned()]);
		assert_eq!(a, b);
	}
}
