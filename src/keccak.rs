// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Thin facade around the Keccak-256 primitive used to derive selectors and topics.
//!
//! This is deliberately the only place in the crate that names the hashing crate, so the
//! primitive can be swapped without touching the signature engine.

use crate::Hash;
use sha3::{Digest, Keccak256};

/// Hashes `bytes` with Keccak-256 (not NIST SHA3-256 — different padding).
pub fn keccak256(bytes: &[u8]) -> Hash {
	let mut hasher = Keccak256::new();
	hasher.update(bytes);
	let digest = hasher.finalize();
	let mut hash = [0u8; 32];
	hash.copy_from_slice(&digest);
	hash.into()
}
