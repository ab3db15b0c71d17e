// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A small bounded memoization cache.
//!
//! Used to memoize signature hashing (§4.2) and is transparent: a cache hit and a cache miss
//! MUST return equal values, and every behavior that touches the cache is also tested with the
//! cache disabled (capacity 0).

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Mutex;

/// Default bound on the number of memoized entries.
pub const DEFAULT_CAPACITY: usize = 1024;

/// A bounded, thread-safe memoization cache with a "drop insert when full" eviction policy.
pub struct BoundedCache<K, V> {
	capacity: usize,
	entries: Mutex<HashMap<K, V>>,
}

impl<K, V> BoundedCache<K, V>
where
	K: Eq + Hash + Clone,
	V: Clone,
{
	/// Creates a cache that holds at most `capacity` entries.
	pub fn new(capacity: usize) -> Self {
		BoundedCache { capacity, entries: Mutex::new(HashMap::new()) }
	}

	/// Returns a memoized value for `key`, computing and (capacity permitting) storing it via
	/// `compute` on a miss.
	pub fn get_or_insert_with(&self, key: &K, compute: impl FnOnce() -> V) -> V {
		if let Some(hit) = self.entries.lock().unwrap().get(key) {
			return hit.clone();
		}

		let value = compute();

		let mut entries = self.entries.lock().unwrap();
		if entries.len() < self.capacity && !entries.contains_key(key) {
			entries.insert(key.clone(), value.clone());
		}
		value
	}

	/// Number of entries currently memoized. Exposed for tests only.
	#[cfg(test)]
	fn len(&self) -> usize {
		self.entries.lock().unwrap().len()
	}
}

#[cfg(test)]
mod tests {
	use super::BoundedCache;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[test]
	fn hit_and_miss_agree() {
		let cache: BoundedCache<u32, u32> = BoundedCache::new(4);
		let calls = AtomicUsize::new(0);
		let compute = || {
			calls.fetch_add(1, Ordering::SeqCst);
			42
		};

		assert_eq!(cache.get_or_insert_with(&1, compute), 42);
		assert_eq!(cache.get_or_insert_with(&1, compute), 42);
		assert_eq!(calls.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn drops_inserts_past_capacity_without_breaking_correctness() {
		let cache: BoundedCache<u32, u32> = BoundedCache::new(2);
		for k in 0..10 {
			assert_eq!(cache.get_or_insert_with(&k, || k * 10), k * 10);
		}
		assert!(cache.len() <= 2);

		// Even entries evicted on insert still compute correctly on a repeat miss.
		for k in 0..10 {
			assert_eq!(cache.get_or_insert_with(&k, || k * 10), k * 10);
		}
	}

	#[test]
	fn zero_capacity_cache_is_correct_but_never_hits() {
		let cache: BoundedCache<u32, u32> = BoundedCache::new(0);
		let calls = AtomicUsize::new(0);
		for _ in 0..5 {
			let v = cache.get_or_insert_with(&1, || {
				calls.fetch_add(1, Ordering::SeqCst);
				7
			});
			assert_eq!(v, 7);
		}
		assert_eq!(calls.load(Ordering::SeqCst), 5);
	}
}
