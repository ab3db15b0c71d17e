// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Event log records, before and after decoding.

use crate::{Bytes, Hash, Token};

/// An undecoded log entry as it comes off a transaction receipt: topics plus the non-indexed
/// data blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLog {
	/// Indexed topics, `topics[0]` is the event hash for non-anonymous events.
	pub topics: Vec<Hash>,
	/// Concatenated non-indexed parameter data, in head/tail layout.
	pub data: Bytes,
}

impl From<(Vec<Hash>, Bytes)> for RawLog {
	fn from(raw: (Vec<Hash>, Bytes)) -> Self {
		RawLog { topics: raw.0, data: raw.1 }
	}
}

/// One decoded event parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogParam {
	/// Parameter name (empty if the ABI entry did not name it).
	pub name: String,
	/// Decoded value. For a dynamic indexed parameter this is the raw 32-byte topic hash rather
	/// than an attempted preimage (see §4.5).
	pub value: Token,
}

/// A fully decoded event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Log {
	/// Name of the event that produced this log.
	pub name: String,
	/// Decoded parameters, in declaration order.
	pub params: Vec<LogParam>,
}

impl Log {
	/// Looks up a decoded parameter by name.
	pub fn param(&self, name: &str) -> Option<&LogParam> {
		self.params.iter().find(|p| p.name == name)
	}
}
