// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The codec facade: binds a parsed [`Contract`] to a selector/topic index and exposes the
//! encode/decode operations a host application actually calls.

use std::collections::HashMap;
use std::io;

use crate::{log::RawLog, Bytes, Contract, Error, Function, Hash, Log, Result, Token};
use crate::event::Event;

/// Either a function's declared name or its 4-byte selector.
#[derive(Debug, Clone, Copy)]
pub enum FunctionRef<'a> {
	/// Looked up by name; if the ABI has overloads sharing that name, the first one wins.
	Name(&'a str),
	/// Looked up by its exact 4-byte selector.
	Selector([u8; 4]),
}

impl<'a> From<&'a str> for FunctionRef<'a> {
	fn from(name: &'a str) -> Self {
		FunctionRef::Name(name)
	}
}

impl From<[u8; 4]> for FunctionRef<'static> {
	fn from(selector: [u8; 4]) -> Self {
		FunctionRef::Selector(selector)
	}
}

/// Either an event's declared name or its 32-byte `topic0`.
#[derive(Debug, Clone, Copy)]
pub enum EventRef<'a> {
	/// Looked up by name; if the ABI has overloads sharing that name, the first one wins.
	Name(&'a str),
	/// Looked up by its exact topic hash.
	Topic(Hash),
}

impl<'a> From<&'a str> for EventRef<'a> {
	fn from(name: &'a str) -> Self {
		EventRef::Name(name)
	}
}

impl From<Hash> for EventRef<'static> {
	fn from(topic: Hash) -> Self {
		EventRef::Topic(topic)
	}
}

/// An ABI bound to an immutable selector/topic index, ready to encode calls and decode call
/// data, return data, and event logs.
///
/// Construction is the only place the index is built; everything after that is a pure function
/// of its inputs, so a `Codec` is `Send + Sync` and safe to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Codec {
	contract: Contract,
	functions_by_selector: HashMap<[u8; 4], Function>,
	events_by_topic: HashMap<Hash, Event>,
}

impl Codec {
	/// Indexes an already-parsed [`Contract`] by selector and topic.
	pub fn new(contract: Contract) -> Self {
		let _span = tracing::debug_span!("Codec::new").entered();

		let functions_by_selector: HashMap<[u8; 4], Function> =
			contract.functions().map(|f| (f.short_signature(), f.clone())).collect();
		let events_by_topic: HashMap<Hash, Event> = contract.events().map(|e| (e.topic(), e.clone())).collect();

		tracing::trace!(
			functions = functions_by_selector.len(),
			events = events_by_topic.len(),
			"indexed contract ABI"
		);

		Codec { contract, functions_by_selector, events_by_topic }
	}

	/// Parses an ABI JSON document and indexes it.
	pub fn from_json<R: io::Read>(reader: R) -> Result<Self> {
		Ok(Self::new(Contract::load(reader)?))
	}

	/// The underlying parsed contract.
	pub fn contract(&self) -> &Contract {
		&self.contract
	}

	fn resolve_function<'a>(&self, id: impl Into<FunctionRef<'a>>) -> Result<&Function> {
		match id.into() {
			FunctionRef::Name(name) => {
				self.contract.function(name).map_err(|_| Error::FunctionNotFound(name.to_owned()))
			}
			FunctionRef::Selector(selector) => self
				.functions_by_selector
				.get(&selector)
				.ok_or_else(|| Error::FunctionNotFound(hex::encode(selector))),
		}
	}

	fn resolve_event<'a>(&self, id: impl Into<EventRef<'a>>) -> Result<&Event> {
		match id.into() {
			EventRef::Name(name) => self.contract.event(name).map_err(|_| Error::EventNotFound(name.to_owned())),
			EventRef::Topic(topic) => {
				self.events_by_topic.get(&topic).ok_or_else(|| Error::EventNotFound(format!("{topic:x}")))
			}
		}
	}

	/// Encodes a full call: 4-byte selector followed by the head/tail encoding of `args`.
	pub fn encode_function<'a>(&self, id: impl Into<FunctionRef<'a>>, args: &[Token]) -> Result<Bytes> {
		let _span = tracing::trace_span!("encode_function").entered();
		self.resolve_function(id)?.encode_input(args)
	}

	/// Decodes a call's argument data (no leading selector) against the function's `inputs`.
	pub fn decode_function<'a>(&self, id: impl Into<FunctionRef<'a>>, data: &[u8]) -> Result<Vec<Token>> {
		let _span = tracing::trace_span!("decode_function").entered();
		self.resolve_function(id)?.decode_input(data)
	}

	/// Decodes a call's return data against the function's `outputs`.
	pub fn decode_function_result<'a>(&self, id: impl Into<FunctionRef<'a>>, data: &[u8]) -> Result<Vec<Token>> {
		let _span = tracing::trace_span!("decode_function_result").entered();
		self.resolve_function(id)?.decode_output(data)
	}

	/// Decodes a single event log, splitting `topics`/`data` into named parameters per §4.5.
	pub fn decode_log<'a>(&self, id: impl Into<EventRef<'a>>, topics: Vec<Hash>, data: Bytes) -> Result<Log> {
		let _span = tracing::trace_span!("decode_log").entered();
		self.resolve_event(id)?.parse_log(RawLog { topics, data })
	}

	/// Every event topic this codec recognizes.
	pub fn known_event_topics(&self) -> Vec<Hash> {
		self.events_by_topic.keys().copied().collect()
	}

	/// Decodes a batch of raw logs, skipping (rather than failing on) any log whose `topics[0]` is
	/// not registered in this codec and any log whose decoding otherwise fails. Output order
	/// matches input order.
	pub fn decode_logs(&self, entries: impl IntoIterator<Item = RawLog>) -> Vec<Log> {
		let _span = tracing::trace_span!("decode_logs").entered();
		entries
			.into_iter()
			.filter_map(|entry| {
				let topic0 = *entry.topics.first()?;
				let event = self.events_by_topic.get(&topic0)?;
				match event.parse_log(entry) {
					Ok(log) => Some(log),
					Err(error) => {
						tracing::debug!(%error, "skipping log that failed to decode");
						None
					}
				}
			})
			.collect()
	}
}
