// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Contract event specification and log decoding.

use serde::{Deserialize, Serialize};

use crate::{
	decode, log::RawLog, signature::event_topic, Error, EventParam, Hash, Log, LogParam, ParamType, Result, Token,
};

/// Contract event specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
	/// Event name.
	#[serde(deserialize_with = "crate::util::sanitize_name::deserialize")]
	pub name: String,
	/// Event input.
	pub inputs: Vec<EventParam>,
	/// Whether this event does not emit its topic hash as `topics[0]`.
	#[serde(default)]
	pub anonymous: bool,
}

impl Event {
	fn param_types(&self) -> Vec<ParamType> {
		self.inputs.iter().map(|p| p.kind.clone()).collect()
	}

	/// The canonical `name(type1,type2,...)` signature, independent of parameter names and of
	/// `indexed`/`anonymous` flags.
	pub fn signature(&self) -> String {
		format!("{}({})", self.name, self.param_types().iter().map(ToString::to_string).collect::<Vec<_>>().join(","))
	}

	/// The full 32-byte event topic (`topic0`), even for anonymous events — it is simply never
	/// emitted as `topics[0]` on chain for those.
	pub fn topic(&self) -> Hash {
		event_topic(&self.name, &self.param_types().iter().map(ToString::to_string).collect::<Vec<_>>())
	}

	/// Decodes a raw log into its named parameters, per §4.5: indexed parameters come from
	/// `topics` (dynamic ones as their raw topic hash, never an attempted preimage), non-indexed
	/// parameters are decoded from `data` as a single head/tail-laid-out tuple.
	pub fn parse_log(&self, log: RawLog) -> Result<Log> {
		let topics_start = if self.anonymous { 0 } else { 1 };
		let indexed_topics = &log.topics[topics_start.min(log.topics.len())..];

		let indexed_params: Vec<&EventParam> = self.inputs.iter().filter(|p| p.indexed).collect();
		let non_indexed_params: Vec<&EventParam> = self.inputs.iter().filter(|p| !p.indexed).collect();
		let non_indexed_types: Vec<ParamType> = non_indexed_params.iter().map(|p| p.kind.clone()).collect();

		if indexed_topics.len() != indexed_params.len() {
			return Err(Error::Truncated(format!(
				"log for event `{}` supplies {} indexed topic(s), expected {}",
				self.name,
				indexed_topics.len(),
				indexed_params.len()
			)));
		}

		let mut indexed_values = Vec::with_capacity(indexed_params.len());
		for (param, topic) in indexed_params.iter().zip(indexed_topics) {
			let token = if param.kind.is_dynamic() {
				Token::FixedBytes(topic.as_bytes().to_vec())
			} else {
				decode(&[param.kind.clone()], topic.as_bytes())?.remove(0)
			};
			indexed_values.push(token);
		}

		let mut non_indexed_values = decode(&non_indexed_types, &log.data)?;

		let mut indexed_iter = indexed_values.into_iter();
		let mut non_indexed_iter = non_indexed_values.drain(..);
		let params = self
			.inputs
			.iter()
			.map(|input| {
				let value = if input.indexed { indexed_iter.next() } else { non_indexed_iter.next() }
					.expect("one value produced per declared input above");
				LogParam { name: input.name.clone(), value }
			})
			.collect();

		Ok(Log { name: self.name.clone(), params })
	}
}

#[cfg(test)]
mod tests {
	use super::Event;
	use crate::{log::RawLog, EventParam, ParamType, Token};
	use hex_literal::hex;

	fn transfer_event() -> Event {
		Event {
			name: "Transfer".to_owned(),
			inputs: vec![
				EventParam { name: "from".to_owned(), kind: ParamType::Address, indexed: true },
				EventParam { name: "to".to_owned(), kind: ParamType::Address, indexed: true },
				EventParam { name: "value".to_owned(), kind: ParamType::Uint(256), indexed: false },
			],
			anonymous: false,
		}
	}

	#[test]
	fn topic_matches_known_value() {
		let event = transfer_event();
		assert_eq!(
			event.topic().as_bytes(),
			&hex!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef")[..]
		);
	}

	#[test]
	fn parse_log_decodes_indexed_and_data() {
		let event = transfer_event();

		let mut from_topic = [0u8; 32];
		from_topic[12..].copy_from_slice(&hex!("1111111111111111111111111111111111111111"));
		let mut to_topic = [0u8; 32];
		to_topic[12..].copy_from_slice(&hex!("2222222222222222222222222222222222222222"));

		let mut data = [0u8; 32];
		data[31] = 42;

		let raw = RawLog { topics: vec![event.topic(), from_topic.into(), to_topic.into()], data: data.to_vec() };

		let log = event.parse_log(raw).unwrap();
		assert_eq!(log.params.len(), 3);
		assert_eq!(
			log.param("from").unwrap().value,
			Token::Address(hex!("1111111111111111111111111111111111111111").into())
		);
		assert_eq!(
			log.param("to").unwrap().value,
			Token::Address(hex!("2222222222222222222222222222222222222222").into())
		);
		assert_eq!(log.param("value").unwrap().value, Token::Uint(42u8.into()));
	}

	#[test]
	fn dynamic_indexed_param_returns_raw_topic_hash() {
		let event = Event {
			name: "Note".to_owned(),
			inputs: vec![EventParam { name: "message".to_owned(), kind: ParamType::String, indexed: true }],
			anonymous: false,
		};

		let topic_hash: [u8; 32] = hex!("0000000000000000000000000000000000000000000000000000000000000001");
		let raw = RawLog { topics: vec![event.topic(), topic_hash.into()], data: vec![] };

		let log = event.parse_log(raw).unwrap();
		assert_eq!(log.params[0].value, Token::FixedBytes(topic_hash.to_vec()));
	}

	#[test]
	fn fewer_topics_than_indexed_params_is_a_typed_error_not_a_panic() {
		let event = transfer_event(); // declares two indexed params: from, to

		let mut from_topic = [0u8; 32];
		from_topic[12..].copy_from_slice(&hex!("1111111111111111111111111111111111111111"));

		// Only one indexed topic supplied after topic0, but the event declares two indexed params.
		let raw = RawLog { topics: vec![event.topic(), from_topic.into()], data: vec![] };

		assert!(matches!(event.parse_log(raw), Err(crate::Error::Truncated(_))));
	}

	#[test]
	fn anonymous_event_has_no_topic0_consumed() {
		let event = Event {
			name: "Anon".to_owned(),
			inputs: vec![EventParam { name: "a".to_owned(), kind: ParamType::Address, indexed: true }],
			anonymous: true,
		};
		let mut topic = [0u8; 32];
		topic[12..].copy_from_slice(&hex!("3333333333333333333333333333333333333333"));
		let raw = RawLog { topics: vec![topic.into()], data: vec![] };
		let log = event.parse_log(raw).unwrap();
		assert_eq!(
			log.params[0].value,
			Token::Address(hex!("3333333333333333333333333333333333333333").into())
		);
	}
}
