// Copyright 2015-2019 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Event parameter specification.

use crate::param::{inner_tuple, set_tuple_components};
use crate::ParamType;
use serde::{
	de::{Error as DeError, MapAccess, Visitor},
	ser::SerializeMap,
	Deserialize, Deserializer, Serialize, Serializer,
};
use std::fmt;

/// Event parameter specification.
///
/// Unlike [`crate::Param`], always carries an `indexed` flag: whether this value is encoded into
/// one of the log's topics rather than its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventParam {
	/// Param name.
	pub name: String,
	/// Param type.
	pub kind: ParamType,
	/// Indexed flag. If true, the param is encoded into a topic rather than the log data.
	pub indexed: bool,
}

impl<'de> Deserialize<'de> for EventParam {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(EventParamVisitor)
	}
}

struct EventParamVisitor;

impl<'de> Visitor<'de> for EventParamVisitor {
	type Value = EventParam;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		write!(formatter, "a valid event parameter spec")
	}

	fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut name = None;
		let mut kind = None;
		let mut indexed = None;
		let mut components = None;

		while let Some(key) = map.next_key::<String>()? {
			match key.as_str() {
				"name" => name = Some(map.next_value()?),
				"type" => kind = Some(map.next_value()?),
				"indexed" => indexed = Some(map.next_value()?),
				"components" => components = Some(map.next_value()?),
				_ => {
					let _ignored: serde_json::Value = map.next_value()?;
				}
			}
		}

		let mut kind: ParamType = kind.ok_or_else(|| DeError::missing_field("type"))?;
		set_tuple_components(&mut kind, components).map_err(DeError::custom)?;

		Ok(EventParam {
			name: name.ok_or_else(|| DeError::missing_field("name"))?,
			kind,
			indexed: indexed.ok_or_else(|| DeError::missing_field("indexed"))?,
		})
	}
}

impl Serialize for EventParam {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut map = serializer.serialize_map(None)?;
		map.serialize_entry("name", &self.name)?;
		map.serialize_entry("type", &self.kind)?;
		if let Some(fields) = inner_tuple(&self.kind) {
			map.serialize_entry("components", &crate::param::UnnamedParams(fields))?;
		}
		map.serialize_entry("indexed", &self.indexed)?;
		map.end()
	}
}

#[cfg(test)]
mod tests {
	use crate::{EventParam, ParamType};

	#[test]
	fn event_param_deserialization() {
		let s = r#"{
			"name": "foo",
			"type": "address",
			"indexed": true
		}"#;

		let deserialized: EventParam = serde_json::from_str(s).unwrap();

		assert_eq!(deserialized, EventParam { name: "foo".to_owned(), kind: ParamType::Address, indexed: true });
	}

	#[test]
	fn event_param_tuple_deserialization() {
		let s = r#"{
			"name": "foo",
			"type": "tuple",
			"indexed": false,
			"components": [
				{ "name": "a", "type": "bool" }
			]
		}"#;

		let deserialized: EventParam = serde_json::from_str(s).unwrap();
		assert_eq!(
			deserialized,
			EventParam { name: "foo".to_owned(), kind: ParamType::Tuple(vec![ParamType::Bool]), indexed: false }
		);
	}
}
