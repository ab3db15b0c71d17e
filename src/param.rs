// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Function/constructor input and output parameter descriptors.

use crate::{Error, ParamType};
use serde::{
	de::{Error as DeError, MapAccess, Visitor},
	ser::SerializeMap,
	Deserialize, Deserializer, Serialize, Serializer,
};
use std::fmt;

/// A function, constructor or tuple-field parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
	/// Parameter name. Empty for unnamed tuple components.
	pub name: String,
	/// Parameter type, with any `components` already spliced into nested tuples.
	pub kind: ParamType,
	/// Solidity's own alias for `kind` (e.g. a user-defined struct or enum name). Carried through
	/// for tooling that wants it; ignored by the codec itself.
	pub internal_type: Option<String>,
}

/// Splices a parsed `components` array into the placeholder empty tuple(s) produced by
/// [`crate::param_type::Reader`] for a bare `tuple`/`tuple[]`/`tuple[N]` type string, then
/// validates the fully-resolved type.
pub(crate) fn set_tuple_components(kind: &mut ParamType, components: Option<Vec<Param>>) -> Result<(), Error> {
	match kind {
		ParamType::Array(inner) | ParamType::FixedArray(inner, _) => set_tuple_components(inner, components)?,
		ParamType::Tuple(fields) => {
			let components =
				components.ok_or_else(|| Error::AbiParseError("tuple type is missing `components`".into()))?;
			*fields = components.into_iter().map(|c| c.kind).collect();
		}
		_ => {}
	}
	kind.validate()
}

/// The tuple fields of a (possibly array-wrapped) tuple type, for serializing `components` back
/// out alongside the canonical `tuple`/`tuple[]`/`tuple[N]` type string.
pub(crate) fn inner_tuple(kind: &ParamType) -> Option<&[ParamType]> {
	match kind {
		ParamType::Array(inner) | ParamType::FixedArray(inner, _) => inner_tuple(inner),
		ParamType::Tuple(fields) => Some(fields),
		_ => None,
	}
}

pub(crate) struct UnnamedParams<'a>(pub(crate) &'a [ParamType]);

impl Serialize for UnnamedParams<'_> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		use serde::ser::SerializeSeq;
		let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
		for kind in self.0 {
			seq.serialize_element(&Param { name: String::new(), kind: kind.clone(), internal_type: None })?;
		}
		seq.end()
	}
}

impl<'de> Deserialize<'de> for Param {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(ParamVisitor)
	}
}

struct ParamVisitor;

impl<'de> Visitor<'de> for ParamVisitor {
	type Value = Param;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		write!(formatter, "a valid function parameter spec")
	}

	fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut name = None;
		let mut kind: Option<ParamType> = None;
		let mut components: Option<Vec<Param>> = None;
		let mut internal_type = None;

		while let Some(key) = map.next_key::<String>()? {
			match key.as_str() {
				"name" => {
					if name.is_some() {
						return Err(DeError::duplicate_field("name"));
					}
					name = Some(map.next_value()?);
				}
				"type" => {
					if kind.is_some() {
						return Err(DeError::duplicate_field("type"));
					}
					kind = Some(map.next_value()?);
				}
				"components" => {
					if components.is_some() {
						return Err(DeError::duplicate_field("components"));
					}
					components = Some(map.next_value()?);
				}
				"internalType" => {
					internal_type = Some(map.next_value()?);
				}
				_ => {
					let _ignored: serde_json::Value = map.next_value()?;
				}
			}
		}

		let mut kind = kind.ok_or_else(|| DeError::missing_field("type"))?;
		set_tuple_components(&mut kind, components).map_err(DeError::custom)?;

		Ok(Param { name: name.unwrap_or_default(), kind, internal_type })
	}
}

impl Serialize for Param {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut map = serializer.serialize_map(None)?;
		map.serialize_entry("name", &self.name)?;
		map.serialize_entry("type", &self.kind)?;
		if let Some(fields) = inner_tuple(&self.kind) {
			map.serialize_entry("components", &UnnamedParams(fields))?;
		}
		if let Some(internal_type) = &self.internal_type {
			map.serialize_entry("internalType", internal_type)?;
		}
		map.end()
	}
}
