//! Crate-wide error type.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Everything that can go wrong while parsing an ABI, or encoding/decoding against it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// Malformed ABI JSON or type expression.
	#[error("invalid ABI: {0}")]
	AbiParseError(String),

	/// A function/event was not found by name, selector or topic.
	#[error("no function or event matching `{0}`")]
	UnknownName(String),

	/// Argument count does not match parameter count.
	#[error("expected {expected} arguments, got {got}")]
	ArityMismatch {
		/// Number of parameters declared by the ABI entry.
		expected: usize,
		/// Number of values actually supplied.
		got: usize,
	},

	/// A value's shape is incompatible with its declared type.
	#[error("value at index {index} does not match declared type `{expected}`")]
	TypeMismatch {
		/// Position of the offending value among the top-level arguments.
		index: usize,
		/// The declared type, rendered canonically.
		expected: String,
	},

	/// An integer, byte length or array length fell outside the bounds its type allows.
	#[error("value out of range for type `{type_name}`: {detail}")]
	RangeError {
		/// Canonical name of the type the value was checked against.
		type_name: String,
		/// Human-readable explanation of the violated bound.
		detail: String,
	},

	/// The input buffer was shorter than the layout demanded.
	#[error("truncated ABI data: {0}")]
	Truncated(String),

	/// A dynamic pointer referred to a position outside the buffer, or backward into the head.
	#[error("offset out of range: {0}")]
	OffsetOutOfRange(String),

	/// `string` contents were not valid UTF-8.
	#[error("invalid utf-8 in decoded string")]
	InvalidUtf8,

	/// No function is registered under the given selector/name in this codec.
	#[error("function not found: {0}")]
	FunctionNotFound(String),

	/// No event is registered under the given topic/name in this codec.
	#[error("event not found: {0}")]
	EventNotFound(String),
}

impl From<serde_json::Error> for Error {
	fn from(e: serde_json::Error) -> Self {
		Error::AbiParseError(e.to_string())
	}
}

impl From<hex::FromHexError> for Error {
	fn from(e: hex::FromHexError) -> Self {
		Error::AbiParseError(e.to_string())
	}
}

impl From<std::num::ParseIntError> for Error {
	fn from(e: std::num::ParseIntError) -> Self {
		Error::AbiParseError(e.to_string())
	}
}
