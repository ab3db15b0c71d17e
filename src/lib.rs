// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Ethereum contract ABI codec: encodes and decodes Solidity function calls, return values, and
//! event logs against a parsed contract ABI JSON.

#![allow(clippy::module_inception)]
#![warn(missing_docs)]

mod cache;
pub mod codec;
mod constructor;
mod contract;
mod decoder;
mod encoder;
pub mod error;
mod errors;
mod event;
mod event_param;
mod function;
mod keccak;
mod log;
mod operation;
mod param;
pub mod param_type;
mod signature;
mod state_mutability;
pub mod token;
mod util;
pub mod value;

pub use ethereum_types;

pub use crate::{
	codec::Codec,
	constructor::Constructor,
	contract::{AbiErrors, Contract, Events, Functions},
	decoder::decode,
	encoder::encode,
	errors::{Error, Result},
	event::Event,
	event_param::EventParam,
	function::Function,
	log::{Log, LogParam, RawLog},
	param::Param,
	param_type::ParamType,
	state_mutability::StateMutability,
	token::Token,
	value::Value,
};

/// ABI word.
pub type Word = [u8; 32];

/// ABI address.
pub type Address = ethereum_types::Address;

/// ABI fixed-size byte array.
pub type FixedBytes = Vec<u8>;

/// ABI dynamic-size byte array.
pub type Bytes = Vec<u8>;

/// ABI signed integer, stored as its two's-complement bit pattern.
pub type Int = ethereum_types::U256;

/// ABI unsigned integer.
pub type Uint = ethereum_types::U256;

/// A 32-byte hash, as used for function selectors' source value and event topics.
pub type Hash = ethereum_types::H256;
