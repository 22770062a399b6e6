//! # cvra-debug-proto
//!
//! Protocol definitions for the CVRA robot debug service.
//!
//! The [`wire`] module holds the prost message structs exactly as they
//! travel over the channel. The [`value`] and [`tree`] modules hold the
//! decoded domain types: a tagged-union parameter value and the ordered
//! parameter tree built from a list response.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod tree;
pub mod value;
pub mod wire;

pub use error::ProtoError;
pub use tree::{ParamLeaf, ParamNode};
pub use value::ParamValue;
