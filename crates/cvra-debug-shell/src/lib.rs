//! # cvra-debug-shell
//!
//! Interactive shell for inspecting and mutating the runtime state of a
//! CVRA robot controller over gRPC.
//!
//! The [`shell`] module drives the read-eval loop; [`commands`] parses
//! operator input into typed commands; [`client`] is the stateless façade
//! over the debug service channel; [`output`] renders parameter trees and
//! poses for the operator.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod client;
pub mod commands;
pub mod error;
pub mod output;
pub mod shell;

pub use error::ShellError;
