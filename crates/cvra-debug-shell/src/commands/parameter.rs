//! Parameter tree listing and single-parameter writes.

use std::io::Write;

use clap::{ArgGroup, Parser};
use cvra_debug_proto::ParamValue;

use crate::client::DebugService;
use crate::error::ShellError;
use crate::output::render_tree;

/// Arguments for the `parameter` command.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "parameter", about = "List parameters exposed by the robot")]
pub struct ParameterArgs {
    /// Namespace to list from; omitted means the root.
    pub namespace: Option<String>,
}

/// Arguments for the `parameter_set` command.
///
/// Exactly one of the three value flags must be given; the required arg
/// group enforces that before any network interaction.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "parameter_set", about = "Set the value of a single parameter")]
#[command(group(ArgGroup::new("value").required(true).multiple(false)))]
pub struct ParameterSetArgs {
    /// Parameter name to write.
    pub name: String,

    /// New integer value.
    #[arg(short = 'i', value_name = "INT", group = "value", allow_negative_numbers = true)]
    pub integer: Option<i64>,

    /// New scalar value.
    #[arg(short = 'f', value_name = "FLOAT", group = "value", allow_negative_numbers = true)]
    pub scalar: Option<f64>,

    /// New boolean value, as the literal 0 or 1.
    #[arg(short = 'b', value_name = "0|1", group = "value", value_parser = parse_bool_literal)]
    pub boolean: Option<bool>,
}

fn parse_bool_literal(raw: &str) -> Result<bool, String> {
    match raw {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(format!("expected 0 or 1, got '{other}'")),
    }
}

impl ParameterArgs {
    /// Parse from a whitespace-split line, argv[0] included.
    pub(crate) fn parse_words(words: &[&str]) -> Result<Self, String> {
        Self::try_parse_from(words).map_err(|e| e.to_string())
    }
}

impl ParameterSetArgs {
    /// Parse from a whitespace-split line, argv[0] included.
    pub(crate) fn parse_words(words: &[&str]) -> Result<Self, String> {
        Self::try_parse_from(words).map_err(|e| e.to_string())
    }

    /// The value to write, as the explicit tagged union.
    #[must_use]
    pub fn value(&self) -> ParamValue {
        if let Some(v) = self.integer {
            ParamValue::Integer(v)
        } else if let Some(v) = self.scalar {
            ParamValue::Scalar(v)
        } else if let Some(v) = self.boolean {
            ParamValue::Bool(v)
        } else {
            // Unreachable through the parser: the value group is required.
            ParamValue::Unsupported
        }
    }
}

/// Execute `parameter`: list and render the tree from indent 0.
///
/// # Errors
///
/// Returns an error if the request fails or output cannot be written.
pub async fn run_list<S: DebugService, W: Write>(
    service: &mut S,
    writer: &mut W,
    args: &ParameterArgs,
) -> Result<(), ShellError> {
    let tree = service.list_parameters(args.namespace.as_deref()).await?;
    write!(writer, "{}", render_tree(&tree, 0))?;
    Ok(())
}

/// Execute `parameter_set`: write one typed value.
///
/// Success prints nothing; the channel raising no error is the contract.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn run_set<S: DebugService>(
    service: &mut S,
    args: &ParameterSetArgs,
) -> Result<(), ShellError> {
    service.set_parameter(&args.name, args.value()).await
}
