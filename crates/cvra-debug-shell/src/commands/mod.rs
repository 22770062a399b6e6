//! Operator command parsing and execution.
//!
//! Each submodule implements a specific shell command:
//! - [`parameter`] - Parameter tree listing and single-parameter writes
//! - [`position`] - Robot pose query
//!
//! [`Command`] is the finite command table: a fixed set of names, each with
//! its own argument grammar parsed by clap from the whitespace-split line.

pub mod parameter;
pub mod position;

pub use parameter::{ParameterArgs, ParameterSetArgs};

/// One parsed operator command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `parameter [namespace]` - list the parameter tree.
    Parameter(ParameterArgs),
    /// `parameter_set <name> (-i INT | -f FLOAT | -b 0|1)` - write one value.
    ParameterSet(ParameterSetArgs),
    /// `position` - query the robot pose.
    Position,
    /// `help` - print the command table.
    Help,
    /// `exit` - terminate the session.
    Exit,
    /// Blank input; nothing to do.
    Empty,
}

/// Help text printed by the `help` command.
pub const HELP_TEXT: &str = "\
Commands:
  parameter [namespace]                    list parameters exposed by the robot
  parameter_set <name> (-i N|-f X|-b 0|1)  set the value of a single parameter
  position                                 get the position of the robot
  help                                     show this help
  exit                                     leave the shell";

impl Command {
    /// Parse one input line.
    ///
    /// # Errors
    ///
    /// Returns the message to show the operator: a usage error for a
    /// malformed argument list, or an unknown-command report. Either way
    /// the session keeps running.
    pub fn parse(line: &str) -> Result<Self, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some(&name) = words.first() else {
            return Ok(Self::Empty);
        };

        match name {
            "parameter" => ParameterArgs::parse_words(&words).map(Self::Parameter),
            "parameter_set" => ParameterSetArgs::parse_words(&words).map(Self::ParameterSet),
            "position" => {
                if words.len() > 1 {
                    Err("position takes no arguments".to_owned())
                } else {
                    Ok(Self::Position)
                }
            }
            "help" => Ok(Self::Help),
            "exit" => Ok(Self::Exit),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use cvra_debug_proto::ParamValue;

    use super::*;

    #[test]
    fn parses_parameter_without_namespace() {
        let command = Command::parse("parameter").unwrap();
        assert_eq!(
            command,
            Command::Parameter(ParameterArgs { namespace: None })
        );
    }

    #[test]
    fn parses_parameter_with_namespace() {
        let command = Command::parse("parameter aversive/motors").unwrap();
        assert_eq!(
            command,
            Command::Parameter(ParameterArgs {
                namespace: Some("aversive/motors".into())
            })
        );
    }

    #[test]
    fn parses_parameter_set_integer() {
        let command = Command::parse("parameter_set foo -i 42").unwrap();
        let Command::ParameterSet(args) = command else {
            panic!("expected parameter_set");
        };
        assert_eq!(args.name, "foo");
        assert_eq!(args.value(), ParamValue::Integer(42));
    }

    #[test]
    fn parses_parameter_set_negative_float() {
        let command = Command::parse("parameter_set gain -f -0.5").unwrap();
        let Command::ParameterSet(args) = command else {
            panic!("expected parameter_set");
        };
        assert_eq!(args.value(), ParamValue::Scalar(-0.5));
    }

    #[test]
    fn parses_parameter_set_bool_literals() {
        let on = Command::parse("parameter_set led -b 1").unwrap();
        let Command::ParameterSet(args) = on else {
            panic!("expected parameter_set");
        };
        assert_eq!(args.value(), ParamValue::Bool(true));

        let off = Command::parse("parameter_set led -b 0").unwrap();
        let Command::ParameterSet(args) = off else {
            panic!("expected parameter_set");
        };
        assert_eq!(args.value(), ParamValue::Bool(false));
    }

    #[test]
    fn rejects_parameter_set_without_value_flag() {
        assert!(Command::parse("parameter_set foo").is_err());
    }

    #[test]
    fn rejects_parameter_set_with_two_value_flags() {
        assert!(Command::parse("parameter_set foo -i 1 -f 2.0").is_err());
    }

    #[test]
    fn rejects_parameter_set_bool_out_of_range() {
        assert!(Command::parse("parameter_set foo -b 2").is_err());
    }

    #[test]
    fn rejects_position_with_arguments() {
        assert!(Command::parse("position now").is_err());
    }

    #[test]
    fn blank_line_is_empty_command() {
        assert_eq!(Command::parse("").unwrap(), Command::Empty);
        assert_eq!(Command::parse("   ").unwrap(), Command::Empty);
    }

    #[test]
    fn unknown_command_is_reported_by_name() {
        let err = Command::parse("reboot").unwrap_err();
        assert_eq!(err, "unknown command: reboot");
    }

    #[test]
    fn exit_and_help_parse() {
        assert_eq!(Command::parse("exit").unwrap(), Command::Exit);
        assert_eq!(Command::parse("help").unwrap(), Command::Help);
    }
}
