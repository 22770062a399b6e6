//! The decoded parameter value: an explicit tagged union over the wire's
//! which-field-is-set encoding.

use std::fmt;

use crate::error::ProtoError;
use crate::wire;

/// Placeholder printed for a value kind this client does not recognize.
pub const UNSUPPORTED_MARKER: &str = "(unsupported value)";

/// A single typed parameter value.
///
/// The wire form carries three optional fields instead of an enum tag, so
/// decoding probes them in a fixed priority order: integer, then scalar,
/// then bool. A message with none of them set decodes to [`Self::Unsupported`]
/// rather than failing, so a newer service cannot crash an older shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// 64-bit integer parameter.
    Integer(i64),
    /// Floating-point parameter, rendered with 4 decimal digits.
    Scalar(f64),
    /// Boolean parameter.
    Bool(bool),
    /// Value kind not recognized by this client.
    Unsupported,
}

impl ParamValue {
    /// Decode the wire value, probing fields in priority order.
    #[must_use]
    pub fn from_wire(value: &wire::ParameterValue) -> Self {
        if let Some(v) = value.integer_value {
            Self::Integer(v)
        } else if let Some(v) = value.scalar_value {
            Self::Scalar(v)
        } else if let Some(v) = value.bool_value {
            Self::Bool(v)
        } else {
            Self::Unsupported
        }
    }

    /// Build the wire message for a set request, populating exactly the
    /// field matching this variant.
    ///
    /// # Errors
    ///
    /// Returns [`ProtoError::UnsupportedValue`] for [`Self::Unsupported`];
    /// a request without a concrete value must never reach the channel.
    pub fn to_wire(self, name: &str) -> Result<wire::ParameterValue, ProtoError> {
        let mut value = wire::ParameterValue {
            name: name.to_owned(),
            integer_value: None,
            scalar_value: None,
            bool_value: None,
        };
        match self {
            Self::Integer(v) => value.integer_value = Some(v),
            Self::Scalar(v) => value.scalar_value = Some(v),
            Self::Bool(v) => value.bool_value = Some(v),
            Self::Unsupported => return Err(ProtoError::UnsupportedValue(name.to_owned())),
        }
        Ok(value)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Scalar(v) => write!(f, "{v:.4}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Unsupported => f.write_str(UNSUPPORTED_MARKER),
        }
    }
}
