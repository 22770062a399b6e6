//! Wire messages for the debug service, written in the prost-generated idiom.
//!
//! Field numbers are part of the protocol and must not change. A parameter
//! value carries its discriminant as "which optional field is set", not as an
//! explicit enum tag; [`crate::value::ParamValue`] turns that into a proper
//! sum type.

/// One leaf parameter and its current value.
///
/// At most one of the three value fields is meaningful. Decode probes them
/// in a fixed priority order (integer, scalar, bool).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ParameterValue {
    /// Parameter name, always non-empty on a well-formed message.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Value if the parameter is an integer.
    #[prost(int64, optional, tag = "2")]
    pub integer_value: ::core::option::Option<i64>,
    /// Value if the parameter is a scalar.
    #[prost(double, optional, tag = "3")]
    pub scalar_value: ::core::option::Option<f64>,
    /// Value if the parameter is a boolean.
    #[prost(bool, optional, tag = "4")]
    pub bool_value: ::core::option::Option<bool>,
}

/// One node of the parameter tree: leaves attached here plus nested
/// sub-namespaces, both in protocol order.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ParameterNamespaceContent {
    /// Namespace segment this node represents.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Leaf values directly attached at this node.
    #[prost(message, repeated, tag = "2")]
    pub values: ::prost::alloc::vec::Vec<ParameterValue>,
    /// Strictly nested sub-namespaces.
    #[prost(message, repeated, tag = "3")]
    pub children: ::prost::alloc::vec::Vec<ParameterNamespaceContent>,
}

/// Request to list parameters under a namespace.
///
/// An absent `path` means "list from the root"; omission, not an empty
/// string, is what signals the root.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ParameterListRequest {
    /// Slash-delimited namespace filter.
    #[prost(string, optional, tag = "1")]
    pub path: ::core::option::Option<::prost::alloc::string::String>,
}

/// Response to a list request: a forest of root trees.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ParameterListResponse {
    /// Root trees; in practice the service returns exactly one.
    #[prost(message, repeated, tag = "1")]
    pub contents: ::prost::alloc::vec::Vec<ParameterNamespaceContent>,
}

/// Request to set one parameter to a new typed value.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetParameterRequest {
    /// Name and value to write; exactly one value field populated.
    #[prost(message, optional, tag = "1")]
    pub parameter: ::core::option::Option<ParameterValue>,
}

/// Response to a set request; success carries no payload.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct SetParameterResponse {}

/// Request for the robot's current pose.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GetPositionRequest {}

/// The robot's current pose. Heading `a` is in radians.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GetPositionResponse {
    /// X coordinate.
    #[prost(double, tag = "1")]
    pub x: f64,
    /// Y coordinate.
    #[prost(double, tag = "2")]
    pub y: f64,
    /// Heading in radians.
    #[prost(double, tag = "3")]
    pub a: f64,
}

/// Fully-qualified gRPC method path for `ListParameters`.
pub const LIST_PARAMETERS_PATH: &str = "/DebugService/ListParameters";
/// Fully-qualified gRPC method path for `SetParameter`.
pub const SET_PARAMETER_PATH: &str = "/DebugService/SetParameter";
/// Fully-qualified gRPC method path for `GetPosition`.
pub const GET_POSITION_PATH: &str = "/DebugService/GetPosition";

#[cfg(test)]
mod tests {
    use prost::Message;

    use super::*;

    #[test]
    fn list_request_omits_absent_path() {
        let request = ParameterListRequest { path: None };
        assert!(request.encode_to_vec().is_empty());
    }

    #[test]
    fn list_request_encodes_present_path() {
        let request = ParameterListRequest {
            path: Some("myns".into()),
        };
        let bytes = request.encode_to_vec();
        let decoded = ParameterListRequest::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded.path.as_deref(), Some("myns"));
    }

    #[test]
    fn nested_namespace_round_trips() {
        let content = ParameterNamespaceContent {
            name: "root".into(),
            values: vec![ParameterValue {
                name: "foo".into(),
                integer_value: Some(42),
                scalar_value: None,
                bool_value: None,
            }],
            children: vec![ParameterNamespaceContent {
                name: "myns".into(),
                values: vec![ParameterValue {
                    name: "bar".into(),
                    integer_value: None,
                    scalar_value: Some(42.0),
                    bool_value: None,
                }],
                children: vec![],
            }],
        };
        let bytes = content.encode_to_vec();
        let decoded = ParameterNamespaceContent::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded, content);
    }

    #[test]
    fn position_response_defaults_to_origin() {
        let decoded = GetPositionResponse::decode(&[][..]).unwrap();
        assert_eq!(decoded.x, 0.0);
        assert_eq!(decoded.y, 0.0);
        assert_eq!(decoded.a, 0.0);
    }
}
