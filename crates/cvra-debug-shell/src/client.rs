//! Debug service client for shell operations.
//!
//! [`DebugService`] is the seam the dispatcher is written against so tests
//! can drive it with a stub. [`DebugClient`] is the real implementation: a
//! stateless façade over a lazily-connected gRPC channel, issuing each
//! request exactly once with no retry state.

use cvra_debug_proto::{wire, ParamNode, ParamValue};
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, trace};

use crate::error::ShellError;

/// The robot's 2D position and heading at query time.
///
/// Heading stays in radians everywhere inside the shell; conversion to
/// degrees happens only at the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Heading in radians.
    pub heading_rad: f64,
}

/// The three operations the debug service exposes.
///
/// This trait allows for testing the dispatcher with stub implementations.
pub trait DebugService {
    /// List parameters under `namespace`, or from the root when absent.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the channel fails, or a protocol error
    /// if the response carries no tree.
    fn list_parameters(
        &mut self,
        namespace: Option<&str>,
    ) -> impl std::future::Future<Output = Result<ParamNode, ShellError>>;

    /// Set one parameter to a new typed value.
    ///
    /// # Errors
    ///
    /// Returns a usage error for [`ParamValue::Unsupported`] before any
    /// network call, or a transport error if the channel fails.
    fn set_parameter(
        &mut self,
        name: &str,
        value: ParamValue,
    ) -> impl std::future::Future<Output = Result<(), ShellError>>;

    /// Query the robot's current pose.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the channel fails.
    fn get_position(&mut self) -> impl std::future::Future<Output = Result<Pose, ShellError>>;
}

/// Real gRPC client for the debug service.
pub struct DebugClient {
    inner: tonic::client::Grpc<Channel>,
}

impl std::fmt::Debug for DebugClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebugClient").finish_non_exhaustive()
    }
}

impl DebugClient {
    /// Create a client for the given `host:port` address.
    ///
    /// The channel connects lazily, so the shell starts even when the
    /// controller is down; an unreachable endpoint surfaces as a transport
    /// error on the first command instead.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the address is not a valid URI.
    pub fn new(server: &str) -> Result<Self, ShellError> {
        let uri = if server.contains("://") {
            server.to_owned()
        } else {
            format!("http://{server}")
        };
        let endpoint = Endpoint::from_shared(uri)
            .map_err(|e| ShellError::Config(format!("invalid server address '{server}': {e}")))?;
        debug!(server = %server, "debug service channel created");
        Ok(Self {
            inner: tonic::client::Grpc::new(endpoint.connect_lazy()),
        })
    }

    /// One unary round trip. Exactly one send, no retries.
    async fn unary<Req, Res>(&mut self, request: Req, path: &'static str) -> Result<Res, ShellError>
    where
        Req: prost::Message + Send + Sync + 'static,
        Res: prost::Message + Default + Send + Sync + 'static,
    {
        self.inner.ready().await.map_err(|e| ShellError::Transport {
            code: "UNAVAILABLE",
            message: format!("service not ready: {e}"),
        })?;
        let codec: ProstCodec<Req, Res> = ProstCodec::default();
        trace!(path, "sending request");
        let response = self
            .inner
            .unary(
                tonic::Request::new(request),
                PathAndQuery::from_static(path),
                codec,
            )
            .await?;
        trace!(path, "received response");
        Ok(response.into_inner())
    }
}

impl DebugService for DebugClient {
    async fn list_parameters(&mut self, namespace: Option<&str>) -> Result<ParamNode, ShellError> {
        // An empty namespace means the root; the field is omitted entirely.
        let path = namespace.filter(|ns| !ns.is_empty()).map(str::to_owned);
        let request = wire::ParameterListRequest { path };
        let response: wire::ParameterListResponse =
            self.unary(request, wire::LIST_PARAMETERS_PATH).await?;
        Ok(ParamNode::from_response(&response)?)
    }

    async fn set_parameter(&mut self, name: &str, value: ParamValue) -> Result<(), ShellError> {
        // Local contract check; an unsupported value never reaches the wire.
        let parameter = value.to_wire(name)?;
        let request = wire::SetParameterRequest {
            parameter: Some(parameter),
        };
        let _: wire::SetParameterResponse = self.unary(request, wire::SET_PARAMETER_PATH).await?;
        Ok(())
    }

    async fn get_position(&mut self) -> Result<Pose, ShellError> {
        let response: wire::GetPositionResponse = self
            .unary(wire::GetPositionRequest {}, wire::GET_POSITION_PATH)
            .await?;
        Ok(Pose {
            x: response.x,
            y: response.y,
            heading_rad: response.a,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_accepts_bare_host_port() {
        assert!(DebugClient::new("localhost:50051").is_ok());
    }

    #[tokio::test]
    async fn new_accepts_explicit_scheme() {
        assert!(DebugClient::new("http://robot.local:50051").is_ok());
    }

    #[test]
    fn new_rejects_invalid_uri() {
        let err = DebugClient::new("not a uri").unwrap_err();
        assert!(matches!(err, ShellError::Config(_)));
    }

    #[tokio::test]
    async fn set_unsupported_is_rejected_before_any_network_call() {
        // The endpoint is non-routable; a local rejection must not touch it.
        let mut client = DebugClient::new("localhost:1").unwrap();
        let err = client
            .set_parameter("foo", ParamValue::Unsupported)
            .await
            .unwrap_err();
        assert!(matches!(err, ShellError::Usage(_)));
    }
}
