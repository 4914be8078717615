//! [`PredictorClient`] — forwarding gRPC client for the prediction server.
//!
//! Every method is a one-to-one forwarding call: a typed input becomes one
//! RPC, and the response (or a wrapped error naming the failed operation)
//! comes straight back. There are no retries and no caching; a failed call
//! leaves the handle usable for subsequent calls.
//!
//! # Deadlines
//!
//! The reference behaviour is unbounded calls against a connection-scoped
//! context. Each method here additionally accepts `deadline:
//! Option<Duration>`; when set, the individual RPC carries that timeout,
//! otherwise the call falls back to the channel-wide default (none unless
//! [`ClientOptions::request_timeout`] was configured).

use std::time::{Duration, Instant};

use tonic::transport::{Channel, Endpoint};
use tracing::{debug, instrument};

use crate::error::{PredictorError, Result};
use crate::proto;
use crate::proto::prediction_server_client::PredictionServerClient;
use crate::telemetry;

/// Bounded wait applied to connection establishment.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Options for configuring the predictor client connection.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use predictor_client::ClientOptions;
///
/// let options = ClientOptions::default()
///     .connect_timeout(Duration::from_secs(5))
///     .request_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct ClientOptions {
    connect_timeout: Duration,
    request_timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: None,
        }
    }
}

impl ClientOptions {
    /// Sets the bounded wait for establishing the initial connection.
    ///
    /// Default: 30 seconds.
    #[must_use]
    pub fn connect_timeout(self, timeout: Duration) -> Self {
        Self {
            connect_timeout: timeout,
            ..self
        }
    }

    /// Sets a channel-wide timeout applied to every RPC.
    ///
    /// Off by default: calls without a per-call deadline are unbounded.
    #[must_use]
    pub fn request_timeout(self, timeout: Duration) -> Self {
        Self {
            request_timeout: Some(timeout),
            ..self
        }
    }
}

/// A client for a remote prediction server.
///
/// The client is cheaply cloneable — clones share the same underlying gRPC
/// channel and can be used concurrently from multiple tasks. The crate adds
/// no locking of its own; concurrent-call safety on one connection is the
/// transport's (HTTP/2 multiplexing) guarantee.
///
/// # Example
///
/// ```rust,no_run
/// # async fn example() -> predictor_client::Result<()> {
/// use predictor_client::PredictorClient;
///
/// let client = PredictorClient::connect("127.0.0.1", 8080).await?;
/// client.ready(None).await?;
/// let model = client.get_model(None).await?;
/// println!("serving model: {model}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PredictorClient {
    inner: PredictionServerClient<Channel>,
    addr: String,
}

impl PredictorClient {
    /// Connect to a prediction server at `host:port` with default options.
    ///
    /// Blocks until the (unencrypted) connection is ready or the default
    /// 30-second bound elapses.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::Connect`] identifying the address when the
    /// endpoint is unreachable or the bound elapses; no usable handle is
    /// produced in that case.
    pub async fn connect(host: &str, port: u16) -> Result<Self> {
        Self::connect_with_options(host, port, ClientOptions::default()).await
    }

    /// Connect to a prediction server with custom options.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::InvalidAddress`] when `host`/`port` do not
    /// form a dialable URI, or [`PredictorError::Connect`] when dialing
    /// fails within the configured bound.
    pub async fn connect_with_options(
        host: &str,
        port: u16,
        options: ClientOptions,
    ) -> Result<Self> {
        let addr = format!("http://{host}:{port}");

        let mut endpoint = Endpoint::from_shared(addr.clone())
            .map_err(|e| PredictorError::InvalidAddress {
                addr: addr.clone(),
                reason: e.to_string(),
            })?
            .connect_timeout(options.connect_timeout);
        if let Some(timeout) = options.request_timeout {
            endpoint = endpoint.timeout(timeout);
        }

        debug!(%addr, "connecting to prediction server");
        let channel = endpoint
            .connect()
            .await
            .map_err(|source| PredictorError::Connect {
                addr: addr.clone(),
                source,
            })?;

        Ok(Self {
            inner: PredictionServerClient::new(channel),
            addr,
        })
    }

    /// The `http://host:port` address this handle was connected to.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    // ========================================================================
    // Probes
    // ========================================================================

    /// Check that the server is ready to accept prediction requests.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::Rpc`] when the probe fails.
    #[instrument(skip(self), fields(operation = "ready"))]
    pub async fn ready(&self, deadline: Option<Duration>) -> Result<()> {
        let start = Instant::now();
        let result = self
            .inner
            .clone()
            .ready(request(proto::ReadyRequest {}, deadline))
            .await;
        record_call("ready", start, result.is_ok());
        result.map_err(|status| PredictorError::rpc("readiness probe", status))?;
        Ok(())
    }

    /// Check that the server process is alive.
    ///
    /// Forwards to the same remote `Ready` operation as [`Self::ready`];
    /// the server exposes no distinct liveness RPC. Both methods are kept
    /// so callers can express intent, pending a dedicated server-side check.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::Rpc`] when the probe fails.
    #[instrument(skip(self), fields(operation = "alive"))]
    pub async fn alive(&self, deadline: Option<Duration>) -> Result<()> {
        let start = Instant::now();
        let result = self
            .inner
            .clone()
            .ready(request(proto::ReadyRequest {}, deadline))
            .await;
        record_call("alive", start, result.is_ok());
        result.map_err(|status| PredictorError::rpc("liveness probe", status))?;
        Ok(())
    }

    // ========================================================================
    // Metadata retrieval
    // ========================================================================

    /// Fetch the product descriptor served by this predictor, as text.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::Rpc`] when the fetch fails.
    #[instrument(skip(self), fields(operation = "get_product"))]
    pub async fn get_product(&self, deadline: Option<Duration>) -> Result<String> {
        let start = Instant::now();
        let result = self
            .inner
            .clone()
            .get_product(request(proto::GetProductRequest {}, deadline))
            .await;
        record_call("get_product", start, result.is_ok());
        let response = result.map_err(|status| PredictorError::rpc("product fetch", status))?;
        Ok(response.into_inner().content)
    }

    /// Fetch the column schema the predictor expects, as text.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::Rpc`] when the fetch fails.
    #[instrument(skip(self), fields(operation = "get_schema"))]
    pub async fn get_schema(&self, deadline: Option<Duration>) -> Result<String> {
        let start = Instant::now();
        let result = self
            .inner
            .clone()
            .get_schema(request(proto::GetSchemaRequest {}, deadline))
            .await;
        record_call("get_schema", start, result.is_ok());
        let response = result.map_err(|status| PredictorError::rpc("schema fetch", status))?;
        Ok(response.into_inner().content)
    }

    /// Fetch the descriptor of the dataset the model was trained on, as text.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::Rpc`] when the fetch fails.
    #[instrument(skip(self), fields(operation = "get_dataset"))]
    pub async fn get_dataset(&self, deadline: Option<Duration>) -> Result<String> {
        let start = Instant::now();
        let result = self
            .inner
            .clone()
            .get_dataset(request(proto::GetDatasetRequest {}, deadline))
            .await;
        record_call("get_dataset", start, result.is_ok());
        let response = result.map_err(|status| PredictorError::rpc("dataset fetch", status))?;
        Ok(response.into_inner().content)
    }

    /// Fetch the descriptor of the model being served, as text.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::Rpc`] when the fetch fails.
    #[instrument(skip(self), fields(operation = "get_model"))]
    pub async fn get_model(&self, deadline: Option<Duration>) -> Result<String> {
        let start = Instant::now();
        let result = self
            .inner
            .clone()
            .get_model(request(proto::GetModelRequest {}, deadline))
            .await;
        record_call("get_model", start, result.is_ok());
        let response = result.map_err(|status| PredictorError::rpc("model fetch", status))?;
        Ok(response.into_inner().content)
    }

    /// Fetch the serving statistics of the predictor, as text.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::Rpc`] when the fetch fails.
    #[instrument(skip(self), fields(operation = "get_stats"))]
    pub async fn get_stats(&self, deadline: Option<Duration>) -> Result<String> {
        let start = Instant::now();
        let result = self
            .inner
            .clone()
            .get_stat(request(proto::GetStatRequest {}, deadline))
            .await;
        record_call("get_stats", start, result.is_ok());
        let response = result.map_err(|status| PredictorError::rpc("stats fetch", status))?;
        Ok(response.into_inner().content)
    }

    // ========================================================================
    // Prediction
    // ========================================================================

    /// Run a prediction and return the predicted labels as text.
    ///
    /// `columns` is a textual column-schema description and `features` the
    /// textual feature payload; both pass through unmodified.
    ///
    /// Known anomaly: `full` is accepted for interface compatibility but is
    /// not forwarded — the wire request always carries `full = false`.
    /// Server-side consumers depend on the always-false behaviour, so
    /// forwarding the flag needs a coordinated server change first.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::Rpc`] wrapping "failed prediction" on any
    /// RPC failure.
    #[instrument(skip(self, columns, features), fields(operation = "predict"))]
    pub async fn predict(
        &self,
        columns: &str,
        features: &str,
        full: bool,
        deadline: Option<Duration>,
    ) -> Result<String> {
        let _ = full; // not forwarded, see method docs
        let message = proto::PredictionRequest {
            columns: columns.to_owned(),
            features: features.to_owned(),
            full: false,
        };

        let start = Instant::now();
        let result = self
            .inner
            .clone()
            .predict(request(message, deadline))
            .await;
        record_call("predict", start, result.is_ok());
        let response = result.map_err(|status| PredictorError::rpc("prediction", status))?;
        Ok(response.into_inner().labels)
    }
}

/// Build a [`tonic::Request`], attaching the per-call deadline when given.
fn request<T>(message: T, deadline: Option<Duration>) -> tonic::Request<T> {
    let mut request = tonic::Request::new(message);
    if let Some(deadline) = deadline {
        request.set_timeout(deadline);
    }
    request
}

/// Record outcome and duration metrics for one forwarding call.
fn record_call(operation: &'static str, start: Instant, ok: bool) {
    let status = if ok { "ok" } else { "error" };
    metrics::counter!(telemetry::REQUESTS_TOTAL,
        "operation" => operation,
        "status" => status,
    )
    .increment(1);
    metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS,
        "operation" => operation,
    )
    .record(start.elapsed().as_secs_f64());
}
