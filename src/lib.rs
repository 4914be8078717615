//! predictor-client — typed gRPC client for the prediction serving daemon.
//!
//! This crate wraps the generated gRPC stubs for the prediction service in
//! an ergonomic async API: connection establishment with a bounded wait,
//! liveness/readiness probes, metadata retrieval, and prediction calls.
//! Every method is a forwarding call; retries, caching, and transport
//! concerns stay with the caller and the underlying channel.
//!
//! # Example
//!
//! ```rust,no_run
//! use predictor_client::PredictorClient;
//!
//! #[tokio::main]
//! async fn main() -> predictor_client::Result<()> {
//!     let client = PredictorClient::connect("127.0.0.1", 8080).await?;
//!
//!     client.ready(None).await?;
//!     let schema = client.get_schema(None).await?;
//!     println!("schema: {schema}");
//!
//!     let labels = client
//!         .predict(r#"["sepal_len","sepal_wid"]"#, "[[5.1, 3.5]]", false, None)
//!         .await?;
//!     println!("labels: {labels}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod telemetry;
pub mod version;

/// Generated protobuf types for the prediction wire contract.
///
/// The server-side stubs are included as well; they exist for test
/// harnesses that stand up an in-process endpoint.
pub mod proto {
    tonic::include_proto!("prediction.v1");
}

// Re-export main types at crate root
pub use client::{ClientOptions, PredictorClient};
pub use error::{PredictorError, Result};
pub use version::{GIT_BRANCH, GIT_SHA, PKG_VERSION, version_string};
