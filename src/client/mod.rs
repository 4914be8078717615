//! Client library for the prediction serving daemon.
//!
//! Provides [`PredictorClient`], which forwards typed calls to a remote
//! prediction server over gRPC.

mod predictor;

pub use predictor::{ClientOptions, PredictorClient};
