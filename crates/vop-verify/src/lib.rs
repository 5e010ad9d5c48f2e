//! VoP Batch Verification
//!
//! Reads payee/account name pairs as JSON lines and writes one verdict per
//! pair, using [`vop_core::Matcher`] with thresholds taken from the environment.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `VOP_MATCH_THRESHOLD`: MATCH threshold 0-100 (default: 95)
//! - `VOP_CLOSE_MATCH_THRESHOLD`: CLOSE_MATCH threshold 0-100 (default: 75)
//! - `VOP_PARALLEL`: score large batches in parallel (default: true)
//! - `RUST_LOG`: logging level (default: info)

pub mod config;
pub mod error;
pub mod tracing;
pub mod verify;

pub use config::VerifyConfig;
pub use error::{Error, Result};
pub use verify::{read_pairs, run, run_chunked, NamePair, Summary, Verdict, CHUNK_SIZE};
