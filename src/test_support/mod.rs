//! Test utilities shared across crate-level unit tests.

mod client;

pub use client::{ClientCall, RecordingClient};
