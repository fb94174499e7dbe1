mod api;
mod client;
mod config;
mod constants;

pub use api::{CrittercismFactory, CrittercismIntegration};
pub use client::{CrittercismClient, LogClient};
pub use config::CrittercismConfig;
pub use constants::CRITTERCISM_KEY;
