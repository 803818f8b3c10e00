//! VBB transport REST API integration.

mod client;
mod error;
mod types;

pub use client::{VbbClient, VbbConfig};
pub use error::VbbError;
pub use types::{DeparturesResponse, VbbDeparture, VbbLine, VbbLocation, VbbProducts, VbbStation};
