//! Dashboard service
//!
//! Thin REST layer over the lineup pipeline: fetch the three scenario
//! records for a team, run extraction and the chart assemblers, and reply
//! with JSON chart specifications for the frontend renderer.

pub mod config;
pub mod routes;

pub use config::ServiceConfig;
pub use routes::routes;
