pub mod config;
pub mod enrich;
pub mod telemetry;

pub use config::{Config, ConfigError, EnrichConfig};
pub use enrich::{EnrichError, Enricher, HttpEnricher};
