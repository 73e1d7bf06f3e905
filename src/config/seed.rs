//! Sample data configuration

use serde::Deserialize;

/// Controls which sample data the in-memory stores start with
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Seed the deal store with the demo listings
    #[serde(default = "default_sample_deals")]
    pub sample_deals: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            sample_deals: default_sample_deals(),
        }
    }
}

fn default_sample_deals() -> bool {
    true
}
