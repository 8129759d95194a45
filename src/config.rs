//! Environment-driven configuration.
//!
//! Read once at startup. The pricing strategy is a deployment decision, not
//! a per-request one: `PRICING_STRATEGY=model` requires `COST_MODEL_PATH`
//! to point at a trained artifact, and startup fails if it cannot be loaded.

use std::path::PathBuf;

use anyhow::{bail, Context};

/// Which pricing strategy this deployment serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingStrategy {
    Formula,
    Model,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub strategy: PricingStrategy,
    /// Required when `strategy` is `Model`.
    pub model_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let strategy = match std::env::var("PRICING_STRATEGY")
            .unwrap_or_else(|_| "formula".to_string())
            .to_lowercase()
            .as_str()
        {
            "formula" => PricingStrategy::Formula,
            "model" => PricingStrategy::Model,
            other => bail!("unsupported PRICING_STRATEGY '{other}' (expected 'formula' or 'model')"),
        };

        let model_path = match strategy {
            PricingStrategy::Formula => std::env::var("COST_MODEL_PATH").ok().map(PathBuf::from),
            PricingStrategy::Model => Some(PathBuf::from(
                std::env::var("COST_MODEL_PATH")
                    .context("PRICING_STRATEGY=model requires COST_MODEL_PATH")?,
            )),
        };

        Ok(Self {
            bind_addr,
            strategy,
            model_path,
        })
    }
}
