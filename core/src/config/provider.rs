// waypoint/src/config/provider.rs

//! Defines the `ConfigSource` trait and its implementations for supplying a
//! `WizardConfig` to a session.
//!
//! Fetching the configuration (from a CMS, a file, a cache) is I/O owned by
//! the host, so sources are async. The routing engine itself never awaits.

use super::model::{WizardConfig, WizardDocument};
use crate::error::{WaypointError, WaypointResult};
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use tracing::{event, Level};

/// A trait for objects that can provide a wizard configuration.
#[async_trait]
pub trait ConfigSource: Send + Sync + 'static {
  /// Short name used in logs and in `ConfigSourceFailure`.
  fn name(&self) -> &str;

  /// Loads and indexes a configuration. Duplicate ids surface here as
  /// `DuplicateStepId` / `DuplicateGroupId`.
  async fn load(&self) -> WaypointResult<WizardConfig>;
}

// --- Static Config Source ---

/// Hands out a pre-built configuration.
#[derive(Debug, Clone)]
pub struct StaticConfigSource {
  config: Arc<WizardConfig>,
}

impl StaticConfigSource {
  pub fn new(config: WizardConfig) -> Self {
    Self {
      config: Arc::new(config),
    }
  }
}

#[async_trait]
impl ConfigSource for StaticConfigSource {
  fn name(&self) -> &str {
    "static"
  }

  async fn load(&self) -> WaypointResult<WizardConfig> {
    Ok(WizardConfig::clone(&self.config))
  }
}

// --- JSON Config Source ---

/// Parses a JSON document on every load, so an edited document is picked up
/// by the next session without rebuilding the source.
#[derive(Debug, Clone)]
pub struct JsonConfigSource {
  name: String,
  json: Arc<str>,
}

impl JsonConfigSource {
  pub fn new<N: Into<String>, J: Into<Arc<str>>>(name: N, json: J) -> Self {
    Self {
      name: name.into(),
      json: json.into(),
    }
  }
}

#[async_trait]
impl ConfigSource for JsonConfigSource {
  fn name(&self) -> &str {
    &self.name
  }

  async fn load(&self) -> WaypointResult<WizardConfig> {
    event!(Level::DEBUG, source = %self.name, bytes = self.json.len(), "Parsing wizard configuration.");
    WizardConfig::from_json_str(&self.json)
  }
}

// --- Functional Config Source ---

/// Provides a configuration by invoking a user-supplied asynchronous factory.
///
/// The factory yields a `WizardDocument` or an `anyhow::Error`; failures are
/// wrapped in `WaypointError::ConfigSourceFailure` carrying this source's
/// name.
pub struct FunctionalConfigSource<F, Fut>
where
  F: Fn() -> Fut + Send + Sync + 'static,
  Fut: Future<Output = anyhow::Result<WizardDocument>> + Send + 'static,
{
  name: String,
  factory: F,
}

impl<F, Fut> FunctionalConfigSource<F, Fut>
where
  F: Fn() -> Fut + Send + Sync + 'static,
  Fut: Future<Output = anyhow::Result<WizardDocument>> + Send + 'static,
{
  pub fn new<N: Into<String>>(name: N, factory: F) -> Self {
    Self {
      name: name.into(),
      factory,
    }
  }
}

#[async_trait]
impl<F, Fut> ConfigSource for FunctionalConfigSource<F, Fut>
where
  F: Fn() -> Fut + Send + Sync + 'static,
  Fut: Future<Output = anyhow::Result<WizardDocument>> + Send + 'static,
{
  fn name(&self) -> &str {
    &self.name
  }

  async fn load(&self) -> WaypointResult<WizardConfig> {
    let document = (self.factory)().await.map_err(|source| {
      event!(Level::ERROR, source_name = %self.name, error = %source, "Configuration factory failed.");
      WaypointError::ConfigSourceFailure {
        source_name: self.name.clone(),
        source,
      }
    })?;
    WizardConfig::from_document(document)
  }
}
