//! Design generation behind an injectable provider.
//!
//! `DesignGenerator` is the seam: handlers only see `Arc<dyn DesignGenerator>`.
//! The shipped `MockGenerator` waits a fixed delay and then picks one of the sample
//! designs at random. The wait runs in its own task, so dropping the caller's future
//! does not cut it short.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::config::GeneratorCfg;
use crate::illustration::Illustration;
use crate::util::trunc_for_log;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
  #[default]
  Traditional,
  Modern,
  Geometric,
  Floral,
  Abstract,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
  Simple,
  #[default]
  Medium,
  Complex,
  Intricate,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
  #[default]
  Vibrant,
  Pastel,
  Monochrome,
  Warm,
  Cool,
  Festival,
}

/// What the user asked for. Only `prompt` is required.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
  pub prompt: String,
  #[serde(default)] pub style: Style,
  #[serde(default)] pub complexity: Complexity,
  #[serde(default, alias = "colorScheme")] pub color_scheme: ColorScheme,
}

/// A design the generator can hand out.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
  pub description: String,
  pub illustration: Illustration,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneratedDesign {
  pub id: Uuid,
  pub description: String,
  pub illustration: Illustration,
  pub style: Style,
  pub complexity: Complexity,
  pub color_scheme: ColorScheme,
}

#[derive(Debug, Error)]
pub enum GenerateError {
  #[error("prompt must not be empty")]
  EmptyPrompt,
  #[error("no sample designs configured")]
  NoSamples,
  #[error("generation task failed: {0}")]
  Task(String),
}

#[async_trait]
pub trait DesignGenerator: Send + Sync {
  async fn generate(&self, params: &GenerationParams) -> Result<GeneratedDesign, GenerateError>;

  /// Short label for logs.
  fn name(&self) -> &'static str;
}

pub struct MockGenerator {
  samples: Arc<[Sample]>,
  delay: Duration,
}

impl MockGenerator {
  pub fn new(samples: Vec<Sample>, delay: Duration) -> Self {
    Self { samples: samples.into(), delay }
  }

  pub fn from_config(cfg: &GeneratorCfg, samples: Vec<Sample>) -> Self {
    Self::new(samples, Duration::from_millis(cfg.delay_ms))
  }

  pub fn delay(&self) -> Duration {
    self.delay
  }
}

#[async_trait]
impl DesignGenerator for MockGenerator {
  #[instrument(level = "info", skip(self, params), fields(prompt = %trunc_for_log(&params.prompt, 80), style = ?params.style))]
  async fn generate(&self, params: &GenerationParams) -> Result<GeneratedDesign, GenerateError> {
    if params.prompt.trim().is_empty() {
      return Err(GenerateError::EmptyPrompt);
    }

    let samples = Arc::clone(&self.samples);
    let delay = self.delay;
    let picked = tokio::spawn(async move {
      tokio::time::sleep(delay).await;
      samples.choose(&mut rand::thread_rng()).cloned()
    })
    .await
    .map_err(|e| GenerateError::Task(e.to_string()))?
    .ok_or(GenerateError::NoSamples)?;

    info!(target: "generator", description = %picked.description, delay_ms = delay.as_millis() as u64, "Design generated");
    Ok(GeneratedDesign {
      id: Uuid::new_v4(),
      description: picked.description,
      illustration: picked.illustration,
      style: params.style,
      complexity: params.complexity,
      color_scheme: params.color_scheme,
    })
  }

  fn name(&self) -> &'static str {
    "mock"
  }
}

/// Uniform pick from the prompt suggestions.
pub fn random_prompt(suggestions: &[String]) -> Option<String> {
  suggestions.choose(&mut rand::thread_rng()).cloned()
}
