//! Loading studio configuration (generator settings + optional catalog entries) from TOML.
//!
//! See `StudioConfig` and `GeneratorCfg` for expected schema. Example:
//!
//! ```toml
//! prompt_suggestions = ["Design a peacock border"]
//!
//! [generator]
//! delay_ms = 500
//!
//! [[designs]]
//! id = 20
//! title = "Rangoli Square"
//! description = "Simple square frame"
//! difficulty = "Beginner"
//! type = "monochrome"
//! pattern = "geometric"
//! colors = ["#000000"]
//! illustration = { shapes = [{ kind = "circle", cx = 100, cy = 100, r = 50, paint = { fill = "none", stroke = "#000000" } }] }
//! ```

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::{Design, Tutorial};

/// Delay the mock generator waits before answering.
pub const DEFAULT_GENERATION_DELAY_MS: u64 = 2000;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct StudioConfig {
  #[serde(default)]
  pub generator: GeneratorCfg,
  #[serde(default)]
  pub tutorials: Vec<Tutorial>,
  #[serde(default)]
  pub designs: Vec<Design>,
  /// Replaces the built-in prompt suggestions when non-empty.
  #[serde(default)]
  pub prompt_suggestions: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GeneratorCfg {
  #[serde(default = "default_delay_ms")]
  pub delay_ms: u64,
}

fn default_delay_ms() -> u64 { DEFAULT_GENERATION_DELAY_MS }

impl Default for GeneratorCfg {
  fn default() -> Self {
    Self { delay_ms: DEFAULT_GENERATION_DELAY_MS }
  }
}

/// Attempt to load `StudioConfig` from STUDIO_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_studio_config_from_env() -> Option<StudioConfig> {
  let path = std::env::var("STUDIO_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_studio_config(&s) {
      Ok(cfg) => {
        info!(target: "rangoli_studio", %path, "Loaded studio config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "rangoli_studio", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "rangoli_studio", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

pub fn parse_studio_config(s: &str) -> Result<StudioConfig, toml::de::Error> {
  toml::from_str::<StudioConfig>(s)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::illustration::Shape;

  #[test]
  fn empty_config_uses_defaults() {
    let cfg = parse_studio_config("").unwrap();
    assert_eq!(cfg.generator.delay_ms, DEFAULT_GENERATION_DELAY_MS);
    assert!(cfg.tutorials.is_empty());
    assert!(cfg.designs.is_empty());
    assert!(cfg.prompt_suggestions.is_empty());
  }

  #[test]
  fn parses_generator_and_design() {
    let src = r##"
prompt_suggestions = ["Design a peacock border"]

[generator]
delay_ms = 500

[[designs]]
id = 20
title = "Rangoli Square"
description = "Simple square frame"
difficulty = "Beginner"
type = "monochrome"
pattern = "geometric"
colors = ["#000000"]
illustration = { shapes = [{ kind = "circle", cx = 100, cy = 100, r = 50, paint = { fill = "none", stroke = "#000000" } }] }
"##;
    let cfg = parse_studio_config(src).unwrap();
    assert_eq!(cfg.generator.delay_ms, 500);
    assert_eq!(cfg.prompt_suggestions, vec!["Design a peacock border".to_string()]);
    assert_eq!(cfg.designs.len(), 1);
    let d = &cfg.designs[0];
    assert_eq!(d.kind, "monochrome");
    assert!(matches!(d.illustration.shapes[0], Shape::Circle { r, .. } if r == 50.0));
  }

  #[test]
  fn parses_tutorial_with_steps() {
    let src = r#"
[[tutorials]]
id = 2
title = "Dot Grid"
description = "Kolam basics"
difficulty = "Intermediate"
duration = "10 min"

[[tutorials.steps]]
title = "Place dots"
description = "Lay out a 5x5 grid"
tip = "Keep spacing even"
illustration = { shapes = [] }
"#;
    let cfg = parse_studio_config(src).unwrap();
    assert_eq!(cfg.tutorials.len(), 1);
    assert!(cfg.tutorials[0].materials.is_empty());
    assert_eq!(cfg.tutorials[0].steps.len(), 1);
  }

  #[test]
  fn unknown_difficulty_is_rejected() {
    let src = r#"
[[tutorials]]
id = 2
title = "x"
description = "x"
difficulty = "Expert"
duration = "1 min"
steps = []
"#;
    assert!(parse_studio_config(src).is_err());
  }
}
