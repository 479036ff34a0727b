//! Domain models: tutorials, their steps, gallery designs, and difficulty labels.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::illustration::Illustration;

/// Skill level shown as a badge on tutorials and designs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
  Beginner,
  Intermediate,
  Advanced,
}

impl fmt::Display for Difficulty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      Difficulty::Beginner => "Beginner",
      Difficulty::Intermediate => "Intermediate",
      Difficulty::Advanced => "Advanced",
    };
    f.write_str(s)
  }
}

/// One instructional unit within a tutorial.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
  pub title: String,
  pub description: String,
  pub tip: String,
  pub illustration: Illustration,
}

/// A named, ordered lesson. Well-formed tutorials have at least one step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tutorial {
  pub id: u32,
  pub title: String,
  pub description: String,
  pub difficulty: Difficulty,
  pub duration: String, // display label, e.g. "15 min"
  #[serde(default)] pub materials: Vec<String>,
  pub steps: Vec<Step>,
}

/// Finished pattern shown in the gallery.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Design {
  pub id: u32,
  pub title: String,
  pub description: String,
  pub difficulty: Difficulty,
  /// Finish tag ("colored" / "monochrome").
  #[serde(rename = "type")]
  pub kind: String,
  /// Category tag ("floral", "geometric", "traditional", ...).
  pub pattern: String,
  #[serde(default)] pub colors: Vec<String>,
  pub illustration: Illustration,
}
