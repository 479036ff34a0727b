//! Read-only catalog of tutorials and gallery designs, plus the gallery filter.
//!
//! The catalog is built once at startup (built-in seeds merged with TOML config)
//! and shared behind an `Arc`; nothing mutates it afterwards.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, instrument};

use crate::config::StudioConfig;
use crate::domain::{Design, Tutorial};
use crate::seeds::{seed_designs, seed_tutorials};

/// Filter value that matches every design.
pub const FILTER_ALL: &str = "all";

/// One entry of the gallery filter bar.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FilterOption {
  pub id: &'static str,
  pub label: &'static str,
}

/// Filter bar entries, in display order.
pub fn filter_options() -> Vec<FilterOption> {
  [
    (FILTER_ALL, "All Designs"),
    ("colored", "Colored"),
    ("monochrome", "Monochrome"),
    ("floral", "Floral"),
    ("geometric", "Geometric"),
    ("traditional", "Traditional"),
  ]
  .into_iter()
  .map(|(id, label)| FilterOption { id, label })
  .collect()
}

/// Gallery predicate: "all", or an exact match on the design's type or pattern tag.
pub fn matches(design: &Design, filter: &str) -> bool {
  filter == FILTER_ALL || design.kind == filter || design.pattern == filter
}

#[derive(Clone, Debug)]
pub struct Catalog {
  tutorials: Arc<[Tutorial]>,
  designs: Vec<Design>,
}

impl Catalog {
  pub fn builtin() -> Self {
    Self { tutorials: seed_tutorials().into(), designs: seed_designs() }
  }

  /// Config entries first (in file order), then built-ins whose ids are still free.
  /// Config tutorials without steps and repeated config ids are logged and skipped;
  /// a built-in shadowed by a config entry is dropped quietly.
  #[instrument(level = "info", skip_all)]
  pub fn from_config(cfg: &StudioConfig) -> Self {
    let mut tutorials = Vec::new();
    let mut tutorial_ids = HashSet::new();
    for t in &cfg.tutorials {
      if t.steps.is_empty() {
        error!(target: "tutorial", id = t.id, title = %t.title, "Skipping tutorial: no steps.");
        continue;
      }
      if !tutorial_ids.insert(t.id) {
        error!(target: "tutorial", id = t.id, title = %t.title, "Skipping tutorial: duplicate id.");
        continue;
      }
      tutorials.push(t.clone());
    }
    tutorials.extend(seed_tutorials().into_iter().filter(|t| tutorial_ids.insert(t.id)));

    let mut designs = Vec::new();
    let mut design_ids = HashSet::new();
    for d in &cfg.designs {
      if !design_ids.insert(d.id) {
        error!(target: "gallery", id = d.id, title = %d.title, "Skipping design: duplicate id.");
        continue;
      }
      designs.push(d.clone());
    }
    designs.extend(seed_designs().into_iter().filter(|d| design_ids.insert(d.id)));

    info!(target: "rangoli_studio", tutorials = tutorials.len(), designs = designs.len(), "Catalog loaded");
    Self { tutorials: tutorials.into(), designs }
  }

  pub fn tutorials(&self) -> &[Tutorial] {
    &self.tutorials
  }

  /// Shared handle for players, which outlive any borrow of the catalog.
  pub fn shared_tutorials(&self) -> Arc<[Tutorial]> {
    Arc::clone(&self.tutorials)
  }

  pub fn tutorial(&self, index: usize) -> Option<&Tutorial> {
    self.tutorials.get(index)
  }

  #[allow(dead_code)]
  pub fn designs(&self) -> &[Design] {
    &self.designs
  }

  pub fn design(&self, id: u32) -> Option<&Design> {
    self.designs.iter().find(|d| d.id == id)
  }

  /// Designs passing `matches`, in catalog order.
  pub fn filter_designs(&self, filter: &str) -> Vec<&Design> {
    self.designs.iter().filter(|d| matches(d, filter)).collect()
  }
}

impl Default for Catalog {
  fn default() -> Self {
    Self::builtin()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Difficulty;

  fn titles(designs: &[&Design]) -> Vec<String> {
    designs.iter().map(|d| d.title.clone()).collect()
  }

  #[test]
  fn all_matches_every_design() {
    let catalog = Catalog::builtin();
    for d in catalog.designs() {
      assert!(matches(d, FILTER_ALL));
    }
    assert_eq!(catalog.filter_designs(FILTER_ALL).len(), catalog.designs().len());
  }

  #[test]
  fn filter_matches_type_or_pattern() {
    let catalog = Catalog::builtin();
    for filter in ["colored", "monochrome", "floral", "geometric", "traditional", "dots", "festival", "nope"] {
      for d in catalog.designs() {
        assert_eq!(matches(d, filter), d.kind == filter || d.pattern == filter, "{} / {}", d.title, filter);
      }
    }
  }

  #[test]
  fn known_filters() {
    let catalog = Catalog::builtin();
    assert_eq!(titles(&catalog.filter_designs("floral")), vec!["Lotus Mandala", "Flower Mandala"]);
    assert_eq!(titles(&catalog.filter_designs("monochrome")), vec!["Geometric Star", "Kolam Dots"]);
    assert_eq!(catalog.filter_designs("colored").len(), 4);
    assert!(catalog.filter_designs("Floral").is_empty());
    assert!(catalog.filter_designs("").is_empty());
  }

  #[test]
  fn filter_bar_starts_with_all() {
    let options = filter_options();
    assert_eq!(options.len(), 6);
    assert_eq!(options[0], FilterOption { id: "all", label: "All Designs" });
  }

  #[test]
  fn lookups() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.tutorial(0).map(|t| t.title.as_str()), Some("Simple Lotus Design"));
    assert!(catalog.tutorial(1).is_none());
    assert_eq!(catalog.design(3).map(|d| d.title.as_str()), Some("Peacock Feather"));
    assert!(catalog.design(42).is_none());
  }

  #[test]
  fn config_entries_come_first_and_win_on_id() {
    let mut cfg = StudioConfig::default();
    let mut custom = seed_tutorials().remove(0);
    custom.title = "Custom Lotus".into();
    let mut empty = custom.clone();
    empty.id = 7;
    empty.steps.clear();

    let mut repeat = custom.clone();
    repeat.title = "Second Lotus".into();
    cfg.tutorials = vec![custom, empty, repeat];

    let mut star = seed_designs().remove(1);
    star.id = 10;
    star.difficulty = Difficulty::Advanced;
    let mut twin = star.clone();
    twin.title = "Star Twin".into();
    let mut peacock = seed_designs().remove(2);
    peacock.title = "Custom Peacock".into();
    cfg.designs = vec![star, twin, peacock];

    let catalog = Catalog::from_config(&cfg);
    assert_eq!(catalog.tutorials().len(), 1);
    assert_eq!(catalog.tutorials()[0].title, "Custom Lotus");

    assert_eq!(catalog.designs().len(), 7);
    assert_eq!(catalog.designs()[0].id, 10);
    assert_eq!(catalog.designs()[0].title, "Geometric Star");
    assert!(catalog.designs().iter().all(|d| d.title != "Star Twin"));
    assert_eq!(catalog.design(3).map(|d| d.title.as_str()), Some("Custom Peacock"));
  }
}
