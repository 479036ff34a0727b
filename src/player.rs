//! Tutorial step-player: a cursor over the ordered steps of one tutorial at a time.
//!
//! States are `(selected_tutorial, current_step)` starting at `(0, 0)`. `advance` and
//! `retreat` clamp at the ends instead of wrapping or failing; only `select_tutorial`
//! can fail, and it leaves the state untouched when it does.
//!
//! `is_playing` is observable state only. Nothing schedules an auto-advance off it.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::domain::{Step, Tutorial};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
  #[error("tutorial index {index} out of range (have {len})")]
  OutOfRange { index: usize, len: usize },
  #[error("no tutorials available")]
  NoTutorials,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
  pub selected_tutorial: usize,
  pub current_step: usize,
  pub is_playing: bool,
}

impl Default for PlayerState {
  fn default() -> Self {
    Self { selected_tutorial: 0, current_step: 0, is_playing: false }
  }
}

#[derive(Debug, Clone)]
pub struct TutorialPlayer {
  tutorials: Arc<[Tutorial]>,
  state: PlayerState,
}

impl TutorialPlayer {
  /// Every tutorial must have at least one step; `Catalog` guarantees this.
  pub fn new(tutorials: Arc<[Tutorial]>) -> Result<Self, PlayerError> {
    if tutorials.is_empty() {
      return Err(PlayerError::NoTutorials);
    }
    Ok(Self { tutorials, state: PlayerState::default() })
  }

  pub fn state(&self) -> PlayerState {
    self.state
  }

  pub fn current_tutorial(&self) -> &Tutorial {
    &self.tutorials[self.state.selected_tutorial]
  }

  pub fn current_step(&self) -> &Step {
    &self.current_tutorial().steps[self.state.current_step]
  }

  fn step_count(&self) -> usize {
    self.current_tutorial().steps.len()
  }

  /// `(current_step + 1, steps.len())` for "Step n of m".
  pub fn progress(&self) -> (usize, usize) {
    (self.state.current_step + 1, self.step_count())
  }

  pub fn at_first_step(&self) -> bool {
    self.state.current_step == 0
  }

  pub fn at_last_step(&self) -> bool {
    self.state.current_step + 1 >= self.step_count()
  }

  pub fn advance(&mut self) {
    if !self.at_last_step() {
      self.state.current_step += 1;
    }
    debug!(target: "tutorial", step = self.state.current_step, "advance");
  }

  pub fn retreat(&mut self) {
    if !self.at_first_step() {
      self.state.current_step -= 1;
    }
    debug!(target: "tutorial", step = self.state.current_step, "retreat");
  }

  pub fn reset(&mut self) {
    self.state.current_step = 0;
    self.state.is_playing = false;
  }

  pub fn toggle_play(&mut self) -> bool {
    self.state.is_playing = !self.state.is_playing;
    self.state.is_playing
  }

  #[instrument(level = "debug", skip(self))]
  pub fn select_tutorial(&mut self, index: usize) -> Result<(), PlayerError> {
    let len = self.tutorials.len();
    if index >= len {
      warn!(target: "tutorial", index, len, "Rejected tutorial selection");
      return Err(PlayerError::OutOfRange { index, len });
    }
    self.state.selected_tutorial = index;
    self.state.current_step = 0;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Difficulty;
  use crate::illustration::Illustration;

  fn tutorial(id: u32, steps: usize) -> Tutorial {
    Tutorial {
      id,
      title: format!("T{}", id),
      description: String::new(),
      difficulty: Difficulty::Beginner,
      duration: "5 min".into(),
      materials: vec![],
      steps: (0..steps)
        .map(|i| Step {
          title: format!("step {}", i),
          description: String::new(),
          tip: String::new(),
          illustration: Illustration::new(vec![]),
        })
        .collect(),
    }
  }

  fn player(steps: &[usize]) -> TutorialPlayer {
    let tutorials: Vec<Tutorial> = steps.iter().enumerate().map(|(i, &n)| tutorial(i as u32, n)).collect();
    TutorialPlayer::new(tutorials.into()).unwrap()
  }

  #[test]
  fn starts_at_origin() {
    let p = player(&[5]);
    assert_eq!(p.state(), PlayerState { selected_tutorial: 0, current_step: 0, is_playing: false });
    assert_eq!(p.progress(), (1, 5));
    assert!(p.at_first_step());
    assert!(!p.at_last_step());
  }

  #[test]
  fn empty_list_is_rejected() {
    let err = TutorialPlayer::new(Vec::<Tutorial>::new().into()).unwrap_err();
    assert_eq!(err, PlayerError::NoTutorials);
  }

  #[test]
  fn walks_forward_and_back_with_clamping() {
    let mut p = player(&[5]);
    for _ in 0..4 {
      p.advance();
    }
    assert_eq!(p.state().current_step, 4);
    assert!(p.at_last_step());
    let before = p.state();
    p.advance();
    assert_eq!(p.state(), before);

    for _ in 0..4 {
      p.retreat();
    }
    assert_eq!(p.state().current_step, 0);
    let before = p.state();
    p.retreat();
    assert_eq!(p.state(), before);
  }

  #[test]
  fn cursor_stays_in_bounds_for_mixed_sequences() {
    let mut p = player(&[3]);
    let pattern = [true, true, true, false, true, true, false, false, false, false, true];
    for (i, forward) in pattern.iter().cycle().take(200).enumerate() {
      if *forward || i % 7 == 0 { p.advance() } else { p.retreat() }
      assert!(p.state().current_step < 3);
    }
  }

  #[test]
  fn reset_always_returns_to_start() {
    let mut p = player(&[5]);
    p.advance();
    p.advance();
    p.toggle_play();
    p.reset();
    assert_eq!(p.state().current_step, 0);
    assert!(!p.state().is_playing);

    p.reset();
    assert_eq!(p.state(), PlayerState::default());
  }

  #[test]
  fn toggle_play_is_cosmetic() {
    let mut p = player(&[5]);
    p.advance();
    assert!(p.toggle_play());
    assert_eq!(p.state().current_step, 1);
    assert!(!p.toggle_play());
    assert_eq!(p.state(), PlayerState { selected_tutorial: 0, current_step: 1, is_playing: false });
  }

  #[test]
  fn select_tutorial_resets_cursor() {
    let mut p = player(&[5, 2]);
    p.advance();
    p.advance();
    p.select_tutorial(1).unwrap();
    assert_eq!(p.state().selected_tutorial, 1);
    assert_eq!(p.state().current_step, 0);
    assert_eq!(p.progress(), (1, 2));
    p.advance();
    p.advance();
    assert_eq!(p.state().current_step, 1);
  }

  #[test]
  fn select_out_of_range_leaves_state() {
    let mut p = player(&[5]);
    p.advance();
    p.toggle_play();
    let before = p.state();
    assert_eq!(p.select_tutorial(1), Err(PlayerError::OutOfRange { index: 1, len: 1 }));
    assert_eq!(p.state(), before);
  }

  #[test]
  fn single_step_tutorial_is_both_ends() {
    let mut p = player(&[1]);
    assert!(p.at_first_step() && p.at_last_step());
    p.advance();
    p.retreat();
    assert_eq!(p.state().current_step, 0);
    assert_eq!(p.current_step().title, "step 0");
  }
}
