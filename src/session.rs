//! Per-connection view state: active tab, gallery filter, tutorial player, and the
//! in-flight generation flag.
//!
//! A `Session` is owned by exactly one WebSocket task and is never shared. Incoming
//! client messages are applied one at a time through `Session::handle`; generation
//! results come back through `Session::finish_generation`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::catalog::{Catalog, FILTER_ALL};
use crate::generator::{random_prompt, GenerateError, GeneratedDesign, GenerationParams};
use crate::player::{PlayerError, TutorialPlayer};
use crate::protocol::{to_summary, ClientWsMessage, ServerWsMessage, TutorialView};
use crate::util::trunc_for_log;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
  #[default]
  Gallery,
  Tutorials,
  Generator,
}

/// What the connection loop should do after a message was applied.
#[derive(Debug)]
pub enum Action {
  Reply(ServerWsMessage),
  /// Run the generator in the background, send the acknowledgement now.
  StartGeneration { params: GenerationParams, ack: ServerWsMessage },
}

pub struct Session {
  pub id: Uuid,
  catalog: Arc<Catalog>,
  active_tab: Tab,
  filter: String,
  player: TutorialPlayer,
  generating: bool,
  last_generated: Option<GeneratedDesign>,
}

impl Session {
  pub fn new(catalog: Arc<Catalog>) -> Result<Self, PlayerError> {
    let player = TutorialPlayer::new(catalog.shared_tutorials())?;
    Ok(Self {
      id: Uuid::new_v4(),
      catalog,
      active_tab: Tab::default(),
      filter: FILTER_ALL.to_string(),
      player,
      generating: false,
      last_generated: None,
    })
  }

  #[allow(dead_code)]
  pub fn active_tab(&self) -> Tab {
    self.active_tab
  }

  #[allow(dead_code)]
  pub fn filter(&self) -> &str {
    &self.filter
  }

  #[allow(dead_code)]
  pub fn player(&self) -> &TutorialPlayer {
    &self.player
  }

  #[allow(dead_code)]
  pub fn is_generating(&self) -> bool {
    self.generating
  }

  #[allow(dead_code)]
  pub fn last_generated(&self) -> Option<&GeneratedDesign> {
    self.last_generated.as_ref()
  }

  pub fn gallery(&self) -> ServerWsMessage {
    ServerWsMessage::Gallery {
      filter: self.filter.clone(),
      designs: self.catalog.filter_designs(&self.filter).into_iter().cloned().collect(),
    }
  }

  pub fn tutorial_view(&self) -> TutorialView {
    let state = self.player.state();
    let (position, total) = self.player.progress();
    TutorialView {
      tutorial: to_summary(state.selected_tutorial, self.player.current_tutorial()),
      step: self.player.current_step().clone(),
      position,
      total,
      is_playing: state.is_playing,
      can_go_back: !self.player.at_first_step(),
      can_go_forward: !self.player.at_last_step(),
    }
  }

  fn view_reply(&self) -> Action {
    Action::Reply(ServerWsMessage::TutorialView(self.tutorial_view()))
  }

  #[instrument(level = "debug", skip(self, suggestions), fields(session = %self.id))]
  pub fn handle(&mut self, msg: ClientWsMessage, suggestions: &[String]) -> Action {
    match msg {
      ClientWsMessage::Ping => Action::Reply(ServerWsMessage::Pong),

      ClientWsMessage::SelectTab { tab } => {
        self.active_tab = tab;
        Action::Reply(ServerWsMessage::Tab { tab })
      }

      ClientWsMessage::SetFilter { filter } => {
        info!(target: "gallery", session = %self.id, filter = %trunc_for_log(&filter, 40), "Gallery filter set");
        self.filter = filter;
        Action::Reply(self.gallery())
      }

      ClientWsMessage::ShowTutorial => self.view_reply(),

      ClientWsMessage::SelectTutorial { index } => match self.player.select_tutorial(index) {
        Ok(()) => self.view_reply(),
        Err(e) => Action::Reply(ServerWsMessage::Error { message: e.to_string() }),
      },

      ClientWsMessage::NextStep => {
        self.player.advance();
        self.view_reply()
      }

      ClientWsMessage::PrevStep => {
        self.player.retreat();
        self.view_reply()
      }

      ClientWsMessage::ResetTutorial => {
        self.player.reset();
        self.view_reply()
      }

      ClientWsMessage::TogglePlay => {
        self.player.toggle_play();
        self.view_reply()
      }

      ClientWsMessage::RandomPrompt => match random_prompt(suggestions) {
        Some(prompt) => Action::Reply(ServerWsMessage::Prompt { prompt }),
        None => Action::Reply(ServerWsMessage::Error { message: "No prompt suggestions configured.".into() }),
      },

      msg @ ClientWsMessage::Generate { .. } => {
        let Some(params) = msg.generation_params() else {
          return Action::Reply(ServerWsMessage::Error { message: "Invalid generate request.".into() });
        };
        if self.generating {
          warn!(target: "generator", session = %self.id, "Generate rejected: already in progress");
          return Action::Reply(ServerWsMessage::Error { message: "A design is already being generated.".into() });
        }
        if params.prompt.trim().is_empty() {
          return Action::Reply(ServerWsMessage::Error { message: GenerateError::EmptyPrompt.to_string() });
        }
        self.generating = true;
        Action::StartGeneration { params, ack: ServerWsMessage::GenerationStarted }
      }
    }
  }

  /// Apply a finished generation and build the message announcing it.
  pub fn finish_generation(&mut self, result: Result<GeneratedDesign, GenerateError>) -> ServerWsMessage {
    self.generating = false;
    match result {
      Ok(design) => {
        info!(target: "generator", session = %self.id, id = %design.id, "Generated design delivered");
        self.last_generated = Some(design.clone());
        ServerWsMessage::Generated { design }
      }
      Err(e) => ServerWsMessage::Error { message: e.to_string() },
    }
  }
}
