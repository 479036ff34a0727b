//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{Design, Difficulty, Step, Tutorial};
use crate::generator::{ColorScheme, Complexity, GeneratedDesign, GenerationParams, Style};
use crate::session::Tab;

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    SelectTab {
        tab: Tab,
    },
    SetFilter {
        filter: String,
    },
    ShowTutorial,
    SelectTutorial {
        index: usize,
    },
    NextStep,
    PrevStep,
    ResetTutorial,
    TogglePlay,
    RandomPrompt,
    Generate {
        prompt: String,
        #[serde(default)]
        style: Style,
        #[serde(default)]
        complexity: Complexity,
        #[serde(default, alias = "colorScheme")]
        color_scheme: ColorScheme,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Tab {
        tab: Tab,
    },
    Gallery {
        filter: String,
        designs: Vec<Design>,
    },
    TutorialView(TutorialView),
    Prompt {
        prompt: String,
    },
    GenerationStarted,
    Generated {
        design: GeneratedDesign,
    },
    Error {
        message: String,
    },
}

/// Tutorial header without the steps, used in lists and in the player view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TutorialSummary {
    pub index: usize,
    pub id: u32,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration: String,
    pub materials: Vec<String>,
    pub step_count: usize,
}

pub fn to_summary(index: usize, t: &Tutorial) -> TutorialSummary {
    TutorialSummary {
        index,
        id: t.id,
        title: t.title.clone(),
        description: t.description.clone(),
        difficulty: t.difficulty,
        duration: t.duration.clone(),
        materials: t.materials.clone(),
        step_count: t.steps.len(),
    }
}

/// Snapshot of a tutorial player: what the step panel and its controls render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TutorialView {
    pub tutorial: TutorialSummary,
    pub step: Step,
    /// 1-based, for "Step n of m".
    pub position: usize,
    pub total: usize,
    pub is_playing: bool,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

impl ClientWsMessage {
    /// Generation parameters if this is a `generate` request.
    pub fn generation_params(&self) -> Option<GenerationParams> {
        match self {
            ClientWsMessage::Generate { prompt, style, complexity, color_scheme } => Some(GenerationParams {
                prompt: prompt.clone(),
                style: *style,
                complexity: *complexity,
                color_scheme: *color_scheme,
            }),
            _ => None,
        }
    }
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize)]
pub struct DesignsQuery {
    pub filter: Option<String>,
}

#[derive(Serialize)]
pub struct PromptOut {
    pub prompt: String,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub error: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
