use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session status reported once by the backend at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    NeedsLogin,
    AfterLogin,
    DirectoriesSelected,
}

impl SessionStatus {
    /// Parse the backend's wire value (`before_login`, `after_login`,
    /// `directories_selected`). Case and surrounding whitespace are ignored.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "before_login" | "needs_login" => Ok(SessionStatus::NeedsLogin),
            "after_login" => Ok(SessionStatus::AfterLogin),
            "directories_selected" => Ok(SessionStatus::DirectoriesSelected),
            _ => Err(Error::UnrecognizedStatus(raw.to_string())),
        }
    }

    pub fn initial_screen(self) -> Screen {
        match self {
            SessionStatus::NeedsLogin => Screen::Login,
            SessionStatus::AfterLogin => Screen::Intro,
            SessionStatus::DirectoriesSelected => Screen::Gallery,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Login,
    Intro,
    Gallery,
}

impl Screen {
    pub fn route(self) -> &'static str {
        match self {
            Screen::Login => "/login",
            Screen::Intro => "/intro",
            Screen::Gallery => "/gallery",
        }
    }

    /// Gallery has no outgoing transition within a session.
    pub fn is_terminal(self) -> bool {
        self == Screen::Gallery
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Screen::Login => "login",
            Screen::Intro => "intro",
            Screen::Gallery => "gallery",
        })
    }
}

/// What caused a screen change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    Authenticated,
    PrivateKeyUnlocked,
    DirectoriesSaved,
    FilesIndexed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
    pub trigger: Trigger,
    pub at: DateTime<Utc>,
}
