//! Core domain types for mentora
//!
//! These types mirror the collaborator wire contract: the identity
//! provider's profile record, the chat transcript exchanged with the
//! recommendation service, and the video lessons it returns.

use serde::{Deserialize, Serialize};

// ============================================
// Profile
// ============================================

/// Identity of the authenticated viewer.
///
/// Absent (`None` at the session gate) means unauthenticated; there is no
/// separate "anonymous" profile value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Identity-provider user id
    pub user_id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Avatar URL, when the provider supplies one
    #[serde(default)]
    pub picture: Option<String>,
}

// ============================================
// Chat
// ============================================

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            _ => Err(format!("unknown role: {}", s)),
        }
    }
}

/// One turn of the conversation.
///
/// Messages are append-only: once part of a transcript they are never
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who authored this turn
    pub role: Role,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

// ============================================
// Videos
// ============================================

/// Character budget for video descriptions in list views.
///
/// The stored description is always complete; only rendering truncates.
pub const DESCRIPTION_DISPLAY_BUDGET: usize = 100;

/// A recommended video lesson.
///
/// Immutable once received from the recommendation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Provider video id (YouTube id)
    pub video_id: String,
    /// Watch URL
    pub url: String,
    /// Video title
    pub title: String,
    /// Full description as returned by the provider
    pub description: String,
    /// Thumbnail image URL
    pub thumbnail_url: String,
    /// Generated outline, present once the video has been analyzed
    #[serde(default)]
    pub outline: Option<String>,
}

impl Video {
    /// Description truncated to [`DESCRIPTION_DISPLAY_BUDGET`] characters
    /// for display. The full text stays available in `description`.
    pub fn display_description(&self) -> String {
        let mut chars = self.description.chars();
        let truncated: String = chars.by_ref().take(DESCRIPTION_DISPLAY_BUDGET).collect();
        if chars.next().is_some() {
            format!("{}...", truncated)
        } else {
            truncated
        }
    }
}

// ============================================
// Watch details
// ============================================

/// A quiz question generated for a watched video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub answer: String,
}
