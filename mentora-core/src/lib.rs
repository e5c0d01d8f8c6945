//! # mentora-core
//!
//! Core library for mentora - a conversational video-learning front end.
//!
//! This library provides:
//! - Domain types for profiles, chat messages, and recommended videos
//! - An HTTP client for the identity and recommendation collaborators
//! - The session gate deciding whether the conversation UI is reachable
//! - The conversation controller that keeps transcript, pending query,
//!   and recommended videos consistent across round trips
//! - Configuration management and logging infrastructure
//!
//! ## Architecture
//!
//! The session gate resolves first; the conversation controller then owns
//! all state for the lifetime of the page session. Nothing is persisted:
//! a restart discards everything except what the gate re-fetches.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mentora_core::{ApiClient, Config, Conversation, SessionGate};
//!
//! # async fn run() -> mentora_core::Result<()> {
//! let config = Config::load()?;
//! let client = ApiClient::new(config.api.clone())?;
//!
//! let mut gate = SessionGate::new();
//! gate.check_session(&client).await;
//!
//! let mut conversation = Conversation::new();
//! if gate.is_authenticated() {
//!     conversation.submit_query(&client, "I want to learn Go").await;
//! }
//! # Ok(())
//! # }
//! ```

// Re-export commonly used items at the crate root
pub use api::ApiClient;
pub use config::Config;
pub use conversation::{view_stage, Conversation, SubmitPhase, ViewStage};
pub use error::{Error, Result};
pub use session::{AuthState, SessionGate};
pub use types::*;

// Public modules
pub mod api;
pub mod config;
pub mod conversation;
pub mod error;
pub mod logging;
pub mod session;
pub mod types;
