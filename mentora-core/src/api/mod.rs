//! Collaborator API client
//!
//! This module talks to the two remote collaborators the front end
//! depends on: the identity provider (login/logout/profile) and the
//! recommendation service (chat replies plus ranked video lists). The
//! library persistence endpoints are part of the same surface and are
//! exposed here as well.
//!
//! Requests carry session credentials as cookies; no tokens are passed
//! explicitly. All configuration lives in one explicit [`ApiConfig`]
//! object handed to [`ApiClient::new`].
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080/api/v1"
//! with_credentials = true
//! chat_route = "/chat"
//! ```
//!
//! [`ApiConfig`]: crate::config::ApiConfig

mod client;

pub use client::{ApiClient, LibraryAddResponse, Recommendation, WatchDetails};
