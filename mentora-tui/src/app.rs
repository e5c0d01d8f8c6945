//! Application state for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mentora_core::config::UiConfig;
use mentora_core::{view_stage, ApiClient, Conversation, SessionGate, ViewStage};

/// Main application state.
///
/// Owns the collaborator client, the session gate, and the conversation
/// controller; key events are translated into gate and controller
/// operations. Collaborator calls run on a current-thread runtime and
/// block the loop, which also enforces one submission at a time.
pub struct App {
    /// Collaborator API client
    client: ApiClient,
    /// Session gate (resolved on startup)
    pub gate: SessionGate,
    /// Conversation controller
    pub conversation: Conversation,
    /// Scroll offset for the transcript pane
    pub scroll_offset: usize,
    /// One-line status message (sign-in URL, transient hints)
    pub status: Option<String>,
    /// Whether the app should exit
    pub should_quit: bool,
    runtime: tokio::runtime::Runtime,
}

impl App {
    /// Create a new App. The compose box starts seeded with the
    /// configured placeholder query.
    pub fn new(client: ApiClient, ui_config: UiConfig, runtime: tokio::runtime::Runtime) -> Self {
        let mut conversation = Conversation::new();
        conversation.pending.set_text(ui_config.placeholder_query);

        Self {
            client,
            gate: SessionGate::new(),
            conversation,
            scroll_offset: 0,
            status: None,
            should_quit: false,
            runtime,
        }
    }

    /// The render stage derived from gate and controller state.
    pub fn stage(&self) -> ViewStage {
        view_stage(self.gate.profile(), &self.conversation)
    }

    /// Resolve the session gate (startup, or 'r' on the login screen).
    pub fn check_session(&mut self) {
        self.runtime
            .block_on(self.gate.check_session(&self.client));
    }

    /// Consume a pending submit request, if any.
    ///
    /// The login prompt never routes a submit here: without a profile the
    /// conversation UI is unreachable.
    pub fn drive(&mut self) {
        if !self.gate.is_authenticated() {
            return;
        }
        self.runtime
            .block_on(self.conversation.submit_pending(&self.client));
    }

    /// Handle a key event for the current view stage.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.stage() {
            ViewStage::Login => self.handle_login_key(key),
            ViewStage::Prompt | ViewStage::Conversation => self.handle_chat_key(key),
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter | KeyCode::Char('l') => self.begin_login(),
            KeyCode::Char('r') => {
                self.status = None;
                self.check_session();
            }
            _ => {}
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        // Control chords first, so typing stays unobstructed
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('l') => self.logout(),
                KeyCode::Char('c') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.conversation.pending.request_submit(),
            KeyCode::Backspace => self.conversation.pending.pop_char(),
            KeyCode::Up => self.scroll_offset = self.scroll_offset.saturating_sub(1),
            KeyCode::Down => self.scroll_offset = self.scroll_offset.saturating_add(1),
            KeyCode::Char(c) => self.conversation.pending.push_char(c),
            _ => {}
        }
    }

    /// Fetch the sign-in URL and show it. A terminal cannot navigate
    /// away, so the viewer opens the URL in a browser and presses 'r'
    /// once the identity provider has redirected back.
    fn begin_login(&mut self) {
        match self.runtime.block_on(self.gate.login(&self.client)) {
            Ok(auth_url) => {
                self.status = Some(format!(
                    "Sign in at: {}  (press r once you are done)",
                    auth_url
                ));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login request failed");
                self.status = Some("Could not reach the sign-in service".to_string());
            }
        }
    }

    fn logout(&mut self) {
        self.runtime.block_on(self.gate.logout(&self.client));
        self.status = None;
    }
}
