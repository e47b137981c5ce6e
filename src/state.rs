//! Session UI state and its controller.

use crate::api::ChatApi;
use crate::prefs::{PreferenceStore, DARK_MODE, SIDEBAR_COLLAPSED};
use crate::view::ChatView;

pub const DEFAULT_MODEL: &str = "default";

/// The per-session UI state. Lives for one run of the client; only the two
/// booleans are persisted, via the preference store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_collapsed: bool,
    pub current_model: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            sidebar_collapsed: false,
            current_model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// Owns the [`UiState`] and keeps it, the view, and the preference store in
/// sync. Each toggle persists the new value immediately, so the stored
/// preference and the in-memory boolean never diverge.
pub struct UiStateController {
    pub state: UiState,
    prefs: Box<dyn PreferenceStore>,
    api: ChatApi,
}

impl UiStateController {
    pub fn new(prefs: Box<dyn PreferenceStore>, api: ChatApi) -> Self {
        Self {
            state: UiState::default(),
            prefs,
            api,
        }
    }

    /// Replay persisted preferences at startup: a stored `"true"` invokes
    /// the matching toggle once, bringing the view out of its default state.
    pub fn restore(&mut self, view: &mut dyn ChatView) {
        if self.prefs.get(DARK_MODE).as_deref() == Some("true") {
            self.toggle_dark_mode(view);
        }
        if self.prefs.get(SIDEBAR_COLLAPSED).as_deref() == Some("true") {
            self.toggle_sidebar(view);
        }
    }

    /// Flip the sidebar, update the view, persist. Synchronous, no network.
    pub fn toggle_sidebar(&mut self, view: &mut dyn ChatView) {
        self.state.sidebar_collapsed = !self.state.sidebar_collapsed;
        view.set_sidebar_collapsed(self.state.sidebar_collapsed);
        self.prefs
            .set(SIDEBAR_COLLAPSED, bool_str(self.state.sidebar_collapsed));
    }

    /// Flip dark mode, update the view, persist, then notify the backend.
    ///
    /// The notification is advisory: it runs detached and a failure never
    /// rolls back the theme or the persisted preference.
    pub fn toggle_dark_mode(&mut self, view: &mut dyn ChatView) {
        self.state.dark_mode = !self.state.dark_mode;
        view.apply_theme(self.state.dark_mode);
        self.prefs.set(DARK_MODE, bool_str(self.state.dark_mode));
        self.api.spawn_dark_mode_notify(self.state.dark_mode);
    }

    pub fn reset_model(&mut self) {
        self.state.current_model = DEFAULT_MODEL.to_string();
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
