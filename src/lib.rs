// Library exports for the My.Prompt chat client

pub mod api;
pub mod app;
pub mod chat;
pub mod config;
pub mod pipeline;
pub mod prefs;
pub mod state;
pub mod view;

// Re-export commonly used types
pub use api::{ChatApi, ChatReply};
pub use app::App;
pub use chat::{ChatMessage, ChatRole};
pub use config::Config;
pub use pipeline::{SendOutcome, SendPipeline, CONNECTION_ERROR_TEXT, PROCESSING_ERROR_TEXT};
pub use prefs::{FilePrefs, MemoryPrefs, PreferenceStore};
pub use state::{UiState, UiStateController};
pub use view::{ChatView, TerminalView};
