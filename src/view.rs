//! View handles for the chat surface.
//!
//! The core logic never touches the terminal directly; it drives a
//! [`ChatView`] handle injected at construction time, so tests run the same
//! pipeline against a recording fake.

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::chat::{ChatMessage, ChatRole};

/// Abstraction over the surface that displays the conversation.
///
/// Contract:
/// - `render_welcome` clears the message area and shows the static welcome
///   placeholder; called at startup and on every new chat.
/// - `add_message` drops the welcome placeholder if it is still showing,
///   appends the message (append-only, display order = call order) with its
///   rendered timestamp, and scrolls to the bottom when `autoscroll` is set.
/// - `set_loading` switches the loading indicator on the send control.
/// - `apply_theme` / `set_sidebar_collapsed` reflect UI state changes; they
///   must be safe to call during initialization, before any interaction.
pub trait ChatView {
    fn render_welcome(&mut self);
    fn add_message(&mut self, message: &ChatMessage, autoscroll: bool);
    fn set_loading(&mut self, active: bool);
    fn apply_theme(&mut self, dark: bool);
    fn set_sidebar_collapsed(&mut self, collapsed: bool);
}

struct Palette {
    user: Style,
    assistant: Style,
    timestamp: Style,
    accent: Style,
}

impl Palette {
    fn light() -> Self {
        Self {
            user: Style::new().blue().bold(),
            assistant: Style::new().green().bold(),
            timestamp: Style::new().dim(),
            accent: Style::new().magenta(),
        }
    }

    fn dark() -> Self {
        Self {
            user: Style::new().cyan().bold(),
            assistant: Style::new().bright().green().bold(),
            timestamp: Style::new().dim(),
            accent: Style::new().bright().magenta(),
        }
    }
}

/// Terminal implementation of [`ChatView`].
pub struct TerminalView {
    palette: Palette,
    sidebar_collapsed: bool,
    model: String,
    spinner: Option<ProgressBar>,
}

impl TerminalView {
    pub fn new(model: &str) -> Self {
        Self {
            palette: Palette::light(),
            sidebar_collapsed: false,
            model: model.to_string(),
            spinner: None,
        }
    }

    /// Session banner, the terminal's stand-in for the sidebar.
    fn print_banner(&self) {
        if self.sidebar_collapsed {
            return;
        }
        println!(
            "{}",
            self.palette
                .accent
                .apply_to(format!("── My.Prompt · model: {} ──", self.model))
        );
        println!(
            "{}",
            self.palette
                .timestamp
                .apply_to("commands: /new /dark /sidebar /help /quit")
        );
    }
}

impl ChatView for TerminalView {
    fn render_welcome(&mut self) {
        self.print_banner();
        println!();
        println!("{}", self.palette.accent.apply_to("🔥 Let's break the ice"));
        println!("{}", self.palette.timestamp.apply_to("How can I help you today?"));
        println!();
    }

    fn add_message(&mut self, message: &ChatMessage, _autoscroll: bool) {
        // Printed text cannot be unprinted; the placeholder simply stops
        // being the current content once a real message lands.
        let (label, style) = match message.role {
            ChatRole::User => ("You", &self.palette.user),
            ChatRole::Assistant => ("My.Prompt", &self.palette.assistant),
        };
        println!(
            "{} {}",
            style.apply_to(label),
            self.palette.timestamp.apply_to(message.format_time())
        );
        println!("{}", message.content);
        println!();
    }

    fn set_loading(&mut self, active: bool) {
        if active {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner());
            spinner.set_message("Thinking...");
            spinner.enable_steady_tick(Duration::from_millis(80));
            self.spinner = Some(spinner);
        } else if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn apply_theme(&mut self, dark: bool) {
        self.palette = if dark {
            Palette::dark()
        } else {
            Palette::light()
        };
        // As on the toggle control, icon and label advertise the mode a
        // further toggle would switch to.
        let (icon, label) = if dark {
            ("☀", "Light Mode")
        } else {
            ("🌙", "Dark Mode")
        };
        println!(
            "{}",
            self.palette
                .accent
                .apply_to(format!("{icon} theme switched, /dark for {label}"))
        );
    }

    fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.sidebar_collapsed = collapsed;
        if collapsed {
            println!("{}", self.palette.timestamp.apply_to("sidebar hidden"));
        } else {
            self.print_banner();
        }
    }
}
