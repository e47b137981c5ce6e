//! Shared test doubles for the integration tests.
#![allow(dead_code)]

use myprompt_cli::chat::{ChatMessage, ChatRole};
use myprompt_cli::view::ChatView;

/// What the message area currently contains.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Welcome,
    Message(ChatRole, String),
}

/// Chronological record of every call the core made on the view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Welcome,
    Message(ChatRole, String),
    Loading(bool),
    Theme(bool),
    Sidebar(bool),
}

/// Fake view that keeps the same list semantics as the real surface: the
/// welcome placeholder fills an empty list and is dropped by the first real
/// message; messages append in call order.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub list: Vec<Entry>,
    pub log: Vec<ViewEvent>,
}

impl RecordingView {
    pub fn messages(&self) -> Vec<(ChatRole, String)> {
        self.list
            .iter()
            .filter_map(|entry| match entry {
                Entry::Message(role, text) => Some((*role, text.clone())),
                Entry::Welcome => None,
            })
            .collect()
    }

    pub fn has_welcome(&self) -> bool {
        self.list.contains(&Entry::Welcome)
    }
}

impl ChatView for RecordingView {
    fn render_welcome(&mut self) {
        self.list.clear();
        self.list.push(Entry::Welcome);
        self.log.push(ViewEvent::Welcome);
    }

    fn add_message(&mut self, message: &ChatMessage, _autoscroll: bool) {
        self.list.retain(|entry| *entry != Entry::Welcome);
        self.list
            .push(Entry::Message(message.role, message.content.clone()));
        self.log
            .push(ViewEvent::Message(message.role, message.content.clone()));
    }

    fn set_loading(&mut self, active: bool) {
        self.log.push(ViewEvent::Loading(active));
    }

    fn apply_theme(&mut self, dark: bool) {
        self.log.push(ViewEvent::Theme(dark));
    }

    fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.log.push(ViewEvent::Sidebar(collapsed));
    }
}
