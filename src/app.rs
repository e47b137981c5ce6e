//! Event wiring: binds the input line and slash commands to the core.

use std::borrow::Cow;

use anyhow::Result;
use nu_ansi_term::Color as PromptColor;
use reedline::{
    Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, Reedline, Signal,
};

use crate::api::ChatApi;
use crate::config::Config;
use crate::pipeline::SendPipeline;
use crate::prefs::PreferenceStore;
use crate::state::UiStateController;
use crate::view::{ChatView, TerminalView};

struct ReplPrompt;

impl Prompt for ReplPrompt {
    fn render_prompt_left(&self) -> Cow<str> {
        Cow::Owned(PromptColor::Magenta.bold().paint("my.prompt").to_string())
    }

    fn render_prompt_right(&self) -> Cow<str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<str> {
        Cow::Borrowed(" > ")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        Cow::Borrowed("│ ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };

        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}

pub struct App {
    view: TerminalView,
    controller: UiStateController,
    pipeline: SendPipeline,
}

impl App {
    pub fn new(config: &Config, prefs: Box<dyn PreferenceStore>) -> Result<Self> {
        let api = ChatApi::new(&config.endpoint)?;

        Ok(Self {
            view: TerminalView::new(&config.model),
            controller: UiStateController::new(prefs, api.clone()),
            pipeline: SendPipeline::new(api),
        })
    }

    /// Bring the view up: replay persisted preferences, then show the
    /// welcome placeholder.
    pub fn initialize(&mut self) {
        self.controller.restore(&mut self.view);
        self.view.render_welcome();
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut editor = Reedline::create();
        let prompt = ReplPrompt;

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    if !self.dispatch(&line).await {
                        return Ok(());
                    }
                }
                Signal::CtrlC | Signal::CtrlD => return Ok(()),
            }
        }
    }

    /// Route one submitted line. Returns false when the app should exit.
    async fn dispatch(&mut self, line: &str) -> bool {
        match line.trim() {
            "/quit" | "/exit" => return false,
            "/help" => self.print_help(),
            "/new" => self
                .pipeline
                .start_new_chat(&mut self.view, &mut self.controller),
            "/dark" => self.controller.toggle_dark_mode(&mut self.view),
            "/sidebar" => self.controller.toggle_sidebar(&mut self.view),
            // Empty lines fall through; the pipeline rejects them silently.
            other => {
                self.pipeline.send(other, &mut self.view).await;
            }
        }
        true
    }

    fn print_help(&self) {
        println!("Commands:");
        println!("  /new       start a new chat");
        println!("  /dark      toggle dark mode");
        println!("  /sidebar   toggle the session banner");
        println!("  /help      show this help");
        println!("  /quit      exit");
        println!("Anything else is sent to the assistant.");
    }
}
