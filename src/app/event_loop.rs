use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Model, update};
use crate::highlight::SyntectHighlighter;

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read at startup, or if
    /// terminal initialization or drawing fails.
    pub fn run(&mut self) -> Result<()> {
        let mut model = self.initial_model((80, 24))?;

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - crane requires an interactive terminal")?;
        let size = terminal.size()?;
        model = update(model, crate::app::Message::Resize(size.width, size.height));

        let result = self.event_loop(&mut terminal, model);

        ratatui::restore();
        result
    }

    /// Build the starting model from the configured file and toggles.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn initial_model(&self, terminal_size: (u16, u16)) -> Result<Model> {
        let mut model = Model::open(self.file_path.clone(), terminal_size).with_context(|| {
            format!(
                "Failed to open {}",
                self.file_path
                    .as_deref()
                    .map_or_else(String::new, |p| p.display().to_string())
            )
        })?;
        model.syntax_enabled = self.syntax_enabled;
        model.show_line_numbers = self.show_line_numbers;
        Ok(model)
    }

    fn event_loop(&self, terminal: &mut DefaultTerminal, mut model: Model) -> Result<()> {
        let highlighter = SyntectHighlighter;
        while !model.should_quit {
            terminal.draw(|frame| crate::ui::render(&mut model, frame, &highlighter))?;
            model.clear_status();

            let event = event::read().context("Failed to read terminal event")?;
            if let Some(msg) = self.handle_event(&event, &model) {
                tracing::trace!(?msg, mode = ?model.mode, "handling message");
                model = update(model, msg);
                self.handle_side_effects(&mut model);
            }
        }
        tracing::info!(dirty = model.dirty, "editor exiting");
        Ok(())
    }
}
