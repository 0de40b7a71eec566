use std::path::Path;

use crate::app::{App, Model, StatusLevel};
use crate::media::Preview;

impl App {
    /// Carry out requests the last update left on the model.
    pub(super) fn handle_side_effects(&self, model: &mut Model) {
        if let Some(path) = model.take_preview_request() {
            self.preview_media(model, &path);
        }
    }

    fn preview_media(&self, model: &mut Model, path: &Path) {
        match self.previewer.preview(path) {
            Ok(Preview::Image(rows)) => {
                model.preview = Some(rows);
            }
            Ok(Preview::AudioStarted(path)) => {
                model.set_status(StatusLevel::Info, format!("Playing {}", path.display()));
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "media preview failed");
                model.set_status(StatusLevel::Error, err.to_string());
            }
        }
    }
}
