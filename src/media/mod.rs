//! Media preview for audio and image files.
//!
//! Previews never touch editor state. Audio plays on a detached thread that
//! only receives the file path; images are turned into a small grayscale
//! ASCII grid that the UI shows in an overlay.

use std::path::{Path, PathBuf};

use image::DynamicImage;
use image::imageops::FilterType;
use thiserror::Error;

/// Size of the ASCII grid for image previews.
pub const PREVIEW_WIDTH: u32 = 40;
pub const PREVIEW_HEIGHT: u32 = 20;

/// Dark-to-light character ramp.
const ASCII_RAMP: &[char] = &['@', '%', '#', '*', '+', '=', '-', ':', '.', ' '];

const AUDIO_EXTENSIONS: &[&str] = &["wav", "mp3"];
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

/// Which previewer a file goes to, decided by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Image,
}

impl MediaKind {
    pub fn for_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Audio)
        } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Image)
        } else {
            None
        }
    }
}

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Cannot preview: {}", .0.display())]
    Unsupported(PathBuf),
    #[error("Image preview failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("Audio playback unavailable: {0}")]
    Audio(String),
}

/// What a preview produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// Playback was started in the background.
    AudioStarted(PathBuf),
    /// Rows of an ASCII rendering, ready to display.
    Image(Vec<String>),
}

/// A collaborator that previews media files.
pub trait MediaPreviewer {
    /// Preview `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`MediaError`] for unsupported files or decoding failures.
    fn preview(&self, path: &Path) -> Result<Preview, MediaError>;
}

/// Previewer that plays audio on a detached thread and renders images as text.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPreviewer;

impl MediaPreviewer for TerminalPreviewer {
    fn preview(&self, path: &Path) -> Result<Preview, MediaError> {
        match MediaKind::for_path(path) {
            Some(MediaKind::Image) => {
                let img = image::open(path)?;
                Ok(Preview::Image(image_to_ascii(
                    &img,
                    PREVIEW_WIDTH,
                    PREVIEW_HEIGHT,
                )))
            }
            Some(MediaKind::Audio) => {
                spawn_playback(path.to_path_buf())?;
                Ok(Preview::AudioStarted(path.to_path_buf()))
            }
            None => Err(MediaError::Unsupported(path.to_path_buf())),
        }
    }
}

/// Render `img` as `height` rows of `width` characters.
pub fn image_to_ascii(img: &DynamicImage, width: u32, height: u32) -> Vec<String> {
    let gray = img.resize_exact(width, height, FilterType::Triangle).to_luma8();
    gray.rows()
        .map(|row| {
            row.map(|pixel| ASCII_RAMP[usize::from(pixel.0[0]) * (ASCII_RAMP.len() - 1) / 255])
                .collect()
        })
        .collect()
}

#[cfg(feature = "audio")]
fn spawn_playback(path: PathBuf) -> Result<(), MediaError> {
    std::thread::Builder::new()
        .name("crane-audio".to_string())
        .spawn(move || {
            if let Err(err) = play_to_end(&path) {
                tracing::warn!(path = %path.display(), %err, "audio playback failed");
            }
        })
        .map(drop)
        .map_err(|err| MediaError::Audio(err.to_string()))
}

#[cfg(feature = "audio")]
fn play_to_end(path: &Path) -> anyhow::Result<()> {
    let (_stream, handle) = rodio::OutputStream::try_default()?;
    let sink = rodio::Sink::try_new(&handle)?;
    let file = std::io::BufReader::new(std::fs::File::open(path)?);
    sink.append(rodio::Decoder::new(file)?);
    sink.sleep_until_end();
    Ok(())
}

#[cfg(not(feature = "audio"))]
fn spawn_playback(path: PathBuf) -> Result<(), MediaError> {
    tracing::debug!(path = %path.display(), "audio feature disabled");
    Err(MediaError::Audio(
        "built without the `audio` feature".to_string(),
    ))
}
