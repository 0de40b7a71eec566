//! Syntax highlighting for editor lines.
//!
//! Uses syntect for highlighting with Sublime Text syntax definitions.
//! The language is picked from the file name's extension; anything
//! unrecognised falls back to the raw line.

use std::path::Path;
use std::sync::{Mutex, OnceLock};

use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};

/// A 24-bit foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A run of text with an optional foreground color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub fg: Option<HighlightColor>,
}

impl StyledSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: None,
        }
    }
}

/// A collaborator that styles a single line of text.
pub trait SyntaxHighlighter {
    /// Style `line` as a line of the file called `filename`.
    ///
    /// Implementations fall back to a single plain span on failure.
    fn highlight_line(&self, line: &str, filename: Option<&Path>) -> Vec<StyledSpan>;
}

/// Highlighter that leaves every line unstyled.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainHighlighter;

impl SyntaxHighlighter for PlainHighlighter {
    fn highlight_line(&self, line: &str, _filename: Option<&Path>) -> Vec<StyledSpan> {
        vec![StyledSpan::plain(line)]
    }
}

/// Highlighter backed by syntect's default syntaxes and themes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntectHighlighter;

impl SyntaxHighlighter for SyntectHighlighter {
    fn highlight_line(&self, line: &str, filename: Option<&Path>) -> Vec<StyledSpan> {
        let Some(syntax) = filename.and_then(syntax_for_file) else {
            return vec![StyledSpan::plain(line)];
        };
        let mode = background_mode();
        let mut highlighter = HighlightLines::new(syntax, theme());
        match highlighter.highlight_line(line, syntax_set()) {
            Ok(ranges) => ranges
                .into_iter()
                .map(|(style, text)| StyledSpan {
                    text: text.to_string(),
                    fg: Some(adjust_fg_for_background(
                        HighlightColor {
                            r: style.foreground.r,
                            g: style.foreground.g,
                            b: style.foreground.b,
                        },
                        mode,
                    )),
                })
                .collect(),
            Err(err) => {
                tracing::debug!(%err, "highlighting failed, using raw line");
                vec![StyledSpan::plain(line)]
            }
        }
    }
}

fn syntax_for_file(path: &Path) -> Option<&'static SyntaxReference> {
    let ext = path.extension()?.to_str()?;
    syntax_set().find_syntax_by_extension(ext)
}

fn syntax_set() -> &'static SyntaxSet {
    static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_nonewlines)
}

fn theme() -> &'static Theme {
    static THEME: OnceLock<Theme> = OnceLock::new();
    THEME.get_or_init(|| {
        let theme_set = ThemeSet::load_defaults();
        let preferred = match background_mode() {
            BackgroundMode::Dark => ["base16-ocean.dark", "base16-eighties.dark", "Solarized (dark)"].as_slice(),
            BackgroundMode::Light => ["InspiredGitHub", "Solarized (light)", "base16-ocean.light"].as_slice(),
        };

        for name in preferred {
            if let Some(theme) = theme_set.themes.get(*name) {
                return theme.clone();
            }
        }

        theme_set
            .themes
            .values()
            .next()
            .cloned()
            .unwrap_or_default()
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BackgroundMode {
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightBackground {
    Light,
    Dark,
}

static BACKGROUND_OVERRIDE: OnceLock<Mutex<Option<HighlightBackground>>> = OnceLock::new();

/// Force a light or dark palette, or `None` to detect from `COLORFGBG`.
pub fn set_background_mode(mode: Option<HighlightBackground>) {
    let lock = BACKGROUND_OVERRIDE.get_or_init(|| Mutex::new(None));
    let mut guard = match lock.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    *guard = mode;
}

fn background_mode() -> BackgroundMode {
    let lock = BACKGROUND_OVERRIDE.get_or_init(|| Mutex::new(None));
    if let Ok(guard) = lock.lock()
        && let Some(mode) = *guard
    {
        return match mode {
            HighlightBackground::Light => BackgroundMode::Light,
            HighlightBackground::Dark => BackgroundMode::Dark,
        };
    }
    background_mode_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
}

fn background_mode_from_colorfgbg(colorfgbg: Option<&str>) -> BackgroundMode {
    let Some(value) = colorfgbg else {
        return BackgroundMode::Dark;
    };
    let bg_str = value.rsplit(';').next().unwrap_or(value);
    let Ok(bg) = bg_str.parse::<u8>() else {
        return BackgroundMode::Dark;
    };

    if bg >= 7 {
        BackgroundMode::Light
    } else {
        BackgroundMode::Dark
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn adjust_fg_for_background(color: HighlightColor, mode: BackgroundMode) -> HighlightColor {
    match mode {
        BackgroundMode::Dark => color,
        BackgroundMode::Light => {
            let luma = 0.0722f32.mul_add(
                f32::from(color.b),
                0.2126f32.mul_add(f32::from(color.r), 0.7152 * f32::from(color.g)),
            );
            if luma < 155.0 {
                return color;
            }

            HighlightColor {
                r: (f32::from(color.r) * 0.42).round() as u8,
                g: (f32::from(color.g) * 0.42).round() as u8,
                b: (f32::from(color.b) * 0.42).round() as u8,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(spans: &[StyledSpan]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_highlight_rust_line_produces_colored_spans() {
        let spans = SyntectHighlighter.highlight_line("fn main() {}", Some(Path::new("main.rs")));
        assert_eq!(joined(&spans), "fn main() {}");
        assert!(spans.iter().any(|span| span.fg.is_some()));
    }

    #[test]
    fn test_unknown_extension_falls_back_to_raw_line() {
        let spans = SyntectHighlighter.highlight_line("just text", Some(Path::new("notes.zzz")));
        assert_eq!(spans, vec![StyledSpan::plain("just text")]);
    }

    #[test]
    fn test_no_filename_falls_back_to_raw_line() {
        let spans = SyntectHighlighter.highlight_line("just text", None);
        assert_eq!(spans, vec![StyledSpan::plain("just text")]);
    }

    #[test]
    fn test_plain_highlighter_never_styles() {
        let spans = PlainHighlighter.highlight_line("fn x() {}", Some(Path::new("a.rs")));
        assert_eq!(spans, vec![StyledSpan::plain("fn x() {}")]);
    }

    #[test]
    fn test_colorfgbg_dark_background() {
        let mode = background_mode_from_colorfgbg(Some("15;0"));
        assert_eq!(mode, BackgroundMode::Dark);
    }

    #[test]
    fn test_colorfgbg_light_background() {
        let mode = background_mode_from_colorfgbg(Some("0;15"));
        assert_eq!(mode, BackgroundMode::Light);
    }

    #[test]
    fn test_colorfgbg_missing_defaults_dark() {
        assert_eq!(background_mode_from_colorfgbg(None), BackgroundMode::Dark);
    }

    #[test]
    fn test_light_mode_darkens_bright_fg() {
        let bright = HighlightColor {
            r: 240,
            g: 230,
            b: 120,
        };
        let adjusted = adjust_fg_for_background(bright, BackgroundMode::Light);
        assert!(adjusted.r < bright.r);
        assert!(adjusted.g < bright.g);
        assert!(adjusted.b < bright.b);
    }

    #[test]
    fn test_dark_mode_keeps_color() {
        let color = HighlightColor { r: 1, g: 2, b: 3 };
        assert_eq!(adjust_fg_for_background(color, BackgroundMode::Dark), color);
    }
}
