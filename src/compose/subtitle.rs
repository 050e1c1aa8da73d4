//! Burned-in subtitle text (ffmpeg drawtext filter)

use std::fmt::Write as FmtWrite;

use serde::{Deserialize, Serialize};

/// Style for the burned subtitle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtitleStyle {
    /// Font size in pixels
    pub font_size: u32,
    /// Text color (ffmpeg color name or 0xRRGGBB)
    pub font_color: String,
    /// Outline width in pixels
    pub border_width: u32,
    /// Outline color
    pub border_color: String,
    /// Distance from the bottom edge in pixels
    pub margin_bottom: u32,
    /// Explicit font file; when unset ffmpeg picks its default
    pub font_file: Option<String>,
}

impl Default for SubtitleStyle {
    fn default() -> Self {
        Self {
            font_size: 36,
            font_color: "white".to_string(),
            border_width: 2,
            border_color: "black".to_string(),
            margin_bottom: 40,
            font_file: None,
        }
    }
}

/// Text shown over the video for its whole duration, bottom-centered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtitleOverlay {
    pub text: String,
    pub style: SubtitleStyle,
}

impl SubtitleOverlay {
    /// Create an overlay with the default style
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SubtitleStyle::default(),
        }
    }

    /// Replace the style
    #[must_use]
    pub fn with_style(mut self, style: SubtitleStyle) -> Self {
        self.style = style;
        self
    }

    /// Render as an ffmpeg drawtext filter
    #[must_use]
    pub fn to_drawtext(&self) -> String {
        let text = escape_drawtext(&self.text);
        let mut filter = format!(
            "drawtext=text='{text}':\
             fontsize={size}:\
             fontcolor={color}:\
             borderw={borderw}:\
             bordercolor={bordercolor}:\
             x=(w-text_w)/2:y=h-text_h-{margin}",
            size = self.style.font_size,
            color = self.style.font_color,
            borderw = self.style.border_width,
            bordercolor = self.style.border_color,
            margin = self.style.margin_bottom,
        );

        if let Some(ref font) = self.style.font_file {
            let _ = write!(filter, ":fontfile='{}'", escape_drawtext(font));
        }

        filter
    }
}

/// Escape text for use inside a single-quoted drawtext value.
fn escape_drawtext(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(':', "\\:")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
}
