//! Video composition via an external ffmpeg process
//!
//! Combines a looped background image, an optional character overlay, the
//! narration audio, and a burned-in subtitle into one MP4. The
//! [`VideoEncoder`] trait is the seam so the pipeline can be tested without
//! ffmpeg installed.

pub mod encoder;
pub mod subtitle;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

pub use encoder::{EncoderConfig, FfmpegEncoder};
pub use subtitle::{SubtitleOverlay, SubtitleStyle};

/// Composition errors
#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("asset not found: {0}")]
    MissingAsset(PathBuf),

    #[error("ffmpeg not found on PATH")]
    FfmpegNotFound,

    #[error("ffmpeg exited with {status}: {stderr}")]
    FfmpegFailed {
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ComposeError>;

/// One encoding job: static layers plus narration to a single MP4.
#[derive(Debug, Clone)]
pub struct EncodeJob {
    /// Background image, looped for the whole video
    pub background: PathBuf,
    /// Character image overlaid bottom-right (optional)
    pub character: Option<PathBuf>,
    /// Narration WAV
    pub audio: PathBuf,
    /// Subtitle burned over the full duration (optional)
    pub subtitle: Option<SubtitleOverlay>,
    /// Output MP4 path, overwritten if present
    pub output: PathBuf,
}

/// Seam over "assets + audio -> video file".
#[async_trait]
pub trait VideoEncoder: Send + Sync {
    async fn encode(&self, job: &EncodeJob) -> Result<()>;
}
