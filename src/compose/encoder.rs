//! ffmpeg invocation: still images + narration -> MP4
//!
//! The command is built as an argv vector and spawned directly, never through
//! a shell. Stderr is captured so encoder failures surface with context.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::fs;
use tokio::process::Command;
use tracing::{debug, info};

use super::{ComposeError, EncodeJob, Result, VideoEncoder};

/// Configuration for the ffmpeg encoder
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Path to ffmpeg binary
    pub ffmpeg_path: String,
    /// Video codec
    pub video_codec: String,
    /// Audio codec
    pub audio_codec: String,
    /// Audio bitrate (e.g., "192k")
    pub audio_bitrate: String,
    /// Additional ffmpeg output arguments
    pub extra_output_args: Vec<String>,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: which::which("ffmpeg").map_or_else(
                |_| "ffmpeg".to_string(),
                |p| p.to_string_lossy().to_string(),
            ),
            video_codec: "libx264".to_string(),
            audio_codec: "aac".to_string(),
            audio_bitrate: "192k".to_string(),
            extra_output_args: Vec::new(),
        }
    }
}

impl EncoderConfig {
    /// Create config for high-quality file output
    #[must_use]
    pub fn high_quality() -> Self {
        Self {
            extra_output_args: vec![
                "-preset".to_string(),
                "slow".to_string(),
                "-crf".to_string(),
                "18".to_string(),
            ],
            ..Default::default()
        }
    }
}

/// ffmpeg-based video encoder
pub struct FfmpegEncoder {
    config: EncoderConfig,
}

impl FfmpegEncoder {
    /// Create an encoder with the default config
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: EncoderConfig::default(),
        }
    }

    /// Create an encoder with a custom config
    #[must_use]
    pub fn with_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Check if ffmpeg is available
    pub async fn check_available(&self) -> bool {
        Command::new(&self.config.ffmpeg_path)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Build the ffmpeg argv for a job.
    ///
    /// Shape: loop the background forever, overlay the character bottom-right,
    /// burn the subtitle, end the video with the audio (`-shortest`).
    fn build_args(&self, job: &EncodeJob) -> Vec<String> {
        let mut args: Vec<String> = ["-hide_banner", "-loglevel", "warning", "-y"]
            .iter()
            .map(std::string::ToString::to_string)
            .collect();

        args.push("-loop".to_string());
        args.push("1".to_string());
        args.push("-i".to_string());
        args.push(job.background.to_string_lossy().to_string());

        if let Some(ref character) = job.character {
            args.push("-i".to_string());
            args.push(character.to_string_lossy().to_string());
        }

        args.push("-i".to_string());
        args.push(job.audio.to_string_lossy().to_string());

        // Linear filter chain: overlay (if any) -> drawtext (if any) -> yuv420p
        let mut chain = Vec::new();
        if job.character.is_some() {
            chain.push("[0:v][1:v]overlay=W-w-10:H-h-10".to_string());
        }
        if let Some(ref subtitle) = job.subtitle {
            chain.push(subtitle.to_drawtext());
        }
        chain.push("format=yuv420p".to_string());

        if job.character.is_some() {
            args.push("-filter_complex".to_string());
        } else {
            args.push("-vf".to_string());
        }
        args.push(chain.join(","));

        args.push("-c:v".to_string());
        args.push(self.config.video_codec.clone());
        args.push("-c:a".to_string());
        args.push(self.config.audio_codec.clone());
        args.push("-b:a".to_string());
        args.push(self.config.audio_bitrate.clone());
        args.extend(self.config.extra_output_args.clone());
        args.push("-shortest".to_string());
        args.push(job.output.to_string_lossy().to_string());

        args
    }
}

impl Default for FfmpegEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VideoEncoder for FfmpegEncoder {
    async fn encode(&self, job: &EncodeJob) -> Result<()> {
        for asset in [Some(&job.background), job.character.as_ref(), Some(&job.audio)]
            .into_iter()
            .flatten()
        {
            if !asset.exists() {
                return Err(ComposeError::MissingAsset(asset.clone()));
            }
        }

        if let Some(parent) = job.output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let args = self.build_args(job);
        debug!(?args, "ffmpeg args");
        info!("running ffmpeg");

        let output = Command::new(&self.config.ffmpeg_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ComposeError::FfmpegNotFound
                } else {
                    ComposeError::Io(e)
                }
            })?;

        if !output.status.success() {
            // Never leave a half-written MP4 behind
            if job.output.exists() {
                let _ = fs::remove_file(&job.output).await;
            }
            return Err(ComposeError::FfmpegFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        info!(output = %job.output.display(), "wrote video");
        Ok(())
    }
}
