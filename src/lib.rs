//! `yukkurigen` - topic in, narrated MP4 out
//!
//! # Features
//!
//! - **Speech**: narration synthesized by a locally running VOICEVOX server
//! - **Composition**: background image + optional character overlay + burned
//!   subtitle, muxed with the narration by ffmpeg
//! - **Seams**: both external dependencies sit behind traits
//!   ([`SpeechSynthesizer`], [`VideoEncoder`]) so the pipeline is testable
//!   without a server or ffmpeg
//!
//! # Example
//!
//! ```rust,no_run
//! use yukkurigen::compose::FfmpegEncoder;
//! use yukkurigen::pipeline::{GenerateRequest, Pipeline};
//! use yukkurigen::speech::{VoicevoxClient, VoicevoxConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let synthesizer = VoicevoxClient::new(VoicevoxConfig::default())?;
//!     let pipeline = Pipeline::new(Box::new(synthesizer), Box::new(FfmpegEncoder::new()));
//!
//!     let request = GenerateRequest {
//!         topic: "今日のゆっくり解説".to_string(),
//!         voice_id: 1,
//!         background: "assets/background.png".into(),
//!         character: Some("assets/char.png".into()),
//!         output: "out/result.mp4".into(),
//!         subtitles: true,
//!     };
//!     let report = pipeline.run(&request).await?;
//!     println!("wrote {}", report.output.display());
//!     Ok(())
//! }
//! ```

pub mod audio;
pub mod compose;
pub mod pipeline;
pub mod speech;

pub use compose::{EncodeJob, EncoderConfig, FfmpegEncoder, SubtitleOverlay, VideoEncoder};
pub use pipeline::{GenerateReport, GenerateRequest, Pipeline, PipelineError};
pub use speech::{SpeechSynthesizer, Voice, VoicevoxClient, VoicevoxConfig};

/// Version of yukkurigen
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
