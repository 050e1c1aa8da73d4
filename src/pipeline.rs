//! Topic -> narration -> video, strictly sequential
//!
//! One synthesis request and one encoder run per invocation. Everything is
//! validated up front so no network or process call happens for inputs that
//! can never succeed.

use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{info, warn};

use crate::audio;
use crate::compose::{ComposeError, EncodeJob, SubtitleOverlay, VideoEncoder};
use crate::speech::{self, SpeechError, SpeechSynthesizer};

/// Pipeline errors
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("topic must not be empty")]
    EmptyTopic,

    #[error("asset not found: {0}")]
    MissingAsset(PathBuf),

    #[error(transparent)]
    Speech(#[from] SpeechError),

    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Inputs for one generation run
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Topic text, used for both narration and the subtitle
    pub topic: String,
    /// Speaker style id on the synthesis server
    pub voice_id: u32,
    /// Background image path
    pub background: PathBuf,
    /// Character image path (optional)
    pub character: Option<PathBuf>,
    /// Output MP4 path, overwritten if present
    pub output: PathBuf,
    /// Burn the topic text as a subtitle
    pub subtitles: bool,
}

/// What a successful run produced
#[derive(Debug)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub audio_bytes: usize,
    /// Narration length; `None` when the WAV header could not be read
    pub audio_secs: Option<f64>,
}

/// The whole workflow behind two seams: a speech synthesizer and a video
/// encoder. Both are trait objects so tests can substitute stubs.
pub struct Pipeline {
    synthesizer: Box<dyn SpeechSynthesizer>,
    encoder: Box<dyn VideoEncoder>,
}

impl Pipeline {
    #[must_use]
    pub fn new(synthesizer: Box<dyn SpeechSynthesizer>, encoder: Box<dyn VideoEncoder>) -> Self {
        Self {
            synthesizer,
            encoder,
        }
    }

    /// Run the full topic -> audio -> video sequence.
    pub async fn run(&self, request: &GenerateRequest) -> Result<GenerateReport, PipelineError> {
        let topic = request.topic.trim();
        if topic.is_empty() {
            return Err(PipelineError::EmptyTopic);
        }

        if !request.background.exists() {
            return Err(PipelineError::MissingAsset(request.background.clone()));
        }
        if let Some(ref character) = request.character {
            if !character.exists() {
                return Err(PipelineError::MissingAsset(character.clone()));
            }
        }

        let voices = self.synthesizer.list_voices().await?;
        if !speech::contains_voice(&voices, request.voice_id) {
            return Err(SpeechError::UnknownVoice(request.voice_id).into());
        }

        info!(voice_id = request.voice_id, "synthesizing narration");
        let wav = self.synthesizer.synthesize(topic, request.voice_id).await?;
        if wav.is_empty() {
            return Err(SpeechError::EmptyAudio.into());
        }

        let mut audio_file = tempfile::Builder::new()
            .prefix("yukkuri")
            .suffix(".wav")
            .tempfile()?;
        audio_file.write_all(&wav)?;
        audio_file.flush()?;

        let audio_secs = match audio::wav_duration_secs(audio_file.path()) {
            Ok(secs) => {
                info!(secs, "narration duration");
                Some(secs)
            }
            Err(e) => {
                warn!(error = %e, "could not read narration duration");
                None
            }
        };

        let job = EncodeJob {
            background: request.background.clone(),
            character: request.character.clone(),
            audio: audio_file.path().to_path_buf(),
            subtitle: request.subtitles.then(|| SubtitleOverlay::new(topic)),
            output: request.output.clone(),
        };
        self.encoder.encode(&job).await?;

        Ok(GenerateReport {
            output: request.output.clone(),
            audio_bytes: wav.len(),
            audio_secs,
        })
    }
}
