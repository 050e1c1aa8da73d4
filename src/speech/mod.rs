//! Speech synthesis against a local VOICEVOX-compatible server.
//!
//! The server converts text plus a speaker style id into WAV bytes. The
//! [`SpeechSynthesizer`] trait is the seam between the pipeline and the real
//! HTTP client so tests can run without a server.

pub mod voicevox;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use voicevox::{AudioQuery, VoicevoxClient, VoicevoxConfig};

/// Speech synthesis errors
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("speech server unreachable: {0}")]
    Connect(String),

    #[error("speech server returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("voice id {0} is not known to the server")]
    UnknownVoice(u32),

    #[error("server returned an empty audio payload")]
    EmptyAudio,

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, SpeechError>;

/// One selectable style of a speaker, e.g. "あまあま".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceStyle {
    pub name: String,
    pub id: u32,
}

/// A speaker with its styles, as returned by the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    #[serde(default)]
    pub speaker_uuid: Option<String>,
    pub styles: Vec<VoiceStyle>,
}

/// Seam over "text + voice id -> audio bytes".
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// List the speakers (and their style ids) the server offers.
    async fn list_voices(&self) -> Result<Vec<Voice>>;

    /// Synthesize `text` with the given style id, returning WAV bytes.
    async fn synthesize(&self, text: &str, voice_id: u32) -> Result<Vec<u8>>;
}

/// Whether any speaker in `voices` carries the style id.
#[must_use]
pub fn contains_voice(voices: &[Voice], id: u32) -> bool {
    voices
        .iter()
        .any(|v| v.styles.iter().any(|style| style.id == id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_voices() -> Vec<Voice> {
        vec![
            Voice {
                name: "四国めたん".to_string(),
                speaker_uuid: None,
                styles: vec![
                    VoiceStyle {
                        name: "ノーマル".to_string(),
                        id: 2,
                    },
                    VoiceStyle {
                        name: "あまあま".to_string(),
                        id: 0,
                    },
                ],
            },
            Voice {
                name: "ずんだもん".to_string(),
                speaker_uuid: Some("388f246b".to_string()),
                styles: vec![VoiceStyle {
                    name: "ノーマル".to_string(),
                    id: 3,
                }],
            },
        ]
    }

    #[test]
    fn contains_voice_finds_style_across_speakers() {
        let voices = sample_voices();
        assert!(contains_voice(&voices, 0));
        assert!(contains_voice(&voices, 2));
        assert!(contains_voice(&voices, 3));
    }

    #[test]
    fn contains_voice_rejects_unknown_id() {
        let voices = sample_voices();
        assert!(!contains_voice(&voices, 99));
        assert!(!contains_voice(&[], 0));
    }

    #[test]
    fn voice_deserializes_listing_payload() {
        let json = r#"[{"name":"ずんだもん","speaker_uuid":"388f246b","styles":[{"name":"ノーマル","id":3}],"version":"0.14.0"}]"#;
        let voices: Vec<Voice> = serde_json::from_str(json).unwrap();
        assert_eq!(voices.len(), 1);
        assert_eq!(voices[0].styles[0].id, 3);
    }
}
