//! HTTP client for the VOICEVOX engine
//!
//! Two-step synthesis, matching the engine's API:
//! - `POST /audio_query?text=..&speaker=..` returns a query document
//! - `POST /synthesis?speaker=..` with that document returns WAV bytes
//!
//! Transient failures (connect errors, HTTP 500/502/504) are retried a few
//! times with exponential backoff; everything else is fatal on first sight.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{Result, SpeechError, SpeechSynthesizer, Voice};

/// Connection settings for a local VOICEVOX engine
#[derive(Debug, Clone)]
pub struct VoicevoxConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Total attempts per request (1 = no retry)
    pub max_attempts: u32,
    /// Base backoff between attempts (doubled each retry)
    pub backoff: Duration,
    /// Override the engine's default speaking speed
    pub speed_scale: Option<f32>,
    /// Override the engine's default pitch
    pub pitch_scale: Option<f32>,
}

impl Default for VoicevoxConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 50021,
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
            max_attempts: 3,
            backoff: Duration::from_millis(300),
            speed_scale: None,
            pitch_scale: None,
        }
    }
}

impl VoicevoxConfig {
    /// Set the server address
    #[must_use]
    pub fn with_server(mut self, host: &str, port: u16) -> Self {
        self.host = host.to_string();
        self.port = port;
        self
    }
}

/// An audio query as returned by `/audio_query`.
///
/// Only the scales a caller may want to adjust are typed; every other field
/// the engine returned is carried through untouched so the document can be
/// posted back to `/synthesis` without loss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioQuery {
    #[serde(rename = "speedScale")]
    pub speed_scale: f32,
    #[serde(rename = "pitchScale")]
    pub pitch_scale: f32,
    #[serde(rename = "volumeScale")]
    pub volume_scale: f32,
    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

/// reqwest-backed VOICEVOX client
pub struct VoicevoxClient {
    config: VoicevoxConfig,
    client: Client,
    base: String,
}

impl VoicevoxClient {
    /// Create a client for the configured server
    pub fn new(config: VoicevoxConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;

        let base = format!("http://{}:{}", config.host, config.port);

        Ok(Self {
            config,
            client,
            base,
        })
    }

    fn retryable(status: StatusCode) -> bool {
        matches!(status.as_u16(), 500 | 502 | 504)
    }

    /// Send a request, retrying connect failures and transient server errors.
    async fn send_with_retry<F>(&self, mut build: F) -> Result<Response>
    where
        F: FnMut() -> RequestBuilder + Send,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match build().send().await {
                Ok(resp) if resp.status().is_success() => return Ok(resp),
                Ok(resp)
                    if Self::retryable(resp.status()) && attempt < self.config.max_attempts =>
                {
                    warn!(status = %resp.status(), attempt, "server error, retrying");
                }
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    let body = resp.text().await.unwrap_or_default();
                    return Err(SpeechError::Http { status, body });
                }
                Err(e) if e.is_connect() || e.is_timeout() => {
                    if attempt >= self.config.max_attempts {
                        return Err(SpeechError::Connect(e.to_string()));
                    }
                    warn!(error = %e, attempt, "connect failed, retrying");
                }
                Err(e) => return Err(e.into()),
            }

            tokio::time::sleep(self.config.backoff * 2u32.saturating_pow(attempt - 1)).await;
        }
    }

    /// `POST /audio_query` — build a query document for the text
    pub async fn audio_query(&self, text: &str, speaker: u32) -> Result<AudioQuery> {
        let url = format!("{}/audio_query", self.base);
        let speaker_param = speaker.to_string();
        debug!(%url, speaker, "requesting audio query");

        let resp = self
            .send_with_retry(|| {
                self.client
                    .post(&url)
                    .query(&[("text", text), ("speaker", speaker_param.as_str())])
            })
            .await?;

        Ok(resp.json().await?)
    }

    /// `POST /synthesis` — render a query document to WAV bytes
    pub async fn synthesis(&self, query: &AudioQuery, speaker: u32) -> Result<Vec<u8>> {
        let url = format!("{}/synthesis", self.base);
        let speaker_param = speaker.to_string();
        debug!(%url, speaker, "requesting synthesis");

        let resp = self
            .send_with_retry(|| {
                self.client
                    .post(&url)
                    .query(&[("speaker", speaker_param.as_str())])
                    .json(query)
            })
            .await?;

        Ok(resp.bytes().await?.to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for VoicevoxClient {
    async fn list_voices(&self) -> Result<Vec<Voice>> {
        let url = format!("{}/speakers", self.base);
        debug!(%url, "listing speakers");

        let resp = self.send_with_retry(|| self.client.get(&url)).await?;
        Ok(resp.json().await?)
    }

    async fn synthesize(&self, text: &str, voice_id: u32) -> Result<Vec<u8>> {
        let mut query = self.audio_query(text, voice_id).await?;

        if let Some(speed) = self.config.speed_scale {
            query.speed_scale = speed;
        }
        if let Some(pitch) = self.config.pitch_scale {
            query.pitch_scale = pitch;
        }

        let wav = self.synthesis(&query, voice_id).await?;
        if wav.is_empty() {
            return Err(SpeechError::EmptyAudio);
        }

        info!(bytes = wav.len(), voice_id, "synthesized narration");
        Ok(wav)
    }
}
