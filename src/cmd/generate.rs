use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use yukkurigen::compose::{EncoderConfig, FfmpegEncoder};
use yukkurigen::pipeline::{GenerateRequest, Pipeline};
use yukkurigen::speech::{VoicevoxClient, VoicevoxConfig};

/// Everything the `generate` subcommand accepts.
pub struct GenerateOpts {
    pub topic: String,
    pub voice_id: u32,
    pub host: String,
    pub port: u16,
    pub background: PathBuf,
    pub character: Option<PathBuf>,
    pub out: PathBuf,
    pub speed: Option<f32>,
    pub pitch: Option<f32>,
    pub subtitles: bool,
    pub high_quality: bool,
}

pub async fn cmd_generate(opts: GenerateOpts) -> Result<()> {
    eprintln!("🎬 Generating: {}", opts.topic);
    eprintln!(
        "   Voice: {} @ http://{}:{}",
        opts.voice_id, opts.host, opts.port
    );

    let config = VoicevoxConfig {
        speed_scale: opts.speed,
        pitch_scale: opts.pitch,
        ..VoicevoxConfig::default()
    }
    .with_server(&opts.host, opts.port);
    let synthesizer = VoicevoxClient::new(config)?;

    let encoder = if opts.high_quality {
        FfmpegEncoder::with_config(EncoderConfig::high_quality())
    } else {
        FfmpegEncoder::new()
    };

    let pipeline = Pipeline::new(Box::new(synthesizer), Box::new(encoder));
    let request = GenerateRequest {
        topic: opts.topic,
        voice_id: opts.voice_id,
        background: opts.background,
        character: opts.character,
        output: opts.out,
        subtitles: opts.subtitles,
    };

    let start = Instant::now();
    let report = pipeline.run(&request).await?;
    let elapsed = start.elapsed();

    eprintln!("\n✅ Generated in {:.1}s", elapsed.as_secs_f64());
    eprintln!("   Output: {}", report.output.display());
    if let Some(secs) = report.audio_secs {
        eprintln!("   Narration: {secs:.2}s");
    }
    eprintln!("   Audio: {} bytes", report.audio_bytes);

    Ok(())
}
