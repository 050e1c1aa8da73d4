//! `yukkurigen` CLI - generate narrated topic videos

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cmd;

#[derive(Parser)]
#[command(name = "yukkurigen")]
#[command(about = "Generate narrated topic videos with a local VOICEVOX server and ffmpeg")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a narrated video for a topic
    Generate {
        /// Topic text, used for both narration and the subtitle
        topic: String,

        /// VOICEVOX speaker style id (see `voices`)
        #[arg(long, default_value_t = 1, env = "VOICE_ID")]
        voice_id: u32,

        /// VOICEVOX server host
        #[arg(long, default_value = "127.0.0.1", env = "VOICEVOX_HOST")]
        host: String,

        /// VOICEVOX server port
        #[arg(long, default_value_t = 50021, env = "VOICEVOX_PORT")]
        port: u16,

        /// Background image, looped for the whole video
        #[arg(long)]
        background: PathBuf,

        /// Character image overlaid bottom-right
        #[arg(long = "char")]
        character: Option<PathBuf>,

        /// Output MP4 path (overwritten if present)
        #[arg(long, default_value = "out/result.mp4")]
        out: PathBuf,

        /// Narration speed scale (e.g. 1.2)
        #[arg(long)]
        speed: Option<f32>,

        /// Narration pitch scale (e.g. 0.15)
        #[arg(long)]
        pitch: Option<f32>,

        /// Skip burning the topic text as a subtitle
        #[arg(long)]
        no_subtitles: bool,

        /// Encode with a slower preset and lower CRF
        #[arg(long)]
        high_quality: bool,
    },

    /// List speaker styles available on the VOICEVOX server
    Voices {
        /// VOICEVOX server host
        #[arg(long, default_value = "127.0.0.1", env = "VOICEVOX_HOST")]
        host: String,

        /// VOICEVOX server port
        #[arg(long, default_value_t = 50021, env = "VOICEVOX_PORT")]
        port: u16,
    },

    /// Check that ffmpeg and the VOICEVOX server are available
    Doctor {
        /// VOICEVOX server host
        #[arg(long, default_value = "127.0.0.1", env = "VOICEVOX_HOST")]
        host: String,

        /// VOICEVOX server port
        #[arg(long, default_value_t = 50021, env = "VOICEVOX_PORT")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    match cli.command {
        Commands::Generate {
            topic,
            voice_id,
            host,
            port,
            background,
            character,
            out,
            speed,
            pitch,
            no_subtitles,
            high_quality,
        } => {
            cmd::cmd_generate(cmd::GenerateOpts {
                topic,
                voice_id,
                host,
                port,
                background,
                character,
                out,
                speed,
                pitch,
                subtitles: !no_subtitles,
                high_quality,
            })
            .await?;
        }
        Commands::Voices { host, port } => {
            cmd::cmd_voices(&host, port).await?;
        }
        Commands::Doctor { host, port } => {
            cmd::cmd_doctor(&host, port).await?;
        }
    }

    Ok(())
}
