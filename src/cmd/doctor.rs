use anyhow::Result;

use yukkurigen::compose::FfmpegEncoder;
use yukkurigen::speech::{SpeechSynthesizer, VoicevoxClient, VoicevoxConfig};

pub async fn cmd_doctor(host: &str, port: u16) -> Result<()> {
    println!("🧪 yukkurigen environment check\n");

    print!("1️⃣  ffmpeg on PATH... ");
    match which::which("ffmpeg") {
        Ok(path) => {
            if FfmpegEncoder::new().check_available().await {
                println!("✅ {}", path.display());
            } else {
                println!("⚠️  found at {} but `-version` failed", path.display());
            }
        }
        Err(_) => println!("❌ not found (install ffmpeg and ensure it's on PATH)"),
    }

    print!("2️⃣  VOICEVOX server (http://{host}:{port})... ");
    let client = VoicevoxClient::new(VoicevoxConfig::default().with_server(host, port))?;
    match client.list_voices().await {
        Ok(voices) => {
            let styles: usize = voices.iter().map(|v| v.styles.len()).sum();
            println!("✅ {} speakers, {styles} styles", voices.len());
        }
        Err(e) => println!("❌ {e}"),
    }

    println!("\n✨ Check complete");
    Ok(())
}
