use anyhow::Result;

use yukkurigen::speech::{SpeechSynthesizer, VoicevoxClient, VoicevoxConfig};

pub async fn cmd_voices(host: &str, port: u16) -> Result<()> {
    let client = VoicevoxClient::new(VoicevoxConfig::default().with_server(host, port))?;
    let voices = client.list_voices().await?;

    println!("🎤 {} speakers available:\n", voices.len());
    for voice in &voices {
        println!("{}", voice.name);
        for style in &voice.styles {
            println!("   {:>4}  {}", style.id, style.name);
        }
    }

    Ok(())
}
