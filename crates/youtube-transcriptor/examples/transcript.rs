use tracing_subscriber::EnvFilter;
use youtube_transcriptor::{TranscriptClient, TranscriptRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("RAPIDAPI_KEY")?;
    let mut args = std::env::args().skip(1);
    let video_id = args.next().unwrap_or_else(|| "dQw4w9WgXcQ".to_string());
    let lang = args.next().unwrap_or_default();

    let client = TranscriptClient::new(api_key, [])?;
    let transcript = client
        .get_transcript(&video_id, TranscriptRequest::default().with_lang(lang))
        .await?;

    println!("{} ({}s)", transcript.title, transcript.length_in_seconds);
    println!("Available languages: {}\n", transcript.available_langs.join(", "));

    for segment in &transcript.segments {
        println!("[{:>7.2} - {:>7.2}] {}", segment.start, segment.end(), segment.subtitle);
    }

    Ok(())
}
