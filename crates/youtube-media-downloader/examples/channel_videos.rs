use tracing_subscriber::EnvFilter;
use youtube_media_downloader::{ChannelVideosClient, ChannelVideosRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("RAPIDAPI_KEY")?;
    let channel_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "UCuAXFkgsw1L7xaCfnd5JJOw".to_string());

    let client = ChannelVideosClient::new(api_key, [])?;

    println!("Listing videos of channel {}...\n", channel_id);

    let videos = client
        .get_channel_videos(&channel_id, ChannelVideosRequest::default())
        .await?;

    for (i, video) in videos.iter().enumerate() {
        let live = if video.is_live_now { " [LIVE]" } else { "" };
        println!(
            "  {}. {}{} ({}, {}, {})",
            i + 1,
            video.title,
            live,
            video.length_text,
            video.view_count_text,
            video.published_time_text
        );
    }

    println!("\n{} videos in total.", videos.len());

    Ok(())
}
