pub mod config;
pub mod error;
pub mod pipeline;
pub mod server;
pub mod vtt;
pub mod youtube;
pub mod ytdlp;

/// A single timed caption entry from the caption track, start offset in seconds
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub start: f64,
    pub text: String,
}

/// Extract the video ID from a YouTube URL.
///
/// Recognized shapes: `youtube.com/watch?v=ID` (with or without `www.`) and
/// `youtu.be/ID`. Anything else, including input that does not parse as a
/// URL at all, yields `None` rather than an error.
pub fn extract_video_id(input: &str) -> Option<String> {
    let parsed = url::Url::parse(input.trim()).ok()?;
    match parsed.host_str()? {
        "www.youtube.com" | "youtube.com" => parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned()),
        "youtu.be" => {
            let id = parsed.path().trim_start_matches('/');
            (!id.is_empty()).then(|| id.to_string())
        }
        _ => None,
    }
}
