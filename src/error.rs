use std::path::PathBuf;

/// Failure of the caption (primary) path.
///
/// The pipeline only branches on success vs failure here, but the variant is
/// preserved so the fallback decision can be logged with its real cause.
#[derive(Debug, thiserror::Error)]
pub enum CaptionError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not extract InnerTube API key from watch page")]
    MissingApiKey,

    #[error("no captions available for video {video_id}")]
    CaptionsUnavailable { video_id: String },

    #[error("no caption track matches language '{lang}' and none is translatable")]
    NoSuitableTrack { lang: String },

    #[error("error parsing caption XML: {0}")]
    Xml(String),

    #[error("caption fetch timed out after {0}s")]
    Timeout(u64),
}

/// Terminal pipeline failure surfaced to the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    /// No video ID could be resolved; the fallback is never attempted.
    #[error("could not extract video ID from URL: {url}")]
    InvalidUrl { url: String },

    /// yt-dlp claimed success but the subtitle file could not be read.
    #[error("subtitle file {path} could not be read: {source}")]
    SubtitleFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Both paths exhausted. Carries the caption-path cause for diagnostics.
    #[error("transcript could not be retrieved (captions: {cause})")]
    Unavailable {
        #[source]
        cause: CaptionError,
    },
}
