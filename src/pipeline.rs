use std::path::PathBuf;
use std::time::Duration;

use log::{debug, info};
use tokio::time::timeout;

use crate::config::Config;
use crate::error::{CaptionError, TranscriptError};
use crate::{TranscriptEntry, extract_video_id, vtt, ytdlp, youtube};

/// Fetch a transcript for `url`, captions first, yt-dlp subtitles second.
///
/// The two paths produce different shapes on purpose: captions render as
/// timestamped lines, the subtitle fallback as space-joined prose. Each path
/// is attempted at most once; there are no partial results.
pub async fn get_transcript(
    client: &reqwest::Client,
    config: &Config,
    url: &str,
) -> Result<String, TranscriptError> {
    let video_id = extract_video_id(url).ok_or_else(|| TranscriptError::InvalidUrl {
        url: url.to_string(),
    })?;

    let fetch_timeout = Duration::from_secs(config.fetch_timeout_secs());

    let primary = match timeout(
        fetch_timeout,
        youtube::fetch_captions(client, &video_id, config.lang()),
    )
    .await
    {
        Ok(result) => result,
        Err(_) => Err(CaptionError::Timeout(config.fetch_timeout_secs())),
    };

    let cause = match primary {
        Ok(entries) => {
            info!("Caption fetch succeeded for {video_id} ({} entries)", entries.len());
            return Ok(render_timestamped(&entries));
        }
        Err(e) => e,
    };
    debug!("Caption fetch failed for {video_id}: {cause}; falling back to yt-dlp");

    // Per-request scratch dir: concurrent fallbacks never share a subtitle
    // path, and the directory is removed when the request finishes.
    let workdir = match tempfile::tempdir_in(config.work_dir()) {
        Ok(dir) => dir,
        Err(e) => {
            debug!("could not create subtitle scratch dir: {e}");
            return Err(TranscriptError::Unavailable { cause });
        }
    };

    let subtitle = timeout(
        fetch_timeout,
        ytdlp::download_subtitles(url, config.lang(), workdir.path(), config.cookie_file.as_deref()),
    )
    .await
    .ok()
    .flatten();

    let text = finish_fallback(subtitle, cause)?;
    info!("Subtitle fallback succeeded for {video_id}");
    Ok(text)
}

/// Last leg of the fallback: yt-dlp's claimed output either parses to prose
/// or the request fails for good with the caption-path cause attached.
fn finish_fallback(subtitle: Option<PathBuf>, cause: CaptionError) -> Result<String, TranscriptError> {
    match subtitle {
        Some(path) if path.exists() => {
            vtt::parse_file(&path).map_err(|e| TranscriptError::SubtitleFile { path, source: e })
        }
        _ => Err(TranscriptError::Unavailable { cause }),
    }
}

/// Render caption entries as `[H:MM:SS] text` lines
fn render_timestamped(entries: &[TranscriptEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("[{}] {}", format_timestamp(e.start), e.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Start offset as H:MM:SS, truncated to whole seconds, hour not zero-padded
fn format_timestamp(seconds: f64) -> String {
    let total = seconds as u64;
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(start: f64, text: &str) -> TranscriptEntry {
        TranscriptEntry {
            start,
            text: text.to_string(),
        }
    }

    fn caption_failure() -> CaptionError {
        CaptionError::CaptionsUnavailable {
            video_id: "dQw4w9WgXcQ".to_string(),
        }
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "0:00:00");
        assert_eq!(format_timestamp(65.0), "0:01:05");
        assert_eq!(format_timestamp(65.9), "0:01:05");
        assert_eq!(format_timestamp(3661.0), "1:01:01");
        assert_eq!(format_timestamp(36000.0), "10:00:00");
    }

    #[test]
    fn test_render_timestamped() {
        let entries = vec![entry(0.0, "hi"), entry(65.0, "there")];
        assert_eq!(render_timestamped(&entries), "[0:00:00] hi\n[0:01:05] there");
    }

    #[test]
    fn test_render_timestamped_empty() {
        assert_eq!(render_timestamped(&[]), "");
    }

    #[tokio::test]
    async fn test_invalid_url_is_terminal() {
        let client = reqwest::Client::new();
        let config = Config::default();
        let err = get_transcript(&client, &config, "https://example.com/video")
            .await
            .unwrap_err();
        assert!(matches!(err, TranscriptError::InvalidUrl { .. }));
    }

    #[test]
    fn test_fallback_with_subtitle_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subtitle.en.vtt");
        std::fs::write(
            &path,
            "WEBVTT\nKind: captions\nLanguage: en\n\n00:00:00.000 --> 00:00:02.000\nhello there\n",
        )
        .unwrap();

        let text = finish_fallback(Some(path), caption_failure()).unwrap();
        assert_eq!(text, "hello there");
    }

    #[test]
    fn test_fallback_without_file_is_unavailable() {
        let err = finish_fallback(None, caption_failure()).unwrap_err();
        assert!(matches!(err, TranscriptError::Unavailable { .. }));
    }

    #[test]
    fn test_fallback_with_missing_path_is_unavailable() {
        let err = finish_fallback(
            Some(PathBuf::from("/nonexistent/subtitle.en.vtt")),
            caption_failure(),
        )
        .unwrap_err();
        assert!(matches!(err, TranscriptError::Unavailable { .. }));
    }
}
