use std::io;
use std::path::Path;

use log::debug;
use regex::Regex;

/// Read a WebVTT file and reduce it to plain prose.
///
/// An unreadable file is an error; everything else is best-effort cleanup.
pub fn parse_file(path: &Path) -> io::Result<String> {
    let content = std::fs::read_to_string(path)?;
    debug!("Cleaning subtitle file {} ({} bytes)", path.display(), content.len());
    Ok(clean(&content))
}

/// Strip WebVTT structure down to the spoken text.
///
/// Header, metadata, cue-timing and positioning lines are dropped, inline
/// `<c>`/`<00:00:01.000>`-style tags are removed, and lines repeated by
/// YouTube's rolling auto-captions are collapsed when adjacent. Tuned to the
/// dialect yt-dlp writes for YouTube, not a general VTT parser.
pub fn clean(content: &str) -> String {
    let tag_re = Regex::new(r"<[^>]*>").unwrap();

    let mut lines: Vec<String> = Vec::new();
    let mut prev = String::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty()
            || line.starts_with("WEBVTT")
            || line.starts_with("Kind:")
            || line.starts_with("Language:")
            || is_annotation(line)
            || line.contains("-->")
            || line.contains("align:")
        {
            continue;
        }
        let cleaned = tag_re.replace_all(line, "").trim().to_string();
        if cleaned.is_empty() {
            continue;
        }
        // Adjacent repeats only; a later re-occurrence of the same text is
        // real speech and stays.
        if cleaned != prev {
            prev = cleaned.clone();
            lines.push(cleaned);
        }
    }

    lines.join(" ")
}

/// Line led by a non-speech annotation such as `[Music]` or `[Applause]`
fn is_annotation(line: &str) -> bool {
    line.starts_with('[') && line.contains(']')
}
