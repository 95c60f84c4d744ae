use std::path::{Path, PathBuf};
use std::process::Stdio;

use log::debug;
use tokio::process::Command;

/// Ask yt-dlp for manual or auto-generated subtitles, written into `workdir`.
///
/// Returns the expected subtitle path when the invocation succeeds. Every
/// failure mode (yt-dlp missing, nonzero exit, spawn error) collapses to
/// `None`: the caller treats it as "no subtitles available" and must still
/// check that the returned path exists, since yt-dlp exits 0 even when the
/// video has no subtitles in the requested language.
pub async fn download_subtitles(
    url: &str,
    lang: &str,
    workdir: &Path,
    cookie_file: Option<&Path>,
) -> Option<PathBuf> {
    let subtitle_path = expected_path(workdir, lang);
    let mut cmd = subtitle_command(url, lang, workdir, cookie_file);

    debug!("Requesting subtitles via yt-dlp: {url}");

    let output = match cmd.output().await {
        Ok(output) => output,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("yt-dlp not found on PATH, skipping subtitle fallback");
            return None;
        }
        Err(e) => {
            debug!("failed to run yt-dlp: {e}");
            return None;
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!("yt-dlp exited with {}: {}", output.status, stderr.trim());
        return None;
    }

    Some(subtitle_path)
}

fn subtitle_command(url: &str, lang: &str, workdir: &Path, cookie_file: Option<&Path>) -> Command {
    let mut cmd = Command::new("yt-dlp");
    cmd.args([
        "--skip-download",
        "--write-subs",
        "--write-auto-subs",
        "--sub-langs",
        lang,
        "--sub-format",
        "vtt",
        "--no-playlist",
        "-o",
    ])
    .arg(workdir.join("subtitle.%(ext)s"));

    if let Some(cookies) = cookie_file {
        cmd.arg("--cookies").arg(cookies);
    }

    cmd.arg(url)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        // The caller bounds this invocation with a timeout that drops the
        // output future; the child must not outlive it and keep writing into
        // a scratch dir that is about to be removed.
        .kill_on_drop(true);
    cmd
}

/// Where yt-dlp will have written the subtitle file for `lang`
pub fn expected_path(workdir: &Path, lang: &str) -> PathBuf {
    workdir.join(format!("subtitle.{lang}.vtt"))
}

/// First line of `yt-dlp --version`, if the tool is on PATH
pub async fn version() -> Option<String> {
    Command::new("yt-dlp")
        .arg("--version")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .ok()
        .filter(|o| o.status.success())
        .map(|o| {
            String::from_utf8_lossy(&o.stdout)
                .trim()
                .lines()
                .next()
                .unwrap_or("")
                .to_string()
        })
}
