use clap::Parser;
use std::path::PathBuf;

use yttd::config::Config;

#[derive(Parser)]
#[command(name = "yttd", about = "YouTube transcript HTTP service", version)]
pub struct Cli {
    /// Address to listen on
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Target caption/subtitle language
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Netscape-format cookie jar passed to yt-dlp
    #[arg(long)]
    pub cookies: Option<PathBuf>,

    /// Directory for per-request subtitle scratch space
    #[arg(long)]
    pub work_dir: Option<PathBuf>,

    /// Per-path fetch timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Overlay CLI flags onto the config file; flags win
    pub fn apply(self, mut config: Config) -> Config {
        config.host = self.host.or(config.host);
        config.port = self.port.or(config.port);
        config.lang = self.lang.or(config.lang);
        config.cookie_file = self.cookies.or(config.cookie_file);
        config.work_dir = self.work_dir.or(config.work_dir);
        config.fetch_timeout_secs = self.timeout.or(config.fetch_timeout_secs);
        config
    }
}
