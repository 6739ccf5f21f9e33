use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "phishguard-server",
    version,
    about = "Phishing and AI-text risk scoring service"
)]
pub(crate) struct Args {
    #[arg(long, default_value = "0.0.0.0:8000")]
    pub(crate) listen_addr: String,
    /// TOML rules file; the built-in keyword tables are used when omitted.
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
    #[arg(long, default_value = "static/index.html")]
    pub(crate) index_file: PathBuf,
    /// Directory for daily-rolling JSON logs.
    #[arg(long)]
    pub(crate) log_dir: Option<PathBuf>,
    #[arg(long, default_value_t = false)]
    pub(crate) log_to_stderr: bool,
}
