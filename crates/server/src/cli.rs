use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(name = "exercise tracker")]
pub struct Cli {
    /// Directory the landing page is served from
    #[clap(long, env, default_value = "assets")]
    pub assets_dir: PathBuf,
    /// SQLite path or `file:` URI
    #[clap(long, env, default_value = "exercise.sqlite")]
    pub database_url: String,
    #[clap(long, env, default_value = "3000")]
    pub port: u16,
    #[clap(long, env, default_value = "0.0.0.0")]
    pub bind_addr: String,
    /// Only allow this origin. Any origin is allowed if unset
    #[clap(long, env)]
    pub cors_origin: Option<String>,
    #[clap(long, env, default_value = "16384")]
    pub max_body_bytes: usize,
}
