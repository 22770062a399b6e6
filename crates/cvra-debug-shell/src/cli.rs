//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::Parser;

/// CVRA robot debug shell.
#[derive(Parser, Debug, Clone)]
#[command(name = "cvra-shell")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Address of the debug service gRPC server.
    #[arg(short, long, default_value = "localhost:50051")]
    pub server: String,

    /// Command history file.
    #[arg(long = "history_file", value_name = "PATH", default_value = "~/.cvra_history")]
    pub history_file: String,
}

impl Cli {
    /// The history file path with a leading tilde expanded to the home
    /// directory. An unexpandable tilde is kept literally.
    #[must_use]
    pub fn history_path(&self) -> PathBuf {
        expand_tilde(&self.history_file)
    }
}

fn expand_tilde(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}
