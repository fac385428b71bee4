use clap::Parser;
use number_lookup::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "number-lookup",
    version,
    about = "WASP - Advanced Mobile Intelligence Tool"
)]
pub struct Cli {
    /// Target mobile number
    pub number: Option<String>,

    /// File containing target numbers, one per line
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Lookup service URL (overrides the configuration file)
    #[arg(long, env = "NUMBER_LOOKUP_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Skip the scan animation
    #[arg(long, default_value_t = false)]
    pub no_animation: bool,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

/// Which loop the session runs
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Batch(PathBuf),
    Single(String),
    Interactive,
}

impl Cli {
    /// A batch file takes precedence over a positional number; an empty
    /// number counts as absent
    pub fn mode(&self) -> Mode {
        if let Some(file) = &self.file {
            Mode::Batch(file.clone())
        } else if let Some(number) = self.number.as_ref().filter(|n| !n.is_empty()) {
            Mode::Single(number.clone())
        } else {
            Mode::Interactive
        }
    }

    /// Apply command-line overrides on top of loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if self.no_animation {
            config.animation.enabled = false;
        }
    }
}
