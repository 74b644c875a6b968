use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    about = "Headless harness that drives the adventure session runtime",
    version
)]
pub struct Args {
    /// Optional JSON session file to read/write while playing
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Discard saved progress and reseed the session documents before booting
    #[arg(long)]
    pub reset: bool,

    /// Run a built-in walkthrough after boot (conejo, zorro, foca)
    #[arg(long, value_name = "SLUG")]
    pub demo: Option<String>,

    /// Path to a JSON command script to replay against the session
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Path to write the session event log as JSON
    #[arg(long)]
    pub event_log_json: Option<PathBuf>,

    /// Path to write the final scene view as JSON
    #[arg(long)]
    pub scene_json: Option<PathBuf>,

    /// Path to write the final session state as JSON
    #[arg(long)]
    pub state_json: Option<PathBuf>,
}

pub fn parse() -> Result<Args> {
    let args = Args::parse();
    args.validate()
}

impl Args {
    fn validate(self) -> Result<Args> {
        if self.demo.is_some() && self.script.is_some() {
            bail!("--demo cannot be combined with --script");
        }
        Ok(self)
    }
}
