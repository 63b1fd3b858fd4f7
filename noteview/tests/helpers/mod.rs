use anyhow::{Context, Result};
use clap::Parser;
use noteview::cli::args::Args;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated config location plus a runner that captures command output
#[allow(dead_code)]
pub struct TestEnv {
    temp_dir: TempDir,
    pub config_path: PathBuf,
}

/// Output of one command run, including the notification lines
#[allow(dead_code)]
pub struct RunOutput {
    pub result: Result<()>,
    pub stdout: String,
}

#[allow(dead_code)]
impl RunOutput {
    pub fn expect_ok(self) -> String {
        if let Err(err) = &self.result {
            panic!("command failed: {err:#}\noutput:\n{}", self.stdout);
        }
        self.stdout
    }
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let config_path = temp_dir.path().join("config.toml");
        Ok(Self {
            temp_dir,
            config_path,
        })
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Run noteview with delays disabled against this environment's config
    pub fn run(&self, args: &[&str]) -> RunOutput {
        let config = self.config_path.to_string_lossy().into_owned();
        self.run_with_config(&config, args)
    }

    /// Same as `run` but with an explicit config path
    pub fn run_with_config(&self, config: &str, args: &[&str]) -> RunOutput {
        let mut argv = vec!["noteview", "--no-delay", "-c", config];
        argv.extend_from_slice(args);

        let mut out = Vec::new();
        let result = Args::try_parse_from(argv)
            .map_err(anyhow::Error::from)
            .and_then(|parsed| noteview::execute(parsed, &mut out));

        RunOutput {
            result,
            stdout: String::from_utf8_lossy(&out).into_owned(),
        }
    }
}

/// Titles from the mock data set, handy for ordering checks
#[allow(dead_code)]
pub mod titles {
    pub const KICKOFF: &str = "Meeting Notes - Project Kickoff";
    pub const NEURAL_NETWORKS: &str = "Research on Neural Networks";
    pub const ATOMIC_HABITS: &str = "Book Notes: Atomic Habits";
    pub const JAPAN_TRIP: &str = "Travel Itinerary - Japan 2023";
    pub const WEEKLY_PLANNING: &str = "Weekly Planning - April 2023";
}
