use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use spinline::{Config, Outcome, Style, style};

#[derive(Debug, Parser)]
#[command(name = "spin", version, about = "Show a spinner, then a success or fail line")]
pub struct Args {
    /// Progress message. Without one, two demo operations run back to back
    pub message: Option<String>,

    /// Message shown next to the success glyph (defaults to the progress message)
    #[arg(long)]
    pub success_message: Option<String>,

    /// Message shown next to the fail glyph (defaults to the progress message)
    #[arg(long)]
    pub fail_message: Option<String>,

    /// How long to spin before finishing
    #[arg(long, default_value_t = 5000)]
    pub duration_ms: u64,

    /// Finish with the fail line instead of the success line
    #[arg(long)]
    pub fail: bool,

    /// Keep the cursor visible while spinning
    #[arg(long)]
    pub no_hide_cursor: bool,

    /// TOML style file (defaults to <config dir>/spinline/style.toml when present)
    #[arg(long)]
    pub style: Option<PathBuf>,

    /// Built-in glyph set: line, dots or arc
    #[arg(long)]
    pub preset: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Log file (defaults to <cache dir>/spinline/spin.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// One spinner to show and how to finish it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub progress: String,
    pub success: String,
    pub fail: String,
    pub outcome: Outcome,
}

impl Job {
    fn demo(progress: &str, outcome: Outcome) -> Self {
        Self {
            progress: progress.to_string(),
            success: progress.to_string(),
            fail: progress.to_string(),
            outcome,
        }
    }
}

impl Args {
    pub fn jobs(&self) -> Vec<Job> {
        let Some(progress) = &self.message else {
            return vec![
                Job::demo("Running operation 1", Outcome::Success),
                Job::demo("Running operation 2", Outcome::Fail),
            ];
        };
        vec![Job {
            progress: progress.clone(),
            success: self.success_message.clone().unwrap_or_else(|| progress.clone()),
            fail: self.fail_message.clone().unwrap_or_else(|| progress.clone()),
            outcome: if self.fail {
                Outcome::Fail
            } else {
                Outcome::Success
            },
        }]
    }

    /// Style file (explicit, else the default path if it exists) with the preset on top.
    pub fn style(&self) -> Result<Style> {
        let path = self
            .style
            .clone()
            .or_else(|| style::default_style_path().filter(|p| p.exists()));
        let mut resolved = match path {
            Some(path) => style::load_style_file(&path)?,
            None => Style::default(),
        };
        if let Some(name) = &self.preset {
            resolved.glyphs = Style::preset(name)?.glyphs;
        }
        Ok(resolved)
    }

    pub fn config(&self, job: &Job, style: &Style) -> Config {
        let config = style.apply(Config::with_messages(
            job.progress.as_str(),
            job.success.as_str(),
            job.fail.as_str(),
        ));
        if self.no_hide_cursor {
            config.hide_cursor(false)
        } else {
            config
        }
    }
}
