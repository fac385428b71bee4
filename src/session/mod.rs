//! Single, batch and interactive lookup modes.
//!
//! A [`Session`] owns the lookup service and the output sink and runs the
//! validate → fetch → render pipeline once per target. The three modes are
//! thin loops over [`Session::process_target`].

use crate::config::Config;
use crate::error::{Error, Result, RejectionReason};
use crate::fetcher::LookupService;
use crate::presenter::{self, Painter, RULE_WIDTH, Tone};
use crate::progress::ScanAnimation;
use crate::types::LookupResult;
use crate::validator::validate;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

/// Words that end interactive mode (compared case-insensitively)
pub const QUIT_COMMANDS: [&str; 3] = ["quit", "exit", "q"];

/// Whether an interactive input line asks to leave
#[must_use]
pub fn is_quit_command(input: &str) -> bool {
    let input = input.trim();
    QUIT_COMMANDS
        .iter()
        .any(|cmd| input.eq_ignore_ascii_case(cmd))
}

/// Candidate numbers from a batch file: trimmed, blank lines dropped
#[must_use]
pub fn parse_targets(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// What happened to one target
#[derive(Clone, Debug, PartialEq)]
pub enum TargetOutcome {
    /// Refused by validation; no request was made
    Rejected(RejectionReason),
    /// Looked up and rendered
    Completed(LookupResult),
}

impl TargetOutcome {
    /// Validated and the lookup returned a payload
    pub fn is_success(&self) -> bool {
        matches!(self, TargetOutcome::Completed(result) if result.is_success())
    }
}

/// Totals for a batch run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Non-blank lines in the file
    pub total: usize,
    /// Targets that validated and came back with a payload
    pub succeeded: usize,
}

/// Runs lookups against a service and writes everything to `out`
pub struct Session<S, W> {
    service: S,
    out: W,
    painter: Painter,
    animation: ScanAnimation,
    batch_delay: Duration,
}

impl<S: LookupService, W: Write> Session<S, W> {
    /// Create a session using the animation and batch pacing from `config`
    pub fn new(service: S, out: W, painter: Painter, config: &Config) -> Self {
        Self {
            service,
            out,
            painter,
            animation: ScanAnimation::new(config.animation.clone(), painter),
            batch_delay: config.batch_delay,
        }
    }

    /// The lookup service
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Consume the session, returning the output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Print a line in the given tone
    pub fn say(&mut self, text: &str, tone: Tone) -> Result<()> {
        writeln!(self.out, "{}", self.painter.tone(text, tone))?;
        Ok(())
    }

    /// Validate, look up and render one raw input
    pub async fn process_target(&mut self, raw: &str) -> Result<TargetOutcome> {
        let number = match validate(raw) {
            Ok(number) => number,
            Err(reason) => {
                debug!(input = raw, reason = %reason, "target rejected");
                self.say(&format!("[TARGET REJECTED] {}", reason), Tone::Alert)?;
                return Ok(TargetOutcome::Rejected(reason));
            }
        };

        self.animation.play(&mut self.out, number.as_str()).await?;
        let result = self.service.lookup(&number).await;
        info!(number = %number, success = result.is_success(), "lookup finished");

        writeln!(self.out)?;
        let report = presenter::render(number.as_str(), &result);
        self.painter.write_report(&mut self.out, &report)?;
        self.out.flush()?;

        Ok(TargetOutcome::Completed(result))
    }

    /// Look up a single number given on the command line
    pub async fn run_single(&mut self, raw: &str) -> Result<TargetOutcome> {
        self.process_target(raw).await
    }

    /// Process every non-blank line of `path`, pausing between targets
    ///
    /// # Errors
    /// Returns [`Error::FileNotFound`] or [`Error::FileRead`] if the file
    /// cannot be read; nothing is looked up in that case.
    pub async fn run_batch(&mut self, path: &Path) -> Result<BatchSummary> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound(path.to_path_buf())
            } else {
                Error::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let targets = parse_targets(&content);
        if targets.is_empty() {
            self.say(
                &format!("[NO TARGETS] FILE EMPTY: {}", path.display()),
                Tone::Alert,
            )?;
            return Ok(BatchSummary::default());
        }

        let total = targets.len();
        info!(path = %path.display(), total, "starting batch");
        self.say(
            &format!("[BATCH PROCESSING] {} TARGETS FROM: {}", total, path.display()),
            Tone::Notice,
        )?;

        let mut succeeded = 0;
        for (i, raw) in targets.iter().enumerate() {
            let position = i + 1;
            writeln!(self.out)?;
            self.say(&"═".repeat(RULE_WIDTH), Tone::Frame)?;
            self.say(&format!("[TARGET {}/{}] {}", position, total, raw), Tone::Notice)?;

            if self.process_target(raw).await?.is_success() {
                succeeded += 1;
            }

            if position < total && !self.batch_delay.is_zero() {
                tokio::time::sleep(self.batch_delay).await;
            }
        }

        writeln!(self.out)?;
        self.say(
            &format!("[BATCH COMPLETE] {}/{} SUCCESSFUL", succeeded, total),
            Tone::Good,
        )?;

        Ok(BatchSummary { total, succeeded })
    }

    /// Prompt for numbers until a quit command or end of input
    ///
    /// Returns how many non-empty, non-quit lines were processed.
    pub async fn run_interactive<R>(&mut self, input: R) -> Result<usize>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut processed = 0;

        loop {
            writeln!(self.out)?;
            write!(
                self.out,
                "{}",
                self.painter
                    .tone("[WASP] ENTER TARGET NUMBER (QUIT TO EXIT): ", Tone::Prompt)
            )?;
            self.out.flush()?;

            let Some(line) = lines.next_line().await? else {
                debug!("input closed, leaving interactive mode");
                writeln!(self.out)?;
                break;
            };

            let entry = line.trim();
            if is_quit_command(entry) {
                break;
            }
            if entry.is_empty() {
                self.say("[INPUT REQUIRED] ENTER VALID TARGET", Tone::Notice)?;
                continue;
            }

            self.process_target(entry).await?;
            processed += 1;
        }

        Ok(processed)
    }
}
