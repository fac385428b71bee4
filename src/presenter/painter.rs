//! Terminal coloring for reports and status messages

use super::{Line, Report};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Semantic color of a message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Errors and rejections
    Alert,
    /// Notices and section headings
    Notice,
    /// Frames and headers
    Frame,
    /// Labels and in-progress steps
    Accent,
    /// Values and completed steps
    Good,
    /// Prompts and target announcements
    Prompt,
}

/// Writes text with or without ANSI colors
#[derive(Clone, Copy, Debug)]
pub struct Painter {
    color: bool,
}

impl Painter {
    /// Create a painter; `color` false yields plain text
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// A painter that never emits escape codes
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Apply `tone` to `text`
    pub fn tone(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_string();
        }
        match tone {
            Tone::Alert => text.bright_red().to_string(),
            Tone::Notice => text.yellow().to_string(),
            Tone::Frame => text.bright_cyan().to_string(),
            Tone::Accent => text.bright_magenta().to_string(),
            Tone::Good => text.bright_green().to_string(),
            Tone::Prompt => text.bright_yellow().to_string(),
        }
    }

    /// Colored text of a single report line
    pub fn line(&self, line: &Line) -> String {
        match line {
            Line::Heading(_) => self.tone(&line.text(), Tone::Frame),
            Line::Rule | Line::Label(_) => self.tone(&line.text(), Tone::Accent),
            Line::Failure(_) => self.tone(&line.text(), Tone::Alert),
            Line::DiagnosticsHeading
            | Line::Diagnostic(_)
            | Line::NoData(_)
            | Line::AuxiliaryHeading => self.tone(&line.text(), Tone::Notice),
            Line::Value(value) => format!("  {}", self.tone(value, Tone::Good)),
            Line::Auxiliary { label, value } => format!(
                "  {} {}",
                self.tone(&format!("{}:", label), Tone::Accent),
                self.tone(value, Tone::Good)
            ),
            Line::Complete(_) => self.tone(&line.text(), Tone::Good),
            Line::Blank => String::new(),
        }
    }

    /// Write a whole report, one line at a time
    pub fn write_report<W: Write>(&self, out: &mut W, report: &Report) -> io::Result<()> {
        for line in report.lines() {
            writeln!(out, "{}", self.line(line))?;
        }
        Ok(())
    }
}
