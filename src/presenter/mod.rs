//! Turns a [`LookupResult`] into display lines.
//!
//! Rendering is split in two: [`render`] builds a [`Report`] (plain data, no
//! terminal codes), and [`Painter`] writes that report to a sink with or
//! without color. Only the completion line depends on the clock, and
//! [`render_at`] takes that time explicitly.

mod painter;

pub use painter::{Painter, Tone};

use crate::types::{
    ADDRESS_KEY, ADDRESS_SEPARATOR, FIELD_MAPPING, LookupResult, Payload, auxiliary_label,
    display_value,
};
use chrono::{Local, NaiveTime};
use serde_json::Value;
use tracing::debug;

/// Suggestions printed under every failure
pub const DIAGNOSTICS: [&str; 4] = [
    "VERIFY TARGET NUMBER VALIDITY",
    "CHECK NETWORK CONNECTIVITY",
    "SERVER MAY BE TEMPORARILY OFFLINE",
    "RETRY AFTER 60 SECONDS",
];

/// Width of the horizontal rules framing a result
pub const RULE_WIDTH: usize = 55;

/// One line of rendered output
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    /// Boxed "TARGET ANALYSIS" header naming the target
    Heading(String),
    /// Horizontal separator
    Rule,
    /// Failure reason
    Failure(String),
    /// Start of the diagnostics block
    DiagnosticsHeading,
    /// One diagnostic suggestion
    Diagnostic(&'static str),
    /// Success without anything to show
    NoData(String),
    /// Label of a known field
    Label(&'static str),
    /// Indented value under a label
    Value(String),
    /// Empty spacer line
    Blank,
    /// Start of the auxiliary section
    AuxiliaryHeading,
    /// One auxiliary field
    Auxiliary {
        /// Label derived from the key
        label: String,
        /// Displayed value
        value: String,
    },
    /// Completion marker with wall-clock time
    Complete(String),
}

impl Line {
    /// Text of this line without any color codes
    pub fn text(&self) -> String {
        match self {
            Line::Heading(target) => heading_box(target),
            Line::Rule => "─".repeat(RULE_WIDTH),
            Line::Failure(reason) => format!("[SYSTEM FAILURE] {}", reason),
            Line::DiagnosticsHeading => "[DIAGNOSTICS]".to_string(),
            Line::Diagnostic(hint) => format!("• {}", hint),
            Line::NoData(target) => format!("[NO DATA] TARGET YIELDED NO RESULTS: {}", target),
            Line::Label(label) => format!("[{}]", label),
            Line::Value(value) => format!("  {}", value),
            Line::Blank => String::new(),
            Line::AuxiliaryHeading => "[AUXILIARY DATA]".to_string(),
            Line::Auxiliary { label, value } => format!("  {}: {}", label, value),
            Line::Complete(time) => format!("[OPERATION COMPLETE] {}", time),
        }
    }

    /// Whether this line carries the wall-clock timestamp
    pub fn is_timestamp(&self) -> bool {
        matches!(self, Line::Complete(_))
    }
}

fn heading_box(target: &str) -> String {
    let title = format!("TARGET ANALYSIS: {}", target);
    let inner = title.chars().count().max(RULE_WIDTH - 1) + 2;
    let pad = inner - title.chars().count();
    let left = pad / 2;
    let right = pad - left;
    format!(
        "┌{bar}┐\n│{}{}{}│\n└{bar}┘",
        " ".repeat(left),
        title,
        " ".repeat(right),
        bar = "─".repeat(inner),
    )
}

/// Rendered output for one lookup
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<Line>,
}

impl Report {
    /// All lines in output order
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Lines excluding the timestamp, for comparing two renderings
    pub fn content(&self) -> Vec<&Line> {
        self.lines.iter().filter(|l| !l.is_timestamp()).collect()
    }

    /// Plain text of the whole report, one line per entry
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.text());
            out.push('\n');
        }
        out
    }

    fn push(&mut self, line: Line) {
        self.lines.push(line);
    }
}

/// Render a lookup result, stamping completion with the current local time
pub fn render(target: &str, result: &LookupResult) -> Report {
    render_at(target, result, Local::now().time())
}

/// Render a lookup result with an explicit completion time
pub fn render_at(target: &str, result: &LookupResult, at: NaiveTime) -> Report {
    let mut report = Report::default();
    report.push(Line::Heading(target.to_string()));
    report.push(Line::Blank);

    match result {
        LookupResult::Failure(reason) => {
            report.push(Line::Failure(reason.clone()));
            report.push(Line::Blank);
            report.push(Line::DiagnosticsHeading);
            for hint in DIAGNOSTICS {
                report.push(Line::Diagnostic(hint));
            }
        }
        LookupResult::Success(payload) if payload.has_no_data() => {
            report.push(Line::NoData(target.to_string()));
        }
        LookupResult::Success(payload) => {
            report.push(Line::Rule);
            push_known_fields(&mut report, payload);
            push_auxiliary_fields(&mut report, payload);
            report.push(Line::Rule);
            report.push(Line::Complete(at.format("%H:%M:%S").to_string()));
        }
    }

    report
}

fn push_known_fields(report: &mut Report, payload: &Payload) {
    for (key, label) in FIELD_MAPPING {
        let Some(value) = payload.truthy(key) else {
            continue;
        };
        if value.as_f64() == Some(0.0) {
            debug!(field = key, "numeric zero shown as a present value");
        }

        report.push(Line::Label(label));
        match value {
            Value::String(address) if key == ADDRESS_KEY => {
                for segment in address.split(ADDRESS_SEPARATOR) {
                    report.push(Line::Value(segment.to_string()));
                }
            }
            other => report.push(Line::Value(display_value(other))),
        }
        report.push(Line::Blank);
    }
}

fn push_auxiliary_fields(report: &mut Report, payload: &Payload) {
    let mut auxiliary = payload.auxiliary().peekable();
    if auxiliary.peek().is_none() {
        return;
    }

    report.push(Line::AuxiliaryHeading);
    for (key, value) in auxiliary {
        if value.is_null() {
            continue;
        }
        report.push(Line::Auxiliary {
            label: auxiliary_label(key),
            value: display_value(value),
        });
    }
    report.push(Line::Blank);
}
