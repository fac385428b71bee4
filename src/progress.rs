//! Staged "scan" feedback printed before each lookup
//!
//! Purely cosmetic: the phases do not correspond to real work, they only
//! give the user something to watch while the request is prepared.

use crate::config::AnimationConfig;
use crate::presenter::{Painter, RULE_WIDTH, Tone};
use std::io::{self, Write};

/// Phase titles, in display order
pub const PHASES: [&str; 5] = [
    "INITIATING SECURE HANDSHAKE",
    "ACCESSING CARRIER DATABASES",
    "QUERYING NETWORK REGISTRY",
    "ANALYZING SUBSCRIBER PATTERNS",
    "COMPILING INTELLIGENCE DATA",
];

/// Spinner frames cycled once per phase
pub const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Plays the scan animation for a target
pub struct ScanAnimation {
    config: AnimationConfig,
    painter: Painter,
}

impl ScanAnimation {
    /// Create an animation with the given timing and colors
    pub fn new(config: AnimationConfig, painter: Painter) -> Self {
        Self { config, painter }
    }

    /// Print the acquisition header, spin through every phase and confirm
    ///
    /// Does nothing when the animation is disabled.
    pub async fn play<W: Write>(&self, out: &mut W, target: &str) -> io::Result<()> {
        if !self.config.enabled {
            return Ok(());
        }

        writeln!(out)?;
        writeln!(
            out,
            "{}",
            self.painter
                .tone(&format!("[WASP] TARGET ACQUIRED: {}", target), Tone::Prompt)
        )?;
        writeln!(out, "{}", self.painter.tone(&"─".repeat(50), Tone::Accent))?;

        let total = PHASES.len();
        for (i, phase) in PHASES.iter().enumerate() {
            let step = i + 1;
            for frame in FRAMES {
                write!(
                    out,
                    "{}\r",
                    self.painter.tone(
                        &format!("{} PHASE {}/{}: {}", frame, step, total, phase),
                        Tone::Accent
                    )
                )?;
                out.flush()?;
                pause(self.config.frame_delay).await;
            }
            writeln!(
                out,
                "{}",
                self.painter.tone(
                    &format!("✓ PHASE {}/{}: {} - COMPLETE", step, total, phase),
                    Tone::Good
                )
            )?;
            pause(self.config.phase_pause).await;
        }

        writeln!(
            out,
            "{}",
            self.painter
                .tone("[WASP] DATA ACQUISITION SUCCESSFUL", Tone::Good)
        )?;
        writeln!(out, "{}", self.painter.tone(&"─".repeat(RULE_WIDTH), Tone::Accent))?;
        Ok(())
    }
}

async fn pause(delay: std::time::Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
