//! # Calculator Session
//!
//! Drives one console run over an injected input and output:
//!
//! ```text
//! AwaitCount → (AwaitMeasurement → Compute → Report) × n → Averages → Done
//! ```
//!
//! Out-of-range counts, measurements that break `0 < hb <= ha <= R`, and
//! tokens that are not numbers are all answered with a re-prompt. Only the
//! end of input or an I/O failure ends a session early.
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//! use sphere_core::session::Session;
//! use sphere_core::settings::SessionSettings;
//!
//! let input = Cursor::new("2\n5 4 3\n5 4 3\n");
//! let mut output = Vec::new();
//! let summary = Session::new(input, &mut output, SessionSettings::default())
//!     .unwrap()
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(summary.segment_count, 2);
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.ends_with("Average Surface Area = 109.96 Average Volume = 39.79.\n"));
//! ```

use std::fmt::Display;
use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::calculations::{calculate, Averages, RunningTotals, SegmentInput, SegmentResult};
use crate::errors::{CalcError, CalcResult};
use crate::input::TokenReader;
use crate::report;
use crate::settings::SessionSettings;

/// One processed segment: what was entered and what it produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentRecord {
    pub input: SegmentInput,
    pub result: SegmentResult,
}

/// Everything a completed session computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Accepted segment count
    pub segment_count: u32,

    /// Segments in entry order
    pub segments: Vec<SegmentRecord>,

    /// Unrounded sums over all segments
    pub totals: RunningTotals,

    /// Sums divided by the segment count
    pub averages: Averages,
}

impl SessionSummary {
    pub fn to_json_pretty(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Interactive calculator over any line-based input and writer.
pub struct Session<R, W> {
    input: TokenReader<R>,
    output: W,
    settings: SessionSettings,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session. Fails if `settings` do not validate.
    pub fn new(input: R, output: W, settings: SessionSettings) -> CalcResult<Self> {
        settings.validate()?;
        Ok(Session {
            input: TokenReader::new(input),
            output,
            settings,
        })
    }

    /// Run the whole calculator: count, every segment, then the averages.
    pub fn run(&mut self) -> CalcResult<SessionSummary> {
        tracing::info!("Starting spherical segment session");

        let segment_count = self.read_segment_count()?;
        let mut totals = RunningTotals::new();
        let mut segments = Vec::with_capacity(segment_count as usize);

        for index in 1..=segment_count {
            let input = self.read_measurement(index)?;
            let result = calculate(&input)?;
            tracing::debug!(
                "Segment {}: total area {}, volume {}",
                index,
                result.total_area,
                result.volume
            );
            self.line(report::segment_totals(&result, self.settings.decimals))?;

            totals.add(&result);
            segments.push(SegmentRecord { input, result });
        }

        let averages = totals
            .averages()
            .ok_or_else(|| CalcError::invalid_settings("min_segments", "Session processed no segments"))?;
        self.line(report::AVERAGES_HEADER)?;
        self.line(report::average_totals(&averages, self.settings.decimals))?;

        tracing::info!("Session finished after {} segments", segment_count);
        Ok(SessionSummary {
            segment_count,
            segments,
            totals,
            averages,
        })
    }

    /// Prompt until a count within the configured bounds is entered.
    ///
    /// Out-of-range and non-integer tokens repeat the prompt without any
    /// other message.
    pub fn read_segment_count(&mut self) -> CalcResult<u32> {
        let prompt = report::count_prompt(&self.settings);
        loop {
            self.line(&prompt)?;
            match self.input.next_value::<i64>("segment_count") {
                Ok(n) if self.settings.accepts_count(n) => {
                    tracing::debug!("Accepted segment count {}", n);
                    return u32::try_from(n)
                        .map_err(|_| CalcError::invalid_input("segment_count", n.to_string(), "Count out of range"));
                }
                Ok(n) => tracing::debug!("Rejected segment count {}", n),
                Err(e) if e.is_recoverable() => tracing::debug!("Rejected segment count: {}", e),
                Err(e) => return Err(self.fatal(e)),
            }
        }
    }

    /// Prompt for R, ha and hb until they form a valid segment.
    ///
    /// A rejected attempt prints `Invalid Input.` and asks for all three
    /// values again. A token that is not a number ends the attempt at once,
    /// without the echo line.
    pub fn read_measurement(&mut self, index: u32) -> CalcResult<SegmentInput> {
        loop {
            self.line(report::segment_header(index))?;

            let attempt = self.read_attempt().and_then(|input| {
                self.line(report::entered_data(&input, self.settings.decimals))?;
                input.validate().map(|_| input)
            });

            match attempt {
                Ok(input) => {
                    tracing::debug!("Segment {} accepted: {:?}", index, input);
                    return Ok(input);
                }
                Err(e) if e.is_recoverable() => {
                    tracing::debug!("Segment {} rejected: {}", index, e);
                    self.line(report::INVALID_INPUT)?;
                }
                Err(e) => return Err(self.fatal(e)),
            }
        }
    }

    fn read_attempt(&mut self) -> CalcResult<SegmentInput> {
        self.line(report::RADIUS_PROMPT)?;
        let radius = self.input.next_value("radius")?;
        self.line(report::TOP_HEIGHT_PROMPT)?;
        let top_height = self.input.next_value("top_height")?;
        self.line(report::BOTTOM_HEIGHT_PROMPT)?;
        let bottom_height = self.input.next_value("bottom_height")?;
        Ok(SegmentInput::new(radius, top_height, bottom_height))
    }

    fn line(&mut self, text: impl Display) -> CalcResult<()> {
        writeln!(self.output, "{}", text).map_err(|e| CalcError::io("write output", &e))?;
        self.output.flush().map_err(|e| CalcError::io("flush output", &e))
    }

    fn fatal(&self, err: CalcError) -> CalcError {
        tracing::warn!("Session aborted ({}): {}", err.error_code(), err);
        err
    }
}
