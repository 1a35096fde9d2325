//! Output for the `cluescan` binary.
//!
//! `text` is meant for a terminal: the clue, a caret line under every
//! reference, then one line per reference. `json` writes one object per clue
//! (JSON Lines) for piping into other tools.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::core::{ClueAnalysis, ClueSegment};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub show_enumeration: bool,
}

/// Writes one analyzed clue in the requested format.
pub fn write_analysis<W: Write>(
    out: &mut W,
    analysis: &ClueAnalysis<'_>,
    options: RenderOptions,
) -> io::Result<()> {
    match options.format {
        OutputFormat::Text => write_text(out, analysis, options.show_enumeration),
        OutputFormat::Json => write_json(out, analysis, options.show_enumeration),
    }
}

fn write_text<W: Write>(
    out: &mut W,
    analysis: &ClueAnalysis<'_>,
    show_enumeration: bool,
) -> io::Result<()> {
    writeln!(out, "{}", analysis.clue)?;
    if !analysis.references.is_empty() {
        writeln!(out, "{}", underline(&analysis.segments()))?;
    }
    for reference in &analysis.references {
        writeln!(
            out,
            "  {} {}  [{}, {})",
            reference.label_number, reference.direction, reference.start, reference.end
        )?;
    }
    if show_enumeration && let Some(enumeration) = analysis.enumeration {
        writeln!(out, "  enumeration: {enumeration}")?;
    }
    Ok(())
}

fn write_json<W: Write>(
    out: &mut W,
    analysis: &ClueAnalysis<'_>,
    show_enumeration: bool,
) -> io::Result<()> {
    let line = if show_enumeration {
        serde_json::to_string(analysis)
    } else {
        serde_json::to_string(&ClueAnalysis {
            enumeration: None,
            ..analysis.clone()
        })
    }
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(out, "{line}")
}

/// Caret line aligned under reference segments by terminal display width.
pub fn underline(segments: &[ClueSegment<'_>]) -> String {
    let mut line = String::new();
    for segment in segments {
        let (fill, text) = match segment {
            ClueSegment::Text(text) => (' ', *text),
            ClueSegment::Reference { text, .. } => ('^', *text),
        };
        line.extend(std::iter::repeat_n(fill, text.width()));
    }
    line.trim_end().to_string()
}
