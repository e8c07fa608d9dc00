//! File-level masking run.
//!
//! Streams the input file through the pipeline one line at a time and
//! appends each processed line to the output file in input order. The
//! output is truncated up front, so a rerun overwrites cleanly.

use crate::config::RunConfig;
use crate::error::{CoreError, Result};
use cm_redact::Pipeline;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use tracing::{debug, info};

/// Counters for one completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Lines read from the input.
    pub lines_total: u64,

    /// Lines in which a secret was masked.
    pub lines_masked: u64,
}

/// Mask the configured input file into the configured output file.
pub fn obfuscate_file(config: &RunConfig) -> Result<RunSummary> {
    let pipeline = Pipeline::new(config.policy.clone());

    let input = File::open(&config.input).map_err(|source| CoreError::Input {
        path: config.input.clone(),
        source,
    })?;
    let reader = BufReader::new(input);

    // create() truncates an existing destination.
    let output = File::create(&config.output).map_err(|source| CoreError::Output {
        path: config.output.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(output);

    let mut summary = RunSummary::default();
    for line in reader.lines() {
        let line = line.map_err(|source| CoreError::Input {
            path: config.input.clone(),
            source,
        })?;
        summary.lines_total += 1;

        let masked = pipeline.process_line(&line);
        if masked.was_masked {
            summary.lines_masked += 1;
            if let Some(kind) = masked.kind {
                debug!(line = summary.lines_total, %kind, "masked secret");
            }
        }

        writeln!(writer, "{}", masked.output).map_err(|source| CoreError::Output {
            path: config.output.clone(),
            source,
        })?;
    }

    writer.flush().map_err(|source| CoreError::Output {
        path: config.output.clone(),
        source,
    })?;

    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        lines = summary.lines_total,
        masked = summary.lines_masked,
        "masking complete"
    );
    Ok(summary)
}
