//! Line pipeline.
//!
//! Drives classify → extract → mask over lines and substitutes the masked
//! secret back into the original line. Every step that can miss degrades to
//! pass-through; processing a line is total and never reorders or buffers
//! beyond the line in hand.

use crate::extract::extract;
use crate::mask::Masker;
use crate::pattern::{classify, PatternKind};
use crate::policy::MaskPolicy;
use serde::{Deserialize, Serialize};

/// Result of processing one line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskedLine {
    /// The output line, masked or passed through verbatim.
    pub output: String,

    /// The pattern the line was classified as, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<PatternKind>,

    /// Whether the output differs from the input.
    pub was_masked: bool,
}

impl MaskedLine {
    /// A line emitted unchanged.
    pub fn passthrough(line: &str, kind: Option<PatternKind>) -> Self {
        Self {
            output: line.to_string(),
            kind,
            was_masked: false,
        }
    }
}

/// The line-by-line masking pipeline.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    masker: Masker,
}

impl Pipeline {
    /// Create a pipeline with the given mask policy.
    pub fn new(policy: MaskPolicy) -> Self {
        Self {
            masker: Masker::new(policy),
        }
    }

    /// Process a single line.
    ///
    /// Substitution replaces the first exact-case occurrence of the
    /// extracted secret. Characters outside that span are byte-identical to
    /// the input; a line already masked by a previous run comes back
    /// unchanged.
    pub fn process_line(&self, line: &str) -> MaskedLine {
        let Some(kind) = classify(line) else {
            return MaskedLine::passthrough(line, None);
        };

        let Some(secret) = extract(line, kind) else {
            return MaskedLine::passthrough(line, Some(kind));
        };
        if secret.is_empty() {
            return MaskedLine::passthrough(line, Some(kind));
        }

        let masked = self.masker.mask(&secret);
        if masked == secret {
            return MaskedLine::passthrough(line, Some(kind));
        }

        MaskedLine {
            output: line.replacen(&secret, &masked, 1),
            kind: Some(kind),
            was_masked: true,
        }
    }

    /// Process a sequence of lines in order.
    ///
    /// Order-preserving; holds no state across lines.
    pub fn process<'a, I>(&'a self, lines: I) -> impl Iterator<Item = MaskedLine> + 'a
    where
        I: IntoIterator<Item = String>,
        I::IntoIter: 'a,
    {
        lines.into_iter().map(move |line| self.process_line(&line))
    }
}
