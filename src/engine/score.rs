//! Fold check results into counts and truncated percentages.

use serde::{ser::SerializeStruct, Serialize, Serializer};

use super::scan::{CheckResult, Outcome};

/// Immutable pass/fail/warn counts for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub pass: usize,
    pub fail: usize,
    pub warn: usize,
}

impl Tally {
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a CheckResult>) -> Self {
        results
            .into_iter()
            .fold(Self::default(), |tally, result| tally.record(result.outcome))
    }

    fn record(self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::Pass => Self {
                pass: self.pass + 1,
                ..self
            },
            Outcome::Fail => Self {
                fail: self.fail + 1,
                ..self
            },
            Outcome::Warn => Self {
                warn: self.warn + 1,
                ..self
            },
        }
    }

    pub fn total(&self) -> usize {
        self.pass + self.fail + self.warn
    }

    /// `pass * 100 / (pass + fail)`; warnings stay out of the denominator.
    pub fn pass_rate(&self) -> u8 {
        percent(self.pass, self.pass + self.fail)
    }
}

impl Serialize for Tally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Tally", 4)?;
        state.serialize_field("pass", &self.pass)?;
        state.serialize_field("fail", &self.fail)?;
        state.serialize_field("warn", &self.warn)?;
        state.serialize_field("pass_rate", &self.pass_rate())?;
        state.end()
    }
}

/// Integer percentage with truncation. A zero denominator yields 0.
pub fn percent(numerator: usize, denominator: usize) -> u8 {
    if denominator == 0 {
        return 0;
    }
    u8::try_from(numerator.min(denominator) * 100 / denominator).unwrap_or(100)
}
