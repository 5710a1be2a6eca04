use tracing::{debug, instrument, trace};

use super::{BracePair, ScanOutcome, Scanner, SourceRepository, SourceText};
use crate::error::ScanError;

/// Scanner that tracks the running balance of one delimiter pair over a source.
pub struct BraceScanner<R: SourceRepository> {
    source_repo: R,
    pair: BracePair,
}

impl<R: SourceRepository> BraceScanner<R> {
    pub fn new(source_repo: R) -> Self {
        Self::with_pair(source_repo, BracePair::default())
    }

    pub fn with_pair(source_repo: R, pair: BracePair) -> Self {
        Self { source_repo, pair }
    }

    pub fn pair(&self) -> BracePair {
        self.pair
    }

    /// Scan already-loaded lines, stopping at the first negative balance.
    pub fn scan_source(&self, source: &SourceText) -> ScanOutcome {
        let (open, close) = self.pair.delimiters();
        let mut balance: i64 = 0;

        for (idx, line) in source.lines().iter().enumerate() {
            for c in line.chars() {
                if c == open {
                    balance += 1;
                } else if c == close {
                    balance -= 1;
                    if balance < 0 {
                        trace!(line = idx + 1, "balance went negative");
                        return ScanOutcome::NegativeBalance {
                            line_number: idx + 1,
                            line_text: trim_line(line).to_string(),
                        };
                    }
                }
            }
            trace!(line = idx + 1, balance, "line scanned");
        }

        ScanOutcome::FinalBalance { value: balance }
    }
}

/// Strip surrounding whitespace, counting the ASCII separators
/// U+001C..=U+001F as whitespace too.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

impl<R: SourceRepository> Scanner for BraceScanner<R> {
    #[instrument(skip(self), fields(pair = %self.pair))]
    fn scan(&self) -> Result<ScanOutcome, ScanError> {
        let source = self.source_repo.load_source()?;
        let outcome = self.scan_source(&source);
        debug!(%outcome, "scan finished");
        Ok(outcome)
    }
}
