use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ScanError;

pub mod brace_scanner;
pub mod file_source;

/// Opening/closing delimiter pair counted by the scanner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum BracePair {
    /// `{` and `}`.
    #[default]
    Curly,
    /// `(` and `)`.
    Paren,
    /// `[` and `]`.
    Square,
    /// `<` and `>`.
    Angle,
}

impl BracePair {
    /// Returns `(open, close)`.
    pub fn delimiters(self) -> (char, char) {
        match self {
            Self::Curly => ('{', '}'),
            Self::Paren => ('(', ')'),
            Self::Square => ('[', ']'),
            Self::Angle => ('<', '>'),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Curly => "curly",
            Self::Paren => "paren",
            Self::Square => "square",
            Self::Angle => "angle",
        }
    }
}

impl fmt::Display for BracePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BracePair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "curly" => Ok(Self::Curly),
            "paren" => Ok(Self::Paren),
            "square" => Ok(Self::Square),
            "angle" => Ok(Self::Angle),
            other => Err(format!(
                "unknown brace pair `{other}` (expected curly, paren, square or angle)"
            )),
        }
    }
}

impl TryFrom<String> for BracePair {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Ordered, immutable lines of the text being scanned.
///
/// Line `n` (1-based) of the input file is `lines()[n - 1]`; terminators
/// are not included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceText {
    lines: Vec<String>,
}

impl SourceText {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Split raw content on `\n`, `\r\n` and lone `\r`.
    ///
    /// A terminator at the very end does not start another line, so empty
    /// content has no lines at all.
    pub fn parse(content: &str) -> Self {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut chars = content.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\n' => lines.push(std::mem::take(&mut current)),
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    lines.push(std::mem::take(&mut current));
                }
                _ => current.push(c),
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The single report produced by one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ScanOutcome {
    /// A closing delimiter drove the balance below zero.
    NegativeBalance {
        /// 1-based line number.
        line_number: usize,
        /// The offending line with surrounding whitespace removed.
        line_text: String,
    },
    /// Every line was scanned without the balance going negative.
    FinalBalance { value: i64 },
}

impl ScanOutcome {
    pub fn is_negative(&self) -> bool {
        matches!(self, Self::NegativeBalance { .. })
    }
}

impl fmt::Display for ScanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeBalance {
                line_number,
                line_text,
            } => write!(f, "Negative balance at line {line_number}: {line_text}"),
            Self::FinalBalance { value } => write!(f, "Final balance: {value}"),
        }
    }
}

/// Abstraction over where the scanned text comes from (files, in-memory buffers).
pub trait SourceRepository {
    /// Load the full text once.
    fn load_source(&self) -> Result<SourceText, ScanError>;
}

impl SourceRepository for SourceText {
    fn load_source(&self) -> Result<SourceText, ScanError> {
        Ok(self.clone())
    }
}

/// Primary scanning interface producing exactly one outcome per call.
pub trait Scanner {
    fn scan(&self) -> Result<ScanOutcome, ScanError>;
}
