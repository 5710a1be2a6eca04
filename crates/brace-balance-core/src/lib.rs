pub mod error;
pub mod report;
pub mod scanner;
pub mod settings;

pub use error::ScanError;
pub use report::{render_report, OutputFormat};
pub use scanner::{
    brace_scanner::BraceScanner, file_source::FileSource, BracePair, ScanOutcome, Scanner,
    SourceRepository, SourceText,
};
pub use settings::{ScanSettings, SettingsOverrides};
