//! scriptmap - static classifier for JavaScript script references.
//!
//! This library turns a listing of script URLs or `<script>` tag lines into
//! classified records by:
//! - Extracting the script URL from each line
//! - Normalizing it into scheme, host and path
//! - Deciding first-party vs third-party against a primary domain
//! - Matching the host and path against an ordered vendor rule table
//!
//! Nothing is fetched or executed; classification is a pure function of the
//! input text and the primary domain.
//!
//! # Example
//!
//! ```
//! use scriptmap::{Category, Pipeline};
//!
//! let pipeline = Pipeline::new("example.com");
//! let records = pipeline.process_lines([
//!     "https://www.googletagmanager.com/gtm.js?id=GTM-XXXX",
//!     "<script src=\"https://static.example.com/app.js\"></script>",
//! ]);
//!
//! assert_eq!(records[0].category, Category::Analytics);
//! assert!(records[1].first_party);
//! ```

pub mod classify;
pub mod config;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod types;

pub use classify::{classify_script, is_first_party, Classification};
pub use config::Config;
pub use parser::{normalize_url, LineExtractor, ParsedUrl};
pub use pipeline::Pipeline;
pub use report::{ConsoleOutput, ReportPaths, ScanSummary};
pub use types::{Category, Result, ScriptMapError, ScriptRecord};
