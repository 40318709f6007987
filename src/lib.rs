//! Codecritic - static code quality scorer.
//!
//! Codecritic scores JavaScript/React and Python/FastAPI source files on
//! a 0-100 scale. Six weighted categories contribute to the total: naming,
//! modularity, comments, formatting, reusability, and best practices. Each
//! category starts at its maximum and loses points as heuristic rules
//! trigger; the rules also produce a prioritized recommendation list.
//!
//! # Architecture
//!
//! - `source`: language selection and line-indexed source text
//! - `syntax`: optional tree-sitter parse for syntax validation
//! - `analyzer`: per-language rule tables and the scoring pipeline
//! - `score`: category weights and result assembly
//! - `report`: output formatting (pretty, JSON)
//! - `cli`: command-line interface
//!
//! # Adding a New Language
//!
//! Define a `RuleSet` in a new module under `src/analyzer/` and wire it
//! into `RuleSet::for_language`; the pipeline itself is language-agnostic.

pub mod analyzer;
pub mod cli;
pub mod report;
pub mod score;
pub mod source;
pub mod syntax;

pub use analyzer::{analyze, Finding, Rule, RuleSet};
pub use report::FileReport;
pub use score::{AnalysisResult, Breakdown, Category, CategoryScore, MAX_RECOMMENDATIONS};
pub use source::{LanguageKind, SourceUnit, UnsupportedExtension, SUPPORTED_EXTENSIONS};
