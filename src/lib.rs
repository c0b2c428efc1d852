//! Demographic Data Analyzer
//!
//! Computes a fixed set of summary statistics over the adult census
//! table: race counts, average age of men, education and income shares,
//! minimum working hours, the highest-earning country and the most common
//! high-earning occupation in India.
//!
//! ```no_run
//! use demographic_analyzer::analysis::calculate_demographic_data;
//! use std::path::Path;
//!
//! let report = calculate_demographic_data(Path::new("adult.data.csv"), true)?;
//! println!("{}", report.percentage_bachelors);
//! # Ok::<(), demographic_analyzer::error::DataError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod report;

pub use analysis::{analyze, analyze_file, calculate_demographic_data, run_analysis, Analysis};
pub use data::{load_dataset, parse_dataset, LoadOptions};
pub use error::DataError;
pub use models::{AnalysisSource, Dataset, DemographicReport, Record};
