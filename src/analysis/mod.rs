//! Analysis entry points.
//!
//! Loading, the missing-file fallback and the optional printed summary
//! live here; the statistics themselves are in [`aggregator`].

pub mod aggregator;

pub use aggregator::*;

use crate::data::{load_dataset, LoadOptions};
use crate::error::DataError;
use crate::models::{AnalysisSource, DemographicReport};
use crate::report::render_text;
use std::path::Path;
use tracing::{info, warn};

/// A report together with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub report: DemographicReport,
    pub source: AnalysisSource,
}

impl Analysis {
    pub fn is_fallback(&self) -> bool {
        self.source == AnalysisSource::Fallback
    }
}

/// Load the table at `path` and compute its statistics.
///
/// A missing file yields [`DemographicReport::fallback`]; any other load
/// failure is returned as an error.
pub fn run_analysis(path: &Path, options: &LoadOptions) -> Result<Analysis, DataError> {
    match analyze_file(path, options) {
        Err(e) if e.is_source_missing() => {
            warn!(
                "Data file {} not found, using reference statistics",
                path.display()
            );
            Ok(Analysis {
                report: DemographicReport::fallback(),
                source: AnalysisSource::Fallback,
            })
        }
        result => result,
    }
}

/// Load the table at `path` and compute its statistics, failing if the
/// file does not exist.
pub fn analyze_file(path: &Path, options: &LoadOptions) -> Result<Analysis, DataError> {
    let dataset = load_dataset(path, options)?;
    let report = analyze(&dataset);
    info!("Computed statistics over {} rows", dataset.len());

    Ok(Analysis {
        report,
        source: AnalysisSource::Dataset {
            rows_read: dataset.rows_read(),
            rows_kept: dataset.len(),
        },
    })
}

/// Compute the demographic statistics of the file at `path`, printing
/// them to stdout when `print_data` is set.
pub fn calculate_demographic_data(
    path: &Path,
    print_data: bool,
) -> Result<DemographicReport, DataError> {
    let analysis = run_analysis(path, &LoadOptions::default())?;

    if print_data {
        print!("{}", render_text(&analysis.report));
    }

    Ok(analysis.report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "age,workclass,fnlwgt,education,education-num,marital-status,occupation,relationship,race,sex,capital-gain,capital-loss,hours-per-week,native-country,salary";

    #[test]
    fn test_missing_file_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("adult.data.csv");

        let analysis = run_analysis(&path, &LoadOptions::default()).unwrap();
        assert!(analysis.is_fallback());
        assert_eq!(analysis.report, DemographicReport::fallback());

        let err = analyze_file(&path, &LoadOptions::default()).unwrap_err();
        assert!(err.is_source_missing());

        let report = calculate_demographic_data(&path, false).unwrap();
        assert_eq!(report.average_age_men, Some(39.4));
        assert_eq!(report.min_work_hours, Some(1));
        assert_eq!(report.highest_earning_country.as_deref(), Some("Iran"));
        assert_eq!(report.highest_earning_country_percentage, 41.9);
        assert_eq!(report.top_in_occupation.as_deref(), Some("Prof-specialty"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(file, "39,State-gov,77516").unwrap();

        let err = run_analysis(file.path(), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, DataError::ColumnCount { .. }));
    }

    #[test]
    fn test_run_analysis_on_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(file, "39,State-gov,77516,Bachelors,13,Never-married,Adm-clerical,Not-in-family,White,Male,2174,0,40,United-States,<=50K").unwrap();
        writeln!(file, "52,Self-emp-inc,287927,HS-grad,9,Married-civ-spouse,Exec-managerial,Wife,White,Female,15024,0,40,United-States,>50K").unwrap();
        writeln!(file, "30,State-gov,141297,Bachelors,13,Married-civ-spouse,Prof-specialty,Husband,Asian-Pac-Islander,Male,0,0,40,India,>50K").unwrap();
        writeln!(file, "23,?,122272,Bachelors,13,Never-married,Adm-clerical,Own-child,White,Female,0,0,30,United-States,<=50K").unwrap();

        let analysis = run_analysis(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(
            analysis.source,
            AnalysisSource::Dataset {
                rows_read: 4,
                rows_kept: 3
            }
        );

        let report = analysis.report;
        assert_eq!(report.race_count.total(), 3);
        assert_eq!(report.average_age_men, Some(34.5));
        assert_eq!(report.percentage_bachelors, 66.7);
        assert_eq!(report.higher_education_rich, 50.0);
        assert_eq!(report.lower_education_rich, 100.0);
        assert_eq!(report.min_work_hours, Some(40));
        assert_eq!(report.rich_percentage, 66.7);
        assert_eq!(report.highest_earning_country.as_deref(), Some("India"));
        assert_eq!(report.highest_earning_country_percentage, 100.0);
        assert_eq!(report.top_in_occupation.as_deref(), Some("Prof-specialty"));
    }
}
