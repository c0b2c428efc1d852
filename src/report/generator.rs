//! Report rendering.
//!
//! Renders the statistics as the plain ten-line summary, as a Markdown
//! document or as JSON.

use crate::models::{DemographicReport, RaceCounts, Report, ReportMetadata};
use anyhow::Result;
use std::fmt::Display;

/// Render the ten statistics as plain text, one per line, in report order.
pub fn render_text(report: &DemographicReport) -> String {
    let mut output = String::new();

    output.push_str("Number of each race:\n");
    output.push_str(&render_race_table(&report.race_count));

    output.push_str(&format!(
        "Average age of men: {}\n",
        display_or_none(report.average_age_men.map(OneDecimal))
    ));
    output.push_str(&format!(
        "Percentage with Bachelors degrees: {:.1}%\n",
        report.percentage_bachelors
    ));
    output.push_str(&format!(
        "Percentage with higher education that earn >50K: {:.1}%\n",
        report.higher_education_rich
    ));
    output.push_str(&format!(
        "Percentage without higher education that earn >50K: {:.1}%\n",
        report.lower_education_rich
    ));
    output.push_str(&format!(
        "Min work time: {} hours/week\n",
        display_or_none(report.min_work_hours)
    ));
    output.push_str(&format!(
        "Percentage of rich among those who work fewest hours: {:.1}%\n",
        report.rich_percentage
    ));
    output.push_str(&format!(
        "Country with highest percentage of rich: {}\n",
        display_or_none(report.highest_earning_country.as_deref())
    ));
    output.push_str(&format!(
        "Highest percentage of rich people in country: {:.1}%\n",
        report.highest_earning_country_percentage
    ));
    output.push_str(&format!(
        "Top occupations in India: {}\n",
        display_or_none(report.top_in_occupation.as_deref())
    ));

    output
}

fn render_race_table(race_count: &RaceCounts) -> String {
    let width = race_count.iter().map(|(race, _)| race.len()).max().unwrap_or(0);

    race_count
        .iter()
        .map(|(race, count)| format!("{:<width$} {}\n", race, count, width = width))
        .collect()
}

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &Report) -> String {
    let mut output = String::new();

    output.push_str("# Demographic Data Report\n\n");
    output.push_str(&generate_metadata_section(&report.metadata));
    output.push_str(&generate_race_section(&report.statistics.race_count));
    output.push_str(&generate_statistics_section(&report.statistics));

    output
}

fn generate_metadata_section(metadata: &ReportMetadata) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!("- **Data File:** `{}`\n", metadata.data_path));
    section.push_str(&format!(
        "- **Generated:** {}\n",
        metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!("- **Source:** {}\n", metadata.source));
    section.push('\n');

    section
}

fn generate_race_section(race_count: &RaceCounts) -> String {
    let mut section = String::new();

    section.push_str("## Race Distribution\n\n");
    if race_count.is_empty() {
        section.push_str("No rows in the dataset.\n\n");
        return section;
    }

    section.push_str("| Race | Count |\n");
    section.push_str("|:---|---:|\n");
    for (race, count) in race_count.iter() {
        section.push_str(&format!("| {} | {} |\n", race, count));
    }
    section.push('\n');

    section
}

fn generate_statistics_section(stats: &DemographicReport) -> String {
    let rows: [(&str, String); 9] = [
        (
            "Average age of men",
            display_or_none(stats.average_age_men.map(OneDecimal)),
        ),
        (
            "Percentage with Bachelors degrees",
            format!("{:.1}%", stats.percentage_bachelors),
        ),
        (
            "Percentage with higher education that earn >50K",
            format!("{:.1}%", stats.higher_education_rich),
        ),
        (
            "Percentage without higher education that earn >50K",
            format!("{:.1}%", stats.lower_education_rich),
        ),
        (
            "Min work time (hours/week)",
            display_or_none(stats.min_work_hours),
        ),
        (
            "Percentage of rich among those who work fewest hours",
            format!("{:.1}%", stats.rich_percentage),
        ),
        (
            "Country with highest percentage of rich",
            display_or_none(stats.highest_earning_country.as_deref()),
        ),
        (
            "Highest percentage of rich people in country",
            format!("{:.1}%", stats.highest_earning_country_percentage),
        ),
        (
            "Top occupation in India (>50K)",
            display_or_none(stats.top_in_occupation.as_deref()),
        ),
    ];

    let mut section = String::new();
    section.push_str("## Statistics\n\n");
    section.push_str("| Statistic | Value |\n");
    section.push_str("|:---|---:|\n");
    for (label, value) in rows {
        section.push_str(&format!("| {} | {} |\n", label, value));
    }
    section.push('\n');

    section
}

/// Generate a JSON report.
pub fn generate_json_report(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

/// Floats are already rounded; always show the single decimal.
struct OneDecimal(f64);

impl Display for OneDecimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

fn display_or_none<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}
