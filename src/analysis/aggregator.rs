//! Census statistics and their tie-break rules.
//!
//! Every function here is a pure function of the cleaned records. Where a
//! statistic ranks values, the ranking is by descending count with ties
//! resolved by first-seen order in the dataset.

use crate::models::{Dataset, DemographicReport, RaceCounts, Record, Sex};
use std::collections::HashMap;
use tracing::debug;

const INDIA: &str = "India";

/// Compute all ten statistics over a cleaned dataset.
pub fn analyze(dataset: &Dataset) -> DemographicReport {
    let records = dataset.records();
    debug!("Aggregating {} records", records.len());

    let (higher_education_rich, lower_education_rich) = education_rich(records);
    let min_work_hours = min_work_hours(records);
    let (highest_earning_country, highest_earning_country_percentage) =
        highest_earning_country(records);

    let report = DemographicReport {
        race_count: race_count(records),
        average_age_men: average_age_men(records),
        percentage_bachelors: percentage_bachelors(records),
        higher_education_rich,
        lower_education_rich,
        min_work_hours,
        rich_percentage: min_hours_rich_percentage(records, min_work_hours),
        highest_earning_country,
        highest_earning_country_percentage,
        top_in_occupation: top_in_occupation(records),
    };

    debug!("Aggregation complete: {:?}", report);
    report
}

/// Round to one decimal place.
///
/// Rounds the exact binary value of `value`, so 39.45 (stored slightly
/// above the tie) becomes 39.5. Only exact ties go to the even digit.
pub fn round1(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// `part / whole` as a rounded percentage; 0.0 when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round1(part as f64 / whole as f64 * 100.0)
}

/// Count occurrences, most frequent first, ties in first-seen order.
pub fn value_counts<'a, I>(values: I) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(&'a str, usize)> = Vec::new();

    for value in values {
        match index.get(value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value, 1));
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by_key(|(_, count)| std::cmp::Reverse(*count));
    counts
}

/// Rows per race.
pub fn race_count(records: &[Record]) -> RaceCounts {
    let counts = value_counts(records.iter().map(|r| r.race.as_str()))
        .into_iter()
        .map(|(race, count)| (race.to_string(), count))
        .collect();

    RaceCounts::new(counts)
}

/// Mean age of men, or `None` if there are none.
pub fn average_age_men(records: &[Record]) -> Option<f64> {
    let (sum, count) = records
        .iter()
        .filter(|r| r.sex == Sex::Male)
        .fold((0i64, 0usize), |(sum, count), r| (sum + r.age as i64, count + 1));

    if count == 0 {
        return None;
    }
    Some(round1(sum as f64 / count as f64))
}

pub fn percentage_bachelors(records: &[Record]) -> f64 {
    let bachelors = records
        .iter()
        .filter(|r| r.education == "Bachelors")
        .count();
    percentage(bachelors, records.len())
}

/// Percentage earning >50K with and without advanced education.
pub fn education_rich(records: &[Record]) -> (f64, f64) {
    let (advanced, other): (Vec<&Record>, Vec<&Record>) =
        records.iter().partition(|r| r.has_advanced_education());

    (rich_share(&advanced), rich_share(&other))
}

pub fn min_work_hours(records: &[Record]) -> Option<i32> {
    records.iter().map(|r| r.hours_per_week).min()
}

/// Percentage earning >50K among those working exactly `min_hours`.
pub fn min_hours_rich_percentage(records: &[Record], min_hours: Option<i32>) -> f64 {
    let Some(min_hours) = min_hours else {
        return 0.0;
    };

    let min_workers: Vec<&Record> = records
        .iter()
        .filter(|r| r.hours_per_week == min_hours)
        .collect();

    rich_share(&min_workers)
}

/// Country with the highest share of people earning >50K, and that share.
///
/// Countries without any rich rows are not candidates. Candidates are
/// visited by descending rich count (first-seen on ties) and the first to
/// reach the maximum share wins.
pub fn highest_earning_country(records: &[Record]) -> (Option<String>, f64) {
    let rich_by_country = value_counts(
        records
            .iter()
            .filter(|r| r.is_rich())
            .map(|r| r.native_country.as_str()),
    );
    let total_by_country: HashMap<&str, usize> =
        value_counts(records.iter().map(|r| r.native_country.as_str()))
            .into_iter()
            .collect();

    let mut best: Option<(&str, f64)> = None;
    for (country, rich) in rich_by_country {
        let total = total_by_country.get(country).copied().unwrap_or(rich);
        let share = rich as f64 / total as f64 * 100.0;

        if best.map_or(true, |(_, top)| share > top) {
            best = Some((country, share));
        }
    }

    match best {
        Some((country, share)) => (Some(country.to_string()), round1(share)),
        None => (None, 0.0),
    }
}

/// Most common occupation among people from India earning >50K.
pub fn top_in_occupation(records: &[Record]) -> Option<String> {
    value_counts(
        records
            .iter()
            .filter(|r| r.native_country == INDIA && r.is_rich())
            .map(|r| r.occupation.as_str()),
    )
    .into_iter()
    .next()
    .map(|(occupation, _)| occupation.to_string())
}

fn rich_share(records: &[&Record]) -> f64 {
    let rich = records.iter().filter(|r| r.is_rich()).count();
    percentage(rich, records.len())
}
