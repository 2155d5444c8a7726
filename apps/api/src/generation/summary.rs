//! Summary statistics over an assembled dataset.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::models::profile::LabeledProfile;

/// Count of one category and its share of the total, as a percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub label: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub total_records: usize,
    pub gender_distribution: Vec<Share>,
    pub mean_average_performance: f64,
    pub all_sciences_percentage: f64,
    pub career_distribution: Vec<Share>,
    pub cluster_distribution: Vec<Share>,
    /// Share of all optional-subject slots (four per record).
    pub subject_popularity: Vec<Share>,
    pub generated_at: DateTime<Utc>,
}

pub fn summarize(records: &[LabeledProfile]) -> DatasetSummary {
    let total = records.len();

    let mean_average_performance = if total > 0 {
        records
            .iter()
            .map(|r| r.profile.average_performance())
            .sum::<f64>()
            / total as f64
    } else {
        0.0
    };

    let all_sciences = records
        .iter()
        .filter(|r| r.profile.took_all_sciences())
        .count();

    let subject_slots = records
        .iter()
        .flat_map(|r| r.profile.optional_subjects().iter().map(|o| o.subject.name()));

    DatasetSummary {
        total_records: total,
        gender_distribution: tally(records.iter().map(|r| r.profile.gender().name()), total),
        mean_average_performance,
        all_sciences_percentage: percentage(all_sciences, total),
        career_distribution: tally(records.iter().map(|r| r.career_path.name()), total),
        cluster_distribution: tally(
            records.iter().map(|r| r.career_path.cluster().label()),
            total,
        ),
        subject_popularity: tally(subject_slots, total * 4),
        generated_at: Utc::now(),
    }
}

/// Logs the summary the way the generator script reports it.
pub fn log_summary(summary: &DatasetSummary) {
    info!("Total records: {}", summary.total_records);
    for share in &summary.gender_distribution {
        info!("Gender {}: {:.1}%", share.label, share.percentage);
    }
    info!("Average GPA: {:.2}", summary.mean_average_performance);
    info!(
        "Percentage taking all sciences: {:.1}%",
        summary.all_sciences_percentage
    );
    info!("Career distribution:");
    for share in &summary.career_distribution {
        info!("  {}: {} ({:.1}%)", share.label, share.count, share.percentage);
    }
    info!("Popular optional subjects:");
    for share in &summary.subject_popularity {
        info!("  {}: {} ({:.1}%)", share.label, share.count, share.percentage);
    }
}

/// Counts labels, most frequent first; ties sort by label.
fn tally<'a>(labels: impl Iterator<Item = &'a str>, total: usize) -> Vec<Share> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }

    let mut shares: Vec<Share> = counts
        .into_iter()
        .map(|(label, count)| Share {
            label: label.to_string(),
            count,
            percentage: percentage(count, total),
        })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    shares
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
