//! Dataset check command
//!
//! Runs the integrity report over every chain with a progress bar.

use crate::dataset::Dataset;
use crate::dataset::check::{CheckReport, check_records};
use indicatif::{ProgressBar, ProgressStyle};

/// Check every chain in the dataset
pub fn run_check(dataset: &Dataset) -> CheckReport {
    let records = dataset.records();
    println!("🔎 Checking {} chains...", records.len());

    let pb = ProgressBar::new(records.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let report = check_records(records, &pb);
    pb.finish_with_message(format!("{} issues", report.issue_count()));

    tracing::info!(
        chains = report.total_records,
        failing = report.failures.len(),
        "dataset checked"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_passes() {
        let dataset = Dataset::embedded().unwrap();
        let report = run_check(&dataset);
        assert_eq!(report.total_records, dataset.len().get());
        assert!(report.is_clean());
    }
}
