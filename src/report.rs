use crate::compare::SimilarityRecord;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Running totals over one comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tally {
    /// Every non-image file of tree A that was considered.
    pub same_directory_count: usize,
    /// Considered files that found a counterpart in tree B.
    pub same_directory_and_file_count: usize,
    pub total_similarity_score: f64,
    pub total_similarity_file_count: usize,
}

impl Tally {
    pub fn record_unmatched(&mut self) {
        self.same_directory_count += 1;
    }

    pub fn record_match(&mut self, similarity: f64) {
        self.same_directory_count += 1;
        self.same_directory_and_file_count += 1;
        self.total_similarity_score += similarity;
        self.total_similarity_file_count += 1;
    }

    /// `(total score / considered files) * 100`. Unmatched files weigh in
    /// as zero. No considered files gives 0.
    pub fn overall_percentage(&self) -> f64 {
        if self.same_directory_count == 0 {
            return 0.0;
        }
        (self.total_similarity_score / self.same_directory_count as f64) * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityFileComparison {
    pub file1: String,
    pub file2: String,
    pub similarity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateReport {
    pub same_directory_count: usize,
    pub same_directory_and_file_count: usize,
    pub overall_similarity_percentage: String,
    pub similarity_file_comparisons: Vec<SimilarityFileComparison>,
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn format_similarity(similarity: f64) -> String {
    format!("{}%", format_percentage(similarity * 100.0))
}

fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

pub fn build_report(
    root_a: &Path,
    root_b: &Path,
    tally: &Tally,
    records: &[SimilarityRecord],
) -> AggregateReport {
    AggregateReport {
        same_directory_count: tally.same_directory_count,
        same_directory_and_file_count: tally.same_directory_and_file_count,
        overall_similarity_percentage: format_percentage(tally.overall_percentage()),
        similarity_file_comparisons: records
            .iter()
            .map(|record| SimilarityFileComparison {
                file1: relative_display(&record.path_a, root_a),
                file2: relative_display(&record.path_b, root_b),
                similarity: format_similarity(record.similarity),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_two_decimals() {
        assert_eq!(format_percentage(100.0), "100.00");
        assert_eq!(format_percentage(50.0), "50.00");
        assert_eq!(format_percentage(33.33333), "33.33");
        assert_eq!(format_similarity(1.0), "100.00%");
        assert_eq!(format_similarity(0.0), "0.00%");
        assert_eq!(format_similarity(0.5), "50.00%");
    }

    #[test]
    fn test_tally_dilutes_by_unmatched() {
        let mut tally = Tally::default();
        tally.record_match(1.0);
        tally.record_unmatched();
        assert_eq!(tally.same_directory_count, 2);
        assert_eq!(tally.same_directory_and_file_count, 1);
        assert_eq!(tally.total_similarity_file_count, 1);
        assert!((tally.overall_percentage() - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_tally_nothing_considered() {
        let tally = Tally::default();
        assert_eq!(tally.overall_percentage(), 0.0);
        assert_eq!(format_percentage(tally.overall_percentage()), "0.00");
    }

    #[test]
    fn test_build_report_relativizes_paths() {
        let mut tally = Tally::default();
        tally.record_match(0.5);
        let records = vec![SimilarityRecord {
            path_a: PathBuf::from("/left/sub/a.txt"),
            path_b: PathBuf::from("/right/sub/a.txt"),
            similarity: 0.5,
        }];

        let report = build_report(Path::new("/left"), Path::new("/right"), &tally, &records);
        let expected_path = Path::new("sub").join("a.txt").to_string_lossy().into_owned();
        assert_eq!(report.similarity_file_comparisons.len(), 1);
        assert_eq!(report.similarity_file_comparisons[0].file1, expected_path);
        assert_eq!(report.similarity_file_comparisons[0].file2, expected_path);
        assert_eq!(report.similarity_file_comparisons[0].similarity, "50.00%");
        assert_eq!(report.overall_similarity_percentage, "50.00");
    }

    #[test]
    fn test_json_field_names() {
        let report = AggregateReport {
            same_directory_count: 1,
            same_directory_and_file_count: 1,
            overall_similarity_percentage: "100.00".to_string(),
            similarity_file_comparisons: vec![SimilarityFileComparison {
                file1: "a.txt".to_string(),
                file2: "a.txt".to_string(),
                similarity: "100.00%".to_string(),
            }],
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["sameDirectoryCount"], 1);
        assert_eq!(value["sameDirectoryAndFileCount"], 1);
        assert_eq!(value["overallSimilarityPercentage"], "100.00");
        assert_eq!(value["similarityFileComparisons"][0]["file1"], "a.txt");
        assert_eq!(value["similarityFileComparisons"][0]["similarity"], "100.00%");
    }
}
