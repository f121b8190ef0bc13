use crate::compare::{compare_files, SimilarityRecord, TextDecoding};
use crate::config::AppConfig;
use crate::error::Error;
use crate::matcher::{resolve_matches, ImageFilter, MatchedPair};
use crate::progress::{ProgressReporter, SilentReporter};
use crate::report::{build_report, AggregateReport, Tally};
use crate::scanner;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub struct CompareEngine {
    config: AppConfig,
}

#[derive(Debug)]
pub struct ComparisonOutcome {
    pub report: AggregateReport,
    pub tally: Tally,
    /// Relative paths of tree A files with no counterpart in tree B.
    pub unmatched: Vec<PathBuf>,
    pub walk_duration: Duration,
    pub compare_duration: Duration,
}

impl CompareEngine {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    fn decoding(&self) -> TextDecoding {
        if self.config.strict_utf8 {
            TextDecoding::Strict
        } else {
            TextDecoding::Lossy
        }
    }

    /// Run the full comparison:
    /// 1. Walk both trees (concurrently)
    /// 2. Pair tree A files with tree B files by relative path, skipping images
    /// 3. Read and score each pair
    /// 4. Sum the scores and build the report
    pub fn compare(
        &self,
        root_a: &Path,
        root_b: &Path,
        reporter: &dyn ProgressReporter,
    ) -> Result<ComparisonOutcome, Error> {
        let ignore_patterns = scanner::compile_ignore_patterns(&self.config.ignore_patterns);

        // Phase 1: Walk
        info!(
            "Walking {} and {}...",
            root_a.display(),
            root_b.display()
        );
        reporter.on_walk_start();
        let walk_start = Instant::now();
        let (files_a, files_b) = rayon::join(
            || scanner::list_files(root_a, &ignore_patterns),
            || scanner::list_files(root_b, &ignore_patterns),
        );
        let (files_a, files_b) = (files_a?, files_b?);
        let walk_duration = walk_start.elapsed();
        reporter.on_walk_complete(files_a.len(), files_b.len(), walk_duration.as_secs_f64());
        debug!(
            "Walk completed in {:.2}s: {} files in A, {} files in B",
            walk_duration.as_secs_f64(),
            files_a.len(),
            files_b.len(),
        );

        // Phase 2: Match
        let images = ImageFilter::new(self.config.image_extensions.as_slice());
        let plan = resolve_matches(&files_a, &files_b, &images);
        info!(
            "{} files considered, {} matched by relative path",
            plan.considered,
            plan.pairs.len()
        );

        // Phase 3: Score
        reporter.on_compare_start(plan.pairs.len());
        let compare_start = Instant::now();
        let records = self.score_pairs(&plan.pairs, reporter)?;
        let compare_duration = compare_start.elapsed();
        reporter.on_compare_complete(records.len(), compare_duration.as_secs_f64());
        debug!(
            "Scoring completed in {:.2}s",
            compare_duration.as_secs_f64()
        );

        // Phase 4: Aggregate, in one place after every pair has returned
        let mut tally = Tally::default();
        for record in &records {
            tally.record_match(record.similarity);
        }
        for _ in &plan.unmatched {
            tally.record_unmatched();
        }
        if tally.same_directory_count == 0 {
            warn!("No files considered under {}", root_a.display());
        }

        let report = build_report(root_a, root_b, &tally, &records);
        info!(
            "Overall similarity {}% over {} files",
            report.overall_similarity_percentage, report.same_directory_count
        );

        Ok(ComparisonOutcome {
            report,
            tally,
            unmatched: plan.unmatched,
            walk_duration,
            compare_duration,
        })
    }

    fn score_pairs(
        &self,
        pairs: &[MatchedPair],
        reporter: &dyn ProgressReporter,
    ) -> Result<Vec<SimilarityRecord>, Error> {
        let decoding = self.decoding();
        let total = pairs.len();
        let done = AtomicUsize::new(0);

        let score = |pair: &MatchedPair| {
            let record = compare_files(&pair.a.path, &pair.b.path, decoding)?;
            let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
            reporter.on_compare_progress(finished, total);
            Ok::<_, Error>(record)
        };

        if self.config.parallel {
            pairs.par_iter().map(score).collect()
        } else {
            pairs.iter().map(score).collect()
        }
    }
}

/// Compare two trees with the default configuration and no progress output.
pub fn compare_directories(
    root_a: impl AsRef<Path>,
    root_b: impl AsRef<Path>,
) -> Result<AggregateReport, Error> {
    let engine = CompareEngine::new(AppConfig::default());
    let outcome = engine.compare(root_a.as_ref(), root_b.as_ref(), &SilentReporter)?;
    Ok(outcome.report)
}
