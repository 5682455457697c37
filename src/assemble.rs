use crate::classify::FieldClassifier;
use crate::error::{ExtractError, FragmentResult};
use crate::filter::CandidateFilter;
use crate::records::ProductRecord;

/// Result of assembling one batch of candidate fragments.
///
/// Drop counts are carried alongside the records so callers can observe
/// how much of the page was discarded without the batch failing.
#[derive(Debug, Default)]
pub struct ExtractionSummary {
    /// Accepted records, in page order
    pub records: Vec<ProductRecord>,

    /// Fragments that survived filtering and were classified
    pub candidates: usize,

    /// Candidate positions that could not be materialized upstream
    pub skipped_stale: usize,

    /// Fragments rejected as sponsored
    pub rejected_sponsored: usize,

    /// Classified fragments dropped for missing name or price
    pub dropped_incomplete: usize,
}

/// Runs the candidate filter and the field classifier over a fragment batch
/// and emits the final ordered record sequence
#[derive(Default)]
pub struct RecordAssembler {
    classifier: FieldClassifier,
}

impl RecordAssembler {
    pub fn new() -> Self {
        Self {
            classifier: FieldClassifier::new(),
        }
    }

    /// Filter, classify, and collect. Fragments are processed independently;
    /// a fragment that classifies incomplete is dropped and counted, never
    /// aborting its siblings.
    pub fn assemble(&self, fragments: Vec<FragmentResult>, max_count: usize) -> ExtractionSummary {
        let outcome = CandidateFilter::new(max_count).filter(fragments);

        let mut summary = ExtractionSummary {
            candidates: outcome.fragments.len(),
            skipped_stale: outcome.skipped_stale,
            rejected_sponsored: outcome.rejected_sponsored,
            ..ExtractionSummary::default()
        };

        for fragment in &outcome.fragments {
            let record = self.classifier.classify(fragment.descendant_text_nodes());
            if record.is_complete() {
                summary.records.push(record);
            } else {
                ::log::debug!(
                    "Dropping incomplete record (name: {}, price: {})",
                    record.name,
                    record.list_price
                );
                summary.dropped_incomplete += 1;
            }
        }

        ::log::info!(
            "Assembled {} records from {} candidates ({} stale, {} sponsored, {} incomplete)",
            summary.records.len(),
            summary.candidates,
            summary.skipped_stale,
            summary.rejected_sponsored,
            summary.dropped_incomplete
        );

        summary
    }

    /// Extraction entry point for callers: errors when no fragment survives
    /// filtering, otherwise yields the (possibly empty) record sequence
    pub fn extract(
        &self,
        fragments: Vec<FragmentResult>,
        max_count: usize,
    ) -> Result<Vec<ProductRecord>, ExtractError> {
        let summary = self.assemble(fragments, max_count);
        if summary.candidates == 0 {
            return Err(ExtractError::NoCandidates);
        }
        Ok(summary.records)
    }
}
