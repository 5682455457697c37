use crate::error::FragmentResult;
use crate::fragment::PageFragment;

/// Case-insensitive marker that disqualifies a whole fragment. A single
/// occurrence anywhere in the fragment's markup rejects it, descendants
/// are not checked individually.
const SPONSORED_MARKER: &str = "sponsored";

/// Outcome of candidate filtering, with per-reason drop counts so the
/// assembler can report them
#[derive(Debug, Default)]
pub struct FilterOutcome {
    /// Retained fragments, a stable sub-sequence of the input order
    pub fragments: Vec<PageFragment>,

    /// Positions whose fragment could not be materialized upstream
    pub skipped_stale: usize,

    /// Fragments rejected as promoted/non-genuine
    pub rejected_sponsored: usize,
}

/// Filters raw candidate fragments down to at most `max_count` genuine ones
#[derive(Debug)]
pub struct CandidateFilter {
    max_count: usize,
}

impl CandidateFilter {
    pub fn new(max_count: usize) -> Self {
        Self { max_count }
    }

    /// Whether a fragment is flagged as promoted content
    pub fn is_sponsored(fragment: &PageFragment) -> bool {
        fragment.raw_markup().to_lowercase().contains(SPONSORED_MARKER)
    }

    /// Drop stale positions and sponsored fragments, then cap the remainder.
    ///
    /// Stale positions are skipped silently (partial results are expected),
    /// sponsored fragments are rejected outright, and original page order is
    /// preserved throughout.
    pub fn filter(&self, fragments: Vec<FragmentResult>) -> FilterOutcome {
        let mut outcome = FilterOutcome::default();

        for (position, result) in fragments.into_iter().enumerate() {
            if outcome.fragments.len() >= self.max_count {
                break;
            }

            let fragment = match result {
                Ok(fragment) => fragment,
                Err(e) => {
                    ::log::debug!("Skipping candidate {}: {}", position, e);
                    outcome.skipped_stale += 1;
                    continue;
                }
            };

            if Self::is_sponsored(&fragment) {
                ::log::debug!("Rejecting sponsored candidate at position {}", position);
                outcome.rejected_sponsored += 1;
                continue;
            }

            outcome.fragments.push(fragment);
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FragmentError;
    use crate::fragment::Node;

    fn fragment(markup: &str, name: &str) -> PageFragment {
        PageFragment::new(
            markup.to_string(),
            vec![Node::new(name, "a-title", "h2")],
        )
    }

    #[test]
    fn test_sponsored_fragments_are_rejected_any_case() {
        for marker in ["Sponsored", "sponsored", "SPONSORED"] {
            let markup = format!("<div><span>{}</span><h2>Wireless Mouse</h2></div>", marker);
            assert!(CandidateFilter::is_sponsored(&fragment(&markup, "Wireless Mouse")));
        }

        assert!(!CandidateFilter::is_sponsored(&fragment(
            "<div><h2>Wireless Mouse</h2></div>",
            "Wireless Mouse"
        )));
    }

    #[test]
    fn test_cap_preserves_order() {
        let fragments: Vec<FragmentResult> = (0..5)
            .map(|i| Ok(fragment("<div></div>", &format!("Product number {}", i))))
            .collect();

        let outcome = CandidateFilter::new(2).filter(fragments);
        assert_eq!(outcome.fragments.len(), 2);
        assert_eq!(
            outcome.fragments[0].descendant_text_nodes()[0].text,
            "Product number 0"
        );
        assert_eq!(
            outcome.fragments[1].descendant_text_nodes()[0].text,
            "Product number 1"
        );
    }

    #[test]
    fn test_sponsored_positions_do_not_consume_the_cap() {
        let fragments: Vec<FragmentResult> = vec![
            Ok(fragment("<div>Sponsored</div>", "Promoted Item Here")),
            Ok(fragment("<div></div>", "First genuine product")),
            Ok(fragment("<div></div>", "Second genuine product")),
        ];

        let outcome = CandidateFilter::new(2).filter(fragments);
        assert_eq!(outcome.fragments.len(), 2);
        assert_eq!(outcome.rejected_sponsored, 1);
        assert_eq!(
            outcome.fragments[0].descendant_text_nodes()[0].text,
            "First genuine product"
        );
    }

    #[test]
    fn test_stale_positions_are_skipped_silently() {
        let fragments: Vec<FragmentResult> = vec![
            Err(FragmentError { position: 0 }),
            Ok(fragment("<div></div>", "Surviving product here")),
        ];

        let outcome = CandidateFilter::new(10).filter(fragments);
        assert_eq!(outcome.fragments.len(), 1);
        assert_eq!(outcome.skipped_stale, 1);
    }

    #[test]
    fn test_zero_max_count_yields_nothing() {
        let fragments: Vec<FragmentResult> =
            vec![Ok(fragment("<div></div>", "A perfectly fine product"))];
        let outcome = CandidateFilter::new(0).filter(fragments);
        assert!(outcome.fragments.is_empty());
    }
}
