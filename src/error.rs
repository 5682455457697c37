use crate::fragment::PageFragment;
use thiserror::Error;

/// Errors surfaced by an extraction call.
///
/// Per-fragment problems never appear here: a fragment that cannot be
/// classified is dropped and counted, and only the all-candidates-empty
/// condition escalates to the caller.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Zero fragments survived candidate filtering
    #[error("no product candidates survived filtering")]
    NoCandidates,

    /// Could not start a WebDriver session; propagated unchanged, no retry
    #[error("failed to start WebDriver session: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    /// The render/fetch collaborator failed mid-page; propagated unchanged
    #[error("upstream fetch failed: {0}")]
    Upstream(#[from] fantoccini::error::CmdError),
}

/// A candidate position whose fragment could not be materialized
/// (e.g. the element went stale between discovery and readout)
#[derive(Debug, Clone, Error)]
#[error("stale candidate at position {position}")]
pub struct FragmentError {
    pub position: usize,
}

/// Per-position fetch outcome; failed positions are skipped silently by
/// the candidate filter rather than aborting the batch
pub type FragmentResult = Result<PageFragment, FragmentError>;
