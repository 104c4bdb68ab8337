use tracing::{debug, warn};

use crate::error::Error;
use crate::tracker::Issue;

/// Source of the visiting order for candidates.
pub trait Shuffler {
    /// A permutation of `0..len`.
    fn permutation(&mut self, len: usize) -> Vec<usize>;
}

/// Uniformly random order backed by `fastrand`.
pub struct RandomShuffler {
    rng: fastrand::Rng,
}

impl RandomShuffler {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for RandomShuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl Shuffler for RandomShuffler {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        self.rng.shuffle(&mut order);
        order
    }
}

/// Terminal state of a scan.
#[derive(Debug)]
pub enum Selection {
    /// An unclaimed candidate.
    Chosen(Issue),
    /// Every candidate was claimed or failed, and at least one lookup failed.
    /// Carries the last failure seen.
    ExhaustedWithError(Error),
    /// Every candidate was claimed (or there were none).
    ExhaustedClean,
}

/// Visit `candidates` in `order`, returning the first one `is_claimed` reports
/// as unclaimed.
///
/// A failed check is remembered and the scan moves on. Indices outside the
/// candidate range are skipped.
pub fn select<F>(candidates: &[Issue], order: &[usize], mut is_claimed: F) -> Selection
where
    F: FnMut(&Issue) -> crate::error::Result<bool>,
{
    let mut last_error: Option<Error> = None;

    for &index in order {
        let Some(candidate) = candidates.get(index) else {
            continue;
        };
        match is_claimed(candidate) {
            Ok(false) => {
                debug!(number = candidate.number, "selected issue");
                return Selection::Chosen(candidate.clone());
            }
            Ok(true) => {
                debug!(number = candidate.number, "issue already has a closing pull request");
            }
            Err(e) => {
                warn!(number = candidate.number, error = %e, "cross-reference lookup failed");
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) => Selection::ExhaustedWithError(e),
        None => Selection::ExhaustedClean,
    }
}
