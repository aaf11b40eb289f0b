//! Ranking computation.
//!
//! Chefs are ordered by vote count descending with a stable sort, so chefs
//! on equal votes keep their registration order. Ranks are the contiguous
//! positions 1..=N of that ordering.

use cookoff_store::models::{Chef, RankEntry};

/// Compute the ranking sequence for a snapshot of chefs.
///
/// The input order is the registration order and acts as the tiebreak.
pub fn rank_by_votes(chefs: &[Chef]) -> Vec<RankEntry> {
    let mut ordered: Vec<&Chef> = chefs.iter().collect();
    ordered.sort_by(|a, b| b.votes.cmp(&a.votes));

    ordered
        .iter()
        .enumerate()
        .map(|(position, chef)| RankEntry {
            chef_id: chef.id,
            rank: position as u32 + 1,
        })
        .collect()
}
