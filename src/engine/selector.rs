//! Plan selector: one pick per strategy, preferring distinct pathways.

use std::collections::HashSet;

use super::domain::Strategy;
use super::ranking::ScoredPathway;

/// Walks each strategy's ranked list in the fixed strategy order and picks
/// the first pathway not already chosen. When every entry has been seen
/// (catalog smaller than the number of strategies), the list's top entry is
/// reused rather than returning fewer picks. Empty lists yield no pick.
pub fn pick_per_strategy<'a>(
    ranked: &[(Strategy, Vec<&'a ScoredPathway>)],
    distinct: bool,
) -> Vec<(Strategy, &'a ScoredPathway)> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut picks = Vec::with_capacity(ranked.len());

    for (strategy, list) in ranked {
        let mut chosen = None;

        for item in list {
            if !distinct || !seen.contains(item.pathway.id.as_str()) {
                chosen = Some(*item);
                if distinct {
                    seen.insert(item.pathway.id.as_str());
                }
                break;
            }
        }

        // Fall back to the top duplicate so callers always get one pick per
        // strategy for a non-empty catalog.
        if let Some(item) = chosen.or_else(|| list.first().copied()) {
            picks.push((*strategy, item));
        }
    }

    picks
}
