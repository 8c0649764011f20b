use super::models::RouteCandidate;

/// How many routes the results screen shows.
pub(super) const TOP_ROUTES: usize = 3;

/// Orders candidates by descending score and keeps the first `limit`.
///
/// The sort is stable: candidates with equal scores keep their input order.
pub(super) fn rank(candidates: &[RouteCandidate], limit: usize) -> Vec<RouteCandidate> {
    let mut ranked = candidates.to_vec();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(limit);

    log::debug!(
        "Ranked {} candidates, kept {}",
        candidates.len(),
        ranked.len()
    );
    ranked
}
