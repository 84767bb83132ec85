use std::cmp::Ordering;

/// Filter, sort, and truncate a scored candidate list.
///
/// Keeps items scoring strictly above `min_score`, sorts descending by score
/// (stable, so equal scores keep their original relative order), and returns
/// at most `top_n` items.
pub fn rank_by_score<T>(
    items: Vec<T>,
    score_of: impl Fn(&T) -> f32,
    min_score: f32,
    top_n: usize,
) -> Vec<T> {
    let mut survivors: Vec<T> = items
        .into_iter()
        .filter(|item| score_of(item) > min_score)
        .collect();

    // Vec::sort_by is stable; NaN scores (which cannot pass the threshold
    // filter anyway) would compare as equal.
    survivors.sort_by(|a, b| {
        score_of(b)
            .partial_cmp(&score_of(a))
            .unwrap_or(Ordering::Equal)
    });
    survivors.truncate(top_n);
    survivors
}
