use crate::config::LexicalConfig;

/// Encode `text` into a fixed-length feature vector.
///
/// Dimensions 0–25 hold raw a–z letter counts from the lowercased, trimmed
/// input. Dimension `26 + i` is 1.0 when the text contains `keywords[i]` as
/// a substring. Remaining dimensions stay zero. The vector is L2-normalized;
/// empty or non-alphabetic input yields the all-zero vector.
///
/// Pure and deterministic: identical input always produces an identical
/// vector.
pub fn encode(text: &str, cfg: &LexicalConfig) -> Vec<f32> {
    let normalized = text.to_lowercase();
    let normalized = normalized.trim();

    let mut vector = vec![0.0f32; cfg.dimensions];

    for ch in normalized.chars() {
        if ch.is_ascii_lowercase() {
            if let Some(slot) = vector.get_mut((ch as u8 - b'a') as usize) {
                *slot += 1.0;
            }
        }
    }

    for (i, keyword) in cfg.keywords.iter().enumerate() {
        if let Some(slot) = vector.get_mut(26 + i) {
            if normalized.contains(keyword.as_str()) {
                *slot = 1.0;
            }
        }
    }

    l2_normalize_in_place(&mut vector);
    vector
}

/// In-place L2 normalization helper to keep allocations down during scoring.
/// A zero vector is left untouched rather than dividing by zero.
pub fn l2_normalize_in_place(v: &mut [f32]) {
    let norm_sq: f32 = v.iter().map(|x| x * x).sum();
    if norm_sq > 0.0 {
        let inv_norm = norm_sq.sqrt().recip();
        for x in v.iter_mut() {
            *x *= inv_norm;
        }
    }
}
