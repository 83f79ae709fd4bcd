use crate::levenshtein::{distance_with, Unit};

/// Edit distance divided by the longer input's length, in `[0.0, 1.0]`.
///
/// Two empty strings are `0.0` apart.
pub fn normalized_distance(source: &str, target: &str, unit: Unit) -> f32 {
    let max_len = unit.count(source).max(unit.count(target));
    if max_len == 0 {
        return 0.0;
    }
    distance_with(source, target, unit) as f32 / max_len as f32
}

/// How much information two strings share: `1.0` for identical input,
/// `0.0` when nothing lines up.
pub fn similarity(source: &str, target: &str, unit: Unit) -> f32 {
    1.0 - normalized_distance(source, target, unit)
}
