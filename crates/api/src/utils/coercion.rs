//! Grid cell value coercion

/// Coerce a raw grid cell into a number.
///
/// Input is trimmed; an empty cell reads as `0`. Anything that does not
/// parse as a finite decimal is declined with `None`.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}
