//! String padding against a repeated fill pattern.

/// Left-pad `value` to the width of `fill` repeated `count` times.
///
/// If `value` already occupies at least that many characters it is
/// returned unchanged. Otherwise the leading characters of the repeated
/// fill are prepended so the result is exactly the field width; a
/// multi-character fill may be cut mid-pattern.
pub fn pad_left(value: &str, fill: &str, count: usize) -> String {
    match padding_for(value, fill, count) {
        Some(pad) => format!("{pad}{value}"),
        None => value.to_string(),
    }
}

/// Right-pad `value` to the width of `fill` repeated `count` times.
///
/// Same width rules as [`pad_left`], with the fill appended instead.
pub fn pad_right(value: &str, fill: &str, count: usize) -> String {
    match padding_for(value, fill, count) {
        Some(pad) => format!("{value}{pad}"),
        None => value.to_string(),
    }
}

/// The leading slice of the repeated fill needed to reach the field
/// width, or None when `value` already fills the field.
fn padding_for(value: &str, fill: &str, count: usize) -> Option<String> {
    let field = fill.repeat(count);
    let field_width = field.chars().count();
    let value_width = value.chars().count();
    if value_width >= field_width {
        return None;
    }
    Some(field.chars().take(field_width - value_width).collect())
}
