//! Number formatting for statistics widgets.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Fixed six-decimal rendering used for min/max/epsilon.
#[must_use]
pub fn fixed6(value: f64) -> String {
    format!("{value:.6}")
}

/// Render an integer with `,` thousands separators (`1048576` -> `1,048,576`).
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Megabytes with two decimals, as reported by the repository info.
#[must_use]
pub fn megabytes(value: f64) -> String {
    format!("{value:.2} MB")
}
