//! Amount formatting and fixed-width text cells shared by the renderers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats `amount` with exactly `precision` fractional digits.
///
/// Midpoints round away from zero; a value that rounds to zero never carries
/// a minus sign.
pub fn format_fixed(amount: Decimal, precision: u32) -> String {
    let mut rounded =
        amount.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    format!("{:.*}", precision as usize, rounded)
}

/// Formats `amount` without forcing a precision: trailing fractional zeros
/// are dropped, so whole values print without a decimal point.
pub fn format_natural(amount: Decimal) -> String {
    let normalized = amount.normalize();
    if normalized.is_zero() {
        return Decimal::ZERO.to_string();
    }
    normalized.to_string()
}

/// Truncates or right-pads `text` with spaces to exactly `width` characters.
pub fn fit_left(text: &str, width: usize) -> String {
    let mut cell: String = text.chars().take(width).collect();
    let len = cell.chars().count();
    cell.extend(std::iter::repeat(' ').take(width - len));
    cell
}

/// Right-aligns `text` in a field of `width` characters. Longer text is kept whole.
pub fn pad_right_aligned(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let mut cell = " ".repeat(width - len);
    cell.push_str(text);
    cell
}

/// Centres `text` in `width` characters using `fill`; an odd leftover goes
/// to the right. Text at least `width` long is returned unchanged.
pub fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let padding = width - len;
    let left = padding / 2;
    let right = padding - left;
    let mut line = String::with_capacity(width);
    line.extend(std::iter::repeat(fill).take(left));
    line.push_str(text);
    line.extend(std::iter::repeat(fill).take(right));
    line
}
