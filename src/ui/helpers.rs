//! Shared rendering utilities.

/// Positions the cursor at a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Visible width of `text` in terminal cells, counting one cell per char.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Left and right padding that centers `text` in `cols` cells.
///
/// Text wider than `cols` gets no padding. An odd remainder goes to the right.
#[must_use]
pub fn centered_padding(text: &str, cols: usize) -> (usize, usize) {
    let width = display_width(text);
    let left = cols.saturating_sub(width) / 2;
    let right = cols.saturating_sub(left + width);
    (left, right)
}

/// Prints `text` centered on `row`, padded to fill the line.
pub fn print_centered(row: usize, text: &str, cols: usize) {
    let (left, right) = centered_padding(text, cols);
    position_cursor(row, 1);
    print!("{}{text}{}", " ".repeat(left), " ".repeat(right));
}
