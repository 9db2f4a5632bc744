//! Input box renderer for one form field.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FieldView;

/// Horizontal margin around the box.
const FIELD_MARGIN: usize = 5;

/// Width of the label column inside the box.
const LABEL_WIDTH: usize = 10;

/// Columns a field row spends on everything but its text: both margins, both
/// borders, the leading space, the label column, and the cursor cell.
pub const FIELD_CHROME_WIDTH: usize = FIELD_MARGIN * 2 + 2 + 1 + LABEL_WIDTH + 1;

/// Renders a 3-line bordered box, plus a hint line when the field is invalid.
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────────┐
/// [margin] │ E-mail    a@b.com█   │
/// [margin] └──────────────────────┘
/// [margin]   Please enter a valid email address
/// ```
///
/// Frame color precedence: invalid, then focused, then plain.
///
/// # Returns
///
/// The next free row (`row + 3`, or `row + 4` with a hint).
pub fn render_field(row: usize, field: &FieldView, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(FIELD_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    let frame = if field.is_invalid {
        &theme.colors.invalid_fg
    } else if field.is_focused {
        &theme.colors.field_focus_border
    } else {
        &theme.colors.field_border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(FIELD_MARGIN));
    print!("{}", Theme::fg(frame));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let cursor = if field.is_focused { "█" } else { "" };
    let content = format!(" {:<width$}{}{cursor}", field.label, field.text, width = LABEL_WIDTH);
    let padding = inner_width.saturating_sub(display_width(&content));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(FIELD_MARGIN));
    print!("{}│", Theme::fg(frame));
    if field.is_invalid {
        if let Some(bg) = &theme.colors.invalid_bg {
            print!("{}", Theme::bg(bg));
        }
    }
    print!("{}", Theme::fg(&theme.colors.text_normal));
    if field.is_focused {
        print!("{}", Theme::bold());
    }
    print!("{content}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::reset());
    print!("{}│", Theme::fg(frame));
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(FIELD_MARGIN));
    print!("{}", Theme::fg(frame));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    match &field.hint {
        Some(hint) => {
            position_cursor(row + 3, 1);
            print!("{}", " ".repeat(FIELD_MARGIN + 2));
            print!("{}", Theme::fg(&theme.colors.invalid_fg));
            print!("{hint}");
            print!("{}", Theme::reset());
            row + 4
        }
        None => row + 3,
    }
}
