//! Header component renderer.
//!
//! The title is centered; navigation entries (only present while logged in)
//! are drawn right-aligned on the same line.

use crate::ui::helpers::{centered_padding, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Gap between navigation entries.
const NAV_SEPARATOR: &str = "  ";

/// Renders the header at `row` and returns the next free row.
///
/// # Layout
///
/// ```text
/// [padding] TITLE [padding]           Users  Admin  Logout
/// ```
///
/// When the navigation does not fit beside the title it is dropped rather
/// than overlapping it.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let nav = header.nav_items.join(NAV_SEPARATOR);
    let nav_width = display_width(&nav);
    let (left, _) = centered_padding(&header.title, cols);
    let title_end = left + display_width(&header.title);
    let nav_fits = !nav.is_empty() && title_end + nav_width + 2 <= cols;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(left));
    print!("{}", header.title);

    if nav_fits {
        let gap = cols.saturating_sub(title_end + nav_width + 1);
        print!("{}", " ".repeat(gap));
        print!("{}", Theme::fg(&theme.colors.nav_fg));
        print!("{nav} ");
    } else {
        print!("{}", " ".repeat(cols.saturating_sub(title_end)));
    }

    print!("{}", Theme::reset());
    row + 1
}
