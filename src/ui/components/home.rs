//! Home screen renderer.

use crate::ui::helpers::print_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HomeInfo;

/// Renders the greeting centered, starting at `row`.
///
/// ```text
/// [left padding] Welcome back! [right padding]
/// [left padding] subtitle      [right padding]
/// ```
pub fn render_home(row: usize, home: &HomeInfo, theme: &Theme, cols: usize) -> usize {
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.home_fg));
    print_centered(row, &home.message, cols);
    print!("{}", Theme::reset());

    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(row + 1, &home.subtitle, cols);
    print!("{}", Theme::reset());

    row + 2
}
