//! Footer component renderer.

use crate::ui::helpers::print_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders dimmed, centered keybinding hints at `row`.
///
/// Hints wider than the pane are cut at the pane width.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text: String = footer.keybindings.chars().take(cols).collect();

    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(row, &help_text, cols);
    print!("{}", Theme::reset());
    row + 1
}
