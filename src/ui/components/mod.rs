//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar with navigation
//! - [`footer`]: Keybinding hints
//! - [`field`]: Bordered input box with invalid hint
//! - [`home`]: Greeting shown once logged in
//!
//! # Layout Modes
//!
//! - [`render_login_screen`]: Header + fields + login button + footer
//! - [`render_home_screen`]: Header + greeting + footer

mod field;
mod footer;
mod header;
mod home;

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, HeaderInfo, HomeInfo, LoginView};

pub use field::FIELD_CHROME_WIDTH;

use field::render_field;
use footer::render_footer;
use header::render_header;
use home::render_home;

/// Draws a horizontal separator at `row` and returns the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Draws the bottom border and footer on the last two rows.
fn render_bottom(footer: &FooterInfo, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1);
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, footer, theme, cols);
}

/// Renders the login screen.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [blank line]
/// [E-mail box, optional hint]
/// [Password box, optional hint]
/// [blank line]
/// [Login button]
/// [padding]
/// [Border]
/// [Footer]
/// ```
pub fn render_login_screen(
    header: &HeaderInfo,
    login: &LoginView,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row += 1;

    for field in &login.fields {
        current_row = render_field(current_row, field, theme, cols);
    }
    current_row += 1;

    if login.submittable {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.submit_ready_fg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print_centered(current_row, "[ Login ]", cols);
    print!("{}", Theme::reset());

    render_bottom(footer, theme, cols, rows);
}

/// Renders the home screen.
pub fn render_home_screen(
    header: &HeaderInfo,
    home: &HomeInfo,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_home(current_row + 3, home, theme, cols);

    render_bottom(footer, theme, cols, rows);
}
