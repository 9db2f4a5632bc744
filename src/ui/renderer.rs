//! Top-level rendering coordinator.
//!
//! Two steps: compute the view model from `AppState`, then hand each part to
//! the component renderers for the visible screen.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, UIViewModel};

/// Renders the plugin UI to stdout.
///
/// Output is ANSI-styled text positioned with cursor escapes; the screen is
/// not cleared first (Zellij hands the plugin a blank frame).
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    match &vm.body {
        BodyView::Login(login) => {
            components::render_login_screen(&vm.header, login, &vm.footer, theme, cols, rows);
        }
        BodyView::Home(home) => {
            components::render_home_screen(&vm.header, home, &vm.footer, theme, cols, rows);
        }
    }
}
