//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: masked passwords, resolved
//! invalid markers, truncated text.
//!
//! # Example
//!
//! ```rust
//! use logingate::ui::viewmodel::{BodyView, FooterInfo, HeaderInfo, HomeInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: "A Typical Page".to_string(), nav_items: vec![] },
//!     body: BodyView::Home(HomeInfo {
//!         message: "Welcome back!".to_string(),
//!         subtitle: String::new(),
//!     }),
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//! };
//! assert!(vm.header.nav_items.is_empty());
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title bar and navigation.
    pub header: HeaderInfo,

    /// Screen-specific content.
    pub body: BodyView,

    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// Screen-specific content.
#[derive(Debug, Clone)]
pub enum BodyView {
    Login(LoginView),
    Home(HomeInfo),
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text.
    pub title: String,

    /// Navigation entries, empty while logged out.
    pub nav_items: Vec<String>,
}

/// The login form as rendered.
#[derive(Debug, Clone)]
pub struct LoginView {
    /// Fields in focus order.
    pub fields: Vec<FieldView>,

    /// Whether Enter would log in right now.
    pub submittable: bool,
}

/// One rendered form field.
#[derive(Debug, Clone)]
pub struct FieldView {
    pub label: String,

    /// Text to draw inside the box (masked for passwords, tail-truncated).
    pub text: String,

    pub is_focused: bool,

    /// Draw with the invalid marker.
    pub is_invalid: bool,

    /// Explanation shown under an invalid field.
    pub hint: Option<String>,
}

/// Home screen message.
#[derive(Debug, Clone)]
pub struct HomeInfo {
    pub message: String,
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}
