//! # Navigation state
//!
//! Three small pieces drive the top navigation:
//!
//! - [`Router`] — the current path as a read-mostly signal. The hosting
//!   navigation layer writes it; everything in the engine only reads.
//! - [`Disclosure`] — the open/closed state of the mobile panel.
//! - [`link_style`] — a pure function from (link, current path, theme)
//!   to the per-link visual state.
//!
//! [`NavShell`] bundles the first two and encodes the one coupling rule:
//! activating a link closes the mobile panel as a side effect of the same
//! click that changes the route.


use folio_core::{Color, Signal, signal};
use folio_theme::{ColorMode, highlight_bg_for};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: String,
    pub path: String,
}

impl NavLink {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// The links shown in the desktop header.
pub fn web_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "/"),
        NavLink::new("About", "/"),
        NavLink::new("Projects", "/"),
    ]
}

/// The links shown in the mobile disclosure panel.
pub fn mobile_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Projects", "/projects"),
        NavLink::new("Open Source", "/open-source"),
        NavLink::new("Blog", "/blog"),
        NavLink::new("Changelog", "/changelog"),
    ]
}

/// Current navigation path. The engine treats this as an input: only the
/// hosting layer (or [`NavShell::activate`] on its behalf) writes it.
pub struct Router {
    current: Signal<String>,
}

impl Router {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: signal(initial.into()),
        }
    }

    pub fn path(&self) -> String {
        self.current.get()
    }

    pub fn navigate(&self, path: impl Into<String>) {
        let path = path.into();
        log::debug!("route -> {path}");
        self.current.set(path);
    }

    pub fn path_signal(&self) -> Signal<String> {
        self.current.clone()
    }
}

/// Open/closed state of the mobile navigation panel.
///
/// Two states, created closed, alive for the component's mounted lifetime.
/// `open` and `close` are idempotent; `toggle` flips.
pub struct Disclosure {
    open: Signal<bool>,
}

impl Disclosure {
    pub fn new() -> Self {
        Self { open: signal(false) }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&self) {
        self.open.update(|v| *v = !*v);
    }

    pub fn open(&self) {
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    pub fn open_signal(&self) -> Signal<bool> {
        self.open.clone()
    }
}

impl Default for Disclosure {
    fn default() -> Self {
        Self::new()
    }
}

/// Router plus disclosure, wired together.
pub struct NavShell {
    pub router: Router,
    pub disclosure: Disclosure,
}

impl NavShell {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            router: Router::new(initial_path),
            disclosure: Disclosure::new(),
        }
    }

    /// A nav link was clicked: the panel closes, then the route changes.
    pub fn activate(&self, path: impl Into<String>) {
        self.disclosure.close();
        self.router.navigate(path);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Foreground {
    /// Take whatever color the surrounding text has.
    Inherit,
    Color(Color),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outline {
    None,
    Dashed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkStyle {
    pub background: Color,
    pub foreground: Foreground,
    pub outline: Outline,
}

/// Visual state of one nav link.
///
/// A link is active iff its path equals the current path exactly — no
/// prefix matching and no trailing-slash or query normalization.
pub fn link_style(
    link: &NavLink,
    current_path: &str,
    mode: ColorMode,
    link_color: Color,
) -> LinkStyle {
    if link.path == current_path {
        LinkStyle {
            background: highlight_bg_for(mode),
            foreground: Foreground::Color(link_color),
            outline: Outline::Dashed,
        }
    } else {
        LinkStyle {
            background: Color::TRANSPARENT,
            foreground: Foreground::Inherit,
            outline: Outline::None,
        }
    }
}
