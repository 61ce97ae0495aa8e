//! # Theming
//!
//! One explicit store holds the two visual preferences the whole render
//! tree reads: the color mode (light/dark) and the user-picked accent.
//! Consumers receive the store by reference and subscribe to its signals;
//! there are no ambient globals.
//!
//! ```rust
//! use std::rc::Rc;
//! use folio_theme::{Accent, MemoryStorage, ThemeStore};
//!
//! let store = ThemeStore::new(Rc::new(MemoryStorage::default()));
//! store.toggle_color_mode();
//! store.set_accent_color(Accent::Purple.strong()).unwrap();
//! let link = store.link_color(); // purple, weighted for dark backgrounds
//! # let _ = link;
//! ```
//!
//! Both preferences persist under fixed keys in the injected [`Storage`];
//! a failed write is logged and forgotten, never surfaced.

pub mod error;
pub mod storage;

pub use error::{StorageError, ThemeError};
pub use storage::{FileStorage, MemoryStorage, Storage};

use std::rc::Rc;

use folio_core::{Color, Signal, signal};

const MODE_KEY: &str = "color-mode";
const ACCENT_KEY: &str = "accent";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(ColorMode::Light),
            "dark" => Some(ColorMode::Dark),
            _ => None,
        }
    }
}

/// The enumerated accent palette. Every accent carries two swatches: a
/// strong one that reads on light backgrounds and a soft one that reads on
/// dark backgrounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Accent {
    Green,
    #[default]
    Blue,
    Red,
    Orange,
    Purple,
    Pink,
}

impl Accent {
    pub const ALL: [Accent; 6] = [
        Accent::Green,
        Accent::Blue,
        Accent::Red,
        Accent::Orange,
        Accent::Purple,
        Accent::Pink,
    ];

    /// The swatch used on light backgrounds; also the accent's canonical
    /// color, the one the picker shows and [`ThemeStore::set_accent_color`]
    /// accepts.
    pub fn strong(self) -> Color {
        match self {
            Accent::Green => Color::from_hex("#38A169"),
            Accent::Blue => Color::from_hex("#3182CE"),
            Accent::Red => Color::from_hex("#E53E3E"),
            Accent::Orange => Color::from_hex("#DD6B20"),
            Accent::Purple => Color::from_hex("#805AD5"),
            Accent::Pink => Color::from_hex("#D53F8C"),
        }
    }

    /// The swatch used on dark backgrounds.
    pub fn soft(self) -> Color {
        match self {
            Accent::Green => Color::from_hex("#9AE6B4"),
            Accent::Blue => Color::from_hex("#90CDF4"),
            Accent::Red => Color::from_hex("#FEB2B2"),
            Accent::Orange => Color::from_hex("#FBD38D"),
            Accent::Purple => Color::from_hex("#D6BCFA"),
            Accent::Pink => Color::from_hex("#FBB6CE"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Accent::Green => "green",
            Accent::Blue => "blue",
            Accent::Red => "red",
            Accent::Orange => "orange",
            Accent::Purple => "purple",
            Accent::Pink => "pink",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Palette membership check against the canonical swatches.
    pub fn from_color(c: Color) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.strong() == c)
    }
}

/// Link color for the given mode and accent.
///
/// A static per-mode lookup, not a computed contrast function: each pair
/// maps to a swatch already picked to read against that mode's background.
pub fn link_color_for(mode: ColorMode, accent: Accent) -> Color {
    match mode {
        ColorMode::Light => accent.strong(),
        ColorMode::Dark => accent.soft(),
    }
}

/// Background used behind the active nav link in the given mode.
pub fn highlight_bg_for(mode: ColorMode) -> Color {
    match mode {
        ColorMode::Light => Color::from_hex("#E2E8F0"),
        ColorMode::Dark => Color::from_hex("#2D3748"),
    }
}

/// Tab-wide theme state. Create one per session and hand it by reference to
/// every consumer.
pub struct ThemeStore {
    mode: Signal<ColorMode>,
    accent: Signal<Accent>,
    storage: Rc<dyn Storage>,
}

impl ThemeStore {
    /// Restores persisted preferences, falling back to the defaults for
    /// anything missing or unrecognized.
    pub fn new(storage: Rc<dyn Storage>) -> Self {
        let mode = storage
            .get(MODE_KEY)
            .and_then(|s| ColorMode::from_name(&s))
            .unwrap_or_default();
        let accent = storage
            .get(ACCENT_KEY)
            .and_then(|s| Accent::from_name(&s))
            .unwrap_or_default();
        Self {
            mode: signal(mode),
            accent: signal(accent),
            storage,
        }
    }

    pub fn color_mode(&self) -> ColorMode {
        self.mode.get()
    }

    pub fn toggle_color_mode(&self) {
        let next = self.mode.get().toggled();
        self.mode.set(next);
        self.persist(MODE_KEY, next.name());
    }

    pub fn accent(&self) -> Accent {
        self.accent.get()
    }

    /// Accepts only canonical palette colors; rejects anything else and
    /// keeps the current accent.
    pub fn set_accent_color(&self, c: Color) -> Result<(), ThemeError> {
        let accent = Accent::from_color(c).ok_or(ThemeError::InvalidAccentColor(c))?;
        self.accent.set(accent);
        self.persist(ACCENT_KEY, accent.name());
        Ok(())
    }

    /// Accent color weighted for the current mode's background.
    pub fn link_color(&self) -> Color {
        link_color_for(self.mode.get(), self.accent.get())
    }

    pub fn highlight_bg(&self) -> Color {
        highlight_bg_for(self.mode.get())
    }

    /// Reactive handles for render consumers.
    pub fn mode_signal(&self) -> Signal<ColorMode> {
        self.mode.clone()
    }

    pub fn accent_signal(&self) -> Signal<Accent> {
        self.accent.clone()
    }

    // In-memory state has already changed by the time this runs; a failed
    // write only forgoes durability for this session.
    fn persist(&self, key: &str, value: &str) {
        if let Err(err) = self.storage.set(key, value) {
            log::warn!("theme preference '{key}' not persisted: {err}");
        }
    }
}
