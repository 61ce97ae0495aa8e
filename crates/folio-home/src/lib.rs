//! # The home-page engine
//!
//! The one piece of real logic on the home page is the reaction
//! [`Sequencer`]: every click on the greeting advances a rotating index
//! through a small emoji set, and a 500 ms ticker wraps the index back to
//! zero once it runs past the end. The wrap happens on the tick, not on the
//! click — between a click that pushes the index past the last symbol and
//! the next tick, no symbol is shown. That lag is part of the observed
//! animation rhythm and is kept as-is.
//!
//! ```rust
//! use folio_home::Sequencer;
//!
//! let seq = Sequencer::new();
//! assert_eq!(seq.index(), -1); // not started
//!
//! seq.trigger();
//! assert_eq!(seq.visible_symbol(), Some("👋"));
//!
//! seq.trigger();
//! seq.trigger();
//! seq.trigger();              // index now 3: out of range until the tick
//! assert_eq!(seq.visible_symbol(), None);
//! seq.tick();
//! assert_eq!(seq.visible_symbol(), Some("👋"));
//! ```
//!
//! The rise-and-fade the shown emoji plays is cosmetic and lives in
//! [`motion`]; the sequencer never waits on it.

pub mod motion;
pub mod tests;

pub use motion::{MotionFrame, ReactionMotion};

use std::cell::Cell;
use std::rc::Rc;

use folio_core::{Signal, now, on_unmount, scoped_effect, signal};
use web_time::{Duration, Instant};

/// The fixed reaction set, in rotation order.
pub const EMOJIS: [&str; 3] = ["👋", "👍", "🖐"];

const TICK_PERIOD: Duration = Duration::from_millis(500);

/// Bounded counter + visibility flag behind the emoji reaction.
///
/// Cloneable handle; all clones share one state.
pub struct Sequencer {
    inner: Rc<Inner>,
}

struct Inner {
    visible: Signal<bool>,
    index: Signal<i32>,
    running: Cell<bool>,
    last_tick: Cell<Option<Instant>>,
}

impl Clone for Sequencer {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl Sequencer {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                visible: signal(false),
                index: signal(-1),
                running: Cell::new(false),
                last_tick: Cell::new(None),
            }),
        }
    }

    /// Starts the ticker and registers its teardown with the current scope,
    /// so no tick fires after the owning component unmounts.
    pub fn mount(&self) {
        self.inner.running.set(true);
        self.inner.last_tick.set(Some(now()));

        let inner = self.inner.clone();
        scoped_effect(move || {
            on_unmount(move || {
                inner.running.set(false);
                inner.last_tick.set(None);
            })
        });
    }

    /// The click handler: show the reaction and advance the index.
    ///
    /// The increment is deliberately uncapped; wrapping is the ticker's job.
    pub fn trigger(&self) {
        self.inner.visible.set(true);
        self.inner.index.update(|i| *i += 1);
        log::debug!("reaction index -> {}", self.inner.index.get());
    }

    /// One ticker firing: wrap the index if it ran past the set.
    pub fn tick(&self) {
        if self.inner.index.get() >= EMOJIS.len() as i32 {
            self.inner.index.set(0);
        }
    }

    /// Clock-driven pump for hosts without timers: fires [`Sequencer::tick`]
    /// once per elapsed 500 ms period since `mount`. Does nothing while
    /// unmounted.
    pub fn drive(&self) {
        if !self.inner.running.get() {
            return;
        }
        let Some(mut last) = self.inner.last_tick.get() else {
            return;
        };
        let current = now();
        while current.saturating_duration_since(last) >= TICK_PERIOD {
            self.tick();
            last += TICK_PERIOD;
        }
        self.inner.last_tick.set(Some(last));
    }

    pub fn visible(&self) -> bool {
        self.inner.visible.get()
    }

    /// `-1` until the first trigger; may transiently equal `EMOJIS.len()`
    /// between a trigger and the next tick.
    pub fn index(&self) -> i32 {
        self.inner.index.get()
    }

    /// Whether the emoji at position `i` is the one currently shown.
    pub fn shown(&self, i: usize) -> bool {
        self.visible() && self.index() == i as i32
    }

    /// The symbol currently shown, if the index is in range.
    pub fn visible_symbol(&self) -> Option<&'static str> {
        let i = self.index();
        if self.visible() && (0..EMOJIS.len() as i32).contains(&i) {
            Some(EMOJIS[i as usize])
        } else {
            None
        }
    }

    pub fn index_signal(&self) -> Signal<i32> {
        self.inner.index.clone()
    }

    pub fn visible_signal(&self) -> Signal<bool> {
        self.inner.visible.clone()
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

/// One record in the "new content" list. Static render-layer data; the
/// engine only stores and serves it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentEntry {
    pub link: String,
    pub text: String,
    pub show_new_tag: bool,
}

impl ContentEntry {
    pub fn new(link: impl Into<String>, text: impl Into<String>, show_new_tag: bool) -> Self {
        Self {
            link: link.into(),
            text: text.into(),
            show_new_tag,
        }
    }
}

pub fn new_content() -> Vec<ContentEntry> {
    vec![
        ContentEntry::new("/blog", "A fresh round of blog posts", true),
        ContentEntry::new("/projects", "The projects timeline, rebuilt", true),
        ContentEntry::new("/open-source", "Open source contributions", false),
        ContentEntry::new("/changelog", "Everything that changed on this site", false),
    ]
}
