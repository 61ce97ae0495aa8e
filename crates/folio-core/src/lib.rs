//! # Signals, Scopes, and the Clock
//!
//! Folio's interaction engine is built on a small reactive core instead of
//! framework-ambient reactivity. There are three main pieces:
//!
//! - `Signal<T>` — observable, reactive value with explicit subscriptions.
//! - `Scope` / `Dispose` — cleanup discipline for anything that outlives a
//!   single event (timers, subscriptions).
//! - `Clock` — pluggable time source so timed behavior is deterministic in
//!   tests.
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a piece of state:
//!
//! ```rust
//! use folio_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! Writes notify every live subscriber; `subscribe` hands back a `SubKey`
//! that removes exactly that subscriber, so consumers can come and go
//! independently:
//!
//! ```rust
//! use folio_core::*;
//!
//! let mode = signal("light");
//! let key = mode.subscribe(|m| log::debug!("mode is now {m}"));
//! mode.set("dark");
//! mode.unsubscribe(key);
//! ```
//!
//! ## Scopes and cleanup
//!
//! A `Scope` owns the disposers of everything mounted while it was current.
//! Disposing the scope (when the owning view unmounts) runs them in order,
//! so a sequencer's ticker never fires after its component is gone:
//!
//! ```rust
//! use folio_core::*;
//!
//! let scope = Scope::new();
//! scope.run(|| {
//!     scoped_effect(|| {
//!         log::info!("mounted");
//!         on_unmount(|| log::info!("unmounted"))
//!     });
//! });
//! scope.dispose(); // runs the unmount cleanup
//! ```
//!
//! ## Time
//!
//! All timed behavior reads the installed [`Clock`]. Production hosts leave
//! the default system clock in place; tests install a [`TestClock`] and step
//! it explicitly instead of sleeping.

pub mod animation;
pub mod color;
pub mod effects;
pub mod scope;
pub mod signal;
pub mod tests;

pub use animation::*;
pub use color::*;
pub use effects::*;
pub use scope::*;
pub use signal::*;
