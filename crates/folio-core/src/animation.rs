use std::cell::RefCell;
use std::rc::Rc;

use web_time::Instant;

thread_local! {
    static CLOCK: RefCell<Rc<dyn Clock>> = RefCell::new(Rc::new(SystemClock));
}

/// Time source for everything timed in the engine.
///
/// The host leaves [`SystemClock`] installed; tests install a [`TestClock`]
/// and step it explicitly instead of sleeping.
pub trait Clock: 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Install a clock for the current thread, replacing the previous one.
pub fn set_clock(clock: Rc<dyn Clock>) {
    CLOCK.with(|c| *c.borrow_mut() = clock);
}

pub fn now() -> Instant {
    CLOCK.with(|c| c.borrow().now())
}

/// A test clock you can drive deterministically.
#[derive(Clone)]
pub struct TestClock {
    t: Rc<RefCell<Instant>>,
}

impl TestClock {
    pub fn start_at(t: Instant) -> Self {
        Self {
            t: Rc::new(RefCell::new(t)),
        }
    }

    pub fn advance(&self, by: web_time::Duration) {
        let next = *self.t.borrow() + by;
        *self.t.borrow_mut() = next;
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        *self.t.borrow()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn interpolate(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for crate::Color {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        crate::Color(
            (self.0 as f32 + (other.0 as f32 - self.0 as f32) * t) as u8,
            (self.1 as f32 + (other.1 as f32 - self.1 as f32) * t) as u8,
            (self.2 as f32 + (other.2 as f32 - self.2 as f32) * t) as u8,
            (self.3 as f32 + (other.3 as f32 - self.3 as f32) * t) as u8,
        )
    }
}

/// Samples a fixed sequence of keyframes at eased, normalized time.
///
/// Keyframes are evenly spaced; `sample(0.0)` is the first frame and
/// `sample(1.0)` the last. Purely cosmetic — nothing in the engine's
/// logical state depends on the sampled values.
pub struct Keyframes<T: Interpolate + Clone> {
    frames: Vec<T>,
    easing: Easing,
}

impl<T: Interpolate + Clone> Keyframes<T> {
    pub fn new(frames: Vec<T>, easing: Easing) -> Self {
        debug_assert!(frames.len() >= 2);
        Self { frames, easing }
    }

    pub fn sample(&self, t: f32) -> T {
        let t = self.easing.interpolate(t.clamp(0.0, 1.0));
        let segments = (self.frames.len() - 1) as f32;
        let pos = t * segments;
        let i = (pos.floor() as usize).min(self.frames.len() - 2);
        let local = pos - i as f32;
        self.frames[i].interpolate(&self.frames[i + 1], local)
    }
}
