#[cfg(test)]
mod tests {
    use crate::animation::*;
    use crate::color::Color;
    use crate::effects::*;
    use crate::scope::*;
    use crate::signal::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use web_time::{Duration, Instant};

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        sig.subscribe(move |v| seen_clone.borrow_mut().push(*v));

        sig.set(42);
        sig.update(|v| *v += 1);
        assert_eq!(*seen.borrow(), vec![42, 43]);
    }

    #[test]
    fn test_signal_unsubscribe() {
        let sig = signal(0);
        let count = Rc::new(RefCell::new(0));

        let count_clone = count.clone();
        let key = sig.subscribe(move |_| *count_clone.borrow_mut() += 1);
        assert_eq!(sig.subscriber_count(), 1);

        sig.set(1);
        sig.unsubscribe(key);
        sig.set(2);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(sig.subscriber_count(), 0);

        // stale key is a no-op
        sig.unsubscribe(key);
    }

    #[test]
    fn test_unsubscribe_one_keeps_others() {
        let sig = signal(0);
        let hits = Rc::new(RefCell::new((0, 0)));

        let h1 = hits.clone();
        let k1 = sig.subscribe(move |_| h1.borrow_mut().0 += 1);
        let h2 = hits.clone();
        let _k2 = sig.subscribe(move |_| h2.borrow_mut().1 += 1);

        sig.set(1);
        sig.unsubscribe(k1);
        sig.set(2);

        assert_eq!(*hits.borrow(), (1, 2));
    }

    #[test]
    fn test_scope_explicit_dispose() {
        let cleaned_up = Rc::new(RefCell::new(false));

        let scope = Scope::new();
        let cleaned_up_clone = cleaned_up.clone();
        scope.add_disposer(move || {
            *cleaned_up_clone.borrow_mut() = true;
        });

        assert!(!*cleaned_up.borrow());
        scope.dispose();
        assert!(*cleaned_up.borrow());
    }

    #[test]
    fn test_scoped_effect_cleanup() {
        let order = Rc::new(RefCell::new(Vec::new()));

        let scope = Scope::new();
        let order_clone = order.clone();
        scope.run(|| {
            scoped_effect(move || {
                order_clone.borrow_mut().push("mount");
                let order_inner = order_clone.clone();
                on_unmount(move || order_inner.borrow_mut().push("unmount"))
            });
        });

        assert_eq!(*order.borrow(), vec!["mount"]);
        scope.dispose();
        assert_eq!(*order.borrow(), vec!["mount", "unmount"]);
    }

    #[test]
    fn test_dispose_runs_once() {
        let runs = Rc::new(RefCell::new(0));
        let runs_clone = runs.clone();
        let d = Dispose::new(move || *runs_clone.borrow_mut() += 1);

        d.run();
        d.run();
        assert_eq!(*runs.borrow(), 1);
    }

    #[test]
    fn test_clock_is_replaceable() {
        let t0 = Instant::now();
        let clock = TestClock::start_at(t0);
        set_clock(Rc::new(clock.clone()));

        assert_eq!(now(), t0);
        clock.advance(Duration::from_millis(500));
        assert_eq!(now(), t0 + Duration::from_millis(500));

        set_clock(Rc::new(SystemClock));
    }

    #[test]
    fn test_keyframes_endpoints() {
        let track = Keyframes::new(vec![0.0f32, -40.0, -60.0], Easing::Linear);
        assert_eq!(track.sample(0.0), 0.0);
        assert_eq!(track.sample(1.0), -60.0);
        // midpoint of a three-frame track is the middle frame
        assert!((track.sample(0.5) - -40.0).abs() < 0.001);
        // out-of-range times clamp
        assert_eq!(track.sample(-1.0), 0.0);
        assert_eq!(track.sample(2.0), -60.0);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));
    }
}
