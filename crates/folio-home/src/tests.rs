#[cfg(test)]
mod tests {
    use crate::motion::{MotionFrame, ReactionMotion};
    use crate::{EMOJIS, Sequencer, new_content};
    use folio_core::{Scope, SystemClock, TestClock, set_clock};
    use std::rc::Rc;
    use web_time::{Duration, Instant};

    #[test]
    fn test_initial_state() {
        let seq = Sequencer::new();
        assert!(!seq.visible());
        assert_eq!(seq.index(), -1);
        assert_eq!(seq.visible_symbol(), None);
    }

    #[test]
    fn test_first_trigger_shows_first_symbol() {
        let seq = Sequencer::new();
        seq.trigger();
        assert!(seq.visible());
        assert_eq!(seq.index(), 0);
        assert_eq!(seq.visible_symbol(), Some(EMOJIS[0]));
        assert!(seq.shown(0));
        assert!(!seq.shown(1));
    }

    #[test]
    fn test_triggers_run_past_the_end_until_tick() {
        let seq = Sequencer::new();
        for expected in 0..=3 {
            seq.trigger();
            assert_eq!(seq.index(), expected);
        }

        // transiently out of range: nothing rendered, wrap not yet applied
        assert_eq!(seq.index(), 3);
        assert_eq!(seq.visible_symbol(), None);

        seq.tick();
        assert_eq!(seq.index(), 0);
        assert_eq!(seq.visible_symbol(), Some(EMOJIS[0]));
    }

    #[test]
    fn test_tick_is_a_noop_in_range() {
        let seq = Sequencer::new();
        seq.trigger();
        seq.trigger();
        seq.tick();
        assert_eq!(seq.index(), 1);

        // before the first trigger the tick changes nothing either
        let fresh = Sequencer::new();
        fresh.tick();
        assert_eq!(fresh.index(), -1);
        assert!(!fresh.visible());
    }

    #[test]
    fn test_drive_fires_on_clock_period() {
        let clock = TestClock::start_at(Instant::now());
        set_clock(Rc::new(clock.clone()));

        let scope = Scope::new();
        let seq = Sequencer::new();
        scope.run(|| seq.mount());

        for _ in 0..4 {
            seq.trigger();
        }
        assert_eq!(seq.index(), 3);

        // not yet: 499 ms in
        clock.advance(Duration::from_millis(499));
        seq.drive();
        assert_eq!(seq.index(), 3);

        clock.advance(Duration::from_millis(1));
        seq.drive();
        assert_eq!(seq.index(), 0);

        set_clock(Rc::new(SystemClock));
    }

    #[test]
    fn test_unmount_cancels_ticker() {
        let clock = TestClock::start_at(Instant::now());
        set_clock(Rc::new(clock.clone()));

        let scope = Scope::new();
        let seq = Sequencer::new();
        scope.run(|| seq.mount());

        for _ in 0..4 {
            seq.trigger();
        }
        scope.dispose();

        clock.advance(Duration::from_millis(2000));
        seq.drive();
        // no tick after teardown: the out-of-range index is left alone
        assert_eq!(seq.index(), 3);

        set_clock(Rc::new(SystemClock));
    }

    #[test]
    fn test_click_between_ticks_is_last_in_wins() {
        let clock = TestClock::start_at(Instant::now());
        set_clock(Rc::new(clock.clone()));

        let scope = Scope::new();
        let seq = Sequencer::new();
        scope.run(|| seq.mount());

        for _ in 0..4 {
            seq.trigger();
        }
        clock.advance(Duration::from_millis(500));
        seq.drive(); // wraps to 0
        seq.trigger(); // click lands after the tick
        assert_eq!(seq.index(), 1);

        set_clock(Rc::new(SystemClock));
    }

    #[test]
    fn test_index_signal_notifies() {
        use std::cell::RefCell;

        let seq = Sequencer::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        seq.index_signal().subscribe(move |i| {
            seen_clone.borrow_mut().push(*i);
        });

        seq.trigger();
        seq.trigger();
        assert_eq!(*seen.borrow(), vec![0, 1]);
    }

    #[test]
    fn test_motion_endpoints() {
        let motion = ReactionMotion::new();

        let start = motion.sample(Duration::ZERO);
        assert_eq!(start.translate_y, 0.0);
        assert_eq!(start.opacity, 0.0);

        let end = motion.sample(motion.duration());
        assert!((end.translate_y - -60.0).abs() < 0.001);
        assert!(end.opacity < 0.001);

        // past the end the pose holds
        let held = motion.sample(motion.duration() + Duration::from_millis(200));
        assert_eq!(held, end);

        assert_eq!(MotionFrame::HIDDEN.opacity, 0.0);
    }

    #[test]
    fn test_motion_is_visible_mid_flight() {
        let motion = ReactionMotion::new();
        let mid = motion.sample(Duration::from_millis(150));
        assert!(mid.opacity > 0.4);
        assert!(mid.translate_y < 0.0);
    }

    #[test]
    fn test_content_records() {
        let entries = new_content();
        assert!(!entries.is_empty());
        assert!(entries.iter().any(|e| e.show_new_tag));
        assert!(entries.iter().all(|e| e.link.starts_with('/')));
    }
}
