mod common;

use choreo_action_core::{Action, ActionExt, DelayTime, Interval, MoveBy, Vec2, MIN_DURATION};
use common::{all_updates, approx, probe_log, run_to_end, MockNode, Probe};

#[test]
fn not_done_until_elapsed_reaches_duration() {
    let mut node = MockNode::default();
    let mut delay = DelayTime::new(1.0);
    delay.start(&mut node);
    assert!(!delay.is_done());

    // First tick only arms the clock.
    delay.step(0.25, &mut node);
    approx(delay.elapsed(), 0.0, 0.0);
    assert!(!delay.is_done());

    for _ in 0..3 {
        delay.step(0.25, &mut node);
        assert!(!delay.is_done(), "done early at {}", delay.elapsed());
    }
    delay.step(0.25, &mut node);
    assert!(delay.is_done());
    approx(delay.elapsed(), 1.0, 1e-6);
}

#[test]
fn progress_is_clamped_to_unit_range() {
    let log = probe_log();
    let mut probe = Probe::new("p", 1.0, &log);
    let mut node = MockNode::default();
    probe.start(&mut node);
    probe.step(0.0, &mut node);
    probe.step(0.4, &mut node);
    probe.step(5.0, &mut node);
    probe.step(-10.0, &mut node);

    let seen = all_updates(&log);
    assert_eq!(seen.len(), 4);
    assert!(seen.iter().all(|t| (0.0..=1.0).contains(t)), "{seen:?}");
    approx(seen[1], 0.4, 1e-6);
    assert_eq!(seen[2], 1.0);
}

#[test]
fn first_tick_ignores_its_dt() {
    let mut node = MockNode::default();
    let mut mv = MoveBy::new(2.0, Vec2::new(10.0, 0.0));
    mv.start(&mut node);
    mv.step(1.0, &mut node);
    approx(node.position.x, 0.0, 1e-6);
    mv.step(1.0, &mut node);
    approx(node.position.x, 5.0, 1e-5);
}

#[test]
fn non_positive_durations_are_coerced_to_epsilon() {
    assert_eq!(DelayTime::new(0.0).duration(), MIN_DURATION);
    assert_eq!(DelayTime::new(-3.0).duration(), MIN_DURATION);
    assert_eq!(Interval::new(0.0).duration(), MIN_DURATION);

    let mut node = MockNode::default();
    let mut instant = MoveBy::new(0.0, Vec2::new(4.0, 2.0)).boxed();
    let steps = run_to_end(&mut instant, &mut node, 1.0 / 60.0);
    assert_eq!(steps, 2);
    assert_eq!(node.position, Vec2::new(4.0, 2.0));
}

#[test]
fn start_rewinds_a_finished_action() {
    let mut node = MockNode::default();
    let mut mv = MoveBy::new(1.0, Vec2::new(10.0, 0.0));
    run_to_end(&mut mv, &mut node, 0.25);
    assert!(mv.is_done());

    mv.start(&mut node);
    assert!(!mv.is_done());
    assert_eq!(mv.elapsed(), 0.0);

    run_to_end(&mut mv, &mut node, 0.25);
    approx(node.position.x, 20.0, 1e-5);
}
