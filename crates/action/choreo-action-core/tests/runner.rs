mod common;

use std::collections::HashMap;

use choreo_action_core::{
    Action, ActionError, ActionEvent, ActionExt, ActionRunner, Animate, AnimationClip,
    Capabilities, MoveBy, RotateBy, RunId, RunnerConfig, SpriteFrame, Vec2,
};
use common::{approx, approx_vec, MockNode, PointNode};

fn stage() -> HashMap<String, MockNode> {
    let mut nodes = HashMap::new();
    nodes.insert("hero".to_string(), MockNode::default());
    nodes.insert("sidekick".to_string(), MockNode::default());
    nodes
}

fn slide() -> Box<dyn Action> {
    MoveBy::new(1.0, Vec2::new(10.0, 0.0)).boxed()
}

#[test]
fn finished_runs_are_reported_and_retired() {
    let mut nodes = stage();
    let mut runner = ActionRunner::default();
    let id = runner
        .run(slide(), "hero", nodes.get_mut("hero").unwrap())
        .expect("hero can move");
    assert!(runner.is_running(id));
    assert_eq!(runner.action(id).map(|a| a.name()), Some("move_by"));

    let out = runner.tick(0.5, &mut nodes);
    assert_eq!(
        out.events,
        vec![ActionEvent::Started {
            run: id,
            target: "hero".into(),
            action: "move_by".into(),
        }]
    );

    assert!(runner.tick(0.5, &mut nodes).is_empty());
    approx(nodes["hero"].position.x, 5.0, 1e-5);

    let out = runner.tick(0.5, &mut nodes).clone();
    assert_eq!(
        out.events,
        vec![ActionEvent::Finished {
            run: id,
            target: "hero".into(),
        }]
    );
    assert!(!runner.is_running(id));
    assert!(runner.is_empty());
    approx_vec(nodes["hero"].position, Vec2::new(10.0, 0.0), 1e-5);
    approx_vec(nodes["sidekick"].position, Vec2::ZERO, 0.0);
}

#[test]
fn run_rejects_targets_missing_capabilities() {
    let mut runner = ActionRunner::default();
    let mut dot = PointNode::default();
    match runner.run(RotateBy::new(1.0, 90.0).boxed(), "dot", &mut dot) {
        Err(ActionError::MissingCapability { action, missing }) => {
            assert_eq!(action, "rotate_by");
            assert_eq!(missing, Capabilities::ROTATION);
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert!(runner.is_empty());

    assert!(runner.run(slide(), "dot", &mut dot).is_ok());
    assert_eq!(runner.len(), 1);
}

#[test]
fn cancel_stops_the_action_and_reports_it() {
    let idle = SpriteFrame::new("idle", [0.0, 0.0, 16.0, 16.0]);
    let clip = AnimationClip::new(
        "wave",
        0.1,
        vec![
            SpriteFrame::new("wave-0", [0.0, 0.0, 16.0, 16.0]),
            SpriteFrame::new("wave-1", [16.0, 0.0, 16.0, 16.0]),
        ],
    );
    let mut nodes = stage();
    nodes.get_mut("hero").unwrap().frame = Some(idle.clone());

    let mut runner = ActionRunner::default();
    let id = runner
        .run(
            Animate::new(clip, true).expect("clip has frames").boxed(),
            "hero",
            nodes.get_mut("hero").unwrap(),
        )
        .expect("hero shows frames");
    runner.tick(0.0, &mut nodes);
    runner.tick(0.15, &mut nodes);
    assert_eq!(nodes["hero"].frame.as_ref().map(|f| f.texture.as_str()), Some("wave-1"));

    runner
        .cancel(id, nodes.get_mut("hero").unwrap())
        .expect("run is live");
    assert_eq!(nodes["hero"].frame, Some(idle));
    assert!(!runner.is_running(id));

    let out = runner.tick(0.1, &mut nodes);
    assert_eq!(
        out.events,
        vec![ActionEvent::Cancelled {
            run: id,
            target: "hero".into(),
        }]
    );

    assert!(matches!(
        runner.cancel(id, nodes.get_mut("hero").unwrap()),
        Err(ActionError::UnknownRun(r)) if r == id
    ));
}

#[test]
fn cancel_all_for_only_touches_that_target() {
    let mut nodes = stage();
    let mut runner = ActionRunner::default();
    for _ in 0..2 {
        runner
            .run(slide(), "hero", nodes.get_mut("hero").unwrap())
            .expect("hero can move");
    }
    let side = runner
        .run(slide(), "sidekick", nodes.get_mut("sidekick").unwrap())
        .expect("sidekick can move");

    assert_eq!(runner.cancel_all_for("hero", nodes.get_mut("hero").unwrap()), 2);
    assert_eq!(runner.len(), 1);
    assert!(runner.is_running(side));

    let out = runner.tick(0.0, &mut nodes);
    let cancelled = out
        .events
        .iter()
        .filter(|e| matches!(e, ActionEvent::Cancelled { target, .. } if target == "hero"))
        .count();
    assert_eq!(cancelled, 2);

    // Nothing left on the hero.
    assert_eq!(runner.cancel_all_for("hero", nodes.get_mut("hero").unwrap()), 0);
}

#[test]
fn run_ids_are_not_reused_after_a_run_retires() {
    let mut nodes = stage();
    let mut runner = ActionRunner::default();
    let first = runner
        .run(slide(), "hero", nodes.get_mut("hero").unwrap())
        .expect("hero can move");
    for _ in 0..3 {
        runner.tick(0.5, &mut nodes);
    }
    assert!(runner.is_empty());

    let second = runner
        .run(slide(), "hero", nodes.get_mut("hero").unwrap())
        .expect("hero can move");
    assert_ne!(first, second);
    assert!(!runner.is_running(first));
    assert!(runner.is_running(second));
}

#[test]
fn missing_targets_retire_runs_by_default() {
    let mut nodes = stage();
    let mut ghost = MockNode::default();
    let mut runner = ActionRunner::default();
    let id = runner.run(slide(), "ghost", &mut ghost).expect("ghost can move");

    let out = runner.tick(0.1, &mut nodes);
    assert!(out.events.contains(&ActionEvent::TargetMissing {
        run: id,
        target: "ghost".into(),
    }));
    assert!(!runner.is_running(id));
}

#[test]
fn missing_targets_can_be_kept_alive() {
    let cfg = RunnerConfig {
        stop_on_missing_target: false,
        ..Default::default()
    };
    let mut nodes = stage();
    let mut runner = ActionRunner::new(cfg);
    let id = runner
        .run(slide(), "ghost", &mut MockNode::default())
        .expect("ghost can move");
    runner.tick(0.1, &mut nodes);
    runner.tick(0.1, &mut nodes);
    assert!(runner.is_running(id));

    nodes.insert("ghost".to_string(), MockNode::default());
    runner.tick(0.1, &mut nodes);
    assert!(runner.is_running(id));
}

#[test]
fn event_overflow_is_summarized() {
    let cfg = RunnerConfig {
        max_events_per_tick: 2,
        ..Default::default()
    };
    let mut nodes = stage();
    let mut runner = ActionRunner::new(cfg);
    let ids: Vec<RunId> = (0..4)
        .map(|_| {
            runner
                .run(slide(), "hero", nodes.get_mut("hero").unwrap())
                .expect("hero can move")
        })
        .collect();

    let out = runner.tick(0.0, &mut nodes);
    assert_eq!(out.events.len(), 3);
    assert!(matches!(out.events[0], ActionEvent::Started { run, .. } if run == ids[0]));
    assert_eq!(out.events[2], ActionEvent::EventsDropped { count: 2 });
}

#[test]
fn max_step_clamps_large_frames() {
    let cfg = RunnerConfig {
        max_step: Some(0.1),
        ..Default::default()
    };
    let mut nodes = stage();
    let mut runner = ActionRunner::new(cfg);
    runner
        .run(slide(), "hero", nodes.get_mut("hero").unwrap())
        .expect("hero can move");
    runner.tick(0.0, &mut nodes);
    runner.tick(5.0, &mut nodes);
    approx(nodes["hero"].position.x, 1.0, 1e-5);
    assert_eq!(runner.len(), 1);
}

#[test]
fn config_deserializes_with_defaults() {
    let cfg: RunnerConfig =
        serde_json::from_str(r#"{ "max_step": 0.05 }"#).expect("partial config parses");
    assert_eq!(cfg.max_step, Some(0.05));
    assert_eq!(cfg.max_events_per_tick, 1024);
    assert!(cfg.stop_on_missing_target);
}
