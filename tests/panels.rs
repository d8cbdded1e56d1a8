//! Message flow tests: pointer events and ticks through `update`

mod common;

use common::{fling, model_with_panel, run_until_settled, test_model};
use desktop_widgets::commands::{Cmd, PanelCursor};
use desktop_widgets::config::PanelSpec;
use desktop_widgets::messages::{AppMsg, Msg};
use desktop_widgets::model::{Anchor, PanelKind};
use desktop_widgets::motion::{MotionState, Point, ScreenRect, MAX_CATCH_UP_TICKS};
use desktop_widgets::update::update;

// ========================================================================
// Dragging
// ========================================================================

#[test]
fn test_drag_keeps_grab_offset() {
    let (mut model, id) = model_with_panel(PanelKind::Battery, 300.0, 300.0);

    update(&mut model, Msg::pointer_down(id, 330.0, 340.0, 0.0));
    let cmd = update(&mut model, Msg::pointer_move(id, 500.0, 500.0, 16.0));

    assert_eq!(
        cmd,
        Some(Cmd::MovePanel {
            id,
            position: Point::new(470.0, 460.0)
        })
    );
}

#[test]
fn test_move_and_up_without_grab_do_nothing() {
    let (mut model, id) = model_with_panel(PanelKind::Battery, 300.0, 300.0);

    assert_eq!(update(&mut model, Msg::pointer_move(id, 500.0, 500.0, 0.0)), None);
    assert_eq!(update(&mut model, Msg::pointer_up(id, 500.0, 500.0, 10.0)), None);
    assert_eq!(model.panel(id).unwrap().position(), Point::new(300.0, 300.0));
}

#[test]
fn test_release_after_pause_does_not_coast() {
    let (mut model, id) = model_with_panel(PanelKind::Battery, 300.0, 300.0);

    update(&mut model, Msg::pointer_down(id, 300.0, 300.0, 0.0));
    update(&mut model, Msg::pointer_move(id, 350.0, 300.0, 16.0));
    update(&mut model, Msg::pointer_move(id, 350.0, 300.0, 200.0));
    update(&mut model, Msg::pointer_up(id, 350.0, 300.0, 200.0));

    let panel = model.panel(id).unwrap();
    assert_eq!(panel.state(), MotionState::Idle);
    assert_eq!(panel.position(), Point::new(350.0, 300.0));
    assert!(!model.is_animating());
}

#[test]
fn test_click_without_move_never_coasts() {
    let (mut model, id) = model_with_panel(PanelKind::Battery, 300.0, 300.0);

    update(&mut model, Msg::pointer_down(id, 310.0, 310.0, 0.0));
    let cmd = update(&mut model, Msg::pointer_up(id, 310.0, 310.0, 0.0));

    assert_eq!(
        cmd,
        Some(Cmd::SetCursor {
            id,
            cursor: PanelCursor::Grab
        })
    );
    let panel = model.panel(id).unwrap();
    assert_eq!(panel.state(), MotionState::Idle);
    assert_eq!(panel.position(), Point::new(300.0, 300.0));
    assert!(!panel.scheduler.is_running());
    assert!(!model.is_animating());
}

#[test]
fn test_unknown_panel_is_ignored() {
    let mut model = test_model();
    let stray = desktop_widgets::model::PanelId(99);
    assert_eq!(update(&mut model, Msg::pointer_down(stray, 0.0, 0.0, 0.0)), None);
}

// ========================================================================
// Coasting
// ========================================================================

#[test]
fn test_fling_coasts_and_settles() {
    let (mut model, id) = model_with_panel(PanelKind::Battery, 800.0, 400.0);
    let released = fling(&mut model, id, 40.0, 0.0, 0.0, 16.0);

    assert_eq!(model.panel(id).unwrap().state(), MotionState::Coasting);
    assert!(model.is_animating());

    let (cmds, _) = run_until_settled(&mut model, released, 10_000.0);
    assert!(!model.is_animating());

    let panel = model.panel(id).unwrap();
    assert_eq!(panel.state(), MotionState::Idle);
    assert!(model.bounds_for(id).unwrap().contains(panel.position()));

    match cmds.as_slice() {
        [.., Cmd::MovePanel { position: moved, .. }, Cmd::PanelSettled {
            id: settled,
            position: rest,
        }] => {
            assert_eq!(*settled, id);
            assert_eq!(moved, rest);
            assert_eq!(*rest, panel.position());
        }
        other => panic!("coast did not end with a settle: {:?}", other.last()),
    }
}

#[test]
fn test_catching_a_coasting_panel() {
    let (mut model, id) = model_with_panel(PanelKind::Battery, 800.0, 400.0);
    let released = fling(&mut model, id, 40.0, 0.0, 0.0, 16.0);

    let interval = model.motion.frame_interval_ms;
    update(&mut model, Msg::tick(released + interval));
    update(&mut model, Msg::tick(released + 2.0 * interval));
    let caught_at = model.panel(id).unwrap().position();

    let now = released + 2.5 * interval;
    update(
        &mut model,
        Msg::pointer_down(id, caught_at.x + 5.0, caught_at.y + 5.0, now),
    );

    let panel = model.panel(id).unwrap();
    assert!(panel.is_dragging());
    assert!(!panel.scheduler.is_running());
    assert!(!model.is_animating());
    assert_eq!(update(&mut model, Msg::tick(now + 100.0)), None);
    assert_eq!(model.panel(id).unwrap().position(), caught_at);
}

#[test]
fn test_stall_replays_at_most_a_few_frames() {
    let (mut model, id) = model_with_panel(PanelKind::Battery, 800.0, 400.0);
    let released = fling(&mut model, id, 40.0, 0.0, 0.0, 16.0);

    let now = released + 1_000.0;
    let cmd = update(&mut model, Msg::tick(now)).unwrap();
    let moves = cmd
        .flatten()
        .into_iter()
        .filter(|c| matches!(c, Cmd::MovePanel { .. }))
        .count();

    assert_eq!(moves, MAX_CATCH_UP_TICKS as usize);
    assert!(model.next_deadline_ms().unwrap() > now);
}

#[test]
fn test_panels_coast_independently() {
    let mut model = test_model();
    let battery = model.add_panel(PanelSpec::new(
        PanelKind::Battery,
        Anchor::Custom { x: 800.0, y: 400.0 },
    ));
    let music = model.add_panel(PanelSpec::new(
        PanelKind::Music,
        Anchor::Custom { x: 100.0, y: 100.0 },
    ));

    let released = fling(&mut model, battery, -30.0, 25.0, 0.0, 16.0);
    let (cmds, _) = run_until_settled(&mut model, released, 10_000.0);

    assert!(!cmds.is_empty());
    for cmd in &cmds {
        match cmd {
            Cmd::MovePanel { id, .. } | Cmd::PanelSettled { id, .. } => assert_eq!(*id, battery),
            other => panic!("unexpected command {:?}", other),
        }
    }
    let music = model.panel(music).unwrap();
    assert_eq!(music.position(), Point::new(100.0, 100.0));
    assert_eq!(music.state(), MotionState::Idle);
}

// ========================================================================
// Display changes
// ========================================================================

#[test]
fn test_display_shrink_pulls_idle_panel_back() {
    let (mut model, id) = model_with_panel(PanelKind::Battery, 1700.0, 800.0);

    let cmd = update(
        &mut model,
        Msg::App(AppMsg::DisplayGeometryChanged(ScreenRect::new(
            0.0, 0.0, 1280.0, 720.0,
        ))),
    )
    .unwrap();

    assert_eq!(cmd.final_position(id), Some(Point::new(1080.0, 520.0)));
    assert_eq!(model.panel(id).unwrap().position(), Point::new(1080.0, 520.0));
}

#[test]
fn test_display_change_mid_coast_bounds_the_rest_of_it() {
    let (mut model, id) = model_with_panel(PanelKind::Battery, 1500.0, 400.0);
    let released = fling(&mut model, id, 30.0, 0.0, 0.0, 16.0);

    let small = ScreenRect::new(0.0, 0.0, 1280.0, 720.0);
    let cmd = update(&mut model, Msg::App(AppMsg::DisplayGeometryChanged(small)));
    // Coasting panels are left to the next step
    assert_eq!(cmd, None);

    let (cmds, _) = run_until_settled(&mut model, released, 10_000.0);
    let bounds = model.bounds_for(id).unwrap();
    assert_eq!(bounds.right, 1080.0);
    for cmd in cmds {
        if let Cmd::MovePanel { position, .. } = cmd {
            assert!(bounds.contains(position), "{:?} outside {:?}", position, bounds);
        }
    }
}

#[test]
fn test_same_display_is_a_no_op() {
    let (mut model, _) = model_with_panel(PanelKind::Battery, 1700.0, 800.0);
    let cmd = update(
        &mut model,
        Msg::App(AppMsg::DisplayGeometryChanged(common::SCREEN)),
    );
    assert_eq!(cmd, None);
}
