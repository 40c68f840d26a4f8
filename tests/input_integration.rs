//! Input router integration tests: raw cursor and button callbacks driving
//! selection drags and move requests on a running simulation.

use bevy_ecs::prelude::*;
use glam::{Vec2, Vec3};

use rtsengine::components::job::Job;
use rtsengine::components::selection::Selection;
use rtsengine::error::InputError;
use rtsengine::input::{ButtonAction, InputRouter, InputSurface, Key, MouseButton};
use rtsengine::simulation::Simulation;

const DT: f32 = 0.05;

fn setup() -> (Simulation, InputSurface, InputRouter) {
    let mut surface = InputSurface::new("main", 800, 600);
    let router = InputRouter::attach(&mut surface).unwrap();
    (Simulation::default(), surface, router)
}

fn selected(sim: &Simulation, e: Entity) -> bool {
    sim.world().get::<Selection>(e).is_some()
}

#[test]
fn second_router_on_same_surface_is_fatal() {
    let (_sim, mut surface, _router) = setup();
    let err = InputRouter::attach(&mut surface).unwrap_err();
    assert_eq!(err, InputError::SurfaceInUse("main".to_string()));
    assert_eq!(err.to_string(), "input surface 'main' is already in use");
}

#[test]
fn left_drag_selects_units_under_the_box() {
    let (mut sim, _surface, mut router) = setup();
    // (-0.5, 0.5) in world space is pixel (200, 150).
    let inside = sim.spawn_unit(Vec3::new(-0.5, 0.5, 0.0), Vec3::ZERO);
    let outside = sim.spawn_unit(Vec3::new(0.5, -0.5, 0.0), Vec3::ZERO);

    router.cursor_moved(&mut sim, 0.0, 0.0);
    router.mouse_button(&mut sim, MouseButton::Left, ButtonAction::Press);
    assert!(sim.is_selecting());
    assert_eq!(router.session(), 1);
    router.cursor_moved(&mut sim, 400.0, 300.0);
    sim.advance(DT);

    assert!(selected(&sim, inside));
    assert!(!selected(&sim, outside));

    router.mouse_button(&mut sim, MouseButton::Left, ButtonAction::Release);
    assert!(!sim.is_selecting());
    assert!(!router.is_dragging());
    sim.advance(DT);
    assert!(selected(&sim, inside));
}

#[test]
fn click_without_drag_clears_selection() {
    let (mut sim, _surface, mut router) = setup();
    let e = sim.spawn_unit(Vec3::ZERO, Vec3::ZERO);
    sim.world_mut()
        .entity_mut(e)
        .insert(Selection::default());

    router.cursor_moved(&mut sim, 100.0, 100.0);
    router.mouse_button(&mut sim, MouseButton::Left, ButtonAction::Press);
    router.mouse_button(&mut sim, MouseButton::Left, ButtonAction::Release);
    // The drag already ended, so the zero-size box is never scanned.
    sim.advance(DT);
    assert!(selected(&sim, e));

    router.mouse_button(&mut sim, MouseButton::Left, ButtonAction::Press);
    sim.advance(DT);
    assert!(!selected(&sim, e));
}

#[test]
fn repeated_press_does_not_start_a_new_drag() {
    let (mut sim, _surface, mut router) = setup();
    router.mouse_button(&mut sim, MouseButton::Left, ButtonAction::Press);
    router.mouse_button(&mut sim, MouseButton::Left, ButtonAction::Press);
    assert_eq!(router.session(), 1);
    router.mouse_button(&mut sim, MouseButton::Left, ButtonAction::Release);
    router.mouse_button(&mut sim, MouseButton::Left, ButtonAction::Press);
    assert_eq!(router.session(), 2);
}

#[test]
fn right_click_requests_move_to_cursor() {
    let (mut sim, _surface, mut router) = setup();
    let e = sim.spawn_unit(Vec3::ZERO, Vec3::ZERO);

    router.cursor_moved(&mut sim, 600.0, 150.0);
    assert_eq!(router.cursor_world(), Vec2::new(0.5, 0.5));
    router.mouse_button(&mut sim, MouseButton::Right, ButtonAction::Press);
    router.mouse_button(&mut sim, MouseButton::Right, ButtonAction::Press);
    assert_eq!(sim.pending_jobs(), 1);

    sim.advance(DT);
    assert_eq!(
        sim.world().get::<Job>(e).map(|j| j.target),
        Some(Vec3::new(0.5, 0.5, 0.0))
    );
}

#[test]
fn f11_toggles_debug_mode() {
    let (mut sim, _surface, mut router) = setup();
    router.key(&mut sim, Key::Other(32), ButtonAction::Press);
    assert!(!sim.is_debug());
    router.key(&mut sim, Key::F11, ButtonAction::Press);
    assert!(sim.is_debug());
    router.key(&mut sim, Key::F11, ButtonAction::Release);
    assert!(sim.is_debug());
    router.key(&mut sim, Key::F11, ButtonAction::Press);
    assert!(!sim.is_debug());
}

#[test]
fn held_f11_toggles_only_once() {
    let (mut sim, _surface, mut router) = setup();
    router.key(&mut sim, Key::F11, ButtonAction::Press);
    router.key(&mut sim, Key::F11, ButtonAction::Press);
    assert!(sim.is_debug());
    router.key(&mut sim, Key::F11, ButtonAction::Release);
    router.key(&mut sim, Key::F11, ButtonAction::Release);
    assert!(sim.is_debug());
}

#[test]
fn resize_changes_pixel_mapping() {
    let (_sim, _surface, mut router) = setup();
    router.resize(400, 400);
    assert_eq!(router.to_world(200.0, 200.0), Vec2::ZERO);
    router.resize(0, 100);
    assert_eq!(router.to_world(400.0, 0.0), Vec2::new(1.0, 1.0));
}
