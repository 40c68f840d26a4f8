//! Raw window input to simulation intents.
//!
//! The platform layer forwards cursor and button callbacks to an
//! [`InputRouter`], which turns them into [`Simulation`] calls:
//!
//! | Raw input | Intent |
//! |-----------|--------|
//! | left press | `begin_selection` at the cursor, new session id |
//! | cursor move while left held | `update_selection` from anchor to cursor |
//! | left release | `end_selection` |
//! | right press | `request_move` to the cursor |
//! | F11 press | toggle debug rendering |
//!
//! Only one router may own an [`InputSurface`] at a time; a second
//! [`InputRouter::attach`] fails with [`InputError::SurfaceInUse`].

use glam::{Vec2, Vec3};
use log::{debug, info};

use crate::components::selection::SelectionRect;
use crate::error::InputError;
use crate::simulation::Simulation;

/// A window (or any pixel surface) that can deliver input callbacks.
#[derive(Debug, Clone)]
pub struct InputSurface {
    name: String,
    width: u32,
    height: u32,
    owned: bool,
}

impl InputSurface {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            owned: false,
        }
    }

    pub fn is_owned(&self) -> bool {
        self.owned
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    fn index(self) -> usize {
        match self {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
            MouseButton::Middle => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Press,
    Release,
}

/// Keys the router reacts to. Everything else is forwarded as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    F11,
    Other(i32),
}

/// Translates raw callbacks into selection drags and move requests.
#[derive(Debug)]
pub struct InputRouter {
    width: f32,
    height: f32,
    cursor: Vec2,
    pressed: [bool; 3],
    f11_held: bool,
    drag_anchor: Option<Vec2>,
    session: u32,
}

impl InputRouter {
    /// Claim `surface` for a new router.
    pub fn attach(surface: &mut InputSurface) -> Result<Self, InputError> {
        if surface.owned {
            return Err(InputError::SurfaceInUse(surface.name.clone()));
        }
        if surface.width == 0 || surface.height == 0 {
            return Err(InputError::DegenerateSurface {
                name: surface.name.clone(),
                width: surface.width,
                height: surface.height,
            });
        }
        surface.owned = true;
        info!(
            "Input router attached to '{}' ({}x{})",
            surface.name, surface.width, surface.height
        );
        Ok(Self {
            width: surface.width as f32,
            height: surface.height as f32,
            cursor: Vec2::ZERO,
            pressed: [false; 3],
            f11_held: false,
            drag_anchor: None,
            session: 0,
        })
    }

    /// Release `surface` so another router may attach.
    pub fn detach(self, surface: &mut InputSurface) {
        surface.owned = false;
        info!("Input router detached from '{}'", surface.name);
    }

    /// Follow a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.width = width as f32;
            self.height = height as f32;
        }
    }

    /// Map a pixel coordinate (origin top-left, y down) to world space.
    pub fn to_world(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(2.0 * x / self.width - 1.0, 1.0 - 2.0 * y / self.height)
    }

    /// Cursor position in world space.
    pub fn cursor_world(&self) -> Vec2 {
        self.cursor
    }

    /// Id of the most recently started drag, 0 before the first one.
    pub fn session(&self) -> u32 {
        self.session
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn cursor_moved(&mut self, simulation: &mut Simulation, x: f64, y: f64) {
        self.cursor = self.to_world(x as f32, y as f32);
        if let Some(anchor) = self.drag_anchor {
            simulation.update_selection(self.drag_rect(anchor), self.session);
        }
    }

    pub fn mouse_button(
        &mut self,
        simulation: &mut Simulation,
        button: MouseButton,
        action: ButtonAction,
    ) {
        let was_pressed = self.pressed[button.index()];
        self.pressed[button.index()] = action == ButtonAction::Press;

        match (button, action) {
            (MouseButton::Left, ButtonAction::Press) if !was_pressed => {
                self.session += 1;
                self.drag_anchor = Some(self.cursor);
                debug!("Drag {} started at {:?}", self.session, self.cursor);
                simulation.begin_selection(self.drag_rect(self.cursor), self.session);
            }
            (MouseButton::Left, ButtonAction::Release) => {
                if self.drag_anchor.take().is_some() {
                    simulation.end_selection();
                }
            }
            (MouseButton::Right, ButtonAction::Press) if !was_pressed => {
                let target = Vec3::new(self.cursor.x, self.cursor.y, 0.0);
                debug!("Move requested to {:?}", target);
                simulation.request_move(target);
            }
            _ => {}
        }
    }

    /// F11 toggles debug rendering once per physical press; key repeat is
    /// ignored until the key is released.
    pub fn key(&mut self, simulation: &mut Simulation, key: Key, action: ButtonAction) {
        if key != Key::F11 {
            return;
        }
        let was_held = self.f11_held;
        self.f11_held = action == ButtonAction::Press;
        if self.f11_held && !was_held {
            simulation.toggle_debug();
        }
    }

    fn drag_rect(&self, anchor: Vec2) -> SelectionRect {
        SelectionRect::from_corners((anchor.x, anchor.y), (self.cursor.x, self.cursor.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_attach_fails() {
        let mut surface = InputSurface::new("main", 800, 600);
        let router = InputRouter::attach(&mut surface).unwrap();
        assert!(surface.is_owned());
        assert_eq!(
            InputRouter::attach(&mut surface).unwrap_err(),
            InputError::SurfaceInUse("main".to_string())
        );
        router.detach(&mut surface);
        assert!(InputRouter::attach(&mut surface).is_ok());
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        let mut surface = InputSurface::new("tiny", 0, 600);
        assert!(matches!(
            InputRouter::attach(&mut surface),
            Err(InputError::DegenerateSurface { .. })
        ));
        assert!(!surface.is_owned());
    }

    #[test]
    fn pixel_corners_map_to_unit_square() {
        let mut surface = InputSurface::new("main", 800, 600);
        let router = InputRouter::attach(&mut surface).unwrap();
        assert_eq!(router.to_world(0.0, 0.0), Vec2::new(-1.0, 1.0));
        assert_eq!(router.to_world(800.0, 600.0), Vec2::new(1.0, -1.0));
        assert_eq!(router.to_world(400.0, 300.0), Vec2::ZERO);
    }
}
