use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::core::data::Vec2;
use crate::core::viewport::{GuiGates, HeldKeys, InputSnapshot, PointerButton};

/// Trackpads report pixels; the viewport expects wheel lines.
const PIXELS_PER_SCROLL_LINE: f32 = 20.0;

/// Accumulates winit events between frames.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WinitInputState {
    keys: HeldKeys,
    cursor: Vec2,
    left_held: bool,
    left_pressed_edge: bool,
    left_released_edge: bool,
    scroll_lines: f32,
}

impl WinitInputState {
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    self.handle_key_event(key_code, event.state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => self.handle_cursor_moved(*position),
            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_button(*button, *state);
            }
            WindowEvent::MouseWheel { delta, .. } => self.handle_mouse_wheel(*delta),
            WindowEvent::Focused(false) => self.reset(),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match key_code {
            KeyCode::ArrowUp => self.keys.up = pressed,
            KeyCode::ArrowDown => self.keys.down = pressed,
            KeyCode::KeyW => self.keys.w = pressed,
            KeyCode::KeyA => self.keys.a = pressed,
            KeyCode::KeyS => self.keys.s = pressed,
            KeyCode::KeyD => self.keys.d = pressed,
            _ => {}
        }
    }

    pub fn handle_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = Vec2::new(position.x as f32, position.y as f32);
    }

    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button != MouseButton::Left {
            return;
        }

        match state {
            ElementState::Pressed if !self.left_held => {
                self.left_held = true;
                self.left_pressed_edge = true;
            }
            ElementState::Released if self.left_held => {
                self.left_held = false;
                self.left_released_edge = true;
            }
            _ => {}
        }
    }

    pub fn handle_mouse_wheel(&mut self, delta: MouseScrollDelta) {
        self.scroll_lines += match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_SCROLL_LINE,
        };
    }

    /// Builds this frame's snapshot and clears scroll and button edges.
    pub fn snapshot(&mut self, viewport_size: Vec2, gui: GuiGates) -> InputSnapshot {
        let snapshot = InputSnapshot {
            scroll_y: self.scroll_lines,
            keys: self.keys,
            cursor: self.cursor,
            viewport_size,
            left_button: PointerButton {
                pressed: self.left_pressed_edge,
                released: self.left_released_edge,
                held: self.left_held,
            },
            gui,
        };

        self.scroll_lines = 0.0;
        self.left_pressed_edge = false;
        self.left_released_edge = false;
        snapshot
    }

    /// Drops held keys, buttons and pending scroll. The cursor position survives.
    pub fn reset(&mut self) {
        *self = Self {
            cursor: self.cursor,
            ..Self::default()
        };
    }
}
