/// Mapping from winit events to the logical input state.

use winit::event::{DeviceEvent, ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use super::input_state::{InputState, Key};

/// Logical key bound to a physical key code
///
/// Both QWERTY (W/A/S/D) and AZERTY (Z/Q/S/D) layouts are bound, plus arrows.
pub fn key_for(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::ArrowUp | KeyCode::KeyW | KeyCode::KeyZ => Some(Key::Forward),
        KeyCode::ArrowDown | KeyCode::KeyS => Some(Key::Backward),
        KeyCode::ArrowLeft | KeyCode::KeyA | KeyCode::KeyQ => Some(Key::StrafeLeft),
        KeyCode::ArrowRight | KeyCode::KeyD => Some(Key::StrafeRight),
        _ => None,
    }
}

impl InputState {
    /// Feed one window event
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.request_quit(),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key_event(event),
            WindowEvent::CursorMoved { position, .. } => {
                self.set_mouse_position(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.set_mouse_button(*button, *state == ElementState::Pressed);
            }
            WindowEvent::Resized(size) => self.request_resize(size.width, size.height),
            _ => {}
        }
    }

    /// Feed one raw device event (relative mouse motion)
    pub fn handle_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.add_mouse_motion(delta.0 as f32, delta.1 as f32);
        }
    }

    fn handle_key_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let pressed = event.state == ElementState::Pressed;
        if code == KeyCode::Escape && pressed {
            self.request_quit();
            return;
        }
        if let Some(key) = key_for(code) {
            self.set_key(key, pressed);
        }
    }
}
