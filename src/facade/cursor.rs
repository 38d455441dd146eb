use cgmath::Point2;

use winit::event;
use winit::dpi::{PhysicalPosition, PhysicalSize};

use crate::sketch::Input;

/// Tracks the mouse and turns left button releases into clicks on the canvas
pub(super) struct Cursor {
    mouse_position: Option<PhysicalPosition<f64>>,
    size: PhysicalSize<u32>,
    canvas_size: PhysicalSize<u32>
}

impl Cursor {
    pub(super) fn new(size: &PhysicalSize<u32>, canvas_size: PhysicalSize<u32>) -> Self {
        Self {
            mouse_position: None,
            size: *size,
            canvas_size
        }
    }

    pub(super) fn handle_mouse_events(&mut self, event: &event::WindowEvent) -> Option<Input> {
        use event::WindowEvent::*;
        match event {
            CursorMoved { position, .. } => {
                self.mouse_position = Some(*position);
                None
            },
            CursorLeft { .. } => {
                self.mouse_position = None;
                None
            },
            // A click registers when the button comes back up
            MouseInput {
                state: event::ElementState::Released,
                button: event::MouseButton::Left,
                ..
            } => {
                let pos = self.physical_position_to_canvas_space()?;
                Some(Input::Click { x: pos.x, y: pos.y })
            },
            _ => None
        }
    }

    pub(super) fn handle_resize(&mut self, size: &PhysicalSize<u32>) {
        self.size = *size;
    }

    // The canvas is stretched over the window, so scale back down to its pixels
    fn physical_position_to_canvas_space(&self) -> Option<Point2<i32>> {
        let pos = self.mouse_position?;

        if self.size.width == 0 || self.size.height == 0 {
            return None;
        }

        let x = pos.x * self.canvas_size.width as f64 / self.size.width as f64;
        let y = pos.y * self.canvas_size.height as f64 / self.size.height as f64;

        Some(Point2::new(x.floor() as i32, y.floor() as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(window: (u32, u32)) -> Cursor {
        Cursor::new(&PhysicalSize::new(window.0, window.1), PhysicalSize::new(512, 512))
    }

    #[test]
    fn unknown_position_has_no_click() {
        assert_eq!(cursor((512, 512)).physical_position_to_canvas_space(), None);
    }

    #[test]
    fn matching_sizes_map_one_to_one() {
        let mut cursor = cursor((512, 512));
        cursor.mouse_position = Some(PhysicalPosition::new(17.0, 300.6));

        assert_eq!(cursor.physical_position_to_canvas_space(), Some(Point2::new(17, 300)));
    }

    #[test]
    fn scaled_window_maps_back_to_canvas() {
        let mut cursor = cursor((1024, 1024));
        cursor.mouse_position = Some(PhysicalPosition::new(1023.0, 201.0));

        assert_eq!(cursor.physical_position_to_canvas_space(), Some(Point2::new(511, 100)));

        cursor.handle_resize(&PhysicalSize::new(256, 512));
        cursor.mouse_position = Some(PhysicalPosition::new(128.0, 128.0));

        assert_eq!(cursor.physical_position_to_canvas_space(), Some(Point2::new(256, 128)));
    }

    #[test]
    fn minimized_window_has_no_click() {
        let mut cursor = cursor((0, 0));
        cursor.mouse_position = Some(PhysicalPosition::new(1.0, 1.0));

        assert_eq!(cursor.physical_position_to_canvas_space(), None);
    }
}
