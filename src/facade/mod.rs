mod cursor;
mod state;
mod vertex;

use winit::{
    dpi::PhysicalSize,
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder
};

use crate::config::Config;
use crate::err;
use crate::sketch::{Flow, Input, Sketch};

pub(crate) async fn run(config: Config, mut sketch: Sketch) -> err::Result<()> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(PhysicalSize::new(config.width, config.height))
        .with_resizable(false)
        .build(&event_loop)?;

    // Initialize
    let mut state = state::State::new(&window, sketch.framebuffer()).await?;
    let mut cursor = cursor::Cursor::new(
        &state.size,
        PhysicalSize::new(config.width, config.height)
    );

    log::info!("Window open, click twice to draw a line");

    event_loop.run(move |event, _, control_flow| {
        match event {
            // Nothing animates, so only wake up for input
            Event::NewEvents(StartCause::Init) => {
                *control_flow = ControlFlow::Wait;
            },
            Event::RedrawRequested(window_id) if window_id == window.id() => {
                state.update(sketch.framebuffer());

                match state.render() {
                    Ok(..) => {  },
                    Err(wgpu::SurfaceError::Lost) => state.redraw(),
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory while rendering, exiting");
                        *control_flow = ControlFlow::Exit
                    },
                    Err(e) => log::warn!("{:?}", e)
                }
            },
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let input = match event {
                    // Handle close behavior
                    WindowEvent::CloseRequested | WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                state: ElementState::Pressed,
                                virtual_keycode: Some(VirtualKeyCode::Escape),
                                ..
                            },
                        ..
                    } => Some(Input::Quit),

                    // Resizing
                    WindowEvent::Resized(physical_size) => {
                        state.resize(*physical_size);
                        cursor.handle_resize(physical_size);
                        None
                    },

                    // Adjust inner size
                    WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                        state.resize(**new_inner_size);
                        cursor.handle_resize(&**new_inner_size);
                        None
                    },
                    _ => cursor.handle_mouse_events(event)
                };

                if let Some(input) = input {
                    match sketch.handle(input) {
                        Flow::Redraw => window.request_redraw(),
                        Flow::Quit => {
                            log::info!("Closing");
                            *control_flow = ControlFlow::Exit
                        }
                    }
                }
            },
            _ => {}
        }
    })
}
