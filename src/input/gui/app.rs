//! Main GUI application loop.

use std::time::Instant;

use tracing::{error, info, warn};
use winit::{
    dpi::PhysicalSize,
    event::{Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Fullscreen, Window, WindowBuilder},
};

use crate::controllers::interactive::{FrameDecision, FrameLoop};
use crate::core::actions::cancellation::{Cancelled, Deadline};
use crate::core::actions::render_frame::render_frame_cancelable;
use crate::core::scene::SceneComposer;
use crate::core::variants::{DisplayMode, VariantConfig, VariantConfigError};
use crate::input::gui::errors::GuiError;
use crate::input::gui::keys::KeyState;
use crate::presenters::pixels::PixelsPresenter;

/// Opens the variant's window and renders one frame per redraw until Escape,
/// a close request, or the variant's auto-quit deadline.
///
/// Returns once the window has closed.
pub fn run_gui(config: VariantConfig) -> Result<(), GuiError> {
    config.validate()?;
    let composer = SceneComposer::new(config.scene).map_err(VariantConfigError::from)?;

    let event_loop = EventLoop::new()?;

    let builder = WindowBuilder::new().with_title(config.variant.display_name());
    let builder = match config.display {
        DisplayMode::Fullscreen => builder.with_fullscreen(Some(Fullscreen::Borderless(None))),
        DisplayMode::Windowed { width, height } => {
            builder.with_inner_size(PhysicalSize::new(width, height))
        }
    };

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(builder.build(&event_loop)?));

    let mut presenter = PixelsPresenter::new(window)?;
    let mut frame_loop = FrameLoop::new(&config);
    let mut keys = KeyState::default();
    let mut failure: Option<GuiError> = None;

    let start = Instant::now();
    let deadline = Deadline::new(start, frame_loop.auto_quit());

    info!(variant = %config.variant, "window opened");

    event_loop.run(|event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    frame_loop.request_quit();
                    elwt.exit();
                }
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(key_code),
                            state,
                            ..
                        },
                    ..
                } => {
                    keys.handle_key_event(key_code, state);
                    if keys.quit_pending() {
                        frame_loop.request_quit();
                    }
                }
                WindowEvent::Focused(false) => keys.release_all(),
                WindowEvent::Resized(size) => {
                    if let Err(err) = presenter.resize(size.width, size.height) {
                        error!(%err, "resize failed");
                        failure = Some(err.into());
                        elwt.exit();
                    }
                }
                WindowEvent::RedrawRequested => {
                    let Some(resolution) = presenter.resolution() else {
                        return;
                    };

                    let state = match frame_loop.begin_frame(
                        start.elapsed(),
                        resolution,
                        keys.snapshot(),
                    ) {
                        FrameDecision::Render(state) => state,
                        FrameDecision::Quit => {
                            elwt.exit();
                            return;
                        }
                    };

                    let shader = composer.frame(&state);

                    match render_frame_cancelable(resolution, &shader, &deadline) {
                        Ok(frame) => {
                            if let Err(err) = presenter.present(&frame) {
                                error!(%err, "present failed");
                                failure = Some(err.into());
                                elwt.exit();
                            }
                        }
                        Err(Cancelled) => {
                            warn!(t = state.elapsed_seconds, "frame discarded at auto-quit");
                        }
                    }
                }
                _ => {}
            },
            Event::AboutToWait => window.request_redraw(),
            _ => {}
        }
    })?;

    info!(
        frames = frame_loop.frames_started(),
        elapsed_secs = start.elapsed().as_secs_f64(),
        "window closed"
    );

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
