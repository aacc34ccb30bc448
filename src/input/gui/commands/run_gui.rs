use std::time::Instant;

use log::{error, info};
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::{Fullscreen, Window, WindowBuilder},
};

use crate::input::gui::app::{GuiApp, RedrawOutcome};
use crate::input::gui::config::ViewerConfig;
use crate::input::gui::errors::GuiError;

pub struct RunGuiCommand {
    config: ViewerConfig,
}

impl RunGuiCommand {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    /// Opens the window and runs the render loop until the user exits.
    ///
    /// Startup failures are returned before the loop starts. A failure
    /// while running tears the app down, ends the loop and is returned.
    pub fn execute(self) -> Result<(), GuiError> {
        let config = self.config;
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut builder = WindowBuilder::new()
            .with_title(config.title.as_str())
            .with_inner_size(PhysicalSize::new(config.width, config.height));
        if !config.windowed {
            builder = builder.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        // Leak the window to get a 'static reference for the surface
        let window: &'static Window = Box::leak(Box::new(builder.build(&event_loop)?));
        info!(
            "window {}x{} (fullscreen: {})",
            config.width, config.height, !config.windowed
        );

        let sources = config.shader_sources()?;
        let mut app = Some(GuiApp::new(window, &event_loop, &sources, Instant::now())?);
        let mut failure: Option<GuiError> = None;

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let Some(gui) = app.as_mut() else {
                    return;
                };

                // The loop polls, so consumed events need no extra redraw request.
                let _ = gui.handle_window_event(event);

                match event {
                    WindowEvent::CloseRequested => close(&mut app, elwt),
                    WindowEvent::RedrawRequested => match gui.redraw(Instant::now()) {
                        Ok(RedrawOutcome::Continue) => {}
                        Ok(RedrawOutcome::ExitRequested) => close(&mut app, elwt),
                        Err(err) => {
                            error!("{}", err);
                            failure = Some(err);
                            close(&mut app, elwt);
                        }
                    },
                    WindowEvent::Resized(size) => {
                        if let Err(err) = gui.resize(size.width, size.height) {
                            error!("{}", err);
                            failure = Some(err);
                            close(&mut app, elwt);
                        }
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        gui.set_scale_factor(*scale_factor);
                        let size = window.inner_size();
                        if let Err(err) = gui.resize(size.width, size.height) {
                            error!("{}", err);
                            failure = Some(err);
                            close(&mut app, elwt);
                        }
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if app.is_some() {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn close(app: &mut Option<GuiApp>, elwt: &EventLoopWindowTarget<()>) {
    if let Some(app) = app.take() {
        app.shutdown();
    }
    elwt.exit();
}
