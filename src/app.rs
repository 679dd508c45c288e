//! The `winit` application: one window, driven until it is closed.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, DeviceEvents, EventLoop},
    window::WindowId,
};

use crate::{config::WindowConfig, window::Window, Error};

pub struct App {
    config: WindowConfig,
    window: Option<Window>,
    /// The first fatal error. Once set, no window is created and the loop exits.
    error: Option<Error>,
}

impl App {
    #[must_use]
    pub fn new(config: WindowConfig) -> Self {
        Self {
            config,
            window: None,
            error: None,
        }
    }
    /// Tear down the window, if there is one. Safe to call repeatedly.
    fn close(&mut self) {
        if let Some(window) = self.window.take() {
            window.teardown();
        }
    }
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Error) {
        self.close();
        self.error.get_or_insert(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.listen_device_events(DeviceEvents::Never);
        event_loop.set_control_flow(ControlFlow::Poll);
        if self.window.is_some() || self.error.is_some() {
            return;
        }
        match Window::new(event_loop, &self.config) {
            Ok(window) => self.window = Some(window),
            Err(err) => self.fail(event_loop, err),
        }
    }
    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        let Some(window) = &mut self.window else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => {
                window.request_close();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => window.resize(size),
            WindowEvent::RedrawRequested => {
                if let Err(err) = window.redraw() {
                    self.fail(event_loop, err);
                }
            }
            _ => (),
        }
    }
    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
    fn suspended(&mut self, _: &ActiveEventLoop) {
        self.close();
    }
    fn exiting(&mut self, _: &ActiveEventLoop) {
        self.close();
    }
}

/// Open the window and run until it is closed, or something fails.
pub fn run(config: WindowConfig) -> Result<(), Error> {
    let event_loop = EventLoop::builder().build().map_err(Error::EventLoop)?;
    let mut app = App::new(config);
    let ran = event_loop.run_app(&mut app);

    // A failure recorded inside the loop is the cause of any exit error.
    if let Some(err) = app.error.take() {
        return Err(err);
    }
    ran.map_err(Error::EventLoop)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_without_a_window() {
        let mut app = App::new(WindowConfig::default());
        assert!(app.window.is_none());
        assert!(app.error.is_none());
        // Nothing to tear down, and nothing breaks doing it twice.
        app.close();
        app.close();
        assert!(app.window.is_none());
    }
}
