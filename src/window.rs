//! The OS window, its GL surface and context, and everything drawn into it.

use std::{ffi::CString, num::NonZeroU32};

use glutin::{
    config::{Api, Config, ConfigTemplateBuilder},
    context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext, Version},
    display::{Display, DisplayApiPreference, GlDisplay},
    prelude::*,
    surface::{Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface},
};
use winit::{
    dpi::PhysicalSize,
    event_loop::ActiveEventLoop,
    raw_window_handle::{HasDisplayHandle, HasWindowHandle},
    window::WindowAttributes,
};

use crate::{
    config::{WindowConfig, GLES_VERSION},
    frame::FrameLoop,
    gl,
    render::Renderer,
    viewport::{Viewport, ViewportTracker},
    Error, Gl,
};

macro_rules! entry_points {
    ($($name:ident),* $(,)?) => {
        /// Every GL function called anywhere in the crate, and whether the loader found it.
        fn entry_points() -> Vec<(&'static str, bool)> {
            vec![$((concat!("gl", stringify!($name)), gl::$name::is_loaded())),*]
        }
    };
}

entry_points!(
    AttachShader,
    BindBuffer,
    BindVertexArray,
    BufferData,
    Clear,
    ClearColor,
    CompileShader,
    CreateProgram,
    CreateShader,
    DeleteBuffers,
    DeleteProgram,
    DeleteShader,
    DeleteVertexArrays,
    DetachShader,
    DisableVertexAttribArray,
    DrawArrays,
    EnableVertexAttribArray,
    GenBuffers,
    GenVertexArrays,
    GetError,
    GetIntegerv,
    GetProgramInfoLog,
    GetProgramiv,
    GetShaderInfoLog,
    GetShaderiv,
    LinkProgram,
    ShaderSource,
    UseProgram,
    VertexAttribPointer,
    Viewport,
);

fn missing_entry_points(
    loaded: impl IntoIterator<Item = (&'static str, bool)>,
) -> Vec<&'static str> {
    loaded
        .into_iter()
        .filter_map(|(name, loaded)| (!loaded).then_some(name))
        .collect()
}

/// The first of `configs` with the fewest samples per pixel; lines need no multisampling.
fn fewest_samples<C>(
    configs: impl IntoIterator<Item = C>,
    samples: impl Fn(&C) -> u8,
) -> Option<C> {
    configs.into_iter().reduce(|best, config| {
        if samples(&config) < samples(&best) {
            config
        } else {
            best
        }
    })
}

#[cfg(target_os = "macos")]
const DISPLAY_API: DisplayApiPreference = DisplayApiPreference::Cgl;
#[cfg(not(target_os = "macos"))]
const DISPLAY_API: DisplayApiPreference = DisplayApiPreference::Egl;

/// Open the GL display of the event loop and choose a GLES3 config on it.
fn choose_config(event_loop: &ActiveEventLoop) -> Result<(Display, Config), Error> {
    let raw_display = event_loop
        .display_handle()
        .map_err(Error::DisplayHandle)?
        .as_raw();
    // Safety: the handle comes from the live event loop, which outlives every window.
    let display =
        unsafe { Display::new(raw_display, DISPLAY_API) }.map_err(Error::DisplayConfig)?;

    let template = ConfigTemplateBuilder::new().with_api(Api::GLES3).build();
    // Safety: no window is tied to the template.
    let configs = unsafe { display.find_configs(template) }.map_err(Error::DisplayConfig)?;
    let config = fewest_samples(configs, |config: &Config| config.num_samples())
        .ok_or(Error::NoDisplayConfig)?;

    Ok((display, config))
}

/// A window with a current GLES context, and the scene ready to draw into it.
pub struct Window {
    // Field order: surface, then context, then window.
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: winit::window::Window,

    gl: Gl,
    renderer: Renderer,
    viewport: ViewportTracker,
    frames: FrameLoop,
}

impl Window {
    /// Create the window, surface and context, load the GL, and set up the scene.
    pub fn new(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self, Error> {
        let (display, gl_config) = choose_config(event_loop)?;

        let window = glutin_winit::finalize_window(
            event_loop,
            WindowAttributes::default()
                .with_title(config.title.clone())
                .with_inner_size(PhysicalSize::new(config.width, config.height))
                .with_resizable(true),
            &gl_config,
        )
        .map_err(Error::Window)?;

        let rwh = window.window_handle().map_err(Error::WindowHandle)?.as_raw();

        let size = window.inner_size();
        let (width, height) = Viewport::from_size(size)
            .surface_size()
            .ok_or(Error::ZeroSizedWindow {
                width: size.width,
                height: size.height,
            })?;

        // Safety: `rwh` belongs to `window`, which outlives the surface.
        let surface = unsafe {
            display.create_window_surface(
                &gl_config,
                &SurfaceAttributesBuilder::<WindowSurface>::new().build(rwh, width, height),
            )
        }
        .map_err(Error::Surface)?;

        let (major, minor) = GLES_VERSION;
        // Safety: as above.
        let context = unsafe {
            display.create_context(
                &gl_config,
                &ContextAttributesBuilder::new()
                    .with_context_api(ContextApi::Gles(Some(Version::new(major, minor))))
                    .build(Some(rwh)),
            )
        }
        .map_err(Error::Context)?
        .make_current(&surface)
        .map_err(Error::Context)?;

        let api = context.context_api();
        if !matches!(api, ContextApi::Gles(_)) {
            return Err(Error::NotGles(format!("{api:?}")));
        }

        // Global proc addresses. Only valid while this is the one display in use.
        gl::load_with(|symbol| {
            CString::new(symbol).map_or(std::ptr::null(), |symbol| {
                display.get_proc_address(&symbol)
            })
        });
        let missing = missing_entry_points(entry_points());
        if !missing.is_empty() {
            return Err(Error::Loader { missing });
        }

        let (mut major, mut minor) = (0, 0);
        unsafe {
            gl::GetIntegerv(gl::MAJOR_VERSION, std::ptr::addr_of_mut!(major));
            gl::GetIntegerv(gl::MINOR_VERSION, std::ptr::addr_of_mut!(minor));
        }
        log::info!("got context {api:?}, GL version {major}.{minor}");

        if let Err(err) =
            surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN))
        {
            log::warn!("failed to enable vsync: {err}");
        }

        // Safety: the context was just made current on this thread and the loader
        // ran. This is the only `Gl` for it, owned alongside the context.
        let mut gl = unsafe { Gl::current() };

        let mut viewport = ViewportTracker::default();
        if let Some(initial) = viewport.resize(size) {
            initial.apply(&gl);
        }

        let renderer = Renderer::new(&mut gl)?;

        Ok(Self {
            surface,
            context,
            window,
            gl,
            renderer,
            viewport,
            frames: FrameLoop::default(),
        })
    }
    /// Match the viewport, and the surface if it has an area, to a new framebuffer size.
    /// A size equal to the current one changes nothing.
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        let Some(viewport) = self.viewport.resize(size) else {
            return;
        };
        if let Some((width, height)) = viewport.surface_size() {
            self.surface.resize(&self.context, width, height);
        }
        viewport.apply(&self.gl);
        log::debug!("viewport resized to {}x{}", size.width, size.height);
    }
    /// Draw and present one frame. Does nothing once closing, or if a frame is in flight.
    pub fn redraw(&mut self) -> Result<(), Error> {
        if !self.frames.begin() {
            return Ok(());
        }
        self.renderer.draw(&mut self.gl);
        self.window.pre_present_notify();
        let presented = self
            .surface
            .swap_buffers(&self.context)
            .map_err(Error::Present);
        self.frames.finish();
        presented
    }
    pub fn request_redraw(&self) {
        if !self.frames.is_closing() {
            self.window.request_redraw();
        }
    }
    pub fn request_close(&mut self) {
        self.frames.request_close();
    }
    /// Release the GL objects, then the surface, the context and the window, in that order.
    pub fn teardown(self) {
        let Self {
            surface,
            context,
            window,
            mut gl,
            renderer,
            frames,
            ..
        } = self;

        renderer.teardown(&mut gl);
        drop(gl);
        drop(surface);
        drop(context);
        drop(window);
        log::info!("closed after {} frames", frames.frames());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_configs_means_no_choice() {
        assert_eq!(fewest_samples(Vec::<(u32, u8)>::new(), |c| c.1), None);
    }

    #[test]
    fn prefers_fewest_samples_then_earliest() {
        let configs = [(0, 4), (1, 0), (2, 8), (3, 0)];
        assert_eq!(fewest_samples(configs, |c| c.1), Some((1, 0)));
        assert_eq!(fewest_samples([(7, 2)], |c| c.1), Some((7, 2)));
    }

    #[test]
    fn all_loaded_means_nothing_missing() {
        let loaded = [("glClear", true), ("glDrawArrays", true)];
        assert!(missing_entry_points(loaded).is_empty());
    }

    #[test]
    fn missing_keeps_declaration_order() {
        let loaded = [
            ("glBindVertexArray", false),
            ("glClear", true),
            ("glGenVertexArrays", false),
        ];
        assert_eq!(
            missing_entry_points(loaded),
            ["glBindVertexArray", "glGenVertexArrays"]
        );
    }

    #[test]
    fn every_entry_point_is_listed_once() {
        // Not loaded in tests, but the names are still there to check.
        let names: Vec<&str> = entry_points().into_iter().map(|(name, _)| name).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(name.starts_with("gl"));
            assert!(!names[i + 1..].contains(name), "{name} listed twice");
        }
        assert!(names.contains(&"glDrawArrays"));
        assert!(names.contains(&"glVertexAttribPointer"));
    }
}
