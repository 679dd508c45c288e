//! Fatal errors, and the exit codes they map to.

use crate::render::SetupError;

/// Where the program failed. Each stage has its own exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    EventLoop,
    DisplayConfig,
    Window,
    Context,
    Loader,
    Setup,
    Present,
}
impl Stage {
    pub const ALL: [Stage; 7] = [
        Stage::EventLoop,
        Stage::DisplayConfig,
        Stage::Window,
        Stage::Context,
        Stage::Loader,
        Stage::Setup,
        Stage::Present,
    ];
    /// Process exit code. Never 0, and distinct per stage.
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Stage::EventLoop => 2,
            Stage::DisplayConfig => 3,
            Stage::Window => 4,
            Stage::Context => 5,
            Stage::Loader => 6,
            Stage::Setup => 7,
            Stage::Present => 8,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to initialize the windowing library")]
    EventLoop(#[source] winit::error::EventLoopError),
    #[error("event loop has no usable display handle")]
    DisplayHandle(#[source] winit::raw_window_handle::HandleError),
    #[error("failed to query the display for GLES 3 configs")]
    DisplayConfig(#[source] glutin::error::Error),
    #[error("display offers no GLES 3 config")]
    NoDisplayConfig,
    #[error("failed to create the window")]
    Window(#[source] winit::error::OsError),
    #[error("window has no usable native handle")]
    WindowHandle(#[source] winit::raw_window_handle::HandleError),
    #[error("window has a zero-sized framebuffer ({width}x{height})")]
    ZeroSizedWindow { width: u32, height: u32 },
    #[error("failed to create the window surface")]
    Surface(#[source] glutin::error::Error),
    #[error("failed to create or activate the GL context")]
    Context(#[source] glutin::error::Error),
    #[error("context is {0}, not GLES")]
    NotGles(String),
    #[error("GL entry points failed to load: {}", .missing.join(", "))]
    Loader { missing: Vec<&'static str> },
    #[error("failed to set up the render pipeline")]
    Setup(#[from] SetupError),
    #[error("failed to present the frame")]
    Present(#[source] glutin::error::Error),
}

impl Error {
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            Error::EventLoop(_) => Stage::EventLoop,
            Error::DisplayHandle(_) | Error::DisplayConfig(_) | Error::NoDisplayConfig => {
                Stage::DisplayConfig
            }
            Error::Window(_) => Stage::Window,
            Error::WindowHandle(_)
            | Error::ZeroSizedWindow { .. }
            | Error::Surface(_)
            | Error::Context(_)
            | Error::NotGles(_) => Stage::Context,
            Error::Loader { .. } => Stage::Loader,
            Error::Setup(_) => Stage::Setup,
            Error::Present(_) => Stage::Present,
        }
    }
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        self.stage().exit_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_and_nonzero() {
        let codes: Vec<u8> = Stage::ALL.iter().map(|s| s.exit_code()).collect();
        assert!(codes.iter().all(|&c| c != 0));
        for (i, code) in codes.iter().enumerate() {
            assert!(!codes[i + 1..].contains(code), "duplicate exit code {code}");
        }
    }

    #[test]
    fn bootstrap_failures_map_to_their_stage() {
        let init = Error::EventLoop(winit::error::EventLoopError::ExitFailure(1));
        assert_eq!(init.stage(), Stage::EventLoop);

        let config = Error::NoDisplayConfig;
        assert_eq!(config.stage(), Stage::DisplayConfig);
        assert_eq!(config.exit_code(), 3);

        let zero = Error::ZeroSizedWindow {
            width: 0,
            height: 600,
        };
        assert_eq!(zero.stage(), Stage::Context);

        let loader = Error::Loader {
            missing: vec!["glCreateShader"],
        };
        assert_eq!(loader.exit_code(), Stage::Loader.exit_code());
    }

    #[test]
    fn display_config_keeps_its_cause() {
        use std::error::Error as _;

        let cause: glutin::error::Error =
            glutin::error::ErrorKind::NotSupported("no EGL on this display").into();
        let err = Error::DisplayConfig(cause);
        assert_eq!(err.exit_code(), 3);

        let source = err.source().expect("display config error has a cause");
        assert!(source.to_string().contains("no EGL on this display"));
    }

    #[test]
    fn loader_error_lists_missing_functions() {
        let err = Error::Loader {
            missing: vec!["glGenVertexArrays", "glDrawArrays"],
        };
        assert_eq!(
            err.to_string(),
            "GL entry points failed to load: glGenVertexArrays, glDrawArrays"
        );
    }

    #[test]
    fn setup_errors_use_the_setup_code() {
        let err = Error::from(SetupError::Link {
            log: "error: unresolved varying".to_owned(),
        });
        assert_eq!(err.exit_code(), 7);
    }
}
