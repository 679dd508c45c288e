use super::{gl, NotSync};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}
impl Color {
    /// All channels zero, including alpha.
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
}
impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Color { r, g, b, a }
    }
}

bitflags::bitflags! {
    /// Which buffers of the draw framebuffer a `glClear` touches.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearMask: gl::types::GLbitfield {
        const COLOR = gl::COLOR_BUFFER_BIT;
        const DEPTH = gl::DEPTH_BUFFER_BIT;
        const STENCIL = gl::STENCIL_BUFFER_BIT;
    }
}

/// A flag returned by `glGetError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorFlag {
    #[error("invalid enum")]
    InvalidEnum,
    #[error("invalid value")]
    InvalidValue,
    #[error("invalid operation")]
    InvalidOperation,
    #[error("invalid framebuffer operation")]
    InvalidFramebufferOperation,
    #[error("out of memory")]
    OutOfMemory,
    #[error("unknown error 0x{0:x}")]
    Unknown(gl::types::GLenum),
}
impl ErrorFlag {
    /// `None` for `GL_NO_ERROR`.
    #[must_use]
    pub fn from_gl(value: gl::types::GLenum) -> Option<Self> {
        Some(match value {
            gl::NO_ERROR => return None,
            gl::INVALID_ENUM => Self::InvalidEnum,
            gl::INVALID_VALUE => Self::InvalidValue,
            gl::INVALID_OPERATION => Self::InvalidOperation,
            gl::INVALID_FRAMEBUFFER_OPERATION => Self::InvalidFramebufferOperation,
            gl::OUT_OF_MEMORY => Self::OutOfMemory,
            other => Self::Unknown(other),
        })
    }
}

/// Upper bound on flags read by [`State::drain_errors`]. A lost context can report
/// an error on every call.
const MAX_DRAINED_ERRORS: usize = 16;

/// Read and write global state.
pub struct State(pub(crate) NotSync);
impl State {
    /// What color value to clear color buffers to in a `glClear`.
    #[doc(alias = "glClearColor")]
    pub fn clear_color(&self, color: impl Into<Color>) -> &Self {
        let color = color.into();
        unsafe {
            gl::ClearColor(color.r, color.g, color.b, color.a);
        }
        self
    }
    /// Clear the buffers in `mask` of the bound draw framebuffer to their clear values.
    #[doc(alias = "glClear")]
    pub fn clear(&self, mask: ClearMask) -> &Self {
        unsafe {
            gl::Clear(mask.bits());
        }
        self
    }
    /// Specifies the transform from NDC space to framebuffer space.
    /// The vertex x and y output ranges of `[-1, 1]` are mapped onto this rectangle.
    ///
    /// `min` is the lower-left. Values beyond `GLint::MAX` saturate; the GL clamps the
    /// size to its own limits anyway.
    #[doc(alias = "glViewport")]
    pub fn viewport(&self, min: [u32; 2], size: [u32; 2]) -> &Self {
        let int = |value: u32| gl::types::GLint::try_from(value).unwrap_or(gl::types::GLint::MAX);
        unsafe {
            gl::Viewport(int(min[0]), int(min[1]), int(size[0]), int(size[1]));
        }
        self
    }
    /// Pop every pending error flag, oldest first.
    #[doc(alias = "glGetError")]
    #[must_use]
    pub fn drain_errors(&self) -> Vec<ErrorFlag> {
        std::iter::from_fn(|| ErrorFlag::from_gl(unsafe { gl::GetError() }))
            .take(MAX_DRAINED_ERRORS)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_error_is_none() {
        assert_eq!(ErrorFlag::from_gl(gl::NO_ERROR), None);
    }

    #[test]
    fn flags_decode() {
        assert_eq!(
            ErrorFlag::from_gl(gl::INVALID_OPERATION),
            Some(ErrorFlag::InvalidOperation)
        );
        assert_eq!(
            ErrorFlag::from_gl(0x0507).map(|e| e.to_string()),
            Some("unknown error 0x507".to_owned())
        );
    }

    #[test]
    fn color_clear_mask_is_the_gl_bit() {
        assert_eq!(ClearMask::COLOR.bits(), gl::COLOR_BUFFER_BIT);
        assert!(!ClearMask::COLOR.contains(ClearMask::DEPTH));
    }

    #[test]
    fn color_from_array() {
        assert_eq!(Color::from([0.0; 4]), Color::TRANSPARENT);
    }
}
