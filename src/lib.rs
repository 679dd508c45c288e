//! # gl-axes
//!
//! Opens a window and draws a two-line axis cross with OpenGL ES 3.0.
//!
//! The crate is split in two layers:
//!
//! * A thin, type-state GL layer ([`Gl`], [`new`], [`slot`], [`draw`], [`state`], and the
//!   handle modules [`buffer`], [`program`], [`vertex_array`]). Every wrapper is a transparent
//!   projection of a GL call; the borrow checker is used to prove that the right objects are
//!   bound before a call that depends on them, at no run-time cost.
//! * The application: [`window`] bootstraps the window and context, [`scene`] holds the
//!   static geometry and shaders, [`render`] owns the GL objects built from it, [`frame`]
//!   tracks the render loop, and [`app`] wires all of it to the `winit` event loop.
//!
//! ## Doc Aliases
//! GL functionality is spread across several namespaces. Wrappers carry
//! `#[doc(alias = ...)]` with the exact GL function name, so searching the docs for e.g.
//! `glVertexAttribPointer` finds [`slot::vertex_array::Active::attribute`].

#![warn(rustdoc::all)]

use gl::types::{GLenum, GLsizei, GLuint};
use std::num::NonZero;
type NonZeroName = NonZero<GLuint>;

pub mod gl {
    #![doc(hidden)]
    #![allow(clippy::all)]
    include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));
}

pub use slot::marker;

pub mod buffer;
pub mod draw;
pub mod new;
pub mod program;
pub mod slot;
pub mod state;
pub mod vertex_array;

pub mod app;
pub mod config;
pub mod error;
pub mod frame;
pub mod logging;
pub mod render;
pub mod scene;
pub mod viewport;
pub mod window;

pub use error::Error;

/// Entry point for GL calls.
#[allow(clippy::manual_non_exhaustive)]
pub struct Gl {
    /// `glBindBuffer`
    pub buffer: slot::buffer::Slots,
    /// `glBindVertexArray`
    pub vertex_array: slot::vertex_array::Slot,
    /// `glGen*`, `glCreate*`
    pub new: new::New,
    /// `glUseProgram`
    pub program: slot::program::Slot,
    /// `glDraw*`
    pub draw: draw::Draw,
    /// Clear values, viewport, error flags.
    pub state: state::State,
    _cant_destructure: (),
}
impl Gl {
    /// Create a wrapper for the currently bound context.
    /// This is a no-op function, and is free to recreate every frame.
    ///
    /// # Safety
    /// * There must be a current GL context on the calling thread, of version ES3.0 or later.
    /// * The `gl` module must have been initialized with [`gl::load_with`].
    /// * That context must stay current on this thread for as long as `Self`, or anything
    ///   derived from it, is used.
    /// * There must be no other `Self` object alive for this context.
    #[must_use]
    pub unsafe fn current() -> Self {
        use slot::{buffer, program, vertex_array};
        use std::marker::PhantomData;

        Self {
            buffer: buffer::Slots {
                array: buffer::Slot(PhantomData, PhantomData),
            },
            vertex_array: vertex_array::Slot(PhantomData),
            new: new::New(PhantomData),
            program: program::Slot(PhantomData),
            draw: draw::Draw(PhantomData),
            state: state::State(PhantomData),
            _cant_destructure: (),
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// # Safety
/// * A pointer to `self` must be safely readable and writable as `NonZero<GLuint>`.
/// * A value of `NonZero<GLuint>` is a fully-initialized value of `self`.
pub unsafe trait ThinGLObject: sealed::Sealed + Sized {
    /// Fetch the "name" of the object, the unique ID used to interact with the GL.
    ///
    /// # Safety
    /// The name must not be used to change the object's state behind the type-state's back,
    /// e.g. by deleting it or relinking a program.
    unsafe fn name(&self) -> NonZeroName {
        // Safety - the trait precondition.
        unsafe { *std::ptr::from_ref(self).cast() }
    }
    /// Export the `GLuint` name, losing the typestate.
    #[must_use = "dropping a gl handle leaks resources"]
    fn into_name(self) -> NonZeroName {
        // Safety - the name leaves the type-state system here.
        let name = unsafe { self.name() };
        std::mem::forget(self);
        name
    }
}

/// Trait for rusty `GLenum`s.
///
/// # Safety
/// * Must be implemented only on enums.
/// * The enum must be `#[repr(u32)]`
/// * Every variant must be a correct constant of `GLenum`.
pub unsafe trait GLEnum {
    /// Access the raw `GLenum` value of this enum.
    fn as_gl(&self) -> GLenum {
        unsafe { *std::ptr::from_ref(self).cast() }
    }
}

/// # Safety
/// * The context associated with `gl_gen` must be current on the calling thread.
/// * `gl_gen` must be the appropriate GL generator for objects of type `T`.
/// * `gl_gen` must populate the range given by length and pointer with non-zero values.
unsafe fn gl_gen_with<const N: usize, T: ThinGLObject>(
    gl_gen: unsafe fn(GLsizei, *mut GLuint),
) -> [T; N] {
    const { assert!(N <= GLsizei::MAX as _) };
    let mut names = std::mem::MaybeUninit::<[T; N]>::uninit();

    // `T` is layout-compatible with `GLuint` (ThinGLObject precondition).
    gl_gen(N as _, names.as_mut_ptr().cast());

    #[cfg(debug_assertions)]
    {
        let names = std::mem::transmute_copy::<_, std::mem::MaybeUninit<[GLuint; N]>>(&names);
        assert!(
            !names.assume_init().into_iter().any(|name| name == 0),
            "gl returned a zero object name"
        );
    }

    names.assume_init()
}

/// # Safety
/// * The context associated with `gl_delete` must be current on the calling thread.
/// * `gl_delete` must be the appropriate GL deleter for objects of type `T`.
unsafe fn gl_delete_with<const N: usize, T: ThinGLObject>(
    gl_delete: unsafe fn(GLsizei, *const GLuint),
    names: [T; N],
) {
    const { assert!(N <= GLsizei::MAX as _) };

    // The names are gone after this call, don't let `T` outlive it.
    let names = std::mem::ManuallyDrop::new(names);
    gl_delete(N as _, names.as_ptr().cast());
}

type NotSync = std::marker::PhantomData<std::cell::Cell<()>>;
