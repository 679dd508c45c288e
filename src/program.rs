//! Types and parameter enums for Shaders and Programs.
use crate::ThinGLObject;

use super::{gl, GLenum, NonZeroName};

/// Marker trait for the shader stages.
pub trait Type: crate::sealed::Sealed + std::fmt::Debug + 'static {
    const TYPE: GLenum;
    /// Human readable stage name, for diagnostics.
    const NAME: &'static str;
}

macro_rules! target {
    (pub struct $marker:ident = $value:ident, $name:literal) => {
        #[doc = "Marker for `"]
        #[doc = stringify!($value)]
        #[doc = "`"]
        #[derive(Debug)]
        pub struct $marker;
        impl crate::sealed::Sealed for $marker {}
        impl Type for $marker {
            const TYPE: GLenum = gl::$value;
            const NAME: &'static str = $name;
        }
    };
}

target!(pub struct Vertex = VERTEX_SHADER, "vertex");
target!(pub struct Fragment = FRAGMENT_SHADER, "fragment");

pub enum ProgramShaders<'a> {
    Graphics {
        vertex: &'a CompiledShader<Vertex>,
        /// GLES requires a fragment shader.
        fragment: &'a CompiledShader<Fragment>,
    },
}

/// `glCreate*` handed back the zero name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CreateError {
    #[error("gl failed to create a {0} shader object")]
    Shader(&'static str),
    #[error("gl failed to create a program object")]
    Program,
}

/// A shader which has no source code, or failed to compile it.
#[repr(transparent)]
#[must_use = "dropping a gl handle leaks resources"]
#[derive(Debug)]
pub struct EmptyShader<Ty: Type>(pub(crate) NonZeroName, pub(crate) core::marker::PhantomData<Ty>);
impl<Ty: Type> EmptyShader<Ty> {
    /// Convert the typestate without checking for correctness.
    ///
    /// # Safety
    /// If `glGetShaderiv(self, GL_COMPILE_STATUS)` would return `true`, this is safe.
    pub unsafe fn into_compiled_unchecked(self) -> CompiledShader<Ty> {
        CompiledShader(self.into_name(), core::marker::PhantomData)
    }
}

impl<Ty: Type> crate::sealed::Sealed for EmptyShader<Ty> {}
// # Safety
// Repr(transparent) over a NonZero<u32> (and a ZST), so can safely transmute.
unsafe impl<Ty: Type> crate::ThinGLObject for EmptyShader<Ty> {}

/// A shader which has been successfully compiled.
#[repr(transparent)]
#[must_use = "dropping a gl handle leaks resources"]
#[derive(Debug)]
pub struct CompiledShader<Ty: Type>(pub(crate) NonZeroName, core::marker::PhantomData<Ty>);

impl<Ty: Type> crate::sealed::Sealed for CompiledShader<Ty> {}
// # Safety
// Repr(transparent) over a NonZero<u32> (and a ZST), so can safely transmute.
unsafe impl<Ty: Type> crate::ThinGLObject for CompiledShader<Ty> {}

/// Forget the compiled status of the shader.
impl<Ty: Type> From<CompiledShader<Ty>> for EmptyShader<Ty> {
    fn from(value: CompiledShader<Ty>) -> Self {
        EmptyShader(value.into_name(), core::marker::PhantomData)
    }
}

/// A program which has not been linked, or failed to link.
#[repr(transparent)]
#[must_use = "dropping a gl handle leaks resources"]
#[derive(Debug)]
pub struct Program(pub(crate) NonZeroName);
impl Program {
    /// Convert the typestate without checking for correctness.
    ///
    /// # Safety
    /// If `glGetProgramiv(self, GL_LINK_STATUS)` would return `true`, this is safe.
    pub unsafe fn into_linked_unchecked(self) -> LinkedProgram {
        LinkedProgram(self.into_name())
    }
}

impl crate::sealed::Sealed for Program {}
// # Safety
// Repr(transparent) over a NonZero<u32>, so can safely transmute.
unsafe impl crate::ThinGLObject for Program {}

/// A program which has been successfully linked.
#[repr(transparent)]
#[must_use = "dropping a gl handle leaks resources"]
#[derive(Debug)]
pub struct LinkedProgram(pub(crate) NonZeroName);

/// Forget the linked status of the program.
impl From<LinkedProgram> for Program {
    fn from(value: LinkedProgram) -> Self {
        Program(value.into_name())
    }
}

impl crate::sealed::Sealed for LinkedProgram {}
// # Safety
// Repr(transparent) over a NonZero<u32>, so can safely transmute.
unsafe impl crate::ThinGLObject for LinkedProgram {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_are_distinct() {
        assert_eq!(Vertex::TYPE, gl::VERTEX_SHADER);
        assert_eq!(Fragment::TYPE, gl::FRAGMENT_SHADER);
        assert_ne!(Vertex::NAME, Fragment::NAME);
    }

    #[test]
    fn create_error_names_the_stage() {
        let err = CreateError::Shader(Fragment::NAME);
        assert_eq!(err.to_string(), "gl failed to create a fragment shader object");
    }
}
