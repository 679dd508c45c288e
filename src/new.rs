use crate::{buffer, gl, gl_gen_with, program, vertex_array, NonZeroName, NotSync};

/// Entry points for allocating GL objects, wrapping `glGen*` and `glCreate*`.
///
/// Generating several objects of one kind at once is a single GL call:
/// ```no_run
/// # let gl: gl_axes::Gl = todo!();
/// let [positions, colors] = gl.new.buffers();
/// let [vertex_array] = gl.new.vertex_arrays();
/// ```
///
/// Deletion goes through the [slot](crate::slot) the object is bound to.
pub struct New(pub(crate) NotSync);
impl New {
    /// Generate a set of new vertex array objects.
    #[doc(alias = "glGenVertexArrays")]
    pub fn vertex_arrays<const N: usize>(&self) -> [vertex_array::VertexArray; N] {
        unsafe { gl_gen_with(gl::GenVertexArrays) }
    }
    /// Generate a set of new buffer objects.
    #[doc(alias = "glGenBuffers")]
    pub fn buffers<const N: usize>(&self) -> [buffer::Buffer; N] {
        unsafe { gl_gen_with(gl::GenBuffers) }
    }
    /// Initialize a shader object of the given type.
    ///
    /// Fails if the GL hands back the zero name, which only happens on context loss or
    /// an invalid shader type.
    #[doc(alias = "glCreateShader")]
    pub fn shader<Ty: program::Type>(
        &self,
    ) -> Result<program::EmptyShader<Ty>, program::CreateError> {
        let name = NonZeroName::new(unsafe { gl::CreateShader(Ty::TYPE) })
            .ok_or(program::CreateError::Shader(Ty::NAME))?;

        Ok(program::EmptyShader(name, std::marker::PhantomData))
    }
    /// Initialize a program object.
    #[doc(alias = "glCreateProgram")]
    pub fn program(&self) -> Result<program::Program, program::CreateError> {
        let name = NonZeroName::new(unsafe { gl::CreateProgram() })
            .ok_or(program::CreateError::Program)?;

        Ok(program::Program(name))
    }
}
