use crate::{
    gl::{
        self,
        types::{GLchar, GLenum, GLint, GLsizei, GLuint},
    },
    program::{CompiledShader, EmptyShader, LinkedProgram, Program, ProgramShaders, Type},
    slot::marker::{IsDefault, NotDefault},
    NotSync, ThinGLObject,
};

unsafe fn info_log(
    name: GLuint,
    get_iv: unsafe fn(GLuint, GLenum, *mut GLint),
    fetch_log: unsafe fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar),
) -> String {
    // Length includes the nul terminator.
    let mut length = 0;
    get_iv(name, gl::INFO_LOG_LENGTH, std::ptr::addr_of_mut!(length));

    let capacity = usize::try_from(length).unwrap_or(0);
    if capacity == 0 {
        return String::new();
    }

    let mut bytes = vec![0u8; capacity];
    let mut written: GLsizei = 0;
    fetch_log(
        name,
        length,
        std::ptr::addr_of_mut!(written),
        // GL uses i8 char, we want u8. Same layout.
        bytes.as_mut_ptr().cast(),
    );
    bytes.truncate(usize::try_from(written).unwrap_or(0).min(capacity));

    decode_log(&bytes)
}
unsafe fn shader_log(shader: GLuint) -> String {
    info_log(shader, gl::GetShaderiv, gl::GetShaderInfoLog)
}
unsafe fn program_log(program: GLuint) -> String {
    info_log(program, gl::GetProgramiv, gl::GetProgramInfoLog)
}

/// Turn raw info-log bytes into a printable string. Drivers disagree on whether the
/// reported length includes the terminator, and some pad with newlines.
fn decode_log(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).trim_end().to_owned()
}

/// A shader failed to compile. The shader is handed back so it can be deleted.
#[derive(Debug, thiserror::Error)]
#[error("{} shader failed to compile:\n{log}", Ty::NAME)]
#[must_use = "dropping a gl handle leaks resources"]
pub struct CompileError<Ty: Type> {
    pub shader: EmptyShader<Ty>,
    pub log: String,
}

/// A program failed to link. The program is handed back so it can be deleted.
#[derive(Debug, thiserror::Error)]
#[error("program failed to link:\n{log}")]
#[must_use = "dropping a gl handle leaks resources"]
pub struct LinkError {
    pub program: Program,
    pub log: String,
}

/// Entry points for working with `glUse`d programs.
pub struct Active<'slot, Kind>(
    std::marker::PhantomData<&'slot ()>,
    std::marker::PhantomData<Kind>,
);
pub struct Slot(pub(crate) NotSync);
impl Slot {
    /// `glUse` a linked program.
    #[doc(alias = "glUseProgram")]
    pub fn bind(&mut self, program: &LinkedProgram) -> Active<'_, NotDefault> {
        unsafe {
            gl::UseProgram(program.name().get());
        }
        Active(std::marker::PhantomData, std::marker::PhantomData)
    }
    /// Make the used program slot empty.
    #[doc(alias = "glUseProgram")]
    pub fn unbind(&mut self) -> Active<'_, IsDefault> {
        unsafe {
            gl::UseProgram(0);
        }
        Active(std::marker::PhantomData, std::marker::PhantomData)
    }
    /// Set the GLSL ES source code of a shader, then attempt to compile it.
    ///
    /// # Panics
    /// If `source` is longer than `GLint::MAX` bytes.
    #[doc(alias = "glShaderSource")]
    #[doc(alias = "glCompileShader")]
    pub fn compile<Ty: Type>(
        &self,
        shader: EmptyShader<Ty>,
        source: &str,
    ) -> Result<CompiledShader<Ty>, CompileError<Ty>> {
        let sources = [source.as_ptr().cast::<GLchar>()];
        let lengths = [GLint::try_from(source.len()).expect("shader source exceeds GLint")];

        let success = unsafe {
            // Lengths are passed explicitly, so the source needs no nul terminator.
            gl::ShaderSource(shader.name().get(), 1, sources.as_ptr(), lengths.as_ptr());
            gl::CompileShader(shader.name().get());

            let mut was_successful = gl::FALSE.into();
            gl::GetShaderiv(
                shader.name().get(),
                gl::COMPILE_STATUS,
                std::ptr::addr_of_mut!(was_successful),
            );
            was_successful == GLint::from(gl::TRUE)
        };

        if success {
            // Safety: just checked.
            Ok(unsafe { shader.into_compiled_unchecked() })
        } else {
            Err(CompileError {
                log: unsafe { shader_log(shader.name().get()) },
                shader,
            })
        }
    }
    /// Link together compiled shaders into a [`LinkedProgram`]. The shaders are
    /// detached again afterwards, whether or not linking succeeded.
    #[doc(alias = "glAttachShader")]
    #[doc(alias = "glLinkProgram")]
    pub fn link(
        &self,
        program: Program,
        shaders: ProgramShaders,
    ) -> Result<LinkedProgram, LinkError> {
        let ProgramShaders::Graphics { vertex, fragment } = shaders;
        let success = unsafe {
            gl::AttachShader(program.name().get(), vertex.name().get());
            gl::AttachShader(program.name().get(), fragment.name().get());

            gl::LinkProgram(program.name().get());

            let mut was_successful = gl::FALSE.into();
            gl::GetProgramiv(
                program.name().get(),
                gl::LINK_STATUS,
                std::ptr::addr_of_mut!(was_successful),
            );

            gl::DetachShader(program.name().get(), vertex.name().get());
            gl::DetachShader(program.name().get(), fragment.name().get());

            was_successful == GLint::from(gl::TRUE)
        };

        if success {
            // Safety: just checked.
            Ok(unsafe { program.into_linked_unchecked() })
        } else {
            Err(LinkError {
                log: unsafe { program_log(program.name().get()) },
                program,
            })
        }
    }
    /// Delete a program. If the program is currently in use, it is deleted once
    /// it no longer is.
    ///
    /// To delete a [`LinkedProgram`], use [`Into::into`].
    #[doc(alias = "glDeleteProgram")]
    pub fn delete(&self, program: Program) {
        unsafe { gl::DeleteProgram(program.into_name().get()) }
    }
    /// Delete a shader. If the shader is attached to a program, it is deleted once
    /// it no longer is.
    ///
    /// To delete a [`CompiledShader`], use [`Into::into`].
    #[doc(alias = "glDeleteShader")]
    pub fn delete_shader<Ty: Type>(&self, shader: EmptyShader<Ty>) {
        unsafe { gl::DeleteShader(shader.into_name().get()) }
    }
}

#[cfg(test)]
mod tests {
    use super::decode_log;

    #[test]
    fn log_stops_at_nul_and_trims() {
        assert_eq!(
            decode_log(b"0:3(1): error: syntax error\n\0garbage"),
            "0:3(1): error: syntax error"
        );
    }

    #[test]
    fn log_without_terminator_is_kept() {
        assert_eq!(decode_log(b"link failed"), "link failed");
    }

    #[test]
    fn empty_log() {
        assert_eq!(decode_log(b"\0"), "");
        assert_eq!(decode_log(b""), "");
    }
}
