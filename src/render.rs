//! The render context: every GL object the axis cross needs, built once and
//! torn down once.

use crate::{
    buffer::{usage, Buffer},
    draw::ArraysState,
    program::{self, CompiledShader, LinkedProgram, ProgramShaders, Type},
    scene,
    slot::program::{CompileError, LinkError},
    state::{ClearMask, Color},
    vertex_array::VertexArray,
    Gl,
};

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("{stage} shader failed to compile:\n{log}")]
    Compile { stage: &'static str, log: String },
    #[error("program failed to link:\n{log}")]
    Link { log: String },
    #[error(transparent)]
    Create(#[from] program::CreateError),
}

/// Owns the program, the vertex array and its buffers.
///
/// There is no `Drop`: GL objects need the context current, so they are released
/// through [`Renderer::teardown`], which consumes `self`.
#[derive(Debug)]
#[must_use = "dropping the renderer leaks its gl objects, use `teardown`"]
pub struct Renderer {
    program: LinkedProgram,
    vertex_array: VertexArray,
    buffers: [Buffer; 2],
}

impl Renderer {
    /// Compile and link the shaders, upload the vertex data and describe it in a vertex array.
    ///
    /// Nothing is left bound afterwards.
    pub fn new(gl: &mut Gl) -> Result<Self, SetupError> {
        let program = link_program(gl)?;

        let buffers = gl.new.buffers();
        let [vertex_array] = gl.new.vertex_arrays();

        let mut active_array = gl.vertex_array.bind(&vertex_array);
        for (buffer, stream) in buffers.iter().zip(scene::streams()) {
            let source = gl.buffer.array.bind(buffer);
            source.data(stream.data, usage::Frequency::Static, usage::Access::Draw);
            active_array.attribute(&source, stream.location, stream.attribute, Some(true));
        }
        gl.vertex_array.unbind();
        gl.buffer.array.unbind();

        for error in gl.state.drain_errors() {
            log::warn!("gl error during setup: {error}");
        }

        log::debug!(
            "uploaded {} vertices into {} buffers",
            scene::VERTEX_COUNT,
            buffers.len()
        );

        Ok(Self {
            program,
            vertex_array,
            buffers,
        })
    }

    /// Clear to transparent black and draw both segments.
    pub fn draw(&self, gl: &mut Gl) {
        gl.state
            .clear_color(Color::TRANSPARENT)
            .clear(ClearMask::COLOR);

        let program = gl.program.bind(&self.program);
        let vertex_array = gl.vertex_array.bind(&self.vertex_array);
        let state = ArraysState {
            vertex_array: &vertex_array,
            program: &program,
        };
        for segment in scene::SEGMENTS.iter().cloned() {
            gl.draw.arrays(scene::TOPOLOGY, segment, state);
        }

        gl.vertex_array.unbind();
    }

    /// Delete the vertex array, its buffers and the program.
    pub fn teardown(self, gl: &mut Gl) {
        let Self {
            program,
            vertex_array,
            buffers,
        } = self;

        gl.vertex_array.delete([vertex_array]);
        gl.buffer.delete(buffers);
        gl.program.delete(program.into());
        log::debug!("render objects released");
    }
}

fn compile<Ty: Type>(gl: &Gl, source: &str) -> Result<CompiledShader<Ty>, SetupError> {
    let shader = gl.new.shader::<Ty>()?;
    gl.program
        .compile(shader, source)
        .map_err(|CompileError { shader, log }| {
            gl.program.delete_shader(shader);
            SetupError::Compile {
                stage: Ty::NAME,
                log,
            }
        })
}

/// Shader objects are deleted on every path out of here; only the program survives.
fn link_program(gl: &Gl) -> Result<LinkedProgram, SetupError> {
    let vertex = compile::<program::Vertex>(gl, scene::VERTEX_SHADER)?;
    let fragment = match compile::<program::Fragment>(gl, scene::FRAGMENT_SHADER) {
        Ok(fragment) => fragment,
        Err(err) => {
            gl.program.delete_shader(vertex.into());
            return Err(err);
        }
    };

    let linked = gl.new.program().map_err(SetupError::from).and_then(|program| {
        gl.program
            .link(
                program,
                ProgramShaders::Graphics {
                    vertex: &vertex,
                    fragment: &fragment,
                },
            )
            .map_err(|LinkError { program, log }| {
                gl.program.delete(program);
                SetupError::Link { log }
            })
    });

    gl.program.delete_shader(vertex.into());
    gl.program.delete_shader(fragment.into());

    linked
}
