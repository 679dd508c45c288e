//! Entry points for executing draw commands.
//!
//! Drawing without a vertex array bound makes the GL read attribute offsets as client
//! pointers, so every draw takes compile-time proof that a vertex array and a linked
//! program are bound.

use crate::slot;

type ActiveProgram<'a> = slot::program::Active<'a, slot::marker::NotDefault>;
type ActiveVertexArray<'a> = slot::vertex_array::Active<'a, slot::marker::NotDefault>;

use super::{gl, GLEnum, NotSync};

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    Points = gl::POINTS,
    LineStrip = gl::LINE_STRIP,
    LineLoop = gl::LINE_LOOP,
    Lines = gl::LINES,
    TriangleStrip = gl::TRIANGLE_STRIP,
    TriangleFan = gl::TRIANGLE_FAN,
    Triangles = gl::TRIANGLES,
}
// Safety: is repr(u32) enum.
unsafe impl GLEnum for Topology {}

impl Topology {
    /// Number of complete primitives `vertices` vertices assemble into.
    #[must_use]
    pub fn primitives(self, vertices: usize) -> usize {
        match self {
            Self::Points => vertices,
            Self::Lines => vertices / 2,
            Self::LineStrip => vertices.saturating_sub(1),
            Self::LineLoop if vertices < 2 => 0,
            Self::LineLoop => vertices,
            Self::Triangles => vertices / 3,
            Self::TriangleStrip | Self::TriangleFan => vertices.saturating_sub(2),
        }
    }
}

#[derive(Copy, Clone)]
pub struct ArraysState<'a> {
    pub vertex_array: &'a ActiveVertexArray<'a>,
    pub program: &'a ActiveProgram<'a>,
}

/// Bindings to `glDraw*`
pub struct Draw(pub(crate) NotSync);

impl Draw {
    /// Draw `vertices` from the bound vertex array, using its enabled attributes.
    ///
    /// # Panics
    /// If the range ends before it starts, or doesn't fit in `GLint`/`GLsizei`.
    #[doc(alias = "glDrawArrays")]
    pub fn arrays(&self, mode: Topology, vertices: std::ops::Range<usize>, _state: ArraysState) {
        let count = vertices
            .end
            .checked_sub(vertices.start)
            .expect("draw range end before start");

        if count == 0 {
            return;
        }

        unsafe {
            gl::DrawArrays(
                mode.as_gl(),
                vertices.start.try_into().expect("first vertex exceeds GLint"),
                count.try_into().expect("vertex count exceeds GLsizei"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Topology;

    #[test]
    fn line_list_pairs_vertices() {
        assert_eq!(Topology::Lines.primitives(2), 1);
        assert_eq!(Topology::Lines.primitives(4), 2);
        assert_eq!(Topology::Lines.primitives(3), 1);
    }

    #[test]
    fn strips_and_loops() {
        assert_eq!(Topology::LineStrip.primitives(4), 3);
        assert_eq!(Topology::LineLoop.primitives(4), 4);
        assert_eq!(Topology::LineLoop.primitives(1), 0);
        assert_eq!(Topology::TriangleStrip.primitives(4), 2);
        assert_eq!(Topology::Triangles.primitives(0), 0);
    }
}
