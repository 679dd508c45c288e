//! Types and parameter enums for Buffers.

use crate::{gl, GLenum, NonZeroName};

/// Hints to the GL as to how often and in what way a buffer will be used.
///
/// This is only a hint and doesn't restrict what the buffer can do, but a buffer used
/// against its hint can be far slower, as the hint picks the memory the data lives in.
pub mod usage {
    /// Describes the relationship between reads and writes
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Frequency {
        /// Contents will be read at most a few times after a write.
        Stream,
        /// Contents will be written once and read many times.
        Static,
        /// Contents will be written many times and read many times.
        Dynamic,
    }
    /// Describes the sources and destinations of reads and writes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Access {
        /// Host writes, GL reads.
        Draw,
        /// Host reads, GL writes.
        Read,
        /// GL writes, GL reads.
        Copy,
    }
    /// Combine a frequency and access into the corresponding `GLenum`.
    #[must_use]
    pub fn as_gl(frequency: Frequency, access: Access) -> super::GLenum {
        use super::gl;
        use Access as A;
        use Frequency as F;

        match (frequency, access) {
            (F::Stream, A::Draw) => gl::STREAM_DRAW,
            (F::Stream, A::Read) => gl::STREAM_READ,
            (F::Stream, A::Copy) => gl::STREAM_COPY,

            (F::Static, A::Draw) => gl::STATIC_DRAW,
            (F::Static, A::Read) => gl::STATIC_READ,
            (F::Static, A::Copy) => gl::STATIC_COPY,

            (F::Dynamic, A::Draw) => gl::DYNAMIC_DRAW,
            (F::Dynamic, A::Read) => gl::DYNAMIC_READ,
            (F::Dynamic, A::Copy) => gl::DYNAMIC_COPY,
        }
    }
}

/// An application-owned memory buffer. Buffers are just bytes; what they mean
/// depends on the slot they are bound to and the attributes that read from them.
#[repr(transparent)]
#[must_use = "dropping a gl handle leaks resources"]
#[derive(Debug)]
pub struct Buffer(pub(crate) NonZeroName);

impl crate::sealed::Sealed for Buffer {}
// # Safety
// Repr(transparent) over a NonZero<u32>, so can safely transmute.
unsafe impl crate::ThinGLObject for Buffer {}

#[cfg(test)]
mod tests {
    use super::usage::{as_gl, Access, Frequency};
    use super::gl;

    #[test]
    fn static_draw_maps_to_gl_static_draw() {
        assert_eq!(as_gl(Frequency::Static, Access::Draw), gl::STATIC_DRAW);
    }

    #[test]
    fn every_usage_pair_is_distinct() {
        let frequencies = [Frequency::Stream, Frequency::Static, Frequency::Dynamic];
        let accesses = [Access::Draw, Access::Read, Access::Copy];
        let mut seen = Vec::new();
        for frequency in frequencies {
            for access in accesses {
                let value = as_gl(frequency, access);
                assert!(!seen.contains(&value), "{frequency:?}/{access:?} collides");
                seen.push(value);
            }
        }
        assert_eq!(seen.len(), 9);
    }
}
