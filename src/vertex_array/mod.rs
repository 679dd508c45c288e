use super::{gl, NonZero, NonZeroName};

/// Determines the number of components to load, generally this should match the
/// dimensionality of the vertex shader input.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Components {
    Scalar = 1,
    Vec2 = 2,
    Vec3 = 3,
    Vec4 = 4,
}
impl Components {
    /// Number of scalar components.
    #[must_use]
    pub fn count(self) -> usize {
        self as i32 as usize
    }
}
impl From<Components> for i32 {
    fn from(value: Components) -> Self {
        value as _
    }
}

/// One float per component.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatingAttribute {
    F16 = gl::HALF_FLOAT,
    F32 = gl::FLOAT,
    /// Fixed point `16.16` format.
    Fixed16_16 = gl::FIXED,
}
impl FloatingAttribute {
    /// Get the align requirements for fetching this attribute.
    #[must_use]
    pub fn align_of(&self) -> usize {
        match self {
            Self::F16 => std::mem::align_of::<u16>(),
            Self::F32 => std::mem::align_of::<f32>(),
            Self::Fixed16_16 => std::mem::align_of::<u32>(),
        }
    }
    /// Size in bytes of one component.
    #[must_use]
    pub fn size_of(&self) -> usize {
        match self {
            Self::F16 => std::mem::size_of::<u16>(),
            Self::F32 => std::mem::size_of::<f32>(),
            Self::Fixed16_16 => std::mem::size_of::<u32>(),
        }
    }
}

// Safety: is repr(u32) enum.
unsafe impl crate::GLEnum for FloatingAttribute {}

/// Arguments to `glVertexAttribPointer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    /// The type of each component, fetched and read in the shader as floats.
    pub ty: FloatingAttribute,
    /// The number of components of the scalar/vector.
    pub components: Components,
    /// The spacing in bytes between consecutive attribute values.
    /// `None` means tightly packed, see [`Self::stride_bytes`].
    ///
    /// This must be aligned with [`FloatingAttribute::align_of`].
    pub stride: Option<NonZero<usize>>,
    /// Offset, in bytes, from the beginning of the buffer where the first component is located.
    ///
    /// This must be aligned with [`FloatingAttribute::align_of`].
    pub offset: usize,
}
impl Attribute {
    /// A tightly packed `f32` attribute starting at the beginning of its buffer,
    /// with the stride spelled out.
    #[must_use]
    pub fn packed_f32(components: Components) -> Self {
        Self {
            ty: FloatingAttribute::F32,
            components,
            stride: NonZero::new(components.count() * std::mem::size_of::<f32>()),
            offset: 0,
        }
    }
    /// The distance in bytes between consecutive values, as the GL will use it.
    #[must_use]
    pub fn stride_bytes(&self) -> usize {
        self.stride
            .map_or(self.components.count() * self.ty.size_of(), NonZero::get)
    }
    /// How many whole values a buffer of `len` bytes holds for this attribute.
    #[must_use]
    pub fn count_in(&self, len: usize) -> usize {
        let value = self.components.count() * self.ty.size_of();
        if len < self.offset + value {
            0
        } else {
            (len - self.offset - value) / self.stride_bytes() + 1
        }
    }
}

/// VAO.
/// A vertex array remembers the buffers and layouts given to each attribute slot
/// while it is bound, and feeds them to the vertex shader at draw time.
#[repr(transparent)]
#[must_use = "dropping a gl handle leaks memory"]
#[derive(Debug)]
pub struct VertexArray(pub(crate) NonZeroName);

impl crate::sealed::Sealed for VertexArray {}
// # Safety
// Repr(transparent) over a NonZero<u32>, so can safely transmute.
unsafe impl crate::ThinGLObject for VertexArray {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_stride_matches_component_count() {
        assert_eq!(Attribute::packed_f32(Components::Vec2).stride_bytes(), 8);
        assert_eq!(Attribute::packed_f32(Components::Vec3).stride_bytes(), 12);
    }

    #[test]
    fn implicit_stride_is_tight() {
        let attribute = Attribute {
            ty: FloatingAttribute::F16,
            components: Components::Vec4,
            stride: None,
            offset: 0,
        };
        assert_eq!(attribute.stride_bytes(), 8);
    }

    #[test]
    fn counts_whole_values_only() {
        let position = Attribute::packed_f32(Components::Vec2);
        assert_eq!(position.count_in(32), 4);
        assert_eq!(position.count_in(31), 3);
        assert_eq!(position.count_in(4), 0);

        let shifted = Attribute {
            offset: 4,
            ..Attribute::packed_f32(Components::Scalar)
        };
        assert_eq!(shifted.count_in(16), 3);
    }
}
