//! Binding vertex array objects and specifying their attributes.
use crate::{
    gl,
    slot::marker::{IsDefault, NotDefault},
    vertex_array::{self, VertexArray},
    GLEnum, NotSync, ThinGLObject,
};

// GLES3 still lets object 0 take client-side pointers for GLES2 compatibility.
// That path is not exposed, object 0 is treated as "nothing bound".

impl Active<'_, NotDefault> {
    /// Set the properties of a vertex attribute slot. The source buffer is remembered
    /// by the vertex array, and does not need to be bound at draw time.
    ///
    /// `enable` is a convenience - `Some` enables or disables the attribute after setting
    /// its properties, `None` leaves the enabled state alone. Attributes start disabled.
    ///
    /// # Panics
    /// If the [`offset`](vertex_array::Attribute::offset) or stride is not aligned for the
    /// attribute's type.
    #[doc(alias = "glVertexAttribPointer")]
    pub fn attribute(
        &mut self,
        _source: &super::buffer::Active<super::buffer::Array, NotDefault>,
        index: u32,
        attribute: vertex_array::Attribute,
        enable: Option<bool>,
    ) -> &mut Self {
        let size = attribute.components.into();
        let align = attribute.ty.align_of();
        let stride = attribute.stride.map_or(0, |stride| {
            assert_eq!(stride.get() % align, 0, "attribute stride must be aligned");
            gl::types::GLsizei::try_from(stride.get()).expect("attribute stride exceeds GLsizei")
        });

        assert_eq!(attribute.offset % align, 0, "attribute offset must be aligned");

        // With an array buffer bound (proven by `_source`) this "pointer" is a byte offset
        // into that buffer.
        let offset_pointer: *const std::ffi::c_void = attribute.offset as _;

        unsafe {
            gl::VertexAttribPointer(
                index,
                size,
                attribute.ty.as_gl(),
                gl::FALSE,
                stride,
                offset_pointer,
            );
        }

        if let Some(enable) = enable {
            self.set_attribute_enabled(index, enable)
        } else {
            self
        }
    }
    /// Enable or disable the attribute at `index`. By default, all attributes are disabled.
    #[doc(alias = "glEnableVertexAttribArray")]
    #[doc(alias = "glDisableVertexAttribArray")]
    pub fn set_attribute_enabled(&mut self, index: u32, enabled: bool) -> &mut Self {
        if enabled {
            unsafe {
                gl::EnableVertexAttribArray(index);
            }
        } else {
            unsafe {
                gl::DisableVertexAttribArray(index);
            }
        }
        self
    }
}

/// Entry points for `gl*VertexAttrib*`.
pub struct Active<'slot, Kind>(
    std::marker::PhantomData<&'slot mut ()>,
    std::marker::PhantomData<Kind>,
);
pub struct Slot(pub(crate) NotSync);
impl Slot {
    /// Bind a user-defined array to this slot.
    #[doc(alias = "glBindVertexArray")]
    pub fn bind(&mut self, array: &VertexArray) -> Active<'_, NotDefault> {
        unsafe {
            gl::BindVertexArray(array.name().get());
        }
        Active(std::marker::PhantomData, std::marker::PhantomData)
    }
    /// Make the slot empty.
    #[doc(alias = "glBindVertexArray")]
    pub fn unbind(&mut self) -> Active<'_, IsDefault> {
        unsafe {
            gl::BindVertexArray(0);
        }
        Active(std::marker::PhantomData, std::marker::PhantomData)
    }
    /// Delete vertex arrays. If any were bound to this slot, the slot becomes unbound.
    #[doc(alias = "glDeleteVertexArrays")]
    pub fn delete<const N: usize>(&mut self, arrays: [VertexArray; N]) {
        unsafe { crate::gl_delete_with(gl::DeleteVertexArrays, arrays) }
    }
}
