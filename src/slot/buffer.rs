//! Binding buffers and uploading their contents.
use crate::{
    buffer::{usage, Buffer},
    gl,
    slot::marker::{IsDefault, NotDefault},
    GLenum, NotSync, ThinGLObject,
};

/// Marker trait for buffer targets.
pub trait Target: crate::sealed::Sealed {
    const TARGET: GLenum;
}

/// Marker for `ARRAY_BUFFER`, the source of vertex attributes.
#[derive(Debug)]
pub struct Array;
impl crate::sealed::Sealed for Array {}
impl Target for Array {
    const TARGET: GLenum = gl::ARRAY_BUFFER;
}

#[derive(Debug)]
pub struct Active<'slot, Slot, Kind>(
    std::marker::PhantomData<&'slot mut ()>,
    std::marker::PhantomData<(Kind, Slot)>,
);
impl<T: Target> Active<'_, T, NotDefault> {
    /// (Re)allocate the datastore of the buffer and fill with bytes from `data`.
    ///
    /// # Panics
    /// If `data` is larger than `GLsizeiptr::MAX` bytes.
    #[doc(alias = "glBufferData")]
    pub fn data(&self, data: &[u8], frequency: usage::Frequency, access: usage::Access) -> &Self {
        let len = gl::types::GLsizeiptr::try_from(data.len())
            .expect("buffer data larger than GLsizeiptr");
        unsafe {
            gl::BufferData(
                T::TARGET,
                len,
                data.as_ptr().cast(),
                usage::as_gl(frequency, access),
            );
        }
        self
    }
}

pub struct Slot<T: Target>(pub(crate) NotSync, pub(crate) std::marker::PhantomData<T>);
impl<T: Target> Slot<T> {
    /// Bind a buffer to this slot.
    #[doc(alias = "glBindBuffer")]
    pub fn bind(&mut self, buffer: &Buffer) -> Active<'_, T, NotDefault> {
        unsafe {
            gl::BindBuffer(T::TARGET, buffer.name().get());
        }
        Active(std::marker::PhantomData, std::marker::PhantomData)
    }
    /// Make the slot empty.
    #[doc(alias = "glBindBuffer")]
    pub fn unbind(&mut self) -> Active<'_, T, IsDefault> {
        unsafe {
            gl::BindBuffer(T::TARGET, 0);
        }
        Active(std::marker::PhantomData, std::marker::PhantomData)
    }
}

pub struct Slots {
    pub array: Slot<Array>,
}
impl Slots {
    /// Delete buffers. If any were bound to a slot, the slot becomes unbound.
    /// A vertex array that sources attributes from them keeps the storage alive
    /// until the vertex array itself is deleted.
    #[doc(alias = "glDeleteBuffers")]
    pub fn delete<const N: usize>(&mut self, buffers: [Buffer; N]) {
        unsafe { crate::gl_delete_with(gl::DeleteBuffers, buffers) }
    }
}
