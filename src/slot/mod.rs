//! Binding points, and the operations that act on whatever is bound to them.

pub mod buffer;
pub mod marker;
pub mod program;
pub mod vertex_array;
