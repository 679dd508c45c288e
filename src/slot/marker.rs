//! Markers for static information about the current binding.

use crate::sealed::Sealed;

/// Marker trait for the states of a binding - [`IsDefault`] and [`NotDefault`].
///
/// For every slot this crate exposes, the zero name means "nothing bound", so only
/// [`NotDefault`] bindings allow operations that touch the bound object.
pub trait Defaultness: Sealed + 'static {}

/// Statically known that nothing, name 0, is bound.
#[derive(Debug)]
pub struct IsDefault;
impl crate::sealed::Sealed for IsDefault {}
impl Defaultness for IsDefault {}
/// Statically known that a user-defined object, not 0, is bound.
#[derive(Debug)]
pub struct NotDefault;
impl crate::sealed::Sealed for NotDefault {}
impl Defaultness for NotDefault {}
