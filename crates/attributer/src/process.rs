//! Post-generation processing hooks.
//!
//! A hook runs after an attribute produces its value and before the value is
//! returned. It sees the attribute through a [`Processing`] view, which also
//! exposes the record under construction. The view only lives for the one
//! generation call; the attribute never keeps the owner reference.

use crate::error::ProcessError;
use crate::kind::{AttrValue, Kind};

/// Boxed processing hook for attributes of payload type `T` filling records
/// of type `O`.
pub type Processor<T, O> = Box<dyn FnMut(&mut Processing<'_, T, O>) -> Result<(), ProcessError>>;

/// View of an attribute handed to its processing hook.
///
/// The value is typed, so a hook can adjust it but cannot change the
/// attribute's kind.
pub struct Processing<'a, T, O: ?Sized> {
    name: &'a str,
    column_name: &'a str,
    value: &'a mut T,
    owner: &'a O,
}

impl<'a, T: AttrValue, O: ?Sized> Processing<'a, T, O> {
    pub(crate) const fn new(
        name: &'a str,
        column_name: &'a str,
        value: &'a mut T,
        owner: &'a O,
    ) -> Self {
        Self {
            name,
            column_name,
            value,
            owner,
        }
    }

    /// Returns the attribute name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name
    }

    /// Returns the resolved column name.
    #[must_use]
    pub const fn column_name(&self) -> &str {
        self.column_name
    }

    /// Returns the attribute kind.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        T::KIND
    }

    /// Returns the value produced by this generation call.
    #[must_use]
    pub fn value(&self) -> T {
        *self.value
    }

    /// Replaces the value this generation call will return.
    pub fn set_value(&mut self, value: T) {
        *self.value = value;
    }

    /// Returns the record currently being populated.
    #[must_use]
    pub const fn owner(&self) -> &O {
        self.owner
    }
}
