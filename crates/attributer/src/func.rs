//! Attributes whose values come from a caller-supplied function.
//!
//! Each generation calls the function once. There is no cursor or cycling;
//! randomness, if any, is entirely up to the function.

use std::fmt;

use crate::error::AttrError;
use crate::kind::AttrValue;
use crate::options::AttrOptions;
use crate::state::{AttrState, Strategy};

/// Attribute generating values with a zero-argument function.
///
/// # Example
///
/// ```
/// use attributer::{AttrOptions, Attributer, FuncAttr, Kind, Value};
///
/// # fn main() -> Result<(), attributer::AttrError> {
/// let mut price = FuncAttr::<f64>::float("price", || 42.0, AttrOptions::new());
///
/// assert_eq!(price.generate(&())?, Value::Float(42.0));
/// assert_eq!(price.kind(), Kind::Float);
/// # Ok(())
/// # }
/// ```
pub struct FuncAttr<T, O: ?Sized = ()> {
    state: AttrState<T, O>,
    generator: Box<dyn FnMut() -> T>,
}

impl<T: AttrValue, O: ?Sized> FuncAttr<T, O> {
    /// Creates an attribute named `name` that calls `generator` on every
    /// generation.
    #[must_use]
    pub fn new<F>(name: impl Into<String>, generator: F, options: AttrOptions) -> Self
    where
        F: FnMut() -> T + 'static,
    {
        Self {
            state: AttrState::new(name.into(), options),
            generator: Box::new(generator),
        }
    }
}

impl<O: ?Sized> FuncAttr<i64, O> {
    /// Creates a signed integer attribute backed by `generator`.
    #[must_use]
    pub fn int<F>(name: impl Into<String>, generator: F, options: AttrOptions) -> Self
    where
        F: FnMut() -> i64 + 'static,
    {
        Self::new(name, generator, options)
    }
}

impl<O: ?Sized> FuncAttr<f64, O> {
    /// Creates a floating-point attribute backed by `generator`.
    #[must_use]
    pub fn float<F>(name: impl Into<String>, generator: F, options: AttrOptions) -> Self
    where
        F: FnMut() -> f64 + 'static,
    {
        Self::new(name, generator, options)
    }
}

impl<O: ?Sized> FuncAttr<u64, O> {
    /// Creates an unsigned integer attribute backed by `generator`.
    #[must_use]
    pub fn uint<F>(name: impl Into<String>, generator: F, options: AttrOptions) -> Self
    where
        F: FnMut() -> u64 + 'static,
    {
        Self::new(name, generator, options)
    }
}

impl<T: AttrValue, O: ?Sized> Strategy<O> for FuncAttr<T, O> {
    type Payload = T;

    fn state(&self) -> &AttrState<T, O> {
        &self.state
    }

    fn state_name(&self) -> &str {
        self.state.name()
    }

    fn state_column_name(&self) -> &str {
        self.state.column_name()
    }

    fn state_mut(&mut self) -> &mut AttrState<T, O> {
        &mut self.state
    }

    fn step(&mut self, owner: &O) -> Result<T, AttrError> {
        let value = (self.generator)();
        self.state.settle(value, owner)
    }
}

impl<T: AttrValue, O: ?Sized> fmt::Debug for FuncAttr<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuncAttr")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
