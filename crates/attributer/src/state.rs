//! State common to every attribute variant.

use std::fmt;

use tracing::debug;

use crate::error::AttrError;
use crate::kind::{AttrValue, Value};
use crate::options::AttrOptions;
use crate::process::{Processing, Processor};

/// Generation strategy of one attribute variant.
///
/// Variants own an [`AttrState`] and supply the step that picks the next
/// payload; the [`crate::Attributer`] and [`crate::Process`] contracts are
/// provided for every implementor.
pub trait Strategy<O: ?Sized> {
    /// Payload type carried by the attribute.
    type Payload: AttrValue;

    fn state(&self) -> &AttrState<Self::Payload, O>;

    /// Returns the attribute name from the state.
    fn state_name(&self) -> &str;

    /// Returns the column name from the state.
    fn state_column_name(&self) -> &str;

    fn state_mut(&mut self) -> &mut AttrState<Self::Payload, O>;

    /// Picks the next payload and settles it through the state.
    fn step(&mut self, owner: &O) -> Result<Self::Payload, AttrError>;
}

/// Name, column name, current value, and hook of one attribute.
pub struct AttrState<T, O: ?Sized> {
    name: String,
    column_name: String,
    value: T,
    processor: Option<Processor<T, O>>,
}

impl<T: AttrValue, O: ?Sized> AttrState<T, O> {
    pub(crate) fn new(name: String, options: AttrOptions) -> Self {
        let column_name = options.into_column_name(&name);
        Self {
            name,
            column_name,
            value: T::default(),
            processor: None,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn column_name(&self) -> &str {
        &self.column_name
    }

    pub(crate) const fn get(&self) -> T {
        self.value
    }

    pub(crate) fn value(&self) -> Value {
        self.value.into()
    }

    /// Overwrites the current value if `value` has the attribute's kind.
    pub(crate) fn set_value(&mut self, value: Value) -> Result<(), AttrError> {
        let typed = T::from_value(value).ok_or_else(|| AttrError::KindMismatch {
            name: self.name.clone(),
            expected: T::KIND,
            actual: value,
        })?;
        self.value = typed;
        Ok(())
    }

    pub(crate) fn attach(&mut self, processor: Processor<T, O>) {
        self.processor = Some(processor);
    }

    /// Stores a freshly generated value and runs the hook over it.
    ///
    /// Returns the value as left by the hook.
    pub(crate) fn settle(&mut self, value: T, owner: &O) -> Result<T, AttrError> {
        self.value = value;
        if let Some(processor) = self.processor.as_mut() {
            let mut processing =
                Processing::new(&self.name, &self.column_name, &mut self.value, owner);
            if let Err(err) = processor(&mut processing) {
                debug!(attribute = %self.name, error = %err, "processing hook rejected value");
                return Err(err.into());
            }
        }
        Ok(self.value)
    }
}

impl<T: AttrValue, O: ?Sized> fmt::Debug for AttrState<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttrState")
            .field("name", &self.name)
            .field("column_name", &self.column_name)
            .field("value", &self.value)
            .field("has_processor", &self.processor.is_some())
            .finish()
    }
}
