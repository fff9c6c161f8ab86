//! The contracts shared by every attribute variant.

use crate::error::{AttrError, ProcessError};
use crate::kind::{AttrValue, Kind, Value};
use crate::process::Processing;
use crate::state::Strategy;

/// A named, typed, generatable field of records of type `O`.
///
/// The trait is object safe, so a record builder can hold the attributes of
/// one record type as `Vec<Box<dyn Attributer<O>>>` regardless of their
/// generation strategy or kind.
///
/// Attributes are single-owner state: generation advances cursors and
/// counters through `&mut self`, and sharing one instance across threads
/// needs external synchronization or one instance per worker.
///
/// # Example
///
/// ```
/// use attributer::{AttrOptions, Attributer, AutoIncrementAttr, SeqAttr, Value};
///
/// # fn main() -> Result<(), attributer::AttrError> {
/// let mut fields: Vec<Box<dyn Attributer<()>>> = vec![
///     Box::new(AutoIncrementAttr::<i64>::new("id", 1, AttrOptions::new())),
///     Box::new(SeqAttr::<u64>::new("status", vec![1, 2], AttrOptions::new())?),
/// ];
///
/// let mut row = Vec::new();
/// for field in &mut fields {
///     row.push((field.column_name().to_owned(), field.generate(&())?));
/// }
///
/// assert_eq!(row[0], ("id".to_owned(), Value::Int(1)));
/// assert_eq!(row[1], ("status".to_owned(), Value::Uint(1)));
/// # Ok(())
/// # }
/// ```
pub trait Attributer<O: ?Sized> {
    /// Returns the immutable attribute name.
    fn name(&self) -> &str;

    /// Returns the column name values are exposed under.
    fn column_name(&self) -> &str;

    /// Returns the fixed kind of the values this attribute produces.
    fn kind(&self) -> Kind;

    /// Produces the next value for the record `owner`.
    ///
    /// The current value is updated and the processing hook, if any, runs
    /// before the value is returned.
    ///
    /// # Errors
    ///
    /// Returns the hook's failure as [`AttrError::Process`], or a
    /// strategy-specific error such as [`AttrError::CounterOverflow`]. A failed
    /// call yields no usable value.
    fn generate(&mut self, owner: &O) -> Result<Value, AttrError>;

    /// Returns the current value without side effects.
    fn value(&self) -> Value;

    /// Overwrites the current value.
    ///
    /// # Errors
    ///
    /// Returns [`AttrError::KindMismatch`] when `value` is not of this
    /// attribute's kind; the current value is left unchanged.
    fn set_value(&mut self, value: Value) -> Result<(), AttrError>;
}

/// Typed configuration shared by every attribute variant.
///
/// Extends [`Attributer`] with the operations that depend on the payload
/// type: attaching a processing hook and reading the current value without
/// the [`Value`] round trip. Generic code bounded on `Process<O>` can
/// configure any variant.
///
/// # Example
///
/// ```
/// use attributer::{AttrOptions, Attributer, AutoIncrementAttr, Process, SeqAttr, Value};
///
/// fn offset_by_thousand<A>(attr: &mut A) -> &mut A
/// where
///     A: Process<(), Payload = u64>,
/// {
///     attr.process(|processing| {
///         let shifted = processing.value() + 1000;
///         processing.set_value(shifted);
///         Ok(())
///     })
/// }
///
/// # fn main() -> Result<(), attributer::AttrError> {
/// let mut id = AutoIncrementAttr::<u64>::new("id", 1, AttrOptions::new());
/// let mut status = SeqAttr::<u64>::new("status", vec![7], AttrOptions::new())?;
///
/// assert_eq!(offset_by_thousand(&mut id).generate(&())?, Value::Uint(1001));
/// assert_eq!(offset_by_thousand(&mut status).generate(&())?, Value::Uint(1007));
/// assert_eq!(status.get(), 1007);
/// # Ok(())
/// # }
/// ```
pub trait Process<O: ?Sized>: Attributer<O> {
    /// Payload type of the current value.
    type Payload: AttrValue;

    /// Attaches a processing hook, replacing any earlier one.
    ///
    /// Returns the same attribute so configuration calls can be chained.
    fn process<F>(&mut self, processor: F) -> &mut Self
    where
        F: FnMut(&mut Processing<'_, Self::Payload, O>) -> Result<(), ProcessError> + 'static,
        Self: Sized;

    /// Returns the current value as its payload type.
    fn get(&self) -> Self::Payload;
}

impl<A, O> Attributer<O> for A
where
    A: Strategy<O>,
    O: ?Sized,
{
    fn name(&self) -> &str {
        self.state_name()
    }

    fn column_name(&self) -> &str {
        self.state_column_name()
    }

    fn kind(&self) -> Kind {
        <<A as Strategy<O>>::Payload as AttrValue>::KIND
    }

    fn generate(&mut self, owner: &O) -> Result<Value, AttrError> {
        self.step(owner).map(Into::into)
    }

    fn value(&self) -> Value {
        self.state().value()
    }

    fn set_value(&mut self, value: Value) -> Result<(), AttrError> {
        self.state_mut().set_value(value)
    }
}

impl<A, O> Process<O> for A
where
    A: Strategy<O>,
    O: ?Sized,
{
    type Payload = <A as Strategy<O>>::Payload;

    fn process<F>(&mut self, processor: F) -> &mut Self
    where
        F: FnMut(&mut Processing<'_, <A as Strategy<O>>::Payload, O>) -> Result<(), ProcessError>
            + 'static,
    {
        self.state_mut().attach(Box::new(processor));
        self
    }

    fn get(&self) -> <A as Strategy<O>>::Payload {
        self.state().get()
    }
}
