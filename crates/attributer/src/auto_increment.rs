//! Auto-incrementing integer attributes.
//!
//! The counter starts at a caller-supplied value and advances by exactly one
//! per successful generation. It never resets and never wraps: once the
//! payload type's maximum has been produced, further generation fails with
//! [`AttrError::CounterOverflow`].

use std::fmt;

use tracing::warn;

use crate::error::AttrError;
use crate::kind::AttrValue;
use crate::options::AttrOptions;
use crate::state::{AttrState, Strategy};

/// Integer payload types that can drive an auto-increment counter.
///
/// Implemented for `i64` and `u64`. Like [`AttrValue`], the set is closed:
/// a type outside this crate cannot be a payload, so it cannot count either.
///
/// ```compile_fail
/// use attributer::Counter;
///
/// #[derive(Debug, Clone, Copy, Default)]
/// struct Ticket(u64);
///
/// impl Counter for Ticket {
///     fn checked_next(self) -> Option<Self> {
///         self.0.checked_add(1).map(Ticket)
///     }
/// }
/// ```
pub trait Counter: AttrValue {
    /// Returns the successor of `self`, or `None` on overflow.
    fn checked_next(self) -> Option<Self>;
}

impl Counter for i64 {
    fn checked_next(self) -> Option<Self> {
        self.checked_add(1)
    }
}

impl Counter for u64 {
    fn checked_next(self) -> Option<Self> {
        self.checked_add(1)
    }
}

/// Attribute producing `start, start + 1, start + 2, ...`.
///
/// A processing hook that rewrites the value does not move the counter, and
/// neither does [`crate::Attributer::set_value`].
///
/// # Example
///
/// ```
/// use attributer::{AttrOptions, Attributer, AutoIncrementAttr, Value};
///
/// # fn main() -> Result<(), attributer::AttrError> {
/// let mut id = AutoIncrementAttr::<i64>::new("id", 1, AttrOptions::new());
///
/// assert_eq!(id.generate(&())?, Value::Int(1));
/// assert_eq!(id.generate(&())?, Value::Int(2));
/// assert_eq!(id.generate(&())?, Value::Int(3));
/// # Ok(())
/// # }
/// ```
pub struct AutoIncrementAttr<T, O: ?Sized = ()> {
    state: AttrState<T, O>,
    next: Option<T>,
}

impl<T: Counter, O: ?Sized> AutoIncrementAttr<T, O> {
    /// Creates an attribute whose first generated value is `start`.
    #[must_use]
    pub fn new(name: impl Into<String>, start: T, options: AttrOptions) -> Self {
        Self {
            state: AttrState::new(name.into(), options),
            next: Some(start),
        }
    }

    /// Returns the value the next generation will produce, or `None` once the
    /// counter is exhausted.
    #[must_use]
    pub const fn next_value(&self) -> Option<T> {
        self.next
    }
}

impl<T: Counter, O: ?Sized> Strategy<O> for AutoIncrementAttr<T, O> {
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
        let Some(current) = self.next else {
            return Err(AttrError::CounterOverflow {
                name: self.state.name().to_owned(),
            });
        };
        let value = self.state.settle(current, owner)?;
        self.next = current.checked_next();
        if self.next.is_none() {
            let name = self.state.name();
            warn!(attribute = name, last = ?current, "auto-increment counter exhausted");
        }
        Ok(value)
    }
}

impl<T: AttrValue, O: ?Sized> fmt::Debug for AutoIncrementAttr<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoIncrementAttr")
            .field("state", &self.state)
            .field("next", &self.next)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::attributer::{Attributer, Process};
    use crate::error::ProcessError;
    use crate::kind::{Kind, Value};

    #[rstest]
    #[case(1, 3)]
    #[case(-2, 5)]
    #[case(0, 1)]
    fn counts_up_from_start(#[case] start: i64, #[case] count: i64) {
        let mut attr: AutoIncrementAttr<i64> =
            AutoIncrementAttr::new("id", start, AttrOptions::new());

        let values: Vec<Value> = (0..count)
            .map(|_| attr.generate(&()).expect("generated"))
            .collect();
        let expected: Vec<Value> = (start..start + count).map(Value::Int).collect();

        assert_eq!(values, expected);
        assert_eq!(attr.next_value(), Some(start + count));
    }

    #[test]
    fn unsigned_counter_reports_uint_kind() {
        let mut attr: AutoIncrementAttr<u64> =
            AutoIncrementAttr::new("seq", 10, AttrOptions::new());
        assert_eq!(attr.kind(), Kind::Uint);
        assert_eq!(attr.generate(&()), Ok(Value::Uint(10)));
        assert_eq!(attr.get(), 10);
    }

    #[rstest]
    #[case::signed(
        AutoIncrementAttr::<i64>::new("id", i64::MAX - 1, AttrOptions::new()),
        [Value::Int(i64::MAX - 1), Value::Int(i64::MAX)]
    )]
    #[case::unsigned(
        AutoIncrementAttr::<u64>::new("id", u64::MAX - 1, AttrOptions::new()),
        [Value::Uint(u64::MAX - 1), Value::Uint(u64::MAX)]
    )]
    fn produces_maximum_then_overflows<T: Counter>(
        #[case] mut attr: AutoIncrementAttr<T>,
        #[case] expected: [Value; 2],
    ) {
        for value in expected {
            assert_eq!(attr.generate(&()), Ok(value));
        }
        assert!(attr.next_value().is_none());

        let result = attr.generate(&());

        assert_eq!(
            result,
            Err(AttrError::CounterOverflow {
                name: "id".to_owned()
            })
        );
        assert_eq!(attr.value(), expected[1]);
        assert!(attr.next_value().is_none());
    }

    #[test]
    fn hook_rewrite_does_not_move_counter() {
        let mut attr: AutoIncrementAttr<u64> = AutoIncrementAttr::new("id", 1, AttrOptions::new());
        attr.process(|processing| {
            let offset = processing.value() + 1000;
            processing.set_value(offset);
            Ok(())
        });

        assert_eq!(attr.generate(&()), Ok(Value::Uint(1001)));
        assert_eq!(attr.generate(&()), Ok(Value::Uint(1002)));
        assert_eq!(attr.next_value(), Some(3));
    }

    #[test]
    fn failing_hook_does_not_advance_counter() {
        let mut attr: AutoIncrementAttr<i64> = AutoIncrementAttr::new("id", 5, AttrOptions::new());
        attr.process(|_| Err(ProcessError::new("duplicate key")));

        assert!(attr.generate(&()).is_err());
        assert_eq!(attr.next_value(), Some(5));
    }

    #[test]
    fn set_value_leaves_counter_alone() {
        let mut attr: AutoIncrementAttr<i64> = AutoIncrementAttr::new("id", 1, AttrOptions::new());
        attr.generate(&()).expect("generated");

        attr.set_value(Value::Int(50)).expect("matching kind");

        assert_eq!(attr.value(), Value::Int(50));
        assert_eq!(attr.generate(&()), Ok(Value::Int(2)));
    }

    #[test]
    fn set_value_rejects_unsigned_for_signed_counter() {
        let mut attr: AutoIncrementAttr<i64> = AutoIncrementAttr::new("id", 1, AttrOptions::new());

        let result = attr.set_value(Value::Uint(2));

        assert!(matches!(result, Err(AttrError::KindMismatch { .. })));
        assert_eq!(attr.value(), Value::Int(0));
    }
}
