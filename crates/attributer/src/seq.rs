//! Attributes that cycle through a fixed list of preset values.

use std::fmt;

use crate::error::AttrError;
use crate::kind::AttrValue;
use crate::options::AttrOptions;
use crate::state::{AttrState, Strategy};

/// Attribute returning its presets in order, wrapping back to the first
/// after the last.
///
/// The `i`-th generation returns `presets[(i - 1) % presets.len()]`.
///
/// # Example
///
/// ```
/// use attributer::{AttrOptions, Attributer, SeqAttr, Value};
///
/// # fn main() -> Result<(), attributer::AttrError> {
/// let mut status = SeqAttr::<i64>::new("status", vec![1, 2, 3], AttrOptions::new())?;
///
/// let values = (0..4)
///     .map(|_| status.generate(&()))
///     .collect::<Result<Vec<_>, _>>()?;
///
/// assert_eq!(values, [Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(1)]);
/// # Ok(())
/// # }
/// ```
pub struct SeqAttr<T, O: ?Sized = ()> {
    state: AttrState<T, O>,
    presets: Vec<T>,
    cursor: usize,
}

impl<T: AttrValue, O: ?Sized> SeqAttr<T, O> {
    /// Creates an attribute cycling through `presets`.
    ///
    /// # Errors
    ///
    /// Returns [`AttrError::EmptySequence`] when `presets` is empty.
    pub fn new(
        name: impl Into<String>,
        presets: impl Into<Vec<T>>,
        options: AttrOptions,
    ) -> Result<Self, AttrError> {
        let attr_name = name.into();
        let values = presets.into();
        if values.is_empty() {
            return Err(AttrError::EmptySequence { name: attr_name });
        }

        Ok(Self {
            state: AttrState::new(attr_name, options),
            presets: values,
            cursor: 0,
        })
    }

    /// Returns the preset values in generation order.
    #[must_use]
    pub fn presets(&self) -> &[T] {
        &self.presets
    }

    /// Returns the index of the preset the next generation will read.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    fn advance(&mut self) {
        self.cursor += 1;
        if self.cursor >= self.presets.len() {
            self.cursor = 0;
        }
    }
}

impl<T: AttrValue, O: ?Sized> Strategy<O> for SeqAttr<T, O> {
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
        let Some(&preset) = self.presets.get(self.cursor) else {
            return Err(AttrError::EmptySequence {
                name: self.state.name().to_owned(),
            });
        };
        let value = self.state.settle(preset, owner)?;
        self.advance();
        Ok(value)
    }
}

impl<T: AttrValue, O: ?Sized> fmt::Debug for SeqAttr<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeqAttr")
            .field("state", &self.state)
            .field("presets", &self.presets)
            .field("cursor", &self.cursor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::attributer::{Attributer, Process};
    use crate::error::ProcessError;
    use crate::kind::Value;

    #[fixture]
    fn status() -> SeqAttr<i64> {
        SeqAttr::new("status", vec![1, 2, 3], AttrOptions::new()).expect("non-empty presets")
    }

    fn generate_n(attr: &mut SeqAttr<i64>, count: usize) -> Vec<Value> {
        (0..count)
            .map(|_| attr.generate(&()).expect("generated"))
            .collect()
    }

    #[rstest]
    fn cycles_back_to_first_preset(mut status: SeqAttr<i64>) {
        let values = generate_n(&mut status, 4);
        assert_eq!(
            values,
            [Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(1)]
        );
    }

    #[rstest]
    fn cursor_wraps_after_last_preset(mut status: SeqAttr<i64>) {
        assert_eq!(status.cursor(), 0);
        generate_n(&mut status, 2);
        assert_eq!(status.cursor(), 2);
        generate_n(&mut status, 1);
        assert_eq!(status.cursor(), 0);
    }

    #[test]
    fn rejects_empty_presets() {
        let result = SeqAttr::<u64>::new("status", Vec::new(), AttrOptions::new());
        assert!(matches!(
            result,
            Err(AttrError::EmptySequence { ref name }) if name == "status"
        ));
    }

    #[test]
    fn single_preset_repeats() {
        let mut attr: SeqAttr<f64> =
            SeqAttr::new("ratio", [0.5], AttrOptions::new()).expect("non-empty presets");
        for _ in 0..3 {
            assert_eq!(attr.generate(&()), Ok(Value::Float(0.5)));
            assert_eq!(attr.cursor(), 0);
        }
    }

    #[test]
    fn matches_presets_modulo_length_for_random_shapes() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let len = rng.random_range(1..8_usize);
            let count = rng.random_range(1..40_usize);
            let presets: Vec<u64> = (0..len).map(|_| rng.random()).collect();
            let mut attr: SeqAttr<u64> =
                SeqAttr::new("n", presets.clone(), AttrOptions::new()).expect("non-empty");

            let values: Vec<Value> = (0..count)
                .map(|_| attr.generate(&()).expect("generated"))
                .collect();
            let expected: Vec<Value> = presets
                .iter()
                .copied()
                .cycle()
                .take(count)
                .map(Value::Uint)
                .collect();

            assert_eq!(values, expected);
        }
    }

    #[rstest]
    fn failing_processor_keeps_cursor(mut status: SeqAttr<i64>) {
        status.process(|processing| {
            if processing.value() == 2 {
                Err(ProcessError::new("two is reserved"))
            } else {
                Ok(())
            }
        });

        assert_eq!(status.generate(&()), Ok(Value::Int(1)));
        assert!(status.generate(&()).is_err());
        assert_eq!(status.cursor(), 1);
        assert!(status.generate(&()).is_err());
    }

    #[rstest]
    fn processor_adjusts_returned_value(mut status: SeqAttr<i64>) {
        status.process(|processing| {
            let scaled = processing.value() * 10;
            processing.set_value(scaled);
            Ok(())
        });

        assert_eq!(generate_n(&mut status, 2), [Value::Int(10), Value::Int(20)]);
        assert_eq!(status.get(), 20);
        assert_eq!(status.presets(), [1, 2, 3]);
    }

    #[rstest]
    fn set_value_does_not_move_cursor(mut status: SeqAttr<i64>) {
        status.set_value(Value::Int(99)).expect("matching kind");

        assert_eq!(status.value(), Value::Int(99));
        assert_eq!(status.generate(&()), Ok(Value::Int(1)));
    }

    #[rstest]
    fn set_value_with_wrong_kind_is_rejected(mut status: SeqAttr<i64>) {
        generate_n(&mut status, 1);

        let result = status.set_value(Value::Float(1.0));

        assert!(matches!(result, Err(AttrError::KindMismatch { .. })));
        assert_eq!(status.value(), Value::Int(1));
    }
}
