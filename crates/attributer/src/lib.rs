//! Declarative synthetic value generation for seed-data record attributes.
//!
//! An attribute is a named, typed field of a record together with the
//! strategy that produces its values. Every strategy implements the
//! [`Attributer`] contract, so a record builder can drive a heterogeneous
//! set of attributes uniformly and key each value by its column name.
//!
//! # Overview
//!
//! The crate provides:
//!
//! - [`FuncAttr`]: values from a caller-supplied function
//! - [`SeqAttr`]: a fixed preset list repeated cyclically
//! - [`AutoIncrementAttr`]: a counter advancing by one per generation
//! - Processing hooks, attached through [`Process`], that observe or adjust
//!   each generated value with the record under construction in view
//! - [`AttrOptions`] for column-name overrides
//!
//! Attributes hold mutable state (cursor, counter, current value) that
//! persists across generation calls. They are meant to be driven by one
//! owner at a time.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use attributer::{AttrOptions, Attributer, AutoIncrementAttr, FuncAttr, SeqAttr, Value};
//!
//! # fn main() -> Result<(), attributer::AttrError> {
//! let mut id = AutoIncrementAttr::<i64>::new("id", 1, AttrOptions::new());
//! let mut status = SeqAttr::<u64>::new("status", vec![1, 2, 3], AttrOptions::new())?;
//! let unit_price = AttrOptions::new().with_column_name("unit_price");
//! let mut price = FuncAttr::<f64>::float("price", || 42.0, unit_price);
//!
//! let mut records = Vec::new();
//! for _ in 0..4 {
//!     let mut record = BTreeMap::new();
//!     let fields: [&mut dyn Attributer<()>; 3] = [&mut id, &mut status, &mut price];
//!     for field in fields {
//!         record.insert(field.column_name().to_owned(), field.generate(&())?);
//!     }
//!     records.push(record);
//! }
//!
//! assert_eq!(records[3]["id"], Value::Int(4));
//! assert_eq!(records[3]["status"], Value::Uint(1));
//! assert_eq!(records[3]["unit_price"], Value::Float(42.0));
//! # Ok(())
//! # }
//! ```

mod attributer;
mod auto_increment;
mod error;
mod func;
mod kind;
mod options;
mod process;
mod seq;
mod state;

pub use attributer::{Attributer, Process};
pub use auto_increment::{AutoIncrementAttr, Counter};
pub use error::{AttrError, ProcessError};
pub use func::FuncAttr;
pub use kind::{AttrValue, Kind, Value};
pub use options::AttrOptions;
pub use process::{Processing, Processor};
pub use seq::SeqAttr;
