//! # fmtconv-core
//!
//! Formatted console I/O and explicit numeric type conversion.
//!
//! Two independent leaf components:
//! - [`format`] + [`scan`] (driven through [`console::Console`]): render
//!   tagged values through `%`-templates and scan tagged values back out of
//!   a line-oriented input stream.
//! - [`convert`]: width/sign reinterpretation, integer to float widening,
//!   and text <-> number conversion with explicit failure reporting.
//!
//! Values carry an explicit [`Kind`] tag chosen at the call site, which is
//! what `%T` renders.

#![deny(unsafe_code)]

pub mod console;
pub mod convert;
pub mod error;
pub mod format;
pub mod scan;
pub mod value;

pub use console::Console;
pub use convert::{ConversionResult, FloatPrecision, IntWidth};
pub use error::{ConversionError, ConversionFailure, ScanError};
pub use format::{Template, render};
pub use value::{Kind, Value};
