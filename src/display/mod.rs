//! Display contract between the state machine and a presentation layer.
//!
//! Nothing here feeds back into transitions: a presentation layer reads a
//! [`CalculatorState`](crate::calculator::CalculatorState) after each
//! dispatch and renders it through [`Screen`] or [`format_operand`].

mod format;
mod screen;

pub use format::{format_operand, FormatOptions};
pub use screen::Screen;
