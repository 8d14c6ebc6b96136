//! Outline model.
//!
//! Line classification and the intermediate representation consumed by the
//! HTML renderer.

mod line;
mod outline;

pub use line::*;
pub use outline::*;
