//! Output side: number formatting and the results document.

pub mod json;
pub mod number;

pub use json::{render_results, write_results};
pub use number::{DEFAULT_DECIMALS, format_rounded};
