//! # fcompose
//!
//! Generic function objects for Rust: function composition in both
//! directions, argument and tuple projections, and a type-agnostic output
//! sink.
//!
//! ## Overview
//!
//! - **Function Composition**: `compose_r!`, `compose_l!` and their fallible
//!   counterparts `try_compose_r!`, `try_compose_l!`
//! - **Projections**: `identity`, `project_first`, `project_second`,
//!   `select_first`, `select_second`
//! - **Output**: `Inserter`, a delimiter-aware writer usable as the last stage
//!   of a composition
//!
//! ## Feature Flags
//!
//! - `compose`: Function composition and argument projections
//! - `project`: Tuple element selectors
//! - `output`: The `Inserter` output sink (implies `compose`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fcompose::prelude::*;
//!
//! let negate = |x: i32| -x;
//! let to_string = |x: i32| x.to_string();
//! let append_bang = |text: String| text + "!";
//!
//! let composed = compose_r!(append_bang, to_string, negate);
//! assert_eq!(composed.invoke((7,)), "-7!");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the invocation traits, constructors, macros and helpers of
/// every enabled module.
///
/// # Usage
///
/// ```rust
/// use fcompose::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "project")]
    pub use crate::project::*;

    #[cfg(feature = "output")]
    pub use crate::output::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "project")]
pub mod project;

#[cfg(feature = "output")]
pub mod output;
