//! Function composition utilities.
//!
//! This module combines an ordered, non-empty list of stages into a single
//! stage that threads a value through each of them in a fixed order.
//!
//! # Overview
//!
//! - [`compose_r!`]: Compose stages right-to-left (mathematical composition)
//! - [`compose_l!`]: Compose stages left-to-right (data flow style)
//! - [`try_compose_r!`] / [`try_compose_l!`]: The same over `Result`-returning
//!   stages, stopping at the first `Err`
//! - [`compose_r`] / [`compose_l`]: The two-stage building blocks behind the macros
//! - [`to_fn1`] .. [`to_fn6`]: Turn a composition back into a plain closure
//!
//! # Helper Functions
//!
//! - [`identity`]: Returns its argument unchanged
//! - [`project_first`] / [`project_second`]: Return one of two arguments
//!
//! # Calling Convention
//!
//! Stages are invoked through the [`InvokeOnce`], [`InvokeMut`] and
//! [`Invoke`] traits with their arguments packed in a tuple. The entry stage
//! (rightmost for `compose_r!`, leftmost for `compose_l!`) receives the tuple
//! the composition was invoked with and may take up to six arguments. Every
//! other stage receives the 1-tuple holding the previous stage's result.
//!
//! ```
//! use fcompose::compose::Invoke;
//! use fcompose::{compose_l, compose_r};
//!
//! let negate = |x: i32| -x;
//! let to_string = |x: i32| x.to_string();
//! let append_bang = |text: String| text + "!";
//!
//! // compose_r!(f, g, h)(x) = f(g(h(x)))
//! assert_eq!(compose_r!(append_bang, to_string, negate).invoke((7,)), "-7!");
//!
//! // compose_l!(f, g, h)(x) = h(g(f(x)))
//! assert_eq!(compose_l!(negate, to_string, append_bang).invoke((7,)), "-7!");
//! ```
//!
//! Adjacent stages must agree on types. A mismatch is a compile-time error:
//! the composition does not implement the invocation traits for the given
//! arguments.
//!
//! ```compile_fail
//! use fcompose::compose::Invoke;
//! use fcompose::compose_r;
//!
//! let length = |text: String| text.len();
//! let negate = |x: i32| -x;
//!
//! // `length` expects a String but `negate` produces an i32.
//! compose_r!(length, negate).invoke((1,));
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose_r!(f, compose_r!(g, h)) == compose_r!(compose_r!(f, g), h)`
//! - **Left Identity**: `compose_r!(identity, f) == f`
//! - **Right Identity**: `compose_r!(f, identity) == f`
//! - **Duality**: `compose_l!(f, g, h) == compose_r!(h, g, f)`
//!
//! # Failures
//!
//! Compositions never catch anything. A panic inside a stage unwinds
//! through the composition and no later stage runs. A `Result` returned by
//! a stage is an ordinary value to the next stage unless the fallible
//! compositions of [`try_compose_r!`] and [`try_compose_l!`] are used.

mod adapt;
mod compose_left;
mod compose_right;
mod invoke;
mod try_compose;
mod utils;

pub use adapt::{
    to_fn_mut1, to_fn_mut2, to_fn_mut3, to_fn_mut4, to_fn_mut5, to_fn_mut6, to_fn1, to_fn2,
    to_fn3, to_fn4, to_fn5, to_fn6,
};
pub use compose_left::{ComposeLeft, compose_l};
pub use compose_right::{ComposeRight, compose_r};
pub use invoke::{Invoke, InvokeMut, InvokeOnce};
pub use try_compose::{TryComposeLeft, TryComposeRight, try_compose_l, try_compose_r};
pub use utils::{identity, project_first, project_second};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose_l;
pub use crate::compose_r;
pub use crate::try_compose_l;
pub use crate::try_compose_r;
