//! Argument projections.
//!
//! - [`identity`]: returns its single argument unchanged
//! - [`project_first`]: returns the first of two arguments
//! - [`project_second`]: returns the second of two arguments
//!
//! All three move their argument through untouched: an owned value stays
//! owned, a reference stays a reference, and nothing is cloned.

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose_r!(identity, f)` behaves like `f`
/// - `compose_r!(f, identity)` behaves like `f`
///
/// # Examples
///
/// ```
/// use fcompose::compose::{Invoke, identity};
/// use fcompose::compose_r;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(compose_r!(identity, double).invoke((5,)), double(5));
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Returns the first of two arguments, discarding the second.
///
/// # Examples
///
/// ```
/// use fcompose::compose::project_first;
///
/// let keys = ["a", "b"];
/// let values = [1, 2];
/// let picked: Vec<&str> = keys.into_iter().zip(values).map(|(k, v)| project_first(k, v)).collect();
/// assert_eq!(picked, vec!["a", "b"]);
/// ```
#[inline]
pub fn project_first<T, U>(first: T, _second: U) -> T {
    first
}

/// Returns the second of two arguments, discarding the first.
///
/// Used as the entry stage of a composition, it turns a binary call site
/// into a unary chain:
///
/// ```
/// use fcompose::compose::{Invoke, project_second};
/// use fcompose::compose_r;
///
/// let length_of_second = compose_r!(str::len, project_second::<i32, &str>);
/// assert_eq!(length_of_second.invoke((7, "four")), 4);
/// ```
#[inline]
pub fn project_second<T, U>(_first: T, second: U) -> U {
    second
}
