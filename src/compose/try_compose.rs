//! Fallible composition over `Result`-returning stages.
//!
//! A plain composition passes whatever a stage returns, including a
//! `Result`, on to the next stage as an ordinary value. The compositions in
//! this module instead treat `Err` as a failure: the first stage to return
//! `Err` stops the chain, no later stage is evaluated, and the error is
//! returned to the caller after the same `From` conversion the `?` operator
//! performs.
//!
//! # Examples
//!
//! ```
//! use fcompose::compose::Invoke;
//! use fcompose::try_compose_l;
//!
//! fn parse(text: &str) -> Result<i32, String> {
//!     text.trim().parse().map_err(|_| format!("not a number: {text}"))
//! }
//!
//! fn reciprocal(value: i32) -> Result<f64, String> {
//!     if value == 0 {
//!         Err("division by zero".to_string())
//!     } else {
//!         Ok(1.0 / f64::from(value))
//!     }
//! }
//!
//! let checked = try_compose_l!(parse, reciprocal);
//! assert_eq!(checked.invoke((" 4 ",)), Ok(0.25));
//! assert_eq!(checked.invoke(("0",)), Err("division by zero".to_string()));
//! assert_eq!(checked.invoke(("x",)), Err("not a number: x".to_string()));
//! ```

use super::invoke::{Invoke, InvokeMut, InvokeOnce};

/// Two fallible stages composed right-to-left.
///
/// `inner` receives the original arguments. If it returns `Ok(value)`,
/// `outer` is invoked with `(value,)`; if it returns `Err(error)`, the
/// composition returns `Err(error.into())` without invoking `outer`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TryComposeRight<Outer, Inner> {
    outer: Outer,
    inner: Inner,
}

impl<Outer, Inner> TryComposeRight<Outer, Inner> {
    /// Creates a fallible composition that applies `inner` first.
    #[inline]
    pub const fn new(outer: Outer, inner: Inner) -> Self {
        Self { outer, inner }
    }

    /// Splits the composition back into `(outer, inner)`.
    pub fn into_parts(self) -> (Outer, Inner) {
        (self.outer, self.inner)
    }
}

impl<Outer, Inner, Args, Value, Final, Error, OuterError> InvokeOnce<Args>
    for TryComposeRight<Outer, Inner>
where
    Inner: InvokeOnce<Args, Output = Result<Value, Error>>,
    Outer: InvokeOnce<(Value,), Output = Result<Final, OuterError>>,
    OuterError: From<Error>,
{
    type Output = Result<Final, OuterError>;

    #[inline]
    fn invoke_once(self, args: Args) -> Self::Output {
        let value = self.inner.invoke_once(args)?;
        self.outer.invoke_once((value,))
    }
}

impl<Outer, Inner, Args, Value, Final, Error, OuterError> InvokeMut<Args>
    for TryComposeRight<Outer, Inner>
where
    Inner: InvokeMut<Args, Output = Result<Value, Error>>,
    Outer: InvokeMut<(Value,), Output = Result<Final, OuterError>>,
    OuterError: From<Error>,
{
    #[inline]
    fn invoke_mut(&mut self, args: Args) -> Self::Output {
        let value = self.inner.invoke_mut(args)?;
        self.outer.invoke_mut((value,))
    }
}

impl<Outer, Inner, Args, Value, Final, Error, OuterError> Invoke<Args>
    for TryComposeRight<Outer, Inner>
where
    Inner: Invoke<Args, Output = Result<Value, Error>>,
    Outer: Invoke<(Value,), Output = Result<Final, OuterError>>,
    OuterError: From<Error>,
{
    #[inline]
    fn invoke(&self, args: Args) -> Self::Output {
        let value = self.inner.invoke(args)?;
        self.outer.invoke((value,))
    }
}

/// Two fallible stages composed left-to-right.
///
/// `first` receives the original arguments. If it returns `Ok(value)`,
/// `then` is invoked with `(value,)`; if it returns `Err(error)`, the
/// composition returns `Err(error.into())` without invoking `then`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TryComposeLeft<First, Then> {
    first: First,
    then: Then,
}

impl<First, Then> TryComposeLeft<First, Then> {
    /// Creates a fallible composition that applies `first` first.
    #[inline]
    pub const fn new(first: First, then: Then) -> Self {
        Self { first, then }
    }

    /// Splits the composition back into `(first, then)`.
    pub fn into_parts(self) -> (First, Then) {
        (self.first, self.then)
    }
}

impl<First, Then, Args, Value, Final, Error, ThenError> InvokeOnce<Args>
    for TryComposeLeft<First, Then>
where
    First: InvokeOnce<Args, Output = Result<Value, Error>>,
    Then: InvokeOnce<(Value,), Output = Result<Final, ThenError>>,
    ThenError: From<Error>,
{
    type Output = Result<Final, ThenError>;

    #[inline]
    fn invoke_once(self, args: Args) -> Self::Output {
        let value = self.first.invoke_once(args)?;
        self.then.invoke_once((value,))
    }
}

impl<First, Then, Args, Value, Final, Error, ThenError> InvokeMut<Args>
    for TryComposeLeft<First, Then>
where
    First: InvokeMut<Args, Output = Result<Value, Error>>,
    Then: InvokeMut<(Value,), Output = Result<Final, ThenError>>,
    ThenError: From<Error>,
{
    #[inline]
    fn invoke_mut(&mut self, args: Args) -> Self::Output {
        let value = self.first.invoke_mut(args)?;
        self.then.invoke_mut((value,))
    }
}

impl<First, Then, Args, Value, Final, Error, ThenError> Invoke<Args>
    for TryComposeLeft<First, Then>
where
    First: Invoke<Args, Output = Result<Value, Error>>,
    Then: Invoke<(Value,), Output = Result<Final, ThenError>>,
    ThenError: From<Error>,
{
    #[inline]
    fn invoke(&self, args: Args) -> Self::Output {
        let value = self.first.invoke(args)?;
        self.then.invoke((value,))
    }
}

/// Composes two fallible stages right-to-left.
#[inline]
pub const fn try_compose_r<Outer, Inner>(
    outer: Outer,
    inner: Inner,
) -> TryComposeRight<Outer, Inner> {
    TryComposeRight::new(outer, inner)
}

/// Composes two fallible stages left-to-right.
#[inline]
pub const fn try_compose_l<First, Then>(first: First, then: Then) -> TryComposeLeft<First, Then> {
    TryComposeLeft::new(first, then)
}

/// Composes fallible stages from right to left, stopping at the first `Err`.
///
/// `try_compose_r!(f, g, h)` evaluates `h(args...)?`, then `g(..)?`, then
/// `f(..)`. A single stage is returned unchanged.
///
/// # Examples
///
/// ```
/// use fcompose::compose::Invoke;
/// use fcompose::try_compose_r;
///
/// let checked_div = |numerator: i32, denominator: i32| {
///     numerator.checked_div(denominator).ok_or("division by zero")
/// };
/// let checked_neg = |value: i32| value.checked_neg().ok_or("overflow");
///
/// let composed = try_compose_r!(checked_neg, checked_div);
/// assert_eq!(composed.invoke((10, 2)), Ok(-5));
/// assert_eq!(composed.invoke((10, 0)), Err("division by zero"));
/// ```
#[macro_export]
macro_rules! try_compose_r {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {
        $crate::compose::try_compose_r($outer_function, $inner_function)
    };

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::try_compose_r(
            $outer_function,
            $crate::try_compose_r!($($remaining_functions),+),
        )
    };
}

/// Composes fallible stages from left to right, stopping at the first `Err`.
///
/// `try_compose_l!(f, g, h)` evaluates `f(args...)?`, then `g(..)?`, then
/// `h(..)`. A single stage is returned unchanged.
#[macro_export]
macro_rules! try_compose_l {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $then_function:expr $(,)?) => {
        $crate::compose::try_compose_l($first_function, $then_function)
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::try_compose_l(
            $first_function,
            $crate::try_compose_l!($($remaining_functions),+),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, PartialEq, Eq)]
    struct StageError(&'static str);

    #[derive(Debug, PartialEq, Eq)]
    enum PipelineError {
        Stage(&'static str),
    }

    impl From<StageError> for PipelineError {
        fn from(error: StageError) -> Self {
            Self::Stage(error.0)
        }
    }

    #[test]
    fn test_error_skips_later_stages() {
        let later_calls = Cell::new(0);
        let failing = |_: i32| -> Result<i32, StageError> { Err(StageError("boom")) };
        let later = |x: i32| -> Result<i32, StageError> {
            later_calls.set(later_calls.get() + 1);
            Ok(x)
        };

        let composed = try_compose_l!(failing, later, later);
        assert_eq!(composed.invoke((1,)), Err(StageError("boom")));
        assert_eq!(later_calls.get(), 0);
    }

    #[test]
    fn test_error_is_converted_with_from() {
        let inner = |x: i32| -> Result<i32, StageError> {
            if x < 0 { Err(StageError("negative")) } else { Ok(x) }
        };
        let outer = |x: i32| -> Result<i32, PipelineError> { Ok(x * 2) };

        let composed = try_compose_r(outer, inner);
        assert_eq!(composed.invoke((4,)), Ok(8));
        assert_eq!(
            composed.invoke((-1,)),
            Err(PipelineError::Stage("negative"))
        );
    }

    #[test]
    fn test_single_stage_is_unchanged() {
        let only = |x: i32| -> Result<i32, StageError> { Ok(x + 1) };
        let composed = try_compose_r!(only);
        assert_eq!(composed.invoke((1,)), Ok(2));
    }
}
