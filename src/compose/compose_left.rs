//! Left-to-right composition.
//!
//! This module provides [`ComposeLeft`], the [`compose_l`] constructor and
//! the [`compose_l!`](crate::compose_l) macro. Stages are evaluated in the
//! order they are written, which matches the mental model of data flowing
//! through a pipeline.

use super::invoke::{Invoke, InvokeMut, InvokeOnce};

/// Two stages composed left-to-right.
///
/// Invoking a `ComposeLeft` with an argument tuple invokes `first` with that
/// tuple and then `then` with the single result:
///
/// ```text
/// compose_l(first, then)(args...) = then(first(args...))
/// ```
///
/// Longer chains are right-nested pairs built by
/// [`compose_l!`](crate::compose_l), so the leftmost stage is always the
/// one that receives the original arguments.
///
/// # Relationship with `ComposeRight`
///
/// `compose_l(f, g)` is equivalent to `compose_r(g, f)`.
///
/// # Examples
///
/// ```
/// use fcompose::compose::{Invoke, compose_l};
///
/// let parse_length = compose_l(|text: &str| text.trim().len(), |length: usize| length * 2);
/// assert_eq!(parse_length.invoke(("  abc ",)), 6);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ComposeLeft<First, Then> {
    first: First,
    then: Then,
}

impl<First, Then> ComposeLeft<First, Then> {
    /// Creates a composition that applies `first` and then `then` to its result.
    #[inline]
    pub const fn new(first: First, then: Then) -> Self {
        Self { first, then }
    }

    /// Returns the stage evaluated first.
    pub const fn first(&self) -> &First {
        &self.first
    }

    /// Returns the stage evaluated last.
    pub const fn then(&self) -> &Then {
        &self.then
    }

    /// Splits the composition back into `(first, then)`.
    pub fn into_parts(self) -> (First, Then) {
        (self.first, self.then)
    }
}

impl<First, Then, Args> InvokeOnce<Args> for ComposeLeft<First, Then>
where
    First: InvokeOnce<Args>,
    Then: InvokeOnce<(First::Output,)>,
{
    type Output = Then::Output;

    #[inline]
    fn invoke_once(self, args: Args) -> Self::Output {
        let intermediate = self.first.invoke_once(args);
        self.then.invoke_once((intermediate,))
    }
}

impl<First, Then, Args> InvokeMut<Args> for ComposeLeft<First, Then>
where
    First: InvokeMut<Args>,
    Then: InvokeMut<(First::Output,)>,
{
    #[inline]
    fn invoke_mut(&mut self, args: Args) -> Self::Output {
        let intermediate = self.first.invoke_mut(args);
        self.then.invoke_mut((intermediate,))
    }
}

impl<First, Then, Args> Invoke<Args> for ComposeLeft<First, Then>
where
    First: Invoke<Args>,
    Then: Invoke<(First::Output,)>,
{
    #[inline]
    fn invoke(&self, args: Args) -> Self::Output {
        let intermediate = self.first.invoke(args);
        self.then.invoke((intermediate,))
    }
}

/// Composes two stages left-to-right.
///
/// `compose_l(f, g)` evaluates `g(f(args...))`.
#[inline]
pub const fn compose_l<First, Then>(first: First, then: Then) -> ComposeLeft<First, Then> {
    ComposeLeft::new(first, then)
}

/// Composes stages from left to right.
///
/// `compose_l!(f, g, h)` evaluates `h(g(f(args...)))`. The leftmost stage
/// receives the original arguments and may take up to six of them; every
/// other stage takes exactly one.
///
/// # Relationship with `compose_r!`
///
/// `compose_l!(f, g, h)` is equivalent to `compose_r!(h, g, f)`.
///
/// # Syntax
///
/// - `compose_l!(f)` - Returns `f` unchanged
/// - `compose_l!(f, g)` - Returns `compose_l(f, g)`
/// - `compose_l!(f, g, h, ...)` - Returns `compose_l(f, compose_l!(g, h, ...))`
///
/// At least one stage is required; `compose_l!()` does not compile.
///
/// # Examples
///
/// ```
/// use fcompose::compose::Invoke;
/// use fcompose::compose_l;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // 3 -> square(3)=9 -> double(9)=18 -> add_one(18)=19
/// let composed = compose_l!(square, double, add_one);
/// assert_eq!(composed.invoke((3,)), 19);
/// ```
///
/// ## Binary entry stage
///
/// ```
/// use fcompose::compose::Invoke;
/// use fcompose::compose_l;
///
/// let describe = compose_l!(
///     |name: &str, age: u32| format!("{name} ({age})"),
///     |text: String| text.to_uppercase(),
/// );
/// assert_eq!(describe.invoke(("ada", 36)), "ADA (36)");
/// ```
#[macro_export]
macro_rules! compose_l {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $then_function:expr $(,)?) => {
        $crate::compose::compose_l($first_function, $then_function)
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::compose_l(
            $first_function,
            $crate::compose_l!($($remaining_functions),+),
        )
    };
}
