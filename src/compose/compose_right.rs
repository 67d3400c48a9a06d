//! Right-to-left composition.
//!
//! This module provides [`ComposeRight`], the [`compose_r`] constructor and
//! the [`compose_r!`](crate::compose_r) macro. They follow the mathematical
//! notation for function composition: the rightmost stage is evaluated first.

use super::invoke::{Invoke, InvokeMut, InvokeOnce};

/// Two stages composed right-to-left.
///
/// Invoking a `ComposeRight` with an argument tuple invokes `inner` with that
/// tuple and then `outer` with the single result:
///
/// ```text
/// compose_r(outer, inner)(args...) = outer(inner(args...))
/// ```
///
/// Longer chains are right-nested pairs built by
/// [`compose_r!`](crate::compose_r). Only the innermost stage receives the
/// original arguments and may take up to six of them; every other stage is unary.
///
/// `ComposeRight` implements [`InvokeOnce`], [`InvokeMut`] and [`Invoke`]
/// whenever both stages do, so a composition is usable through a shared
/// reference exactly when every stage is.
///
/// # Examples
///
/// ```
/// use fcompose::compose::{Invoke, compose_r};
///
/// let append_bang = |text: String| text + "!";
/// let to_string = |x: i32| x.to_string();
///
/// let shout = compose_r(append_bang, to_string);
/// assert_eq!(shout.invoke((7,)), "7!");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ComposeRight<Outer, Inner> {
    outer: Outer,
    inner: Inner,
}

impl<Outer, Inner> ComposeRight<Outer, Inner> {
    /// Creates a composition that applies `inner` first and `outer` to its result.
    #[inline]
    pub const fn new(outer: Outer, inner: Inner) -> Self {
        Self { outer, inner }
    }

    /// Returns the stage evaluated last.
    pub const fn outer(&self) -> &Outer {
        &self.outer
    }

    /// Returns the stage evaluated first.
    pub const fn inner(&self) -> &Inner {
        &self.inner
    }

    /// Splits the composition back into `(outer, inner)`.
    pub fn into_parts(self) -> (Outer, Inner) {
        (self.outer, self.inner)
    }
}

impl<Outer, Inner, Args> InvokeOnce<Args> for ComposeRight<Outer, Inner>
where
    Inner: InvokeOnce<Args>,
    Outer: InvokeOnce<(Inner::Output,)>,
{
    type Output = Outer::Output;

    #[inline]
    fn invoke_once(self, args: Args) -> Self::Output {
        let intermediate = self.inner.invoke_once(args);
        self.outer.invoke_once((intermediate,))
    }
}

impl<Outer, Inner, Args> InvokeMut<Args> for ComposeRight<Outer, Inner>
where
    Inner: InvokeMut<Args>,
    Outer: InvokeMut<(Inner::Output,)>,
{
    #[inline]
    fn invoke_mut(&mut self, args: Args) -> Self::Output {
        let intermediate = self.inner.invoke_mut(args);
        self.outer.invoke_mut((intermediate,))
    }
}

impl<Outer, Inner, Args> Invoke<Args> for ComposeRight<Outer, Inner>
where
    Inner: Invoke<Args>,
    Outer: Invoke<(Inner::Output,)>,
{
    #[inline]
    fn invoke(&self, args: Args) -> Self::Output {
        let intermediate = self.inner.invoke(args);
        self.outer.invoke((intermediate,))
    }
}

/// Composes two stages right-to-left.
///
/// `compose_r(f, g)` evaluates `f(g(args...))`. Use
/// [`compose_r!`](crate::compose_r) for more than two stages.
///
/// # Examples
///
/// ```
/// use fcompose::compose::{Invoke, compose_r};
///
/// let absolute_sine = compose_r(f64::abs, f64::sin);
/// assert!((absolute_sine.invoke((-1.0,)) - 1.0_f64.sin()).abs() < 1e-12);
/// ```
#[inline]
pub const fn compose_r<Outer, Inner>(outer: Outer, inner: Inner) -> ComposeRight<Outer, Inner> {
    ComposeRight::new(outer, inner)
}

/// Composes stages from right to left.
///
/// `compose_r!(f, g, h)` evaluates `f(g(h(args...)))`. The rightmost stage
/// receives the original arguments and may take up to six of them; every
/// other stage takes exactly one.
///
/// # Syntax
///
/// - `compose_r!(f)` - Returns `f` unchanged
/// - `compose_r!(f, g)` - Returns `compose_r(f, g)`
/// - `compose_r!(f, g, h, ...)` - Returns `compose_r(f, compose_r!(g, h, ...))`
///
/// At least one stage is required; `compose_r!()` does not compile.
///
/// # Examples
///
/// ## Type conversion through the chain
///
/// ```
/// use fcompose::compose::Invoke;
/// use fcompose::compose_r;
///
/// let negate = |x: i32| -x;
/// let to_string = |x: i32| x.to_string();
/// let append_bang = |text: String| text + "!";
///
/// let composed = compose_r!(append_bang, to_string, negate);
/// assert_eq!(composed.invoke((7,)), "-7!");
/// ```
///
/// ## Binary entry stage
///
/// ```
/// use fcompose::compose::Invoke;
/// use fcompose::compose_r;
///
/// let composed = compose_r!(f64::abs, f64::sin, f64::atan2);
/// let value = composed.invoke((1.0, 1.0));
/// assert!((value - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
/// ```
///
/// ## Associativity
///
/// ```
/// use fcompose::compose::Invoke;
/// use fcompose::compose_r;
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// let flat = compose_r!(f, g, h);
/// let nested_right = compose_r!(f, compose_r!(g, h));
/// let nested_left = compose_r!(compose_r!(f, g), h);
///
/// assert_eq!(flat.invoke((10,)), nested_right.invoke((10,)));
/// assert_eq!(flat.invoke((10,)), nested_left.invoke((10,)));
/// ```
#[macro_export]
macro_rules! compose_r {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {
        $crate::compose::compose_r($outer_function, $inner_function)
    };

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::compose_r(
            $outer_function,
            $crate::compose_r!($($remaining_functions),+),
        )
    };
}
