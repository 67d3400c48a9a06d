//! Invocation traits shared by every stage of a composition.
//!
//! Rust closures have no variadic call operator, so a stage receives its
//! arguments packed into a tuple: `()` for a nullary stage, `(A,)` for a
//! unary one, `(A, B)` for a binary one, and so on up to six arguments.
//!
//! The three traits mirror [`FnOnce`], [`FnMut`] and [`Fn`]:
//!
//! - [`InvokeOnce`]: invocation by value, may consume the stage
//! - [`InvokeMut`]: invocation through a mutable reference, may update state
//! - [`Invoke`]: invocation through a shared reference
//!
//! Every closure, function item and function pointer of arity 0 through 6
//! implements the traits through blanket impls, and every composition built
//! by this module implements them as well. This is what allows compositions
//! to be nested inside other compositions.
//!
//! # Examples
//!
//! ```
//! use fcompose::compose::{Invoke, InvokeMut};
//!
//! let hypotenuse = |x: f64, y: f64| x.hypot(y);
//! assert!((hypotenuse.invoke((3.0, 4.0)) - 5.0).abs() < f64::EPSILON);
//!
//! let mut total = 0;
//! let mut accumulate = |x: i32| {
//!     total += x;
//!     total
//! };
//! assert_eq!(accumulate.invoke_mut((2,)), 2);
//! assert_eq!(accumulate.invoke_mut((3,)), 5);
//! ```

/// A stage that can be invoked once, by value.
///
/// This is the most general invocation trait: every stage implements it.
pub trait InvokeOnce<Args> {
    /// The value produced by the stage.
    type Output;

    /// Invokes the stage with the packed argument tuple, consuming it.
    fn invoke_once(self, args: Args) -> Self::Output;
}

/// A stage that can be invoked repeatedly through a mutable reference.
///
/// Stages carrying internal mutable state (counters, buffers, writers)
/// implement this trait but not [`Invoke`].
pub trait InvokeMut<Args>: InvokeOnce<Args> {
    /// Invokes the stage with the packed argument tuple.
    fn invoke_mut(&mut self, args: Args) -> Self::Output;
}

/// A stage that can be invoked repeatedly through a shared reference.
pub trait Invoke<Args>: InvokeMut<Args> {
    /// Invokes the stage with the packed argument tuple.
    fn invoke(&self, args: Args) -> Self::Output;
}

macro_rules! impl_invoke_for_functions {
    ($(($($argument:ident),*)),* $(,)?) => {
        paste::paste! {
            $(
                impl<Function, Return, $($argument),*> InvokeOnce<($($argument,)*)> for Function
                where
                    Function: FnOnce($($argument),*) -> Return,
                {
                    type Output = Return;

                    #[inline]
                    fn invoke_once(self, ($([<$argument:lower>],)*): ($($argument,)*)) -> Return {
                        self($([<$argument:lower>]),*)
                    }
                }

                impl<Function, Return, $($argument),*> InvokeMut<($($argument,)*)> for Function
                where
                    Function: FnMut($($argument),*) -> Return,
                {
                    #[inline]
                    fn invoke_mut(&mut self, ($([<$argument:lower>],)*): ($($argument,)*)) -> Return {
                        self($([<$argument:lower>]),*)
                    }
                }

                impl<Function, Return, $($argument),*> Invoke<($($argument,)*)> for Function
                where
                    Function: Fn($($argument),*) -> Return,
                {
                    #[inline]
                    fn invoke(&self, ($([<$argument:lower>],)*): ($($argument,)*)) -> Return {
                        self($([<$argument:lower>]),*)
                    }
                }
            )*
        }
    };
}

impl_invoke_for_functions!(
    (),
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
);
