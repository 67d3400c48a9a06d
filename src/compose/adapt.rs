//! Adapters from stages back to ordinary closures.
//!
//! A composition is invoked with a packed argument tuple, but iterator
//! adaptors such as [`Iterator::map`] expect a closure taking its arguments
//! one by one. The `to_fn*` functions bridge the two for arities 1 through 6.
//!
//! - `to_fn1` .. `to_fn6` require [`Invoke`] and return `impl Fn`
//! - `to_fn_mut1` .. `to_fn_mut6` require [`InvokeMut`] and return `impl FnMut`
//!
//! # Examples
//!
//! ```
//! use fcompose::compose::to_fn2;
//! use fcompose::compose_r;
//!
//! let numerators = [1.0, 2.0, 3.0];
//! let denominators = [3.0, 2.0, 1.0];
//!
//! let angle_sine = to_fn2(compose_r!(f64::abs, f64::sin, f64::atan2));
//! let values: Vec<f64> = numerators
//!     .into_iter()
//!     .zip(denominators)
//!     .map(|(y, x)| angle_sine(y, x))
//!     .collect();
//!
//! assert!((values[1] - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
//! ```

use super::invoke::{Invoke, InvokeMut};

macro_rules! define_closure_adapters {
    ($($arity:literal => ($($argument:ident),+)),+ $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Turns an [`Invoke`] stage into a closure taking " $arity " argument(s)."]
                #[inline]
                pub fn [<to_fn $arity>]<Stage, $($argument),+>(
                    stage: Stage,
                ) -> impl Fn($($argument),+) -> Stage::Output
                where
                    Stage: Invoke<($($argument,)+)>,
                {
                    move |$([<$argument:lower>]),+| stage.invoke(($([<$argument:lower>],)+))
                }

                #[doc = "Turns an [`InvokeMut`] stage into a closure taking " $arity " argument(s)."]
                #[inline]
                pub fn [<to_fn_mut $arity>]<Stage, $($argument),+>(
                    mut stage: Stage,
                ) -> impl FnMut($($argument),+) -> Stage::Output
                where
                    Stage: InvokeMut<($($argument,)+)>,
                {
                    move |$([<$argument:lower>]),+| stage.invoke_mut(($([<$argument:lower>],)+))
                }
            )+
        }
    };
}

define_closure_adapters!(
    1 => (A),
    2 => (A, B),
    3 => (A, B, C),
    4 => (A, B, C, D),
    5 => (A, B, C, D, E),
    6 => (A, B, C, D, E, F),
);
