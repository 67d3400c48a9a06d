//! Tuple element selectors.
//!
//! [`select_first`] and [`select_second`] pick an element out of a tuple.
//! They work on tuples by value, moving the element out, and on shared
//! references to tuples, returning a reference into the tuple. Both are
//! plain generic functions, so they can be handed directly to iterator
//! adaptors and compositions.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use fcompose::project::{select_first, select_second};
//!
//! let mut films = BTreeMap::new();
//! films.insert(1972, ("The Godfather", "Francis Ford Coppola"));
//! films.insert(1982, ("Scarface", "Brian De Palma"));
//! films.insert(1994, ("Pulp Fiction", "Quentin Tarantino"));
//!
//! let directors: Vec<&str> = films
//!     .values()
//!     .map(select_second)
//!     .copied()
//!     .collect();
//! assert_eq!(directors, ["Francis Ford Coppola", "Brian De Palma", "Quentin Tarantino"]);
//!
//! let years: Vec<i32> = films.iter().map(select_first).copied().collect();
//! assert_eq!(years, [1972, 1982, 1994]);
//! ```

/// Types from which a first element can be selected.
pub trait SelectFirst {
    /// The selected element.
    type First;

    /// Returns the first element.
    fn select_first(self) -> Self::First;
}

/// Types from which a second element can be selected.
pub trait SelectSecond {
    /// The selected element.
    type Second;

    /// Returns the second element.
    fn select_second(self) -> Self::Second;
}

/// Returns the first element of a tuple.
///
/// ```
/// use fcompose::project::select_first;
///
/// let pair = (-1, 42.3_f64);
/// assert_eq!(select_first(pair), -1);
/// assert_eq!(*select_first(&pair), -1);
/// ```
#[inline]
pub fn select_first<Tuple: SelectFirst>(tuple: Tuple) -> Tuple::First {
    tuple.select_first()
}

/// Returns the second element of a tuple.
///
/// ```
/// use fcompose::project::select_second;
///
/// let pair = (-1, 42.3_f64);
/// assert!((select_second(pair) - 42.3).abs() < f64::EPSILON);
/// ```
#[inline]
pub fn select_second<Tuple: SelectSecond>(tuple: Tuple) -> Tuple::Second {
    tuple.select_second()
}

macro_rules! impl_select_first {
    ($(($head:ident $(, $tail:ident)*)),+ $(,)?) => {
        $(
            impl<$head $(, $tail)*> SelectFirst for ($head, $($tail,)*) {
                type First = $head;

                #[inline]
                fn select_first(self) -> $head {
                    self.0
                }
            }

            impl<'tuple, $head $(, $tail)*> SelectFirst for &'tuple ($head, $($tail,)*) {
                type First = &'tuple $head;

                #[inline]
                fn select_first(self) -> &'tuple $head {
                    &self.0
                }
            }
        )+
    };
}

macro_rules! impl_select_second {
    ($(($head:ident, $second:ident $(, $tail:ident)*)),+ $(,)?) => {
        $(
            impl<$head, $second $(, $tail)*> SelectSecond for ($head, $second, $($tail,)*) {
                type Second = $second;

                #[inline]
                fn select_second(self) -> $second {
                    self.1
                }
            }

            impl<'tuple, $head, $second $(, $tail)*> SelectSecond
                for &'tuple ($head, $second, $($tail,)*)
            {
                type Second = &'tuple $second;

                #[inline]
                fn select_second(self) -> &'tuple $second {
                    &self.1
                }
            }
        )+
    };
}

impl_select_first!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
);

impl_select_second!(
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
);
