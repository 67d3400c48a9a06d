//! A type-agnostic output sink.
//!
//! [`Inserter`] writes any [`Display`] value to an [`io::Write`], optionally
//! followed by a delimiter. The element type is chosen per call, so one
//! inserter can receive integers, strings and floats alike.
//!
//! An `Inserter` is also a unary stage: it implements [`InvokeMut`] for
//! every `(T,)` with `T: Display`, returning `io::Result<()>`. It can
//! therefore terminate a left-to-right composition.
//!
//! # Examples
//!
//! ```
//! use fcompose::output::Inserter;
//!
//! let mut inserter = Inserter::with_delimiter(Vec::new(), ", ");
//! inserter.insert_all([0, 1, 1, 2, 3, 5, 8, 13]).unwrap();
//! inserter.insert_all(["Hello", "World"]).unwrap();
//!
//! let written = String::from_utf8(inserter.into_inner()).unwrap();
//! assert_eq!(written, "0, 1, 1, 2, 3, 5, 8, 13, Hello, World, ");
//! ```

use std::borrow::Cow;
use std::fmt::Display;
use std::io;

use crate::compose::{InvokeMut, InvokeOnce};

/// Writes displayable values to an underlying writer.
///
/// Every inserted value is followed by the delimiter, if one was given,
/// including the last one.
#[derive(Debug)]
pub struct Inserter<W> {
    writer: W,
    delimiter: Option<Cow<'static, str>>,
}

impl<W: io::Write> Inserter<W> {
    /// Creates an inserter that writes values back to back.
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            delimiter: None,
        }
    }

    /// Creates an inserter that writes `delimiter` after every value.
    pub fn with_delimiter(writer: W, delimiter: impl Into<Cow<'static, str>>) -> Self {
        Self {
            writer,
            delimiter: Some(delimiter.into()),
        }
    }

    /// Returns the delimiter, if any.
    pub fn delimiter(&self) -> Option<&str> {
        self.delimiter.as_deref()
    }

    /// Writes one value followed by the delimiter.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the underlying writer.
    pub fn insert<T: Display + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        write!(self.writer, "{value}")?;
        if let Some(delimiter) = &self.delimiter {
            self.writer.write_all(delimiter.as_bytes())?;
        }
        Ok(())
    }

    /// Writes every value of `values` in order.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the underlying writer; values
    /// after the failing one are not written.
    pub fn insert_all<I>(&mut self, values: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        values.into_iter().try_for_each(|value| self.insert(&value))
    }

    /// Flushes the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns the error reported by the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Returns a reference to the underlying writer.
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consumes the inserter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write, T: Display> InvokeOnce<(T,)> for Inserter<W> {
    type Output = io::Result<()>;

    fn invoke_once(mut self, (value,): (T,)) -> io::Result<()> {
        self.insert(&value)
    }
}

impl<W: io::Write, T: Display> InvokeMut<(T,)> for Inserter<W> {
    fn invoke_mut(&mut self, (value,): (T,)) -> io::Result<()> {
        self.insert(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl io::Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_without_delimiter() {
        let mut inserter = Inserter::new(Vec::new());
        inserter.insert_all([1, 2, 3]).unwrap();
        assert_eq!(inserter.get_ref(), b"123");
        assert_eq!(inserter.delimiter(), None);
    }

    #[test]
    fn test_unsized_value() {
        let mut inserter = Inserter::with_delimiter(Vec::new(), String::from("|"));
        inserter.insert("text").unwrap();
        assert_eq!(inserter.into_inner(), b"text|");
    }

    #[test]
    fn test_writer_error_is_returned_unchanged() {
        let mut inserter = Inserter::new(FailingWriter);
        let error = inserter.insert(&1).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::Other);
        assert_eq!(error.to_string(), "disk full");
    }

    #[test]
    fn test_invoke_mut_as_stage() {
        let mut inserter = Inserter::with_delimiter(Vec::new(), ";");
        inserter.invoke_mut((1.5,)).unwrap();
        inserter.invoke_mut(('x',)).unwrap();
        assert_eq!(inserter.into_inner(), b"1.5;x;");
    }
}
