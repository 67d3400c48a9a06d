//! Tests for the `Inserter` output sink.

#![cfg(feature = "output")]

use std::io;

use fcompose::compose::{InvokeMut, InvokeOnce};
use fcompose::compose_l;
use fcompose::output::Inserter;
use rstest::rstest;

/// A writer that accepts a fixed number of bytes and then fails.
struct LimitedWriter {
    written: Vec<u8>,
    capacity: usize,
}

impl io::Write for LimitedWriter {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        let remaining = self.capacity - self.written.len();
        if remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "capacity exhausted"));
        }
        let accepted = remaining.min(buffer.len());
        self.written.extend_from_slice(&buffer[..accepted]);
        Ok(accepted)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[rstest]
#[case(None, "0112358")]
#[case(Some(", "), "0, 1, 1, 2, 3, 5, 8, ")]
#[case(Some("\n"), "0\n1\n1\n2\n3\n5\n8\n")]
fn test_delimiters(#[case] delimiter: Option<&'static str>, #[case] expected: &str) {
    let mut inserter = match delimiter {
        Some(delimiter) => Inserter::with_delimiter(Vec::new(), delimiter),
        None => Inserter::new(Vec::new()),
    };
    inserter.insert_all([0, 1, 1, 2, 3, 5, 8]).unwrap();

    assert_eq!(String::from_utf8(inserter.into_inner()).unwrap(), expected);
}

#[rstest]
fn test_mixed_value_types() {
    let mut inserter = Inserter::with_delimiter(Vec::new(), " ");
    inserter.insert(&42).unwrap();
    inserter.insert(&-1.5).unwrap();
    inserter.insert("text").unwrap();
    inserter.insert(&'c').unwrap();
    inserter.insert_all(vec![String::from("owned")]).unwrap();
    inserter.flush().unwrap();

    assert_eq!(inserter.get_ref(), b"42 -1.5 text c owned ");
}

#[rstest]
fn test_inserter_terminates_composition() {
    let mut buffer = Vec::new();
    {
        let mut pipeline = compose_l!(
            f64::atan2,
            f64::sin,
            f64::abs,
            |value: f64| format!("{value:.6}"),
            Inserter::with_delimiter(&mut buffer, ", "),
        );
        for (y, x) in [1.0, 2.0, 3.0].into_iter().zip([3.0, 2.0, 1.0]) {
            pipeline.invoke_mut((y, x)).unwrap();
        }
    }

    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "0.316228, 0.707107, 0.948683, "
    );
}

#[rstest]
fn test_invoke_once_consumes_inserter() {
    let mut buffer = Vec::new();
    Inserter::with_delimiter(&mut buffer, ";")
        .invoke_once(("single",))
        .unwrap();
    assert_eq!(buffer, b"single;");
}

#[rstest]
fn test_first_write_error_stops_insert_all() {
    let writer = LimitedWriter {
        written: Vec::new(),
        capacity: 4,
    };
    let mut inserter = Inserter::with_delimiter(writer, ",");

    let error = inserter.insert_all(["ab", "cd", "ef"]).unwrap_err();
    assert_eq!(error.kind(), io::ErrorKind::WriteZero);
    assert_eq!(inserter.into_inner().written, b"ab,c");
}
