//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that carries them.

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug, Display, Formatter}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
///
/// This trait is usually derived with `functree_attrs::ErrorKind`.
pub trait ErrorKind: Debug + Send {
    /// Returns `self` as [`Any`], so that the concrete kind can be recovered.
    fn as_any(&self) -> &dyn Any;

    /// The message describing the error. The offending value is part of the message.
    fn message(&self) -> String;

    /// Optional help text describing how to fix the error.
    fn help(&self) -> Option<String>;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error, optionally associated with regions of the input that can be highlighted.
///
/// Errors raised by the library itself have no spans; front-ends attach the span of the
/// offending input with [`Error::with_spans`] before reporting.
#[derive(Debug)]
pub struct Error {
    /// The regions of the input that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Replaces the spans of this error.
    pub fn with_spans(mut self, spans: Vec<Range<usize>>) -> Self {
        self.spans = spans;
        self
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the kind of this error as `K`, if it is one.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report for this error to stderr, using `input` as the source text.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) {
        if let Err(err) = self.build_report(src_id).eprint((src_id, Source::from(input))) {
            eprintln!("{}: {}", self, err);
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use ariadne::{Label, ReportKind};
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    struct NotANumber {
        token: String,
    }

    impl ErrorKind for NotANumber {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn message(&self) -> String {
            format!("`{}` is not a number", self.token)
        }

        fn help(&self) -> Option<String> {
            None
        }

        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            Report::build(ReportKind::Error, src_id, spans[0].start)
                .with_message(self.message())
                .with_label(Label::new((src_id, spans[0].clone())).with_message("this token"))
                .finish()
        }
    }

    #[test]
    fn display_uses_message() {
        let err = Error::new(vec![], NotANumber { token: "abc".to_string() });
        assert_eq!(err.to_string(), "`abc` is not a number");
    }

    #[test]
    fn downcast_kind() {
        let err = Error::new(vec![0..3], NotANumber { token: "abc".to_string() });
        assert!(err.is::<NotANumber>());
        assert_eq!(err.downcast_ref::<NotANumber>().unwrap().token, "abc");
    }

    #[test]
    fn report_points_at_span() {
        let input = "abc 3";
        let err = Error::new(vec![0..3], NotANumber { token: "abc".to_string() });
        let mut out = Vec::new();
        err.build_report("input").write(("input", Source::from(input)), &mut out).unwrap();
        let out = strip_ansi_escapes::strip(out);
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("`abc` is not a number"));
        assert!(out.contains("this token"));
    }
}
