//! Error rendering using ariadne
//!
//! Renders a formula [`Error`] as a report that points into the source it was
//! raised for, with the error code and, where there is one, a hint on how to
//! fix it.

use crate::Error;
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The name shown for the formula in the report header.
    /// Defaults to "<formula>" if not provided.
    pub filename: Option<&'a str>,
    /// The character set to use for rendering.
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig<'_> {
    const fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
        }
    }
}

/// Render an error to stderr using the default config.
///
/// # Example
/// ```no_run
/// use formula::{Formula, render_error};
///
/// if let Err(e) = Formula::new("2 + $3") {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// Errors without a location (for instance a wrong final stack depth) are
/// reported against the start of the formula, without a label.
///
/// # Example
/// ```
/// use formula::{Formula, RenderConfig, render_error_to};
///
/// let formula = Formula::new("1 / x").unwrap();
/// let err = formula.eval(&[("x", 0.0)]).unwrap_err();
///
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&err, &mut buf, &config).unwrap();
/// assert!(String::from_utf8_lossy(&buf).contains("Divided by zero"));
/// ```
pub fn render_error_to(
    error: &Error,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let filename = config.filename.unwrap_or("<formula>");
    let message = error.kind.to_string();

    let ariadne_charset = match config.charset {
        CharSet::Unicode => ariadne::CharSet::Unicode,
        CharSet::Ascii => ariadne::CharSet::Ascii,
    };
    // Spans are byte offsets into the source.
    let ariadne_config = ariadne::Config::default()
        .with_color(config.color)
        .with_char_set(ariadne_charset)
        .with_index_type(ariadne::IndexType::Byte);

    let location = error.span.as_ref().map_or(0..0, |span| span.0.clone());
    let mut report = Report::build(ReportKind::Error, (filename, location))
        .with_code(error.kind.code())
        .with_message(&message)
        .with_config(ariadne_config);

    if let Some(span) = &error.span {
        let mut colors = ColorGenerator::new();
        colors.next(); // Skip the first color.
        report = report.with_label(
            Label::new((filename, span.0.clone()))
                .with_message(&message)
                .with_color(colors.next()),
        );
    }

    if let Some(help) = error.kind.help() {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((filename, Source::from(error.input.as_str())), &mut *writer)
}
