//! Error rendering using miette
//!
//! Turns a [`ListError`] into a human-readable report carrying its
//! diagnostic code and help text.

use std::io::Write;

use miette::{GraphicalReportHandler, GraphicalTheme};

use crate::ListError;

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
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The character set to use for rendering.
    pub charset: CharSet,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color: true,
            charset: CharSet::Unicode,
        }
    }
}

impl RenderConfig {
    fn theme(&self) -> GraphicalTheme {
        match (self.charset, self.color) {
            (CharSet::Unicode, true) => GraphicalTheme::unicode(),
            (CharSet::Unicode, false) => GraphicalTheme::unicode_nocolor(),
            (CharSet::Ascii, true) => GraphicalTheme::ascii(),
            (CharSet::Ascii, false) => GraphicalTheme::none(),
        }
    }
}

/// Render an error to stderr using the default config.
///
/// # Example
/// ```no_run
/// use listkit::{ArrayAdapter, MutableList, render_error};
///
/// let mut adapter = ArrayAdapter::from([1, 2, 3]);
/// if let Err(e) = adapter.add(4) {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &ListError) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use listkit::{ArrayAdapter, CharSet, MutableList, RenderConfig, render_error_to};
///
/// let mut adapter = ArrayAdapter::from([1, 2, 3]);
/// let error = adapter.clear().unwrap_err();
///
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, charset: CharSet::Ascii };
/// render_error_to(&error, &mut buf, &config).unwrap();
/// let output = String::from_utf8_lossy(&buf);
/// assert!(output.contains("Cannot call clear() on ArrayAdapter"));
/// ```
pub fn render_error_to(
    error: &ListError,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let handler = GraphicalReportHandler::new_themed(config.theme()).with_links(false);
    let mut out = String::new();
    handler
        .render_report(&mut out, error)
        .map_err(std::io::Error::other)?;
    writer.write_all(out.as_bytes())
}
