//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! Rendering is split from I/O: `render_outline` / `render_params` are pure and return either the text to
//! print or a `miette`-rendered report.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use miette::Report;
use quill_syntax::{ArgumentListConfig, ParseError, Source, parse_arguments, parse_outline};
use thiserror::Error;

use super::{CliError, CliResult, ExitCode};

/// Problems getting the input text, before any parsing happens.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no parameter list given (pass TEXT or --file)")]
    Missing,
}

impl From<InputError> for CliError {
    fn from(err: InputError) -> Self {
        CliError::failure(format!("Error: {}", err))
    }
}

fn read_source(path: &Path) -> Result<Source, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Source::from_text(&text).with_name(path.display().to_string()))
}

/// Render a parse error against its source as a `miette` report.
pub fn render_error(err: &ParseError, source: &Source) -> String {
    format!("{:?}", Report::new(err.to_report(source)))
}

// ============================================================================
// outline
// ============================================================================

/// Parse `source` and render its block outline with normalized indentation.
pub fn render_outline(source: Source) -> CliResult<String> {
    let source = Arc::new(source);
    let module = parse_outline(Arc::clone(&source)).map_err(|err| CliError::failure(render_error(&err, &source)))?;
    tracing::debug!(lines = module.lines().len(), "outline parsed");
    Ok(module.to_string())
}

pub fn outline_file(path: &Path) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    println!("{}", render_outline(source)?);
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// params
// ============================================================================

/// Parse `source` as a parameter list and render the normalized list followed by one line per parameter.
pub fn render_params(source: Source, config: &ArgumentListConfig) -> CliResult<String> {
    let source = Arc::new(source);
    let list =
        parse_arguments(Arc::clone(&source), config).map_err(|err| CliError::failure(render_error(&err, &source)))?;

    let width = list.iter().map(|a| a.to_string().len()).max().unwrap_or(0);
    let mut out = list.to_string();
    for argument in &list {
        out.push('\n');
        out.push_str(&format!("  {:<width$}  {}", argument.to_string(), argument.kind()));
    }
    Ok(out)
}

pub fn params(text: Option<&str>, file: Option<&Path>, config: &ArgumentListConfig) -> CliResult<ExitCode> {
    let source = match (text, file) {
        (Some(text), _) => Source::from_text(text).with_name("<params>"),
        (None, Some(path)) => read_source(path)?,
        (None, None) => return Err(InputError::Missing.into()),
    };
    println!("{}", render_params(source, config)?);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_render_outline() {
        let out = render_outline(Source::from_text("a:\n    b\n\nc\n")).unwrap();
        assert_eq!(out, "a:\n    b\nc");
    }

    #[test]
    fn test_render_outline_reports_indentation() {
        let err = render_outline(Source::from_text("a:\n   b\n")).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("each block must be indented four spaces (extra spaces found)"));
    }

    #[test]
    fn test_render_params() {
        let out = render_params(Source::from_text("a, /, b"), &ArgumentListConfig::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "a, /, b");
        assert!(lines[1].contains("positional-only"));
        assert!(lines[2].contains("positional-or-keyword"));
    }

    #[test]
    fn test_render_params_reports_grammar_error() {
        let err = render_params(Source::from_text("**"), &ArgumentListConfig::default()).unwrap_err();
        assert!(err.message.contains("expected Variable"));
    }

    #[test]
    fn test_params_requires_input() {
        let err = params(None, None, &ArgumentListConfig::default()).unwrap_err();
        assert!(err.message.contains("no parameter list given"));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_source(Path::new("definitely/not/here.qu")).unwrap_err();
        assert!(matches!(err, InputError::Read { .. }));
    }
}
