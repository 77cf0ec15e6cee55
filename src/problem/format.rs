use super::messages::generate_error_message;
use lapel::{config::LoadingError, evaluator::EvaluationError, spans::Span};
use owo_colors::OwoColorize;
use std::path::Path;

/// Format a failed computation with full details including the line of the
/// document the snippet is on
pub fn full_evaluation_error<'i>(
    error: &EvaluationError,
    span: &Span,
    filename: &'i Path,
    source: &'i str,
) -> String {
    let (problem, details) = generate_error_message(error);
    let offset = span.start;

    let i = calculate_line_number(source, offset);
    let j = calculate_column_number(source, offset);

    let code = source
        .lines()
        .nth(i)
        .unwrap_or("?");
    let line = i + 1;
    let column = j + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}

{}
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        column,
        problem.bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a failed computation with concise single-line output
pub fn concise_evaluation_error<'i>(
    error: &EvaluationError,
    span: &Span,
    filename: &'i Path,
    source: &'i str,
) -> String {
    let offset = span.start;
    let i = calculate_line_number(source, offset);
    let j = calculate_column_number(source, offset);
    let line = i + 1;
    let column = j + 1;

    format!(
        "{}: {}:{}:{} {}",
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        column,
        error
            .to_string()
            .bold(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    if error
        .details
        .is_empty()
    {
        format!(
            "{}: {}: {}",
            "error".bright_red(),
            error
                .filename
                .display(),
            error
                .problem
                .bold()
        )
    } else {
        format!(
            "{}: {}: {}\n{}",
            "error".bright_red(),
            error
                .filename
                .display(),
            error
                .problem
                .bold(),
            error.details
        )
    }
}

/// Zero-origin line containing the given byte offset
pub fn calculate_line_number(content: &str, offset: usize) -> usize {
    let offset = offset.min(content.len());
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

/// Zero-origin column, in characters, of the given byte offset
pub fn calculate_column_number(content: &str, offset: usize) -> usize {
    let offset = offset.min(content.len());
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => content[start + 1..offset]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    }
}
