//! Text rendering of query results.

use crate::highlight::{HighlightStyle, render};
use crate::search::{MatchRecord, Span};
use std::fmt::{self, Write as _};
use std::time::Duration;

/// How matched text is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Highlight matches, or print text as-is
    pub highlight: bool,
    pub style: HighlightStyle,
}

impl ReportOptions {
    fn decorate(self, text: &str, spans: &[Span]) -> String {
        if self.highlight {
            render(text, spans, self.style)
        } else {
            text.to_string()
        }
    }
}

/// Render the results of one query.
///
/// The header reports how many of `results` matched. Each matched document follows,
/// numbered from 1, with its title and every matching line. Records whose count is
/// zero are skipped even if they still hold spans.
pub fn render_report(
    query: &str,
    results: &[MatchRecord],
    options: ReportOptions,
    elapsed: Option<Duration>,
) -> String {
    let mut output = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut output, query, results, options, elapsed);
    output
}

fn write_report(
    output: &mut String,
    query: &str,
    results: &[MatchRecord],
    options: ReportOptions,
    elapsed: Option<Duration>,
) -> fmt::Result {
    let total = results.len();
    let matched: Vec<&MatchRecord> = results.iter().filter(|r| r.is_match()).collect();

    write!(
        output,
        "{} out of {} sonnets contain \"{}\".",
        matched.len(),
        total,
        query
    )?;
    if let Some(elapsed) = elapsed {
        write!(
            output,
            " Your query took {:.2}ms.",
            elapsed.as_secs_f64() * 1000.0
        )?;
    }
    writeln!(output)?;

    for (idx, record) in matched.iter().enumerate() {
        writeln!(output)?;
        writeln!(
            output,
            "[{}/{}] {}",
            idx + 1,
            total,
            options.decorate(&record.title, &record.title_spans)
        )?;
        for lm in &record.line_matches {
            writeln!(
                output,
                "  [{:2}] {}",
                lm.line_no,
                options.decorate(&lm.text, &lm.spans)
            )?;
        }
    }

    Ok(())
}
