use crate::core::outcome::{BuildRecord, StepOutcome};
use colored::Colorize;

/// Emphasis for one piece of a report line. Tones are abstract; only the
/// renderer decides what a tone looks like on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Configuration name
    Name,
    /// Step label such as `configure:`
    Label,
    Pass,
    Fail,
    Skip,
}

/// One styled piece of a report line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub tone: Tone,
    pub text: String,
}

impl Span {
    fn new(tone: Tone, text: impl Into<String>) -> Self {
        Span {
            tone,
            text: text.into(),
        }
    }
}

fn outcome_span(outcome: StepOutcome) -> Span {
    match outcome {
        StepOutcome::NotRun => Span::new(Tone::Skip, "Skip"),
        StepOutcome::Succeeded => Span::new(Tone::Pass, "Pass"),
        StepOutcome::Failed => Span::new(Tone::Fail, "Fail"),
    }
}

/// The display tokens for one record: the name, then a label and an outcome
/// per step
pub fn report_line(record: &BuildRecord) -> Vec<Span> {
    vec![
        Span::new(Tone::Name, record.name.as_str()),
        Span::new(Tone::Label, "configure:"),
        outcome_span(record.configure),
        Span::new(Tone::Label, "build:"),
        outcome_span(record.build),
    ]
}

/// Report lines for all records in processing order, with every name padded
/// to the widest name so the status columns line up. No records, no lines.
pub fn format_report(records: &[BuildRecord]) -> Vec<Vec<Span>> {
    let mut lines: Vec<Vec<Span>> = records.iter().map(report_line).collect();

    let width = records.iter().map(|r| r.name.len()).max().unwrap_or(0);
    for line in &mut lines {
        let padded = format!("{:<width$}", line[0].text, width = width);
        line[0].text = padded;
    }

    lines
}

/// Render one span line to a printable string. With `color` set, tones map
/// to terminal emphasis; without it the text passes through untouched.
pub fn render_line(spans: &[Span], color: bool) -> String {
    let rendered: Vec<String> = spans
        .iter()
        .map(|span| {
            if !color {
                return span.text.clone();
            }
            match span.tone {
                Tone::Name => span.text.as_str().bold().to_string(),
                Tone::Label => span.text.clone(),
                Tone::Pass => span.text.as_str().green().to_string(),
                Tone::Fail => span.text.as_str().red().to_string(),
                Tone::Skip => span.text.as_str().dimmed().to_string(),
            }
        })
        .collect();
    rendered.join(" ")
}
