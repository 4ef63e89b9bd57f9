//! Output formatting - clean, ASCII-only terminal output
//!
//! Rendering builds strings so the sections and ordering stay testable;
//! printing is a thin wrapper around the formatters.

use owo_colors::OwoColorize;
use somna_common::{Priority, Question, SleepReport};

const SEPARATOR: &str =
    "--------------------------------------------------------------------";
const WRAP_WIDTH: usize = 68;

const DISCLAIMER: &str = "This tool provides educational information only and is NOT a \
substitute for professional medical advice. If you have persistent sleep problems, \
daytime impairment, or suspect a serious condition like sleep apnea, please consult a \
healthcare provider or sleep specialist. If you experience severe symptoms, seek \
medical attention immediately.";

/// Render a full analysis report
pub fn format_report(report: &SleepReport) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("{}\n", "[DIAGNOSES]".bright_white().bold()));

    if report.is_clear() {
        out.push_str("  No specific issues detected. Your sleep pattern appears healthy!\n");
    } else {
        for diagnosis in &report.diagnoses {
            let confidence = report.confidence_for(diagnosis).unwrap_or(0.5);
            out.push_str(&format!(
                "  * {}  ({} confidence)\n",
                diagnosis.bright_white(),
                confidence_tag(confidence)
            ));
        }
    }

    out.push('\n');
    out.push_str(&format!("{}\n", SEPARATOR.dimmed()));
    out.push_str(&format!("{}\n", "[RECOMMENDATIONS]".bright_white().bold()));

    if report.recommendations.is_empty() {
        out.push_str("  Keep up your healthy sleep habits!\n");
    } else {
        for (priority, recommendations) in report.recommendations_by_priority() {
            out.push('\n');
            out.push_str(&format!("{}\n", priority_header(priority)));
            for recommendation in recommendations {
                out.push_str(&wrap_item(&recommendation.text));
            }
        }
    }

    out.push('\n');
    out.push_str(&format!("{}\n", SEPARATOR.dimmed()));
    out.push_str(&format!("{}\n", "[DISCLAIMER]".yellow().bold()));
    out.push_str(&format!("{}\n", textwrap::indent(&textwrap::fill(DISCLAIMER, WRAP_WIDTH), "  ").dimmed()));
    out
}

/// Render the question bank for `somnactl questions`
pub fn format_question_bank(questions: &[Question]) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("{}\n", "[QUESTION BANK]".bright_white().bold()));
    for (index, question) in questions.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!(
            "{} {}  {}\n",
            format!("{:2}.", index + 1).cyan(),
            question.key.bright_cyan(),
            question.prompt
        ));
        for option in &question.options {
            out.push_str(&format!(
                "      {} -> {}\n",
                option.label,
                option.canonical.dimmed()
            ));
        }
    }
    out
}

pub fn print_report(report: &SleepReport) {
    print!("{}", format_report(report));
}

/// Confidence as a percentage, colored by band: strong findings red,
/// moderate yellow, weak dimmed
fn confidence_tag(confidence: f64) -> String {
    let pct = format!("{:.0}%", confidence * 100.0);
    if confidence >= 0.80 {
        pct.bright_red().to_string()
    } else if confidence >= 0.65 {
        pct.yellow().to_string()
    } else {
        pct.dimmed().to_string()
    }
}

fn priority_header(priority: Priority) -> String {
    match priority {
        Priority::High => "[HIGH PRIORITY]".bright_red().bold().to_string(),
        Priority::Medium => "[MEDIUM PRIORITY]".yellow().to_string(),
        Priority::Low => "[LOW PRIORITY]".green().to_string(),
    }
}

fn wrap_item(text: &str) -> String {
    let options = textwrap::Options::new(WRAP_WIDTH)
        .initial_indent("  * ")
        .subsequent_indent("    ");
    let mut wrapped = textwrap::fill(text, options);
    wrapped.push('\n');
    wrapped
}
