//! Interactive questionnaire
//!
//! Shows one question at a time with numbered options, like the guided
//! flows elsewhere in the CLI: pick by number, `b` steps back to revise
//! the previous answer. The walk only finishes once every question has a
//! selection, so the resulting fact set is always complete.

use anyhow::{bail, Result};
use owo_colors::OwoColorize;
use somna_common::{question_bank, Question, SleepFacts};
use std::io::{self, BufRead, Write};

enum Step {
    Pick(usize),
    Back,
}

/// Run the full questionnaire and return the normalized answers
pub fn run() -> Result<SleepFacts> {
    let questions = question_bank();
    let total = questions.len();
    let mut selected: Vec<Option<usize>> = vec![None; total];

    println!();
    println!(
        "{}",
        "Somna - Sleep Quality Questionnaire".bright_white().bold()
    );
    println!(
        "{}",
        "Answer the questions below to receive personalized sleep recommendations".dimmed()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut index = 0;
    while index < total {
        let question = &questions[index];
        show_question(question, index, total, selected[index]);

        match prompt_step(&mut lines, question.options.len(), index > 0)? {
            Step::Back => index -= 1,
            Step::Pick(choice) => {
                println!(
                    "   {} {}",
                    "Selected:".dimmed(),
                    question.options[choice].label.bright_cyan()
                );
                selected[index] = Some(choice);
                index += 1;
            }
        }
    }

    let mut facts = SleepFacts::new();
    for (question, choice) in questions.iter().zip(selected) {
        if let Some(i) = choice {
            facts.set(question.key, question.options[i].canonical);
        }
    }
    Ok(facts)
}

fn show_question(question: &Question, index: usize, total: usize, current: Option<usize>) {
    println!();
    println!(
        "{} {}",
        format!("[{}/{}]", index + 1, total).cyan(),
        question.prompt.bright_white()
    );
    for (i, option) in question.options.iter().enumerate() {
        let marker = if current == Some(i) { "*" } else { " " };
        println!("  {} {}  {}", marker, format!("[{}]", i + 1).cyan(), option.label);
    }
    if index > 0 {
        println!("   {}", "(b = previous question)".dimmed());
    }
}

/// Read input until it is a valid option number (or `b` when allowed)
fn prompt_step(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    option_count: usize,
    allow_back: bool,
) -> Result<Step> {
    loop {
        print!("   {} ", "Enter number:".bright_magenta());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("input ended before the questionnaire was finished");
        };
        let input = line?;
        let input = input.trim();

        if allow_back && input.eq_ignore_ascii_case("b") {
            return Ok(Step::Back);
        }

        if let Ok(number) = input.parse::<usize>() {
            if (1..=option_count).contains(&number) {
                return Ok(Step::Pick(number - 1));
            }
        }

        println!(
            "   {}",
            format!("Please enter a number between 1 and {}", option_count).yellow()
        );
    }
}
