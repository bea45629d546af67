//! Interactive CLI mode
//!
//! The solver suggests guesses for a secret only the user knows, and the user
//! reports the black and white pegs for each one.

use crate::core::{Code, Feedback, PureOracle, Rules};
use crate::output::formatters::{feedback_pegs, format_code};
use crate::solver::minimax::calculate_max_remaining;
use crate::solver::{Solver, Status};
use colored::Colorize;
use std::io::{BufRead, Write};

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewGame,
    Undo,
    /// Play this code instead of the suggestion
    Use(Code),
    Feedback(Feedback),
}

/// Parse a line of user input
///
/// # Errors
/// Returns a message describing what was expected when the line is neither a
/// command nor valid feedback.
pub fn parse_command(input: &str, rules: &Rules) -> Result<Command, String> {
    let input = input.trim();
    let lowered = input.to_lowercase();

    match lowered.as_str() {
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        "new" | "n" => return Ok(Command::NewGame),
        "undo" | "u" => return Ok(Command::Undo),
        "win" | "correct" | "solved" => return Ok(Command::Feedback(rules.perfect())),
        _ => {}
    }

    if let Some(code) = lowered.strip_prefix("use ") {
        return rules
            .parse_code(code)
            .map(Command::Use)
            .map_err(|e| format!("Invalid code: {e}"));
    }

    input
        .parse::<Feedback>()
        .map(Command::Feedback)
        .map_err(|_| "Enter feedback as 'black white' (e.g. '1 2'), 'win', or a command".to_string())
}

/// Run the interactive mode until the user quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_interactive<R: BufRead, W: Write>(
    solver: &mut Solver,
    mut input: R,
    mut out: W,
) -> Result<(), String> {
    let rules = solver.rules().clone();
    let alphabet = rules.alphabet();
    let length = rules.code_length();

    emit(&mut out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    emit(&mut out, "║            Mastermind Solver - Interactive Mode              ║")?;
    emit(&mut out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    emit(
        &mut out,
        &format!(
            "Think of a secret of {length} symbols from: {}",
            alphabet.names().join(", ")
        ),
    )?;
    emit(&mut out, "After each guess, enter 'black white' peg counts (e.g. '1 2').")?;
    emit(
        &mut out,
        "Commands: 'use <code>' to play your own guess, 'undo', 'new', 'quit'\n",
    )?;

    let mut chosen: Option<Code> = None;

    loop {
        match solver.status() {
            Status::Solved => {
                emit(&mut out, &format!("\n{}", "═".repeat(62).bright_cyan()))?;
                emit(
                    &mut out,
                    &format!(
                        "  {} in {} {}",
                        "Solved".bright_green().bold(),
                        solver.turn(),
                        if solver.turn() == 1 { "turn" } else { "turns" }
                    ),
                )?;
                for (i, premise) in solver.premises().iter().enumerate() {
                    emit(
                        &mut out,
                        &format!(
                            "    {}. {} {}",
                            i + 1,
                            format_code(&premise.guess, alphabet),
                            feedback_pegs(premise.feedback, length)
                        ),
                    )?;
                }
                emit(&mut out, &format!("{}\n", "═".repeat(62).bright_cyan()))?;

                let Some(answer) = prompt(&mut input, &mut out, "Play again? (yes/no)")? else {
                    return Ok(());
                };
                if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                    solver.reset();
                    chosen = None;
                    emit(&mut out, "\nNew game started!\n")?;
                    continue;
                }
                emit(&mut out, "\nThanks for playing!\n")?;
                return Ok(());
            }
            Status::Exhausted => {
                emit(
                    &mut out,
                    &format!(
                        "\n{}",
                        "No candidates remain! Your feedback may be incorrect.".red()
                    ),
                )?;
                emit(&mut out, "Type 'undo' to go back, or 'new' to start over.\n")?;

                let Some(line) = prompt(&mut input, &mut out, "Command")? else {
                    return Ok(());
                };
                match parse_command(&line, &rules) {
                    Ok(Command::Quit) => return Ok(()),
                    Ok(Command::Undo) => undo(solver, &mut out)?,
                    Ok(Command::NewGame) => {
                        solver.reset();
                        emit(&mut out, "\nNew game started!\n")?;
                    }
                    Ok(Command::Use(_) | Command::Feedback(_)) => emit(
                        &mut out,
                        &format!("{}\n", "No game in progress. Type 'undo' or 'new'.".red()),
                    )?,
                    Err(message) => emit(&mut out, &format!("{}\n", message.red()))?,
                }
                chosen = None;
            }
            Status::InProgress => {
                let guess = match &chosen {
                    Some(code) => code.clone(),
                    None => match solver.next_guess() {
                        Some(code) => code,
                        None => continue,
                    },
                };

                let candidates = solver.candidates();
                emit(&mut out, &"─".repeat(62))?;
                emit(
                    &mut out,
                    &format!(
                        "Turn {}: {} candidates remaining",
                        solver.turn() + 1,
                        candidates.len()
                    ),
                )?;
                emit(&mut out, &"─".repeat(62))?;
                emit(
                    &mut out,
                    &format!(
                        "\nGuess:       {}",
                        format_code(&guess, alphabet).bold()
                    ),
                )?;
                emit(
                    &mut out,
                    &format!(
                        "Worst case:  {} candidates\n",
                        calculate_max_remaining(&guess, candidates, &mut PureOracle)
                    ),
                )?;

                if candidates.len() <= 10 {
                    emit(&mut out, "Remaining candidates:")?;
                    for candidate in candidates {
                        emit(&mut out, &format!("  • {}", format_code(candidate, alphabet)))?;
                    }
                    emit(&mut out, "")?;
                }

                let Some(line) = prompt(&mut input, &mut out, "Feedback")? else {
                    return Ok(());
                };
                match parse_command(&line, &rules) {
                    Ok(Command::Quit) => {
                        emit(&mut out, "\nThanks for playing!\n")?;
                        return Ok(());
                    }
                    Ok(Command::NewGame) => {
                        solver.reset();
                        chosen = None;
                        emit(&mut out, "\nNew game started!\n")?;
                    }
                    Ok(Command::Undo) => {
                        undo(solver, &mut out)?;
                        chosen = None;
                    }
                    Ok(Command::Use(code)) => chosen = Some(code),
                    Ok(Command::Feedback(feedback)) => match solver.observe(guess, feedback) {
                        Ok(record) => {
                            chosen = None;
                            emit(
                                &mut out,
                                &format!(
                                    "{}  Candidates: {} → {}\n",
                                    feedback_pegs(record.feedback, length),
                                    record.candidates_before,
                                    record.candidates_after
                                ),
                            )?;
                        }
                        Err(e) => emit(&mut out, &format!("{}\n", e.to_string().red()))?,
                    },
                    Err(message) => emit(&mut out, &format!("{}\n", message.red()))?,
                }
            }
        }
    }
}

fn undo<W: Write>(solver: &mut Solver, out: &mut W) -> Result<(), String> {
    if solver.undo().is_some() {
        emit(out, &format!("Undone! Back to turn {}\n", solver.turn() + 1))
    } else {
        emit(out, "Nothing to undo!\n")
    }
}

fn emit<W: Write>(out: &mut W, line: &str) -> Result<(), String> {
    writeln!(out, "{line}").map_err(|e| e.to_string())
}

/// Get user input with a prompt; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>, String> {
    write!(out, "{label}: ").map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
