//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_pegs, format_code};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::Rules;
use colored::Colorize;

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, rules: &Rules, verbose: bool) {
    let alphabet = rules.alphabet();
    let length = rules.code_length();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        format_code(&result.secret, alphabet).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &result.turns {
        println!(
            "\nTurn {}: {} {}",
            step.turn,
            format_code(&step.guess, alphabet),
            feedback_pegs(step.feedback, length)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!("  Reduction:  {reduction:.1}x");
            }
        }
    }

    println!();
    let turns = result.turns.len();
    if result.success() {
        println!(
            "{}",
            format!("Solved in {turns} {}!", if turns == 1 { "turn" } else { "turns" })
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Not solved after {turns} turns ({})", result.status)
                .red()
                .bold()
        );
    }
}

/// Print the feedback partition of a guess
pub fn print_analysis_result(result: &AnalysisResult, rules: &Rules) {
    let length = rules.code_length();

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        format_code(&result.guess, rules.alphabet()).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\nAgainst {} possible codes:", result.total_candidates);
    println!("   Feedback classes: {}", result.partition_count());
    println!(
        "   Worst case:       {}",
        format!("{} candidates", result.worst_case).bright_yellow()
    );
    println!(
        "   Expected:         {:.1} candidates remain",
        result.expected_remaining
    );

    println!("\n{}", "Classes:".bright_cyan().bold());
    for &(feedback, size) in &result.partitions {
        let bar = create_progress_bar(size as f64, result.worst_case as f64, 30);
        println!(
            "   {} {:>3}/{:<3} {} {size:6}",
            feedback_pegs(feedback, length),
            feedback.black(),
            feedback.white(),
            bar.green()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, rules: &Rules) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!("   Solved:           {}", result.solved.to_string().green());
    if result.exhausted > 0 {
        println!("   Exhausted:        {}", result.exhausted.to_string().red());
    }
    println!(
        "   Average turns:    {}",
        format!("{:.3}", result.average_turns).bright_yellow().bold()
    );
    println!("   Best case:        {}", result.min_turns.to_string().green());
    println!("   Worst case:       {}", result.max_turns.to_string().yellow());
    if let Some((secret, turns)) = &result.hardest {
        println!(
            "   Hardest secret:   {} ({turns} turns)",
            format_code(secret, rules.alphabet())
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);
    let lookups = result.cache_hits + result.cache_misses;
    if lookups > 0 {
        println!(
            "   Cache hit rate:   {:.1}%",
            result.cache_hits as f64 / lookups as f64 * 100.0
        );
    }

    if result.solved == 0 {
        return;
    }

    println!("\n{}", "Distribution:".bright_cyan().bold());
    let mut turn_counts: Vec<(usize, usize)> =
        result.distribution.iter().map(|(&k, &v)| (k, v)).collect();
    turn_counts.sort_unstable();
    let max_count = turn_counts.iter().map(|&(_, n)| n).max().unwrap_or(1);

    for (turns, count) in turn_counts {
        let pct = count as f64 / result.solved as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {turns:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
