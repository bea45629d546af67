//! Mastermind Solver - CLI
//!
//! Self-play, interactive and benchmark modes over one solving engine with
//! random, scored inference, clause-filtered and minimax strategies.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        SolveConfig, all_secrets, analyze_guess, progress_bar, run_benchmark, run_interactive,
        sample_secrets, solve_code,
    },
    core::{Alphabet, Rules},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Solver, StrategyConfig, StrategyKind},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind code breaker using scored inference, clause filtering and minimax",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Symbols: comma separated names, or a count for letters A, B, C, ...
    /// (default: red, yellow, green, blue, pink, brown)
    #[arg(short, long, global = true)]
    colors: Option<String>,

    /// Number of positions in a code
    #[arg(short, long, global = true, default_value_t = 5)]
    length: usize,

    /// Strategy: inference (default), constraint, minimax, random
    #[arg(short, long, global = true, default_value = "inference")]
    strategy: StrategyKind,

    /// Seed for every random choice
    #[arg(long, global = true, default_value_t = 0)]
    seed: u64,

    /// Random turns before the strategy takes over (default depends on strategy)
    #[arg(short = 'x', long, global = true)]
    explore: Option<usize>,

    /// Opening guess, or 'none' (minimax defaults to the classic opening)
    #[arg(short, long, global = true)]
    opening: Option<String>,

    /// Show per-turn candidate counts and debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest guesses for a secret you keep to yourself (default)
    Interactive,

    /// Solve a specific secret
    Solve {
        /// The secret, e.g. "red red blue green pink" or "AABC"
        secret: String,

        /// Give up after this many turns
        #[arg(short, long)]
        max_turns: Option<usize>,
    },

    /// Show how a guess splits the code space by feedback
    Analyze {
        /// Guess to analyze
        guess: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Test every possible secret instead
        #[arg(short, long)]
        all: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build the rules from the --colors and --length flags
fn load_rules(colors: Option<&str>, length: usize) -> Result<Rules> {
    let rules = match colors {
        None => Rules::new(Alphabet::classic(), length)?,
        Some(names) => match names.trim().parse::<usize>() {
            Ok(count) => Rules::new(Alphabet::letters(count)?, length)?,
            Err(_) => Rules::from_names(
                names
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty()),
                length,
            )?,
        },
    };
    Ok(rules)
}

/// Build the strategy configuration from the global flags
fn load_strategy(cli: &Cli, rules: &Rules) -> Result<StrategyConfig> {
    let mut config = StrategyConfig::for_rules(cli.strategy, rules).with_seed(cli.seed);

    if let Some(turns) = cli.explore {
        config = config.with_exploratory_turns(turns);
    }
    if let Some(opening) = cli.opening.as_deref() {
        let opening = if opening.eq_ignore_ascii_case("none") {
            None
        } else {
            Some(
                rules
                    .parse_code(opening)
                    .map_err(|e| anyhow!("Invalid opening: {e}"))?,
            )
        };
        config = config.with_opening(opening);
    }

    config.validate(rules)?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let rules = load_rules(cli.colors.as_deref(), cli.length)?;
    let strategy = load_strategy(&cli, &rules)?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => run_interactive_command(&rules, strategy),
        Commands::Solve { secret, max_turns } => {
            run_solve_command(&rules, strategy, secret, max_turns, cli.verbose)
        }
        Commands::Analyze { guess } => run_analyze_command(&rules, &guess),
        Commands::Benchmark { count, all } => {
            run_benchmark_command(&rules, strategy, count, all, cli.seed)
        }
    }
}

fn run_interactive_command(rules: &Rules, strategy: StrategyConfig) -> Result<()> {
    let mut solver = Solver::new(rules, strategy)?;
    let stdin = std::io::stdin();
    run_interactive(&mut solver, stdin.lock(), std::io::stdout()).map_err(|e| anyhow!(e))
}

fn run_solve_command(
    rules: &Rules,
    strategy: StrategyConfig,
    secret: String,
    max_turns: Option<usize>,
    verbose: bool,
) -> Result<()> {
    let mut config = SolveConfig::new(secret);
    config.max_turns = max_turns;

    let result = solve_code(&config, rules, strategy).map_err(|e| anyhow!(e))?;
    print_solve_result(&result, rules, verbose);
    Ok(())
}

fn run_analyze_command(rules: &Rules, guess: &str) -> Result<()> {
    let result = analyze_guess(guess, rules).map_err(|e| anyhow!(e))?;
    print_analysis_result(&result, rules);
    Ok(())
}

fn run_benchmark_command(
    rules: &Rules,
    strategy: StrategyConfig,
    count: usize,
    all: bool,
    seed: u64,
) -> Result<()> {
    let secrets = if all {
        all_secrets(rules)
    } else {
        sample_secrets(rules, count, seed)
    };

    println!(
        "Running {} benchmark on {} secrets ({} symbols, length {})...",
        strategy.strategy,
        secrets.len(),
        rules.alphabet().len(),
        rules.code_length()
    );

    let progress = progress_bar(secrets.len()).map_err(|e| anyhow!(e))?;
    let result = run_benchmark(rules, strategy, &secrets, &progress).map_err(|e| anyhow!(e))?;
    print_benchmark_result(&result, rules);
    Ok(())
}
