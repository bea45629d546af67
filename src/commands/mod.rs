//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod interactive;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_against, analyze_guess};
pub use benchmark::{BenchmarkResult, all_secrets, progress_bar, run_benchmark, sample_secrets};
pub use interactive::{Command, parse_command, run_interactive};
pub use solve::{SolveConfig, SolveResult, solve_code};
