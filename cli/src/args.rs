//! Command-line definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `Secret:` line per case, plus `Wrong Points:` when n > k
    Text,
    /// One JSON object per case
    Json,
}

/// Recover threshold secrets from mixed-radix shares
#[derive(Parser, Debug)]
#[command(name = "recover")]
#[command(version, about)]
#[command(long_about = r#"
Reads test cases (n shares of a degree k-1 polynomial, each share value
written in its own base) and prints the constant term of the polynomial.
When n > k, every k-subset votes and shares that disagree with the majority
polynomial are reported as wrong points.

Each FILE holds one test case object or an array of them. With no FILE, the
two bundled sample cases are used.

Example:
  recover cases.json
  recover --format json -v case1.json case2.json
"#)]
pub struct Cli {
    /// JSON files with test cases
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Largest C(n, k) searched exhaustively before falling back to greedy
    /// elimination
    #[arg(long, value_name = "COUNT")]
    pub exhaustive_limit: Option<u64>,

    /// Also print each secret written in this base (2-36)
    #[arg(long, value_name = "BASE", value_parser = clap::value_parser!(u32).range(2..=36))]
    pub echo_base: Option<u32>,

    /// JSON file with verifier settings
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from([
            "recover",
            "-vv",
            "--format",
            "json",
            "--exhaustive-limit",
            "50",
            "--echo-base",
            "16",
            "a.json",
            "b.json",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.exhaustive_limit, Some(50));
        assert_eq!(cli.echo_base, Some(16));
        assert_eq!(cli.inputs.len(), 2);
    }

    #[test]
    fn echo_base_must_be_a_radix() {
        assert!(Cli::try_parse_from(["recover", "--echo-base", "37"]).is_err());
        assert!(Cli::try_parse_from(["recover", "--echo-base", "1"]).is_err());
    }
}
