use clap::{Parser, Subcommand};
use fixture_core::Operation;

#[derive(Parser, Debug)]
#[command(name = "fixtures")]
#[command(about = "Run the fixture modules and the users accessor from the command line")]
#[command(version)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CONFIG_FILE", global = true)]
    pub config: Option<String>,

    /// Base URL override for the users endpoint
    #[arg(long, env = "USERS_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Log level override
    #[arg(long, env = "LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Apply an arithmetic operation to two numbers
    Calc {
        /// One of add, sub, mul, div
        op: Operation,
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    /// Print sum, positive and negative elements of a sequence
    Stats {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Check whether a text reads the same backwards
    Palindrome { text: String },

    /// Check whether two texts are anagrams of each other
    Anagram { a: String, b: String },

    /// Fetch users from the configured endpoint
    Users {
        /// Print the records as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calc_with_negative_operands() {
        let cli = Cli::try_parse_from(["fixtures", "calc", "sub", "-5", "-6"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Calc {
                op: Operation::Sub,
                a: -5.0,
                b: -6.0
            }
        );
    }

    #[test]
    fn test_parse_stats() {
        let cli = Cli::try_parse_from(["fixtures", "stats", "2", "1", "3", "-2", "-1", "-1"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Stats {
                values: vec![2.0, 1.0, 3.0, -2.0, -1.0, -1.0]
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_operation() {
        assert!(Cli::try_parse_from(["fixtures", "calc", "pow", "2", "3"]).is_err());
        assert!(Cli::try_parse_from(["fixtures", "stats"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "fixtures",
            "users",
            "--json",
            "--base-url",
            "http://127.0.0.1:9999",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:9999"));
        assert_eq!(cli.command, Command::Users { json: true });
    }
}
