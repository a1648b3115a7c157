use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "veridoc",
    about = "veridoc — semantic conformance testbed for structured documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List registered scenarios
    List(ListArgs),
    /// Run scenarios against candidate documents
    Run(RunArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Restrict the listing to one category
    #[arg(short, long)]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct RunArgs {
    /// Scenario names, paired positionally with the input files.
    /// At least one of --scenario or --category must be given.
    #[arg(short = 't', long = "scenario")]
    pub scenarios: Vec<String>,

    /// Select every scenario of a category
    #[arg(short = 'c', long = "category")]
    pub categories: Vec<String>,

    /// Candidate documents (JSON), one per selected scenario
    #[arg(short = 'f', long = "input", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Comparison profile override (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list() {
        let cli = Cli::try_parse_from(["veridoc", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List(_)));
    }

    #[test]
    fn parse_list_with_category() {
        let cli = Cli::try_parse_from(["veridoc", "list", "--category", "generation"]).unwrap();
        if let Command::List(args) = cli.command {
            assert_eq!(args.category, Some("generation".into()));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_run_with_scenarios_and_inputs() {
        let cli = Cli::try_parse_from([
            "veridoc", "run",
            "-t", "generationMinimalTest",
            "-t", "generationFileTest",
            "-f", "a.json",
            "-f", "b.json",
        ])
        .unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.scenarios.len(), 2);
            assert_eq!(args.inputs, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
            assert!(args.categories.is_empty());
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_run_with_category() {
        let cli = Cli::try_parse_from([
            "veridoc", "run", "-c", "generation", "-f", "a.json",
        ])
        .unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.categories, vec!["generation"]);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn run_requires_inputs() {
        assert!(Cli::try_parse_from(["veridoc", "run", "-t", "generationMinimalTest"]).is_err());
    }

    #[test]
    fn parse_run_with_config() {
        let cli = Cli::try_parse_from([
            "veridoc", "run", "-t", "x", "-f", "a.json", "--config", "profile.toml",
        ])
        .unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.config, Some(PathBuf::from("profile.toml")));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["veridoc", "--format", "json", "list"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["veridoc", "--verbose", "list"]).unwrap();
        assert!(cli.verbose);
    }
}
