use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use serde::Serialize;
use tracing::debug;
use veridoc_diff::{diff_documents, Difference, DiffConfig};
use veridoc_scenarios::{self as scenarios, spdx_diff_config, Scenario};
use veridoc_types::Node;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::List(args) => cmd_list(args, &cli.format),
        Command::Run(args) => cmd_run(args, &cli.format),
    }
}

fn cmd_list(args: ListArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let listed: Vec<&Scenario> = match &args.category {
        Some(name) => scenarios::by_category(name.parse()?),
        None => scenarios::all().iter().collect(),
    };

    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = listed
                .iter()
                .map(|scenario| {
                    serde_json::json!({
                        "name": scenario.name,
                        "category": scenario.category.name(),
                        "description": scenario.description,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Text => {
            for scenario in listed {
                println!(
                    "{}  [{}]  {}",
                    scenario.name.bold(),
                    scenario.category.name().cyan(),
                    scenario.description
                );
            }
        }
    }
    Ok(())
}

/// The outcome of running one scenario against one candidate document.
#[derive(Debug, Serialize)]
struct Outcome {
    scenario: &'static str,
    success: bool,
    differences: Vec<Difference>,
}

fn cmd_run(args: RunArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let selected = scenarios::select(&args.scenarios, &args.categories)?;

    if selected.is_empty() {
        let known: Vec<&str> = scenarios::all().iter().map(|s| s.name).collect();
        bail!(
            "no scenarios fit the input parameters; available scenarios are: {}",
            known.join(", ")
        );
    }
    if selected.len() != args.inputs.len() {
        let names: Vec<&str> = selected.iter().map(|s| s.name).collect();
        bail!(
            "{} input files were provided, but {} scenarios were selected: {}",
            args.inputs.len(),
            selected.len(),
            names.join(", ")
        );
    }

    let mut outcomes = Vec::with_capacity(selected.len());
    for (&scenario, input) in selected.iter().zip(&args.inputs) {
        let outcome = run_scenario(scenario, input, &config)?;
        if matches!(format, OutputFormat::Text) {
            print_outcome(&outcome);
        }
        outcomes.push(outcome);
    }

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    }

    let failed = outcomes.iter().filter(|outcome| !outcome.success).count();
    if failed > 0 {
        bail!("{failed} of {} scenarios failed", outcomes.len());
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<DiffConfig> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("cannot read config file {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("invalid config file {}", path.display()))
        }
        None => Ok(spdx_diff_config()),
    }
}

fn run_scenario(
    scenario: &Scenario,
    input: &Path,
    config: &DiffConfig,
) -> anyhow::Result<Outcome> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("cannot read input file {}", input.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("input file {} is not valid JSON", input.display()))?;
    let candidate = Node::from(value);

    let reference = scenario.reference_document();
    let differences = diff_documents(&candidate, &reference, config);
    debug!(
        scenario = scenario.name,
        input = %input.display(),
        differences = differences.len(),
        "scenario compared"
    );

    Ok(Outcome {
        scenario: scenario.name,
        success: differences.is_empty(),
        differences,
    })
}

fn print_outcome(outcome: &Outcome) {
    if outcome.success {
        println!("{} {} succeeded", "✓".green().bold(), outcome.scenario.bold());
    } else {
        println!(
            "{} {} failed: the candidate document did not meet the expectations",
            "✗".red().bold(),
            outcome.scenario.bold()
        );
        for difference in &outcome.differences {
            println!("  {}", difference);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_json(value: &serde_json::Value) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", value).unwrap();
        file
    }

    #[test]
    fn conformant_candidate_succeeds() {
        let scenario = scenarios::find("generationMinimalTest").unwrap();
        let candidate = write_json(&scenario.reference_document().to_json());

        let outcome = run_scenario(scenario, candidate.path(), &spdx_diff_config()).unwrap();
        assert!(outcome.success);
        assert!(outcome.differences.is_empty());
    }

    #[test]
    fn nonconformant_candidate_reports_differences() {
        let scenario = scenarios::find("generationMinimalTest").unwrap();
        let mut document = scenario.reference_document().to_json();
        document["name"] = serde_json::json!("wrong name");
        let candidate = write_json(&document);

        let outcome = run_scenario(scenario, candidate.path(), &spdx_diff_config()).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.differences.len(), 1);
        assert_eq!(outcome.differences[0].path, "/name");
    }

    #[test]
    fn invalid_json_is_an_input_error() {
        let scenario = scenarios::find("generationMinimalTest").unwrap();
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = run_scenario(scenario, file.path(), &spdx_diff_config()).unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let scenario = scenarios::find("generationMinimalTest").unwrap();
        let err = run_scenario(scenario, Path::new("/nonexistent.json"), &spdx_diff_config())
            .unwrap_err();
        assert!(err.to_string().contains("cannot read input file"));
    }

    #[test]
    fn config_file_overrides_profile() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "identifier_field = \"key\"").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.identifier_field, "key");
        assert!(config.no_assertion_forms.is_empty());
    }

    #[test]
    fn default_config_is_the_spdx_profile() {
        let config = load_config(None).unwrap();
        assert_eq!(config, spdx_diff_config());
    }
}
