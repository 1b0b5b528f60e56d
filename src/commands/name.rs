use clap::{Args, Subcommand};
use serde::Serialize;

use monoforge::{build_repo_name, config, validate_repo_name};

use super::{CmdResult, IntentArgs};

#[derive(Args)]
pub struct NameArgs {
    #[command(subcommand)]
    command: NameCommand,
}

#[derive(Subcommand)]
enum NameCommand {
    /// Build a canonical name from naming-intent fields (no validation)
    Build {
        #[command(flatten)]
        intent: IntentArgs,
    },
    /// Check a candidate name against the naming policy
    Check {
        /// Candidate repository name
        name: String,
    },
}

#[derive(Debug, Serialize)]
pub struct NameOutput {
    pub command: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

pub fn run(args: NameArgs, _global: &super::GlobalArgs) -> CmdResult<NameOutput> {
    match args.command {
        NameCommand::Build { intent } => build(intent),
        NameCommand::Check { name } => check(&name),
    }
}

fn build(args: IntentArgs) -> CmdResult<NameOutput> {
    let defaults = config::load()?;
    let intent = args.into_intent(defaults.default_prefix);
    let name = build_repo_name(&intent);

    // The builder never rejects; empty or rule-breaking output surfaces in
    // `name check` or `plan`.
    Ok((
        NameOutput {
            command: "name.build",
            name,
            ok: None,
            errors: Vec::new(),
        },
        0,
    ))
}

fn check(name: &str) -> CmdResult<NameOutput> {
    let verdict = validate_repo_name(name);
    let exit_code = if verdict.ok { 0 } else { 2 };

    Ok((
        NameOutput {
            command: "name.check",
            name: name.to_string(),
            ok: Some(verdict.ok),
            errors: verdict.errors,
        },
        exit_code,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_passes_valid_name_with_exit_zero() {
        let (output, exit_code) = check("my-app").unwrap();
        assert_eq!(output.ok, Some(true));
        assert!(output.errors.is_empty());
        assert_eq!(exit_code, 0);
    }

    #[test]
    fn check_reports_violations_with_exit_two() {
        let (output, exit_code) = check("My_App").unwrap();
        assert_eq!(output.ok, Some(false));
        assert!(!output.errors.is_empty());
        assert_eq!(exit_code, 2);
    }
}
