use clap::Args;
use serde::Serialize;

use monoforge::{config, plan, ScaffoldPlan};

use super::{CmdResult, IntentArgs};

#[derive(Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub intent: IntentArgs,
}

#[derive(Debug, Serialize)]
pub struct PlanOutput {
    pub command: &'static str,
    #[serde(flatten)]
    pub plan: ScaffoldPlan,
}

/// Full caller chain: build the name, validate it, derive the scaffold
/// names. A policy violation aborts with exit code 2 and every violation in
/// the error message.
pub fn run(args: PlanArgs, _global: &super::GlobalArgs) -> CmdResult<PlanOutput> {
    let defaults = config::load()?;
    let intent = args.intent.into_intent(defaults.default_prefix);

    let plan = plan::plan(&intent)?;

    Ok((
        PlanOutput {
            command: "plan",
            plan,
        },
        0,
    ))
}
