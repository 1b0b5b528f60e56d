use clap::Args;

use monoforge::NamingIntent;

pub type CmdResult<T> = monoforge::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

/// Shared naming-intent flags for commands that build a repository name.
///
/// Field precedence mirrors the builder's pattern rules: `--raw` overrides
/// everything, then `--team`/`--component`, then `--service`/`--type`
/// (joined with `--project`), then `--project`/`--description`.
#[derive(Args, Default, Debug)]
pub struct IntentArgs {
    /// Use this name verbatim (normalized only), ignoring all other fields
    #[arg(long)]
    pub raw: Option<String>,

    /// Prefix prepended to the composed name
    #[arg(long)]
    pub prefix: Option<String>,

    /// Project name
    #[arg(long)]
    pub project: Option<String>,

    /// Short description (general pattern: {project}-{description})
    #[arg(long)]
    pub description: Option<String>,

    /// Service name (service pattern: {project}-{service}-{type})
    #[arg(long)]
    pub service: Option<String>,

    /// Service type, e.g. api or worker
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// Team name (component pattern: {team}-{component})
    #[arg(long)]
    pub team: Option<String>,

    /// Component name
    #[arg(long)]
    pub component: Option<String>,

    /// Ignore the configured default prefix
    #[arg(long)]
    pub no_prefix: bool,
}

impl IntentArgs {
    /// Convert flags to a [`NamingIntent`], falling back to the configured
    /// default prefix when `--prefix` is absent.
    pub fn into_intent(self, default_prefix: Option<String>) -> NamingIntent {
        let prefix = if self.no_prefix {
            None
        } else {
            self.prefix.or(default_prefix)
        };

        NamingIntent {
            raw: self.raw,
            prefix,
            project: self.project,
            description: self.description,
            service: self.service,
            kind: self.kind,
            team: self.team,
            component: self.component,
        }
    }
}

pub mod config;
pub mod name;
pub mod plan;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (monoforge::Result<serde_json::Value>, i32) {
    crate::tty::status("monoforge is working...");

    match command {
        crate::Commands::Name(args) => dispatch!(args, global, name),
        crate::Commands::Plan(args) => dispatch!(args, global, plan),
        crate::Commands::Config(args) => dispatch!(args, global, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_prefix_beats_default() {
        let args = IntentArgs {
            prefix: Some("cli".to_string()),
            ..IntentArgs::default()
        };
        let intent = args.into_intent(Some("team".to_string()));
        assert_eq!(intent.prefix.as_deref(), Some("cli"));
    }

    #[test]
    fn default_prefix_fills_in_when_absent() {
        let intent = IntentArgs::default().into_intent(Some("team".to_string()));
        assert_eq!(intent.prefix.as_deref(), Some("team"));
    }

    #[test]
    fn no_prefix_flag_suppresses_both() {
        let args = IntentArgs {
            prefix: Some("cli".to_string()),
            no_prefix: true,
            ..IntentArgs::default()
        };
        let intent = args.into_intent(Some("team".to_string()));
        assert!(intent.prefix.is_none());
    }
}
