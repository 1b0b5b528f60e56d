use heck::{ToSnakeCase, ToUpperCamelCase};
use serde::Serialize;

use crate::name::{build_repo_name, NamingIntent};
use crate::validate::validate_repo_name;
use crate::{Error, Result};

/// Names derived from one validated repository name. Covers everything the
/// scaffolding steps consume: the GitHub repo, the checkout directory, the
/// two monorepo packages, and the app's root class.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldPlan {
    pub repo_name: String,
    pub directory: String,
    pub api_package: String,
    pub app_package: String,
    pub app_class: String,
    pub app_module: String,
}

impl ScaffoldPlan {
    fn derive(repo_name: String) -> Self {
        Self {
            directory: repo_name.clone(),
            api_package: format!("{}-api", repo_name),
            app_package: format!("{}-app", repo_name),
            app_class: repo_name.to_upper_camel_case(),
            app_module: repo_name.to_snake_case(),
            repo_name,
        }
    }
}

/// Build, validate, and derive in one step.
///
/// Fails with `naming.policy_violation` when the built name breaks any
/// rule; the error message carries one violation per line.
pub fn plan(intent: &NamingIntent) -> Result<ScaffoldPlan> {
    let repo_name = build_repo_name(intent);
    let verdict = validate_repo_name(&repo_name);

    if !verdict.ok {
        return Err(Error::naming_policy_violation(repo_name, verdict.errors));
    }

    log_status!("plan", "Derived names for {}", repo_name);
    Ok(ScaffoldPlan::derive(repo_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;

    #[test]
    fn plan_derives_all_names() {
        let intent = NamingIntent {
            project: Some("ecom".to_string()),
            service: Some("order".to_string()),
            kind: Some("api".to_string()),
            ..NamingIntent::default()
        };
        let plan = plan(&intent).unwrap();
        assert_eq!(plan.repo_name, "ecom-order-api");
        assert_eq!(plan.directory, "ecom-order-api");
        assert_eq!(plan.api_package, "ecom-order-api-api");
        assert_eq!(plan.app_package, "ecom-order-api-app");
        assert_eq!(plan.app_class, "EcomOrderApi");
        assert_eq!(plan.app_module, "ecom_order_api");
    }

    #[test]
    fn invalid_name_aborts_with_every_violation() {
        let intent = NamingIntent {
            raw: Some("MyApp".to_string()),
            ..NamingIntent::default()
        };
        // Normalizes to "myapp": single segment
        let err = plan(&intent).unwrap_err();
        assert_eq!(err.code, ErrorCode::NamingPolicyViolation);
        assert!(err.message.contains("at least two segments"));
    }

    #[test]
    fn empty_intent_is_rejected_not_panicked() {
        let err = plan(&NamingIntent::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NamingPolicyViolation);
    }
}
