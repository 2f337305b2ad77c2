use std::path::PathBuf;

use anyhow::Context;
use docent_config::DocentConfig;
use docent_content::ContentRegistry;

use crate::cli::GlobalFlags;

/// Everything a content command needs: resolved config plus the loaded tree.
pub struct AppContext {
    pub config: DocentConfig,
    pub registry: ContentRegistry,
}

impl AppContext {
    /// Load config, apply `--content`, then load every language under the root.
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let mut config =
            DocentConfig::load_with_dotenv().context("failed to load docent configuration")?;
        if let Some(root) = &flags.content {
            config.content.root = PathBuf::from(root);
        }

        let registry = ContentRegistry::load(&config.content.root).with_context(|| {
            format!(
                "failed to load content from '{}'",
                config.content.root.display()
            )
        })?;

        for warning in config_warnings(&config, &registry, std::env::vars()) {
            tracing::warn!("{warning}");
        }

        Ok(Self { config, registry })
    }
}

/// Likely misconfigurations that would otherwise fail silently.
fn config_warnings<I>(config: &DocentConfig, registry: &ContentRegistry, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut warnings = Vec::new();

    let env_keys: Vec<String> = env.into_iter().map(|(key, _)| key).collect();
    if !config.executor.is_configured()
        && env_keys
            .iter()
            .any(|key| key.starts_with("DOCENT_EXECUTOR") && !key.starts_with("DOCENT_EXECUTOR__"))
    {
        warnings.push(
            "executor config is empty while DOCENT_EXECUTOR* env vars exist. Use double underscores (example: DOCENT_EXECUTOR__ENDPOINT)."
                .to_string(),
        );
    }

    if config.executor.backends.is_empty() {
        let linked: Vec<&str> = registry
            .languages()
            .iter()
            .filter(|l| l.is_runnable())
            .map(|l| l.id.as_str())
            .collect();
        if !linked.is_empty() {
            warnings.push(format!(
                "languages [{}] set executionApiId but executor.backends is empty; backend ids are not checked",
                linked.join(", ")
            ));
        }
    }

    warnings
}
