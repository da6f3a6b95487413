//! Startup hints for configuration that silently failed to load.
//!
//! Figment only binds `COMMONS_*` keys with a `__` between section and
//! field, so `COMMONS_CMS_TOKEN` quietly does nothing. When a section is
//! still at its defaults even though env vars with its prefix exist, the
//! key was almost certainly spelled with a single underscore.

use commons_config::SiteConfig;

/// Warn when `COMMONS_*` env vars exist for a section that stayed at its
/// defaults.
pub fn warn_misconfigured_env(config: &SiteConfig) {
    for hint in env_hints(config, std::env::vars().map(|(key, _)| key)) {
        tracing::warn!("{hint}");
    }
}

fn env_hints<I>(config: &SiteConfig, env_keys: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let keys: Vec<String> = env_keys.into_iter().collect();

    let sections = [
        (
            "COMMONS_CMS",
            config.cms.is_configured(),
            "COMMONS_CMS__TOKEN",
        ),
        (
            "COMMONS_SMTP",
            config.smtp.is_configured(),
            "COMMONS_SMTP__APP_PASSWORD",
        ),
        (
            "COMMONS_REVALIDATE",
            config.revalidate.webhook_secret().is_some()
                || config.revalidate.manual_secret().is_some(),
            "COMMONS_REVALIDATE__WEBHOOK_SECRET",
        ),
    ];

    sections
        .into_iter()
        .filter(|(prefix, configured, _)| {
            !configured && keys.iter().any(|key| key.starts_with(prefix))
        })
        .map(|(prefix, _, example)| {
            format!(
                "{prefix}* env vars are set but none of them loaded; \
                 nested keys need a double underscore, as in {example}"
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use commons_config::{CmsConfig, SiteConfig};

    use super::env_hints;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn single_underscore_keys_trigger_hints() {
        let hints = env_hints(
            &SiteConfig::default(),
            keys(&[
                "COMMONS_CMS_TOKEN",
                "COMMONS_SMTP_USER",
                "COMMONS_REVALIDATE_WEBHOOK_SECRET",
            ]),
        );

        assert_eq!(hints.len(), 3);
        assert!(hints[0].contains("COMMONS_CMS__TOKEN"));
    }

    #[test]
    fn loaded_sections_stay_quiet() {
        let config = SiteConfig {
            cms: CmsConfig {
                token: "tok".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let hints = env_hints(&config, keys(&["COMMONS_CMS__TOKEN"]));

        assert!(hints.is_empty());
    }

    #[test]
    fn unrelated_env_vars_do_not_hint() {
        let hints = env_hints(&SiteConfig::default(), keys(&["PATH", "HOME", "COMMONS_LOG"]));
        assert!(hints.is_empty());
    }
}
