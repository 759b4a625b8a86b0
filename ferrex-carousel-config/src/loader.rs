use anyhow::{Context, anyhow};
use ferrex_carousel::CarouselOptions;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::validation::{ConfigWarnings, apply_guard_rails};

const PATH_VAR: &str = "CAROUSEL_CONFIG_PATH";
const JSON_VAR: &str = "CAROUSEL_CONFIG_JSON";

/// Source that produced the carousel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CarouselConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// On-disk carousel settings. Everything lives under a `[carousel]` table so
/// the file can sit next to other host configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Engine options. Omitted fields keep their defaults; `slide_count` is
    /// usually overridden by the host once content is known.
    pub carousel: CarouselOptions,
}

impl CarouselConfig {
    /// Load carousel configuration using environment variables.
    /// Evaluation order:
    /// 1) `$CAROUSEL_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$CAROUSEL_CONFIG_JSON` (inline JSON),
    /// 3) `carousel.toml`/`carousel.json` in the working directory,
    /// 4) defaults if none of the above is present.
    pub fn load_from_env() -> anyhow::Result<(Self, CarouselConfigSource)> {
        Self::load_with(|key| env::var(key).ok(), Path::new("."))
    }

    /// [`load_from_env`](Self::load_from_env) with an explicit variable
    /// lookup and search directory.
    pub fn load_with<F>(
        lookup: F,
        search_dir: &Path,
    ) -> anyhow::Result<(Self, CarouselConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(PATH_VAR)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            tracing::info!("carousel config loaded from {}", path.display());
            return Ok((config, CarouselConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(JSON_VAR)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {JSON_VAR}"))?;
            tracing::info!("carousel config loaded from {JSON_VAR}");
            return Ok((parsed, CarouselConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(search_dir) {
            let config = Self::load_from_file(&path)?;
            tracing::info!("carousel config loaded from {}", path.display());
            return Ok((config, CarouselConfigSource::File(path)));
        }

        tracing::info!("no carousel config found; using defaults");
        Ok((Self::default(), CarouselConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read carousel config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid carousel config {}", path.display())
            }),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!(
                        "invalid carousel config {}: {}",
                        path.display(),
                        err
                    )
                })
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // TOML first, then JSON.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse carousel config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid carousel config json: {err}"))
    }

    /// Run the guard rails and hand back options ready for an engine.
    /// Warnings are logged as well as returned.
    pub fn into_validated(
        self,
    ) -> anyhow::Result<(CarouselOptions, ConfigWarnings)> {
        let warnings = apply_guard_rails(&self.carousel)
            .context("carousel config rejected")?;
        for warning in &warnings.items {
            match &warning.hint {
                Some(hint) => {
                    tracing::warn!("{} (hint: {})", warning.message, hint)
                }
                None => tracing::warn!("{}", warning.message),
            }
        }
        Ok((self.carousel, warnings))
    }

    fn find_default_file(dir: &Path) -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "carousel.toml",
            "carousel.json",
            "config/carousel.toml",
            "config/carousel.json",
        ];

        CANDIDATES
            .iter()
            .map(|candidate| dir.join(candidate))
            .find(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrex_carousel::{AutoplayMode, CommitThreshold};

    #[test]
    fn toml_overrides_merge_with_defaults() {
        let config = CarouselConfig::parse_from_str(
            r#"
            [carousel]
            slide_count = 6

            [carousel.layout]
            loop = true
            align = "center"

            [carousel.interaction]
            commit_threshold = { viewport_fraction = 0.25 }

            [carousel.autoplay]
            enabled = true
            mode = "continuous"
            "#,
            "inline",
        )
        .unwrap();

        let options = &config.carousel;
        assert_eq!(options.slide_count, 6);
        assert!(options.layout.looping);
        assert_eq!(
            options.interaction.commit_threshold,
            Some(CommitThreshold::ViewportFraction(0.25))
        );
        assert_eq!(options.autoplay.mode, AutoplayMode::Continuous);
        assert_eq!(options.autoplay.interval_ms, 5_000);
        assert!(options.a11y.announce);
    }

    #[test]
    fn json_is_accepted_as_a_fallback() {
        let config = CarouselConfig::parse_from_str(
            r#"{ "carousel": { "slide_count": 3, "initial_index": 2 } }"#,
            "inline",
        )
        .unwrap();
        assert_eq!(config.carousel.initial_index, 2);
    }

    #[test]
    fn garbage_reports_both_parsers() {
        let err = CarouselConfig::parse_from_str("not = [valid", "inline")
            .unwrap_err()
            .to_string();
        assert!(err.contains("toml error"));
        assert!(err.contains("json error"));
    }
}
