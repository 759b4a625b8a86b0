use ferrex_carousel::{AutoplayMode, CarouselError, CarouselOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error(transparent)]
    InvalidOption(#[from] CarouselError),
    #[error("continuous autoplay needs a positive speed, got {speed} px/s")]
    StalledContinuousAutoplay { speed: f32 },
    #[error("edge announcements need a non-empty prefix")]
    EmptyEdgePrefix,
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Reject options the engine would refuse or that can never work, and
/// collect warnings for legal values that probably are not what was meant.
pub fn apply_guard_rails(
    options: &CarouselOptions,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    options.validate()?;

    let mut warnings = ConfigWarnings::default();
    check_autoplay(options, &mut warnings)?;
    check_layout(options, &mut warnings);
    check_a11y(options, &mut warnings)?;
    Ok(warnings)
}

fn check_autoplay(
    options: &CarouselOptions,
    warnings: &mut ConfigWarnings,
) -> Result<(), ConfigGuardRailError> {
    let autoplay = &options.autoplay;
    if !autoplay.enabled {
        return Ok(());
    }

    match autoplay.mode {
        AutoplayMode::Continuous if autoplay.continuous_px_per_s <= 0.0 => {
            return Err(ConfigGuardRailError::StalledContinuousAutoplay {
                speed: autoplay.continuous_px_per_s,
            });
        }
        AutoplayMode::Step if autoplay.interval_ms == 0 => {
            warnings.push_with_hint(
                "autoplay enabled with a zero interval; it will never advance",
                "Set autoplay.interval_ms or disable autoplay",
            );
        }
        AutoplayMode::Step
            if !options.motion.disabled
                && autoplay.interval_ms < options.motion.duration_ms =>
        {
            warnings.push_with_hint(
                format!(
                    "autoplay interval {}ms is shorter than the {}ms snap animation",
                    autoplay.interval_ms, options.motion.duration_ms
                ),
                "Slides will advance before the previous one settles",
            );
        }
        _ => {}
    }

    if options.slide_count == 1 {
        warnings.push("autoplay enabled for a single slide; it will never run");
    }
    if !autoplay.pause_when_hidden {
        warnings.push_with_hint(
            "autoplay keeps running while the carousel is hidden",
            "Leave autoplay.pause_when_hidden on unless the host pauses it itself",
        );
    }
    Ok(())
}

fn check_layout(options: &CarouselOptions, warnings: &mut ConfigWarnings) {
    let layout = &options.layout;
    if layout.looping && layout.window_size == 1 && layout.overscan == 0 {
        warnings.push_with_hint(
            "looping with a single mounted slide leaves no neighbour to scroll into",
            "Raise layout.window_size or layout.overscan",
        );
    }
    if options.slide_count > 0 && options.interaction.step >= options.slide_count
    {
        warnings.push(format!(
            "interaction.step {} covers all {} slides",
            options.interaction.step, options.slide_count
        ));
    }
}

fn check_a11y(
    options: &CarouselOptions,
    warnings: &mut ConfigWarnings,
) -> Result<(), ConfigGuardRailError> {
    let a11y = &options.a11y;
    if a11y.announce && !options.layout.looping && a11y.edge_prefix.trim().is_empty()
    {
        return Err(ConfigGuardRailError::EmptyEdgePrefix);
    }
    if !a11y.announce {
        warnings.push_with_hint(
            "slide announcements are disabled",
            "Screen reader users will not hear slide changes",
        );
    }
    if a11y.label.as_deref().is_none_or(|label| label.trim().is_empty()) {
        warnings.push("carousel has no accessible label");
    }
    Ok(())
}
