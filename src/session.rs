// Caller-held configuration (model color, user color, tolerance) and the
// "recompute on demand" entry point the viewer calls after every change.
use crate::color::{MAX_DISTANCE, Rgb, hex_to_rgb};
use crate::compare::{ImageComparison, compare_images};
use crate::error::{Error, Result};
use crate::scene::Scene;
use image::RgbaImage;
use log::{debug, warn};

pub const ENV_MODEL_COLOR: &str = "COLOR_MATCH_MODEL";
pub const ENV_USER_COLOR: &str = "COLOR_MATCH_USER";
pub const ENV_TOLERANCE: &str = "COLOR_MATCH_TOLERANCE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub model_color: Rgb,
    pub user_color: Rgb,
    pub tolerance: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_color: Rgb::new(74, 74, 74),
            user_color: Rgb::new(80, 80, 80),
            tolerance: 100.0,
        }
    }
}

impl Settings {
    /// Defaults, overridden by any well-formed environment variable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Malformed values are logged and skipped; the default stays in place.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(hex) = lookup(ENV_MODEL_COLOR) {
            if let Err(e) = settings.apply_model_hex(&hex) {
                warn!("{ENV_MODEL_COLOR}: {e}");
            }
        }
        if let Some(hex) = lookup(ENV_USER_COLOR) {
            if let Err(e) = settings.apply_user_hex(&hex) {
                warn!("{ENV_USER_COLOR}: {e}");
            }
        }
        if let Some(raw) = lookup(ENV_TOLERANCE) {
            match raw.trim().parse::<f64>() {
                Ok(t) if t.is_finite() && t >= 0.0 => settings.tolerance = t.min(MAX_DISTANCE),
                _ => warn!("{ENV_TOLERANCE}: `{raw}` is not a non-negative number"),
            }
        }
        settings
    }

    pub fn apply_model_hex(&mut self, hex: &str) -> Result<()> {
        self.model_color = hex_to_rgb(hex).ok_or_else(|| Error::InvalidHex(hex.to_string()))?;
        Ok(())
    }

    pub fn apply_user_hex(&mut self, hex: &str) -> Result<()> {
        self.user_color = hex_to_rgb(hex).ok_or_else(|| Error::InvalidHex(hex.to_string()))?;
        Ok(())
    }

    pub fn nudge_model(&mut self, channel: Channel, delta: i16) {
        nudge_channel(&mut self.model_color, channel, delta);
    }

    pub fn nudge_user(&mut self, channel: Channel, delta: i16) {
        nudge_channel(&mut self.user_color, channel, delta);
    }

    /// Move the tolerance, clamped to [0, MAX_DISTANCE].
    pub fn nudge_tolerance(&mut self, delta: f64) {
        self.tolerance = (self.tolerance + delta).clamp(0.0, MAX_DISTANCE);
    }
}

fn nudge_channel(color: &mut Rgb, channel: Channel, delta: i16) {
    let slot = match channel {
        Channel::Red => &mut color.r,
        Channel::Green => &mut color.g,
        Channel::Blue => &mut color.b,
    };
    *slot = (*slot as i16 + delta).clamp(0, 255) as u8;
}

/// Everything one evaluation produced, ready to be shown.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub reference: RgbaImage,
    pub drawing: RgbaImage,
    pub comparison: ImageComparison,
}

/// The scene plus live settings. Holds no results between evaluations.
#[derive(Debug, Clone)]
pub struct Session {
    pub scene: Scene,
    pub settings: Settings,
}

impl Session {
    pub fn new(scene: Scene, settings: Settings) -> Self {
        Self { scene, settings }
    }

    pub fn reset(&mut self) {
        self.settings = Settings::default();
    }

    /// Render both canvases from the current settings and compare them.
    pub fn evaluate(&self) -> Result<Evaluation> {
        let reference = self.scene.render_fill(self.settings.model_color);
        let drawing = self.scene.render_fill(self.settings.user_color);
        let comparison = compare_images(
            &reference,
            &drawing,
            self.settings.model_color,
            self.settings.tolerance,
        )?;
        debug!(
            "evaluate: model {} user {} tol {:.1} -> {:?}",
            self.settings.model_color.to_hex(),
            self.settings.user_color.to_hex(),
            self.settings.tolerance,
            comparison.counts
        );
        Ok(Evaluation { reference, drawing, comparison })
    }
}
