//! Enhancement parameter resolution.
//!
//! Pure mapping from a configuration snapshot plus frame statistics to the
//! numeric factors the pixel transform applies. No hidden state: identical
//! inputs always resolve to identical parameters.

use crate::models::config::{EnhanceConfiguration, ExposureMode, WhiteBalanceMode};
use crate::models::video_models::FrameStatistics;

/// Brightness gained per stop of exposure compensation.
const EXPOSURE_BRIGHTNESS_SCALE: f32 = 0.4;
/// Gamma below 1.0 brightens shadows more than highlights.
const LOW_LIGHT_GAMMA: f32 = 0.7;
const NIGHT_GAMMA: f32 = 0.6;
const LOW_LIGHT_CONTRAST: f32 = 1.3;
const NIGHT_CONTRAST: f32 = 1.5;
/// ISO 100 is the unity sensitivity baseline.
const ISO_BASELINE: f32 = 100.0;
/// Continuous auto-exposure: scenes darker than this average luminance are
/// brightened, scenes brighter than `BRIGHT_SCENE_LUMINANCE` are darkened.
const DARK_SCENE_LUMINANCE: f32 = 80.0;
const BRIGHT_SCENE_LUMINANCE: f32 = 180.0;
const DARK_SCENE_GAIN: f32 = 1.3;
const BRIGHT_SCENE_GAIN: f32 = 0.9;
/// Auto white balance gains are clamped to stay within plausible casts.
const WB_GAIN_MIN: f32 = 0.8;
const WB_GAIN_MAX: f32 = 1.3;

/// Resolved per-frame transform factors.
///
/// Derived fresh each frame from the configuration snapshot and, when auto
/// modes are active, the statistics of the frame about to be transformed.
/// Never persisted across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnhancementParams {
    /// Exposure gain from compensation and ISO; applied together with
    /// `auto_exposure_adjustment` in the exposure stage.
    pub brightness_factor: f32,
    pub contrast_factor: f32,
    /// Power-law exponent for the gamma stage.
    pub gamma: f32,
    /// sqrt(iso / 100); already multiplied into `brightness_factor`.
    pub iso_multiplier: f32,
    /// Per-frame gain from continuous auto-exposure (1.0 when fixed).
    pub auto_exposure_adjustment: f32,
    pub white_balance_gain_r: f32,
    pub white_balance_gain_g: f32,
    pub white_balance_gain_b: f32,
}

impl EnhancementParams {
    /// Resolve the transform factors for one frame.
    pub fn resolve(config: &EnhanceConfiguration, stats: &FrameStatistics) -> Self {
        let mut brightness_factor =
            1.0 + config.exposure_compensation * EXPOSURE_BRIGHTNESS_SCALE;

        let (gamma, contrast_factor) = if config.night_mode_enabled {
            (NIGHT_GAMMA, NIGHT_CONTRAST)
        } else {
            (LOW_LIGHT_GAMMA, LOW_LIGHT_CONTRAST)
        };

        let iso_multiplier = match config.iso.value() {
            Some(iso) => (iso as f32 / ISO_BASELINE).sqrt(),
            None => 1.0,
        };
        brightness_factor *= iso_multiplier;

        let auto_exposure_adjustment = match config.exposure_mode {
            ExposureMode::Continuous if stats.avg_luminance < DARK_SCENE_LUMINANCE => {
                DARK_SCENE_GAIN
            }
            ExposureMode::Continuous if stats.avg_luminance > BRIGHT_SCENE_LUMINANCE => {
                BRIGHT_SCENE_GAIN
            }
            _ => 1.0,
        };

        let (white_balance_gain_r, white_balance_gain_b) = match config.white_balance_mode {
            WhiteBalanceMode::Off => (1.0, 1.0),
            WhiteBalanceMode::Continuous | WhiteBalanceMode::SingleShot => {
                // Normalize to the green channel; a frame with no green at
                // all gives no reference, so gains stay neutral.
                if stats.avg_g > 0.0 {
                    (
                        (stats.avg_g / stats.avg_r.max(1.0)).clamp(WB_GAIN_MIN, WB_GAIN_MAX),
                        (stats.avg_g / stats.avg_b.max(1.0)).clamp(WB_GAIN_MIN, WB_GAIN_MAX),
                    )
                } else {
                    (1.0, 1.0)
                }
            }
        };

        Self {
            brightness_factor,
            contrast_factor,
            gamma,
            iso_multiplier,
            auto_exposure_adjustment,
            white_balance_gain_r,
            white_balance_gain_g: 1.0,
            white_balance_gain_b,
        }
    }
}
