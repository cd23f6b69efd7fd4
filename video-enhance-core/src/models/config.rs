use serde::{Deserialize, Serialize};

use super::video_models::StatsRequest;

/// Exposure metering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExposureMode {
    /// Exposure comes from the compensation setting alone.
    Fixed,
    /// Exposure is additionally adjusted per frame from its average luminance.
    Continuous,
}

/// White balance mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhiteBalanceMode {
    Off,
    Continuous,
    #[serde(rename = "single-shot")]
    SingleShot,
}

/// Simulated sensor sensitivity. ISO 100 is the unity baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IsoSetting {
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "100")]
    Iso100,
    #[serde(rename = "200")]
    Iso200,
    #[serde(rename = "400")]
    Iso400,
    #[serde(rename = "800")]
    Iso800,
    #[serde(rename = "1600")]
    Iso1600,
    #[serde(rename = "3200")]
    Iso3200,
}

impl IsoSetting {
    /// The numeric ISO value, or `None` for auto.
    pub fn value(self) -> Option<u16> {
        match self {
            Self::Auto => None,
            Self::Iso100 => Some(100),
            Self::Iso200 => Some(200),
            Self::Iso400 => Some(400),
            Self::Iso800 => Some(800),
            Self::Iso1600 => Some(1600),
            Self::Iso3200 => Some(3200),
        }
    }
}

/// Configuration for the enhancement loop.
///
/// Owned by the host application; the session reads one consistent snapshot
/// per tick (via the `ConfigStore` trait) so an in-flight frame never sees a
/// torn mix of old and new settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhanceConfiguration {
    /// Master toggle for low-light enhancement.
    pub low_light_enabled: bool,

    /// Aggressive profile adding shadow and highlight boosts on top of the
    /// standard low-light pipeline.
    pub night_mode_enabled: bool,

    pub exposure_mode: ExposureMode,

    /// Exposure compensation in stops, domain [-2.0, +2.0].
    pub exposure_compensation: f32,

    pub white_balance_mode: WhiteBalanceMode,

    pub iso: IsoSetting,

    /// Smooth very dark pixels to suppress sensor noise.
    pub noise_reduction_enabled: bool,
}

impl EnhanceConfiguration {
    pub const EXPOSURE_COMPENSATION_MIN: f32 = -2.0;
    pub const EXPOSURE_COMPENSATION_MAX: f32 = 2.0;

    pub fn validate(&self) -> Result<(), String> {
        if !self.exposure_compensation.is_finite() {
            return Err("exposure compensation must be finite".into());
        }
        if self.exposure_compensation < Self::EXPOSURE_COMPENSATION_MIN
            || self.exposure_compensation > Self::EXPOSURE_COMPENSATION_MAX
        {
            return Err(format!(
                "exposure compensation {} outside [{}, {}]",
                self.exposure_compensation,
                Self::EXPOSURE_COMPENSATION_MIN,
                Self::EXPOSURE_COMPENSATION_MAX
            ));
        }
        Ok(())
    }

    /// Whether any enhancement stage runs at all.
    pub fn enhancement_active(&self) -> bool {
        self.low_light_enabled || self.night_mode_enabled
    }

    /// Which frame statistics the parameter resolver will need.
    pub fn stats_request(&self) -> StatsRequest {
        StatsRequest {
            luminance: self.exposure_mode == ExposureMode::Continuous,
            channel_averages: self.white_balance_mode != WhiteBalanceMode::Off,
        }
    }

    /// Preset for dark environments: low-light on, exposure raised one stop.
    pub fn low_light() -> Self {
        Self {
            low_light_enabled: true,
            exposure_compensation: 1.0,
            ..Self::default()
        }
    }

    /// Preset for maximum sensitivity: night mode (which implies low-light),
    /// exposure at +2 stops, ISO 3200, continuous auto-exposure.
    pub fn night_boost() -> Self {
        Self {
            low_light_enabled: true,
            night_mode_enabled: true,
            exposure_mode: ExposureMode::Continuous,
            exposure_compensation: 2.0,
            iso: IsoSetting::Iso3200,
            ..Self::default()
        }
    }
}

impl Default for EnhanceConfiguration {
    fn default() -> Self {
        Self {
            low_light_enabled: false,
            night_mode_enabled: false,
            exposure_mode: ExposureMode::Fixed,
            exposure_compensation: 0.0,
            white_balance_mode: WhiteBalanceMode::Off,
            iso: IsoSetting::Auto,
            noise_reduction_enabled: false,
        }
    }
}
