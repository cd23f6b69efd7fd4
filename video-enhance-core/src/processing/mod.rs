//! Stateless per-frame processing: statistics estimation, parameter
//! resolution, and the pixel transform. The session in `crate::session`
//! drives these once per tick; none of them keeps state between frames.

pub mod params;
pub mod statistics;
pub mod transform;

use crate::models::config::EnhanceConfiguration;
use crate::models::error::EnhanceError;
use crate::models::frame::Frame;
use crate::models::video_models::FrameStatistics;

use params::EnhancementParams;

/// Run the full per-frame pipeline on `frame` in place: statistics (when an
/// auto mode needs them) → parameter resolution → pixel transform.
///
/// Returns the resolved parameters, or `None` when the configuration has no
/// enhancement enabled — in that case the frame is left untouched.
pub fn enhance_in_place(
    frame: &mut Frame,
    config: &EnhanceConfiguration,
) -> Result<Option<EnhancementParams>, EnhanceError> {
    if !config.enhancement_active() {
        return Ok(None);
    }

    let request = config.stats_request();
    let stats = if request.any() {
        statistics::analyze(frame, request)?
    } else {
        FrameStatistics::default()
    };

    let resolved = EnhancementParams::resolve(config, &stats);
    transform::apply_in_place(frame, &resolved, config)?;
    Ok(Some(resolved))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::{ExposureMode, IsoSetting, WhiteBalanceMode};

    /// Low-light at +1 EV, everything automatic turned off.
    fn manual_low_light() -> EnhanceConfiguration {
        EnhanceConfiguration {
            low_light_enabled: true,
            night_mode_enabled: false,
            exposure_mode: ExposureMode::Fixed,
            exposure_compensation: 1.0,
            white_balance_mode: WhiteBalanceMode::Off,
            iso: IsoSetting::Auto,
            noise_reduction_enabled: false,
        }
    }

    #[test]
    fn inactive_configuration_is_identity() {
        let mut frame = Frame::filled(4, 4, [50, 120, 200, 31]);
        let original = frame.clone();

        let params = enhance_in_place(&mut frame, &EnhanceConfiguration::default()).unwrap();
        assert!(params.is_none());
        assert_eq!(frame, original);
    }

    #[test]
    fn uniform_gray_frame_brightens_as_documented() {
        // 50 → gamma 0.7 → 81.52 → ×1.4 → 114.12 → contrast 1.3 → 109.96.
        let mut frame = Frame::filled(8, 8, [50, 50, 50, 255]);
        let params = enhance_in_place(&mut frame, &manual_low_light())
            .unwrap()
            .unwrap();

        assert_eq!(params.brightness_factor, 1.4);
        assert_eq!(params.gamma, 0.7);
        assert_eq!(params.contrast_factor, 1.3);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(frame.pixel(x, y).unwrap(), [110, 110, 110, 255]);
            }
        }
    }

    #[test]
    fn night_mode_output_is_strictly_brighter() {
        let mut standard = Frame::filled(4, 4, [50, 50, 50, 255]);
        enhance_in_place(&mut standard, &manual_low_light()).unwrap();

        let mut night = Frame::filled(4, 4, [50, 50, 50, 255]);
        let config = EnhanceConfiguration {
            night_mode_enabled: true,
            ..manual_low_light()
        };
        enhance_in_place(&mut night, &config).unwrap();

        // 50 → gamma 0.6 → 95.95 → ×1.4 → 134.33 → contrast 1.5 → 137.49,
        // then the highlight boost lifts the three-way tie to 164.99.
        assert_eq!(night.pixel(0, 0).unwrap(), [165, 165, 165, 255]);
        assert!(night.pixel(0, 0).unwrap()[0] > standard.pixel(0, 0).unwrap()[0]);
    }

    #[test]
    fn continuous_exposure_reads_this_frames_luminance() {
        let mut config = manual_low_light();
        config.exposure_mode = ExposureMode::Continuous;

        let mut dark = Frame::filled(4, 4, [60, 60, 60, 255]);
        let params = enhance_in_place(&mut dark, &config).unwrap().unwrap();
        assert_eq!(params.auto_exposure_adjustment, 1.3);

        let mut bright = Frame::filled(4, 4, [200, 200, 200, 255]);
        let params = enhance_in_place(&mut bright, &config).unwrap().unwrap();
        assert_eq!(params.auto_exposure_adjustment, 0.9);
    }

    #[test]
    fn statistics_pass_is_skipped_without_auto_modes() {
        // With fixed exposure and white balance off the resolved parameters
        // cannot depend on frame content: identical settings over wildly
        // different frames give identical factors.
        let config = manual_low_light();

        let mut black = Frame::filled(2, 2, [0, 0, 0, 255]);
        let mut white = Frame::filled(2, 2, [255, 255, 255, 255]);
        let p1 = enhance_in_place(&mut black, &config).unwrap().unwrap();
        let p2 = enhance_in_place(&mut white, &config).unwrap().unwrap();
        assert_eq!(p1, p2);
    }

    #[test]
    fn identical_inputs_give_byte_identical_output() {
        let config = EnhanceConfiguration {
            noise_reduction_enabled: true,
            white_balance_mode: WhiteBalanceMode::Continuous,
            exposure_mode: ExposureMode::Continuous,
            ..EnhanceConfiguration::night_boost()
        };

        let source = {
            let mut frame = Frame::filled(16, 16, [30, 45, 60, 255]);
            frame.data[0] = 220; // break uniformity
            frame
        };

        let mut a = source.clone();
        let mut b = source.clone();
        enhance_in_place(&mut a, &config).unwrap();
        enhance_in_place(&mut b, &config).unwrap();
        assert_eq!(a.data, b.data);
    }

    #[test]
    fn reapplying_the_transform_is_not_idempotent() {
        let mut once = Frame::filled(4, 4, [50, 50, 50, 255]);
        enhance_in_place(&mut once, &manual_low_light()).unwrap();

        let mut twice = once.clone();
        enhance_in_place(&mut twice, &manual_low_light()).unwrap();

        // A second pass keeps brightening: 110 → 219.
        assert_ne!(once.data, twice.data);
        assert!(twice.pixel(0, 0).unwrap()[0] > once.pixel(0, 0).unwrap()[0]);
    }
}
