//! Single-pass frame statistics for auto-exposure and auto white balance.

use crate::models::error::EnhanceError;
use crate::models::frame::{Frame, BYTES_PER_PIXEL};
use crate::models::video_models::{FrameStatistics, StatsRequest};

/// Scan `frame` once and fill in the statistics named by `request`.
///
/// Fields not requested stay zero. Callers should skip the call entirely
/// when `request.any()` is false — the scan is a full O(width × height)
/// traversal and is pure overhead when no auto mode is active.
pub fn analyze(frame: &Frame, request: StatsRequest) -> Result<FrameStatistics, EnhanceError> {
    if !frame.is_consistent() {
        return Err(EnhanceError::FrameProcessing(format!(
            "pixel buffer is {} bytes, expected {} for {}x{}",
            frame.data.len(),
            frame.expected_len(),
            frame.width,
            frame.height
        )));
    }

    let pixel_count = frame.pixel_count();
    if pixel_count == 0 || !request.any() {
        return Ok(FrameStatistics::default());
    }

    // Channel sums fit u64 comfortably even at 3840x2160 (255 * ~8.3M pixels).
    let mut sum_r: u64 = 0;
    let mut sum_g: u64 = 0;
    let mut sum_b: u64 = 0;
    for px in frame.data.chunks_exact(BYTES_PER_PIXEL) {
        sum_r += px[0] as u64;
        sum_g += px[1] as u64;
        sum_b += px[2] as u64;
    }

    let n = pixel_count as f64;
    let mut stats = FrameStatistics::default();
    if request.luminance {
        stats.avg_luminance = ((sum_r + sum_g + sum_b) as f64 / (3.0 * n)) as f32;
    }
    if request.channel_averages {
        stats.avg_r = (sum_r as f64 / n) as f32;
        stats.avg_g = (sum_g as f64 / n) as f32;
        stats.avg_b = (sum_b as f64 / n) as f32;
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ALL: StatsRequest = StatsRequest {
        luminance: true,
        channel_averages: true,
    };

    #[test]
    fn uniform_frame_averages() {
        let frame = Frame::filled(4, 4, [50, 100, 150, 255]);
        let stats = analyze(&frame, ALL).unwrap();

        assert_relative_eq!(stats.avg_r, 50.0);
        assert_relative_eq!(stats.avg_g, 100.0);
        assert_relative_eq!(stats.avg_b, 150.0);
        assert_relative_eq!(stats.avg_luminance, 100.0);
    }

    #[test]
    fn mixed_frame_averages() {
        let mut frame = Frame::filled(2, 1, [0, 0, 0, 255]);
        frame.data[0..3].copy_from_slice(&[100, 110, 120]);
        frame.data[4..7].copy_from_slice(&[50, 60, 70]);

        let stats = analyze(&frame, ALL).unwrap();
        assert_relative_eq!(stats.avg_r, 75.0);
        assert_relative_eq!(stats.avg_g, 85.0);
        assert_relative_eq!(stats.avg_b, 95.0);
        assert_relative_eq!(stats.avg_luminance, 85.0);
    }

    #[test]
    fn unrequested_fields_stay_zero() {
        let frame = Frame::filled(2, 2, [80, 80, 80, 255]);

        let lum_only = analyze(
            &frame,
            StatsRequest {
                luminance: true,
                channel_averages: false,
            },
        )
        .unwrap();
        assert_relative_eq!(lum_only.avg_luminance, 80.0);
        assert_eq!(lum_only.avg_g, 0.0);

        let none = analyze(&frame, StatsRequest::default()).unwrap();
        assert_eq!(none, FrameStatistics::default());
    }

    #[test]
    fn alpha_does_not_contribute() {
        let opaque = analyze(&Frame::filled(2, 2, [10, 20, 30, 255]), ALL).unwrap();
        let transparent = analyze(&Frame::filled(2, 2, [10, 20, 30, 0]), ALL).unwrap();
        assert_eq!(opaque, transparent);
    }

    #[test]
    fn inconsistent_buffer_is_an_error() {
        let mut frame = Frame::filled(2, 2, [0, 0, 0, 255]);
        frame.data.pop();
        assert!(matches!(
            analyze(&frame, ALL),
            Err(EnhanceError::FrameProcessing(_))
        ));
    }
}
