/// Frame-wide averages computed by the statistics pass, on the 0–255 scale.
///
/// Computed fresh for every frame that needs them; never cached across
/// frames, since the scene changes every frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStatistics {
    /// Mean over all pixels of (R + G + B) / 3.
    pub avg_luminance: f32,
    pub avg_r: f32,
    pub avg_g: f32,
    pub avg_b: f32,
}

/// Which statistics the current configuration needs from a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsRequest {
    /// Frame luminance mean, needed for continuous auto-exposure.
    pub luminance: bool,
    /// Per-channel means, needed for auto white balance.
    pub channel_averages: bool,
}

impl StatsRequest {
    /// True if a scan is needed at all; when false the whole statistics
    /// traversal is skipped.
    pub fn any(self) -> bool {
        self.luminance || self.channel_averages
    }
}

/// Counters for debugging enhancement sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionDiagnostics {
    pub ticks: u64,
    pub frames_enhanced: u64,
    /// Raw frames handed through unmodified (error fallback path).
    pub frames_passed_through: u64,
    /// Ticks spent waiting for the source to become ready.
    pub source_not_ready_ticks: u64,
    pub fallback_count: u64,
    /// Duration of the most recent tick. At 30 fps the whole tick has to fit
    /// in 33 ms.
    pub last_tick_micros: u64,
}
