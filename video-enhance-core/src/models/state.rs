use super::error::EnhanceError;

/// Enhancement loop state machine.
///
/// State transitions:
/// ```text
/// idle → running ↔ paused
///   ↑       ↓
///   └── error fallback (sticky passthrough until reset/stop)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum EnhancerState {
    /// Not processing; the host routes the raw stream.
    Idle,
    /// One frame pulled, enhanced, and published per tick.
    Running { frames_enhanced: u64 },
    Paused { frames_enhanced: u64 },
    /// A stage failed. The loop has stopped itself; the host should display
    /// and record the unprocessed source until `reset()` or `stop()`.
    ErrorFallback(EnhanceError),
}

impl EnhancerState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused { .. })
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::ErrorFallback(_))
    }

    /// Frames enhanced so far, if in a state that tracks it.
    pub fn frames_enhanced(&self) -> Option<u64> {
        match self {
            Self::Running { frames_enhanced } | Self::Paused { frames_enhanced } => {
                Some(*frames_enhanced)
            }
            _ => None,
        }
    }
}
