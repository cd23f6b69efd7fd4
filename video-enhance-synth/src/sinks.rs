use video_enhance_core::{EnhanceError, Frame, FrameSink};

/// Sink that retains every published frame, oldest first.
///
/// Intended for tests and offline inspection; a long soak run should prefer
/// [`NullSink`] to keep memory flat.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub frames: Vec<Frame>,
}

impl FrameSink for CollectingSink {
    fn publish(&mut self, frame: Frame) -> Result<(), EnhanceError> {
        self.frames.push(frame);
        Ok(())
    }
}

/// Sink that counts published frames and drops the buffers.
#[derive(Debug, Default)]
pub struct NullSink {
    pub published: u64,
}

impl FrameSink for NullSink {
    fn publish(&mut self, _frame: Frame) -> Result<(), EnhanceError> {
        self.published += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_sink_keeps_order() {
        let mut sink = CollectingSink::default();
        sink.publish(Frame::filled(1, 1, [1, 0, 0, 255])).unwrap();
        sink.publish(Frame::filled(1, 1, [2, 0, 0, 255])).unwrap();

        assert_eq!(sink.frames.len(), 2);
        assert_eq!(sink.frames[0].pixel(0, 0).unwrap()[0], 1);
        assert_eq!(sink.frames[1].pixel(0, 0).unwrap()[0], 2);
    }

    #[test]
    fn null_sink_counts_and_drops() {
        let mut sink = NullSink::default();
        sink.publish(Frame::filled(1, 1, [0, 0, 0, 255])).unwrap();
        sink.publish(Frame::filled(1, 1, [0, 0, 0, 255])).unwrap();
        assert_eq!(sink.published, 2);
    }
}
