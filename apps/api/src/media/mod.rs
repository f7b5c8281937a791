//! Decoded media primitives shared between the HTTP layer, the collaborator
//! clients, and the voice/video analyzers.

use bytes::Bytes;

pub mod mjpeg;
pub mod wav;

/// A mono audio clip. Samples are normalized to [-1.0, 1.0].
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub sample_rate_hz: u32,
    pub samples: Vec<f32>,
}

impl AudioClip {
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate_hz == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate_hz as f64
    }
}

/// One still frame pulled from an uploaded recording. The payload stays
/// JPEG-encoded; only the landmark service decodes pixels.
#[derive(Debug, Clone)]
pub struct VideoFrame {
    pub index: usize,
    pub data: Bytes,
}

/// Sequential access to the frames of a recording.
pub trait FrameSource: Send {
    /// Next frame, or `None` when the recording is exhausted.
    fn next_frame(&mut self) -> Option<VideoFrame>;

    /// Total frames in the recording, independent of how many have been read.
    fn total_frames(&self) -> usize;
}
