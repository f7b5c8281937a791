//! Splits an MJPEG byte stream into individual JPEG frames by scanning for
//! start-of-image / end-of-image marker pairs. Camera MJPEG streams are flat
//! concatenations of baseline JPEGs, so marker scanning is sufficient; EXIF
//! thumbnails that embed a nested JPEG are not expected in this input.

use bytes::Bytes;

use crate::media::{FrameSource, VideoFrame};

const SOI: [u8; 2] = [0xFF, 0xD8];
const EOI: [u8; 2] = [0xFF, 0xD9];

pub struct MjpegFrameSource {
    data: Bytes,
    pos: usize,
    index: usize,
    total: usize,
}

impl MjpegFrameSource {
    pub fn new(data: Bytes) -> Self {
        let total = count_frames(&data);
        Self {
            data,
            pos: 0,
            index: 0,
            total,
        }
    }
}

impl FrameSource for MjpegFrameSource {
    fn next_frame(&mut self) -> Option<VideoFrame> {
        let soi = find_marker(&self.data, self.pos, SOI)?;
        // a SOI without a closing EOI is a truncated tail and is dropped
        let eoi = find_marker(&self.data, soi + 2, EOI)?;
        self.pos = eoi + 2;
        let index = self.index;
        self.index += 1;
        Some(VideoFrame {
            index,
            data: self.data.slice(soi..eoi + 2),
        })
    }

    fn total_frames(&self) -> usize {
        self.total
    }
}

fn count_frames(data: &[u8]) -> usize {
    let mut count = 0;
    let mut pos = 0;
    while let Some(soi) = find_marker(data, pos, SOI) {
        match find_marker(data, soi + 2, EOI) {
            Some(eoi) => {
                count += 1;
                pos = eoi + 2;
            }
            None => break,
        }
    }
    count
}

fn find_marker(data: &[u8], from: usize, marker: [u8; 2]) -> Option<usize> {
    if from >= data.len() {
        return None;
    }
    data[from..]
        .windows(2)
        .position(|w| w == marker)
        .map(|offset| from + offset)
}
