//! Minimal RIFF/WAVE codec. Decodes PCM16 and IEEE float32 uploads into a
//! mono [`AudioClip`], and encodes mono PCM16 for the speech gateway. These
//! are the only container shapes browsers and the gateway exchange here;
//! anything else is rejected before analysis starts.

use thiserror::Error;

use crate::media::AudioClip;

#[derive(Debug, Error)]
pub enum WavError {
    #[error("not a RIFF/WAVE file")]
    NotRiff,

    #[error("missing '{0}' chunk")]
    MissingChunk(&'static str),

    #[error("unsupported audio format tag {0}")]
    UnsupportedFormat(u16),

    #[error("unsupported bit depth {bits} for format tag {format}")]
    UnsupportedBitDepth { format: u16, bits: u16 },

    #[error("channel count is zero")]
    NoChannels,

    #[error("sample rate is zero")]
    ZeroSampleRate,

    #[error("file is truncated")]
    Truncated,
}

const FORMAT_PCM: u16 = 1;
const FORMAT_IEEE_FLOAT: u16 = 3;

struct FmtChunk {
    format: u16,
    channels: u16,
    sample_rate_hz: u32,
    bits_per_sample: u16,
}

/// Decodes a WAV byte buffer into a mono clip, averaging channels.
pub fn decode(bytes: &[u8]) -> Result<AudioClip, WavError> {
    if bytes.len() < 12 || &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
        return Err(WavError::NotRiff);
    }

    let mut fmt: Option<FmtChunk> = None;
    let mut data: Option<&[u8]> = None;

    let mut pos = 12;
    while pos + 8 <= bytes.len() {
        let id = &bytes[pos..pos + 4];
        let size = u32::from_le_bytes([bytes[pos + 4], bytes[pos + 5], bytes[pos + 6], bytes[pos + 7]])
            as usize;
        let start = pos + 8;
        let end = start.checked_add(size).ok_or(WavError::Truncated)?;
        if end > bytes.len() {
            return Err(WavError::Truncated);
        }
        match id {
            b"fmt " => fmt = Some(parse_fmt(&bytes[start..end])?),
            b"data" => data = Some(&bytes[start..end]),
            _ => {} // LIST, fact, cue and friends are irrelevant here
        }
        // chunks are word-aligned
        pos = end + (size & 1);
    }

    let fmt = fmt.ok_or(WavError::MissingChunk("fmt "))?;
    let data = data.ok_or(WavError::MissingChunk("data"))?;

    if fmt.channels == 0 {
        return Err(WavError::NoChannels);
    }
    if fmt.sample_rate_hz == 0 {
        return Err(WavError::ZeroSampleRate);
    }

    let channels = fmt.channels as usize;
    let samples = match (fmt.format, fmt.bits_per_sample) {
        (FORMAT_PCM, 16) => pcm16_to_mono(data, channels),
        (FORMAT_IEEE_FLOAT, 32) => float32_to_mono(data, channels),
        (FORMAT_PCM, bits) | (FORMAT_IEEE_FLOAT, bits) => {
            return Err(WavError::UnsupportedBitDepth {
                format: fmt.format,
                bits,
            })
        }
        (format, _) => return Err(WavError::UnsupportedFormat(format)),
    };

    Ok(AudioClip {
        sample_rate_hz: fmt.sample_rate_hz,
        samples,
    })
}

/// Encodes a mono clip as 16-bit PCM with the standard 44-byte header.
pub fn encode_pcm16(clip: &AudioClip) -> Vec<u8> {
    let data_len = clip.samples.len() * 2;
    let mut out = Vec::with_capacity(44 + data_len);

    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&((36 + data_len) as u32).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&FORMAT_PCM.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&clip.sample_rate_hz.to_le_bytes());
    out.extend_from_slice(&(clip.sample_rate_hz * 2).to_le_bytes()); // byte rate
    out.extend_from_slice(&2u16.to_le_bytes()); // block align
    out.extend_from_slice(&16u16.to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&(data_len as u32).to_le_bytes());
    for &sample in &clip.samples {
        let v = (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16;
        out.extend_from_slice(&v.to_le_bytes());
    }

    out
}

fn parse_fmt(chunk: &[u8]) -> Result<FmtChunk, WavError> {
    if chunk.len() < 16 {
        return Err(WavError::Truncated);
    }
    Ok(FmtChunk {
        format: u16::from_le_bytes([chunk[0], chunk[1]]),
        channels: u16::from_le_bytes([chunk[2], chunk[3]]),
        sample_rate_hz: u32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]),
        bits_per_sample: u16::from_le_bytes([chunk[14], chunk[15]]),
    })
}

fn pcm16_to_mono(data: &[u8], channels: usize) -> Vec<f32> {
    data.chunks_exact(2 * channels)
        .map(|frame| {
            let sum: f32 = frame
                .chunks_exact(2)
                .map(|b| i16::from_le_bytes([b[0], b[1]]) as f32 / 32768.0)
                .sum();
            sum / channels as f32
        })
        .collect()
}

fn float32_to_mono(data: &[u8], channels: usize) -> Vec<f32> {
    data.chunks_exact(4 * channels)
        .map(|frame| {
            let sum: f32 = frame
                .chunks_exact(4)
                .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
                .sum();
            sum / channels as f32
        })
        .collect()
}
