// Spoken-answer scoring: speech-to-text, transcript metrics, and waveform
// prosody (pace, pauses, energy steadiness).

pub mod analyzer;
pub mod handlers;
pub mod prosody;
