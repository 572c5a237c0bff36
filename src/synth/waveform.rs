//! Waveform generators for the clip synthesizer.
//!
//! Each generator is a pure function from (frequency, duration, volume) to a
//! normalized sample buffer at the fixed 44.1 kHz rate, with an envelope
//! applied so buffers start and end at or near zero amplitude.

use std::f32::consts::PI;

use rand::Rng;

use crate::audio::SAMPLE_RATE;
use crate::synth::envelope::Envelope;

/// Attack ramp of the sine generator, in samples.
pub const SINE_ATTACK: usize = 500;
/// Decay ramp of the sine generator, in samples.
pub const SINE_DECAY: usize = 500;

/// Attack ramp of the square generator. Shorter than the sine's so the
/// wave keeps its characteristic hard edge.
pub const SQUARE_ATTACK: usize = 100;
/// Decay ramp of the square generator, in samples.
pub const SQUARE_DECAY: usize = 500;

/// Decay ramp of the noise generator. Noise has no periodic structure to
/// protect, so it gets no attack ramp at all.
pub const NOISE_DECAY: usize = 1000;

/// Number of samples in a buffer of the given duration.
///
/// Non-positive durations yield zero; this is fixed generation code, not a
/// validated API, so bad durations produce an empty buffer rather than an
/// error.
fn sample_count(duration: f32) -> usize {
    (duration * SAMPLE_RATE as f32).round() as usize
}

/// Generates an enveloped sine tone.
///
/// Sample `i` is `sin(2π·f·i/rate) · volume · gain(i)` with a 500-sample
/// attack and decay.
pub fn sine(frequency: f32, duration: f32, volume: f32) -> Vec<f32> {
    let num_samples = sample_count(duration);
    let env = Envelope::new(SINE_ATTACK, SINE_DECAY);

    (0..num_samples)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            (2.0 * PI * frequency * t).sin() * volume * env.gain(i, num_samples)
        })
        .collect()
}

/// Generates an enveloped square wave.
///
/// The wave is the sign of a sine at the same frequency: positive half-cycles
/// map to +1.0, non-positive to -1.0.
pub fn square(frequency: f32, duration: f32, volume: f32) -> Vec<f32> {
    let num_samples = sample_count(duration);
    let env = Envelope::new(SQUARE_ATTACK, SQUARE_DECAY);

    (0..num_samples)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            let phase = (2.0 * PI * frequency * t).sin();
            let value = if phase > 0.0 { 1.0 } else { -1.0 };
            value * volume * env.gain(i, num_samples)
        })
        .collect()
}

/// Generates enveloped uniform white noise using the thread-local RNG.
///
/// Successive runs produce different buffers; use [`noise_with`] with a
/// seeded RNG when reproducibility matters.
pub fn noise(duration: f32, volume: f32) -> Vec<f32> {
    noise_with(&mut rand::thread_rng(), duration, volume)
}

/// Generates enveloped uniform white noise from a caller-supplied RNG.
///
/// Sample `i` is `(u·2 - 1) · volume · gain(i)` for `u` uniform in [0, 1).
pub fn noise_with<R: Rng>(rng: &mut R, duration: f32, volume: f32) -> Vec<f32> {
    let num_samples = sample_count(duration);
    let env = Envelope::new(0, NOISE_DECAY);

    (0..num_samples)
        .map(|i| {
            let value = rng.gen::<f32>() * 2.0 - 1.0;
            value * volume * env.gain(i, num_samples)
        })
        .collect()
}
