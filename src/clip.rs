//! Clip types and the fixed clip catalog.
//!
//! A [`Clip`] is a named output artifact assembled from one or more
//! synthesizer segments. The catalog in [`standard_clips`] defines the four
//! UI sounds the binary ships; the parameters are fixed for compatibility
//! with the assets consumers already reference.

use crate::synth::waveform;

/// Waveform shapes the synthesizer supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    /// Uniform white noise. Ignores the segment frequency.
    Noise,
}

/// One synthesizer invocation within a clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Waveform shape to generate.
    pub waveform: Waveform,
    /// Tone frequency in Hz. Unused for noise segments.
    pub frequency: f32,
    /// Segment duration in seconds.
    pub duration: f32,
    /// Peak amplitude in [0.0, 1.0].
    pub volume: f32,
}

impl Segment {
    /// Creates a sine segment.
    pub fn sine(frequency: f32, duration: f32, volume: f32) -> Self {
        Segment {
            waveform: Waveform::Sine,
            frequency,
            duration,
            volume,
        }
    }

    /// Creates a square segment.
    pub fn square(frequency: f32, duration: f32, volume: f32) -> Self {
        Segment {
            waveform: Waveform::Square,
            frequency,
            duration,
            volume,
        }
    }

    /// Creates a noise segment.
    pub fn noise(duration: f32, volume: f32) -> Self {
        Segment {
            waveform: Waveform::Noise,
            frequency: 0.0,
            duration,
            volume,
        }
    }

    /// Synthesizes this segment into a sample buffer.
    pub fn render(&self) -> Vec<f32> {
        match self.waveform {
            Waveform::Sine => waveform::sine(self.frequency, self.duration, self.volume),
            Waveform::Square => waveform::square(self.frequency, self.duration, self.volume),
            Waveform::Noise => waveform::noise(self.duration, self.volume),
        }
    }
}

/// A named output clip assembled from consecutive segments.
#[derive(Debug, Clone)]
pub struct Clip {
    /// Base name of the clip; the output file is `<name>.wav`.
    pub name: &'static str,
    /// Segments played back to back, in order.
    pub segments: Vec<Segment>,
}

impl Clip {
    /// Creates a clip from its name and segments.
    pub fn new(name: &'static str, segments: Vec<Segment>) -> Self {
        Clip { name, segments }
    }

    /// Returns the output filename for this clip.
    pub fn filename(&self) -> String {
        format!("{}.wav", self.name)
    }

    /// Renders the clip by concatenating its segments' buffers in order.
    ///
    /// There is no cross-fade between segments; each segment's own envelope
    /// already brings its boundaries to zero.
    pub fn render(&self) -> Vec<f32> {
        let mut samples = Vec::new();
        for segment in &self.segments {
            samples.extend(segment.render());
        }
        samples
    }
}

/// Returns the fixed clip catalog, in generation order.
pub fn standard_clips() -> Vec<Clip> {
    vec![
        // Click: short, high pitch, fast decay
        Clip::new("click", vec![Segment::sine(1200.0, 0.05, 0.3)]),
        // Correct: "ding" rising from C5 to E5
        Clip::new(
            "correct",
            vec![
                Segment::sine(523.25, 0.1, 0.5),
                Segment::sine(659.25, 0.3, 0.5),
            ],
        ),
        // Incorrect: low A2 square-wave buzz
        Clip::new("incorrect", vec![Segment::square(110.0, 0.4, 0.4)]),
        // Success: fanfare arpeggio C4-E4-G4-C5, last note held
        Clip::new(
            "success",
            vec![
                Segment::sine(261.63, 0.1, 0.5),
                Segment::sine(329.63, 0.1, 0.5),
                Segment::sine(392.00, 0.1, 0.5),
                Segment::sine(523.25, 0.4, 0.5),
            ],
        ),
    ]
}
