//! Particle sources
//!
//! The scoring core never talks to a camera. Whatever grabs frames,
//! thresholds them and measures particles sits behind [`ParticleSource`],
//! and the core only ever sees the [`Frame`] it returns.
//!
//! ## Pull Model
//!
//! Sources are polled once per control tick and must not block. A source
//! with no new frame yet returns `nb::Error::WouldBlock`; the control loop
//! moves on and polls again next tick.
//!
//! ```rust
//! use totescan_core::{Frame, MemorySource, ParticleSource, SourceError};
//!
//! let frames = [Frame::new(320, vec![]), Frame::new(320, vec![])];
//! let mut source = MemorySource::new(&frames);
//!
//! while let Ok(frame) = source.poll_frame() {
//!     // Score frame.particles
//! }
//! assert!(matches!(source.poll_frame(), Err(nb::Error::Other(SourceError::EndOfStream))));
//! ```

use alloc::vec::Vec;
use core::fmt;

use crate::particle::ParticleMeasurement;

/// Particles measured in one camera frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Horizontal resolution of the image the particles were measured in
    pub image_width_px: u32,
    /// Particles in detection order
    pub particles: Vec<ParticleMeasurement>,
}

impl Frame {
    /// Create a frame
    pub fn new(image_width_px: u32, particles: Vec<ParticleMeasurement>) -> Self {
        Self { image_width_px, particles }
    }
}

/// Errors from a particle source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceError<E> {
    /// Camera or vision backend failure
    Transport(E),
    /// No more frames will ever arrive
    EndOfStream,
}

impl<E: fmt::Display> fmt::Display for SourceError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Transport error: {}", e),
            Self::EndOfStream => write!(f, "End of stream"),
        }
    }
}

/// Anything that supplies measured frames
pub trait ParticleSource {
    /// Backend-specific error
    type Error;

    /// Next measured frame, or `WouldBlock` if none is ready yet.
    fn poll_frame(&mut self) -> nb::Result<Frame, Self::Error>;
}

/// Replays recorded frames, for tests and offline tuning
pub struct MemorySource<'a> {
    frames: &'a [Frame],
    position: usize,
}

impl<'a> MemorySource<'a> {
    /// Replay the given frames in order
    pub fn new(frames: &'a [Frame]) -> Self {
        Self { frames, position: 0 }
    }

    /// Start over from the first frame
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Index of the next frame to be returned
    pub fn position(&self) -> usize {
        self.position
    }

    /// Every frame has been returned
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.frames.len()
    }
}

impl<'a> ParticleSource for MemorySource<'a> {
    type Error = SourceError<()>;

    fn poll_frame(&mut self) -> nb::Result<Frame, Self::Error> {
        let frame = self
            .frames
            .get(self.position)
            .ok_or(nb::Error::Other(SourceError::EndOfStream))?;
        self.position += 1;
        Ok(frame.clone())
    }
}
