//! iqpaint IQ Backend
//!
//! This crate turns text into a raw complex-baseband IQ stream that shows the
//! text when viewed on a spectrum-analyzer waterfall.
//!
//! # Overview
//!
//! Each character is looked up in a fixed bitmap font and laid out into a
//! raster buffer whose rows are frequency-domain magnitude spectra. Every row
//! is then synthesized into time-domain symbols by an inverse FFT:
//!
//! - **Rasterize** - glyph masks concatenated horizontally or vertically
//! - **Synthesize** - per-row circular shift, random phase and inverse FFT,
//!   repeated to hold each row on screen for the requested print speed
//! - **Post-process** - linear gain and background noise
//! - **Sink** - headerless little-endian cf32 output
//!
//! # Determinism
//!
//! Randomness is drawn from a caller-supplied RNG. Given a seed, output is
//! byte-identical across runs (on the same platform); without one the PCG32
//! generator is seeded from OS entropy.
//!
//! # Example
//!
//! ```no_run
//! use iqpaint_backend_iq::generate;
//! use iqpaint_spec::PaintParams;
//!
//! let params = PaintParams::new("HELLO", 48_000).with_seed(7);
//! let result = generate(&params)?;
//! result.write_to(std::path::Path::new("hello.cfile"))?;
//! println!("IQ hash: {}", result.iq_hash());
//! # Ok::<(), iqpaint_backend_iq::IqError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point for IQ generation
//! - [`config`] - Raster layout and symbol timing
//! - [`font`] - 8x16 bitmap font and glyph masks
//! - [`raster`] - Raster buffer builder
//! - [`synth`] - Inverse-FFT line synthesizer
//! - [`post`] - Gain and background noise
//! - [`cf32`] - Sample sink
//! - [`rng`] - RNG construction

pub mod cf32;
pub mod config;
pub mod error;
pub mod font;
pub mod generate;
pub mod noise;
pub mod post;
pub mod raster;
pub mod rng;
pub mod synth;

// Re-export main types at crate root
pub use config::{RasterLayout, RenderConfig, Timing};
pub use error::{IqError, IqResult};
pub use generate::{generate, generate_with_rng, render, GenerateResult};
pub use raster::RasterBuffer;

pub use rustfft::num_complex::Complex32;
