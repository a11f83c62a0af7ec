//! Headerless cf32 sample sink.
//!
//! Samples are written as consecutive little-endian `f32` pairs, real first,
//! with no header or length prefix. This is the complex-float layout most SDR
//! tools read as raw IQ.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};
use rustfft::num_complex::Complex32;
use tempfile::NamedTempFile;

use crate::error::IqResult;

/// Bytes per complex sample.
pub const BYTES_PER_SAMPLE: usize = 8;

/// Writes interleaved little-endian sample pairs to a writer.
pub fn write_cf32<W: Write>(writer: &mut W, samples: &[Complex32]) -> io::Result<()> {
    for sample in samples {
        writer.write_f32::<LittleEndian>(sample.re)?;
        writer.write_f32::<LittleEndian>(sample.im)?;
    }
    Ok(())
}

/// Serializes samples to a byte vector.
pub fn samples_to_cf32_bytes(samples: &[Complex32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * BYTES_PER_SAMPLE);
    for sample in samples {
        bytes.extend_from_slice(&sample.re.to_le_bytes());
        bytes.extend_from_slice(&sample.im.to_le_bytes());
    }
    bytes
}

/// Writes samples to `path`, returning the number of bytes written.
///
/// The stream goes to a temporary file next to `path` and is renamed over it
/// once complete, so `path` either holds the whole stream or is left as it was.
pub fn write_cf32_file(path: &Path, samples: &[Complex32]) -> IqResult<u64> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write_cf32(&mut writer, samples)?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(fs::metadata(path)?.len())
}

/// BLAKE3 hash of the cf32 serialization of `samples`, as hex.
///
/// Matches hashing the file written by [`write_cf32_file`] without holding the
/// serialized payload in memory.
pub fn compute_iq_hash(samples: &[Complex32]) -> String {
    let mut hasher = blake3::Hasher::new();
    for sample in samples {
        hasher.update(&sample.re.to_le_bytes());
        hasher.update(&sample.im.to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}
