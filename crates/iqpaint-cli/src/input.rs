//! Parameter resolution from flags and JSON params files.
//!
//! Values come from an optional `--params` file first and are then
//! overridden by any flag given on the command line.

use iqpaint_spec::{Orientation, PaintParams, ParamsFile, SpecError};
use std::path::{Path, PathBuf};

use crate::cli_args::PaintArgs;

/// Errors that can occur while resolving parameters.
#[derive(Debug)]
pub enum InputError {
    /// Params file could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Params file is not valid JSON for [`ParamsFile`].
    JsonParse { path: PathBuf, message: String },

    /// No text from flags or params file.
    MissingText,

    /// No sample rate from flags or params file.
    MissingSampleRate,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read params file '{}': {}", path.display(), source)
            }
            InputError::JsonParse { path, message } => {
                write!(f, "invalid params file '{}': {}", path.display(), message)
            }
            InputError::MissingText => write!(f, "no text given (pass TEXT or set \"text\")"),
            InputError::MissingSampleRate => write!(
                f,
                "no sample rate given (pass --sample-rate or set \"sample_rate\")"
            ),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl InputError {
    /// Stable error code for JSON output.
    pub fn code(&self) -> &'static str {
        use crate::commands::json_output::error_codes;
        match self {
            InputError::FileRead { .. } => error_codes::FILE_READ,
            InputError::JsonParse { .. } => error_codes::JSON_PARSE,
            InputError::MissingText => error_codes::MISSING_TEXT,
            InputError::MissingSampleRate => error_codes::MISSING_SAMPLE_RATE,
        }
    }

    /// Field the error refers to, if any.
    pub fn path(&self) -> Option<&'static str> {
        match self {
            InputError::MissingText => Some("text"),
            InputError::MissingSampleRate => Some("sample_rate"),
            _ => None,
        }
    }
}

/// Params resolved from all sources.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParams {
    /// Final params.
    pub params: PaintParams,
    /// BLAKE3 hash of the params file content, if one was loaded.
    pub source_hash: Option<String>,
}

/// Loads a params file.
pub fn load_params_file(path: &Path) -> Result<(ParamsFile, String), InputError> {
    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    let file = ParamsFile::from_json(&content).map_err(|e| match e {
        SpecError::JsonParse(e) => InputError::JsonParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
    })?;

    Ok((file, source_hash))
}

/// Merges the params file (if any) with the flags. Flags win.
pub fn merge_args(args: &PaintArgs) -> Result<(ParamsFile, Option<String>), InputError> {
    let (file, source_hash) = match &args.params {
        Some(path) => {
            let (file, hash) = load_params_file(Path::new(path))?;
            (file, Some(hash))
        }
        None => (ParamsFile::default(), None),
    };

    let merged = ParamsFile {
        text: args.text.clone().or(file.text),
        sample_rate: args.sample_rate.or(file.sample_rate),
        print_speed: args.print_speed.or(file.print_speed),
        gain_db: args.gain.or(file.gain_db),
        orientation: if args.vertical {
            Some(Orientation::Vertical)
        } else {
            file.orientation
        },
        output: args.filename.clone().or(file.output),
        seed: args.seed.or(file.seed),
    };

    Ok((merged, source_hash))
}

/// Resolves complete params. Text and sample rate are required.
pub fn resolve_params(args: &PaintArgs) -> Result<ResolvedParams, InputError> {
    let (merged, source_hash) = merge_args(args)?;

    if merged.text.is_none() {
        return Err(InputError::MissingText);
    }
    let params: PaintParams = merged
        .into_params()
        .ok_or(InputError::MissingSampleRate)?;

    Ok(ResolvedParams {
        params,
        source_hash,
    })
}

/// Resolves only what the raster needs: text and orientation.
pub fn resolve_text(args: &PaintArgs) -> Result<(String, Orientation), InputError> {
    let (merged, _) = merge_args(args)?;
    let text = merged.text.ok_or(InputError::MissingText)?;
    Ok((text, merged.orientation.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_params(dir: &tempfile::TempDir, json: &str) -> String {
        let path = dir.path().join("paint.json");
        std::fs::write(&path, json).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_flags_only() {
        let args = PaintArgs {
            text: Some("HI".to_string()),
            sample_rate: Some(48_000),
            ..PaintArgs::default()
        };
        let resolved = resolve_params(&args).unwrap();
        assert_eq!(resolved.params, PaintParams::new("HI", 48_000));
        assert_eq!(resolved.source_hash, None);
    }

    #[test]
    fn test_flags_override_file() {
        let tmp = tempfile::tempdir().unwrap();
        let params = write_params(
            &tmp,
            r#"{"text": "FILE", "sampleRate": 8000, "gain_db": -6, "orientation": "vertical", "seed": 1}"#,
        );
        let args = PaintArgs {
            text: Some("FLAG".to_string()),
            gain: Some(3.0),
            params: Some(params),
            ..PaintArgs::default()
        };

        let resolved = resolve_params(&args).unwrap();
        assert_eq!(
            resolved.params,
            PaintParams::new("FLAG", 8_000)
                .with_gain_db(3.0)
                .with_orientation(Orientation::Vertical)
                .with_seed(1)
        );
        assert_eq!(resolved.source_hash.map(|h| h.len()), Some(64));
    }

    #[test]
    fn test_missing_required_values() {
        let err = resolve_params(&PaintArgs {
            sample_rate: Some(48_000),
            ..PaintArgs::default()
        })
        .unwrap_err();
        assert!(matches!(err, InputError::MissingText));

        let err = resolve_params(&PaintArgs {
            text: Some("A".to_string()),
            ..PaintArgs::default()
        })
        .unwrap_err();
        assert!(matches!(err, InputError::MissingSampleRate));
        assert_eq!(err.path(), Some("sample_rate"));
    }

    #[test]
    fn test_unknown_field_in_file() {
        let tmp = tempfile::tempdir().unwrap();
        let params = write_params(&tmp, r#"{"text": "A", "volume": 3}"#);
        let err = resolve_params(&PaintArgs {
            params: Some(params),
            ..PaintArgs::default()
        })
        .unwrap_err();
        assert!(matches!(err, InputError::JsonParse { .. }));
        assert!(err.to_string().contains("volume"));
    }

    #[test]
    fn test_missing_file() {
        let err = resolve_text(&PaintArgs {
            params: Some("/nonexistent/paint.json".to_string()),
            ..PaintArgs::default()
        })
        .unwrap_err();
        assert!(matches!(err, InputError::FileRead { .. }));
    }

    #[test]
    fn test_resolve_text_needs_no_sample_rate() {
        let (text, orientation) = resolve_text(&PaintArgs {
            text: Some("WF".to_string()),
            vertical: true,
            ..PaintArgs::default()
        })
        .unwrap();
        assert_eq!(text, "WF");
        assert_eq!(orientation, Orientation::Vertical);
    }
}
