//! Saving and loading models as JSON text.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use qubo_bqm::BinaryQuadraticModel;
use serde_json::Value;

use crate::serializable::{bqm_from_serializable, bqm_to_serializable, SerializableBqm};
use crate::QuboError;

/// Output formatting knobs for [`save_qubo_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveOptions {
    /// Indent the JSON document instead of writing it on one line.
    pub pretty: bool,
}

/// Encodes `bqm` and writes the whole JSON document to `writer`.
pub fn save_qubo<W: Write>(bqm: &BinaryQuadraticModel, writer: W) -> Result<(), QuboError> {
    save_qubo_with(bqm, writer, SaveOptions::default())
}

pub fn save_qubo_with<W: Write>(
    bqm: &BinaryQuadraticModel,
    mut writer: W,
    options: SaveOptions,
) -> Result<(), QuboError> {
    let text = qubo_to_string(bqm, options)?;
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Creates or truncates `path` and saves `bqm` into it.
///
/// The document is rendered first; `path` is not touched if encoding fails.
pub fn save_qubo_to_path(
    bqm: &BinaryQuadraticModel,
    path: impl AsRef<Path>,
    options: SaveOptions,
) -> Result<(), QuboError> {
    let text = qubo_to_string(bqm, options)?;
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Renders the JSON document without writing it anywhere.
///
/// Fails with [`QuboError::NonFiniteCoefficient`] if any coefficient is NaN or
/// infinite, so a failed save never writes a byte.
pub fn qubo_to_string(
    bqm: &BinaryQuadraticModel,
    options: SaveOptions,
) -> Result<String, QuboError> {
    let record = bqm_to_serializable(bqm);
    record.ensure_finite()?;
    let text = if options.pretty {
        serde_json::to_string_pretty(&record)
    } else {
        serde_json::to_string(&record)
    };
    text.map_err(QuboError::Encode)
}

/// Reads `reader` to the end and decodes the model it holds.
///
/// Bytes that are not UTF-8 JSON are a [`QuboError::Parse`]; only failures of
/// the reader itself are [`QuboError::Io`].
pub fn load_qubo<R: Read>(mut reader: R) -> Result<BinaryQuadraticModel, QuboError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let value: Value = serde_json::from_slice(&bytes).map_err(QuboError::Parse)?;
    decode_value(value)
}

pub fn load_qubo_from_path(path: impl AsRef<Path>) -> Result<BinaryQuadraticModel, QuboError> {
    let file = File::open(path)?;
    load_qubo(BufReader::new(file))
}

/// Parses and decodes a JSON document.
pub fn qubo_from_str(text: &str) -> Result<BinaryQuadraticModel, QuboError> {
    let value: Value = serde_json::from_str(text).map_err(QuboError::Parse)?;
    decode_value(value)
}

fn decode_value(value: Value) -> Result<BinaryQuadraticModel, QuboError> {
    let record = SerializableBqm::from_value(value)?;
    bqm_from_serializable(&record)
}
