//! Canned bloodwork panel for a patient identifier.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use serde_json::Value;

use crate::envelope;
use crate::error::SkillError;

/// Cholesterol breakdown in mg/dL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cholesterol {
    /// Total cholesterol.
    pub total: u32,
    /// Low-density lipoprotein.
    pub ldl: u32,
    /// High-density lipoprotein.
    pub hdl: u32,
}

/// A bloodwork panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bloodwork {
    /// Hemoglobin in g/dL.
    pub hemoglobin: f64,
    /// White cell count in 10^9/L.
    pub white_cell_count: f64,
    /// Platelets in 10^9/L.
    pub platelets: u32,
    /// Fasting glucose in mg/dL.
    pub glucose: u32,
    /// Cholesterol panel.
    pub cholesterol: Cholesterol,
}

impl Bloodwork {
    /// The fixed panel returned for every patient.
    #[must_use]
    pub fn canned() -> Self {
        Self {
            hemoglobin: 13.5,
            white_cell_count: 6.2,
            platelets: 250,
            glucose: 98,
            cholesterol: Cholesterol { total: 180, ldl: 100, hdl: 55 },
        }
    }
}

/// Bloodwork skill output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BloodworkReport {
    /// The requested patient identifier, echoed verbatim.
    pub patient_id: Value,
    /// The patient's panel.
    pub bloodwork: Bloodwork,
}

impl BloodworkReport {
    /// Renders the report on one line with `", "` and `": "` separators
    /// and non-ASCII characters escaped as `\uXXXX`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_spaced_json(&self) -> Result<String, serde_json::Error> {
        let mut out = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut out, SpacedFormatter);
        self.serialize(&mut serializer)?;
        // serde_json only emits valid UTF-8.
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

/// Compact JSON with a space after each `,` and `:`, ASCII-only output.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// Builds the bloodwork report for a raw skill argument.
///
/// # Errors
///
/// Returns [`SkillError::InvalidJson`] for malformed JSON and
/// [`SkillError::MissingField`] when `inputArgs.patient_id` is absent or
/// falsy.
pub fn report(raw: &str) -> Result<BloodworkReport, SkillError> {
    let input = envelope::parse(raw)?;
    let patient_id = envelope::input_arg(&input, "patient_id")
        .filter(|value| envelope::is_present(value))
        .cloned()
        .ok_or(SkillError::MissingField("patient_id"))?;
    Ok(BloodworkReport { patient_id, bloodwork: Bloodwork::canned() })
}
