/*!
 * Host string registry seam.
 *
 * During registration the bridge hands every translatable string to a
 * `StringRegistry`. A host wires in its own implementation. Two are
 * provided: `RecordingRegistry` collects entries in memory and
 * `JsonLinesRegistry` writes each entry as one JSON line (the CLI output).
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

use crate::bridge::key::StringKey;
use crate::bridge::package::PackageDescriptor;
use crate::errors::BridgeError;

/// Kind of text a registered string holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StringType {
    /// Single line of text
    #[default]
    Line,
    /// Multi-line plain text
    Area,
    /// Rich (HTML) text
    Visual,
}

impl fmt::Display for StringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringType::Line => write!(f, "LINE"),
            StringType::Area => write!(f, "AREA"),
            StringType::Visual => write!(f, "VISUAL"),
        }
    }
}

impl std::str::FromStr for StringType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LINE" => Ok(StringType::Line),
            "AREA" => Ok(StringType::Area),
            "VISUAL" => Ok(StringType::Visual),
            _ => Err(anyhow::anyhow!("Invalid string type: {}", s)),
        }
    }
}

/// One string submitted to the host registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationEntry {
    /// Source text to translate
    pub value: String,

    /// Registration name, e.g. `example-element-1`
    pub name: String,

    /// Structured identity behind `name`
    #[serde(skip)]
    pub key: Option<StringKey>,

    /// Package the string belongs to, forwarded as received
    pub package: PackageDescriptor,

    /// Human readable label shown by the host
    pub title: String,

    /// Kind of text
    #[serde(rename = "type")]
    pub string_type: StringType,
}

/// Receives strings extracted from a layout
pub trait StringRegistry {
    /// Submit one string for translation
    fn register(&mut self, entry: RegistrationEntry) -> Result<(), BridgeError>;
}

impl<R: StringRegistry + ?Sized> StringRegistry for &mut R {
    fn register(&mut self, entry: RegistrationEntry) -> Result<(), BridgeError> {
        (**self).register(entry)
    }
}

/// Registry that keeps every submitted entry in order
#[derive(Debug, Clone, Default)]
pub struct RecordingRegistry {
    entries: Vec<RegistrationEntry>,
}

impl RecordingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[RegistrationEntry] {
        &self.entries
    }

    /// Registration names in submission order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StringRegistry for RecordingRegistry {
    fn register(&mut self, entry: RegistrationEntry) -> Result<(), BridgeError> {
        self.entries.push(entry);
        Ok(())
    }
}

/// Registry that writes every entry as one JSON object per line
pub struct JsonLinesRegistry<W> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonLinesRegistry<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of entries written so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> StringRegistry for JsonLinesRegistry<W> {
    fn register(&mut self, entry: RegistrationEntry) -> Result<(), BridgeError> {
        let line = serde_json::to_string(&entry)
            .map_err(|e| BridgeError::Registry(format!("Failed to encode {}: {}", entry.name, e)))?;
        writeln!(self.writer, "{}", line)
            .map_err(|e| BridgeError::Registry(format!("Failed to write {}: {}", entry.name, e)))?;
        self.written += 1;
        Ok(())
    }
}
