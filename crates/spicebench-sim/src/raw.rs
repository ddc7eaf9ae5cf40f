use std::path::Path;

use anyhow::Result;

/// Decodes a simulator output artifact into plots.
///
/// The binary waveform format is the reader's business; implementations
/// live outside this crate and are injected wherever results need to be
/// loaded. The runner only walks the returned structure.
pub trait RawReader {
    fn open(&self, path: &Path) -> Result<Vec<RawPlot>>;
}

/// One plot from a waveform file: an independent-variable scale vector
/// plus the dependent data vectors recorded against it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPlot {
    name: String,
    scale: RawVector,
    vectors: Vec<RawVector>,
}

impl RawPlot {
    pub fn new(name: impl Into<String>, scale: RawVector, vectors: Vec<RawVector>) -> Self {
        Self {
            name: name.into(),
            scale,
            vectors,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The independent-variable vector (time or frequency samples).
    pub fn scale(&self) -> &RawVector {
        &self.scale
    }

    /// The dependent-variable vectors.
    pub fn vectors(&self) -> &[RawVector] {
        &self.vectors
    }
}

/// A named sample sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct RawVector {
    name: String,
    data: Vec<f64>,
}

impl RawVector {
    pub fn new(name: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }
}
