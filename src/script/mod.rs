//! Step scripts
//!
//! A step script is the fixed, ordered narrative that drives the visualizer.
//! Each [`Step`] pairs a human-readable description with the operations that
//! mutate the simulated runtime. Scripts are immutable once built; the
//! controller only ever reads them by index.

mod builtin;
mod ops;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::VisualizerState;

pub use builtin::{builtin, builtin_names, BUILTIN_SCRIPTS};
pub use ops::StepOp;

/// Errors raised while building or loading a step script
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("script has no steps")]
    Empty,

    #[error("script name must not be empty")]
    MissingName,

    #[error("step {index} has an empty description")]
    EmptyDescription { index: usize },

    #[error("unknown built-in script: {0}")]
    UnknownBuiltin(String),

    #[error("failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse script {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// One step of the narrative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub description: String,
    #[serde(default)]
    pub ops: Vec<StepOp>,
}

impl Step {
    pub fn new(description: impl Into<String>, ops: Vec<StepOp>) -> Self {
        Self {
            description: description.into(),
            ops,
        }
    }

    /// Apply every operation of this step, in order
    pub fn apply(&self, state: &mut VisualizerState) {
        for op in &self.ops {
            op.apply(state);
        }
    }
}

/// An ordered, validated, read-only sequence of steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepScript {
    name: String,
    steps: Vec<Step>,
}

/// On-disk representation of a script file
#[derive(Debug, Deserialize)]
struct TomlScript {
    name: Option<String>,
    #[serde(default)]
    steps: Vec<Step>,
}

impl StepScript {
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Result<Self, ScriptError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ScriptError::MissingName);
        }
        if steps.is_empty() {
            return Err(ScriptError::Empty);
        }
        if let Some(index) = steps
            .iter()
            .position(|step| step.description.trim().is_empty())
        {
            return Err(ScriptError::EmptyDescription { index });
        }
        Ok(Self { name, steps })
    }

    /// Load a script from a TOML file.
    ///
    /// The file stem is used as the name when the document has no top-level `name`.
    pub fn from_file(path: &Path) -> Result<Self, ScriptError> {
        let contents = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: TomlScript = toml::from_str(&contents).map_err(|source| ScriptError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let name = raw.name.unwrap_or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "script".to_string())
        });
        let script = Self::new(name, raw.steps)?;
        tracing::debug!(
            path = %path.display(),
            name = %script.name,
            steps = script.len(),
            "Loaded step script from file"
        );
        Ok(script)
    }

    /// Resolve a script reference: a built-in name first, then a file path
    pub fn resolve(reference: &str) -> Result<Self, ScriptError> {
        if let Some(script) = builtin(reference) {
            return Ok(script);
        }
        let path = Path::new(reference);
        let looks_like_path = reference.contains(std::path::MAIN_SEPARATOR)
            || reference.contains('/')
            || path.extension().is_some_and(|ext| ext == "toml");
        if looks_like_path || path.exists() {
            return Self::from_file(path);
        }
        Err(ScriptError::UnknownBuiltin(reference.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a StepScript {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
