//! Document synthesis: transformed sources + runtime bootstrap → one
//! standalone HTML document.

use std::collections::BTreeMap;
use std::fmt;

use rand::distributions::Alphanumeric;
use rand::Rng;
use session_logging::session_debug;
use thiserror::Error;

use crate::document::{escape_program_text, render_document};
use crate::transform::transform_source;

/// File path → content, as handed over from the session.
pub type SourceFiles = BTreeMap<String, String>;

pub const DEFAULT_ENTRY_PATH: &str = "src/components/Calendar.tsx";
pub const DEFAULT_ENTRY_COMPONENT: &str = "Calendar";
pub const DEFAULT_MODAL_PATH: &str = "src/components/MeetingModal.tsx";

pub const REACT_SCRIPT: &str = "https://unpkg.com/react@18/umd/react.development.js";
pub const REACT_DOM_SCRIPT: &str = "https://unpkg.com/react-dom@18/umd/react-dom.development.js";
pub const BABEL_SCRIPT: &str = "https://unpkg.com/@babel/standalone/babel.min.js";
pub const TAILWIND_SCRIPT: &str = "https://cdn.tailwindcss.com";

const ICON_STANDINS: &[&str] = &[
    "ChevronLeft",
    "ChevronRight",
    "Plus",
    "X",
    "Trash2",
    "UserPlus",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthError {
    #[error("no entry file at {path}")]
    MissingEntryPoint { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizerConfig {
    pub entry_path: String,
    /// Binding the entry file declares; the App wrapper mounts it.
    pub entry_component: String,
    /// Optional components inlined ahead of the entry, in order.
    pub auxiliary_paths: Vec<String>,
    /// UI library, DOM renderer and in-page translator, in load order.
    pub runtime_scripts: Vec<String>,
    pub style_framework: String,
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            entry_path: DEFAULT_ENTRY_PATH.to_string(),
            entry_component: DEFAULT_ENTRY_COMPONENT.to_string(),
            auxiliary_paths: vec![DEFAULT_MODAL_PATH.to_string()],
            runtime_scripts: vec![
                REACT_SCRIPT.to_string(),
                REACT_DOM_SCRIPT.to_string(),
                BABEL_SCRIPT.to_string(),
            ],
            style_framework: TAILWIND_SCRIPT.to_string(),
        }
    }
}

/// Name of the variable holding the program text inside the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramId(String);

impl ProgramId {
    /// Millisecond timestamp plus a random lowercase suffix.
    pub fn fresh() -> Self {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(9)
            .map(|byte| char::from(byte).to_ascii_lowercase())
            .collect();
        Self(format!(
            "program_{}_{}",
            chrono::Utc::now().timestamp_millis(),
            suffix
        ))
    }

    /// Fixed identifier; `name` must be a valid script identifier.
    pub fn from_name(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DocumentSynthesizer {
    config: SynthesizerConfig,
}

impl DocumentSynthesizer {
    pub fn new(config: SynthesizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SynthesizerConfig {
        &self.config
    }

    pub fn synthesize(&self, files: &SourceFiles) -> Result<String, SynthError> {
        self.synthesize_with_id(files, &ProgramId::fresh())
    }

    /// Same as [`synthesize`](Self::synthesize) with a caller-chosen identifier.
    /// Output is fully determined by `files` and `id`.
    pub fn synthesize_with_id(
        &self,
        files: &SourceFiles,
        id: &ProgramId,
    ) -> Result<String, SynthError> {
        let entry = files
            .get(&self.config.entry_path)
            .ok_or_else(|| SynthError::MissingEntryPoint {
                path: self.config.entry_path.clone(),
            })?;

        let auxiliary: Vec<String> = self
            .config
            .auxiliary_paths
            .iter()
            .map(|path| match files.get(path) {
                Some(source) => transform_source(source),
                None => {
                    session_debug!("Auxiliary component {path} absent; substituting empty source");
                    String::new()
                }
            })
            .collect();

        let program = self.assemble_program(&auxiliary, &transform_source(entry));
        let document = render_document(
            &self.config,
            id,
            &escape_program_text(&program),
        );
        session_debug!(
            "Synthesized document {id}: program {} bytes, document {} bytes",
            program.len(),
            document.len()
        );
        Ok(document)
    }

    fn assemble_program(&self, auxiliary: &[String], entry: &str) -> String {
        let mut program = String::new();
        program.push_str(&runtime_preamble());
        for source in auxiliary {
            program.push('\n');
            program.push_str(source);
            program.push('\n');
        }
        program.push('\n');
        program.push_str(entry);
        program.push('\n');
        program.push_str(&app_wrapper(&self.config.entry_component));
        program
    }
}

fn runtime_preamble() -> String {
    let mut preamble = String::from(
        "const { useState, useEffect, useRef, useMemo, useCallback } = React;\n\
         const { createRoot } = ReactDOM;\n\n",
    );
    for icon in ICON_STANDINS {
        preamble.push_str(&format!(
            "const {icon} = (props) => React.createElement('span', {{ className: props.className, 'data-icon': '{icon}' }});\n"
        ));
    }
    preamble.push_str("\nconst Meeting = {};\n");
    preamble
}

fn app_wrapper(component: &str) -> String {
    format!(
        "\nconst App = () => {{\n  return (\n    <div className=\"min-h-screen bg-gray-100 p-4\">\n      <{component} />\n    </div>\n  );\n}};\n\n\
         createRoot(document.getElementById('root')).render(<App />);\n"
    )
}
