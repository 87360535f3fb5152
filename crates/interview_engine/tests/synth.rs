use interview_engine::{
    DocumentSynthesizer, ProgramId, SourceFiles, SynthError, SynthesizerConfig, BABEL_SCRIPT,
    DEFAULT_ENTRY_PATH, DEFAULT_MODAL_PATH, REACT_DOM_SCRIPT, REACT_SCRIPT, TAILWIND_SCRIPT,
};
use pretty_assertions::assert_eq;

const CALENDAR: &str = "'use client';\n\
import React, { useState } from 'react';\n\
import MeetingModal from './MeetingModal';\n\
\n\
const Calendar: React.FC = () => {\n\
  const [open, setOpen] = useState<boolean>(false);\n\
  return <div className=\"grid grid-cols-7\">{`${open}`}</div>;\n\
};\n\
\n\
export default Calendar;";

const MODAL: &str = "import React from 'react';\n\
const MeetingModal: React.FC<Props> = () => null;\n\
export default MeetingModal;";

fn files(with_modal: bool) -> SourceFiles {
    let mut files = SourceFiles::new();
    files.insert(DEFAULT_ENTRY_PATH.to_string(), CALENDAR.to_string());
    files.insert("src/app/page.tsx".to_string(), "ignored".to_string());
    if with_modal {
        files.insert(DEFAULT_MODAL_PATH.to_string(), MODAL.to_string());
    }
    files
}

#[test]
fn document_has_runtime_tags_styles_mount_point_and_guarded_script() {
    let document = DocumentSynthesizer::default()
        .synthesize(&files(true))
        .expect("entry present");

    assert!(document.starts_with("<!DOCTYPE html>"));
    for src in [REACT_SCRIPT, REACT_DOM_SCRIPT, BABEL_SCRIPT, TAILWIND_SCRIPT] {
        assert!(document.contains(&format!("<script src=\"{src}\"")), "{src}");
    }
    assert_eq!(document.matches("<script src=").count(), 4);
    assert!(document.contains(".grid-cols-7 { grid-template-columns: repeat(7, minmax(0, 1fr)); }"));
    assert!(document.contains("<div id=\"root\"></div>"));
    assert!(document.contains("Babel.transform("));
    assert!(document.contains("catch (error)"));
    assert!(document.contains("createRoot(document.getElementById('root')).render(<App />);"));
}

#[test]
fn program_contains_preamble_auxiliary_then_entry() {
    let id = ProgramId::from_name("program_test");
    let document = DocumentSynthesizer::default()
        .synthesize_with_id(&files(true), &id)
        .unwrap();

    let preamble = document.find("const { createRoot } = ReactDOM;").unwrap();
    let icons = document.find("const Trash2 = (props)").unwrap();
    let modal = document.find("const MeetingModal = () => null;").unwrap();
    let entry = document.find("const Calendar = () => {").unwrap();
    let app = document.find("const App = () => {").unwrap();
    assert!(preamble < icons && icons < modal && modal < entry && entry < app);

    assert!(document.contains("const Meeting = {};"));
    assert!(document.contains("useState(false)"));
    assert!(!document.contains("import React"));
    assert!(!document.contains("export default"));
}

#[test]
fn program_text_is_escaped_for_template_literal() {
    let document = DocumentSynthesizer::default()
        .synthesize_with_id(&files(false), &ProgramId::from_name("p"))
        .unwrap();
    assert!(document.contains("{\\`\\${open}\\`}"));
    assert!(document.contains("const p = `"));
}

#[test]
fn missing_modal_degrades_to_empty_source() {
    let document = DocumentSynthesizer::default()
        .synthesize(&files(false))
        .expect("modal is optional");
    assert!(!document.contains("MeetingModal = "));
    assert!(document.contains("const Calendar = () => {"));
}

#[test]
fn missing_entry_fails() {
    let mut files = files(true);
    files.remove(DEFAULT_ENTRY_PATH);
    assert_eq!(
        DocumentSynthesizer::default().synthesize(&files),
        Err(SynthError::MissingEntryPoint {
            path: DEFAULT_ENTRY_PATH.to_string()
        })
    );
}

#[test]
fn synthesis_is_identical_apart_from_identifier() {
    let synthesizer = DocumentSynthesizer::default();
    let files = files(true);
    let first = ProgramId::fresh();
    let second = ProgramId::fresh();

    let a = synthesizer.synthesize_with_id(&files, &first).unwrap();
    let b = synthesizer.synthesize_with_id(&files, &second).unwrap();
    assert_ne!(a, b);
    assert_eq!(a.replace(first.as_str(), "ID"), b.replace(second.as_str(), "ID"));

    let c = synthesizer.synthesize_with_id(&files, &first).unwrap();
    assert_eq!(a, c);
}

#[test]
fn custom_entry_component_is_mounted() {
    let config = SynthesizerConfig {
        entry_path: "main.tsx".to_string(),
        entry_component: "Main".to_string(),
        auxiliary_paths: Vec::new(),
        ..SynthesizerConfig::default()
    };
    let mut files = SourceFiles::new();
    files.insert("main.tsx".to_string(), "const Main = () => null;".to_string());

    let document = DocumentSynthesizer::new(config).synthesize(&files).unwrap();
    assert!(document.contains("<Main />"));
    assert!(document.contains("filename: 'main.tsx'"));
}
