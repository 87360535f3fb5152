//! Proactive-feedback policy: decides when an edit is worth an unprompted
//! review from the interviewer.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

/// Absolute size change (bytes) that always counts as interesting.
pub const LENGTH_DELTA_THRESHOLD: usize = 120;

/// Event handlers the candidate is asked to implement.
pub const CHALLENGE_HANDLERS: &[&str] = &[
    "handleCreateMeeting",
    "handleEditMeeting",
    "handleSaveMeeting",
    "handleDeleteMeeting",
    "handleAttendeeChange",
    "addAttendee",
    "removeAttendee",
    "handleSubmit",
];

static HANDLER_DEF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:const|let|function)\s+([A-Za-z_$][\w$]*)\b")
        .expect("valid handler definition regex")
});

/// Pure predicate over two revisions of one file.
///
/// An edit is interesting when a challenge handler's definition changed, the
/// number of `TODO` markers changed, or the size moved by at least
/// [`LENGTH_DELTA_THRESHOLD`] bytes.
pub fn is_interesting_change(old: &str, new: &str) -> bool {
    if old == new {
        return false;
    }
    if old.matches("TODO").count() != new.matches("TODO").count() {
        return true;
    }
    if old.len().abs_diff(new.len()) >= LENGTH_DELTA_THRESHOLD {
        return true;
    }
    handler_sections(old) != handler_sections(new)
}

/// Challenge handler name → source text from its definition up to the next
/// top-level-looking definition.
fn handler_sections(text: &str) -> BTreeMap<&str, &str> {
    let defs: Vec<(usize, &str)> = HANDLER_DEF_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?.as_str();
            Some((whole.start(), name))
        })
        .collect();

    let mut sections = BTreeMap::new();
    for (index, (start, name)) in defs.iter().enumerate() {
        if !CHALLENGE_HANDLERS.contains(name) {
            continue;
        }
        let end = defs
            .get(index + 1)
            .map(|(next, _)| *next)
            .unwrap_or(text.len());
        sections.insert(*name, text[*start..end].trim_end());
    }
    sections
}

/// Remembers the last content reviewed per file path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedbackTracker {
    last_analyzed: HashMap<String, String>,
}

impl FeedbackTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares `current` with the last reviewed revision (or `previous` when
    /// the file has never been reviewed). Records `current` and returns true
    /// when the change is interesting.
    pub fn observe(&mut self, path: &str, previous: &str, current: &str) -> bool {
        let baseline = self
            .last_analyzed
            .get(path)
            .map(String::as_str)
            .unwrap_or(previous);
        if !is_interesting_change(baseline, current) {
            return false;
        }
        self.last_analyzed
            .insert(path.to_string(), current.to_string());
        true
    }

    pub fn last_analyzed(&self, path: &str) -> Option<&str> {
        self.last_analyzed.get(path).map(String::as_str)
    }
}

/// Prompt sent to the interviewer when an edit triggers proactive feedback.
pub fn review_prompt(path: &str, language: &str, content: &str) -> String {
    format!(
        "I just updated {path}. Here is the current code:\n\n```{language}\n{content}\n```\n\n\
         Please give brief feedback on my progress and point out anything I missed."
    )
}
