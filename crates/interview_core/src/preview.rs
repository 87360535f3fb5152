/// Result of one compile-and-execute pass, as reported back by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileOutcome {
    Ready { document: String },
    MissingEntryPoint { path: String },
    Failed { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewStatus {
    #[default]
    Stopped,
    /// Running, but no entry file to build from.
    Unavailable,
    Compiling,
    Ready,
    Failed,
}

/// What to do with a finished pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Superseded by a newer pass or by a stop; drop it.
    Stale,
    Present(String),
    Unavailable,
    Failed,
}

/// Preview lifecycle plus the debounce/generation bookkeeping.
///
/// Tickets identify debounce timers: only the most recent ticket may trigger a
/// pass. Generations identify passes: a result is applied only if its
/// generation is newer than everything applied or invalidated so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewState {
    running: bool,
    last_error: Option<String>,
    entry_missing: bool,
    document: String,
    next_ticket: u64,
    pending_ticket: Option<u64>,
    issued_generation: u64,
    settled_generation: u64,
    auto_start_armed: bool,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl PreviewState {
    pub fn new(auto_start: bool) -> Self {
        Self {
            running: false,
            last_error: None,
            entry_missing: false,
            document: String::new(),
            next_ticket: 0,
            pending_ticket: None,
            issued_generation: 0,
            settled_generation: 0,
            auto_start_armed: auto_start,
        }
    }

    pub fn running(&self) -> bool {
        self.running
    }

    /// True while the newest issued pass has not reported back.
    pub fn compiling(&self) -> bool {
        self.running && self.issued_generation > self.settled_generation
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn pending_ticket(&self) -> Option<u64> {
        self.pending_ticket
    }

    pub fn status(&self) -> PreviewStatus {
        if !self.running {
            PreviewStatus::Stopped
        } else if self.compiling() {
            PreviewStatus::Compiling
        } else if self.entry_missing {
            PreviewStatus::Unavailable
        } else if self.last_error.is_some() {
            PreviewStatus::Failed
        } else {
            PreviewStatus::Ready
        }
    }

    /// Stopped → Running. Returns the generation of the immediate pass.
    pub fn start(&mut self) -> Option<u64> {
        if self.running {
            return None;
        }
        self.running = true;
        Some(self.issue())
    }

    /// Starts once, the first time an entry file is present, unless the user
    /// has stopped the preview in the meantime.
    pub fn auto_start(&mut self, entry_present: bool) -> Option<u64> {
        if !self.auto_start_armed || self.running || !entry_present {
            return None;
        }
        self.auto_start_armed = false;
        self.start()
    }

    /// Running → Stopped. Drops any pending timer and invalidates passes in flight.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.auto_start_armed = false;
        self.pending_ticket = None;
        self.settled_generation = self.issued_generation;
        self.document.clear();
        self.last_error = None;
        self.entry_missing = false;
        true
    }

    /// A file changed. Returns the ticket for a (re)armed debounce timer.
    pub fn note_change(&mut self) -> Option<u64> {
        if !self.running {
            return None;
        }
        self.next_ticket += 1;
        self.pending_ticket = Some(self.next_ticket);
        Some(self.next_ticket)
    }

    /// A debounce timer fired. Only the latest ticket starts a pass.
    pub fn debounce_elapsed(&mut self, ticket: u64) -> Option<u64> {
        if !self.running || self.pending_ticket != Some(ticket) {
            return None;
        }
        self.pending_ticket = None;
        Some(self.issue())
    }

    /// Forces a pass now, superseding any pending timer.
    pub fn refresh(&mut self) -> Option<u64> {
        if !self.running {
            return None;
        }
        self.pending_ticket = None;
        Some(self.issue())
    }

    pub fn finish(&mut self, generation: u64, outcome: CompileOutcome) -> Disposition {
        if !self.running || generation <= self.settled_generation {
            return Disposition::Stale;
        }
        self.settled_generation = generation;
        match outcome {
            CompileOutcome::Ready { document } => {
                self.document.clone_from(&document);
                self.last_error = None;
                self.entry_missing = false;
                Disposition::Present(document)
            }
            CompileOutcome::MissingEntryPoint { path } => {
                self.entry_missing = true;
                self.last_error = Some(format!("Preview not available: no file at {path}"));
                Disposition::Unavailable
            }
            CompileOutcome::Failed { message } => {
                self.entry_missing = false;
                self.last_error = Some(message);
                Disposition::Failed
            }
        }
    }

    /// The surface could not show the document of `generation`. Ignored
    /// unless that generation is the one most recently presented.
    pub fn surface_failed(&mut self, generation: u64, message: String) -> bool {
        if !self.running || generation != self.settled_generation {
            return false;
        }
        self.last_error = Some(message);
        true
    }

    pub fn dismiss_error(&mut self) -> bool {
        self.last_error.take().is_some()
    }

    fn issue(&mut self) -> u64 {
        self.issued_generation += 1;
        self.issued_generation
    }
}

#[cfg(test)]
mod tests {
    use super::{CompileOutcome, Disposition, PreviewState, PreviewStatus};

    fn ready(doc: &str) -> CompileOutcome {
        CompileOutcome::Ready {
            document: doc.to_string(),
        }
    }

    #[test]
    fn late_result_from_older_pass_is_discarded() {
        let mut preview = PreviewState::new(false);
        let first = preview.start().unwrap();
        let second = preview.refresh().unwrap();

        assert_eq!(
            preview.finish(second, ready("new")),
            Disposition::Present("new".to_string())
        );
        assert_eq!(preview.finish(first, ready("old")), Disposition::Stale);
        assert_eq!(preview.document(), "new");
        assert_eq!(preview.status(), PreviewStatus::Ready);
    }

    #[test]
    fn older_pass_finishing_first_is_shown_until_newer_arrives() {
        let mut preview = PreviewState::new(false);
        let first = preview.start().unwrap();
        let second = preview.refresh().unwrap();

        assert!(matches!(preview.finish(first, ready("a")), Disposition::Present(_)));
        assert!(preview.compiling());
        assert!(matches!(preview.finish(second, ready("b")), Disposition::Present(_)));
        assert!(!preview.compiling());
        assert_eq!(preview.document(), "b");
    }

    #[test]
    fn result_after_stop_is_discarded() {
        let mut preview = PreviewState::new(false);
        let generation = preview.start().unwrap();
        assert!(preview.stop());
        assert_eq!(preview.finish(generation, ready("doc")), Disposition::Stale);
        assert_eq!(preview.document(), "");

        let restarted = preview.start().unwrap();
        assert!(restarted > generation);
        assert_eq!(preview.finish(generation, ready("doc")), Disposition::Stale);
    }

    #[test]
    fn failure_keeps_running_and_success_clears_error() {
        let mut preview = PreviewState::new(false);
        let first = preview.start().unwrap();
        let outcome = CompileOutcome::Failed {
            message: "boom".to_string(),
        };
        assert_eq!(preview.finish(first, outcome), Disposition::Failed);
        assert!(preview.running());
        assert_eq!(preview.last_error(), Some("boom"));
        assert_eq!(preview.status(), PreviewStatus::Failed);

        let second = preview.refresh().unwrap();
        preview.finish(second, ready("ok"));
        assert_eq!(preview.last_error(), None);
    }

    #[test]
    fn only_latest_ticket_fires() {
        let mut preview = PreviewState::new(false);
        preview.start();
        let stale = preview.note_change().unwrap();
        let latest = preview.note_change().unwrap();

        assert_eq!(preview.debounce_elapsed(stale), None);
        assert!(preview.debounce_elapsed(latest).is_some());
        assert_eq!(preview.debounce_elapsed(latest), None);
    }

    #[test]
    fn auto_start_fires_once_and_not_after_stop() {
        let mut preview = PreviewState::new(true);
        assert_eq!(preview.auto_start(false), None);
        assert!(preview.auto_start(true).is_some());
        preview.stop();
        assert_eq!(preview.auto_start(true), None);
        assert!(!preview.running());
    }

    #[test]
    fn surface_failure_applies_only_to_presented_generation() {
        let mut preview = PreviewState::new(false);
        let first = preview.start().unwrap();
        preview.finish(first, ready("doc"));

        assert!(!preview.surface_failed(first + 1, "late".to_string()));
        assert!(preview.surface_failed(first, "disk full".to_string()));
        assert_eq!(preview.status(), PreviewStatus::Failed);
        assert_eq!(preview.last_error(), Some("disk full"));
    }
}
