use interview_core::{update, AppState, Msg, SessionSettings, ENTRY_PATH, MODAL_PATH};

fn quiet_state() -> AppState {
    AppState::with_project(
        interview_core::sample_project(),
        SessionSettings {
            auto_start: false,
            proactive_feedback: false,
            ..SessionSettings::default()
        },
    )
}

#[test]
fn selecting_a_file_copies_it_for_the_editor() {
    let (mut state, effects) = update(
        quiet_state(),
        Msg::FileSelected {
            path: MODAL_PATH.to_string(),
        },
    );
    assert!(effects.is_empty());
    assert!(state.consume_dirty());

    let view = state.view();
    let selected = view.selected.expect("selected file");
    assert_eq!(selected.name, "MeetingModal.tsx");
    assert_eq!(selected.language, "typescript");
    assert!(selected.content.contains("MeetingModal"));
    assert_eq!(view.files.iter().filter(|row| row.is_selected).count(), 1);
}

#[test]
fn selecting_a_directory_or_unknown_path_is_ignored() {
    for path in ["src/components", "nowhere.tsx"] {
        let (mut state, _) = update(
            quiet_state(),
            Msg::FileSelected {
                path: path.to_string(),
            },
        );
        assert!(!state.consume_dirty());
        assert!(state.selected().is_none());
    }
}

#[test]
fn editing_selected_file_writes_back_into_tree() {
    let (state, _) = update(
        quiet_state(),
        Msg::FileSelected {
            path: ENTRY_PATH.to_string(),
        },
    );
    let (state, _) = update(
        state,
        Msg::FileEdited {
            path: ENTRY_PATH.to_string(),
            content: "const Calendar = () => null;".to_string(),
        },
    );

    assert_eq!(
        state.selected().map(|file| file.content.as_str()),
        Some("const Calendar = () => null;")
    );
    assert_eq!(
        state.tree().find(ENTRY_PATH).and_then(|node| node.content()),
        Some("const Calendar = () => null;")
    );
}

#[test]
fn editing_another_file_leaves_selection_alone() {
    let (state, _) = update(
        quiet_state(),
        Msg::FileSelected {
            path: ENTRY_PATH.to_string(),
        },
    );
    let original = state.selected().unwrap().content.clone();
    let (state, _) = update(
        state,
        Msg::FileEdited {
            path: MODAL_PATH.to_string(),
            content: "const MeetingModal = () => null;".to_string(),
        },
    );
    assert_eq!(state.selected().unwrap().content, original);
}

#[test]
fn editing_unknown_path_is_ignored() {
    let state = quiet_state();
    let (mut next, effects) = update(
        state.clone(),
        Msg::FileEdited {
            path: "src/missing.tsx".to_string(),
            content: "x".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(next.tree(), state.tree());
}
