use interview_engine::transform_source;
use pretty_assertions::assert_eq;

#[test]
fn plain_statement_passes_through_unchanged() {
    assert_eq!(transform_source("const X = 1;"), "const X = 1;");
}

#[test]
fn pragma_imports_and_default_export_are_removed() {
    let source = "'use client';\n\
                  import React, { useState } from 'react';\n\
                  import { Plus } from 'lucide-react';\n\
                  export default function Calendar() { return null; }";
    let output = transform_source(source);

    assert!(!output.contains("use client"));
    assert!(!output.contains("import"));
    assert!(!output.contains("export default"));
    assert!(output.contains("function Calendar() { return null; }"));
}

#[test]
fn trailing_default_export_line_is_dropped() {
    let source = "const Calendar = () => null;\n\nexport default Calendar;";
    assert_eq!(transform_source(source), "const Calendar = () => null;\n\n");
}

#[test]
fn named_exports_lose_the_keyword_only() {
    let source = "export interface Meeting {\n  id: string;\n}\nexport const LIMIT = 3;\n";
    assert_eq!(
        transform_source(source),
        "interface Meeting {\n  id: string;\n}\nconst LIMIT = 3;\n"
    );
}

#[test]
fn state_generics_and_component_types_are_stripped() {
    let source = "\
const Calendar: React.FC = () => {
  const [meetings, setMeetings] = useState<Meeting[]>([]);
  const [selected, setSelected] = useState<Meeting | undefined>();
  const ref = useRef<HTMLDivElement>(null);
};
const MeetingModal: React.FC<MeetingModalProps> = ({ isOpen }) => null;
const Bare: FC = () => null;
";
    let expected = "\
const Calendar = () => {
  const [meetings, setMeetings] = useState([]);
  const [selected, setSelected] = useState();
  const ref = useRef(null);
};
const MeetingModal = ({ isOpen }) => null;
const Bare = () => null;
";
    assert_eq!(transform_source(source), expected);
}

#[test]
fn unrecognised_type_syntax_passes_through() {
    let source = "const handler = (event: React.ChangeEvent<HTMLInputElement>) => {};";
    assert_eq!(transform_source(source), source);
}

#[test]
fn sample_calendar_keeps_component_body() {
    let calendar = interview_sample_calendar();
    let output = transform_source(&calendar);
    assert!(output.trim_start().starts_with("const Calendar = () => {"));
    assert!(output.contains("const handleCreateMeeting = () => {"));
    assert!(!output.contains("export default"));
}

fn interview_sample_calendar() -> String {
    "'use client';\n\nimport React, { useState } from 'react';\nimport { Meeting } from '@/types/meeting';\n\n\
     const Calendar: React.FC = () => {\n  const handleCreateMeeting = () => {\n    // TODO\n  };\n  return null;\n};\n\n\
     export default Calendar;"
        .to_string()
}
