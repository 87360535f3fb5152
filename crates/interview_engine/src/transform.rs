//! Best-effort source rewriting for the in-page translator.
//!
//! The rules are textual rewrites tuned to the sample project's conventions,
//! not a parser. Anything they do not recognise passes through unchanged, so
//! the transform never fails; broken output only shows up when the document
//! runs.

use once_cell::sync::Lazy;
use regex::Regex;

static CLIENT_PRAGMA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*['"]use client['"];?[ \t]*(?:\r?\n|$)"#).expect("valid pragma regex")
});

static IMPORT_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*import\b[^\n]*(?:\n|$)").expect("valid import regex")
});

/// `export default Calendar;` carries nothing once the binding exists.
static EXPORT_DEFAULT_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*export\s+default\s+[A-Za-z_$][\w$]*\s*;?[ \t]*(?:\n|$)")
        .expect("valid default export regex")
});

static EXPORT_KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^([ \t]*)export\s+(?:default\s+)?").expect("valid export regex")
});

static HOOK_GENERIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(useState|useRef|useMemo|useCallback)<[^<>()]*(?:<[^<>()]*>[^<>()]*)?>\(")
        .expect("valid hook generic regex")
});

static COMPONENT_TYPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*:\s*(?:React\.)?FC(?:<[^<>]*>)?\s*=").expect("valid component type regex")
});

/// Rewrites one component source file into something the minimal runtime
/// can evaluate.
pub fn transform_source(source: &str) -> String {
    let text = CLIENT_PRAGMA_RE.replace(source, "");
    let text = IMPORT_LINE_RE.replace_all(&text, "");
    let text = EXPORT_DEFAULT_NAME_RE.replace_all(&text, "");
    let text = EXPORT_KEYWORD_RE.replace_all(&text, "$1");
    let text = HOOK_GENERIC_RE.replace_all(&text, "$1(");
    let text = COMPONENT_TYPE_RE.replace_all(&text, " =");
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::transform_source;

    #[test]
    fn pragma_only_removed_at_start() {
        assert_eq!(transform_source("'use client';\nconst a = 1;"), "const a = 1;");
        let later = "const a = 1;\n'use client';\n";
        assert_eq!(transform_source(later), later);
    }

    #[test]
    fn nested_generic_one_level_is_stripped() {
        assert_eq!(
            transform_source("const [m] = useState<Map<string, Meeting>>(new Map());"),
            "const [m] = useState(new Map());"
        );
    }
}
