//! The standalone HTML wrapper around an assembled program.

use crate::synth::{ProgramId, SynthesizerConfig};

/// Literal layout rules for the calendar grid, independent of the CDN styles.
const GRID_STYLES: &str = "\
    body { margin: 0; font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; }
    .grid { display: grid; }
    .grid-cols-7 { grid-template-columns: repeat(7, minmax(0, 1fr)); }
    .gap-0 { gap: 0; }
    .h-24 { height: 6rem; }
    .preview-error { margin: 1rem; padding: 1rem; border: 1px solid #fca5a5; border-radius: 0.375rem; background: #fef2f2; color: #991b1b; }
    .preview-error pre { white-space: pre-wrap; margin: 0.5rem 0 0; font-size: 0.8125rem; }
";

/// Escapes program text for a backtick-delimited literal inside an inline
/// script: backslashes, backticks and `${` are escaped, and `</script` is
/// broken up so the literal cannot close the surrounding element.
pub fn escape_program_text(program: &str) -> String {
    let mut escaped = String::with_capacity(program.len() + program.len() / 16);
    let mut chars = program.char_indices();
    while let Some((index, ch)) = chars.next() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '`' => escaped.push_str("\\`"),
            '$' if program[index..].starts_with("${") => escaped.push_str("\\$"),
            '<' if starts_with_ignore_case(&program[index..], "</script") => {
                escaped.push_str("<\\/");
                chars.next();
            }
            other => escaped.push(other),
        }
    }
    escaped
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Wraps escaped program text in a complete document. The inline script
/// translates the program in the page and evaluates it; any failure is written
/// into the mount point instead of escaping the page.
pub(crate) fn render_document(
    config: &SynthesizerConfig,
    id: &ProgramId,
    escaped_program: &str,
) -> String {
    let mut html = String::with_capacity(escaped_program.len() + 4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\" />\n");
    html.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n",
    );
    html.push_str("  <title>Calendar Preview</title>\n");
    for src in &config.runtime_scripts {
        html.push_str(&format!("  <script src=\"{src}\" crossorigin></script>\n"));
    }
    html.push_str(&format!(
        "  <script src=\"{}\"></script>\n",
        config.style_framework
    ));
    html.push_str("  <style>\n");
    html.push_str(GRID_STYLES);
    html.push_str("  </style>\n</head>\n<body>\n  <div id=\"root\"></div>\n");
    html.push_str("  <script>\n");
    html.push_str(&format!("    const {id} = `{escaped_program}`;\n"));
    html.push_str(&bootstrap_script(id, &entry_filename(&config.entry_path)));
    html.push_str("  </script>\n</body>\n</html>\n");
    html
}

fn entry_filename(entry_path: &str) -> String {
    entry_path
        .rsplit('/')
        .next()
        .unwrap_or(entry_path)
        .to_string()
}

fn bootstrap_script(id: &ProgramId, filename: &str) -> String {
    format!(
        r#"    (function () {{
      var mount = document.getElementById('root');
      function showFailure(message) {{
        mount.innerHTML = '<div class="preview-error"><strong>Preview failed</strong><pre></pre></div>';
        mount.querySelector('pre').textContent = String(message);
      }}
      window.addEventListener('error', function (event) {{
        showFailure(event.message);
      }});
      try {{
        var translated = Babel.transform({id}, {{
          presets: ['react', 'typescript'],
          filename: '{filename}'
        }}).code;
        (0, eval)(translated);
      }} catch (error) {{
        showFailure(error && error.message ? error.message : error);
      }}
    }})();
"#
    )
}
