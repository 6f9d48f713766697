fn is_escape_run(c: char) -> bool {
    c == ' ' || c == '\\'
}

/// Un-escapes the leading and trailing runs of backslash-protected blanks.
///
/// Within a run a `\` is removed and the literal space that follows it is kept, so
/// `\ \ x` becomes `  x` and `\\srv` becomes `srv`. A `\` ending the text stands
/// for the space a `;` or line end would otherwise have cut off. Interior text is
/// kept verbatim.
pub fn remove_escapes(text: &str) -> String {
    if !text.contains('\\') {
        return text.to_string();
    }

    let lead_end = text.find(|c: char| !is_escape_run(c)).unwrap_or(text.len());
    if lead_end == text.len() {
        return unescape_run(text, true);
    }
    let trail_start = text.trim_end_matches(is_escape_run).len();

    let mut out = unescape_run(&text[..lead_end], false);
    out.push_str(&text[lead_end..trail_start]);
    out.push_str(&unescape_run(&text[trail_start..], true));
    out
}

fn unescape_run(run: &str, ends_text: bool) -> String {
    let mut out = String::with_capacity(run.len());
    let mut chars = run.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        if chars.next_if_eq(&' ').is_some() || (ends_text && chars.peek().is_none()) {
            out.push(' ');
        }
    }

    out
}
