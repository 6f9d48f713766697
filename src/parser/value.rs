use super::*;
use crate::ast::Value;
use crate::literal::{parse_bool, parse_number, remove_escapes};
use crate::resolver::parse_link;

/// Types one value token and appends the result to `values`.
///
/// Candidates are tried as link, boolean, number and finally string. A link may
/// append any number of values; every other candidate appends exactly one.
pub(super) fn parse_value(parser: &Parser, doc: &Document, token: &Token, values: &mut Vec<Value>) {
    let text = token.text;

    if let Some(link) = parse_link(text) {
        if let Some(target) = parser.resolve_link(&link, doc) {
            log::trace!(
                "link {}#{} at {}:{} expands to {} value(s)",
                link.section, link.option, token.line, token.column, target.len()
            );
            values.extend_from_slice(target.values());
            return;
        }
        log::debug!(
            "unresolved link {}#{} at {}:{}, keeping it as text",
            link.section, link.option, token.line, token.column
        );
    }

    if let Some(b) = parse_bool(text) {
        values.push(Value::Boolean(b));
        return;
    }

    if let Some(n) = parse_number(text) {
        values.push(n);
        return;
    }

    values.push(Value::String(remove_escapes(text)));
}
