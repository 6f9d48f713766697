use super::*;
use crate::ast::Section;

pub(super) fn parse_document(parser: &mut Parser) -> Result<Document, ConfigError> {
    let mut doc = Document::default();

    if let Some(first) = parser.peek() {
        if first.kind != TokenKind::Section {
            return Err(ConfigError::ExpectedSectionFirst {
                line: first.line,
                column: first.column,
                hint: Some("Start the file with a [Section] header".into()),
                code: Some(201),
            });
        }
    }

    while let Some(tok) = parser.bump() {
        match tok.kind {
            TokenKind::Section => {
                doc.push_section(Section::new(tok.text.to_string()));
            }
            TokenKind::Identifier => {
                parse_option(parser, &mut doc, tok)?;
            }
            TokenKind::Value | TokenKind::VectorValue => {
                return Err(ConfigError::UnexpectedValue {
                    value: tok.text.to_string(),
                    line: tok.line,
                    column: tok.column,
                    hint: Some("A value must follow an option name and '='".into()),
                    code: Some(203),
                });
            }
        }
    }

    Ok(doc)
}

/// Reads the value tokens that belong to `ident` and appends the finished option.
///
/// The option is only registered once all of its values are typed, so its own
/// links can never see it.
fn parse_option(parser: &mut Parser, doc: &mut Document, ident: Token) -> Result<(), ConfigError> {
    let mut values = Vec::new();

    match parser.peek().map(|t| t.kind) {
        Some(TokenKind::Value) => {
            if let Some(tok) = parser.bump() {
                value::parse_value(parser, doc, &tok, &mut values);
            }
        }
        Some(TokenKind::VectorValue) => {
            while let Some(tok) = parser.bump_if(TokenKind::VectorValue) {
                value::parse_value(parser, doc, &tok, &mut values);
            }
        }
        _ => {
            return Err(ConfigError::ExpectingValueAfterIdentifier {
                identifier: ident.text.to_string(),
                line: ident.line,
                column: ident.column,
                hint: Some(format!("Write `{} = <value>`", ident.text)),
                code: Some(202),
            });
        }
    }

    let section = doc.last_section_mut().ok_or_else(|| ConfigError::UnexpectedToken {
        token: ident.text.to_string(),
        line: ident.line,
        column: ident.column,
        hint: Some("Option found outside of any section".into()),
        code: Some(204),
    })?;
    section.push(ConfigOption::new(ident.text.to_string(), values));

    Ok(())
}
