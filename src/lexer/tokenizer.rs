use super::*;
use super::scanner::{bump, is_identifier_char, is_identifier_start, peek, skip_blanks, skip_comment};

pub(super) fn tokenize(lexer: &mut Lexer) -> Result<(), ConfigError> {
    while let Some(c) = peek(lexer) {
        if is_identifier_start(lexer) {
            tokenize_identifier(lexer);
            continue;
        }

        match c {
            ' ' | '\t' | '\r' | '\n' => {
                bump(lexer);
            }
            ';' => skip_comment(lexer),
            '[' => tokenize_section(lexer)?,
            '=' => tokenize_value(lexer),
            ch => return Err(unexpected_char(lexer, ch)),
        }
    }

    Ok(())
}

fn push<'a>(lexer: &mut Lexer<'a>, token: Token<'a>) {
    log::trace!("{:?} {:?} at {}:{}", token.kind, token.text, token.line, token.column);
    lexer.tokens.push(token);
}

fn tokenize_identifier(lexer: &mut Lexer) {
    let (start, line, column) = (lexer.pos, lexer.line, lexer.column);

    while is_identifier_char(lexer) {
        bump(lexer);
    }

    // trailing spaces are consumed but are not part of the name
    let input = lexer.input;
    let text = input[start..lexer.pos].trim_end_matches(' ');
    push(lexer, Token::new(TokenKind::Identifier, text, line, column));
}

fn tokenize_section(lexer: &mut Lexer) -> Result<(), ConfigError> {
    let (line, column) = (lexer.line, lexer.column);
    bump(lexer); // consume '['

    let start = lexer.pos;
    while is_identifier_char(lexer) {
        bump(lexer);
    }
    let end = lexer.pos;

    if peek(lexer) != Some(']') {
        return Err(ConfigError::ExpectedClosingBracket {
            line,
            column,
            hint: Some("Section names may only contain letters, digits, spaces and . $ : _ ~ -".into()),
            code: Some(102),
        });
    }
    bump(lexer); // consume ']'

    let input = lexer.input;
    let text = input[start..end].trim_matches(' ');
    push(lexer, Token::new(TokenKind::Section, text, line, column + 1));
    Ok(())
}

fn tokenize_value(lexer: &mut Lexer) {
    bump(lexer); // consume '='
    skip_blanks(lexer);

    let (start, line, column) = (lexer.pos, lexer.line, lexer.column);

    // a comma anywhere wins over any colon
    let mut separator = None;
    while let Some(c) = peek(lexer) {
        if c == '\n' || c == ';' {
            break;
        }
        if separator != Some(',') && (c == ',' || c == ':') {
            separator = Some(c);
        }
        bump(lexer);
    }

    let input = lexer.input;
    let span = &input[start..lexer.pos];
    let kind = if separator.is_some() {
        TokenKind::VectorValue
    } else {
        TokenKind::Value
    };

    for (offset, field) in split_fields(span, separator) {
        let field_column = column + span[..offset].chars().count();
        push(lexer, Token::new(kind, field, line, field_column));
    }
}

/// Splits a value span on `separator`, returning each non-empty field with its byte offset.
fn split_fields(span: &str, separator: Option<char>) -> Vec<(usize, &str)> {
    let mut fields = Vec::new();
    let mut rest = span;
    let mut offset = 0;

    loop {
        let (field, next) = match separator.and_then(|sep| rest.find(sep).map(|i| (i, sep))) {
            Some((i, sep)) => (&rest[..i], Some(i + sep.len_utf8())),
            None => (rest, None),
        };

        let field = trim_unescaped_end(field);
        if !field.is_empty() {
            fields.push((offset, field));
        }

        let Some(next) = next else {
            break;
        };
        let after = &rest[next..];
        let stripped = after.trim_start_matches([' ', '\t']);
        offset += next + (after.len() - stripped.len());
        rest = stripped;
    }

    fields
}

/// Trims trailing whitespace, keeping a blank that is escaped by a backslash.
fn trim_unescaped_end(field: &str) -> &str {
    let bytes = field.as_bytes();
    let mut end = bytes.len();

    while end > 0 && matches!(bytes[end - 1], b' ' | b'\t' | b'\r') {
        if end >= 2 && bytes[end - 2] == b'\\' {
            break;
        }
        end -= 1;
    }

    &field[..end]
}

fn unexpected_char(lexer: &Lexer, ch: char) -> ConfigError {
    ConfigError::UnexpectedCharacter {
        character: ch,
        line: lexer.line,
        column: lexer.column,
        hint: Some("Options start with a letter or one of . $ : and sections with '['".into()),
        code: Some(101),
    }
}
