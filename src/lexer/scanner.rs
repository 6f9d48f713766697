use super::*;

/// Current character without consuming it
pub(super) fn peek(lexer: &Lexer) -> Option<char> {
    lexer.input[lexer.pos..].chars().next()
}

/// Character after the current one
pub(super) fn peek_next(lexer: &Lexer) -> Option<char> {
    let mut chars = lexer.input[lexer.pos..].chars();
    chars.next();
    chars.next()
}

/// Advance one character and update line/column tracking
pub(super) fn bump(lexer: &mut Lexer) -> Option<char> {
    let curr = peek(lexer);
    if let Some(c) = curr {
        lexer.pos += c.len_utf8();
        if c == '\n' {
            lexer.line += 1;
            lexer.column = 1;
        } else {
            lexer.column += 1;
        }
    }
    curr
}

/// Skip a `;` comment up to, but not including, the newline
pub(super) fn skip_comment(lexer: &mut Lexer) {
    while let Some(c) = peek(lexer) {
        if c == '\n' {
            break;
        }
        bump(lexer);
    }
}

/// Skip spaces and tabs only
pub(super) fn skip_blanks(lexer: &mut Lexer) {
    while matches!(peek(lexer), Some(' ' | '\t')) {
        bump(lexer);
    }
}

pub(super) fn is_identifier_start(lexer: &Lexer) -> bool {
    match peek(lexer) {
        Some('\\') => peek_next(lexer) == Some(' '),
        Some(c) => c.is_alphabetic() || matches!(c, '.' | '$' | ':'),
        None => false,
    }
}

pub(super) fn is_identifier_char(lexer: &Lexer) -> bool {
    is_identifier_start(lexer)
        || matches!(peek(lexer), Some(c) if c.is_ascii_digit() || matches!(c, '_' | '~' | '-' | '.' | ':' | ' '))
}
