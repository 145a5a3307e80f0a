//! Go string literal quoting.
//!
//! Produces interpreted string literals with the escape set Go's
//! `strconv.Quote` uses, so output reads the way `gofmt`-clean code does.
//! Printability follows `strconv.IsPrint` except for unassigned code
//! points, which print literally here.

/// Check whether Go would print `c` literally inside a quoted string.
///
/// Letters, marks, numbers, punctuation, symbols and the ASCII space are
/// printable. Control characters, other whitespace and the Unicode format
/// characters are not, and neither are private-use characters or
/// noncharacters. Unassigned code points are treated as printable.
pub fn is_print(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    !matches!(
        c,
        '\u{00AD}'
            | '\u{0600}'..='\u{0605}'
            | '\u{061C}'
            | '\u{06DD}'
            | '\u{070F}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
            | '\u{E000}'..='\u{F8FF}'
            | '\u{FDD0}'..='\u{FDEF}'
            | '\u{F0000}'..='\u{10FFFF}'
    ) && !is_noncharacter(c)
}

/// `U+FFFE` and `U+FFFF` in every plane.
fn is_noncharacter(c: char) -> bool {
    u32::from(c) & 0xFFFE == 0xFFFE
}

/// Check whether `c` must be escaped inside an interpreted string literal.
#[inline]
pub fn needs_escape(c: char) -> bool {
    c == '"' || c == '\\' || !is_print(c)
}

/// Check whether `s` can be written as a raw (back-quoted) literal.
pub fn can_backquote(s: &str) -> bool {
    s.chars()
        .all(|c| c != '`' && (c == '"' || c == '\\' || is_print(c)))
}

/// Quote `s` as a Go interpreted string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if is_print(c) => out.push(c),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            c => push_hex_escape(&mut out, c),
        }
    }
    out.push('"');
    out
}

/// Quote `s` as a raw literal. Callers check [`can_backquote`] first.
pub fn backquote(s: &str) -> String {
    format!("`{s}`")
}

/// Render a struct tag, back-quoted when possible.
pub fn tag_literal(tag: &str) -> String {
    if can_backquote(tag) {
        backquote(tag)
    } else {
        quote(tag)
    }
}

fn push_hex_escape(out: &mut String, c: char) {
    let code = u32::from(c);
    let escape = if code < 0x20 || code == 0x7F {
        format!("\\x{code:02x}")
    } else if code < 0x1_0000 {
        format!("\\u{code:04x}")
    } else {
        format!("\\U{code:08x}")
    };
    out.push_str(&escape);
}
