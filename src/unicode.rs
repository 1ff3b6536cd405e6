//! Character classification helpers shared by the normalizer stages.

/// Zero-width characters, bidi controls, invisible operators and the BOM.
#[inline(always)]
pub const fn is_format_control(c: char) -> bool {
    let cp = c as u32;

    // Early exit: almost every character is outside this range
    if cp < 0x200B || cp > 0xFEFF {
        return false;
    }

    matches!(cp,
        0x200B..=0x200F |
        0x202A..=0x202E |
        0x2060..=0x2064 |
        0x2066..=0x2069 |
        0x206A..=0x206F |
        0xFEFF
    )
}

/// C0 and C1 control characters, excluding tab and the line-break family
/// (`\n`, `\r`, NEL) which are handled as structure, not noise.
#[inline(always)]
pub const fn is_stray_control(c: char) -> bool {
    let cp = c as u32;
    (cp <= 0x1F && cp != 0x09 && cp != 0x0A && cp != 0x0D)
        || (cp >= 0x7F && cp <= 0x9F && cp != 0x85)
}

/// Characters that end a line: CR, NEL, LINE SEPARATOR, PARAGRAPH SEPARATOR.
/// `\n` itself is the canonical form and is not listed.
#[inline(always)]
pub const fn is_foreign_line_break(c: char) -> bool {
    matches!(c, '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}

/// Map typographic quotes and dashes to their ASCII equivalents.
#[inline(always)]
pub fn normalize_punctuation_char(c: char) -> char {
    match c {
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{00AB}' | '\u{00BB}' => '"',
        '\u{2018}' | '\u{2019}' | '\u{201A}' => '\'',
        '\u{2013}' | '\u{2014}' | '\u{2015}' | '\u{2212}' => '-',
        _ => c,
    }
}

/// `true` when the character would be dropped or rewritten by `StripInvisibles`.
#[inline(always)]
pub fn needs_scrub(c: char) -> bool {
    is_format_control(c)
        || is_stray_control(c)
        || is_foreign_line_break(c)
        || c == '\t'
        || normalize_punctuation_char(c) != c
}

#[inline(always)]
pub const fn is_sentence_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Uppercase the first character of `s`, leaving the rest untouched.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `true` when the first character is already in its uppercase form.
#[inline]
pub fn starts_upper(s: &str) -> bool {
    s.chars()
        .next()
        .is_none_or(|c| c.to_uppercase().eq(std::iter::once(c)))
}
