//! Console input is plain text: nothing in it may steer the terminal.

fn is_bidi_control(ch: char) -> bool {
    matches!(ch, '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}')
}

/// Drops control characters (escape sequences included) and bidi overrides,
/// folds line breaks and tabs into spaces, and trims the result.
pub fn sanitize(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter_map(|ch| match ch {
            '\t' | '\n' | '\r' => Some(' '),
            ch if ch.is_control() || is_bidi_control(ch) => None,
            ch => Some(ch),
        })
        .collect();
    cleaned.trim().to_string()
}
