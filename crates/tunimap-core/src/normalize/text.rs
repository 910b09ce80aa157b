// crates/tunimap-core/src/normalize/text.rs
//
// Name cleaning.
// Rules:
// - CRLF, lone CR and lone LF each become one space.
// - Leading/trailing whitespace is trimmed.
// - Everything else is left unchanged (accents, inner spacing).

pub fn clean_name(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(' ');
            }
            '\n' => out.push(' '),
            _ => out.push(c),
        }
    }
    out.trim().to_string()
}
