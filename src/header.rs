use std::ffi::OsStr;

/// Canvas header written as line 1 of every patch file.
pub const HEADER_LITERAL: &str = "#N canvas 0 0 640 480 10;\n";

/// File name suffix selecting patch files. Matched exactly and case-sensitively.
pub const PATCH_EXTENSION: &str = ".pd";

/// Returns `true` if `name` ends with [`PATCH_EXTENSION`].
///
/// The comparison runs on the raw OS string, so names that are not valid
/// UTF-8 are still matched on their suffix.
pub fn is_patch_file_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().ends_with(PATCH_EXTENSION.as_bytes())
}

/// Replaces the first line of `contents` with [`HEADER_LITERAL`].
///
/// Line 1 ends at the first `\n`, `\r\n` or lone `\r`; everything after that
/// terminator is returned byte-for-byte. Empty input stays empty. A single line
/// without a terminator is replaced by the literal alone.
///
/// # Examples
///
/// ```
/// use fix_canvas::header::replace_first_line;
///
/// let out = replace_first_line(b"#N canvas 0 0 100 100 10;\n#X obj 10 10 foo;\n");
/// assert_eq!(out, b"#N canvas 0 0 640 480 10;\n#X obj 10 10 foo;\n");
/// assert!(replace_first_line(b"").is_empty());
/// ```
pub fn replace_first_line(contents: &[u8]) -> Vec<u8> {
    if contents.is_empty() {
        return Vec::new();
    }

    let rest = match line_end(contents) {
        Some(end) => &contents[end..],
        None => &[],
    };

    let mut out = Vec::with_capacity(HEADER_LITERAL.len() + rest.len());
    out.extend_from_slice(HEADER_LITERAL.as_bytes());
    out.extend_from_slice(rest);
    out
}

/// Index just past the first line terminator (`\n`, `\r\n` or `\r`), if any.
fn line_end(contents: &[u8]) -> Option<usize> {
    let i = contents.iter().position(|&b| b == b'\n' || b == b'\r')?;
    match (contents[i], contents.get(i + 1)) {
        (b'\r', Some(b'\n')) => Some(i + 2),
        _ => Some(i + 1),
    }
}

/// Number of lines in `contents`, counting a trailing unterminated line.
///
/// Terminators are counted the same way [`replace_first_line`] finds them.
pub fn line_count(contents: &[u8]) -> usize {
    let mut count = 0;
    let mut rest = contents;
    while !rest.is_empty() {
        count += 1;
        rest = match line_end(rest) {
            Some(end) => &rest[end..],
            None => &[],
        };
    }
    count
}
