use unicode_normalization::UnicodeNormalization;

/// Reduce an uploaded file name to a safe, flat ASCII name.
///
/// The name is NFKD-decomposed so accented letters keep their base letter,
/// then anything non-ASCII is dropped. Path separators and whitespace runs
/// become single underscores, anything outside `[A-Za-z0-9_.-]` is removed,
/// and leading or trailing dots and underscores are stripped. The result may
/// be empty.
pub fn secure_filename(filename: &str) -> String {
    let ascii: String = filename
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    ascii
        .split_ascii_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect::<String>()
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}
