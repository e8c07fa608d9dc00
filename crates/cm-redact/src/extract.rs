//! Secret substring extraction.
//!
//! Given a classified line, isolates the raw secret according to the
//! line shape's delimiter convention. Extraction never panics: every miss
//! (absent separator, zero or ambiguous segment matches) is `None`, which
//! the pipeline turns into pass-through.

use crate::pattern::PatternKind;

/// Extract the raw secret from a line of the given kind.
///
/// The returned string is always a verbatim substring of `line`, so a
/// literal replace of it is well defined.
pub fn extract(line: &str, kind: PatternKind) -> Option<String> {
    match kind {
        // Secret is the element at index 1 of the ": " split: the text
        // between the first and second separators when more than one exists.
        PatternKind::DirectKeyValue => line.split(": ").nth(1).map(str::to_string),
        PatternKind::StorageAccountKey | PatternKind::ConnectionStringPassword => {
            // Both kinds carry a delimiter and key prefix in the table.
            let delimiter = kind.segment_delimiter()?;
            let prefix = kind.key_prefix()?;
            segment_secret(line, delimiter, prefix)
        }
    }
}

/// Find the single segment starting with `key_prefix` (case-insensitive)
/// and return everything after its first `=`.
///
/// Zero or multiple matching segments yield `None`: with no single
/// candidate the extraction is ambiguous and the line must pass through
/// untouched. A matching segment with no `=` yields the whole segment.
fn segment_secret(line: &str, delimiter: char, key_prefix: &str) -> Option<String> {
    let prefix = key_prefix.to_lowercase();
    let mut candidates = line
        .split(delimiter)
        .filter(|segment| segment.to_lowercase().starts_with(&prefix));

    let segment = candidates.next()?;
    if candidates.next().is_some() {
        return None;
    }

    let secret = match segment.find('=') {
        Some(pos) => &segment[pos + 1..],
        None => segment,
    };
    Some(secret.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_direct_key_value() {
        let secret = extract("ClientSecret: abcdefghijklmno", PatternKind::DirectKeyValue);
        assert_eq!(secret.as_deref(), Some("abcdefghijklmno"));
    }

    #[test]
    fn test_extract_direct_missing_separator() {
        assert_eq!(extract("ClientSecret=oops", PatternKind::DirectKeyValue), None);
    }

    #[test]
    fn test_extract_direct_multiple_separators_truncates() {
        // Index 1 of the split: the slice between the first and second
        // separators.
        let secret = extract("ClientSecret: abc: def", PatternKind::DirectKeyValue);
        assert_eq!(secret.as_deref(), Some("abc"));
    }

    #[test]
    fn test_extract_storage_account_key() {
        let line = "StorageAccount=foo;AccountKey=abcdefghijklmnopqrstuvwxyz;EndpointSuffix=core.windows.net";
        let secret = extract(line, PatternKind::StorageAccountKey);
        assert_eq!(secret.as_deref(), Some("abcdefghijklmnopqrstuvwxyz"));
    }

    #[test]
    fn test_extract_storage_prefix_is_case_insensitive() {
        let line = "storageaccount=foo;accountkey=SECRETVALUE";
        let secret = extract(line, PatternKind::StorageAccountKey);
        assert_eq!(secret.as_deref(), Some("SECRETVALUE"));
    }

    #[test]
    fn test_extract_connection_string_password() {
        let line = "ConnectionString=Server=x,password=hunter2hunter2";
        let secret = extract(line, PatternKind::ConnectionStringPassword);
        assert_eq!(secret.as_deref(), Some("hunter2hunter2"));
    }

    #[test]
    fn test_extract_ambiguous_segments_yield_none() {
        let line = "StorageAccount=foo;AccountKey=a;AccountKey=b";
        assert_eq!(extract(line, PatternKind::StorageAccountKey), None);
    }

    #[test]
    fn test_extract_no_matching_segment_yields_none() {
        let line = "StorageAccount=foo;EndpointSuffix=core.windows.net";
        assert_eq!(extract(line, PatternKind::StorageAccountKey), None);
    }

    #[test]
    fn test_extract_segment_without_equals_yields_whole_segment() {
        let line = "StorageAccount=foo;AccountKeyOnly";
        let secret = extract(line, PatternKind::StorageAccountKey);
        assert_eq!(secret.as_deref(), Some("AccountKeyOnly"));
    }

    #[test]
    fn test_extract_secret_keeps_inner_equals() {
        // Only the first '=' delimits the key; the rest belongs to the value.
        let line = "ConnectionString=Server=x,password=a=b=c";
        let secret = extract(line, PatternKind::ConnectionStringPassword);
        assert_eq!(secret.as_deref(), Some("a=b=c"));
    }
}
