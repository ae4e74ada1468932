//! Number formatting for counters

/// Integer with a thousands separator
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_count;
/// assert_eq!(format_count(1234567), "1,234,567");
/// ```
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// "1 file" / "3 files"
pub fn pluralize(count: u64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", format_count(count), singular)
    } else {
        format!("{} {}", format_count(count), plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "chunk", "chunks"), "1 chunk");
        assert_eq!(pluralize(0, "chunk", "chunks"), "0 chunks");
        assert_eq!(pluralize(2500, "chunk", "chunks"), "2,500 chunks");
    }
}
