//! Source column type to field type mapping.

/// Reduce a possibly dot-qualified type identifier to its simple name.
///
/// `"java.math.BigDecimal"` becomes `"BigDecimal"`; bare keywords like
/// `"VARCHAR"` pass through untouched. The mapping is advisory: nothing is
/// validated against a known type set.
pub fn map_type(source_type: &str) -> &str {
    match source_type.rsplit_once('.') {
        Some((_, simple)) => simple,
        None => source_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_types_lose_their_package() {
        assert_eq!(map_type("java.lang.String"), "String");
        assert_eq!(map_type("java.math.BigDecimal"), "BigDecimal");
        assert_eq!(map_type("a.B"), "B");
    }

    #[test]
    fn test_bare_types_pass_through() {
        assert_eq!(map_type("VARCHAR"), "VARCHAR");
        assert_eq!(map_type("INTEGER"), "INTEGER");
        assert_eq!(map_type(""), "");
    }

    #[test]
    fn test_trailing_separator() {
        // Everything after the last dot, even when that is nothing.
        assert_eq!(map_type("java.lang."), "");
    }
}
