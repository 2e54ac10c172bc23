use sysinfo::System;

/// Local machine hostname, or `None` when the platform cannot resolve one.
pub fn local_host_name() -> Option<String> {
    System::host_name()
}

/// Last `.`-delimited field of `hostname`.
///
/// An input without a dot comes back unchanged. The empty string yields the
/// empty string, and a trailing dot yields the empty field after it.
pub fn last_dot_field(hostname: &str) -> &str {
    match hostname.rsplit_once('.') {
        Some((_, last)) => last,
        None => hostname,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_field_after_last_dot() {
        assert_eq!(last_dot_field("field1.field2.field3"), "field3");
    }

    #[test]
    fn input_without_dot_is_unchanged() {
        assert_eq!(last_dot_field("field1"), "field1");
        assert_eq!(
            last_dot_field("field1#field2#field3"),
            "field1#field2#field3"
        );
    }

    #[test]
    fn empty_input_yields_empty_field() {
        assert_eq!(last_dot_field(""), "");
    }

    #[test]
    fn trailing_dot_yields_empty_field() {
        assert_eq!(last_dot_field("field1.field2."), "");
    }
}
