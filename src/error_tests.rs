//! Unit tests for browsing engine error types

#[cfg(test)]
mod tests {
    use crate::error::{BrowserError, ErrorKind};
    use std::error::Error;

    #[test]
    fn test_not_found_display() {
        let error = BrowserError::NotFound("item type 'pages' does not exist".to_string());
        assert_eq!(
            error.to_string(),
            "Not found: item type 'pages' does not exist"
        );
    }

    #[test]
    fn test_invalid_argument_display() {
        let error = BrowserError::InvalidArgument("bad column spec".to_string());
        assert_eq!(error.to_string(), "Invalid argument: bad column spec");
    }

    #[test]
    fn test_runtime_display() {
        let error = BrowserError::Runtime("payload is not a mapping".to_string());
        assert_eq!(error.to_string(), "Runtime error: payload is not a mapping");
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            BrowserError::NotFound(String::new()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            BrowserError::InvalidArgument(String::new()).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            BrowserError::OutOfBounds(String::new()).kind(),
            ErrorKind::OutOfBounds
        );
        assert_eq!(
            BrowserError::AccessDenied(String::new()).kind(),
            ErrorKind::AccessDenied
        );
        assert_eq!(
            BrowserError::Runtime(String::new()).kind(),
            ErrorKind::Runtime
        );
    }

    #[test]
    fn test_io_error_is_uncategorized() {
        let error = BrowserError::from(std::io::Error::other("boom"));
        assert_eq!(error.kind(), ErrorKind::Runtime);
        assert!(error.source().is_some());
    }

    #[test]
    fn test_plain_kinds_have_no_source() {
        let error = BrowserError::NotFound("missing".to_string());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BrowserError>();
    }
}
