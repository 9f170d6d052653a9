//! エラー型定義

use thiserror::Error;

/// ギャラリー操作の共通エラー型
///
/// すべて回復可能なエラーで、失敗した操作は状態を一切変更しない。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("invalid input: {0} must not be empty")]
    InvalidInput(&'static str),

    #[error("duplicate source: {0}")]
    DuplicateSource(String),

    #[error("no category selected")]
    MissingCategory,

    #[error("index {index} out of range for view of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("image not found: id {0}")]
    NotFound(u64),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, GalleryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_input() {
        let error = GalleryError::InvalidInput("source");
        let display = format!("{}", error);
        assert!(display.contains("invalid input"));
        assert!(display.contains("source"));
    }

    #[test]
    fn test_error_display_duplicate_source() {
        let error = GalleryError::DuplicateSource("https://example.com/a.png".to_string());
        let display = format!("{}", error);
        assert!(display.contains("duplicate source"));
        assert!(display.contains("https://example.com/a.png"));
    }

    #[test]
    fn test_error_display_index_out_of_range() {
        let error = GalleryError::IndexOutOfRange { index: 5, len: 3 };
        let display = format!("{}", error);
        assert!(display.contains("index 5"));
        assert!(display.contains("length 3"));
    }

    #[test]
    fn test_error_display_not_found() {
        let error = GalleryError::NotFound(42);
        let display = format!("{}", error);
        assert!(display.contains("not found"));
        assert!(display.contains("42"));
    }

    #[test]
    fn test_error_debug() {
        let error = GalleryError::MissingCategory;
        let debug = format!("{:?}", error);
        assert!(debug.contains("MissingCategory"));
    }
}
