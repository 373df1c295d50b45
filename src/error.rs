//! エラー型定義モジュール

use std::io;
use thiserror::Error;

/// ロガー操作エラー
#[derive(Error, Debug)]
pub enum LogError {
    #[error("サポートされていないログレベル: {0}")]
    UnsupportedLevel(i64),

    #[error("IOエラー: {0}")]
    Io(#[from] io::Error),
}

/// 設定エラー
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IOエラー: {0}")]
    IoError(#[from] io::Error),

    #[error("TOML解析エラー: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("無効なログレベル: {0}")]
    InvalidLevel(String),

    #[error("ロガー設定エラー: {0}")]
    LogError(#[from] LogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_level_contains_value() {
        let err = LogError::UnsupportedLevel(100);
        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn test_io_error_display() {
        let err = LogError::from(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        assert!(err.to_string().contains("IOエラー"));
        assert!(matches!(err, LogError::Io(_)));
    }

    #[test]
    fn test_config_error_from_log_error() {
        let err = ConfigError::from(LogError::UnsupportedLevel(7));
        assert!(err.to_string().contains("ロガー設定エラー"));
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_invalid_level_display() {
        let err = ConfigError::InvalidLevel("verbose".to_string());
        assert!(err.to_string().contains("verbose"));
    }
}
