//! ログレベルモジュール

use crate::error::{ConfigError, LogError};
use std::fmt;
use std::str::FromStr;

/// ログレベル（数値が小さいほど重大）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Fatal = 0,
    Error = 1,
    Info = 2,
    Debug = 3,
}

impl Level {
    /// 全レベル（重大な順）
    pub const ALL: [Level; 4] = [Level::Fatal, Level::Error, Level::Info, Level::Debug];

    /// 行頭に付けるタグ
    ///
    /// Fatal専用のタグはなく、ERRORライターで出力される。
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Fatal | Level::Error => "[ERROR]",
            Level::Info => "[INFO]",
            Level::Debug => "[DEBUG]",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Fatal => "fatal",
            Level::Error => "error",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }
}

impl TryFrom<i64> for Level {
    type Error = LogError;

    fn try_from(value: i64) -> Result<Self, LogError> {
        match value {
            0 => Ok(Level::Fatal),
            1 => Ok(Level::Error),
            2 => Ok(Level::Info),
            3 => Ok(Level::Debug),
            other => Err(LogError::UnsupportedLevel(other)),
        }
    }
}

impl FromStr for Level {
    type Err = ConfigError;

    /// 名前（大文字小文字は区別しない）または数値からパース
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "fatal" => Ok(Level::Fatal),
            "error" => Ok(Level::Error),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            _ => trimmed
                .parse::<i64>()
                .ok()
                .and_then(|value| Level::try_from(value).ok())
                .ok_or_else(|| ConfigError::InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
