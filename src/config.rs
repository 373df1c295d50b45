//! 設定モジュール

use crate::error::ConfigError;
use crate::facade::Logger;
use crate::format::FormatFlags;
use crate::level::Level;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// ロガー設定
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// しきい値
    pub level: Level,
    /// 出力ファイル（Noneならコンソール）
    pub file: Option<PathBuf>,
    /// ファイル出力時にコンソールにも出すか
    pub tee: bool,
    pub date: bool,
    pub time: bool,
    pub microseconds: bool,
    pub utc: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: Level::Debug,
            file: None,
            tee: false,
            date: true,
            time: true,
            microseconds: false,
            utc: false,
        }
    }
}

/// レベル指定（名前または数値）
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
enum LevelValue {
    Number(i64),
    Name(String),
}

impl LevelValue {
    fn resolve(&self) -> Result<Level, ConfigError> {
        match self {
            LevelValue::Number(n) => {
                Level::try_from(*n).map_err(|_| ConfigError::InvalidLevel(n.to_string()))
            }
            LevelValue::Name(name) => name.parse(),
        }
    }
}

/// TOML設定ファイル用構造体
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    level: Option<LevelValue>,
    file: Option<String>,
    tee: Option<bool>,
    date: Option<bool>,
    time: Option<bool>,
    microseconds: Option<bool>,
    utc: Option<bool>,
}

/// CLI引数
#[derive(Debug, Default)]
pub struct CliArgs {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
    pub tee: bool,
    pub no_timestamp: bool,
    pub microseconds: bool,
    pub utc: bool,
}

impl Settings {
    /// 設定を読み込む
    ///
    /// 優先順位: CLI引数 > 設定ファイル > デフォルト値
    pub fn load(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        Self::load_from(&default_config_path(), cli_args)
    }

    /// 指定パスの設定ファイルから読み込む（存在しなければデフォルト値）
    pub fn load_from(config_path: &Path, cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let mut settings = Settings::default();

        if config_path.exists() {
            let content = fs::read_to_string(config_path)?;
            let file_config: FileConfig = toml::from_str(&content)?;
            settings.merge_file_config(&file_config)?;
        }

        settings.merge_cli_args(cli_args)?;

        Ok(settings)
    }

    /// ファイル設定をマージ
    fn merge_file_config(&mut self, file_config: &FileConfig) -> Result<(), ConfigError> {
        if let Some(ref level) = file_config.level {
            self.level = level.resolve()?;
        }
        if let Some(ref path) = file_config.file {
            self.file = Some(PathBuf::from(path));
        }
        if let Some(tee) = file_config.tee {
            self.tee = tee;
        }
        if let Some(date) = file_config.date {
            self.date = date;
        }
        if let Some(time) = file_config.time {
            self.time = time;
        }
        if let Some(microseconds) = file_config.microseconds {
            self.microseconds = microseconds;
        }
        if let Some(utc) = file_config.utc {
            self.utc = utc;
        }
        Ok(())
    }

    /// CLI引数をマージ
    fn merge_cli_args(&mut self, cli_args: &CliArgs) -> Result<(), ConfigError> {
        if let Some(ref level) = cli_args.level {
            self.level = level.parse()?;
        }
        if let Some(ref path) = cli_args.file {
            self.file = Some(path.clone());
        }
        if cli_args.tee {
            self.tee = true;
        }
        if cli_args.no_timestamp {
            self.date = false;
            self.time = false;
            self.microseconds = false;
        }
        if cli_args.microseconds {
            self.microseconds = true;
        }
        if cli_args.utc {
            self.utc = true;
        }
        Ok(())
    }

    /// 書式フラグに変換
    pub fn format_flags(&self) -> FormatFlags {
        let mut flags = FormatFlags::NONE;
        if self.date {
            flags |= FormatFlags::DATE;
        }
        if self.time {
            flags |= FormatFlags::TIME;
        }
        if self.microseconds {
            flags |= FormatFlags::MICROSECONDS;
        }
        if self.utc {
            flags |= FormatFlags::UTC;
        }
        flags
    }

    /// ロガーに反映する
    ///
    /// 出力先を先に切り替える。ファイルを開けなかった場合は
    /// ロガーを一切変更せずにエラーを返す。
    pub fn apply(&self, logger: &Logger) -> Result<(), ConfigError> {
        match (&self.file, self.tee) {
            (Some(path), true) => logger.set_output_console_and_file(path)?,
            (Some(path), false) => logger.set_output_file(path)?,
            (None, _) => logger.set_output_console(),
        }

        logger.set_level(self.level);
        logger.set_format_flags(self.format_flags());
        Ok(())
    }
}

/// 設定ファイルのパスを取得
pub fn default_config_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".levelog").join("config.toml")
}
