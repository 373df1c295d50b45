//! levelog - レベル付きロギングファサード
//!
//! コンソール・ファイル・コンソール+ファイル・メモリバッファのいずれかに、
//! `[ERROR]` / `[INFO]` / `[DEBUG]` タグと日時付きで1行ずつ書き込む。
//! ERRORとFATALには呼び出し元の `at 関数名[ファイル名:行番号]` が付く。
//!
//! ```no_run
//! levelog::set_severity_threshold(2).unwrap();
//! levelog::info!("サーバー起動", 8080);
//! levelog::error!("接続に失敗しました");
//! ```

pub mod caller;
pub mod config;
pub mod error;
pub mod facade;
pub mod format;
pub mod level;
pub mod output;

mod macros;

pub use caller::CallSite;
pub use error::{ConfigError, LogError};
pub use facade::Logger;
pub use format::FormatFlags;
pub use level::Level;
pub use output::{Destination, LogBuffer};

use std::path::Path;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// プロセス全体で共有するロガー（初回アクセス時にデフォルト設定で作成）
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(Logger::new)
}

pub fn set_format_flags(flags: FormatFlags) {
    logger().set_format_flags(flags);
}

pub fn set_output_console() {
    logger().set_output_console();
}

pub fn set_output_file(path: impl AsRef<Path>) -> Result<(), LogError> {
    logger().set_output_file(path)
}

pub fn set_output_console_and_file(path: impl AsRef<Path>) -> Result<(), LogError> {
    logger().set_output_console_and_file(path)
}

pub fn set_output_buffer(buffer: LogBuffer) {
    logger().set_output_buffer(buffer);
}

pub fn set_severity_threshold(value: i64) -> Result<(), LogError> {
    logger().set_severity_threshold(value)
}
