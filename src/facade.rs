//! ロガー本体モジュール
//!
//! 設定（レベル・出力先・書式フラグ）を保持し、レベル別ライターを
//! 設定変更のたびに再バインドする。状態は `Mutex` で保護されるため、
//! どのスレッドから呼び出してもよい。

use crate::caller::CallSite;
use crate::error::LogError;
use crate::format::{format_line, join_values, Bracketed, FormatFlags};
use crate::level::Level;
use crate::output::{open_append, Destination, LogBuffer, Sink};

use chrono::Utc;
use std::fmt::Display;
use std::fs::File;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// Fatal時の終了コード
pub const FATAL_EXIT_CODE: i32 = 1;

/// ログ設定
#[derive(Debug, Clone)]
struct LogConfiguration {
    flags: FormatFlags,
    destination: Destination,
    file: Option<Arc<File>>,
    buffer: Option<LogBuffer>,
    threshold: Level,
}

impl Default for LogConfiguration {
    fn default() -> Self {
        Self {
            flags: FormatFlags::STANDARD,
            destination: Destination::Console,
            file: None,
            buffer: None,
            threshold: Level::Debug,
        }
    }
}

impl LogConfiguration {
    /// 現在の出力先に対応する書き込み先
    fn sink(&self) -> Sink {
        match (self.destination, &self.file, &self.buffer) {
            (Destination::File, Some(file), _) => Sink::File(Arc::clone(file)),
            (Destination::ConsoleAndFile, Some(file), _) => Sink::ConsoleAndFile(Arc::clone(file)),
            (Destination::Buffer, _, Some(buffer)) => Sink::Buffer(buffer.clone()),
            _ => Sink::Console,
        }
    }
}

/// タグ付きの行ライター
#[derive(Debug, Clone)]
struct LineWriter {
    tag: &'static str,
    flags: FormatFlags,
    sink: Sink,
}

impl LineWriter {
    fn new(tag: &'static str, config: &LogConfiguration) -> Self {
        Self {
            tag,
            flags: config.flags,
            sink: config.sink(),
        }
    }

    fn println(&self, body: &str) {
        let line = format_line(self.tag, self.flags, Utc::now(), body);
        self.sink.write_line(line.as_bytes());
    }
}

#[derive(Debug)]
struct State {
    config: LogConfiguration,
    error: LineWriter,
    info: LineWriter,
    debug: LineWriter,
}

impl State {
    fn new(config: LogConfiguration) -> Self {
        let error = LineWriter::new(Level::Error.tag(), &config);
        let info = LineWriter::new(Level::Info.tag(), &config);
        let debug = LineWriter::new(Level::Debug.tag(), &config);
        Self {
            config,
            error,
            info,
            debug,
        }
    }

    /// 全ライターを現在の設定で再バインド
    fn rebind(&mut self) {
        *self = State::new(self.config.clone());
    }

    fn writer(&self, level: Level) -> &LineWriter {
        match level {
            Level::Fatal | Level::Error => &self.error,
            Level::Info => &self.info,
            Level::Debug => &self.debug,
        }
    }
}

/// レベル付きロガー
#[derive(Debug)]
pub struct Logger {
    state: Mutex<State>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// デフォルト設定（コンソール出力・DEBUG・日付+時刻）で作成
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::new(LogConfiguration::default())),
        }
    }

    /// バッファ出力のロガーを作成
    pub fn with_buffer(buffer: LogBuffer) -> Self {
        let logger = Self::new();
        logger.set_output_buffer(buffer);
        logger
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut LogConfiguration),
    {
        let mut state = self.lock();
        f(&mut state.config);
        state.rebind();
    }

    // ===== 設定 =====

    /// 書式フラグを設定。`FormatFlags::NONE` でプレフィックスなし。
    pub fn set_format_flags(&self, flags: FormatFlags) {
        self.update(|config| config.flags = flags);
        debug!(flags = flags.bits(), "書式フラグを変更しました");
    }

    pub fn set_output_console(&self) {
        self.update(|config| config.destination = Destination::Console);
        debug!("出力先をコンソールに切り替えました");
    }

    /// 出力先をファイルに切り替える
    ///
    /// ファイルは作成・追記・書き込み専用で開く。開けなかった場合は
    /// エラーを返し、出力先は変更しない。
    pub fn set_output_file(&self, path: impl AsRef<Path>) -> Result<(), LogError> {
        self.switch_to_file(path.as_ref(), Destination::File)
    }

    /// ファイルとコンソールの両方に出力する
    pub fn set_output_console_and_file(&self, path: impl AsRef<Path>) -> Result<(), LogError> {
        self.switch_to_file(path.as_ref(), Destination::ConsoleAndFile)
    }

    fn switch_to_file(&self, path: &Path, destination: Destination) -> Result<(), LogError> {
        let file = open_append(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "ログファイルを開けませんでした");
            e
        })?;

        self.update(|config| {
            config.file = Some(Arc::new(file));
            config.destination = destination;
        });
        debug!(path = %path.display(), %destination, "出力先を切り替えました");
        Ok(())
    }

    /// 出力先を呼び出し側のバッファに切り替える
    pub fn set_output_buffer(&self, buffer: LogBuffer) {
        self.update(|config| {
            config.buffer = Some(buffer);
            config.destination = Destination::Buffer;
        });
        debug!("出力先をバッファに切り替えました");
    }

    /// 数値でしきい値を設定。0〜3以外はエラーで、状態は変えない。
    pub fn set_severity_threshold(&self, value: i64) -> Result<(), LogError> {
        let level = Level::try_from(value)?;
        self.set_level(level);
        Ok(())
    }

    pub fn set_level(&self, level: Level) {
        self.lock().config.threshold = level;
        debug!(%level, "ログレベルを変更しました");
    }

    pub fn threshold(&self) -> Level {
        self.lock().config.threshold
    }

    pub fn format_flags(&self) -> FormatFlags {
        self.lock().config.flags
    }

    pub fn destination(&self) -> Destination {
        self.lock().config.destination
    }

    /// `level` の行が出力されるか（Fatalは常に出力）
    pub fn enabled(&self, level: Level) -> bool {
        self.threshold() >= level
    }

    // ===== 出力 =====

    /// 呼び出し位置付きでERROR行を書き込み、プロセスを終了する
    pub fn fatal(&self, site: CallSite, values: &[&dyn Display]) -> ! {
        self.write_fatal(site, values);
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// Fatalの書き込み部分（終了はしない）
    pub fn write_fatal(&self, site: CallSite, values: &[&dyn Display]) {
        let writer = self.lock().writer(Level::Fatal).clone();
        writer.println(&format!("{} {}", site, Bracketed(values)));
        writer.sink.flush();
    }

    pub fn error(&self, site: CallSite, values: &[&dyn Display]) {
        if let Some(writer) = self.writer_for(Level::Error) {
            writer.println(&format!("{} {}", site, Bracketed(values)));
        }
    }

    pub fn info(&self, values: &[&dyn Display]) {
        if let Some(writer) = self.writer_for(Level::Info) {
            writer.println(&join_values(values));
        }
    }

    pub fn debug(&self, values: &[&dyn Display]) {
        if let Some(writer) = self.writer_for(Level::Debug) {
            writer.println(&join_values(values));
        }
    }

    /// しきい値を満たせばライターを複製して返す
    ///
    /// 値のフォーマットはロックを外してから行う。`Display` 実装の中で
    /// 同じロガーに出力してもデッドロックしない。
    fn writer_for(&self, level: Level) -> Option<LineWriter> {
        let state = self.lock();
        if state.config.threshold >= level {
            Some(state.writer(level).clone())
        } else {
            None
        }
    }
}
