//! 出力先モジュール

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// 出力先モード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Console,
    File,
    ConsoleAndFile,
    Buffer,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Destination::Console => "console",
            Destination::File => "file",
            Destination::ConsoleAndFile => "console+file",
            Destination::Buffer => "buffer",
        };
        f.write_str(name)
    }
}

/// 呼び出し側が所有するメモリバッファ
///
/// クローンは同じバッファを共有する。ロガーはクリアもクローズもしない。
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 内容をUTF-8文字列として取得（不正なバイトは置換）
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// 別ハンドルが同じバッファを指しているか
    pub fn same_buffer(&self, other: &LogBuffer) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn append(&self, bytes: &[u8]) {
        self.lock().extend_from_slice(bytes);
    }
}

/// 追記・書き込み専用でファイルを開く（存在しなければ作成）
pub fn open_append(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o666);
    }

    options.open(path)
}

/// レベル別ライターが書き込む先
#[derive(Debug, Clone)]
pub(crate) enum Sink {
    Console,
    File(Arc<File>),
    ConsoleAndFile(Arc<File>),
    Buffer(LogBuffer),
}

impl Sink {
    /// 1行を書き込む。書き込みエラーは無視する。
    pub(crate) fn write_line(&self, line: &[u8]) {
        match self {
            Sink::Console => {
                let _ = io::stdout().lock().write_all(line);
            }
            Sink::File(file) => {
                let _ = (&**file).write_all(line);
            }
            Sink::ConsoleAndFile(file) => {
                let _ = (&**file).write_all(line);
                let _ = io::stdout().lock().write_all(line);
            }
            Sink::Buffer(buffer) => buffer.append(line),
        }
    }

    pub(crate) fn flush(&self) {
        match self {
            Sink::Console => {
                let _ = io::stdout().flush();
            }
            Sink::File(file) => {
                let _ = file.sync_data();
            }
            Sink::ConsoleAndFile(file) => {
                let _ = file.sync_data();
                let _ = io::stdout().flush();
            }
            Sink::Buffer(_) => {}
        }
    }
}
