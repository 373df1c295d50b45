//! ログインフラモジュール
//!
//! ロガー自身の診断メッセージを標準エラーに出す。デモ出力とは別経路。

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 診断ログを初期化
///
/// RUST_LOG環境変数でログレベルを設定可能:
/// - error: 何も出さない（ロガーはerrorを発行しない）
/// - warn: ログファイルを開けなかった場合のみ（デフォルト）
/// - info: 上記に加え、デモの設定完了
/// - debug: 上記に加え、出力先・書式フラグ・ログレベルの変更
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
