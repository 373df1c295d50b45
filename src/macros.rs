//! 出力マクロ
//!
//! いずれも `マクロ!(値, ...)` でグローバルロガーへ、
//! `マクロ!(ロガー => 値, ...)` で指定したロガーへ出力する。
//! 値は `Display` を実装していればよく、空白区切りで連結される。

/// 呼び出し位置付きでERROR行を書き込み、プロセスを終了する
#[macro_export]
macro_rules! fatal {
    ($logger:expr => $($value:expr),* $(,)?) => {
        $logger.fatal(
            $crate::call_site!(),
            &[$(&$value as &dyn ::std::fmt::Display),*],
        )
    };
    ($($value:expr),* $(,)?) => {
        $crate::logger().fatal(
            $crate::call_site!(),
            &[$(&$value as &dyn ::std::fmt::Display),*],
        )
    };
}

/// 呼び出し位置付きのERROR行
#[macro_export]
macro_rules! error {
    ($logger:expr => $($value:expr),* $(,)?) => {
        $logger.error(
            $crate::call_site!(),
            &[$(&$value as &dyn ::std::fmt::Display),*],
        )
    };
    ($($value:expr),* $(,)?) => {
        $crate::logger().error(
            $crate::call_site!(),
            &[$(&$value as &dyn ::std::fmt::Display),*],
        )
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr => $($value:expr),* $(,)?) => {
        $logger.info(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
    ($($value:expr),* $(,)?) => {
        $crate::logger().info(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr => $($value:expr),* $(,)?) => {
        $logger.debug(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
    ($($value:expr),* $(,)?) => {
        $crate::logger().debug(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}
