//! 呼び出し元情報モジュール
//!
//! ERROR/FATAL行に付ける `at 関数名[ファイル名:行番号]` を組み立てる。
//! 呼び出し元の情報はマクロ展開時に `file!()` / `line!()` と
//! ネストした関数の型名から取得する。

use std::fmt;

const CLOSURE_SEGMENT: &str = "::{{closure}}";

/// ログ呼び出し位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    function: &'static str,
    file: &'static str,
    line: u32,
}

impl CallSite {
    pub const fn new(function: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            function,
            file,
            line,
        }
    }

    /// 完全修飾関数名（クロージャ部分は除去済み）
    pub fn function(&self) -> &'static str {
        let mut name = self.function;
        while let Some(stripped) = name.strip_suffix(CLOSURE_SEGMENT) {
            name = stripped;
        }
        name
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// 最後の `::` 以降の関数名
    pub fn short_function(&self) -> &'static str {
        shorten_name(self.function(), "::")
    }

    /// パスを除いたファイル名
    pub fn short_file(&self) -> &'static str {
        shorten_name(shorten_name(self.file, "/"), "\\")
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "at {}[{}:{}]",
            self.short_function(),
            self.short_file(),
            self.line
        )
    }
}

/// `token` が最後に現れた位置より後ろを返す。見つからなければそのまま返す。
pub fn shorten_name<'a>(name: &'a str, token: &str) -> &'a str {
    match name.rfind(token) {
        Some(index) => &name[index + token.len()..],
        None => name,
    }
}

/// 展開された位置の [`CallSite`] を生成する
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __levelog_probe() {}
        fn __levelog_type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __levelog_type_name_of(__levelog_probe);
        $crate::CallSite::new(
            name.strip_suffix("::__levelog_probe").unwrap_or(name),
            file!(),
            line!(),
        )
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_name_last_separator() {
        assert_eq!(shorten_name("github.com/x/logger.Error", "."), "Error");
        assert_eq!(shorten_name("/home/user/src/main.rs", "/"), "main.rs");
        assert_eq!(shorten_name("levelog::facade::tests::run", "::"), "run");
    }

    #[test]
    fn test_shorten_name_without_separator() {
        assert_eq!(shorten_name("main", "::"), "main");
        assert_eq!(shorten_name("", "/"), "");
    }

    #[test]
    fn test_shorten_name_trailing_separator() {
        assert_eq!(shorten_name("dir/", "/"), "");
    }

    #[test]
    fn test_call_site_macro_captures_enclosing_function() {
        let expected_line = line!() + 1;
        let site = crate::call_site!();
        assert_eq!(
            site.function(),
            "levelog::caller::tests::test_call_site_macro_captures_enclosing_function"
        );
        assert_eq!(
            site.short_function(),
            "test_call_site_macro_captures_enclosing_function"
        );
        assert_eq!(site.short_file(), "caller.rs");
        assert_eq!(site.line(), expected_line);
    }

    #[test]
    fn test_call_site_inside_closure() {
        let capture = || crate::call_site!();
        let site = capture();
        assert_eq!(site.short_function(), "test_call_site_inside_closure");
    }

    #[test]
    fn test_display_annotation() {
        let site = CallSite::new("levelog::demo::run", "src/demo/main.rs", 42);
        assert_eq!(site.to_string(), "at run[main.rs:42]");
    }

    #[test]
    fn test_windows_style_path() {
        let site = CallSite::new("app::main", "src\\bin\\tool.rs", 7);
        assert_eq!(site.short_file(), "tool.rs");
        assert_eq!(site.to_string(), "at main[tool.rs:7]");
    }
}
