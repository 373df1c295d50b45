//! 行フォーマットモジュール

use chrono::{DateTime, Local, Utc};
use std::fmt::{self, Display, Write};
use std::ops::{BitOr, BitOrAssign};

/// タイムスタンプ書式フラグ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct FormatFlags(u8);

impl FormatFlags {
    /// プレフィックスなし
    pub const NONE: FormatFlags = FormatFlags(0);
    /// 日付 `YYYY/MM/DD`
    pub const DATE: FormatFlags = FormatFlags(1);
    /// 時刻 `HH:MM:SS`
    pub const TIME: FormatFlags = FormatFlags(1 << 1);
    /// 時刻にマイクロ秒を付加（TIMEを含意）
    pub const MICROSECONDS: FormatFlags = FormatFlags(1 << 2);
    /// ローカル時刻ではなくUTCで出力
    pub const UTC: FormatFlags = FormatFlags(1 << 3);

    pub const STANDARD: FormatFlags = FormatFlags(Self::DATE.0 | Self::TIME.0);

    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub const fn contains(&self, other: FormatFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl BitOr for FormatFlags {
    type Output = FormatFlags;

    fn bitor(self, rhs: FormatFlags) -> FormatFlags {
        FormatFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for FormatFlags {
    fn bitor_assign(&mut self, rhs: FormatFlags) {
        self.0 |= rhs.0;
    }
}

/// 1行分を組み立てる
///
/// 順序は タグ → 日付 → 時刻 → 本文 で固定。末尾に改行を付ける。
pub fn format_line(tag: &str, flags: FormatFlags, now: DateTime<Utc>, body: &str) -> String {
    let mut line = String::with_capacity(tag.len() + body.len() + 28);
    line.push_str(tag);

    if flags.contains(FormatFlags::UTC) {
        push_timestamp(&mut line, flags, now);
    } else {
        push_timestamp(&mut line, flags, now.with_timezone(&Local));
    }

    line.push_str(body);
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

fn push_timestamp<Tz>(line: &mut String, flags: FormatFlags, t: DateTime<Tz>)
where
    Tz: chrono::TimeZone,
    Tz::Offset: Display,
{
    if flags.contains(FormatFlags::DATE) {
        let _ = write!(line, "{} ", t.format("%Y/%m/%d"));
    }
    if flags.contains(FormatFlags::MICROSECONDS) {
        let _ = write!(line, "{} ", t.format("%H:%M:%S%.6f"));
    } else if flags.contains(FormatFlags::TIME) {
        let _ = write!(line, "{} ", t.format("%H:%M:%S"));
    }
}

/// 値を空白区切りで連結
pub fn join_values(values: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", v);
    }
    out
}

/// `[a b c]` 形式で値を連結
pub struct Bracketed<'a>(pub &'a [&'a dyn Display]);

impl Display for Bracketed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", join_values(self.0))
    }
}
