//! CLIモジュール

use anyhow::Result;
use clap::Parser;
use levelog::config::{CliArgs, Settings};
use std::path::PathBuf;
use tracing::info;

/// levelog - レベル付きロギングのデモ
#[derive(Parser, Debug)]
#[command(name = "levelog")]
#[command(about = "INFO・DEBUG・ERROR・FATALを順に出力するデモ", long_about = None)]
pub struct Cli {
    /// ログレベル（fatal / error / info / debug または 0-3）
    #[arg(short, long)]
    pub level: Option<String>,

    /// 出力ファイル（追記）
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// ファイル出力時にコンソールにも出力
    #[arg(short, long, requires = "file")]
    pub tee: bool,

    /// 日付・時刻を出力しない
    #[arg(long, conflicts_with_all = ["microseconds", "utc"])]
    pub no_timestamp: bool,

    /// 時刻にマイクロ秒を付ける
    #[arg(long)]
    pub microseconds: bool,

    /// UTCで出力
    #[arg(long)]
    pub utc: bool,
}

impl Cli {
    fn to_cli_args(&self) -> CliArgs {
        CliArgs {
            level: self.level.clone(),
            file: self.file.clone(),
            tee: self.tee,
            no_timestamp: self.no_timestamp,
            microseconds: self.microseconds,
            utc: self.utc,
        }
    }
}

/// CLIエントリポイント
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(&cli.to_cli_args())?;
    settings.apply(levelog::logger())?;
    info!(level = %settings.level, "ロガーを設定しました");

    levelog::info!("this app is running great");
    levelog::debug!("got some debugging stuff logged here");
    levelog::error!("something might have gone wrong");
    levelog::fatal!("oops, fatality...");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args() {
        let cli = Cli::try_parse_from(["levelog"]).unwrap();
        assert_eq!(cli.level, None);
        assert_eq!(cli.file, None);
        assert!(!cli.tee);
        assert!(!cli.no_timestamp);
    }

    #[test]
    fn test_with_args() {
        let cli = Cli::try_parse_from([
            "levelog",
            "--level",
            "info",
            "--file",
            "/tmp/app.log",
            "--tee",
            "--utc",
        ])
        .unwrap();

        let args = cli.to_cli_args();
        assert_eq!(args.level, Some("info".to_string()));
        assert_eq!(args.file, Some(PathBuf::from("/tmp/app.log")));
        assert!(args.tee);
        assert!(args.utc);
    }

    #[test]
    fn test_tee_requires_file() {
        let cli = Cli::try_parse_from(["levelog", "--tee"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_no_timestamp_conflicts_with_microseconds() {
        let cli = Cli::try_parse_from(["levelog", "--no-timestamp", "--microseconds"]);
        assert!(cli.is_err());
    }
}
