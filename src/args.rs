// src/args.rs
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::options::{OutputFormat, TotalMode};
use crate::parsers::SizeArg;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "stream_wc",
    version = crate::VERSION,
    about = "Count lines, words and characters of UTF-8 text"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 対象ファイル（省略時または `-` は標準入力）
    #[arg(value_name = "FILE")]
    pub paths: Vec<PathBuf>,

    /// 行数を表示
    #[arg(short = 'l', long)]
    pub lines: bool,

    /// 単語数を表示
    #[arg(short = 'w', long)]
    pub words: bool,

    /// 文字数を表示
    #[arg(short = 'm', long)]
    pub chars: bool,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// 合計行の表示
    #[arg(long, value_enum, default_value = "auto")]
    pub total: TotalMode,

    /// NUL区切りのファイル名リストを読む（`-` は標準入力）
    #[arg(long, value_name = "F", conflicts_with = "paths")]
    pub files0_from: Option<PathBuf>,

    /// 一度に読み込むバイト数 (例: 64K, 1MiB)
    #[arg(long, default_value = "64K")]
    pub chunk_size: SizeArg,

    /// 最初のエラーで中断
    #[arg(long)]
    pub strict: bool,

    /// ログ出力を詳細にする (-v: debug, -vv: trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
