// src/options.rs
use clap::ValueEnum;
use stream_wc_engine::options as engine_options;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 行数・単語数・文字数の列
    #[default]
    Plain,
    Json,
}

/// `total` 行を出すタイミング
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TotalMode {
    /// 複数ソースのときのみ
    #[default]
    Auto,
    Always,
    Never,
}

impl From<OutputFormat> for engine_options::OutputFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Plain => Self::Plain,
            OutputFormat::Json => Self::Json,
        }
    }
}

impl From<TotalMode> for engine_options::TotalMode {
    fn from(value: TotalMode) -> Self {
        match value {
            TotalMode::Auto => Self::Auto,
            TotalMode::Always => Self::Always,
            TotalMode::Never => Self::Never,
        }
    }
}
