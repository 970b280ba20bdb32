//! 命令行参数定义

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Pitman 速记转写工具
#[derive(Parser, Debug)]
#[command(name = "pitman")]
#[command(author, version, about = "Pitman shorthand outline generator", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// 引擎配置文件（默认 ~/.config/pitman/config.toml）
    #[arg(short, long, global = true, value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// 输出更多日志（可重复）
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert a word list into JSONL outline records
    Generate {
        /// Word list, one word per line
        #[arg(short, long, value_name = "FILE")]
        wordlist: PathBuf,

        /// Output JSONL file
        #[arg(short, long, value_name = "FILE")]
        out: PathBuf,

        /// CMUdict-format pronunciation dictionary
        #[arg(short, long, value_name = "CMUDICT")]
        dict: Option<PathBuf>,

        /// Replace whole words with their shortforms when one exists.
        /// This flag alone decides for `generate`; `[shortforms] enabled` in the
        /// config is ignored here, while the configured tiers still apply.
        #[arg(long)]
        shortforms: bool,
    },

    /// Print the outline for a single word
    Outline {
        word: String,

        /// Space-separated phonemes, e.g. "CH EH1 R"
        #[arg(short, long, value_name = "PHONEMES")]
        phonemes: Option<String>,

        /// CMUdict-format pronunciation dictionary
        #[arg(short, long, value_name = "CMUDICT")]
        dict: Option<PathBuf>,

        /// Tag each token with its initial/medial/final position
        #[arg(long)]
        positioned: bool,
    },

    /// Suggest phrase joins for a sequence of words
    Phrase {
        #[arg(required = true)]
        words: Vec<String>,
    },
}

impl Cli {
    /// 初始化日志（输出到 stderr）
    ///
    /// PITMAN_LOG 优先；否则按 -v 次数决定级别。
    pub fn init_logging(&self) {
        pitman_core::init_logging_with_default(self.log_level());
    }

    /// -v 次数对应的默认级别
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
