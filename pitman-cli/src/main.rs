//! Pitman CLI - 词表批量转写与单词查询

mod batch;
mod cli;
mod dict;

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use pitman_core::{EngineConfig, Phoneme, StenoEngine};

use cli::{Cli, Command};
use dict::PronunciationDict;

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Generate {
            wordlist,
            out,
            dict,
            shortforms,
        } => {
            let config = generate_config(config, shortforms);
            let engine = StenoEngine::new(&config).context("failed to build rule tables")?;
            let dict = load_dict(dict.as_deref())?;

            let count = batch::run_batch(&engine, &dict, &wordlist, &out)?;
            println!("Wrote {} records to {}", count, out.display());
        }
        Command::Outline {
            word,
            phonemes,
            dict,
            positioned,
        } => {
            let engine = StenoEngine::new(&config).context("failed to build rule tables")?;
            let tokens: Vec<String> = match phonemes {
                Some(list) => list.split_whitespace().map(str::to_string).collect(),
                None => {
                    let dict = load_dict(dict.as_deref())?;
                    dict.lookup(&word).map(<[String]>::to_vec).unwrap_or_default()
                }
            };

            if tokens.is_empty() {
                // 没有发音：与批处理相同的字母回退
                let fallback = batch::fallback_outline_tokens(&engine, &word);
                println!("{}: {}", word, fallback.join(" "));
                println!("(no pronunciation, letter fallback)");
            } else {
                print_outline(&engine, &word, &tokens, positioned);
            }
        }
        Command::Phrase { words } => {
            let engine = StenoEngine::new(&config).context("failed to build rule tables")?;
            let joins = engine.suggest_joins(&words);
            if joins.is_empty() {
                println!("No phrase joins");
            }
            for join in joins {
                println!("{:<20} {:<16} {}", join.phrase(), join.join_type.as_str(), join.rationale);
            }
        }
    }

    Ok(())
}

/// `generate` 的引擎配置：是否启用缩写只由 --shortforms 决定
fn generate_config(mut config: EngineConfig, shortforms: bool) -> EngineConfig {
    config.shortforms.enabled = shortforms;
    config
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => EngineConfig::load().context("failed to load default config"),
    }
}

fn load_dict(path: Option<&Path>) -> Result<PronunciationDict> {
    match path {
        Some(path) => PronunciationDict::load(path),
        None => Ok(PronunciationDict::default()),
    }
}

fn print_outline(engine: &StenoEngine, word: &str, tokens: &[String], positioned: bool) {
    let resolved = engine.resolve_word(word, tokens);
    println!("{}: {}", resolved.word, resolved.outline.token_ids().join(" "));
    println!("line position: {}", resolved.outline.line_position);

    if positioned {
        let phonemes: Vec<Phoneme> = tokens.iter().map(|t| Phoneme::from(t.as_str())).collect();
        let tagged: Vec<String> = engine
            .assemble_positioned(&phonemes)
            .iter()
            .map(|t| t.token_id())
            .collect();
        println!("positioned: {}", tagged.join(" "));
    }
}
