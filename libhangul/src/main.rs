use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use libhangul::{
    compose_text, create_ime_engine, to_jamo_string, HangulConfig, HangulImeEngine,
    KeyEvent, KeyResult, KeyboardLayout,
};

#[derive(Parser)]
#[command(name = "libhangul")]
#[command(about = "Hangul jamo composition for on-screen keyboards")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Key layout (overrides the config file)
    #[arg(long, global = true, value_enum)]
    layout: Option<LayoutArg>,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Feed keys and print the resulting text
    Compose {
        /// Keys: `<` backspace, `^` shift, `~` mode, `|` enter
        keys: String,
    },
    /// Show the engine state after every key
    Trace {
        keys: String,
        /// Print one JSON object per key
        #[arg(long)]
        json: bool,
    },
    /// Expand syllables into compatibility jamo
    Split { text: String },
    /// Assemble a jamo string into syllables
    Join { jamo: String },
    /// Interactive REPL mode
    Repl,
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum LayoutArg {
    Jamo,
    Dubeolsik,
}

impl From<LayoutArg> for KeyboardLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Jamo => KeyboardLayout::Jamo,
            LayoutArg::Dubeolsik => KeyboardLayout::Dubeolsik,
        }
    }
}

#[derive(Serialize)]
struct TraceRow {
    key: String,
    result: &'static str,
    committed: String,
    preview: String,
    buffer: String,
}

fn parse_keys(input: &str) -> Vec<KeyEvent> {
    input
        .chars()
        .map(|ch| match ch {
            '<' => KeyEvent::Backspace,
            '^' => KeyEvent::Shift,
            '~' => KeyEvent::ToggleMode,
            '|' => KeyEvent::Enter,
            ' ' => KeyEvent::Space,
            c if c.is_ascii_digit() => KeyEvent::Digit(c as u8 - b'0'),
            c => KeyEvent::Char(c),
        })
        .collect()
}

fn key_name(key: KeyEvent) -> String {
    match key {
        KeyEvent::Char(c) => c.to_string(),
        KeyEvent::Digit(d) => d.to_string(),
        KeyEvent::Backspace => "<bs>".into(),
        KeyEvent::Space => "<space>".into(),
        KeyEvent::Enter => "<enter>".into(),
        KeyEvent::Shift => "<shift>".into(),
        KeyEvent::ToggleMode => "<mode>".into(),
        KeyEvent::Submit => "<submit>".into(),
        KeyEvent::Escape => "<esc>".into(),
    }
}

fn result_name(result: KeyResult) -> &'static str {
    match result {
        KeyResult::Handled => "handled",
        KeyResult::NotHandled => "ignored",
        KeyResult::Submitted => "submitted",
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<HangulConfig> {
    let mut config = match &cli.config {
        Some(path) => HangulConfig::load_toml(path)?,
        None => HangulConfig::default(),
    };
    if let Some(layout) = cli.layout {
        config.layout = layout.into();
    }
    debug!(layout = config.layout.name(), "configuration resolved");
    Ok(config)
}

fn run_compose(mut engine: HangulImeEngine, keys: &str) {
    for key in parse_keys(keys) {
        engine.process_key(key);
    }
    println!("{}", engine.display_text());
}

fn run_trace(mut engine: HangulImeEngine, keys: &str, json: bool) -> anyhow::Result<()> {
    if !json {
        println!("{:<8} {:<10} {:<10} {:<8} buffer", "key", "result", "committed", "preview");
    }
    for key in parse_keys(keys) {
        let result = engine.process_key(key);
        let ctx = engine.context();
        let row = TraceRow {
            key: key_name(key),
            result: result_name(result),
            committed: ctx.commit_text.clone(),
            preview: ctx.preedit_text.clone(),
            buffer: ctx.buffer_text.clone(),
        };
        if json {
            println!("{}", serde_json::to_string(&row).context("serialize trace row")?);
        } else {
            println!(
                "{:<8} {:<10} {:<10} {:<8} {:?}",
                row.key, row.result, row.committed, row.preview, row.buffer
            );
        }
    }
    Ok(())
}

fn run_repl(mut engine: HangulImeEngine) -> anyhow::Result<()> {
    println!("libhangul REPL - type keys and press Enter");
    println!("`<` backspace, `^` shift, `~` mode, `|` enter; :reset clears, :submit prints the text");
    println!("Ctrl-D to exit.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let raw = line.context("read stdin")?;
        match raw.trim_end_matches(['\r', '\n']) {
            ":reset" => engine.reset(),
            ":submit" => {
                if engine.process_key(KeyEvent::Submit) == KeyResult::Submitted {
                    println!("submitted: {}", engine.context().submit_text);
                    engine.reset();
                } else {
                    println!("(nothing to submit)");
                }
            }
            keys => {
                for key in parse_keys(keys) {
                    engine.process_key(key);
                }
            }
        }
        let ctx = engine.context();
        println!("[{}] {}[{}]", ctx.auxiliary_text, ctx.buffer_text, ctx.preedit_text);
        stdout.flush().context("flush stdout")?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(layout = config.layout.name(), "libhangul starting");

    match cli.command {
        Some(Commands::Compose { keys }) => run_compose(create_ime_engine(config), &keys),
        Some(Commands::Trace { keys, json }) => run_trace(create_ime_engine(config), &keys, json)?,
        Some(Commands::Split { text }) => println!("{}", to_jamo_string(&text)),
        Some(Commands::Join { jamo }) => println!("{}", compose_text(&jamo)),
        Some(Commands::Repl) | None => run_repl(create_ime_engine(config))?,
    }
    Ok(())
}
