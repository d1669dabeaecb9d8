use std::{
    io::{self, Write as _},
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use anyhow::Context as _;
use asciigate::{
    AnimationSequencer, EDITORIAL_LINES, GateConfig, Playback, Rng64, StaticBoxComposer,
};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "asciigate", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the finished gate for a topic (or every animation frame).
    Art(ArtArgs),
    /// Print fixed lines inside a static gate.
    Static(StaticArgs),
    /// Replay the opening animation in the terminal.
    Play(PlayArgs),
}

#[derive(Args, Debug)]
struct LayoutArgs {
    /// Viewport width in pixels; omit for the desktop layout.
    #[arg(long)]
    width: Option<u32>,

    /// JSON gate config overriding the default breakpoint and sizes.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ArtArgs {
    /// Label embedded in the gate.
    #[arg(long)]
    topic: String,

    #[command(flatten)]
    layout: LayoutArgs,

    /// Seed for the noise phase; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Print every frame instead of only the finished gate.
    #[arg(long, default_value_t = false)]
    frames: bool,

    /// Emit the whole result as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct StaticArgs {
    /// Line to place in the box (repeatable); defaults to the editorial caption.
    #[arg(long = "line")]
    lines: Vec<String>,

    #[command(flatten)]
    layout: LayoutArgs,

    /// Emit the rows as a JSON array.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Label embedded in the gate.
    #[arg(long)]
    topic: String,

    #[command(flatten)]
    layout: LayoutArgs,

    /// Seed for the noise phase; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between frames.
    #[arg(long, default_value_t = 120)]
    interval_ms: u64,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Art(args) => cmd_art(args),
        Command::Static(args) => cmd_static(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<GateConfig> {
    match path {
        Some(p) => GateConfig::from_path(p)
            .with_context(|| format!("load gate config '{}'", p.display())),
        None => Ok(GateConfig::default()),
    }
}

fn make_rng(seed: Option<u64>) -> Rng64 {
    seed.map_or_else(Rng64::from_entropy, Rng64::new)
}

fn cmd_art(args: ArtArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.layout.config.as_deref())?;
    let dims = cfg
        .dimensions(args.layout.width)
        .context("resolve gate dimensions")?;
    let art = AnimationSequencer::new(dims).generate(&args.topic, &mut make_rng(args.seed));

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &art).context("serialize ascii art")?;
        writeln!(out)?;
    } else if args.frames {
        for frame in &art.frames {
            writeln!(out, "{frame}\n")?;
        }
    } else {
        for line in &art.final_art {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

fn cmd_static(args: StaticArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.layout.config.as_deref())?;
    let dims = cfg
        .dimensions(args.layout.width)
        .context("resolve gate dimensions")?;
    let composer = StaticBoxComposer::new(dims);
    let rows = if args.lines.is_empty() {
        composer.compose(&EDITORIAL_LINES)
    } else {
        composer.compose(&args.lines)
    };

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &rows).context("serialize static box")?;
        writeln!(out)?;
    } else {
        for line in &rows {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.layout.config.as_deref())?;
    let dims = cfg
        .dimensions(args.layout.width)
        .context("resolve gate dimensions")?;
    let art = AnimationSequencer::new(dims).generate(&args.topic, &mut make_rng(args.seed));

    let interval = Duration::from_millis(args.interval_ms);
    let playback = Playback::new(&art.frames).with_interval(interval);
    let poll = (interval / 4).max(Duration::from_millis(1));

    let mut out = io::stdout().lock();
    let start = Instant::now();
    let mut shown = None;
    loop {
        let elapsed = start.elapsed();
        let Some(idx) = playback.frame_index_at(elapsed) else {
            break;
        };
        if shown != Some(idx) {
            // Clear screen, cursor home.
            write!(out, "\x1b[2J\x1b[H{}", art.frames[idx])?;
            out.flush()?;
            shown = Some(idx);
        }
        if playback.is_finished(elapsed) {
            break;
        }
        std::thread::sleep(poll);
    }
    writeln!(out)?;
    Ok(())
}
