//! Console table for one game of Dou Dizhu, all three seats at one terminal.

use anyhow::Context;
use clap::Parser;
use landlord_table::session::{parse_command, Session, Step};
use landlord_table::view::{play_to_view, render_text, TableEvent};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "landlord")]
#[command(about = "Play a hand of Dou Dizhu at the console")]
struct Args {
    /// Deal seed; a random one is drawn when absent
    #[arg(long)]
    seed: Option<u64>,

    /// Seat of the landlord; drawn from the seed when absent
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..3))]
    landlord: Option<u8>,

    /// Emit one JSON event per line instead of the text view
    #[arg(long)]
    json: bool,

    /// Tracing filter, e.g. "debug" (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

fn init_tracing(log: Option<&str>) -> anyhow::Result<()> {
    let filter = match log {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log filter {directives:?}"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

struct Output<W: Write> {
    out: W,
    json: bool,
}

impl<W: Write> Output<W> {
    fn emit(&mut self, event: &TableEvent) -> anyhow::Result<()> {
        if self.json {
            writeln!(self.out, "{}", serde_json::to_string(event)?)?;
        } else {
            match event {
                TableEvent::Turn(snapshot) => write!(self.out, "{}", render_text(snapshot))?,
                TableEvent::Played { seat, play } => {
                    writeln!(self.out, "seat {seat} plays {}: {}", play.kind, play.cards.join(" "))?
                }
                TableEvent::Passed { seat } => writeln!(self.out, "seat {seat} passes")?,
                TableEvent::Rejected { reason } => writeln!(self.out, "rejected: {reason}")?,
                TableEvent::GameOver {
                    winner,
                    landlord_won,
                } => {
                    let side = if *landlord_won { "landlord" } else { "farmers" };
                    writeln!(self.out, "seat {winner} is out, the {side} win")?
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log.as_deref())?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut session = Session::new(seed, args.landlord.map(usize::from));
    info!(seed, landlord = session.table().landlord(), "table ready");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut output = Output {
        out: io::stdout().lock(),
        json: args.json,
    };

    while !session.is_over() {
        output.emit(&TableEvent::Turn(session.snapshot()))?;
        let Some(line) = lines.next() else {
            info!("input closed");
            return Ok(());
        };
        let line = line.context("failed to read input")?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                output.emit(&TableEvent::Rejected {
                    reason: err.to_string(),
                })?;
                continue;
            }
        };
        match session.apply(command) {
            Ok(Step::Quit) => return Ok(()),
            Ok(Step::Played { seat, outcome }) => output.emit(&TableEvent::Played {
                seat,
                play: play_to_view(&outcome.play),
            })?,
            Ok(Step::Passed { seat, .. }) => output.emit(&TableEvent::Passed { seat })?,
            Err(err) => output.emit(&TableEvent::Rejected {
                reason: err.to_string(),
            })?,
        }
    }

    if let Some(winner) = session.table().winner() {
        output.emit(&TableEvent::GameOver {
            winner,
            landlord_won: winner == session.table().landlord(),
        })?;
    }
    Ok(())
}
