use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

mod command;
mod dispatch;

use command::parse;
use dispatch::{dispatch, Reply};
use metro_network::MetroNetwork;

#[derive(Parser, Debug)]
#[command(
    name = "metro-shell",
    author,
    version,
    about = "Query fares on an in-memory metro network",
    long_about = "Reads one command per line and applies it to an in-memory metro network.\n\n\
                  Stations are joined by weighted connections; the fare between two \
                  stations is twice the length of the shortest path. Type 'help' for \
                  the list of commands."
)]
struct Args {
    /// Read commands from this file instead of standard input
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Start with no stations instead of the A-B-C-D demo network
    #[arg(long)]
    empty: bool,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    let mut network = if args.empty {
        MetroNetwork::new()
    } else {
        MetroNetwork::with_demo_network().context("Failed to build demo network")?
    };
    log::info!(
        "Metro network ready: {} stations, {} connections",
        network.station_count(),
        network.connection_count()
    );

    let interactive = args.script.is_none();
    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    run(&mut network, input, interactive)
}

fn run(network: &mut MetroNetwork, input: Box<dyn BufRead>, interactive: bool) -> Result<()> {
    let mut stdout = io::stdout();

    prompt(&mut stdout, interactive)?;
    for line in input.lines() {
        let line = line.context("Failed to read command")?;

        match parse(&line) {
            Ok(Some(command)) => match dispatch(network, command) {
                Reply::Output(lines) => {
                    for out in lines {
                        writeln!(stdout, "{}", out)?;
                    }
                }
                Reply::Failed(err) => writeln!(stdout, "error: {}", err)?,
                Reply::Exit => {
                    writeln!(stdout, "Exiting the program.")?;
                    return Ok(());
                }
            },
            Ok(None) => {}
            Err(err) => writeln!(stdout, "error: {}", err)?,
        }

        prompt(&mut stdout, interactive)?;
    }

    log::debug!("input closed");
    Ok(())
}

fn prompt(stdout: &mut io::Stdout, interactive: bool) -> Result<()> {
    if interactive {
        write!(stdout, "metro> ")?;
        stdout.flush()?;
    }
    Ok(())
}
