use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use quest_core::explore::{GameMode, LineSource, Session};
use quest_core::scenario::Scenario;
use quest_core::verdict;

#[derive(Parser, Debug)]
#[command(name = "Detective Quest")]
#[command(about = "Explore a mansao, colete pistas e acuse o culpado", long_about = None)]
struct Args {
    /// Game variant to play
    #[arg(short, long, value_enum, default_value_t = Mode::Investigate)]
    mode: Mode,

    /// JSON scenario file replacing the built-in mansion
    #[arg(long)]
    scenario: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Walk the mansion; the stroll ends at the first dead end
    Tour,
    /// Collect every clue and review them in alphabetical order
    Collect,
    /// Collect leads, then accuse a suspect
    Investigate,
}

impl From<Mode> for GameMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Tour => GameMode::Tour,
            Mode::Collect => GameMode::Collect,
            Mode::Investigate => GameMode::Investigate,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let scenario = match &args.scenario {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read scenario file {}", path.display()))?;
            Scenario::from_json(&text).context("invalid scenario file")?
        }
        None => match args.mode {
            Mode::Tour => Scenario::mansion_tour(),
            Mode::Collect => Scenario::mansion_collect(),
            Mode::Investigate => Scenario::mansion_investigate(),
        },
    };

    println!("=======================================");
    println!("        Bem-vindo ao Detective Quest!");
    println!("=======================================");
    match args.mode {
        Mode::Tour => println!("Explore a mansao e desvende seus misterios."),
        Mode::Collect => println!("Explore a mansao, colete pistas e desvende o misterio."),
        Mode::Investigate => println!("Explore a mansao, colete pistas, e descubra o culpado."),
    }

    let stdin = io::stdin();
    let mut input = LineSource::new(stdin.lock());
    let mut out = io::stdout();

    let mut session = Session::new(&scenario, args.mode.into());
    session.run(&mut input, &mut out)?;

    match args.mode {
        Mode::Tour => {
            println!("=======================================");
        }
        Mode::Collect => {
            println!("\n=======================================");
            println!("        Fim da exploracao da mansao.");
            println!("=======================================");
            println!("\nPistas coletadas em ordem alfabetica:");
            if session.clues().is_empty() {
                println!("Nenhuma pista foi coletada.");
            } else {
                for clue in session.clues() {
                    println!("- {clue}");
                }
            }
        }
        Mode::Investigate => {
            let (clues, lookup) = session.into_evidence();
            verdict::judgment(&clues, &lookup, &scenario.suspects, &mut input, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
