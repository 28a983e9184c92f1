use anyhow::{Context, Result, bail};
use blackbox_core::*;
use clap::{Parser, Subcommand};

mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Find the hidden balls by firing lasers into the box", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in game presets
    Presets,
    /// Generate a new puzzle and print its game id
    Generate {
        /// Game parameters in compact form, such as `w8h8m3M6`
        #[arg(short, long, default_value_t = GameParams::default())]
        params: GameParams,

        /// Force a seed instead of random
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Replay moves against a puzzle and show the resulting board
    Play {
        /// Game id, as printed by `generate`
        id: String,

        /// Moves to apply in order, such as `F3 T2,4 R`
        moves: Vec<String>,

        /// Keep going after a rejected move
        #[arg(short, long)]
        keep_going: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match args.command {
        Command::Presets => {
            for params in PRESETS {
                println!("{:<12} {}", params.to_string(), params.name());
            }
        }
        Command::Generate { params, seed } => {
            params.validate().context("invalid game parameters")?;
            let seed = seed.unwrap_or_else(rand::random);
            log::debug!("seed: {}", seed);

            let layout = RandomLayoutGenerator::new(seed).generate(&params);
            println!("{}:{}", params, layout.to_descriptor());
        }
        Command::Play { id, moves, keep_going } => {
            let (params, desc) = id
                .split_once(':')
                .context("game id must look like `<params>:<descriptor>`")?;
            let params: GameParams = params.parse().context("invalid game parameters")?;
            let mut engine = PlayEngine::from_descriptor(params, desc).context("invalid game id")?;

            for mv in &moves {
                match engine.apply_str(mv) {
                    Ok(next) => engine = next,
                    Err(err) if keep_going => log::warn!("Skipping move {}: {}", mv, err),
                    Err(err) => bail!("move {mv} rejected: {err}"),
                }
            }

            print!("{}", render::board(&engine));
            println!("{}", render::status_line(&engine));
        }
    }

    Ok(())
}
