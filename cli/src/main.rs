mod input;
mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use mine_merge_engine::config::{ConfigManager, GameConfig, Theme, Validate};
use mine_merge_engine::game::{GameController, SessionRng};
use mine_merge_engine::{log, logger};

use input::{HELP_TEXT, InputCommand, parse_input};
use render::render;

const DEFAULT_CONFIG_FILE: &str = "mine_merge_config.yaml";

#[derive(Parser)]
#[command(name = "mine_merge", about = "Merge blocks in your terminal")]
struct Args {
    /// YAML settings file; defaults are used when it does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    grid_size: Option<usize>,
    #[arg(long)]
    winning_tile: Option<u32>,
    #[arg(long)]
    theme: Option<Theme>,
    /// Write the effective settings back to the config file.
    #[arg(long)]
    save_config: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_overrides(&self, mut config: GameConfig) -> GameConfig {
        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }
        if let Some(winning_tile) = self.winning_tile {
            config.winning_tile = winning_tile;
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = args.use_log_prefix.then(|| "MineMerge".to_string());
    logger::init_logger(prefix);

    let mut config_manager = ConfigManager::<_, GameConfig>::from_yaml_file(&args.config);
    let config = args.apply_overrides(config_manager.get_config()?);
    config.validate()?;
    log!("Loaded settings from {}: {:?}", args.config.display(), config);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Settings saved to {}", args.config.display());
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed {}", rng.seed());

    let mut controller = GameController::new(config, rng)?;
    run(&mut controller, io::stdin().lock(), io::stdout().lock())?;

    log!(
        "Session ended with score {}, best {}",
        controller.score(),
        controller.best_score()
    );
    Ok(())
}

fn run(
    controller: &mut GameController,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(output, "{}", HELP_TEXT)?;
    write!(output, "{}", render(controller))?;

    for line in input.lines() {
        let line = line?;
        match parse_input(&line) {
            Some(InputCommand::Game(command)) => {
                if controller.handle(command)? {
                    write!(output, "{}", render(controller))?;
                } else {
                    writeln!(output, "Nothing happened.")?;
                }
            }
            Some(InputCommand::Share) => writeln!(output, "{}", controller.share_summary())?,
            Some(InputCommand::Help) => writeln!(output, "{}", HELP_TEXT)?,
            Some(InputCommand::Quit) => break,
            None => writeln!(output, "Unknown command '{}', type h for help.", line.trim())?,
        }
        output.flush()?;
    }

    Ok(())
}
