#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Manor **
//! Two-player console escape room

use manor_engine::data_paths::data_path;
use manor_engine::style::GameStyle;
use manor_engine::{
    AssetAudio, CountdownTimer, Game, GameContext, InputManager, Player, TerminalDisplay, load_config, run_game,
};

use anyhow::{Context, Result};
use log::info;

use std::io::{self, IsTerminal, Write};

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading configuration...");
    let mut config = load_config(&data_path("manor.toml"));

    if !io::stdout().is_terminal() {
        info!("stdout is not a terminal; disabling the typewriter effect");
        config.type_delay_ms = 0;
        config.intro_type_delay_ms = 0;
    }

    let display = TerminalDisplay::new(config.type_delay_ms, config.intro_type_delay_ms, config.time_limit_secs);
    let audio = AssetAudio::new(&config.audio_dir);
    let ctx = GameContext::new(
        Player::new(),
        CountdownTimer::new(config.time_limit_secs),
        Box::new(display),
        Box::new(audio),
    );
    let mut game = Game::new(ctx).with_jumpscare_ms(config.jumpscare_ms);

    info!("Starting the game!");
    let mut input = InputManager::new();
    let result = run_game(&mut game, &mut input).context("while running the game");

    // leave the cursor on a clean line whatever happened
    println!();
    io::stdout().flush()?;

    match result {
        Ok(outcome) => {
            info!("game over: {outcome:?}");
            Ok(())
        },
        Err(err) => {
            eprintln!("{}", format!("{err:#}").error_style());
            std::process::exit(1);
        },
    }
}
