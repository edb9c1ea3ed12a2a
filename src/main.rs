//! Tile Chase headless runner
//!
//! Runs the simulation for a fixed number of ticks with a scripted input
//! cycle and prints a JSON summary. Useful for soak-testing levels and tuning.
//!
//! Usage: tile-chase [--map FILE | --level NAME] [--tuning FILE] [--seed N] [--ticks N]

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use serde::Serialize;

    use tile_chase::sim::maps;
    use tile_chase::sim::{Direction, GameEvent, TickInput, TileMap};
    use tile_chase::{Session, Tuning};

    const DEFAULT_TICKS: u64 = 60 * 60;
    const DEFAULT_SEED: u64 = 12345;
    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Ticks each scripted direction is held
    const HOLD_TICKS: u64 = 45;

    #[derive(Debug, Default)]
    struct Args {
        map: Option<String>,
        level: Option<String>,
        tuning: Option<String>,
        seed: Option<u64>,
        ticks: Option<u64>,
    }

    impl Args {
        fn parse() -> Result<Self, String> {
            let mut args = Args::default();
            let mut iter = std::env::args().skip(1);
            while let Some(flag) = iter.next() {
                let mut value = || iter.next().ok_or(format!("missing value for {flag}"));
                match flag.as_str() {
                    "--map" => args.map = Some(value()?),
                    "--level" => args.level = Some(value()?),
                    "--tuning" => args.tuning = Some(value()?),
                    "--seed" => {
                        let v = value()?;
                        args.seed = Some(v.parse().map_err(|_| format!("bad seed: {v}"))?);
                    }
                    "--ticks" => {
                        let v = value()?;
                        let ticks = v.parse().map_err(|_| format!("bad tick count: {v}"))?;
                        args.ticks = Some(ticks);
                    }
                    other => return Err(format!("unknown argument: {other}")),
                }
            }
            Ok(args)
        }
    }

    #[derive(Debug, Serialize)]
    pub struct Summary {
        seed: u64,
        ticks: u64,
        simulated_ticks: u64,
        simulated_secs: f32,
        lives_lost: u32,
        game_overs: u32,
        pursuits: u32,
        final_lives: u32,
        final_phase: String,
        player_pos: [f32; 2],
    }

    /// Cycle through the four directions, confirming whenever the run is over
    fn scripted_input(tick: u64, game_over: bool) -> TickInput {
        let dir = Direction::ALL[((tick / HOLD_TICKS) % 4) as usize];
        TickInput {
            confirm: game_over,
            ..TickInput::holding(dir)
        }
    }

    pub fn run() -> Result<Summary, Box<dyn std::error::Error>> {
        let args = Args::parse()?;

        let tuning = match &args.tuning {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };

        let map = match (&args.map, &args.level) {
            (Some(path), _) => TileMap::load(path, tuning.tile_size)?,
            (None, Some(name)) => {
                let pattern = maps::by_name(name)
                    .ok_or_else(|| format!("no built-in level named {name}"))?;
                TileMap::parse(pattern, tuning.tile_size)?
            }
            (None, None) => TileMap::parse(maps::DEFAULT_LEVEL, tuning.tile_size)?,
        };

        let seed = args.seed.unwrap_or(DEFAULT_SEED);
        let ticks = args.ticks.unwrap_or(DEFAULT_TICKS);
        let mut session = Session::new(map, tuning, seed);

        let (mut lives_lost, mut game_overs, mut pursuits) = (0, 0, 0);
        for t in 0..ticks {
            let input = scripted_input(t, session.state().is_game_over());
            session.step(&input, FRAME_DT);

            for event in session.events() {
                match event {
                    GameEvent::LifeLost { lives_left } => {
                        lives_lost += 1;
                        log::info!("tick {t}: life lost, {lives_left} left");
                    }
                    GameEvent::GameOver => {
                        game_overs += 1;
                        log::info!("tick {t}: game over");
                    }
                    GameEvent::PursuitStarted { enemy, dir } => {
                        pursuits += 1;
                        log::debug!("tick {t}: enemy {enemy} chasing {dir:?}");
                    }
                    other => log::debug!("tick {t}: {other:?}"),
                }
            }
        }

        let state = session.state();
        Ok(Summary {
            seed,
            ticks,
            simulated_ticks: state.time_ticks,
            simulated_secs: state.elapsed_secs(FRAME_DT),
            lives_lost,
            game_overs,
            pursuits,
            final_lives: state.player.lives,
            final_phase: format!("{:?}", state.phase),
            player_pos: state.player.pos().to_array(),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::init();
    log::info!("Tile Chase (headless) starting...");

    match headless::run().and_then(|summary| Ok(serde_json::to_string_pretty(&summary)?)) {
        Ok(json) => {
            println!("{json}");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives `Session` directly; nothing to run here
}
