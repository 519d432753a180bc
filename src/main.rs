//! Block Breaker entry point
//!
//! The browser build is driven from JavaScript through `block_breaker::web`.
//! Natively this runs a headless session with a pointer that chases the
//! ball, which is handy for checking configs and logging.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;

    use block_breaker::sim::{BouncePolicy, Engine, EngineConfig, Snapshot, SpawnPolicy};
    use block_breaker::SessionState;

    #[derive(Parser, Debug)]
    #[command(name = "block-breaker")]
    #[command(about = "Run a headless block-breaker session with a ball-chasing pointer")]
    struct Args {
        /// JSON engine config (defaults to the classic 410x400 board)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for the random spawn policy
        #[arg(short, long)]
        seed: Option<u64>,

        /// Spawn the ball at a random position
        #[arg(long)]
        random_spawn: bool,

        /// Use the angled paddle bounce
        #[arg(long)]
        angled: bool,

        /// Stop after this many frames if the session is still running
        #[arg(short, long, default_value_t = 20_000)]
        frames: u64,

        /// Pointer lag in frames; 0 tracks perfectly
        #[arg(long, default_value_t = 0)]
        lag: usize,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    }

    /// Where a player would put the pointer: over the ball
    fn chase(snapshot: &Snapshot) -> f32 {
        snapshot.ball.x
    }

    pub fn run() -> Result<()> {
        let args = Args::parse();

        let mut config = match &args.config {
            Some(path) => EngineConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => EngineConfig::default(),
        };
        if args.seed.is_some() {
            config.seed = args.seed;
        }
        if args.random_spawn {
            config.spawn_policy = SpawnPolicy::Random;
        }
        if args.angled {
            config.bounce_policy = BouncePolicy::Angled;
        }

        let mut engine = Engine::new(config).context("invalid engine config")?;
        let mut pointer_trail = std::collections::VecDeque::with_capacity(args.lag + 1);

        while engine.state() == SessionState::Playing && engine.frame() < args.frames {
            pointer_trail.push_back(chase(&engine.snapshot()));
            if pointer_trail.len() > args.lag {
                if let Some(x) = pointer_trail.pop_front() {
                    engine.set_paddle_target(x);
                }
            }
            engine.advance_frame();
        }

        let snapshot = engine.snapshot();
        let game = engine.game_state();
        let destroyed = game.destroyed_count();
        log::info!(
            "Finished: {:?} after {} frames, {} destroyed, {} remaining ({} spawn, {} bounce)",
            snapshot.state,
            snapshot.frame,
            destroyed,
            game.remaining_blocks(),
            engine.config().spawn_policy.as_str(),
            engine.config().bounce_policy.as_str()
        );

        if args.json {
            println!("{}", snapshot.to_json()?);
        } else {
            println!(
                "{} after {} frames ({} of {} blocks destroyed, seed {})",
                snapshot.state.as_str(),
                snapshot.frame,
                destroyed,
                snapshot.blocks.len(),
                engine.seed()
            );
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Block Breaker (headless) starting...");
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is block_breaker::web::wasm_start
}
