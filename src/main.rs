//! Flappy headless host
//!
//! Runs the game scene with the autopilot at a fixed frame rate, records
//! finished rounds in the score table and prints a summary.
//!
//! Usage:
//!   RUST_LOG=info cargo run --release -- --seed 7 --rounds 5

#[cfg(not(target_arch = "wasm32"))]
use anyhow::Context;
#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser)]
#[command(name = "flappy")]
#[command(about = "Run Flappy headless with the autopilot playing")]
struct Args {
    /// Pipe-gap RNG seed
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Stop after this many simulated seconds
    #[arg(long, default_value_t = 120.0)]
    seconds: f32,

    /// Stop after this many finished rounds
    #[arg(long, default_value_t = 3)]
    rounds: u32,

    /// Frame delta in seconds (clamped to the engine maximum)
    #[arg(long, default_value_t = flappy::consts::FRAME_DT)]
    frame_dt: f32,

    /// Score table file
    #[arg(long, default_value = "scores.json")]
    scores: PathBuf,

    /// Settings file (defaults if absent)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Tuning overrides file
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Player name (overrides the settings file)
    #[arg(long)]
    player: Option<String>,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use flappy::assets::AssetTable;
    use flappy::audio::{AudioManager, LogBackend};
    use flappy::consts::MAX_FRAME_DT;
    use flappy::renderer::DrawList;
    use flappy::scene::{GameContext, GameScene, SceneManager};
    use flappy::sim::GameState;
    use flappy::{HighScores, PlayerRecord, ScoreStore, Settings, Tuning};

    env_logger::init();
    let args = Args::parse();
    log::info!("Flappy (headless) starting with seed {}", args.seed);

    let settings = match &args.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let tuning = match &args.tuning {
        Some(path) => {
            Tuning::load(path).with_context(|| format!("loading tuning from {}", path.display()))?
        }
        None => Tuning::default(),
    };
    let player = PlayerRecord::new(args.player.as_deref().unwrap_or(&settings.player_name))?;
    let name = player.name.clone();

    let scores = HighScores::load(&args.scores)
        .with_context(|| format!("loading scores from {}", args.scores.display()))?;
    let best_before = scores.best_score(&name);

    let ctx = GameContext {
        audio: Box::new(AudioManager::from_settings(
            Box::new(LogBackend::new()),
            &settings,
        )),
        scores: Box::new(scores),
        player,
    };
    let assets = AssetTable::with_defaults("assets");
    let mut scene = GameScene::new(
        GameState::with_tuning(args.seed, tuning),
        &assets,
        ctx,
        &settings,
    )?;
    scene.set_demo(true);
    let mut manager = SceneManager::new(Box::new(scene));

    let dt = args.frame_dt.clamp(0.0, MAX_FRAME_DT);
    if dt <= 0.0 {
        anyhow::bail!("frame delta must be positive");
    }

    let mut frames: u64 = 0;
    let mut vertices: usize = 0;
    let mut elapsed = 0.0;
    let mut list = DrawList::new();
    while elapsed < args.seconds {
        manager.update(dt);
        list.clear();
        manager.draw(&mut list);
        vertices += list.to_vertices().len();
        frames += 1;
        elapsed += dt;

        let finished = manager
            .current()
            .as_any()
            .downcast_ref::<GameScene>()
            .map(|game| game.rounds_finished())
            .unwrap_or(0);
        if finished >= args.rounds {
            break;
        }
    }

    let game = manager
        .current()
        .as_any()
        .downcast_ref::<GameScene>()
        .context("game scene was replaced")?;
    let best = game.context().scores.best_score(&name);

    println!();
    println!("=== RUN RESULTS ===");
    println!("  Seed:       {}", args.seed);
    println!("  Player:     {}", name);
    println!("  Rounds:     {}", game.rounds_finished());
    println!("  Last score: {}", game.context().player.last_score);
    println!("  Best:       {} (was {})", best, best_before);
    println!("  Frames:     {} ({:.1}s simulated)", frames, elapsed);
    println!("  Vertices:   {:.0}/frame", vertices as f64 / frames.max(1) as f64);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host embeds the library directly
}
