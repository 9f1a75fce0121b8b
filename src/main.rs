//! Zombie Climb entry point
//!
//! Headless native host: drives the simulation at a fixed 60 Hz, lets the
//! autopilot press keys, and prints the final snapshot as JSON. A windowed
//! host would replace the autopilot with real key polling and draw
//! `hud::lines` plus the boxes from each snapshot.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    use zombie_climb::consts::SIM_DT;
    use zombie_climb::platform::{FixedStep, InputEvent};
    use zombie_climb::sim::{Flow, Mode, ModeController, autopilot};
    use zombie_climb::{Settings, hud};

    env_logger::init();

    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(path.as_deref());
    let seed = settings.resolve_seed();
    log::info!("Zombie Climb (headless) starting with seed {}", seed);

    let mut game = ModeController::seeded(settings.screen, seed);
    let mut pending: Vec<InputEvent> = settings
        .start_key()
        .map(InputEvent::KeyDown)
        .into_iter()
        .collect();

    let mut scheduler = FixedStep::default();
    let deadline = Instant::now() + Duration::from_secs(u64::from(settings.demo_seconds));
    let mut last_frame = Instant::now();
    let mut ticks: u64 = 0;

    'run: while Instant::now() < deadline {
        let now = Instant::now();
        let substeps = scheduler.advance((now - last_frame).as_secs_f32());
        last_frame = now;

        for _ in 0..substeps {
            if settings.autopilot {
                let key = game
                    .state()
                    .and_then(|state| autopilot::suggest(game.mode(), state, &game.screen()));
                pending.extend(key.map(InputEvent::KeyDown));
            }

            if game.tick(&pending) == Flow::Quit {
                break 'run;
            }
            pending.clear();
            ticks += 1;

            if let Mode::Message { text, .. } = game.mode() {
                log::info!("Session ended after {} ticks: {}", ticks, text);
                break 'run;
            }
            if ticks % 60 == 0 {
                for line in hud::lines(&game.snapshot()) {
                    log::info!("{}", line.text);
                }
            }
        }

        std::thread::sleep(Duration::from_secs_f32(SIM_DT / 2.0));
    }

    match serde_json::to_string_pretty(&game.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(err) => log::error!("Could not serialize final snapshot: {}", err),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host embeds the library directly
}
