use watchdeck_core::{Config, Countdown, Stopwatch, Watch};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let stopwatch = Stopwatch::new();
    let countdown = Countdown::with_initial(
        config.countdown.initial_secs(),
        config.countdown.adjust_step_secs(),
    );

    let snapshots = vec![stopwatch.snapshot(), countdown.snapshot()];
    println!("{}", serde_json::to_string_pretty(&snapshots)?);
    Ok(())
}
