//! Deterministic, timerless harness: applies adjustments and a given
//! number of tick firings to one widget and prints the outcome.

use clap::{Args, ValueEnum};

use watchdeck_core::{Config, Countdown, Stopwatch, Watch};

#[derive(Clone, Copy, ValueEnum)]
pub enum SimWatch {
    Stopwatch,
    Countdown,
}

#[derive(Args)]
pub struct SimulateArgs {
    /// Widget to drive
    #[arg(long, value_enum, default_value = "stopwatch")]
    pub watch: SimWatch,
    /// Number of tick firings after start
    #[arg(long, default_value = "0")]
    pub ticks: u64,
    /// + presses applied before starting (countdown only)
    #[arg(long, default_value = "0")]
    pub plus: u32,
    /// - presses applied before starting (countdown only)
    #[arg(long, default_value = "0")]
    pub minus: u32,
}

pub fn run(args: SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.watch {
        SimWatch::Stopwatch => simulate(Stopwatch::new(), &args),
        SimWatch::Countdown => {
            let config = Config::load_or_default();
            let mut watch = Countdown::with_initial(
                config.countdown.initial_secs(),
                config.countdown.adjust_step_secs(),
            );
            for _ in 0..args.plus {
                watch.increment();
            }
            for _ in 0..args.minus {
                watch.decrement();
            }
            simulate(watch, &args)
        }
    }
}

fn simulate<W: Watch>(mut watch: W, args: &SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = None;
    if args.ticks > 0 {
        // May be a guarded no-op (empty countdown); the firings below
        // are then inert, which is exactly what the snapshot shows.
        let _ = watch.start();
    }
    for _ in 0..args.ticks {
        if let Some(event) = watch.tick() {
            terminal = Some(event);
            break;
        }
    }

    println!("{}", serde_json::to_string_pretty(&watch.snapshot())?);
    if let Some(event) = terminal {
        println!("{}", serde_json::to_string_pretty(&event)?);
    }
    Ok(())
}
