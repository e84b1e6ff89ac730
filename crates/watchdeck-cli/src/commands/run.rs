//! Interactive panel session: both widgets side by side, line commands
//! on stdin, redraw on every widget event.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;

use watchdeck_core::{Config, Event, Panel, Watch, WatchController};

const HELP: &str = "\
commands:
  start|stop|reset stopwatch|countdown
  +  -   adjust the countdown by one step
  show   redraw the panel
  quit";

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(session())
}

async fn session() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let panel = Panel::new(&config);
    let mut stopwatch_events = panel.stopwatch().subscribe();
    let mut countdown_events = panel.countdown().subscribe();

    tracing::info!("interactive session started");
    println!("{HELP}");
    println!("{}", panel.render().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        if !handle_command(&panel, line.trim()).await {
                            break;
                        }
                    }
                    None => break, // EOF
                }
            }
            event = stopwatch_events.recv() => redraw(&panel, event).await,
            event = countdown_events.recv() => redraw(&panel, event).await,
        }
    }
    Ok(())
}

async fn redraw(panel: &Panel, event: Result<Event, RecvError>) {
    match event {
        Ok(Event::CountdownFinished { .. }) => {
            println!("countdown finished");
            println!("{}", panel.render().await);
        }
        Ok(_) | Err(RecvError::Lagged(_)) => println!("{}", panel.render().await),
        Err(RecvError::Closed) => {}
    }
}

/// Returns `false` when the session should end.
async fn handle_command(panel: &Panel, line: &str) -> bool {
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("");

    let applied = match (verb, target) {
        ("" | "show" | "status", _) => {
            println!("{}", panel.render().await);
            return true;
        }
        ("help" | "?", _) => {
            println!("{HELP}");
            return true;
        }
        ("quit" | "q" | "exit", _) => return false,
        ("+", _) => panel.countdown().increment().await,
        ("-", _) => panel.countdown().decrement().await,
        ("start" | "stop" | "reset", "stopwatch" | "sw") => apply(panel.stopwatch(), verb).await,
        ("start" | "stop" | "reset", "countdown" | "cd") => apply(panel.countdown(), verb).await,
        _ => {
            println!("unrecognized command: {line} (try 'help')");
            return true;
        }
    };

    if applied.is_none() {
        // Guarded no-op, e.g. start while running; nothing changed.
        println!("(not permitted now: {line})");
    }
    true
}

async fn apply<W: Watch>(controller: &WatchController<W>, verb: &str) -> Option<Event> {
    match verb {
        "start" => controller.start().await,
        "stop" => controller.stop().await,
        "reset" => controller.reset().await,
        _ => None,
    }
}
