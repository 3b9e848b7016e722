//! Sobriety Timer - a single-screen elapsed-time counter
//!
//! This is the main entry point for the sobriety-timer application.

use std::future::pending;
use tokio::{io::BufReader, time::sleep};
use tracing::{debug, info};

use sobriety_timer::{
    config::Config,
    display::{DisplaySink, JsonLabel, TerminalLabel},
    screen::TimerScreen,
    tasks::{run_screen, start_trigger_task, ScreenHandle},
    utils::{register_shutdown_signals, shutdown_signal},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so the label owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(format!("sobriety_timer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    info!("Starting sobriety-timer v1.0.0");
    info!("Configuration: interval={:?}, target={:?}, autostart={}, json={}",
          config.tick_interval(), config.target, config.autostart, config.json);

    // Without handlers the screen could never be torn down on Ctrl-C
    let signals = register_shutdown_signals().map_err(|e| anyhow::anyhow!(e))?;

    let display: Box<dyn DisplaySink + Send> = if config.json {
        Box::new(JsonLabel::stdout())
    } else {
        Box::new(TerminalLabel::stdout())
    };

    let screen = TimerScreen::create(display, config.tick_interval())
        .with_target(config.target);
    let (handle, events) = ScreenHandle::channel();

    if config.autostart {
        handle.press_start().map_err(|e| anyhow::anyhow!(e))?;
    }

    // Start button on stdin
    let trigger = tokio::spawn(start_trigger_task(
        BufReader::new(tokio::io::stdin()),
        handle.clone(),
    ));

    // Teardown on signal or after --run-for
    let teardown = handle.clone();
    let run_for = config.run_for();
    tokio::spawn(async move {
        tokio::select! {
            _ = shutdown_signal(signals) => {}
            _ = async {
                match run_for {
                    Some(duration) => sleep(duration).await,
                    None => pending::<()>().await,
                }
            } => {
                info!("Run time elapsed");
            }
        }

        // The loop may already have ended on its target
        if let Err(e) = teardown.destroy() {
            debug!("{}", e);
        }
    });
    drop(handle);

    let screen = run_screen(screen, events).await;
    trigger.abort();

    let state = screen.state();
    info!("Final state: elapsed={} ({}s), running={}, completed={}",
          state.display_text(), state.elapsed_seconds, state.running, screen.is_completed());

    // A blocking stdin read would otherwise hold the runtime open until Enter.
    std::process::exit(0)
}
