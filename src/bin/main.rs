use std::{
    env,
    io::{self, IsTerminal},
    process,
};

use anyhow::{Context, Result, bail};
use embassy_executor::Spawner;
use embassy_time::{Instant, Timer};
use env_logger::Env;
use log::{error, info};
use wordpace_core::{
    app::{PacerApp, PacerConfig, TickResult},
    input::{InputProvider, MockInput},
    playback::PlaybackState,
};

use keyboard::KeyboardInput;
use plain::PlainRenderer;
use render::ScreenRenderer;
use terminal::TerminalSession;

#[path = "main/cli.rs"]
mod cli;
#[path = "main/keyboard.rs"]
mod keyboard;
#[path = "main/plain.rs"]
mod plain;
#[path = "main/render.rs"]
mod render;
#[path = "main/source.rs"]
mod source;
#[path = "main/terminal.rs"]
mod terminal;

const TITLE: &str = "Wordpace";
const INPUT_POLL_INTERVAL_MS: u64 = 15;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(err) = run().await {
        error!("{err:?}");
        eprintln!("wordpace: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let options = cli::parse_args(env::args().skip(1))?;
    if options.help {
        println!("{}", cli::USAGE);
        return Ok(());
    }

    let text = source::load_text(&options.source)?;
    info!(
        "timing {:?}, punctuation rule {}",
        options.config.timing,
        options.config.policy.label()
    );

    if io::stdout().is_terminal() {
        run_interactive(text, options.config, options.autostart).await
    } else {
        run_headless(text, options.config).await
    }
}

async fn run_interactive(text: String, config: PacerConfig, autostart: bool) -> Result<()> {
    let mut session = TerminalSession::enter().context("failed to set up terminal")?;
    let mut renderer = session.renderer();
    let mut app = PacerApp::new(text, KeyboardInput::new(), config, TITLE);
    let clock = Instant::now();

    if autostart {
        app.start(0);
    }

    let result = drive(&mut app, &mut renderer, clock, |app| app.exit_requested()).await;
    app.shutdown();
    info!("session ended in state {}", app.state().label());
    result
}

async fn run_headless(text: String, config: PacerConfig) -> Result<()> {
    let mut renderer = PlainRenderer::new(io::stdout());
    let mut app = PacerApp::new(text, MockInput::new(), config, TITLE);
    let clock = Instant::now();

    if !app.start(0) {
        bail!("input contains no words");
    }

    let result = drive(&mut app, &mut renderer, clock, |app| {
        app.state() != PlaybackState::Running
    })
    .await;
    app.shutdown();
    result
}

/// Ticks `app` until `done` holds, sleeping until the next scheduled advance
/// but never longer than the input poll interval.
async fn drive<IN, R, F>(
    app: &mut PacerApp<IN>,
    renderer: &mut R,
    clock: Instant,
    done: F,
) -> Result<()>
where
    IN: InputProvider,
    R: ScreenRenderer,
    F: Fn(&PacerApp<IN>) -> bool,
{
    loop {
        let now_ms = clock.elapsed().as_millis();
        if app.tick(now_ms) == TickResult::RenderRequested {
            render_frame(app, renderer).context("failed to draw frame")?;
        }
        if done(app) {
            return Ok(());
        }

        let poll_at = now_ms.saturating_add(INPUT_POLL_INTERVAL_MS);
        let wake_at = app.next_wake_ms().map_or(poll_at, |due| due.min(poll_at));
        Timer::after_millis(wake_at.saturating_sub(now_ms)).await;
    }
}

fn render_frame<IN, R>(app: &PacerApp<IN>, renderer: &mut R) -> io::Result<()>
where
    IN: InputProvider,
    R: ScreenRenderer,
{
    let mut result = Ok(());
    app.with_screen(|screen| result = renderer.render(screen));
    result
}
