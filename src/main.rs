use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{
    poll as event_poll, read as event_read, Event as CrosstermEvent, KeyEvent, KeyEventKind,
    MouseEvent,
};
use folio::app::App;
use folio::config::{BackgroundKind, Config};
use folio::config_io::{self, DirectoryContext};
use folio::services::contact::FormspreeSubmitter;
use folio::services::launcher::SystemOpener;
use folio::services::log_dirs;
use folio::services::terminal_modes::{self, TerminalModes};
use folio::services::time_source::RealTimeSource;
use folio::services::tracing_setup;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// An interactive terminal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "A terminal portfolio with a starfield, a command terminal and a journey through time", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for diagnostics (default: per-process file in the state dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Background animation: starfield, particles or none
    #[arg(long, value_name = "KIND")]
    background: Option<BackgroundKind>,

    /// Frame rate cap for the starfield
    #[arg(long, value_name = "FPS")]
    fps: Option<u32>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the directories used by folio and exit
    #[arg(long)]
    show_paths: bool,
}

/// Load config and fold the command-line overrides into it.
fn effective_config(args: &Args) -> AnyhowResult<Config> {
    let dir_context = DirectoryContext::from_system()?;
    let mut config = config_io::load_config(&dir_context, args.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(background) = args.background {
        config.background = background;
    }
    if let Some(fps) = args.fps {
        config.animation.target_fps = fps;
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    // Handle --show-paths early (no terminal setup needed)
    if args.show_paths {
        log_dirs::print_all_paths();
        return Ok(());
    }

    // Handle --dump-config early (no terminal setup needed)
    if args.dump_config {
        let config = effective_config(&args)?;
        let json =
            serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{}", json);
        return Ok(());
    }

    let log_file = args.log_file.clone().unwrap_or_else(log_dirs::main_log_path);
    tracing_setup::init_global(&log_file);
    log_dirs::cleanup_stale_logs();

    tracing::info!("folio starting");

    let config = effective_config(&args)?;
    tracing::debug!("Effective config: {:?}", config);

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let mut terminal_modes = TerminalModes::enable().context("Failed to set up terminal")?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.clear().context("Failed to clear terminal")?;
    let size = terminal.size().context("Failed to read terminal size")?;

    let submitter = FormspreeSubmitter::new(
        &config.contact.form_id,
        Duration::from_secs(config.contact.timeout_secs),
    );
    let mut app = App::new(
        config,
        RealTimeSource::shared(),
        Arc::new(SystemOpener),
        Arc::new(submitter),
        size.width,
        size.height,
    );

    let result = run_event_loop(&mut app, &mut terminal);
    app.shutdown();

    // Restore terminal state
    terminal_modes.undo();
    tracing::info!("folio exiting");

    result.context("Event loop returned an error")
}

fn run_event_loop(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> AnyhowResult<()> {
    use std::time::Instant;

    const FRAME_DURATION: Duration = Duration::from_millis(16); // 60fps
    let mut last_render = Instant::now();
    let mut needs_render = true;
    let mut pending_event: Option<CrosstermEvent> = None;

    loop {
        if app.tick() {
            needs_render = true;
        }

        if app.should_quit() {
            break;
        }

        if needs_render && last_render.elapsed() >= FRAME_DURATION {
            terminal.draw(|frame| app.render(frame))?;
            last_render = Instant::now();
            needs_render = false;
        }

        let event = if let Some(e) = pending_event.take() {
            Some(e)
        } else {
            // Keep ticking at frame rate so the background keeps moving
            let timeout = FRAME_DURATION.saturating_sub(last_render.elapsed());
            if event_poll(timeout)? {
                Some(event_read()?)
            } else {
                None
            }
        };

        let Some(event) = event else { continue };

        let (event, next) = coalesce_mouse_moves(event)?;
        pending_event = next;

        match event {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind == KeyEventKind::Press {
                    handle_key_event(app, key_event);
                    needs_render = true;
                }
            }
            CrosstermEvent::Mouse(mouse_event) => {
                handle_mouse_event(app, mouse_event);
                needs_render = true;
            }
            CrosstermEvent::Resize(w, h) => {
                app.resize(w, h);
                needs_render = true;
            }
            _ => {}
        }
    }

    Ok(())
}

fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    tracing::trace!(
        "Key event received: code={:?}, modifiers={:?}, kind={:?}",
        key_event.code,
        key_event.modifiers,
        key_event.kind
    );
    app.handle_key(key_event);
}

fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    tracing::trace!(
        "Mouse event received: kind={:?}, column={}, row={}",
        mouse_event.kind,
        mouse_event.column,
        mouse_event.row
    );
    app.handle_mouse(mouse_event);
}

/// Skip stale mouse move events, return the latest one.
/// If we read a non-move event while draining, return it as pending.
fn coalesce_mouse_moves(
    event: CrosstermEvent,
) -> AnyhowResult<(CrosstermEvent, Option<CrosstermEvent>)> {
    use crossterm::event::MouseEventKind;

    if !matches!(&event, CrosstermEvent::Mouse(m) if m.kind == MouseEventKind::Moved) {
        return Ok((event, None));
    }

    let mut latest = event;
    while event_poll(Duration::ZERO)? {
        let next = event_read()?;
        if matches!(&next, CrosstermEvent::Mouse(m) if m.kind == MouseEventKind::Moved) {
            latest = next;
        } else {
            return Ok((latest, Some(next)));
        }
    }
    Ok((latest, None))
}
