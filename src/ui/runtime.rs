use crate::config::Config;
use crate::display::SimulatedDisplay;
use crate::settings::{ControllerOptions, DisplaySettingsController, TokioScheduler};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::surface::TuiSurface;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Frame period; doubles as the fixed-timestep update.
const TICK_RATE: Duration = Duration::from_millis(50);
const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

pub fn run(config: &Config) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .thread_name("vidsettings-countdown")
        .build()?;

    let events = EventHandler::new(TICK_RATE);
    let countdown_tx = events.sender();
    let scheduler = TokioScheduler::new(
        runtime.handle().clone(),
        COUNTDOWN_PERIOD,
        Arc::new(move |generation| {
            countdown_tx
                .send(AppEvent::CountdownTick { generation })
                .is_ok()
        }),
    );

    let display = SimulatedDisplay::from_config(&config.display);
    let mut controller = DisplaySettingsController::new(
        display,
        TuiSurface::new(),
        scheduler,
        ControllerOptions::from(&config.popup),
    );
    if let Err(err) = controller.initialize() {
        tracing::warn!(error = %err, "Starting with the display's current mode unconfirmed");
    }
    let mut app = App::new(controller);

    let (mut terminal, guard) = setup_terminal()?;
    tracing::info!("Settings panel started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::CountdownTick { generation }) => app.on_countdown_tick(generation),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    drop(app);
    runtime.shutdown_timeout(Duration::from_millis(100));
    tracing::info!("Settings panel closed");
    Ok(())
}
