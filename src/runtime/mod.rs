use std::env;

use crossbeam_channel::unbounded;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::logging;
use crate::player::{Player, PlayerEvent, PlayerOptions};

mod event_loop;
mod keymap;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = settings::load_settings();
    settings::apply_dir_arg(&mut settings, env::args().nth(1));

    match logging::init(&settings.log) {
        Ok(path) => tracing::info!(log = %path.display(), "dankira starting"),
        Err(e) => eprintln!("dankira: logging disabled: {e}"),
    }

    let tracks = startup::load_library(&settings);
    let (events_tx, events_rx) = unbounded::<PlayerEvent>();
    let output = AudioPlayer::new()?;
    let mut player = Player::new(
        output,
        tracks,
        PlayerOptions::from_settings(&settings),
        events_tx,
    );

    let mut app = App::new();
    app.set_current_dir(settings.library.dir.display().to_string());
    if player.tracks().is_empty() {
        app.set_message("no tracks found");
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut player, &mut app, &events_rx);

    // Release the audio device before handing the terminal back.
    drop(player);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = run_result {
        tracing::error!(error = %e, "event loop failed");
    }
    tracing::info!("dankira exiting");
    run_result
}
