use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use directory_core::{update, AppState, Msg, Page, Route};
use directory_engine::{ClientSettings, EngineHandle};
use directory_logging::{directory_info, directory_warn};
use log::LevelFilter;
use url::Url;

use super::effects::EffectRunner;
use super::input::{self, Command};
use super::ui;
use crate::cli::Cli;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub fn run_app(cli: Cli) -> Result<()> {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    directory_logging::initialize(cli.log.into(), level, &cli.log_file);

    let origin = Url::parse(&cli.origin).with_context(|| format!("invalid origin {}", cli.origin))?;
    let start = match &cli.url {
        Some(raw) => Url::parse(raw).with_context(|| format!("invalid page URL {raw}"))?,
        None => Route::Home.resolve(&origin).context("cannot build home URL")?,
    };
    let settings = ClientSettings {
        base_url: cli.api_url.clone(),
        request_timeout: Duration::from_secs(cli.timeout_secs.max(1)),
        ..ClientSettings::default()
    };

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match input::parse_command(&line) {
                Ok(Some(command)) => {
                    if cmd_tx.send(command).is_err() {
                        return;
                    }
                }
                Ok(None) => {}
                Err(err) => eprintln!("{err}"),
            }
        }
        let _ = cmd_tx.send(Command::Quit);
    });

    let mut app = App::open(origin, settings, start)?;
    app.run(cmd_rx)
}

struct App {
    origin: Url,
    settings: ClientSettings,
    state: AppState,
    effects: EffectRunner,
}

impl App {
    fn open(origin: Url, settings: ClientSettings, url: Url) -> Result<Self> {
        let effects = start_engine(&settings)?;
        let mut app = Self {
            origin,
            settings,
            state: AppState::for_page(Page::from_url(&url)),
            effects,
        };
        app.start(&url)?;
        Ok(app)
    }

    /// Replaces the current page. In-flight calls of the old page are
    /// abandoned together with its engine.
    fn load(&mut self, url: Url) -> Result<()> {
        self.effects = start_engine(&self.settings)?;
        self.state = AppState::for_page(Page::from_url(&url));
        self.start(&url)
    }

    fn start(&mut self, url: &Url) -> Result<()> {
        directory_info!("Opening {}", url);
        println!("-> {url}");
        self.dispatch(Msg::PageLoaded)
    }

    fn navigate(&mut self, route: Route) -> Result<()> {
        let url = route
            .resolve(&self.origin)
            .with_context(|| format!("cannot resolve {route:?}"))?;
        self.load(url)
    }

    fn dispatch(&mut self, msg: Msg) -> Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        if was_dirty {
            self.render();
        }
        match self.effects.enqueue(effects) {
            Some(route) => self.navigate(route),
            None => Ok(()),
        }
    }

    fn pump_engine(&mut self) -> Result<()> {
        while let Some(msg) = self.effects.poll() {
            self.dispatch(msg)?;
        }
        Ok(())
    }

    fn run(&mut self, commands: mpsc::Receiver<Command>) -> Result<()> {
        loop {
            self.pump_engine()?;
            let command = match commands.recv_timeout(POLL_INTERVAL) {
                Ok(command) => command,
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => return Ok(()),
            };
            match command {
                Command::Dispatch(msg) => self.dispatch(msg)?,
                Command::Keystrokes(text) => {
                    for ch in text.chars() {
                        let mut next = self.state.search().input().to_string();
                        next.push(ch);
                        self.dispatch(Msg::SearchInput(next))?;
                    }
                }
                Command::Backspace => {
                    let mut next = self.state.search().input().to_string();
                    next.pop();
                    self.dispatch(Msg::SearchInput(next))?;
                }
                Command::Open(raw) => match Url::parse(&raw) {
                    Ok(url) => self.load(url)?,
                    Err(err) => directory_warn!("Ignoring invalid URL {}: {}", raw, err),
                },
                Command::Wait(duration) => {
                    let deadline = Instant::now() + duration;
                    while Instant::now() < deadline {
                        self.pump_engine()?;
                        thread::sleep(POLL_INTERVAL);
                    }
                }
                Command::Help => println!("{}", input::HELP),
                Command::Quit => return Ok(()),
            }
        }
    }

    fn render(&self) {
        let lines = ui::render::render(&self.state.view());
        let mut out = io::stdout().lock();
        for line in lines {
            let _ = writeln!(out, "{line}");
        }
        let _ = writeln!(out);
        let _ = out.flush();
    }
}

fn start_engine(settings: &ClientSettings) -> Result<EffectRunner> {
    let engine = EngineHandle::new(settings.clone()).context("cannot start backend client")?;
    Ok(EffectRunner::new(engine))
}
