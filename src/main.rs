use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{
    self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use indoc::indoc;
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};

use term_modal::event_loop::{ControlFlow, ModalLoop, Step};
use term_modal::input::{ConsoleInputDriver, InputDriver};
use term_modal::render::Backdrop;
use term_modal::viewport::ViewportObserver;
use term_modal::{ConfigError, ModalConfig, ModalHost, PanelId};

const HELP: &str = indoc! {"
    term-modal demo

    Drag a title bar to move a modal, drag the corner grip to resize it.
    1-9  show/hide a modal     n  open another     x  close the top modal
    q    quit
"};

const MAX_MODALS: usize = 9;

#[derive(Parser, Debug)]
#[command(
    name = "term-modal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Interactive demo of draggable, resizable, stacked modals"
)]
struct Cli {
    /// How many modals to open at startup.
    #[arg(
        short = 'n',
        long = "count",
        default_value_t = 3,
        value_parser = clap::value_parser!(u8).range(0..=MAX_MODALS as i64)
    )]
    count: u8,

    /// Smallest width/height (in cells) a modal can be shrunk to.
    #[arg(long = "min-size", value_name = "CELLS", default_value_t = 6)]
    min_size: i32,

    /// Initial modal width in cells.
    #[arg(long = "width", value_name = "CELLS", default_value_t = 36)]
    width: i32,

    /// Initial modal height in cells.
    #[arg(long = "height", value_name = "CELLS", default_value_t = 10)]
    height: i32,

    /// Dim the screen behind the top modal and swallow clicks that miss it.
    #[arg(long = "mask")]
    mask: bool,

    /// Append debug logs to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl TryFrom<&Cli> for ModalConfig {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        ModalConfig::new(cli.min_size, cli.width, cli.height)
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let config = ModalConfig::try_from(&cli).map_err(io::Error::other)?;
    term_modal::logging::init_default(cli.log_file.clone())?;

    let backdrop = if cli.mask {
        Backdrop::Mask
    } else {
        Backdrop::ClickThrough
    };
    let mut host = ModalHost::default()
        .with_viewport(ViewportObserver::from_terminal()?)
        .with_backdrop(backdrop);
    let mut demo = Demo::new(config);
    for _ in 0..cli.count {
        demo.open_next(&mut host);
    }

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, host, &mut demo);

    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        event::DisableMouseCapture,
        DisableFocusChange,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    host: ModalHost,
    demo: &mut Demo,
) -> io::Result<()> {
    let mut modal_loop = ModalLoop::new(ConsoleInputDriver::new(), host, Duration::from_millis(16));
    modal_loop.driver().set_mouse_capture(true)?;
    let stats = modal_loop.run(|host, step| match step {
        Step::Draw => {
            terminal.draw(|frame| demo.draw(host, frame))?;
            Ok(ControlFlow::Continue)
        }
        Step::Unhandled(event) => Ok(demo.handle(host, event)),
    })?;
    tracing::info!(
        events = stats.events,
        consumed = stats.consumed,
        coalesced = stats.coalesced,
        frames = stats.frames,
        "demo finished"
    );
    Ok(())
}

struct Demo {
    config: ModalConfig,
    slots: Vec<PanelId>,
    opened: usize,
}

impl Demo {
    fn new(config: ModalConfig) -> Self {
        Self {
            config,
            slots: Vec::new(),
            opened: 0,
        }
    }

    fn open_next(&mut self, host: &mut ModalHost) {
        if self.slots.len() >= MAX_MODALS {
            return;
        }
        let step = self.opened as i32;
        self.opened += 1;
        let id = host.open(
            self.config.at(step * 4, step * 2 + 1),
            format!(" Modal {} ", self.opened),
        );
        self.slots.push(id);
    }

    fn close_focused(&mut self, host: &mut ModalHost) {
        if let Some(id) = host.focused() {
            host.close(id);
            self.slots.retain(|slot| *slot != id);
        }
    }

    fn handle(&mut self, host: &mut ModalHost, event: &Event) -> ControlFlow {
        let Event::Key(key) = event else {
            return ControlFlow::Continue;
        };
        if key.kind != KeyEventKind::Press {
            return ControlFlow::Continue;
        }
        self.handle_key(host, key)
    }

    fn handle_key(&mut self, host: &mut ModalHost, key: &KeyEvent) -> ControlFlow {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                ControlFlow::Quit
            }
            KeyCode::Char('q') | KeyCode::Esc => ControlFlow::Quit,
            KeyCode::Char('n') => {
                self.open_next(host);
                ControlFlow::Continue
            }
            KeyCode::Char('x') => {
                self.close_focused(host);
                ControlFlow::Continue
            }
            KeyCode::Char(c @ '1'..='9') => {
                let slot = c as usize - '1' as usize;
                if let Some(id) = self.slots.get(slot).copied() {
                    host.toggle_visible(id);
                }
                ControlFlow::Continue
            }
            _ => ControlFlow::Continue,
        }
    }

    fn draw(&self, host: &mut ModalHost, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Paragraph::new(HELP).style(Style::default().fg(Color::Gray)),
            area,
        );
        for (slot, &id) in self.slots.iter().enumerate() {
            let Some(modal) = host.modal(id) else {
                continue;
            };
            let g = modal.geometry();
            let z = modal
                .z_index()
                .map_or_else(|| "-".to_string(), |z| z.to_string());
            let body = format!(
                "{id} (key {})\nstack: {z}\nat {},{}  size {}x{}",
                slot + 1,
                g.left,
                g.top,
                g.width,
                g.height
            );
            host.set_body(id, body);
        }
        host.render(frame);
    }
}
