//! Dashboard demo: an interactive camera grid.
//!
//! The whole node tree is rebuilt and rendered on every event.
//!
//! Keys: Tab / Shift+Tab move focus, Enter adds or removes a camera,
//! 'q' or Ctrl+C quits.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use cellframe::{
    Alignment, BorderStyle, BoxNode, BoxStyle, ButtonView, Color, FlexItem, FlexNode, FlowNode,
    Node, Padding, Size, TextNode, View,
};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, ClearType},
};

const ACCENT: Color = Color::Indexed(63);
const MUTED: Color = Color::Indexed(244);
const TICK: Duration = Duration::from_secs(1);

struct Camera {
    name: String,
    fps: u32,
    dropped: u32,
    last_message: String,
}

/// Focus is either the summary's add button or one camera panel.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Focus {
    Summary,
    Camera(usize),
}

struct Dashboard {
    size: Size,
    booting: bool,
    cameras: Vec<Camera>,
    focus: Focus,
    last_event: String,
    ticks: u32,
}

impl Dashboard {
    fn new(width: u16, height: u16) -> Self {
        Self {
            size: Size::new(usize::from(width), usize::from(height)),
            booting: true,
            cameras: Vec::new(),
            focus: Focus::Summary,
            last_event: "Booting recorder service...".to_string(),
            ticks: 0,
        }
    }

    fn advance_focus(&mut self, forward: bool) {
        let count = self.cameras.len();
        if self.focus == Focus::Summary && count == 0 {
            if forward {
                self.add_camera();
            }
            return;
        }

        self.focus = match self.focus {
            Focus::Summary if forward => Focus::Camera(0),
            Focus::Summary => Focus::Summary,
            Focus::Camera(i) if forward && i + 1 < count => Focus::Camera(i + 1),
            Focus::Camera(i) if !forward && i > 0 => Focus::Camera(i - 1),
            Focus::Camera(_) => Focus::Summary,
        };
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::Summary => self.add_camera(),
            Focus::Camera(i) => self.remove_camera(i),
        }
    }

    fn add_camera(&mut self) {
        let name = format!("Camera {}", self.cameras.len() + 1);
        self.last_event = format!("Started {name}");
        self.cameras.push(Camera {
            name,
            fps: 30,
            dropped: 0,
            last_message: "Receiving stream".to_string(),
        });
        self.focus = Focus::Camera(self.cameras.len() - 1);
        self.booting = false;
    }

    fn remove_camera(&mut self, index: usize) {
        if index >= self.cameras.len() {
            return;
        }
        let removed = self.cameras.remove(index);
        self.last_event = format!("Stopped {}", removed.name);
        self.focus = if self.cameras.is_empty() {
            Focus::Summary
        } else {
            Focus::Camera(index.min(self.cameras.len() - 1))
        };
    }

    /// Perturb one camera's metrics per tick.
    fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        if self.cameras.is_empty() {
            return;
        }
        let index = self.ticks as usize % self.cameras.len();
        let camera = &mut self.cameras[index];
        camera.fps = 25 + self.ticks.wrapping_mul(7) % 11;
        if self.ticks % 5 == 0 {
            camera.dropped += self.ticks % 3;
            camera.last_message = "Detected minor packet loss".to_string();
        } else {
            camera.last_message = "Streaming nominal".to_string();
        }
    }

    fn view(&self) -> View {
        let mut items = Vec::with_capacity(2);
        if !self.cameras.is_empty() {
            items.push(FlexItem::new(self.summary()));
        }
        items.push(FlexItem::new(self.grid()));
        View::sized(self.size, [Node::from(FlexNode::column(items).with_spacing(1))])
    }

    fn summary(&self) -> Node {
        let status = if self.booting {
            "Booting recorder service..."
        } else {
            "Bridge online"
        };
        let message = if self.last_event.is_empty() {
            "Waiting for events..."
        } else {
            self.last_event.as_str()
        };
        let focused = self.focus == Focus::Summary;

        let lines = FlexNode::column([
            FlexItem::new(TextNode::new("Streaming Recorder Service").with_bold(true)),
            FlexItem::new(TextNode::new(status).with_color(Color::Indexed(36))),
            FlexItem::new(
                TextNode::new(format!("Active cameras: {}", self.cameras.len())).with_color(ACCENT),
            ),
            FlexItem::new(TextNode::new(message).with_color(MUTED)),
            FlexItem::new(button("+ Add Camera", focused)),
        ])
        .with_spacing(1);

        let style = BoxStyle::new()
            .with_border(BorderStyle::Thick)
            .with_border_color(ACCENT)
            .with_padding(Padding::symmetric(1, 2))
            .with_fill_width(true);
        BoxNode::new(style).with_child(lines).into()
    }

    fn grid(&self) -> Node {
        let frame = BoxStyle::new()
            .with_border(BorderStyle::Thin)
            .with_border_color(ACCENT)
            .with_padding(Padding::symmetric(1, 2))
            .filled();

        if self.cameras.is_empty() {
            let placeholder = BoxNode::new(
                BoxStyle::new()
                    .with_border(BorderStyle::Thin)
                    .with_border_color(Color::Indexed(240))
                    .with_padding(Padding::symmetric(2, 4))
                    .filled()
                    .with_align(Alignment::Center, Alignment::Center),
            )
            .with_child(TextNode::new("No active cameras detected.").with_color(MUTED))
            .with_child(TextNode::new("Press TAB or Enter to add a camera.").with_color(Color::Indexed(62)))
            .with_child(button("+ Add Camera", true));
            return BoxNode::new(frame).with_child(placeholder).into();
        }

        let panels = self.cameras.iter().enumerate().map(|(i, camera)| {
            panel(camera, self.focus == Focus::Camera(i))
        });
        let flow = FlowNode::new(28, panels).with_spacing(4, 1);
        BoxNode::new(frame).with_child(flow).into()
    }
}

fn button(label: &str, focused: bool) -> Node {
    let color = if focused { Color::Indexed(205) } else { Color::Indexed(240) };
    ButtonView::new(label)
        .with_border_color(color)
        .with_bold(focused)
        .into()
}

fn panel(camera: &Camera, focused: bool) -> Node {
    let metrics = FlexNode::column([
        FlexItem::new(format!("FPS: {}", camera.fps)),
        FlexItem::new(format!("Dropped frames: {}", camera.dropped)),
        FlexItem::new(TextNode::new(camera.last_message.as_str()).with_color(MUTED)),
    ]);

    let style = BoxStyle::new()
        .with_border(BorderStyle::Thin)
        .with_border_color(ACCENT)
        .with_padding(Padding::symmetric(1, 2));
    BoxNode::new(style)
        .with_child(TextNode::new(camera.name.as_str()).with_bold(true))
        .with_child(metrics)
        .with_child(button("Remove", focused))
        .into()
}

fn draw(out: &mut impl Write, frame: &str) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All))?;
    for (y, line) in frame.lines().enumerate() {
        let row = u16::try_from(y).unwrap_or(u16::MAX);
        queue!(out, cursor::MoveTo(0, row), Print(line))?;
    }
    out.flush()
}

fn run(out: &mut impl Write) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    let mut dashboard = Dashboard::new(width, height);
    let mut last_tick = Instant::now();

    loop {
        draw(out, &cellframe::render(&dashboard.view()))?;

        let timeout = TICK.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Tab => dashboard.advance_focus(true),
                    KeyCode::BackTab => dashboard.advance_focus(false),
                    KeyCode::Enter => dashboard.activate(),
                    _ => {}
                },
                Event::Resize(w, h) => dashboard.size = Size::new(usize::from(w), usize::from(h)),
                _ => {}
            }
        }

        if last_tick.elapsed() >= TICK {
            dashboard.tick();
            last_tick = Instant::now();
        }
    }
}

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut stdout);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}
