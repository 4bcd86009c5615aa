//! Tasks demo: two bordered lists side by side.
//!
//! Renders a single frame to stdout. Layout decisions are logged to stderr
//! with `RUST_LOG=cellframe=debug`.

use cellframe::{
    BorderStyle, BoxNode, BoxStyle, Color, FlexItem, FlexNode, ListView, Node, Padding,
    RenderConfig, Renderer, Size, View,
};
use tracing_subscriber::EnvFilter;

fn list_panel(list: ListView, border_color: Color) -> FlexItem {
    let style = BoxStyle::new()
        .with_border(BorderStyle::Thin)
        .with_border_color(border_color)
        .with_padding(Padding::symmetric(1, 2))
        .filled();
    FlexItem::new(BoxNode::new(style).with_child(list))
}

fn tasks_view(width: usize, height: usize) -> View {
    let outstanding = ListView::new(
        "Outstanding Tasks",
        [
            "Review camera calibration",
            "Sync ingest pipeline with S3",
            "Schedule QA playback session",
            "Confirm alert latency thresholds",
        ],
    )
    .with_title_color(Color::Indexed(69));

    let completed = ListView::new(
        "Completed Tasks",
        [
            "Deploy recorder v1.4.2",
            "Archive April footage",
            "Send daily digest to ops",
            "Reconcile storage billing",
        ],
    )
    .with_title_color(Color::Indexed(108))
    .with_item_color(Color::Indexed(244));

    let columns = FlexNode::row([
        list_panel(outstanding, Color::Indexed(69)),
        list_panel(completed, Color::Indexed(108)),
    ])
    .with_spacing(4);

    let frame = BoxStyle::new()
        .with_border(BorderStyle::Thick)
        .with_border_color(Color::Indexed(63))
        .with_padding(Padding::symmetric(1, 2))
        .filled();

    View::sized(
        Size::new(width, height),
        [Node::from(BoxNode::new(frame).with_child(columns))],
    )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    let view = tasks_view(usize::from(width), usize::from(height).saturating_sub(1));

    let renderer = Renderer::with_config(RenderConfig::from_env());
    println!("{}", renderer.render(&view));
}
