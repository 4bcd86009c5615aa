//! ASCII art demo: a centered, bold logo inside a thick frame that fills
//! the terminal.
//!
//! Renders a single frame to stdout. Set `NO_COLOR` for plain output.

use cellframe::{
    Alignment, AsciiArtNode, BorderStyle, BoxNode, BoxStyle, Color, Node, Padding, RenderConfig,
    Renderer, Size, View,
};

const LOGO: [&str; 8] = [
    r"  ____   _ _           _        _         _",
    r" / __ \ (_) |         | |      (_)       | |",
    r"| |  | |_ _| |__  _ __| |_ _ __ _  ____ _| |___",
    r"| |  | | | | '_ \| '__| __| '__| |/ / _' | / __|",
    r"| |__| | | | |_) | |  | |_| |  | /\\ (_| | \__ \\",
    r" \____/|_|_|_.__/|_|   \__|_|  |_/_\\__,_|_|___/",
    "",
    "   Odin Analytics",
];

fn main() {
    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    let accent = Color::Indexed(63);

    let art = AsciiArtNode::new(LOGO)
        .with_align(Alignment::Center)
        .with_bold(true)
        .with_color(accent);

    let frame = BoxStyle::new()
        .with_border(BorderStyle::Thick)
        .with_border_color(accent)
        .with_padding(Padding::symmetric(2, 4))
        .filled()
        .with_align(Alignment::Center, Alignment::Center);

    let size = Size::new(usize::from(width), usize::from(height).saturating_sub(1));
    let view = View::sized(size, [Node::from(BoxNode::new(frame).with_child(art))]);

    let renderer = Renderer::with_config(RenderConfig::from_env());
    println!("{}", renderer.render(&view));
}
