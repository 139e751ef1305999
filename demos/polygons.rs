//! Polygons Example - Fill shapes and animate with diff rendering
//!
//! This example demonstrates the full pipeline on a real terminal:
//! - Sizing the grid to the terminal window
//! - Filling polygons with palette colors
//! - Rendering only the cells that changed each frame
//!
//! Run with: cargo run --example polygons

use std::thread;
use std::time::Duration;

use cellgrid::{
    terminal_extent, AnsiDevice, Color, Point, RenderConfig, RenderContext, TerminalSession,
};

fn main() -> cellgrid::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = RenderConfig::default();
    let extent = terminal_extent()?;
    let (width, height) = (extent.width(), extent.height());

    let session = TerminalSession::enter()?;
    let mut ctx = RenderContext::with_config(AnsiDevice::stdout(&config), config);
    ctx.configure(extent)?;

    // The sweeping square owns rows 0..side; the backdrop stays below it
    let side = (height / 4).max(2);

    // Static backdrop: a triangle and a diamond
    let triangle = [
        Point::new(1, height - 1),
        Point::new(width / 3, side + 1),
        Point::new(2 * width / 3, height - 1),
    ];
    ctx.fill_area(&triangle, Color::Blue, '^')?;

    let (cx, cy) = (3 * width / 4, height / 2);
    let diamond = [
        Point::new(cx, (cy - height / 4).max(side + 1)),
        Point::new(cx + width / 8, cy),
        Point::new(cx, cy + height / 4),
        Point::new(cx - width / 8, cy),
    ];
    ctx.fill_area(&diamond, Color::Yellow, '*')?;
    ctx.render_frame()?;

    // Sweep a square left to right; each frame only repaints its trail
    let mut previous: Option<[Point; 4]> = None;
    for x in (0..width - side).step_by(2) {
        if let Some(old) = previous {
            ctx.fill_area(&old, Color::Black, ' ')?;
        }
        let square = [
            Point::new(x, 0),
            Point::new(x + side, 0),
            Point::new(x + side, side),
            Point::new(x, side),
        ];
        ctx.fill_area(&square, Color::Red, '#')?;
        let report = ctx.render_frame()?;
        log::debug!("frame at x={}: {:?}", x, report);

        previous = Some(square);
        thread::sleep(Duration::from_millis(40));
    }

    thread::sleep(Duration::from_millis(600));
    session.leave()?;
    Ok(())
}
