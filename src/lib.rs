//! Analog clock face rendered on the CPU.
//!
//! A sampler thread reads the wall clock twice a second and hands immutable
//! [`TimeSnapshot`]s to the window thread over a channel. Each redraw drains
//! the channel, composes a retained scene for the face and replays it onto
//! the frame buffer.

mod config;
mod geometry;
mod raster;
mod scene;
mod time;

pub use config::{ClockConfig, Color};
pub use time::{SystemTimeSource, TimeSnapshot, TimeSource};

use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result};
use pixels::{Pixels, SurfaceTexture};
use rusttype::Font;
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

/// Font paths tried for the digital readout when no font bytes are supplied.
const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

/// The clock application. Owns the configuration and the time source and
/// runs the window until it is closed.
pub struct Clock {
    config: ClockConfig,
    source: Arc<dyn TimeSource>,
}

impl Clock {
    /// A clock over the local wall clock.
    pub fn new(config: ClockConfig) -> Self {
        Self::with_source(config, SystemTimeSource)
    }

    /// A clock over a caller-supplied time source.
    pub fn with_source(config: ClockConfig, source: impl TimeSource + 'static) -> Self {
        Self {
            config,
            source: Arc::new(source),
        }
    }

    /// Opens the window and blocks until it is closed. The sampler thread
    /// is stopped and joined before this returns.
    pub fn show(self) -> Result<()> {
        run_window(self.config, self.source)
    }
}

fn run_window(config: ClockConfig, source: Arc<dyn TimeSource>) -> Result<()> {
    let side = config.side;

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let window = WindowBuilder::new()
        .with_title(&config.title)
        .with_inner_size(LogicalSize::new(side as f64, side as f64))
        .with_resizable(false)
        .build(&event_loop)
        .context("failed to create window")?;
    let window = Arc::new(window);

    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels =
        Pixels::new(side, side, surface_texture).context("failed to create frame buffer")?;

    let font = if config.show_readout {
        let font = load_font(&config);
        if font.is_none() {
            log::warn!("no usable font found, digital readout disabled");
        }
        font
    } else {
        None
    };

    let (sender, receiver) = mpsc::channel();
    let sampler = spawn_sampler(
        Arc::clone(&source),
        sender,
        Arc::clone(&window),
        Duration::from_millis(config.tick_interval_ms),
    );

    log::info!("showing {side}x{side} clock face");

    let mut hands = source.now();
    let dial_source = Arc::clone(&source);
    event_loop
        .run(move |event, window_target| {
            window_target.set_control_flow(ControlFlow::Wait);
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        // The buffer keeps its logical side; only the
                        // surface follows the window.
                        if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                            log::warn!("failed to resize surface: {err}");
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        // Drain the channel, newest snapshot wins.
                        while let Ok(snapshot) = receiver.try_recv() {
                            hands = snapshot;
                        }
                        // The dot ring reads the clock again so the sweep
                        // tracks paint time, not the sampled snapshot.
                        let dial_second = dial_source.now().second;
                        let scene = scene::compose(&config, hands, dial_second);
                        let mut canvas =
                            raster::Canvas::new(pixels.frame_mut(), side as usize, side as usize);
                        scene.render(&mut canvas, font.as_ref());
                        if let Err(err) = pixels.render() {
                            log::error!("failed to present frame: {err}");
                        }
                    }
                    _ => {}
                },
                _ => {}
            }
        })
        .context("event loop failed")?;

    // The run closure is gone and the receiver with it, so the sampler's
    // next send fails and it stops.
    if sampler.join().is_err() {
        log::error!("sampler thread panicked");
    }
    Ok(())
}

fn spawn_sampler(
    source: Arc<dyn TimeSource>,
    sender: Sender<TimeSnapshot>,
    window: Arc<Window>,
    interval: Duration,
) -> JoinHandle<()> {
    thread::spawn(move || loop {
        if sender.send(source.now()).is_err() {
            log::debug!("snapshot receiver dropped, sampler exiting");
            break;
        }
        window.request_redraw();
        thread::sleep(interval);
    })
}

fn load_font(config: &ClockConfig) -> Option<Font<'static>> {
    let bytes = match &config.font_data {
        Some(data) => Some(data.clone()),
        None => find_system_font(),
    }?;
    let font = Font::try_from_vec(bytes);
    if font.is_none() {
        log::warn!("font data could not be parsed");
    }
    font
}

fn find_system_font() -> Option<Vec<u8>> {
    for path in FONT_PATHS {
        if let Ok(bytes) = std::fs::read(path) {
            log::debug!("using font {path}");
            return Some(bytes);
        }
    }
    None
}
