use rusttype::Font;

use crate::config::{ClockConfig, Color};
use crate::geometry::{self, Point};
use crate::raster::Canvas;
use crate::time::TimeSnapshot;

#[derive(Clone, Debug)]
pub enum DrawCommand {
    Clear(Color),
    Dot {
        center: Point,
        diameter: u32,
        color: Color,
    },
    Hand {
        from: Point,
        to: Point,
        thickness: f32,
        tapered: bool,
        color: Color,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        font_size: f32,
        color: Color,
    },
}

/// Ordered list of draw commands for one frame.
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn render(&self, canvas: &mut Canvas, font: Option<&Font>) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => {
                    canvas.clear(*color);
                }
                DrawCommand::Dot {
                    center,
                    diameter,
                    color,
                } => {
                    canvas.fill_circle(*center, (*diameter / 2) as i32, *color);
                }
                DrawCommand::Hand {
                    from,
                    to,
                    thickness,
                    tapered,
                    color,
                } => {
                    if *tapered {
                        canvas.tapered_line(*from, *to, *thickness, *color);
                    } else {
                        canvas.line(*from, *to, *thickness, *color);
                    }
                }
                DrawCommand::Text {
                    x,
                    y,
                    text,
                    font_size,
                    color,
                } => {
                    // Skipped when no font could be loaded; a warning was
                    // already logged at startup.
                    if let Some(font) = font {
                        canvas.text(*x, *y, text, font, *font_size, *color);
                    }
                }
            }
        }
    }
}

/// Builds the face for one frame.
///
/// `hands` positions the three hands. `dial_second` drives the dot ring
/// highlight and is read fresh at paint time, so the ring can be one tick
/// ahead of the hands within a frame.
///
/// Command order: clear, the sixty ring dots in step order, hour, minute
/// and second hand, the hub, then the optional readout.
pub fn compose(config: &ClockConfig, hands: TimeSnapshot, dial_second: u32) -> Scene {
    let mut scene = Scene::new();
    let center = Point::new(config.center_x(), config.center_y());

    scene.push(DrawCommand::Clear(config.background));

    let ring_radius = config.dot_ring_radius() as f64;
    for step in 0..geometry::STEPS {
        let diameter = if step % 5 == 0 {
            config.big_dot_diameter
        } else {
            config.small_dot_diameter
        };
        let color = if step <= dial_second {
            config.dot_highlight
        } else {
            config.dot_dim
        };
        scene.push(DrawCommand::Dot {
            center: geometry::step_point(step, ring_radius, center),
            diameter,
            color,
        });
    }

    let hour_step = geometry::hour_hand_step(hands.hour, hands.minute);
    scene.push(DrawCommand::Hand {
        from: center,
        to: geometry::step_point(hour_step, config.hour_hand_radius() as f64, center),
        thickness: config.hour_hand_thickness,
        tapered: true,
        color: config.hand_color,
    });
    scene.push(DrawCommand::Hand {
        from: center,
        to: geometry::step_point(hands.minute, config.minute_hand_radius() as f64, center),
        thickness: config.minute_hand_thickness,
        tapered: true,
        color: config.hand_color,
    });
    scene.push(DrawCommand::Hand {
        from: center,
        to: geometry::step_point(hands.second, config.second_hand_radius() as f64, center),
        thickness: config.second_hand_thickness,
        tapered: false,
        color: config.hand_color,
    });
    scene.push(DrawCommand::Dot {
        center,
        diameter: config.hub_radius * 2,
        color: config.hand_color,
    });

    if config.show_readout {
        scene.push(DrawCommand::Text {
            x: (config.side as f64 * config.readout_x_factor) as i32,
            y: (config.side as f64 * config.readout_y_factor) as i32,
            text: readout_text(hands),
            font_size: config.readout_font_size,
            color: config.hand_color,
        });
    }

    scene
}

/// hh:mm:ss for the readout, with hour 0 shown as 12.
pub fn readout_text(snapshot: TimeSnapshot) -> String {
    let hour = if snapshot.hour == 0 { 12 } else { snapshot.hour };
    format!("{:02}:{:02}:{:02}", hour, snapshot.minute, snapshot.second)
}
