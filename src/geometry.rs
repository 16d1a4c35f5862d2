use std::f64::consts::PI;

/// Integer pixel position on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Number of positions around the dial. Both the second scale and the dot
/// ring use all sixty; the hour hand lands on every fifth plus an offset.
pub const STEPS: u32 = 60;

/// Maps a dial step (0 at 12 o'clock, clockwise) to the point `radius`
/// pixels from `center`.
///
/// Screen coordinates grow rightward and downward, and angle 0 points
/// right, so step 15 (3 o'clock) must land on the positive x axis. The
/// `- 15` shift rotates the scale accordingly. Coordinates are truncated
/// toward zero after the float sum, matching the classic face's rounding.
pub fn step_point(step: u32, radius: f64, center: Point) -> Point {
    let angle = 2.0 * PI * (step as f64 - 15.0) / STEPS as f64;
    Point {
        x: (center.x as f64 + radius * angle.cos()) as i32,
        y: (center.y as f64 + radius * angle.sin()) as i32,
    }
}

/// How far the hour hand has crept toward the next hour mark: one step per
/// twelve minutes, by integer division.
pub fn relative_hour_offset(minute: u32) -> u32 {
    minute / 12
}

/// Dial step for the hour hand. Hour marks are five steps apart.
pub fn hour_hand_step(hour: u32, minute: u32) -> u32 {
    hour * 5 + relative_hour_offset(minute)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point::new(250, 250);

    // ── step_point ──

    #[test]
    fn step_15_is_three_o_clock() {
        for radius in [150.0, 180.0, 200.0, 210.0] {
            let p = step_point(15, radius, CENTER);
            assert_eq!(p, Point::new(250 + radius as i32, 250));
        }
    }

    #[test]
    fn step_45_is_nine_o_clock() {
        for radius in [150.0, 180.0, 200.0, 210.0] {
            let p = step_point(45, radius, CENTER);
            assert_eq!(p, Point::new(250 - radius as i32, 250));
        }
    }

    #[test]
    fn step_0_is_twelve_o_clock() {
        let p = step_point(0, 200.0, CENTER);
        assert_eq!(p, Point::new(250, 50));
    }

    #[test]
    fn step_30_is_six_o_clock() {
        let p = step_point(30, 200.0, CENTER);
        assert_eq!(p, Point::new(250, 450));
    }

    #[test]
    fn every_step_lies_on_its_circle() {
        // Truncation moves each coordinate less than one pixel, so the
        // distance to the center is off by less than sqrt(2).
        for radius in [150.0, 180.0, 200.0, 210.0] {
            for step in 0..STEPS {
                let p = step_point(step, radius, CENTER);
                let dx = (p.x - CENTER.x) as f64;
                let dy = (p.y - CENTER.y) as f64;
                let dist = (dx * dx + dy * dy).sqrt();
                assert!(
                    (dist - radius).abs() < 1.5,
                    "step {step} at radius {radius} landed {dist} from center"
                );
            }
        }
    }

    #[test]
    fn steps_advance_clockwise() {
        // From 12 o'clock the next step moves right and barely down.
        let top = step_point(0, 200.0, CENTER);
        let next = step_point(1, 200.0, CENTER);
        assert!(next.x > top.x);
        assert!(next.y >= top.y);
    }

    // ── hour hand ──

    #[test]
    fn relative_offset_steps_every_twelve_minutes() {
        assert_eq!(relative_hour_offset(0), 0);
        assert_eq!(relative_hour_offset(11), 0);
        assert_eq!(relative_hour_offset(12), 1);
        assert_eq!(relative_hour_offset(23), 1);
        assert_eq!(relative_hour_offset(24), 2);
        assert_eq!(relative_hour_offset(59), 4);
    }

    #[test]
    fn hour_hand_step_at_half_past_three() {
        assert_eq!(hour_hand_step(3, 30), 17);
    }

    #[test]
    fn hour_hand_step_stays_on_dial() {
        for hour in 0..12 {
            for minute in 0..60 {
                assert!(hour_hand_step(hour, minute) < STEPS);
            }
        }
    }
}
