use bon::Builder;

/// Color for face elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// Clock face configuration.
///
/// Defaults reproduce the classic 500x500 face: hand lengths are derived by
/// insetting from the canvas edge, the dot ring sits 40 px inside the edge,
/// and every fifth dot is drawn larger.
#[derive(Debug, Clone, Builder)]
pub struct ClockConfig {
    #[builder(default = "Timepiece".to_string())]
    pub title: String,

    /// Canvas side in logical pixels. The window is square and non-resizable.
    #[builder(default = 500)]
    pub side: u32,

    /// Sampler period; the hands advance at this cadence.
    #[builder(default = 500)]
    pub tick_interval_ms: u64,

    // Dot ring
    #[builder(default = 40)]
    pub dot_ring_inset: u32,
    #[builder(default = 8)]
    pub big_dot_diameter: u32,
    #[builder(default = 4)]
    pub small_dot_diameter: u32,

    // Hands
    #[builder(default = 50)]
    pub second_hand_inset: u32,
    #[builder(default = 70)]
    pub minute_hand_inset: u32,
    #[builder(default = 100)]
    pub hour_hand_inset: u32,
    #[builder(default = 1.0)]
    pub second_hand_thickness: f32,
    #[builder(default = 2.0)]
    pub minute_hand_thickness: f32,
    #[builder(default = 3.0)]
    pub hour_hand_thickness: f32,
    #[builder(default = 4)]
    pub hub_radius: u32,

    // Colors
    #[builder(default = Color::new(24, 116, 205))]
    pub background: Color,
    #[builder(default = Color::new(160, 160, 160))]
    pub dot_dim: Color,
    #[builder(default = Color::new(0xff, 0xff, 0xff))]
    pub dot_highlight: Color,
    #[builder(default = Color::new(0xff, 0xff, 0xff))]
    pub hand_color: Color,

    // Digital readout
    #[builder(default = false)]
    pub show_readout: bool,
    #[builder(default = 0.5)]
    pub readout_x_factor: f64,
    #[builder(default = 0.72)]
    pub readout_y_factor: f64,
    #[builder(default = 28.0)]
    pub readout_font_size: f32,
    /// Raw font bytes for the readout. When unset, a few well-known system
    /// font paths are tried at startup.
    pub font_data: Option<Vec<u8>>,
}

impl ClockConfig {
    pub fn center_x(&self) -> i32 {
        self.side as i32 / 2
    }

    pub fn center_y(&self) -> i32 {
        self.side as i32 / 2
    }

    pub fn dot_ring_radius(&self) -> i32 {
        self.side as i32 / 2 - self.dot_ring_inset as i32
    }

    pub fn second_hand_radius(&self) -> i32 {
        self.side as i32 / 2 - self.second_hand_inset as i32
    }

    pub fn minute_hand_radius(&self) -> i32 {
        self.side as i32 / 2 - self.minute_hand_inset as i32
    }

    pub fn hour_hand_radius(&self) -> i32 {
        self.side as i32 / 2 - self.hour_hand_inset as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_face() {
        let config = ClockConfig::builder().build();
        assert_eq!(config.side, 500);
        assert_eq!(config.tick_interval_ms, 500);
        assert_eq!(config.big_dot_diameter, 8);
        assert_eq!(config.small_dot_diameter, 4);
        assert!(!config.show_readout);
        assert_eq!(config.background, Color::new(24, 116, 205));
        assert_eq!(config.dot_dim, Color::new(160, 160, 160));
    }

    #[test]
    fn radii_derive_from_insets() {
        let config = ClockConfig::builder().build();
        assert_eq!(config.second_hand_radius(), 200);
        assert_eq!(config.minute_hand_radius(), 180);
        assert_eq!(config.hour_hand_radius(), 150);
        assert_eq!(config.dot_ring_radius(), 210);
        assert_eq!((config.center_x(), config.center_y()), (250, 250));
    }

    #[test]
    fn builder_overrides_single_fields() {
        let config = ClockConfig::builder()
            .side(300)
            .show_readout(true)
            .build();
        assert_eq!(config.side, 300);
        assert_eq!(config.center_x(), 150);
        assert!(config.show_readout);
        // Untouched fields keep their defaults.
        assert_eq!(config.dot_ring_inset, 40);
    }
}
