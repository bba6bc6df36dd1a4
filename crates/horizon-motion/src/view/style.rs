//! Style attributes carried by render-tree nodes.
//!
//! Styles are plain data for the host renderer: colors, sizes and spacing. The
//! [`DemoStyles`] sheet holds the values the demo screen is laid out with.

/// An RGBA color with non-premultiplied components in the 0.0-1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a color from RGBA components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "#FF0000FF").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let len = hex.len();

        if (len != 6 && len != 8) || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        let a = if len == 8 {
            u8::from_str_radix(&hex[6..8], 16).ok()?
        } else {
            255
        };

        Some(Self::from_rgba8(r, g, b, a))
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not opaque.
    pub fn to_hex(self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a >= 1.0 {
            format!(
                "#{:02X}{:02X}{:02X}",
                channel(self.r),
                channel(self.g),
                channel(self.b)
            )
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                channel(self.r),
                channel(self.g),
                channel(self.b),
                channel(self.a)
            )
        }
    }

    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Main-axis and cross-axis alignment of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
}

/// Spacing on the four sides of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    /// The same spacing on every side.
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Vertical spacing top and bottom, horizontal spacing left and right.
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Spacing below the box only.
    pub const fn bottom(value: f32) -> Self {
        Self {
            top: 0.0,
            right: 0.0,
            bottom: value,
            left: 0.0,
        }
    }
}

/// Visual attributes of a node. Unset fields inherit the renderer's defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub background: Option<Color>,
    pub color: Option<Color>,
    pub font_size: Option<f32>,
    pub font_weight: FontWeight,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub padding: Insets,
    pub margin: Insets,
    pub border_radius: f32,
    pub elevation: f32,
    pub flex: Option<f32>,
    pub justify_content: Align,
    pub align_items: Align,
}

/// The style sheet of the demo screen.
pub struct DemoStyles;

impl DemoStyles {
    /// Full-screen container, centered on a light cyan background.
    pub fn container() -> Style {
        Style {
            flex: Some(1.0),
            justify_content: Align::Center,
            align_items: Align::Center,
            background: Some(Color::from_rgba8(0xE0, 0xF7, 0xFA, 0xFF)),
            padding: Insets::all(20.0),
            ..Style::default()
        }
    }

    /// Screen title in teal.
    pub fn title() -> Style {
        Style {
            font_size: Some(24.0),
            font_weight: FontWeight::Bold,
            margin: Insets::bottom(30.0),
            color: Some(Color::from_rgba8(0x00, 0x79, 0x6B, 0xFF)),
            ..Style::default()
        }
    }

    /// Pink rounded button body.
    pub fn button_container() -> Style {
        Style {
            padding: Insets::symmetric(15.0, 30.0),
            background: Some(Color::from_rgba8(0xFF, 0x40, 0x81, 0xFF)),
            border_radius: 25.0,
            align_items: Align::Center,
            margin: Insets::symmetric(10.0, 0.0),
            elevation: 2.0,
            ..Style::default()
        }
    }

    /// White bold button label.
    pub fn button_text() -> Style {
        Style {
            color: Some(Color::WHITE),
            font_weight: FontWeight::Bold,
            font_size: Some(16.0),
            ..Style::default()
        }
    }

    /// Yellow box whose opacity is animated.
    pub fn fading_box() -> Style {
        Self::square(Color::from_rgba8(0xFF, 0xEB, 0x3B, 0xFF))
    }

    /// Indigo box that slides vertically.
    pub fn transition_box() -> Style {
        Self::square(Color::from_rgba8(0x3F, 0x51, 0xB5, 0xFF))
    }

    fn square(background: Color) -> Style {
        Style {
            width: Some(100.0),
            height: Some(100.0),
            background: Some(background),
            border_radius: 10.0,
            margin: Insets::symmetric(20.0, 0.0),
            ..Style::default()
        }
    }
}
