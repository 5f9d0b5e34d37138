use rand::Rng;
use rand::rngs::StdRng;

use crate::{TraceError, TraceResult};

/// Solid 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` notation (leading `#` optional, case-insensitive).
    pub fn from_hex(s: &str) -> TraceResult<Rgb8> {
        let t = s.trim();
        let t = t.strip_prefix('#').unwrap_or(t);

        fn hex_byte(pair: &str) -> TraceResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| TraceError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        if t.len() != 6 || !t.is_ascii() {
            return Err(TraceError::validation(format!(
                "hex color must be #RRGGBB, got \"{s}\""
            )));
        }
        Ok(Rgb8::new(
            hex_byte(&t[0..2])?,
            hex_byte(&t[2..4])?,
            hex_byte(&t[4..6])?,
        ))
    }

    /// Raise every channel by `offset`, clamping at 255.
    pub fn brighten(self, offset: u8) -> Rgb8 {
        Rgb8::new(
            self.r.saturating_add(offset),
            self.g.saturating_add(offset),
            self.b.saturating_add(offset),
        )
    }
}

/// Curated stroke/shape palettes; one set is fixed per run.
const PALETTES: [&[&str]; 11] = [
    &[
        "#d8f3dc", "#b7e4c7", "#95d5b2", "#74c69d", "#52b788", "#40916c", "#2d6a4f",
    ],
    &[
        "#fde2e4", "#fad2e1", "#fbc3d4", "#f9b4c8", "#f8a5bc", "#f796b0", "#f687a3",
    ],
    &["#ADD8E6", "#87CEEB", "#6495ED", "#4169E1", "#1E90FF"],
    &["#F2E7FE", "#E6CCFB", "#D1ACF6", "#BB8CEF", "#A36EE8"],
    &["#FFFAD3", "#FFECB3", "#FFDD88", "#FFCE5A", "#FFBF2B"],
    &["#FFCDD2", "#EF9A9A", "#E57373", "#EF5350", "#F44336"],
    &["#F5F5F5", "#E0E0E0", "#BDBDBD", "#9E9E9E", "#757575"],
    &["#D7CCC8", "#BCAAA4", "#A1887F", "#8D6E63", "#795548"],
    &["#E0F7FA", "#B2EBF2", "#80DEEA", "#4DD0E1", "#00BCD4"],
    &["#C5CAE9", "#9FA8DA", "#7986CB", "#5C6BC0", "#3F51B5"],
    &["#A8DADC", "#83C5BE", "#6D9F9D", "#548A85", "#3C756F"],
];

/// Dark board backgrounds; one is fixed per run.
const BACKGROUNDS: [&str; 6] = [
    "#111111", "#0D1B2A", "#1B263B", "#22223B", "#0A0A14", "#201E1F",
];

/// Channel offset between the background and its grid lines.
pub const GRID_LINE_BRIGHTEN: u8 = 20;

/// The run's shared color palette, fixed after selection.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: Vec<Rgb8>,
}

impl Palette {
    /// Pick one curated set for the run and parse its entries.
    pub fn pick(rng: &mut StdRng) -> TraceResult<Palette> {
        let set = PALETTES[rng.gen_range(0..PALETTES.len())];
        let colors = set
            .iter()
            .map(|s| Rgb8::from_hex(s))
            .collect::<TraceResult<Vec<_>>>()?;
        Ok(Palette { colors })
    }

    /// Uniform pick among the entries.
    pub fn choose(&self, rng: &mut StdRng) -> Rgb8 {
        self.colors[rng.gen_range(0..self.colors.len())]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_colors(colors: Vec<Rgb8>) -> Palette {
        Palette { colors }
    }
}

/// Pick the run's background color, in source hex notation.
pub fn pick_background(rng: &mut StdRng) -> &'static str {
    BACKGROUNDS[rng.gen_range(0..BACKGROUNDS.len())]
}

/// Derive the faint grid-line color from the background hex notation.
pub fn grid_line_color(bg_hex: &str) -> TraceResult<Rgb8> {
    Ok(Rgb8::from_hex(bg_hex)?.brighten(GRID_LINE_BRIGHTEN))
}
