//! Listed (lookup-table) colormaps and the built-in morgenstemning palette.

pub mod morgenstemning;

use once_cell::sync::Lazy;

pub use morgenstemning::MORGEN_COLORS;

/// Colormap backed by a fixed list of RGB colors in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListedColormap {
    name: String,
    colors: Vec<[f64; 3]>,
}

/// Forward palette, dark to light.
pub static MORGENSTEMNING: Lazy<ListedColormap> =
    Lazy::new(|| ListedColormap::new("morgenstemning", MORGEN_COLORS.to_vec()));

/// Reversed palette, light to dark.
pub static INV_MORGENSTEMNING: Lazy<ListedColormap> =
    Lazy::new(|| MORGENSTEMNING.reversed("inv_morgenstemning"));

/// Look up a built-in colormap by name.
pub fn by_name(name: &str) -> Option<&'static ListedColormap> {
    match name {
        "morgenstemning" => Some(&*MORGENSTEMNING),
        "inv_morgenstemning" => Some(&*INV_MORGENSTEMNING),
        _ => None,
    }
}

impl ListedColormap {
    pub fn new(name: impl Into<String>, colors: Vec<[f64; 3]>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colors(&self) -> &[[f64; 3]] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Same colors in reverse order under a new name.
    pub fn reversed(&self, name: impl Into<String>) -> Self {
        let mut colors = self.colors.clone();
        colors.reverse();
        Self::new(name, colors)
    }

    /// Color for a normalized value `t`.
    ///
    /// `t` in `[0, 1]` picks entry `floor(t * N)`, with `t == 1` mapping to
    /// the last entry. Values below 0 clamp to the first entry, values above
    /// 1 to the last. Returns black for an empty map.
    ///
    /// NaN also maps to the first entry. Unlike matplotlib, there is no
    /// transparent "bad" color.
    pub fn color_at(&self, t: f64) -> [f64; 3] {
        let n = self.colors.len();
        if n == 0 {
            return [0.0, 0.0, 0.0];
        }
        let idx = if t.is_nan() || t <= 0.0 {
            0
        } else {
            ((t * n as f64).floor() as usize).min(n - 1)
        };
        self.colors[idx]
    }

    /// [`color_at`](Self::color_at) as 8-bit RGB.
    pub fn rgb8_at(&self, t: f64) -> (u8, u8, u8) {
        let [r, g, b] = self.color_at(t);
        (to_u8(r), to_u8(g), to_u8(b))
    }
}

fn to_u8(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        assert_eq!(MORGEN_COLORS.len(), 256);
        assert_eq!(MORGEN_COLORS[0], [0.0, 0.0, 0.0]);
        assert_eq!(MORGEN_COLORS[255], [1.0, 1.0, 1.0]);
        for c in MORGEN_COLORS.iter() {
            assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
        }
    }

    #[test]
    fn test_named_palettes() {
        assert_eq!(MORGENSTEMNING.name(), "morgenstemning");
        assert_eq!(INV_MORGENSTEMNING.name(), "inv_morgenstemning");
        assert_eq!(INV_MORGENSTEMNING.len(), 256);
        assert_eq!(INV_MORGENSTEMNING.colors()[0], [1.0, 1.0, 1.0]);
        assert_eq!(INV_MORGENSTEMNING.colors()[255], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_reverse_is_involution() {
        let twice = MORGENSTEMNING.reversed("x").reversed("morgenstemning");
        assert_eq!(&twice, &*MORGENSTEMNING);
    }

    #[test]
    fn test_color_at_endpoints() {
        assert_eq!(MORGENSTEMNING.color_at(0.0), MORGEN_COLORS[0]);
        assert_eq!(MORGENSTEMNING.color_at(1.0), MORGEN_COLORS[255]);
        assert_eq!(MORGENSTEMNING.color_at(-3.0), MORGEN_COLORS[0]);
        assert_eq!(MORGENSTEMNING.color_at(7.0), MORGEN_COLORS[255]);
        assert_eq!(MORGENSTEMNING.color_at(0.5), MORGEN_COLORS[128]);
    }

    #[test]
    fn test_nan_is_first_entry_not_transparent() {
        assert_eq!(MORGENSTEMNING.color_at(f64::NAN), MORGEN_COLORS[0]);
        assert_eq!(INV_MORGENSTEMNING.color_at(f64::NAN), MORGEN_COLORS[255]);
        assert_eq!(MORGENSTEMNING.rgb8_at(f64::NAN), MORGENSTEMNING.rgb8_at(0.0));
    }

    #[test]
    fn test_rgb8() {
        assert_eq!(MORGENSTEMNING.rgb8_at(0.0), (0, 0, 0));
        assert_eq!(MORGENSTEMNING.rgb8_at(1.0), (255, 255, 255));
    }

    #[test]
    fn test_by_name() {
        assert!(by_name("morgenstemning").is_some());
        assert_eq!(by_name("inv_morgenstemning").map(|c| c.name()), Some("inv_morgenstemning"));
        assert!(by_name("viridis").is_none());
    }

    #[test]
    fn test_empty_map() {
        let m = ListedColormap::new("empty", Vec::new());
        assert!(m.is_empty());
        assert_eq!(m.color_at(0.3), [0.0, 0.0, 0.0]);
    }
}
