//! Axis styling.
//!
//! [`adjust_spines`] produces the spartan look used for publication figures:
//! only the requested spines are drawn, in gray, offset outward from the
//! data area, and tick marks are dropped on axes without a spine.

/// One edge of the axes frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spine {
    Left,
    Right,
    Top,
    Bottom,
}

impl Spine {
    pub const ALL: [Spine; 4] = [Spine::Left, Spine::Right, Spine::Top, Spine::Bottom];

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Some(Spine::Left),
            "right" => Some(Spine::Right),
            "top" => Some(Spine::Top),
            "bottom" => Some(Spine::Bottom),
            _ => None,
        }
    }
}

pub const BLACK: (u8, u8, u8) = (0, 0, 0);
pub const GRAY: (u8, u8, u8) = (128, 128, 128);

/// Default outward offset used by the spartan style, in points.
pub const DEFAULT_OUTWARD_POINTS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpineStyle {
    pub visible: bool,
    pub color: (u8, u8, u8),
    /// Offset away from the data area, in points.
    pub outward: f64,
}

impl Default for SpineStyle {
    fn default() -> Self {
        Self {
            visible: true,
            color: BLACK,
            outward: 0.0,
        }
    }
}

/// Frame and tick placement for one set of axes.
#[derive(Debug, Clone, PartialEq)]
pub struct AxesStyle {
    pub left: SpineStyle,
    pub right: SpineStyle,
    pub top: SpineStyle,
    pub bottom: SpineStyle,
    /// Spine carrying the x tick marks; `None` removes them.
    pub x_ticks: Option<Spine>,
    /// Spine carrying the y tick marks; `None` removes them.
    pub y_ticks: Option<Spine>,
}

impl Default for AxesStyle {
    fn default() -> Self {
        Self {
            left: SpineStyle::default(),
            right: SpineStyle::default(),
            top: SpineStyle::default(),
            bottom: SpineStyle::default(),
            x_ticks: Some(Spine::Bottom),
            y_ticks: Some(Spine::Left),
        }
    }
}

impl AxesStyle {
    /// Default frame run through [`adjust_spines`].
    pub fn spartan(spines: &[Spine], points_outward: f64) -> Self {
        let mut style = Self::default();
        adjust_spines(&mut style, spines, points_outward);
        style
    }

    pub fn spine(&self, which: Spine) -> &SpineStyle {
        match which {
            Spine::Left => &self.left,
            Spine::Right => &self.right,
            Spine::Top => &self.top,
            Spine::Bottom => &self.bottom,
        }
    }

    pub fn spine_mut(&mut self, which: Spine) -> &mut SpineStyle {
        match which {
            Spine::Left => &mut self.left,
            Spine::Right => &mut self.right,
            Spine::Top => &mut self.top,
            Spine::Bottom => &mut self.bottom,
        }
    }

    /// Largest outward offset of any visible spine, in points.
    pub fn max_outward(&self) -> f64 {
        Spine::ALL
            .iter()
            .map(|s| self.spine(*s))
            .filter(|s| s.visible)
            .map(|s| s.outward)
            .fold(0.0, f64::max)
    }
}

/// Keep only `spines`, colour them gray and push them `points_outward`
/// points away from the data. Y ticks stay only with a left spine and x
/// ticks only with a bottom spine.
pub fn adjust_spines(ax: &mut AxesStyle, spines: &[Spine], points_outward: f64) {
    for which in Spine::ALL {
        let spine = ax.spine_mut(which);
        if spines.contains(&which) {
            spine.visible = true;
            spine.outward = points_outward;
            spine.color = GRAY;
        } else {
            spine.visible = false;
        }
    }

    ax.y_ticks = if spines.contains(&Spine::Left) { Some(Spine::Left) } else { None };
    ax.x_ticks = if spines.contains(&Spine::Bottom) { Some(Spine::Bottom) } else { None };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_bottom() {
        let ax = AxesStyle::spartan(&[Spine::Left, Spine::Bottom], 10.0);
        assert!(ax.left.visible && ax.bottom.visible);
        assert!(!ax.right.visible && !ax.top.visible);
        assert_eq!(ax.left.color, GRAY);
        assert_eq!(ax.bottom.outward, 10.0);
        assert_eq!(ax.y_ticks, Some(Spine::Left));
        assert_eq!(ax.x_ticks, Some(Spine::Bottom));
    }

    #[test]
    fn test_no_left_removes_y_ticks() {
        let ax = AxesStyle::spartan(&[Spine::Bottom], 5.0);
        assert_eq!(ax.y_ticks, None);
        assert_eq!(ax.x_ticks, Some(Spine::Bottom));
    }

    #[test]
    fn test_empty_hides_everything() {
        let ax = AxesStyle::spartan(&[], DEFAULT_OUTWARD_POINTS);
        assert!(Spine::ALL.iter().all(|s| !ax.spine(*s).visible));
        assert_eq!(ax.x_ticks, None);
        assert_eq!(ax.y_ticks, None);
        assert_eq!(ax.max_outward(), 0.0);
    }

    #[test]
    fn test_max_outward_ignores_hidden() {
        let mut ax = AxesStyle::spartan(&[Spine::Left], 4.0);
        ax.right.outward = 50.0;
        assert_eq!(ax.max_outward(), 4.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Spine::parse("Left"), Some(Spine::Left));
        assert_eq!(Spine::parse("bottom"), Some(Spine::Bottom));
        assert_eq!(Spine::parse("middle"), None);
    }
}
