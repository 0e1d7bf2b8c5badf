pub mod bars;
pub mod pgf;
pub mod render;
pub mod style;
pub mod types;

pub use bars::{render_log_bars, RenderedBars};
pub use pgf::{default_pgf_configuration, PgfConfig};
pub use render::{render_colormap_strip, render_plot};
pub use style::{adjust_spines, AxesStyle, Spine};
pub use types::{BarChartSpec, PlotSpec, RenderedPlot, Series};
