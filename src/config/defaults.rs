//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default circle center X coordinate
pub const DEFAULT_CENTER_X: f64 = 0.0;

/// Default circle center Y coordinate
pub const DEFAULT_CENTER_Y: f64 = 0.0;

/// Default radius in meters
pub const DEFAULT_RADIUS: f64 = 5.0;

/// Default number of points on the circle
pub const DEFAULT_POINTS: usize = 8;

/// Default point marker color
pub const DEFAULT_POINT_COLOR: &str = "#ff0000";

/// Default center marker color
pub const DEFAULT_CENTER_COLOR: &str = "#0000ff";

/// Number the points by default
pub const DEFAULT_SHOW_INDEX: bool = true;

/// Default coordinate table format
pub const DEFAULT_FORMAT: &str = "text";

/// Default author name printed in reports
pub const DEFAULT_AUTHOR_NAME: &str = "Jan Novak";

/// Default author contact printed in reports
pub const DEFAULT_AUTHOR_CONTACT: &str = "jan.novak@example.com";

/// Default preview width in pixels
pub const DEFAULT_PLOT_WIDTH: u32 = 800;

/// Default preview height in pixels
pub const DEFAULT_PLOT_HEIGHT: u32 = 800;

/// Default report title line
pub const DEFAULT_REPORT_TITLE: &str = "Points on a circle";

/// Edge length of the raster embedded in reports, in pixels
pub const DEFAULT_REPORT_IMAGE_SIZE: u32 = 1200;

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7879;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "circle-points";
