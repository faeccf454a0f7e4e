pub mod glyphs;
pub mod layout;
pub mod svg;
pub mod visual_config;

pub use layout::{place_planets, PlacedBody};
pub use svg::SvgRenderer;
pub use visual_config::{with_alpha, Palette};

/// Convert polar chart coordinates to canvas coordinates.
///
/// Chart angles are measured with 0° at the 9-o'clock position increasing
/// counter-clockwise (the wheel is pre-rotated so the Ascendant sits at 0°);
/// the canvas y axis points down.
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle_degrees: f64) -> (f64, f64) {
    let angle_radians = (-angle_degrees + 90.0).to_radians();
    (
        cx + radius * angle_radians.cos(),
        cy - radius * angle_radians.sin(),
    )
}
