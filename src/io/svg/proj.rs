use geo::{Coord, Rect};

/// Maps data coordinates to SVG user space (x right, y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Projector {
    /// Coordinates are already screen coordinates.
    Identity,
    /// Uniform scale of a lon/lat box into the viewport, centered, y inverted.
    Fit { min_x: f64, max_y: f64, scale: f64, offset_x: f64, offset_y: f64 },
}

impl Projector {
    /// Fit `bounds` into a `width` x `height` viewport inset by `margin`,
    /// preserving aspect ratio.
    pub(crate) fn fit(bounds: &Rect<f64>, width: f64, height: f64, margin: f64) -> Self {
        let inner_w = (width - 2.0 * margin).max(0.0);
        let inner_h = (height - 2.0 * margin).max(0.0);

        let scale = [inner_w / bounds.width(), inner_h / bounds.height()].into_iter()
            .filter(|s| s.is_finite())
            .reduce(f64::min)
            .unwrap_or(1.0);

        Self::Fit {
            min_x: bounds.min().x,
            max_y: bounds.max().y,
            scale,
            offset_x: margin + (inner_w - bounds.width() * scale) / 2.0,
            offset_y: margin + (inner_h - bounds.height() * scale) / 2.0,
        }
    }

    pub(crate) fn project(&self, coord: &Coord<f64>) -> (f64, f64) {
        match *self {
            Self::Identity => (coord.x, coord.y),
            Self::Fit { min_x, max_y, scale, offset_x, offset_y } => (
                offset_x + (coord.x - min_x) * scale,
                offset_y + (max_y - coord.y) * scale, // invert vertically
            ),
        }
    }
}
