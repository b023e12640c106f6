//! Canvas layout and point hit-testing

/// Outer chart margin in pixels
pub const CHART_MARGIN: f64 = 75.0;

/// Scatter point radius in pixels
pub const POINT_RADIUS: f64 = 4.0;

/// Extra pixels around a point that still count as a hover hit
pub const POINT_HIT_SLACK: f64 = 2.0;

/// Plot-area geometry for a canvas of a given size
///
/// The plot area is the canvas minus one margin on the leading sides and
/// half a margin on the trailing sides, as in the original chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl ChartLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: CHART_MARGIN,
        }
    }

    pub fn plot_width(&self) -> f64 {
        self.width - 1.5 * self.margin
    }

    pub fn plot_height(&self) -> f64 {
        self.height - 1.5 * self.margin
    }

    /// Translate plot coordinates to canvas coordinates
    pub fn to_canvas(&self, x: f64, y: f64) -> (f64, f64) {
        (x + self.margin, y + self.margin)
    }

    /// Translate canvas coordinates (e.g. a pointer position) to plot
    /// coordinates
    pub fn to_plot(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.margin, y - self.margin)
    }

    /// Whether a pointer at plot coordinates hits a plotted point
    pub fn hits_point(&self, pointer: (f64, f64), point: (f64, f64)) -> bool {
        let dx = pointer.0 - point.0;
        let dy = pointer.1 - point.1;
        let r = POINT_RADIUS + POINT_HIT_SLACK;
        dx * dx + dy * dy <= r * r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_area() {
        let layout = ChartLayout::new(1250.0, 500.0);
        assert_eq!(layout.plot_width(), 1250.0 - 112.5);
        assert_eq!(layout.plot_height(), 500.0 - 112.5);
    }

    #[test]
    fn test_coordinate_round_trip() {
        let layout = ChartLayout::new(1250.0, 500.0);
        let (cx, cy) = layout.to_canvas(100.0, 200.0);
        assert_eq!((cx, cy), (175.0, 275.0));
        assert_eq!(layout.to_plot(cx, cy), (100.0, 200.0));
    }

    #[test]
    fn test_hit_testing() {
        let layout = ChartLayout::new(1250.0, 500.0);
        assert!(layout.hits_point((100.0, 100.0), (100.0, 100.0)));
        assert!(layout.hits_point((104.0, 103.0), (100.0, 100.0)));
        assert!(!layout.hits_point((110.0, 100.0), (100.0, 100.0)));
    }
}
