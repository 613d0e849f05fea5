//! Chart geometry
//!
//! Projects a series into a plot area. Points sit on a categorical x axis
//! (one slot per period, evenly spaced); the y axis spans the data range plus
//! 10% padding on each side.

use super::generator::TimeSeriesPoint;

/// Pixel margins around the plot area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 50.0,
            right: 30.0,
            top: 20.0,
            bottom: 40.0,
        }
    }
}

/// Scales for one rendered series
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub y_min: f64,
    pub y_max: f64,
    count: usize,
}

impl ChartLayout {
    pub fn new(points: &[TimeSeriesPoint], width: f64, height: f64) -> Self {
        Self::with_margins(points, width, height, Margins::default())
    }

    pub fn with_margins(
        points: &[TimeSeriesPoint],
        width: f64,
        height: f64,
        margins: Margins,
    ) -> Self {
        let mut y_min = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
        let mut y_max = points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);

        if !y_min.is_finite() || !y_max.is_finite() {
            y_min = 0.0;
            y_max = 1.0;
        }

        let range = y_max - y_min;
        let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
        y_min -= padding;
        y_max += padding;

        Self {
            width,
            height,
            margins,
            y_min,
            y_max,
            count: points.len(),
        }
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.margins.left - self.margins.right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.margins.top - self.margins.bottom).max(0.0)
    }

    /// Width of one category slot
    fn slot(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.plot_width() / self.count as f64
        }
    }

    /// Horizontal center of the point at `index`
    pub fn x(&self, index: usize) -> f64 {
        self.margins.left + self.slot() * (index as f64 + 0.5)
    }

    /// Vertical position of `value` (canvas y grows downward)
    pub fn y(&self, value: f64) -> f64 {
        self.margins.top + (self.y_max - value) / (self.y_max - self.y_min) * self.plot_height()
    }

    /// Evenly spaced axis values from `y_max` down to `y_min`
    pub fn y_ticks(&self, intervals: usize) -> Vec<f64> {
        let intervals = intervals.max(1);
        (0..=intervals)
            .map(|i| self.y_max - (i as f64 / intervals as f64) * (self.y_max - self.y_min))
            .collect()
    }

    /// Index of the point whose slot contains horizontal position `x`
    pub fn nearest_index(&self, x: f64) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let offset = (x - self.margins.left) / self.slot();
        let index = offset.floor().max(0.0) as usize;
        Some(index.min(self.count - 1))
    }

    /// Every `step`-th index is labeled so axis text does not overlap
    pub fn label_step(&self, min_spacing: f64) -> usize {
        let slot = self.slot();
        if slot <= 0.0 {
            return 1;
        }
        (min_spacing / slot).ceil().max(1.0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(values: &[f64]) -> Vec<TimeSeriesPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| TimeSeriesPoint::new((2000 + i).to_string(), *v))
            .collect()
    }

    #[test]
    fn test_y_range_padding() {
        let layout = ChartLayout::new(&points(&[50.0, 60.0, 70.0]), 800.0, 400.0);
        assert!((layout.y_min - 48.0).abs() < 1e-9);
        assert!((layout.y_max - 72.0).abs() < 1e-9);
    }

    #[test]
    fn test_flat_and_empty_ranges() {
        let flat = ChartLayout::new(&points(&[5.0, 5.0]), 800.0, 400.0);
        assert_eq!((flat.y_min, flat.y_max), (4.0, 6.0));

        let empty = ChartLayout::new(&[], 800.0, 400.0);
        assert!(empty.y_max > empty.y_min);
        assert_eq!(empty.nearest_index(100.0), None);
    }

    #[test]
    fn test_projection() {
        let layout = ChartLayout::new(&points(&[50.0, 60.0, 70.0, 80.0]), 820.0, 400.0);
        // plot width 740, four slots of 185
        assert!((layout.x(0) - (50.0 + 92.5)).abs() < 1e-9);
        assert!((layout.x(3) - (50.0 + 185.0 * 3.5)).abs() < 1e-9);

        assert!((layout.y(layout.y_max) - layout.margins.top).abs() < 1e-9);
        let bottom = layout.margins.top + layout.plot_height();
        assert!((layout.y(layout.y_min) - bottom).abs() < 1e-9);
    }

    #[test]
    fn test_nearest_index_clamps() {
        let layout = ChartLayout::new(&points(&[1.0, 2.0, 3.0, 4.0]), 820.0, 400.0);
        assert_eq!(layout.nearest_index(0.0), Some(0));
        assert_eq!(layout.nearest_index(layout.x(2)), Some(2));
        assert_eq!(layout.nearest_index(10_000.0), Some(3));
    }

    #[test]
    fn test_ticks_and_label_step() {
        let layout = ChartLayout::new(&points(&[0.0, 100.0]), 820.0, 400.0);
        let ticks = layout.y_ticks(5);
        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[0], layout.y_max);
        assert!((ticks[5] - layout.y_min).abs() < 1e-9);

        let twenty = ChartLayout::new(&points(&[1.0; 20]), 820.0, 400.0);
        // 37 px per slot, labels need 60 px
        assert_eq!(twenty.label_step(60.0), 2);
    }
}
