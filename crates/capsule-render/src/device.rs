//! Display density and pixel snapping.

use crate::types::{Point, Rect, Size};

/// Metrics of the display a widget is laid out for.
///
/// Pixel snapping depends on the display scale, so it is always computed
/// against an explicit `DeviceMetrics` value rather than a global screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceMetrics {
    scale: f32,
}

impl Default for DeviceMetrics {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl DeviceMetrics {
    /// Create metrics for a display with the given scale factor.
    ///
    /// Non-positive or non-finite scales fall back to 1.0.
    pub fn new(scale: f32) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        Self { scale }
    }

    /// The number of device pixels per point.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// The size of one device pixel in points.
    #[inline]
    pub fn one_pixel(&self) -> f32 {
        1.0 / self.scale
    }

    /// Round a value down to the nearest device pixel.
    #[inline]
    pub fn floor_to_pixel(&self, value: f32) -> f32 {
        (value * self.scale).floor() / self.scale
    }

    /// Round a value up to the nearest device pixel.
    #[inline]
    pub fn ceil_to_pixel(&self, value: f32) -> f32 {
        (value * self.scale).ceil() / self.scale
    }

    /// Round a size down to whole device pixels.
    pub fn floor_size(&self, size: Size) -> Size {
        Size::new(self.floor_to_pixel(size.width), self.floor_to_pixel(size.height))
    }

    /// Round a size up to whole device pixels.
    pub fn ceil_size(&self, size: Size) -> Size {
        Size::new(self.ceil_to_pixel(size.width), self.ceil_to_pixel(size.height))
    }

    /// Round a point down to whole device pixels.
    pub fn floor_point(&self, point: Point) -> Point {
        Point::new(self.floor_to_pixel(point.x), self.floor_to_pixel(point.y))
    }

    /// Round a point up to whole device pixels.
    pub fn ceil_point(&self, point: Point) -> Point {
        Point::new(self.ceil_to_pixel(point.x), self.ceil_to_pixel(point.y))
    }

    /// Round a rectangle's origin and size down to whole device pixels.
    pub fn floor_rect(&self, rect: Rect) -> Rect {
        Rect::from_origin_size(self.floor_point(rect.origin), self.floor_size(rect.size))
    }

    /// Round a rectangle's origin and size up to whole device pixels.
    pub fn ceil_rect(&self, rect: Rect) -> Rect {
        Rect::from_origin_size(self.ceil_point(rect.origin), self.ceil_size(rect.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_to_device_pixels() {
        let retina = DeviceMetrics::new(2.0);
        assert_eq!(retina.floor_to_pixel(4.3), 4.0);
        assert_eq!(retina.floor_to_pixel(4.6), 4.5);
        assert_eq!(retina.ceil_to_pixel(4.1), 4.5);
        assert_eq!(retina.one_pixel(), 0.5);

        let three_x = DeviceMetrics::new(3.0);
        assert!((three_x.floor_to_pixel(3.5) - 10.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn half_corner_radius_snaps_down() {
        assert_eq!(DeviceMetrics::new(1.0).floor_to_pixel(7.0 / 2.0), 3.0);
        assert_eq!(DeviceMetrics::new(2.0).floor_to_pixel(7.0 / 2.0), 3.5);
    }

    #[test]
    fn rejects_bad_scale() {
        assert_eq!(DeviceMetrics::new(0.0).scale(), 1.0);
        assert_eq!(DeviceMetrics::new(f32::NAN).scale(), 1.0);
    }

    #[test]
    fn snaps_rects() {
        let device = DeviceMetrics::new(2.0);
        let rect = Rect::new(0.3, 0.8, 10.2, 5.1);
        assert_eq!(device.floor_rect(rect), Rect::new(0.0, 0.5, 10.0, 5.0));
        assert_eq!(device.ceil_rect(rect), Rect::new(0.5, 1.0, 10.5, 5.5));
    }
}
