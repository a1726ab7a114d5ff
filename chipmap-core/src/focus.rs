/// Side length of the square map viewport, in pixels.
pub const VIEWPORT_SIZE: u32 = 320;

/// The visible sub-rectangle of the active zoom image.
///
/// `w` and `h` are always [`VIEWPORT_SIZE`]. After [`clamp`](Self::clamp)
/// the origin satisfies `0 <= x <= image_w - w` and `0 <= y <= image_h - h`
/// whenever the image is at least as large as the viewport; a smaller
/// image pins the origin at 0 on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Default for FocusRect {
    fn default() -> Self {
        Self::at(0, 0)
    }
}

impl FocusRect {
    /// Viewport-sized rectangle with its origin at `(x, y)`.
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            w: VIEWPORT_SIZE as i32,
            h: VIEWPORT_SIZE as i32,
        }
    }

    /// Window centred on an image of the given size, already clamped.
    pub fn centered(image_width: u32, image_height: u32) -> Self {
        let half = VIEWPORT_SIZE as i32 / 2;
        Self::at(
            image_width as i32 / 2 - half,
            image_height as i32 / 2 - half,
        )
        .clamp(image_width, image_height)
    }

    /// Pull the origin back inside the image. Idempotent.
    pub fn clamp(self, image_width: u32, image_height: u32) -> Self {
        let max_x = (image_width as i32 - self.w).max(0);
        let max_y = (image_height as i32 - self.h).max(0);
        Self {
            x: self.x.clamp(0, max_x),
            y: self.y.clamp(0, max_y),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_origin_is_pulled_to_zero() {
        let r = FocusRect::at(-50, -7).clamp(640, 640);
        assert_eq!((r.x, r.y), (0, 0));
    }

    #[test]
    fn oversized_origin_is_pulled_to_far_edge() {
        let r = FocusRect::at(10_000, 900).clamp(960, 640);
        assert_eq!((r.x, r.y), (640, 320));
    }

    #[test]
    fn clamp_is_idempotent() {
        for &(x, y) in &[(-1000, 5), (0, 0), (123, 456), (i32::MAX, i32::MIN)] {
            for &(w, h) in &[(320, 320), (640, 480), (2880, 2880), (100, 900)] {
                let once = FocusRect::at(x, y).clamp(w, h);
                assert_eq!(once.clamp(w, h), once);
            }
        }
    }

    #[test]
    fn clamp_keeps_window_inside_image() {
        for &(x, y) in &[(-5, -5), (300, 300), (5000, 5000)] {
            let r = FocusRect::at(x, y).clamp(1280, 960);
            assert!(r.x >= 0 && r.x + r.w <= 1280);
            assert!(r.y >= 0 && r.y + r.h <= 960);
        }
    }

    #[test]
    fn image_smaller_than_viewport_pins_origin() {
        let r = FocusRect::at(40, 40).clamp(288, 288);
        assert_eq!((r.x, r.y), (0, 0));
    }

    #[test]
    fn centered_window() {
        let r = FocusRect::centered(1280, 960);
        assert_eq!((r.x, r.y), (480, 320));
        assert_eq!((r.w, r.h), (320, 320));
    }
}
