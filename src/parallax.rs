/// Scroll multipliers for the three background depths. Farther layers move
/// slower than the content in front of them.
pub const SLOW_RATE: f64 = 0.1;
pub const MEDIUM_RATE: f64 = 0.3;
pub const FAST_RATE: f64 = 0.5;

/// Per-depth pixel offsets derived from the current vertical scroll
/// position. Recomputed on every scroll event and handed to the background
/// layers as an explicit value, never stashed in document-level state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParallaxFrame {
    pub slow: f64,
    pub medium: f64,
    pub fast: f64,
}

impl ParallaxFrame {
    pub fn at(scroll_y: f64) -> Self {
        Self {
            slow: scroll_y * SLOW_RATE,
            medium: scroll_y * MEDIUM_RATE,
            fast: scroll_y * FAST_RATE,
        }
    }
}

/// Center of the magenta glow, as viewport percentages. Orbits (50, 50)
/// with a 20 point radius, one full loop every ~6283 scrolled pixels.
pub fn primary_orb_center(scroll_y: f64) -> (f64, f64) {
    let angle = scroll_y * 0.001;
    (50.0 + angle.sin() * 20.0, 50.0 + angle.cos() * 20.0)
}

/// Center of the cyan glow; tighter orbit around (30, 70), twice the rate.
pub fn secondary_orb_center(scroll_y: f64) -> (f64, f64) {
    let angle = scroll_y * 0.002;
    (30.0 + angle.cos() * 15.0, 70.0 + angle.sin() * 15.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_at_rest() {
        let frame = ParallaxFrame::at(0.0);
        assert_eq!(frame, ParallaxFrame::default());
    }

    #[test]
    fn test_frame_rates() {
        let frame = ParallaxFrame::at(500.0);
        assert_eq!(frame.slow, 50.0);
        assert_eq!(frame.medium, 150.0);
        assert_eq!(frame.fast, 250.0);
    }

    #[test]
    fn test_depth_ordering() {
        // Deeper layers always trail shallower ones while scrolling down.
        let frame = ParallaxFrame::at(1234.0);
        assert!(frame.slow < frame.medium);
        assert!(frame.medium < frame.fast);
    }

    #[test]
    fn test_orb_centers_at_rest() {
        assert_eq!(primary_orb_center(0.0), (50.0, 70.0));
        assert_eq!(secondary_orb_center(0.0), (45.0, 70.0));
    }

    #[test]
    fn test_orb_centers_stay_in_band() {
        for step in 0..100 {
            let y = step as f64 * 137.0;
            let (px, py) = primary_orb_center(y);
            assert!((30.0..=70.0).contains(&px));
            assert!((30.0..=70.0).contains(&py));
            let (sx, sy) = secondary_orb_center(y);
            assert!((15.0..=45.0).contains(&sx));
            assert!((55.0..=85.0).contains(&sy));
        }
    }
}
