//! Slideshow index arithmetic.

/// Normalize a requested slide index by wraparound: one past the end (or
/// further) wraps to the first slide, anything before the first wraps to
/// the last. An empty gallery pins the index at 0.
pub fn wrap_slide(requested: i64, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    if requested >= total as i64 {
        0
    } else if requested < 0 {
        total - 1
    } else {
        requested as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_past_the_end_to_zero() {
        assert_eq!(wrap_slide(3, 3), 0);
        assert_eq!(wrap_slide(7, 3), 0);
    }

    #[test]
    fn wraps_before_the_start_to_last() {
        assert_eq!(wrap_slide(-1, 3), 2);
        assert_eq!(wrap_slide(-5, 3), 2);
    }

    #[test]
    fn in_range_is_identity() {
        assert_eq!(wrap_slide(0, 3), 0);
        assert_eq!(wrap_slide(2, 3), 2);
    }

    #[test]
    fn single_image_gallery_stays_at_zero() {
        assert_eq!(wrap_slide(1, 1), 0);
        assert_eq!(wrap_slide(-1, 1), 0);
        assert_eq!(wrap_slide(0, 1), 0);
    }

    #[test]
    fn empty_gallery_pins_zero() {
        assert_eq!(wrap_slide(5, 0), 0);
        assert_eq!(wrap_slide(-5, 0), 0);
    }
}
