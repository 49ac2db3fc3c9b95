//! Position model for the pursuit track.
//!
//! The wolf starts at one end of the track and closes on the runner by a
//! fixed step per wrong guess, catching up exactly when the guess limit is
//! reached. The model only knows the two track endpoints it is handed;
//! renderers compute those from their own layout.

/// Offset of the pursuing wolf along the track for a given wrong-guess count.
///
/// Returns `track_start + wrong_count * ((track_end - track_start) / max_wrong)`,
/// clamped to `track_end`. Monotone in `wrong_count`:
/// `pursuit_offset(0, ..)` is `track_start` and
/// `pursuit_offset(max_wrong, ..)` is `track_end`.
pub fn pursuit_offset(wrong_count: u32, max_wrong: u32, track_start: f64, track_end: f64) -> f64 {
    let step = (track_end - track_start) / f64::from(max_wrong.max(1));
    let offset = track_start + f64::from(wrong_count) * step;
    offset.min(track_end)
}

/// `pursuit_offset` snapped to a terminal column, for character-cell renderers.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn pursuit_column(wrong_count: u32, max_wrong: u32, track_cells: u16) -> u16 {
    let end = f64::from(track_cells.saturating_sub(1));
    pursuit_offset(wrong_count, max_wrong, 0.0, end).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_starts_at_track_start() {
        assert_eq!(pursuit_offset(0, 6, 0.0, 100.0), 0.0);
        assert_eq!(pursuit_offset(0, 6, 12.0, 80.0), 12.0);
    }

    #[test]
    fn test_offset_reaches_track_end_at_limit() {
        assert_eq!(pursuit_offset(6, 6, 0.0, 100.0), 100.0);
        assert_eq!(pursuit_offset(6, 6, 12.0, 80.0), 80.0);
    }

    #[test]
    fn test_offset_midpoint() {
        assert_eq!(pursuit_offset(3, 6, 0.0, 100.0), 50.0);
    }

    #[test]
    fn test_offset_clamped_past_limit() {
        assert_eq!(pursuit_offset(10, 6, 0.0, 100.0), 100.0);
    }

    #[test]
    fn test_offset_monotone() {
        let mut last = f64::MIN;
        for wrong in 0..=8 {
            let offset = pursuit_offset(wrong, 6, 12.0, 300.0);
            assert!(offset >= last, "offset regressed at wrong={wrong}");
            last = offset;
        }
    }

    #[test]
    fn test_offset_zero_limit_does_not_divide_by_zero() {
        let offset = pursuit_offset(0, 0, 0.0, 100.0);
        assert!(offset.is_finite());
    }

    #[test]
    fn test_column_endpoints() {
        assert_eq!(pursuit_column(0, 6, 40), 0);
        assert_eq!(pursuit_column(6, 6, 40), 39);
        assert_eq!(pursuit_column(9, 6, 40), 39);
    }
}
