use crate::wall::NormalizedPos;

/// Check whether `candidate` sits too close to any existing icon
///
/// Too close means strictly closer than `min_spacing`; an icon exactly
/// `min_spacing` away does not block the candidate.
pub fn is_occupied(candidate: NormalizedPos, existing: &[NormalizedPos], min_spacing: f32) -> bool {
    existing.iter().any(|&pos| candidate.distance(pos) < min_spacing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_wall_is_never_occupied() {
        assert!(!is_occupied(NormalizedPos::new(0.5, 0.5), &[], 0.25));
        assert!(!is_occupied(NormalizedPos::new(0.5, 0.5), &[], f32::MAX));
    }

    #[test]
    fn test_threshold_is_strict() {
        let a = NormalizedPos::new(0.5, 0.5);
        let b = NormalizedPos::new(0.75, 0.5);
        // Exactly min_spacing apart: allowed
        assert!(!is_occupied(a, &[b], 0.25));
        // Any larger threshold blocks it
        assert!(is_occupied(a, &[b], 0.26));
    }

    #[test]
    fn test_any_neighbor_blocks() {
        let existing = [
            NormalizedPos::new(0.2, 0.2),
            NormalizedPos::new(0.8, 0.8),
        ];
        assert!(is_occupied(NormalizedPos::new(0.75, 0.8), &existing, 0.1));
        assert!(!is_occupied(NormalizedPos::new(0.5, 0.5), &existing, 0.1));
    }

    #[test]
    fn test_symmetry() {
        let points = [
            NormalizedPos::new(0.1, 0.1),
            NormalizedPos::new(0.35, 0.2),
            NormalizedPos::new(0.9, 0.5),
            NormalizedPos::new(0.5, 0.5),
        ];
        for &a in &points {
            for &b in &points {
                for spacing in [0.0, 0.1, 0.25, 0.5, 1.0] {
                    assert_eq!(
                        is_occupied(a, &[b], spacing),
                        is_occupied(b, &[a], spacing),
                        "asymmetric for {:?} / {:?} at {}",
                        a,
                        b,
                        spacing
                    );
                }
            }
        }
    }
}
