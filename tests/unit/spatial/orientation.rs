//! Tests for orientation encoding and display

#[cfg(test)]
mod tests {
    use jigsawtile::spatial::Orientation;
    use std::collections::HashSet;

    // Tests every orientation is distinct and listed at its own index
    // Verified by masking the flip bit in from_parts
    #[test]
    fn test_index_round_trip() {
        let seen: HashSet<Orientation> = (0..8)
            .map(|index| Orientation::from_parts(index & 1 == 1, index >> 1))
            .collect();
        assert_eq!(seen.len(), 8);
        for (index, orientation) in Orientation::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(orientation.index()), index);
            assert!(seen.contains(&orientation));
        }
    }

    // Tests flip bit and quarter-turn bits decode independently
    // Verified by swapping the flip and rotation bit positions
    #[test]
    fn test_parts() {
        let orientation = Orientation::from_parts(true, 3);
        assert!(orientation.is_flipped());
        assert_eq!(orientation.quarter_turns(), 3);
        assert_eq!(orientation.index(), 7);

        assert_eq!(Orientation::from_parts(false, 5), Orientation::from_parts(false, 1));
        assert_eq!(Orientation::from_parts(false, 0), Orientation::IDENTITY);
        assert_eq!(Orientation::default(), Orientation::IDENTITY);
    }

    // Tests display names flips before rotations
    // Verified by dropping the flip prefix
    #[test]
    fn test_display() {
        assert_eq!(Orientation::IDENTITY.to_string(), "rot0");
        assert_eq!(Orientation::from_parts(false, 1).to_string(), "rot90");
        assert_eq!(Orientation::from_parts(true, 2).to_string(), "flip+rot180");
    }
}
