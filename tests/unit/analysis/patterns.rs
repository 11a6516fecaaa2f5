//! Tests for pattern parsing, matching and multi-orientation scanning

#[cfg(test)]
mod tests {
    use jigsawtile::analysis::{Habitat, Pattern};
    use jigsawtile::io::configuration::SEA_MONSTER;
    use jigsawtile::spatial::{Grid, Orientation};

    const MONSTER_OVERLAP: &str = include_str!("../../data/monster_overlap.txt");

    fn grid(text: &str) -> Grid {
        let lines: Vec<&str> = text.lines().collect();
        Grid::from_lines(&lines).expect("valid grid")
    }

    // Tests the sea monster has fifteen cells in a 3x20 box
    // Verified by counting spaces as significant cells
    #[test]
    fn test_sea_monster_shape() {
        let monster = Pattern::sea_monster();
        assert_eq!(monster.len(), 15);
        assert_eq!(monster.height(), 3);
        assert_eq!(monster.width(), 20);
        assert!(monster.offsets().contains(&(0, 18)));
        assert!(monster.offsets().contains(&(2, 1)));
        assert_eq!(monster, Pattern::from_rows(&SEA_MONSTER, '#'));
    }

    // Tests matching only checks significant cells
    // Verified by requiring unmarked cells to be clear
    #[test]
    fn test_matches_at() {
        let pattern = Pattern::from_rows(&["#.", ".#"], '#');
        let image = grid("###\n###\n");
        assert!(pattern.matches_at(&image, 0, 0));
        assert!(pattern.matches_at(&image, 0, 1));
        assert!(!pattern.matches_at(&image, 1, 0));
    }

    // Tests overlapping matches share cells in the roughness count
    // Verified by summing pattern sizes instead of taking the union
    #[test]
    fn test_overlapping_monsters() {
        let image = grid(MONSTER_OVERLAP);
        let habitat = Pattern::sea_monster().scan(&image).expect("monsters found");
        assert_eq!(habitat.orientation, Orientation::IDENTITY);
        assert_eq!(habitat.instances, 2);
        assert_eq!(habitat.covered.len(), 21);
        assert_eq!(image.count_set(), 25);
        assert_eq!(habitat.roughness, 4);
    }

    // Tests scanning finds a pattern only present after reorienting
    // Verified by scanning the identity orientation alone
    #[test]
    fn test_scan_other_orientation() {
        let pattern = Pattern::from_rows(&["##", "#."], '#');
        // Only the reflected L shape is present
        let image = grid("....\n.##.\n..#.\n....\n");
        let habitat = pattern.scan(&image).expect("found after reorienting");
        assert_ne!(habitat.orientation, Orientation::IDENTITY);
        assert_eq!(habitat.instances, 1);
        assert_eq!(habitat.roughness, 0);
        assert_eq!(habitat.image, image.oriented(habitat.orientation));
    }

    // Tests absence is distinct from a zero roughness result
    // Verified by returning a default habitat when nothing matches
    #[test]
    fn test_not_found() {
        let image = grid("#####\n#####\n#####\n");
        let found: Option<Habitat> = Pattern::sea_monster().scan(&image);
        assert!(found.is_none());
    }

    // Tests patterns larger than the image produce no matches
    // Verified by removing the bounds check in find_in
    #[test]
    fn test_pattern_larger_than_image() {
        let (instances, covered) = Pattern::sea_monster().find_in(&grid("##\n##\n"));
        assert_eq!(instances, 0);
        assert!(covered.is_empty());
        assert!(Pattern::from_rows(&["..."], '#').is_empty());
    }
}
