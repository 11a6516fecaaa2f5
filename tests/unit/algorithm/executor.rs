//! Tests for the end-to-end puzzle pipeline

#[cfg(test)]
mod tests {
    use jigsawtile::PuzzleError;
    use jigsawtile::algorithm::executor::Puzzle;
    use jigsawtile::algorithm::solver::SolverConfig;
    use jigsawtile::analysis::Pattern;
    use jigsawtile::io::scramble::Scrambler;
    use jigsawtile::spatial::Orientation;
    use std::path::Path;

    const THREE_BY_THREE: &str = include_str!("../../data/three_by_three.txt");
    const HABITAT: &str = include_str!("../../data/habitat.txt");
    const UNSOLVABLE: &str = include_str!("../../data/unsolvable.txt");

    fn puzzle(text: &str) -> Puzzle {
        Puzzle::from_text(text, SolverConfig::default()).expect("valid puzzle")
    }

    // Tests the corner product needs no placement
    // Verified by assembling before computing the product
    #[test]
    fn test_corner_product_only() {
        let mut p = puzzle(THREE_BY_THREE);
        assert_eq!(p.corner_product().ok(), Some(20_899_048_083_289));
        assert_eq!(p.corner_ids().ok(), Some(vec![1171, 1951, 2971, 3079]));
        assert!(p.tiles().iter().all(|tile| tile.orientation() == Orientation::IDENTITY));
    }

    // Tests assembly reports the composite and materializes orientations
    // Verified by composing without rotating tiles first
    #[test]
    fn test_assemble() {
        let mut p = puzzle(THREE_BY_THREE);
        let assembly = p.assemble().expect("assembles");
        assert_eq!((assembly.image.rows(), assembly.image.cols()), (12, 12));
        assert!(assembly.steps > 0);
        for placed in assembly.placement.iter() {
            assert_eq!(
                p.tiles().get(placed.tile).map(|tile| tile.orientation()),
                Some(placed.orientation)
            );
        }
    }

    // Tests an image too small for the pattern reports not found
    // Verified by returning a zero-roughness habitat when nothing matches
    #[test]
    fn test_pattern_not_found() {
        let mut p = puzzle(THREE_BY_THREE);
        assert!(matches!(
            p.habitat(&Pattern::sea_monster()),
            Err(PuzzleError::PatternNotFound)
        ));
    }

    // Tests roughness of a puzzle with three sea monsters
    // Verified by subtracting per-match cell counts instead of the union
    #[test]
    fn test_roughness() {
        let mut p = puzzle(HABITAT);
        assert_eq!(p.corner_product().ok(), Some(23_699_284_108_639));
        let habitat = p.habitat(&Pattern::sea_monster()).expect("monsters found");
        assert_eq!(habitat.instances, 3);
        assert_eq!(habitat.covered.len(), 45);
        assert_eq!(habitat.roughness, 135);
        assert_eq!(p.roughness().ok(), Some(135));
    }

    // Tests exhaustion becomes an error at the pipeline boundary
    // Verified by returning an empty image on exhaustion
    #[test]
    fn test_no_placement() {
        let mut p = puzzle(UNSOLVABLE);
        assert!(p.classification().is_ok());
        assert!(matches!(p.place(), Ok((None, _))));
        assert!(matches!(p.assemble(), Err(PuzzleError::NoPlacement { .. })));
    }

    // Tests the configured step budget reaches the solver
    // Verified by building the solver with the default configuration
    #[test]
    fn test_step_budget_propagates() {
        let mut p = Puzzle::from_text(THREE_BY_THREE, SolverConfig { max_steps: 3 })
            .expect("valid puzzle");
        assert_eq!(p.config().max_steps, 3);
        assert!(matches!(
            p.assemble(),
            Err(PuzzleError::StepLimitExceeded { limit: 3 })
        ));
    }

    // Tests scrambled puzzles reassemble into their source image
    // Verified by dropping the flip bit when materializing orientations
    #[test]
    fn test_generated_round_trip() {
        let generated = Scrambler::new(8).generate(4, 12).expect("generates");
        let mut p = puzzle(&generated.to_text());
        let assembly = p.assemble().expect("assembles");
        assert!(
            Orientation::ALL
                .iter()
                .any(|&orientation| assembly.image.oriented(orientation) == generated.composite)
        );
        assert_eq!(p.corner_ids().ok(), Some(generated.corner_ids));
    }

    // Tests missing files surface as file system errors
    // Verified by mapping read failures to parse errors
    #[test]
    fn test_from_missing_file() {
        let result = Puzzle::from_file(Path::new("does/not/exist.txt"), SolverConfig::default());
        assert!(matches!(result, Err(PuzzleError::FileSystem { .. })));
    }
}
