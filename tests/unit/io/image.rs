//! Tests for PNG export of grids and scanned habitats

#[cfg(test)]
mod tests {
    use jigsawtile::PuzzleError;
    use jigsawtile::analysis::Pattern;
    use jigsawtile::io::configuration::{CLEAR_COLOR, MATCH_COLOR, SET_COLOR};
    use jigsawtile::io::image::{export_grid_as_png, export_habitat_png};
    use jigsawtile::spatial::Grid;
    use tempfile::TempDir;

    const MONSTER_OVERLAP: &str = include_str!("../../data/monster_overlap.txt");

    fn pixel(path: &std::path::Path, x: u32, y: u32) -> [u8; 4] {
        image::open(path)
            .expect("exported image opens")
            .to_rgba8()
            .get_pixel(x, y)
            .0
    }

    // Tests one pixel per cell in the configured colors
    // Verified by swapping the set and clear colors
    #[test]
    fn test_export_grid() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("grid.png");
        let grid = Grid::from_lines(&["#..", "..#"]).expect("valid grid");

        export_grid_as_png(&grid, &path).expect("exports");

        let img = image::open(&path).expect("exported image opens");
        assert_eq!((img.width(), img.height()), (3, 2));
        assert_eq!(pixel(&path, 0, 0), SET_COLOR);
        assert_eq!(pixel(&path, 1, 0), CLEAR_COLOR);
        assert_eq!(pixel(&path, 2, 1), SET_COLOR);
    }

    // Tests matched cells are highlighted over set cells
    // Verified by coloring only by cell state
    #[test]
    fn test_export_habitat() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("habitat.png");
        let lines: Vec<&str> = MONSTER_OVERLAP.lines().collect();
        let image = Grid::from_lines(&lines).expect("valid grid");
        let habitat = Pattern::sea_monster().scan(&image).expect("monsters found");

        export_habitat_png(&habitat, &path).expect("exports");

        // Row 0 column 0 is set but unmatched; row 2 column 0 starts the first monster body
        assert_eq!(pixel(&path, 0, 0), SET_COLOR);
        assert_eq!(pixel(&path, 0, 2), MATCH_COLOR);
        assert_eq!(pixel(&path, 1, 0), CLEAR_COLOR);
    }

    // Tests unwritable destinations surface as errors
    // Verified by ignoring the save result
    #[test]
    fn test_export_to_directory_fails() {
        let dir = TempDir::new().expect("temp dir");
        let grid = Grid::from_lines(&["#"]).expect("valid grid");
        let result = export_grid_as_png(&grid, dir.path());
        assert!(matches!(
            result,
            Err(PuzzleError::ImageExport { .. } | PuzzleError::FileSystem { .. })
        ));
    }
}
