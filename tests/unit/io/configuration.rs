//! Tests for solver constants and export settings

#[cfg(test)]
mod tests {
    use jigsawtile::io::configuration::{
        CLEAR_CELL, CLEAR_COLOR, DEFAULT_MAX_STEPS, MATCH_COLOR, MIN_TILE_SIDE,
        MIN_TILES_PER_SIDE, OUTPUT_SUFFIX, PATTERN_MARKER, SEA_MONSTER, SET_CELL, SET_COLOR,
        TILE_FILE_EXTENSION,
    };

    // Tests the sea monster rows share one width and hold fifteen markers
    // Verified by trimming trailing spaces from the first row
    #[test]
    fn test_sea_monster_rows() {
        assert!(SEA_MONSTER.iter().all(|row| row.len() == 20));
        let markers: usize = SEA_MONSTER
            .iter()
            .map(|row| row.chars().filter(|&ch| ch == PATTERN_MARKER).count())
            .sum();
        assert_eq!(markers, 15);
    }

    // Tests tiles keep an interior after losing their ring
    // Verified by lowering the minimum side to 2
    #[test]
    fn test_minimum_sizes() {
        assert_eq!(MIN_TILE_SIDE, 3);
        assert_eq!(MIN_TILES_PER_SIDE, 2);
    }

    // Tests cell characters are distinct
    // Verified by setting both characters to '#'
    #[test]
    fn test_cell_characters() {
        assert_eq!(SET_CELL, '#');
        assert_eq!(CLEAR_CELL, '.');
    }

    // Tests the step budget default
    // Verified by reducing the budget
    #[test]
    fn test_default_max_steps() {
        assert_eq!(DEFAULT_MAX_STEPS, 1_000_000);
    }

    // Tests export colors are opaque and distinct
    // Verified by reusing the set color for matches
    #[test]
    fn test_export_colors() {
        assert_ne!(SET_COLOR, CLEAR_COLOR);
        assert_ne!(SET_COLOR, MATCH_COLOR);
        assert!([SET_COLOR, CLEAR_COLOR, MATCH_COLOR].iter().all(|color| color[3] == 255));
    }

    // Tests output naming settings
    // Verified by changing the suffix
    #[test]
    fn test_file_settings() {
        assert_eq!(TILE_FILE_EXTENSION, "txt");
        assert_eq!(OUTPUT_SUFFIX, "_habitat");
    }
}
