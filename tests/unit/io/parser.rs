//! Tests for tile text parsing, file reading and rendering

#[cfg(test)]
mod tests {
    use jigsawtile::PuzzleError;
    use jigsawtile::io::parser::{parse_tiles, read_tiles, render_tiles};
    use jigsawtile::spatial::{Orientation, Tile};
    use std::fs;
    use tempfile::TempDir;

    const THREE_BY_THREE: &str = include_str!("../../data/three_by_three.txt");

    // Tests every block of the fixture parses with its id and rows
    // Verified by dropping the final block when no blank line follows
    #[test]
    fn test_parse_fixture() {
        let tiles = parse_tiles(THREE_BY_THREE).expect("fixture parses");
        assert_eq!(tiles.len(), 9);
        let first = tiles.first().expect("first tile");
        assert_eq!(first.id(), 1427);
        assert_eq!(first.side(), 6);
        assert_eq!(
            first.grid().to_lines().first().map(String::as_str),
            Some("..##..")
        );
    }

    // Tests a trailing block without a blank line and CRLF endings
    // Verified by splitting lines on '\n' only and keeping the '\r'
    #[test]
    fn test_trailing_block_and_crlf() {
        let text = "Tile 1:\r\n#..\r\n.#.\r\n..#\r\n\r\nTile 2:\r\n###\r\n...\r\n###";
        let tiles = parse_tiles(text).expect("parses");
        let ids: Vec<u32> = tiles.iter().map(Tile::id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(
            tiles.last().map(|tile| tile.grid().to_lines()),
            Some(vec!["###".to_string(), "...".to_string(), "###".to_string()])
        );
    }

    // Tests extra blank lines between blocks are skipped
    // Verified by starting a new block on every blank line
    #[test]
    fn test_multiple_blank_lines() {
        let text = "\n\nTile 5:\n###\n#.#\n###\n\n\n\nTile 6:\n...\n.#.\n...\n\n";
        assert_eq!(parse_tiles(text).map(|tiles| tiles.len()).ok(), Some(2));
    }

    // Tests a block without a header is rejected on its first line
    // Verified by treating any first line as a header
    #[test]
    fn test_missing_header() {
        match parse_tiles("#..\n.#.\n..#\n") {
            Err(PuzzleError::Parse { line, reason }) => {
                assert_eq!(line, 1);
                assert!(reason.contains("Tile"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        assert!(parse_tiles("Tile abc:\n###\n###\n###\n").is_err());
        assert!(parse_tiles("Tile 3\n###\n###\n###\n").is_err());
    }

    // Tests a header with no rows is rejected
    // Verified by skipping the empty block check
    #[test]
    fn test_empty_block() {
        match parse_tiles("Tile 1:\n\nTile 2:\n###\n###\n###\n") {
            Err(PuzzleError::Parse { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    // Tests bad cell characters report the line within the file
    // Verified by reporting the row index within the block
    #[test]
    fn test_bad_character_line() {
        let text = "Tile 1:\n###\n###\n###\n\nTile 2:\n###\n#?#\n###\n";
        match parse_tiles(text) {
            Err(PuzzleError::Parse { line, .. }) => assert_eq!(line, 8),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    // Tests non-square tiles are rejected
    // Verified by removing the square check in Tile::new
    #[test]
    fn test_non_square_tile() {
        assert!(matches!(
            parse_tiles("Tile 1:\n####\n####\n####\n"),
            Err(PuzzleError::InvalidTileData { .. })
        ));
    }

    // Tests reading from disk validates the set
    // Verified by returning the raw tiles without validation
    #[test]
    fn test_read_tiles() {
        let dir = TempDir::new().expect("temp dir");
        let good = dir.path().join("good.txt");
        fs::write(&good, THREE_BY_THREE).expect("write fixture");
        let set = read_tiles(&good).expect("reads");
        assert_eq!(set.tiles_per_side(), 3);

        let duplicated = dir.path().join("dup.txt");
        fs::write(
            &duplicated,
            "Tile 1:\n###\n#.#\n###\n\nTile 1:\n###\n#.#\n###\n\nTile 2:\n...\n...\n...\n\nTile 3:\n...\n...\n...\n",
        )
        .expect("write duplicate");
        assert!(matches!(
            read_tiles(&duplicated),
            Err(PuzzleError::InvalidTileData { .. })
        ));

        assert!(matches!(
            read_tiles(&dir.path().join("missing.txt")),
            Err(PuzzleError::FileSystem { .. })
        ));
    }

    // Tests rendered text parses back into the same grids
    // Verified by rendering the original cells instead of the oriented ones
    #[test]
    fn test_render_reparse() {
        let mut tiles = parse_tiles(THREE_BY_THREE).expect("fixture parses");
        for tile in &mut tiles {
            tile.rotate(Orientation::from_parts(true, 1));
        }
        let text = render_tiles(&tiles);
        let reparsed = parse_tiles(&text).expect("rendered text parses");
        assert_eq!(reparsed.len(), tiles.len());
        for (before, after) in tiles.iter().zip(&reparsed) {
            assert_eq!(before.id(), after.id());
            assert_eq!(before.grid(), after.grid());
        }
    }
}
