//! Tests for closest-block matching and its first-wins tie-break

#[cfg(test)]
mod tests {
    use blockskin::MosaicError;
    use blockskin::algorithm::matcher::closest;
    use blockskin::analysis::table::{RepresentativeColorTable, TileColor, TileId};
    use blockskin::color::Rgb;

    fn library(entries: &[(&str, TileColor)]) -> RepresentativeColorTable {
        entries
            .iter()
            .map(|&(name, color)| (TileId::from(name), color))
            .collect()
    }

    fn gray(level: u8) -> TileColor {
        TileColor::Usable(Rgb::new(level, level, level))
    }

    // Tests the first of two exact matches wins
    // Verified by comparing with <= instead of <
    #[test]
    fn test_exact_tie_keeps_first_inserted() {
        let table = library(&[("A", gray(0)), ("B", gray(10)), ("C", gray(10))]);

        let found = closest(Rgb::new(10, 10, 10), &table).unwrap();
        assert_eq!(found.tile.as_str(), "B");
        assert_eq!(found.distance, 0);
    }

    // Tests an equidistant later entry does not displace the earlier one
    // Verified by iterating the table in reverse
    #[test]
    fn test_equal_distance_keeps_first_seen() {
        let table = library(&[("A", gray(0)), ("B", gray(10))]);

        let found = closest(Rgb::new(5, 5, 5), &table).unwrap();
        assert_eq!(found.tile.as_str(), "A");
        assert_eq!(found.distance, 15);

        let reversed = library(&[("B", gray(10)), ("A", gray(0))]);
        let found = closest(Rgb::new(5, 5, 5), &reversed).unwrap();
        assert_eq!(found.tile.as_str(), "B");
    }

    // Tests the strictly closer entry wins regardless of position
    // Verified by returning the first entry unconditionally
    #[test]
    fn test_closer_later_entry_wins() {
        let table = library(&[
            ("white", gray(255)),
            ("red", TileColor::Usable(Rgb::new(200, 10, 10))),
            ("black", gray(0)),
        ]);

        let found = closest(Rgb::new(190, 20, 0), &table).unwrap();
        assert_eq!(found.tile.as_str(), "red");
        assert_eq!(found.distance, 10 + 10 + 10);
    }

    // Tests an empty library is a distinct error
    // Verified by returning a default identifier
    #[test]
    fn test_empty_table_is_error() {
        let err = closest(Rgb::new(1, 2, 3), &RepresentativeColorTable::new()).unwrap_err();
        assert!(matches!(err, MosaicError::EmptyTileLibrary));
    }

    // Tests an all-unusable library still yields its first entry
    // Verified by filtering unusable entries before the search
    #[test]
    fn test_all_unusable_returns_first() {
        let table = library(&[("glass", TileColor::Unusable), ("air", TileColor::Unusable)]);

        let found = closest(Rgb::new(255, 255, 255), &table).unwrap();
        assert_eq!(found.tile.as_str(), "glass");
        assert_eq!(found.distance, 3 * (1000 - 255));
    }
}
