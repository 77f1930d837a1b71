//! Tests for JSON palette and color table stores

#[cfg(test)]
mod tests {
    use blockskin::MosaicError;
    use blockskin::algorithm::palette::Palette;
    use blockskin::analysis::table::{RepresentativeColorTable, TileColor, TileId};
    use blockskin::color::Rgb;
    use blockskin::io::store::{JsonFileStore, MemoryStore, Store};
    use std::fs;

    fn sample_palette() -> Palette {
        (0..40u8)
            .map(|i| {
                (
                    Rgb::new(i.wrapping_mul(37), i, 255 - i),
                    TileId::new(format!("block_{}", i % 7)),
                )
            })
            .collect()
    }

    fn sample_table() -> RepresentativeColorTable {
        (0..20u8)
            .rev()
            .map(|i| {
                let color = if i % 5 == 0 {
                    TileColor::Unusable
                } else {
                    TileColor::Usable(Rgb::new(i * 12, 255 - i, i))
                };
                (TileId::new(format!("tile_{i}")), color)
            })
            .collect()
    }

    // Tests palettes survive a save and load through a file
    // Verified by writing keys in uppercase without accepting them on load
    #[test]
    fn test_palette_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::<Palette>::new(dir.path().join("colors.json"));

        let palette = sample_palette();
        store.save(&palette).unwrap();
        assert_eq!(store.load().unwrap(), palette);
    }

    // Tests tables survive a save and load with their order intact
    // Verified by sorting the table on save
    #[test]
    fn test_table_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store =
            JsonFileStore::<RepresentativeColorTable>::new(dir.path().join("cache/blocks.json"));

        let table = sample_table();
        store.save(&table).unwrap();
        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, table);
        assert_eq!(
            reloaded.iter().next().map(|(id, _)| id.as_str()),
            Some("tile_19")
        );
    }

    // Tests the file is indented for hand editing
    // Verified by writing compact JSON
    #[test]
    fn test_file_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.json");
        let mut store = JsonFileStore::<Palette>::new(&path);

        let palette: Palette = [(Rgb::new(255, 0, 16), TileId::from("block"))]
            .into_iter()
            .collect();
        store.save(&palette).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n  \"#ff0010\": \"block\"\n}\n");
        assert_eq!(store.path(), path);
    }

    // Tests the in-memory store behaves like the file store
    // Verified by keeping the value instead of its JSON text
    #[test]
    fn test_memory_store_round_trip() {
        let mut palettes = MemoryStore::<Palette>::new();
        let mut tables = MemoryStore::<RepresentativeColorTable>::default();

        palettes.save(&sample_palette()).unwrap();
        tables.save(&sample_table()).unwrap();

        assert_eq!(palettes.load().unwrap(), sample_palette());
        assert_eq!(tables.load().unwrap(), sample_table());
        assert!(palettes.text().is_some_and(|t| t.contains("block_0")));
    }

    // Tests an empty store reports a load failure
    // Verified by returning an empty palette
    #[test]
    fn test_missing_store_is_load_failure() {
        let err = MemoryStore::<Palette>::new().load().unwrap_err();
        assert!(matches!(err, MosaicError::FileSystem { .. }));

        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::<Palette>::new(dir.path().join("absent.json"));
        assert!(matches!(
            store.load().unwrap_err(),
            MosaicError::FileSystem { .. }
        ));
    }

    // Tests content of the wrong shape is malformed
    // Verified by mapping parse errors to file system errors
    #[test]
    fn test_wrong_shape_is_malformed() {
        for text in ["not json", "[1, 2, 3]", r#"{"stone": [1, 2]}"#] {
            let store = MemoryStore::<RepresentativeColorTable>::with_text(text);
            assert!(
                matches!(store.load(), Err(MosaicError::MalformedStore { .. })),
                "accepted {text}"
            );
        }

        let store = MemoryStore::<Palette>::with_text(r##"{"#ff0010": ["stone"]}"##);
        assert!(matches!(
            store.load(),
            Err(MosaicError::MalformedStore { .. })
        ));
    }
}
