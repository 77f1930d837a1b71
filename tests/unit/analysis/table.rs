//! Tests for the representative color table, its ordering and its JSON form

#[cfg(test)]
mod tests {
    use blockskin::analysis::table::{RepresentativeColorTable, TileColor, TileId};
    use blockskin::color::Rgb;
    use std::path::Path;

    fn sample_table() -> RepresentativeColorTable {
        [
            ("stone", TileColor::Usable(Rgb::new(125, 125, 125))),
            ("glass", TileColor::Unusable),
            ("dirt", TileColor::Usable(Rgb::new(134, 96, 67))),
        ]
        .into_iter()
        .map(|(name, color)| (TileId::from(name), color))
        .collect()
    }

    // Tests identifiers come from file stems whatever the extension case
    // Verified by keeping the extension in the identifier
    #[test]
    fn test_tile_id_from_path() {
        assert_eq!(
            TileId::from_path(Path::new("blocks/red_wool.PNG")),
            TileId::from("red_wool")
        );
        assert_eq!(TileId::from_path(Path::new("blocks/stone.png")).as_str(), "stone");
    }

    // Tests iteration follows insertion order
    // Verified by sorting entries on insert
    #[test]
    fn test_iteration_is_insertion_order() {
        let table = sample_table();
        let order: Vec<&str> = table.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, vec!["stone", "glass", "dirt"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.usable_count(), 2);
        assert!(!table.is_empty());
    }

    // Tests unusable blocks are far from every real color
    // Verified by using 255 as the sentinel channel value
    #[test]
    fn test_unusable_distance_exceeds_any_real_distance() {
        let worst_real = TileColor::Usable(Rgb::new(0, 0, 0)).distance(Rgb::new(255, 255, 255));
        let best_unusable = TileColor::Unusable.distance(Rgb::new(255, 255, 255));
        assert_eq!(worst_real, 765);
        assert_eq!(best_unusable, 2235);
        assert_eq!(TileColor::Unusable.channels(), [1000, 1000, 1000]);
    }

    // Tests JSON keeps insertion order rather than sorting keys
    // Verified by serializing through a sorted map
    #[test]
    fn test_json_preserves_order() {
        let table = sample_table();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"{"stone":[125,125,125],"glass":[1000,1000,1000],"dirt":[134,96,67]}"#
        );

        let reloaded: RepresentativeColorTable = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, table);
    }

    // Tests document order drives the loaded order
    // Verified by collecting entries into a hash map first
    #[test]
    fn test_json_load_document_order() {
        let json = r#"{"zeta": [1, 2, 3], "alpha": [4, 5, 6]}"#;
        let table: RepresentativeColorTable = serde_json::from_str(json).unwrap();
        let order: Vec<&str> = table.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, vec!["zeta", "alpha"]);
    }

    // Tests malformed color arrays are rejected
    // Verified by clamping out-of-range channels
    #[test]
    fn test_json_rejects_bad_colors() {
        for json in [
            r#"{"a": [1, 2]}"#,
            r#"{"a": [1, 2, 3, 4]}"#,
            r#"{"a": [256, 0, 0]}"#,
            r#"{"a": [-1, 0, 0]}"#,
            r#"{"a": [1000, 1000, 999]}"#,
            r#"{"a": "stone"}"#,
            r#"["a", [1, 2, 3]]"#,
            r#"{"a": [1, 2, 3], "a": [4, 5, 6]}"#,
        ] {
            assert!(
                serde_json::from_str::<RepresentativeColorTable>(json).is_err(),
                "accepted {json}"
            );
        }
    }
}
