//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use blockskin::MosaicError;
    use blockskin::analysis::table::TileId;
    use blockskin::color::{ColorKey, Rgb};
    use blockskin::io::error::{WithPath, invalid_source, malformed_store};
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MosaicError::FileSystem {
            path: "/tmp/colors.json".into(),
            operation: "read store",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(MosaicError::EmptyTileLibrary.source().is_none());
    }

    // Tests missing palette entry names color and pixel
    // Verified by omitting the position from the message
    #[test]
    fn test_palette_entry_missing_message() {
        let error = MosaicError::PaletteEntryMissing {
            color: ColorKey::Opaque(Rgb::new(255, 0, 16)),
            position: (12, 40),
        };

        let message = error.to_string();
        assert!(message.contains("#ff0010"));
        assert!(message.contains("12, 40"));
    }

    // Tests malformed store error names the store and reason
    // Verified by omitting the path from the message
    #[test]
    fn test_malformed_store_message() {
        let error = malformed_store(Path::new("block_colors.json"), &"expected an array");

        let message = error.to_string();
        assert!(message.contains("block_colors.json"));
        assert!(message.contains("expected an array"));
    }

    // Tests invalid block and source messages carry their context
    // Verified by omitting the block name from the message
    #[test]
    fn test_invalid_data_messages() {
        let error = MosaicError::InvalidTile {
            tile: TileId::from("lava_still"),
            reason: "texture is 16x320, expected 16x16".to_string(),
        };
        assert!(error.to_string().contains("lava_still"));
        assert!(error.to_string().contains("16x320"));

        let error = invalid_source(&"skin is 64x32, expected 64x64");
        assert!(error.to_string().contains("64x32"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = MosaicError::ImageExport {
            path: PathBuf::from("/restricted/output.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output.png"));
        assert!(error.source().is_some());
        assert!(
            message.contains("access denied"),
            "Error message should include source error details: {message}"
        );
    }

    // Tests io errors gain path and operation
    // Verified by dropping the operation name
    #[test]
    fn test_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::other("disk full"));

        let message = result
            .with_path(Path::new("out/colors.json"), "write store")
            .unwrap_err()
            .to_string();
        assert!(message.contains("write store"));
        assert!(message.contains("out/colors.json"));
        assert!(message.contains("disk full"));
    }
}
