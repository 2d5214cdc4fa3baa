//! Tests for PNG export including directory creation and error handling

#[cfg(test)]
mod tests {
    use exprart::ArtError;
    use exprart::io::image::{export_canvas_as_png, export_rgba_as_png};
    use exprart::render::pipeline::{GenerationConfig, Generator};
    use tempfile::TempDir;

    // Tests PNG round trip of a small buffer
    // Verified by swapping width and height on export
    #[test]
    fn test_export_rgba_creates_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("pattern.png");
        let rgba = vec![
            255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, //
            10, 20, 30, 255, 40, 50, 60, 255, 70, 80, 90, 255,
        ];

        export_rgba_as_png(&rgba, 3, 2, &path).expect("PNG export should succeed");

        let decoded = image::open(&path).expect("PNG decodes").to_rgba8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.into_raw(), rgba);
    }

    // Tests missing parent directories are created
    // Verified by removing directory creation
    #[test]
    fn test_export_creates_parent_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested").join("deeper").join("art.png");

        export_rgba_as_png(&[1, 2, 3, 255], 1, 1, &path).expect("PNG export should succeed");
        assert!(path.exists(), "PNG file should be created");
    }

    // Tests directory failures name the directory that could not be created
    // Verified by reporting a placeholder path
    #[test]
    fn test_export_directory_failure_names_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").expect("Failed to write file");
        let parent = blocker.join("nested");

        let result = export_rgba_as_png(&[0, 0, 0, 255], 1, 1, &parent.join("art.png"));
        assert!(matches!(
            result,
            Err(ArtError::FileSystem {
                ref path,
                operation: "create directory",
                ..
            }) if *path == parent
        ));
    }

    // Tests buffers that do not match the dimensions are rejected
    // Verified by padding short buffers
    #[test]
    fn test_export_rejects_mismatched_buffer() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("short.png");

        let result = export_rgba_as_png(&[0; 12], 2, 2, &path);
        assert!(matches!(
            result,
            Err(ArtError::InvalidParameter {
                parameter: "rgba",
                ..
            })
        ));
        assert!(!path.exists());
    }

    // Tests write failures surface as export errors
    // Verified by ignoring the save result
    #[test]
    fn test_export_into_directory_path_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let result = export_rgba_as_png(&[0, 0, 0, 255], 1, 1, temp_dir.path());
        assert!(result.is_err());
    }

    // Tests canvases export with their own dimensions
    // Verified by exporting a square image for any canvas
    #[test]
    fn test_export_canvas() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("canvas.png");
        let canvas = Generator::reference(GenerationConfig::default())
            .expect("default config is valid")
            .render(0, 5, 3)
            .expect("render succeeds");

        export_canvas_as_png(&canvas, &path).expect("PNG export should succeed");

        let decoded = image::open(&path).expect("PNG decodes").to_rgba8();
        assert_eq!(decoded.dimensions(), (5, 3));
        assert_eq!(decoded.as_raw().as_slice(), canvas.as_rgba());
    }
}
