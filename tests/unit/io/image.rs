//! Tests for raster rendering and PNG export

#[cfg(test)]
mod tests {
    use image::Rgba;
    use lifegrid::LifeError;
    use lifegrid::engine::grid::GridEngine;
    use lifegrid::engine::presets::CoordinatePolicy;
    use lifegrid::io::configuration::{MAX_CELL_SIZE_PX, MAX_GRID_DIMENSION};
    use lifegrid::io::image::{Palette, export_png, image_side, render_generation};

    #[test]
    fn test_image_side_validation() {
        assert_eq!(image_side(25, 8).ok(), Some(200));
        assert!(matches!(
            image_side(25, 0),
            Err(LifeError::InvalidParameter { parameter: "cell_size", .. })
        ));
        assert!(image_side(25, MAX_CELL_SIZE_PX + 1).is_err());
    }

    // Tests the total pixel count is bounded, not just the side length
    // Verified by checking only for u32 overflow of the side
    #[test]
    fn test_image_side_rejects_oversized_images() {
        assert_eq!(image_side(16_384, 1).ok(), Some(16_384));
        assert!(matches!(
            image_side(MAX_GRID_DIMENSION, MAX_CELL_SIZE_PX),
            Err(LifeError::InvalidParameter { parameter: "cell_size", .. })
        ));
        assert!(image_side(2_049, 8).is_err());
    }

    // Tests live cells are painted as full blocks at row/column positions
    // Verified by swapping row and column when painting
    #[test]
    fn test_render_generation_paints_cells() {
        let mut grid = GridEngine::new(3).unwrap();
        grid.apply_preset(&[[0, 2]], CoordinatePolicy::Strict)
            .unwrap();
        let palette = Palette::default();

        let img = render_generation(&grid, 4, &palette).unwrap();

        assert_eq!(img.dimensions(), (12, 12));
        // Cell (row 0, col 2) covers x in 8..12, y in 0..4
        assert_eq!(img.get_pixel(8, 0), &Rgba(palette.alive));
        assert_eq!(img.get_pixel(11, 3), &Rgba(palette.alive));
        assert_eq!(img.get_pixel(0, 8), &Rgba(palette.dead));
        assert_eq!(img.get_pixel(8, 4), &Rgba(palette.dead));
    }

    #[test]
    fn test_export_png_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frames").join("board.png");

        let mut grid = GridEngine::new(5).unwrap();
        grid.toggle(2, 2).unwrap();
        export_png(&grid, 2, &Palette::default(), &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (10, 10));
        assert_eq!(loaded.get_pixel(4, 4), &Rgba(Palette::default().alive));
    }

    #[test]
    fn test_export_png_to_invalid_path() {
        let grid = GridEngine::new(5).unwrap();
        let result = export_png(
            &grid,
            2,
            &Palette::default(),
            std::path::Path::new("/dev/null/board.png"),
        );
        assert!(result.is_err());
    }
}
