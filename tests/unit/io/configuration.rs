//! Tests for generation constants and default parameter consistency

#[cfg(test)]
mod tests {
    use driftmap::io::configuration::{
        BAND_COUNT, BORDER_WIDTH, DEFAULT_DENSITY_MODIFIERS, DEFAULT_GRID_SIZE,
        DEFAULT_ITERATION_COUNT, DEFAULT_ORIGIN_COUNT, DEFAULT_SEED, DEFAULT_SEED_MAGNITUDE,
        DIFFUSION_GIF_NAME, GIF_FRAME_DELAY_MS, MAX_GRID_DIMENSION, MIN_GRID_SIZE,
        ORIGIN_ATTEMPT_FACTOR, PERCENT_SCALE, VIEWER_MIN_FRAME_DELAY_MS,
    };

    // Tests the border geometry constants are consistent
    // Verified by shrinking the minimum below the border
    #[test]
    fn test_geometry_constants() {
        assert_eq!(BORDER_WIDTH, 2);
        assert_eq!(MIN_GRID_SIZE, 5);
        assert!(MIN_GRID_SIZE > 2 * BORDER_WIDTH);
        assert!(MAX_GRID_DIMENSION >= MIN_GRID_SIZE);
    }

    // Tests the sampling constants match the documented draw range
    // Verified by changing constant values
    #[test]
    fn test_sampling_constants() {
        assert_eq!(BAND_COUNT, 5);
        assert_eq!(PERCENT_SCALE, 100);
        assert!(ORIGIN_ATTEMPT_FACTOR > 0);
    }

    // Tests the default parameters describe a valid run
    // Verified by setting any default outside its bound
    #[test]
    fn test_default_parameters_are_valid() {
        assert_eq!(DEFAULT_SEED, 42);
        assert!(DEFAULT_GRID_SIZE >= MIN_GRID_SIZE);
        assert!(DEFAULT_GRID_SIZE <= MAX_GRID_DIMENSION);
        assert!(DEFAULT_SEED_MAGNITUDE > 0.0);
        assert!(DEFAULT_ITERATION_COUNT > 0);

        let span = DEFAULT_GRID_SIZE - 2 * BORDER_WIDTH;
        assert!(DEFAULT_ORIGIN_COUNT <= span * span);

        assert!(!DEFAULT_DENSITY_MODIFIERS.is_empty());
        assert!(DEFAULT_DENSITY_MODIFIERS.iter().all(|&m| m > 0.0));
    }

    // Tests output names carry the expected image extensions
    // Verified by renaming an output constant
    #[test]
    fn test_output_names() {
        use driftmap::io::configuration::{
            BANDED_IMAGE_NAME, DIFFUSED_IMAGE_NAME, POPULATED_IMAGE_PREFIX, SEEDED_IMAGE_NAME,
            SHEET_IMAGE_NAME,
        };

        for name in [
            SEEDED_IMAGE_NAME,
            DIFFUSED_IMAGE_NAME,
            BANDED_IMAGE_NAME,
            SHEET_IMAGE_NAME,
        ] {
            assert!(name.ends_with(".png"), "{name} is not a PNG name");
        }

        assert!(!POPULATED_IMAGE_PREFIX.is_empty());
        assert!(DIFFUSION_GIF_NAME.ends_with(".gif"));
    }

    // Tests the animation delays respect the viewer floor
    // Verified by lowering the viewer minimum below the frame delay
    #[test]
    fn test_animation_delays() {
        assert!(GIF_FRAME_DELAY_MS > 0);
        assert!(VIEWER_MIN_FRAME_DELAY_MS >= GIF_FRAME_DELAY_MS);
    }
}
