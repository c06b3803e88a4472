// Property tests for the cover crop geometry
use image_color_picker::picker::{CropRegion, PickerError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn crop_stays_inside_source_and_is_centered(
        natural_width in 1u32..20_000,
        natural_height in 1u32..20_000,
        target_width in 1u32..4_000,
        target_height in 1u32..4_000,
    ) {
        let crop = CropRegion::cover(natural_width, natural_height, target_width, target_height)
            .expect("non-zero dimensions should crop");
        let nw = natural_width as f64;
        let nh = natural_height as f64;

        prop_assert!(crop.source_width <= nw);
        prop_assert!(crop.source_height <= nh);
        prop_assert!(crop.source_width > 0.0 && crop.source_height > 0.0);
        prop_assert_eq!(crop.source_x, (nw - crop.source_width) / 2.0);
        prop_assert_eq!(crop.source_y, (nh - crop.source_height) / 2.0);

        // 至少有一条边完整使用
        prop_assert!(crop.source_width == nw || crop.source_height == nh);
    }

    #[test]
    fn crop_matches_target_aspect_ratio(
        natural_width in 1u32..20_000,
        natural_height in 1u32..20_000,
        target_width in 1u32..4_000,
        target_height in 1u32..4_000,
    ) {
        let crop = CropRegion::cover(natural_width, natural_height, target_width, target_height)
            .expect("non-zero dimensions should crop");
        let crop_ratio = crop.source_width / crop.source_height;
        let canvas_ratio = target_width as f64 / target_height as f64;

        prop_assert!((crop_ratio - canvas_ratio).abs() <= canvas_ratio * 1e-9);
    }

    #[test]
    fn equal_ratio_uses_whole_image(
        unit_width in 1u32..200,
        unit_height in 1u32..200,
        scale in 1u32..50,
    ) {
        let crop = CropRegion::cover(unit_width * scale, unit_height * scale, unit_width, unit_height)
            .expect("non-zero dimensions should crop");

        prop_assert_eq!(crop.source_x, 0.0);
        prop_assert_eq!(crop.source_y, 0.0);
        prop_assert_eq!(crop.source_width, (unit_width * scale) as f64);
        prop_assert_eq!(crop.source_height, (unit_height * scale) as f64);
    }

    #[test]
    fn zero_dimension_never_panics(other in 0u32..10_000, zero_width in any::<bool>()) {
        let (w, h) = if zero_width { (0, other) } else { (other, 0) };
        let result = CropRegion::cover(w, h, 320, 320);

        let is_degenerate = matches!(result, Err(PickerError::DegenerateImage { .. }));
        prop_assert!(is_degenerate);
    }
}
