use image::{DynamicImage, RgbImage};
use imager::{Imager, ResizeMode};
use proptest::prelude::*;

fn create_test_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    }))
}

fn dimension() -> impl Strategy<Value = u32> {
    1u32..=48
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    #[test]
    fn scale_hits_exact_box(src_w in dimension(), src_h in dimension(), w in dimension(), h in dimension()) {
        let mut imager = Imager::new(create_test_image(src_w, src_h));
        imager.resize_with(w, h, ResizeMode::Scale);
        prop_assert_eq!(imager.dimensions(), (w, h));
    }

    #[test]
    fn stretch_hits_exact_box(src_w in dimension(), src_h in dimension(), w in dimension(), h in dimension()) {
        let mut imager = Imager::new(create_test_image(src_w, src_h));
        imager.resize_with(w, h, ResizeMode::Stretch);
        prop_assert_eq!(imager.dimensions(), (w, h));
    }

    #[test]
    fn crop_mode_hits_exact_box(src_w in dimension(), src_h in dimension(), w in dimension(), h in dimension()) {
        let mut imager = Imager::new(create_test_image(src_w, src_h));
        imager.resize_with(w, h, ResizeMode::Crop);
        prop_assert_eq!(imager.dimensions(), (w, h));
    }

    #[test]
    fn fit_stays_inside_box_and_keeps_aspect(src_w in dimension(), src_h in dimension(), w in dimension(), h in dimension()) {
        let mut imager = Imager::new(create_test_image(src_w, src_h));
        imager.resize(w, h);
        let (out_w, out_h) = imager.dimensions();

        prop_assert!(out_w <= w && out_h <= h, "{}x{} outside {}x{}", out_w, out_h, w, h);
        // One side touches the box.
        prop_assert!(out_w == w || out_h == h, "{}x{} does not fill {}x{}", out_w, out_h, w, h);

        // Aspect ratio within one pixel of rounding on either axis.
        let expected_h = f64::from(out_w) * f64::from(src_h) / f64::from(src_w);
        let expected_w = f64::from(out_h) * f64::from(src_w) / f64::from(src_h);
        prop_assert!(
            (f64::from(out_h) - expected_h).abs() <= 1.0 || (f64::from(out_w) - expected_w).abs() <= 1.0,
            "{}x{} -> {}x{} lost the aspect ratio", src_w, src_h, out_w, out_h
        );
    }

    #[test]
    fn crop_never_exceeds_request(
        src_w in dimension(),
        src_h in dimension(),
        w in 0u32..=64,
        h in 0u32..=64,
        x in -64i32..=64,
        y in -64i32..=64,
    ) {
        let mut imager = Imager::new(create_test_image(src_w, src_h));
        imager.crop(w, h, x, y);
        let (out_w, out_h) = imager.dimensions();
        prop_assert!(out_w <= w.min(src_w));
        prop_assert!(out_h <= h.min(src_h));
    }
}
