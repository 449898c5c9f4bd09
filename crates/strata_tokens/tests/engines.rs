use strata_tokens::{
    generate_scale, generate_shades, pick_text_color, render, ColorAdjustment, DesignSystemState,
    ExportFormat, ExportOptions, Rgb, TokenError, TypographySettings,
};

fn ramp(hex: &str, adjust: ColorAdjustment) -> Vec<String> {
    generate_shades(hex, adjust)
        .unwrap()
        .into_iter()
        .map(|shade| shade.value)
        .collect()
}

fn settings(base: f64, ratio: f64) -> TypographySettings {
    TypographySettings {
        base_font_size: base,
        scale_ratio: ratio,
        base_line_height: 1.5,
        base_unit: 8.0,
        ..Default::default()
    }
}

#[test]
fn scale_has_eleven_ordered_steps() {
    for (base, ratio) in [(16.0, 1.333), (14.0, 1.067), (18.0, 1.618), (12.5, 0.9)] {
        let scale = generate_scale(&settings(base, ratio)).unwrap();
        let steps: Vec<i32> = scale.iter().map(|s| s.step).collect();
        assert_eq!(steps, (-2..=8).collect::<Vec<_>>(), "base={base} ratio={ratio}");
    }
}

#[test]
fn scale_is_geometric() {
    let ratio = 1.25;
    let scale = generate_scale(&settings(16.0, ratio)).unwrap();
    for pair in scale.windows(2) {
        let expected = pair[0].size_px * ratio;
        assert!(
            (pair[1].size_px - expected).abs() < 1e-9 * expected,
            "step {} -> {}",
            pair[0].step,
            pair[1].step
        );
    }
}

#[test]
fn perfect_fourth_scenario() {
    let scale = generate_scale(&settings(16.0, 1.333)).unwrap();

    let base = scale.iter().find(|s| s.step == 0).unwrap();
    assert_eq!(base.size_px, 16.0);
    assert_eq!(base.rem, "1.000");
    assert_eq!(base.line_height, "1.500");

    let first = scale.iter().find(|s| s.step == 1).unwrap();
    assert!((first.size_px - 21.328).abs() < 1e-9);
    assert_eq!(first.rem, "1.333");
    assert_eq!(first.line_height, "1.500");
    assert_eq!(first.rhythm.single, "2.000");
}

#[test]
fn metrics_round_from_the_stored_value() {
    // 10.2 / 16 is stored as 0.63749999...
    let scale = generate_scale(&settings(10.2, 1.333)).unwrap();
    let base = scale.iter().find(|s| s.step == 0).unwrap();
    assert_eq!(base.rem, "0.637");
    assert_eq!(base.px, "10.2");
}

#[test]
fn scale_rejects_bad_parameters() {
    for (base, ratio) in [(0.0, 1.333), (-16.0, 1.333), (16.0, 0.0), (16.0, -1.5), (f64::INFINITY, 1.2)] {
        let err = generate_scale(&settings(base, ratio)).unwrap_err();
        assert!(
            matches!(err, TokenError::InvalidParameter { .. }),
            "base={base} ratio={ratio}: {err}"
        );
    }
}

#[test]
fn overflowing_scale_is_rejected_before_export() {
    let state = DesignSystemState::default().with_typography(settings(16.0, 1e-200));
    assert!(matches!(
        generate_scale(&state.typography),
        Err(TokenError::InvalidParameter { .. })
    ));
    for &format in ExportFormat::all() {
        assert!(render(&state, format, &ExportOptions::all()).is_err(), "{format}");
    }
}

#[test]
fn generation_is_deterministic() {
    let a = generate_scale(&settings(17.0, 1.2)).unwrap();
    let b = generate_scale(&settings(17.0, 1.2)).unwrap();
    assert_eq!(a, b);

    let adjust = ColorAdjustment::new(20, -10, 5);
    assert_eq!(
        generate_shades("#10B981", adjust).unwrap(),
        generate_shades("#10B981", adjust).unwrap()
    );
}

#[test]
fn ramp_has_conventional_names() {
    let shades = generate_shades("#3B82F6", ColorAdjustment::default()).unwrap();
    let names: Vec<&str> = shades.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        ["50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950"]
    );
}

#[test]
fn ramp_500_is_the_base_color() {
    for hex in ["#3B82F6", "#ec4899", "#000000", "#ffffff", "#808080"] {
        let shades = generate_shades(hex, ColorAdjustment::default()).unwrap();
        assert_eq!(shades[5].value, hex.to_ascii_lowercase());
    }
}

#[test]
fn ramp_lightens_toward_50_and_darkens_toward_950() {
    let shades = generate_shades("#3B82F6", ColorAdjustment::default()).unwrap();
    let colors: Vec<Rgb> = shades.iter().map(|s| Rgb::parse(&s.value).unwrap()).collect();

    let lightest = colors[0];
    let darkest = colors[10];
    assert!(lightest.r > darkest.r);
    assert!(lightest.g > darkest.g);
    assert!(lightest.b > darkest.b);

    for pair in colors.windows(2) {
        assert!(pair[0].yiq() > pair[1].yiq(), "{} !> {}", pair[0], pair[1]);
    }
}

#[test]
fn saturation_alone_pulls_toward_channel_mean() {
    assert_eq!(
        ramp("#3b82f6", ColorAdjustment::new(0, -50, 0)),
        [
            "#ffffff", "#e0e8f3", "#c2d0e7", "#a3b9db", "#85a1cf", "#668ac4", "#526e9c",
            "#3d5375", "#29374e", "#141c27", "#000000"
        ]
    );
}

#[test]
fn adjustments_apply_luminance_then_contrast_then_saturation() {
    assert_eq!(
        ramp("#3b82f6", ColorAdjustment::new(20, -10, 5)),
        [
            "#ffffff", "#eaf6fe", "#bfd9fb", "#94bdf9", "#69a0f7", "#3d84f4", "#2f68c5",
            "#214d94", "#133163", "#051631", "#000001"
        ]
    );
    // contrast and saturation clamp, so the ends no longer reach white and black
    assert_eq!(
        ramp("#3b82f6", ColorAdjustment::new(30, 40, -20)),
        [
            "#dff6ff", "#b5deff", "#8ac6ff", "#5fadff", "#3595ff", "#0a7dff", "#0259e7",
            "#003798", "#001549", "#000000", "#000000"
        ]
    );
}

#[test]
fn ramp_rejects_malformed_hex() {
    for hex in ["#12345", "#GG0000", "blue", "#3B82F6FF"] {
        assert!(generate_shades(hex, ColorAdjustment::default()).is_err(), "{hex}");
    }
}

#[test]
fn text_color_contrast() {
    assert_eq!(pick_text_color("#ffffff").unwrap(), "#000000");
    assert_eq!(pick_text_color("#000000").unwrap(), "#ffffff");
    assert_eq!(pick_text_color("#FEF3C7").unwrap(), "#000000");
    assert_eq!(pick_text_color("#1E3A8A").unwrap(), "#ffffff");
}
