use strata_tokens::{ColorRole, DesignSystemState, RatioPreset, TypographySettings};

#[test]
fn ratio_catalog_contains_expected_presets() {
    let ids: Vec<&str> = RatioPreset::all().iter().map(|p| p.id()).collect();
    assert_eq!(
        ids,
        vec![
            "minor-second",
            "major-second",
            "minor-third",
            "major-third",
            "perfect-fourth",
            "perfect-fifth",
            "golden-ratio"
        ]
    );

    for preset in RatioPreset::all() {
        assert_eq!(RatioPreset::from_id(preset.id()), Some(*preset));
    }
    assert_eq!(RatioPreset::GoldenRatio.to_string(), "Golden Ratio (1.618)");
}

#[test]
fn default_typography_uses_perfect_fourth() {
    let typography = TypographySettings::default();
    assert_eq!(typography.base_font_size, 16.0);
    assert_eq!(typography.base_line_height, 1.5);
    assert_eq!(typography.base_unit, 8.0);
    assert_eq!(typography.preset(), Some(RatioPreset::PerfectFourth));
}

#[test]
fn default_palette_is_tailwind() {
    let state = DesignSystemState::default();
    let expected = [
        (ColorRole::Primary, "Primary", "#3B82F6"),
        (ColorRole::Secondary, "Secondary", "#EC4899"),
        (ColorRole::Accent, "Accent", "#8B5CF6"),
        (ColorRole::Neutral, "Neutral", "#6B7280"),
        (ColorRole::Success, "Success", "#10B981"),
        (ColorRole::Warning, "Warning", "#F59E0B"),
        (ColorRole::Error, "Error", "#EF4444"),
        (ColorRole::Info, "Info", "#06B6D4"),
    ];
    for (role, name, color) in expected {
        let scale = state.colors.get(role);
        assert_eq!(scale.name, name, "Role {:?} should be named {}", role, name);
        assert_eq!(scale.color, color, "Role {:?} should have base {}", role, color);
        assert_eq!(scale.shades.len(), 11);
    }
}

#[test]
fn default_spacing_and_breakpoints() {
    let spacing = DesignSystemState::default().spacing;
    assert_eq!(spacing.base_unit, 4);
    assert_eq!(
        spacing.scale,
        vec![0, 4, 8, 16, 24, 32, 48, 64, 80, 96, 128, 160, 192, 224, 256]
    );
    let breakpoints: Vec<(&str, u32)> = spacing
        .breakpoints
        .iter()
        .map(|(name, px)| (name.as_str(), *px))
        .collect();
    assert_eq!(
        breakpoints,
        vec![
            ("xs", 320),
            ("sm", 640),
            ("md", 768),
            ("lg", 1024),
            ("xl", 1280),
            ("xxl", 1536)
        ]
    );
}

#[test]
fn reset_discards_changes() {
    let edited = DesignSystemState::default()
        .with_typography(TypographySettings {
            base_font_size: 20.0,
            ..Default::default()
        })
        .regenerate_color(ColorRole::Accent, "Brand", "#ff6600", Default::default())
        .unwrap();
    assert_ne!(edited, DesignSystemState::default());
    assert_eq!(DesignSystemState::reset(), DesignSystemState::default());
}
