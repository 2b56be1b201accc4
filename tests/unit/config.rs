use super::*;

#[test]
fn empty_object_gives_defaults() {
    let cfg = ShowcaseConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, ShowcaseConfig::default());
    assert_eq!(cfg.transition(), Duration::from_millis(750));
    assert_eq!(cfg.period(), Duration::from_secs(3));
    assert_eq!(cfg.curve, Ease::FastOutSlowIn);
}

#[test]
fn margin_accepts_number_or_sides() {
    let cfg = ShowcaseConfig::from_json_str(r#"{"margin": 8}"#).unwrap();
    assert_eq!(cfg.margin, EdgeInsets::all(8.0));

    let cfg = ShowcaseConfig::from_json_str(r#"{"margin": {"left": 2, "bottom": 3}}"#).unwrap();
    assert_eq!(cfg.margin.left, 2.0);
    assert_eq!(cfg.margin.top, 0.0);
    assert_eq!(cfg.margin.bottom, 3.0);
}

#[test]
fn negative_margin_and_zero_period_are_invalid() {
    let err = ShowcaseConfig::from_json_str(r#"{"margin": -1}"#).unwrap_err();
    assert!(matches!(err, LogoError::Validation(_)));
    let err = ShowcaseConfig::from_json_str(r#"{"period_ms": 0}"#).unwrap_err();
    assert!(matches!(err, LogoError::Validation(_)));
}

#[test]
fn unknown_fields_are_serde_errors() {
    let err = ShowcaseConfig::from_json_str(r##"{"colour": "#ffffff"}"##).unwrap_err();
    assert!(matches!(err, LogoError::Serde(_)));
}

#[test]
fn view_config_carries_fields() {
    let cfg = ShowcaseConfig {
        initial_style: LogoStyle::Stacked,
        transition_ms: 100,
        ..ShowcaseConfig::default()
    };
    let view = cfg.view_config(None);
    assert_eq!(view.style, LogoStyle::Stacked);
    assert_eq!(view.duration, Duration::from_millis(100));
    assert_eq!(view.color, DEFAULT_COLOR);
    assert_eq!(view.size, None);
}

#[test]
fn missing_font_file_is_a_text_error() {
    let cfg = ShowcaseConfig {
        font: Some(PathBuf::from("/definitely/not/here.ttf")),
        ..ShowcaseConfig::default()
    };
    assert!(matches!(cfg.load_font(), Err(LogoError::Text(_))));
    assert!(ShowcaseConfig::default().load_font().unwrap().is_none());
}
