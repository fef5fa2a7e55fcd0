use serde_json::json;
use tilecolor::config::EngineConfig;
use tilecolor::error::ConfigError;
use tilecolor::limits::MAX_PALETTE;
use tilecolor::{Board, Strategy};

#[test]
fn palette_cap_is_enforced() {
    let at_cap: Vec<_> = (0..MAX_PALETTE)
        .map(|i| json!({"name": format!("c{}", i), "hex": format!("#0000{:02X}", i)}))
        .collect();
    assert!(EngineConfig::from_json_value(json!({ "palette": at_cap })).is_ok());

    let over: Vec<_> = (0..=MAX_PALETTE)
        .map(|i| json!({"name": format!("c{}", i), "hex": "#000000"}))
        .collect();
    let err = EngineConfig::from_json_value(json!({ "palette": over })).unwrap_err();
    assert!(matches!(err, ConfigError::PaletteTooLarge(n) if n == MAX_PALETTE + 1));
}

#[test]
fn malformed_documents_are_rejected() {
    assert!(matches!(
        EngineConfig::from_json_str("not json"),
        Err(ConfigError::Json(_))
    ));
    assert!(matches!(
        EngineConfig::from_json_value(json!({"palette": [{"name": "x", "hex": "#12345"}]})),
        Err(ConfigError::InvalidHex { .. })
    ));
    assert!(matches!(
        EngineConfig::from_json_value(json!({"step_budget": -5})),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn board_rejects_invalid_config() {
    let cfg = EngineConfig {
        anchor_color: Some("mauve".into()),
        ..EngineConfig::default()
    };
    assert!(matches!(
        Board::with_config(2, 2, cfg),
        Err(ConfigError::UnknownAnchorColor(_))
    ));
}

#[test]
fn small_palette_board_cannot_be_colored() {
    // Three colors never fit a four-sided tile.
    let cfg = EngineConfig::from_json_value(json!({
        "palette": [
            {"name": "red", "hex": "#EE334E"},
            {"name": "yellow", "hex": "#FCB131"},
            {"name": "green", "hex": "#00A651"}
        ],
        "strategy": "greedy"
    }))
    .unwrap();
    assert_eq!(cfg.strategy, Strategy::Greedy);
    let mut b = Board::with_config(1, 1, cfg).unwrap();
    assert!(b.assignment().is_empty());
    assert!(b.tile_colors("A1").is_none());
    assert!(!b.region_enter("A1-Top").unwrap().is_recolored());
    assert!(b.assignment().is_empty());
}

#[test]
fn custom_anchor_is_pinned_on_build() {
    let cfg = EngineConfig::from_json_value(json!({
        "anchor_vertex": "B2-Right",
        "anchor_color": "blue",
        "seed": 1234
    }))
    .unwrap();
    let b = Board::with_config(3, 3, cfg).unwrap();
    assert_eq!(b.color_of("B2-Right"), Some("blue"));
    assert!(b.validate().is_empty());
}
