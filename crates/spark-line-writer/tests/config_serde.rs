//! 启用 `serde` 特性时，配置可以嵌入 TOML 文档。

use spark_line_writer::{FlushMode, LineWriterConfig};

#[test]
fn deserializes_kebab_case_table() {
    let config: LineWriterConfig = toml::from_str(
        r#"
        mode = "batched-multiline"
        initial-capacity = 8192
        "#,
    )
    .expect("合法配置");
    assert_eq!(config.mode(), FlushMode::BatchedMultiline);
    assert_eq!(config.initial_capacity(), 8192);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config: LineWriterConfig = toml::from_str("").expect("空表使用默认值");
    assert_eq!(config, LineWriterConfig::default());

    let config: LineWriterConfig = toml::from_str(r#"mode = "multiline""#).expect("别名");
    assert_eq!(config.mode(), FlushMode::BatchedMultiline);
    assert_eq!(config.initial_capacity(), 0);
}

#[test]
fn unknown_mode_is_rejected() {
    let result = toml::from_str::<LineWriterConfig>(r#"mode = "crlf""#);
    assert!(result.is_err(), "未知模式不应被静默接受");
}

#[test]
fn serializes_canonical_names() {
    let config = LineWriterConfig::new(FlushMode::LinePerWrite).with_initial_capacity(16);
    let rendered = toml::to_string(&config).expect("序列化");
    assert!(rendered.contains(r#"mode = "line-per-write""#));
    assert!(rendered.contains("initial-capacity = 16"));
}
