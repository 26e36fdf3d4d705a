#![allow(dead_code)]

use anyhow::{Result, anyhow};
use orderly_core::model::Value;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Route `tracing` output to the test harness so `--nocapture` shows it.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("orderly_core=debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Build a record from `(key, value)` pairs.
pub fn record<I, K, V>(entries: I) -> Value
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    Value::map(entries)
}

/// Text field `key` of every record, in order.
pub fn texts(items: &[Value], key: &str) -> Result<Vec<String>> {
    items
        .iter()
        .map(|item| match item.get(key) {
            Some(Value::Text(text)) => Ok(text.clone()),
            other => Err(anyhow!("record has no text field {key}: {other:?}")),
        })
        .collect()
}

/// Numeric field `key` of every record, in order.
pub fn numbers(items: &[Value], key: &str) -> Result<Vec<f64>> {
    items
        .iter()
        .map(|item| match item.get(key) {
            Some(Value::Number(n)) => Ok(*n),
            other => Err(anyhow!("record has no numeric field {key}: {other:?}")),
        })
        .collect()
}

pub fn users() -> Vec<Value> {
    vec![
        record([
            ("name", Value::from("Alice")),
            ("id", Value::from(4)),
            ("admin", Value::from(true)),
        ]),
        record([
            ("name", Value::from("Bob")),
            ("id", Value::from(3)),
            ("admin", Value::from(false)),
        ]),
        record([
            ("name", Value::from("Charlie")),
            ("id", Value::from(2)),
            ("admin", Value::from(true)),
        ]),
        record([
            ("name", Value::from("David")),
            ("id", Value::from(1)),
            ("admin", Value::from(false)),
        ]),
    ]
}

pub fn nordic_names() -> Vec<Value> {
    vec![
        record([("name", Value::from("Zlice")), ("id", Value::from(1))]),
        record([("name", Value::from("Alice")), ("id", Value::from(2))]),
        record([("name", Value::from("Ålice")), ("id", Value::from(3))]),
    ]
}
