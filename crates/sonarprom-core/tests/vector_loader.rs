//! JSON test vector loader shared by the protocol and translation tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use serde::Deserialize;

/// One raw measurement and the sample value it must translate to.
#[derive(Debug, Deserialize)]
pub struct ValueVector {
    pub description: String,
    pub metric: String,
    #[serde(default)]
    pub raw: Option<String>,
    pub expect: f64,
}

/// One metric key and the severity label it must infer.
#[derive(Debug, Deserialize)]
pub struct SeverityVector {
    pub metric: String,
    pub expect: String,
}

pub fn load_raw(name: &str) -> String {
    fs::read_to_string(format!("tests/vectors/{name}")).unwrap()
}

pub fn load<T: serde::de::DeserializeOwned>(name: &str) -> T {
    serde_json::from_str(&load_raw(name)).unwrap_or_else(|e| panic!("bad vector {name}: {e}"))
}
