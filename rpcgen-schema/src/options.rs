//! Generator options supplied by the host alongside the schema.

use serde::{Deserialize, Serialize};

/// Options that steer artifact layout and dialect.
///
/// Read from the descriptor's `[generator]` table or from a host parameter
/// string; unknown keys are ignored in both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Generate for the legacy ("nano") Java dialect.
    #[serde(alias = "nano")]
    pub legacy: bool,
    /// Root of the web application receiving the client artifacts.
    #[serde(alias = "js_path")]
    pub client_root: Option<String>,
    /// Java package of the RPC runtime the service scaffolds extend.
    pub runtime_package: Option<String>,
    /// Directory the schema source path is relative to.
    pub proto_root: Option<String>,
}

impl GeneratorOptions {
    pub const DEFAULT_CLIENT_ROOT: &'static str = "src/main/webapp/";
    pub const DEFAULT_PROTO_ROOT: &'static str = "src/main/proto/";
    pub const DEFAULT_RUNTIME_PACKAGE: &'static str = "org.rpcgen.runtime";

    /// Parse a host parameter string such as `nano=true,js_path=web/`.
    pub fn from_parameter(parameter: &str) -> Self {
        let mut options = Self::default();
        options.apply_parameter(parameter);
        options
    }

    /// Apply the `key=value` pairs of a host parameter string on top of
    /// these options. Boolean keys are only switched on by `true`.
    pub fn apply_parameter(&mut self, parameter: &str) {
        for (key, value) in parse_parameter(parameter) {
            match key {
                "nano" | "legacy" => self.legacy = value == "true",
                "js_path" | "client_root" => self.client_root = Some(value.to_string()),
                "runtime_package" => self.runtime_package = Some(value.to_string()),
                "proto_root" => self.proto_root = Some(value.to_string()),
                _ => {}
            }
        }
    }

    /// Client root with a trailing `/` (empty stays empty).
    pub fn client_root(&self) -> String {
        with_trailing_slash(
            self.client_root
                .as_deref()
                .unwrap_or(Self::DEFAULT_CLIENT_ROOT),
        )
    }

    /// Schema source root with a trailing `/` (empty stays empty).
    pub fn proto_root(&self) -> String {
        with_trailing_slash(self.proto_root.as_deref().unwrap_or(Self::DEFAULT_PROTO_ROOT))
    }

    /// Java package of the RPC runtime.
    pub fn runtime_package(&self) -> &str {
        self.runtime_package
            .as_deref()
            .unwrap_or(Self::DEFAULT_RUNTIME_PACKAGE)
    }
}

/// Split `a=1,b,c=x` into `[("a", "1"), ("b", ""), ("c", "x")]`.
fn parse_parameter(parameter: &str) -> impl Iterator<Item = (&str, &str)> {
    parameter
        .split(',')
        .filter(|part| !part.is_empty())
        .map(|part| part.split_once('=').unwrap_or((part, "")))
}

fn with_trailing_slash(path: &str) -> String {
    if path.is_empty() || path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}
