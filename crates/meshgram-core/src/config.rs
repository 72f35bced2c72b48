// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rewrite engine configuration.

/// Knobs for [`RewriteEngine`](crate::RewriteEngine).
///
/// The defaults reproduce the plain loop: unbounded, acceptance predicate
/// consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Upper bound on applications per `apply` call.
    ///
    /// `None` (the default) never stops a production that keeps re-creating
    /// its own left side. Embedders running untrusted productions should set
    /// a cap.
    pub max_applications: Option<usize>,
    /// Whether [`Production::accepts`](crate::Production::accepts) filters
    /// matches before one is selected.
    ///
    /// When `false` the first structural match is applied unconditionally.
    pub consult_acceptance: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_applications: None,
            consult_acceptance: true,
        }
    }
}

impl EngineConfig {
    /// Returns the config with an application cap.
    pub fn with_max_applications(mut self, cap: usize) -> Self {
        self.max_applications = Some(cap);
        self
    }

    /// Returns the config with the acceptance predicate switched on or off.
    pub fn with_acceptance(mut self, consult: bool) -> Self {
        self.consult_acceptance = consult;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: EngineConfig = serde_json::from_str(r#"{"max_applications":3}"#).unwrap();
        assert_eq!(cfg, EngineConfig::default().with_max_applications(3));
        let back = serde_json::to_string(&cfg).unwrap();
        assert_eq!(back, r#"{"max_applications":3,"consult_acceptance":true}"#);
    }
}
