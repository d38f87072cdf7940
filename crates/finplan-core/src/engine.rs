//! Engine - configured entry point for indicators and plans
//!
//! An [`Engine`] is immutable once built and holds no per-call state, so a
//! single instance can serve any number of threads. Callers that want
//! memoization key it on a snapshot of the profile themselves.

use std::path::Path;
use std::sync::OnceLock;

use crate::config::{read_config_source, EngineConfig};
use crate::error::Result;
use crate::guidance::GuidanceLibrary;
use crate::indicators::{self, FinancialIndicators};
use crate::models::FinancialProfile;
use crate::plan::{self, FinancialPlan};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Engine {
    config: EngineConfig,
    guidance: GuidanceLibrary,
}

impl Engine {
    pub fn new(config: EngineConfig, guidance: GuidanceLibrary) -> Self {
        Self { config, guidance }
    }

    /// Load configuration and guidance from one override file
    ///
    /// Uses the same resolution as [`EngineConfig::load`]: explicit path,
    /// then the per-user override, then built-in defaults.
    pub fn from_config_path(override_path: Option<&Path>) -> Result<Self> {
        match read_config_source(override_path)? {
            Some(content) => Ok(Self::new(
                EngineConfig::from_toml_str(&content)?,
                GuidanceLibrary::from_toml_str(&content)?,
            )),
            None => Ok(Self::default()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn guidance(&self) -> &GuidanceLibrary {
        &self.guidance
    }

    pub fn compute_indicators(&self, profile: &FinancialProfile) -> FinancialIndicators {
        indicators::compute(&self.config.indicators, profile)
    }

    pub fn generate_plan(
        &self,
        profile: &FinancialProfile,
        indicators: &FinancialIndicators,
    ) -> FinancialPlan {
        plan::build(&self.config, &self.guidance, profile, indicators)
    }

    /// Compute indicators and the plan in one call
    pub fn generate_plan_fresh(&self, profile: &FinancialProfile) -> FinancialPlan {
        let indicators = self.compute_indicators(profile);
        self.generate_plan(profile, &indicators)
    }
}

fn default_engine() -> &'static Engine {
    static ENGINE: OnceLock<Engine> = OnceLock::new();
    ENGINE.get_or_init(Engine::default)
}

/// Compute indicators with the default configuration
pub fn compute_indicators(profile: &FinancialProfile) -> FinancialIndicators {
    default_engine().compute_indicators(profile)
}

/// Generate a plan with the default configuration and guidance
pub fn generate_plan(profile: &FinancialProfile, indicators: &FinancialIndicators) -> FinancialPlan {
    default_engine().generate_plan(profile, indicators)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClassificationMode;
    use crate::indicators::Classification;
    use crate::test_utils::ProfileBuilder;
    use std::io::Write;

    #[test]
    fn test_fresh_plan_matches_two_step() {
        let profile = ProfileBuilder::sample_household();
        let engine = Engine::default();

        let indicators = engine.compute_indicators(&profile);
        assert_eq!(
            engine.generate_plan(&profile, &indicators),
            engine.generate_plan_fresh(&profile)
        );
    }

    #[test]
    fn test_free_functions_use_defaults() {
        let profile = ProfileBuilder::sample_household();
        let engine = Engine::default();

        let indicators = compute_indicators(&profile);
        assert_eq!(indicators, engine.compute_indicators(&profile));
        assert_eq!(
            generate_plan(&profile, &indicators),
            engine.generate_plan(&profile, &indicators)
        );
    }

    #[test]
    fn test_plan_carries_supplied_indicators() {
        let profile = ProfileBuilder::sample_household();
        let mut indicators = compute_indicators(&profile);
        indicators.debt_ratio.classification = Classification::Critical;

        let plan = generate_plan(&profile, &indicators);
        assert_eq!(plan.indicators, indicators);
    }

    #[test]
    fn test_from_config_path_reads_both_layers() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[indicators]
classification_mode = "legacy"

[guidance]
reserve_products = ["Savings account"]
"#
        )
        .unwrap();

        let engine = Engine::from_config_path(Some(file.path())).unwrap();
        assert_eq!(engine.config().indicators.mode, ClassificationMode::Legacy);
        assert_eq!(engine.guidance().reserve_products, vec!["Savings account"]);

        let plan = engine.generate_plan_fresh(&ProfileBuilder::sample_household());
        assert_eq!(
            plan.emergency_reserve.recommended_products,
            vec!["Savings account"]
        );
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        let engine = std::sync::Arc::new(Engine::default());
        let profile = ProfileBuilder::sample_household();
        let expected = engine.generate_plan_fresh(&profile);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = engine.clone();
                let profile = profile.clone();
                std::thread::spawn(move || engine.generate_plan_fresh(&profile))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
