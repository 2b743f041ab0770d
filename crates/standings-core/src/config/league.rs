use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::naming;
use crate::error::Result;
use crate::scoring::{ContributionPolicy, ScoringTableName};

/// Filename suffixes that route a file away from the standard scoring path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConvention {
    pub roster_suffix: String,
    pub bonus_suffix: String,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            roster_suffix: naming::ROSTER_SUFFIX.to_string(),
            bonus_suffix: naming::BONUS_SUFFIX.to_string(),
        }
    }
}

impl NamingConvention {
    /// Bonus suffix without its extension (`_powerstage` for `_powerstage.csv`)
    pub fn bonus_stem(&self) -> &str {
        let suffix = self.bonus_suffix.as_str();
        match suffix.rfind('.') {
            Some(dot) if dot > 0 => &suffix[..dot],
            _ => suffix,
        }
    }
}

/// Contributor count as written in the config file: `3` or `"Three"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Contributors {
    Count(i64),
    Name(String),
}

impl Contributors {
    /// Resolved policy; unrecognized values give the default
    pub fn policy(&self) -> ContributionPolicy {
        match self {
            Self::Count(count) => u32::try_from(*count)
                .map(ContributionPolicy::from_count)
                .unwrap_or_default(),
            Self::Name(name) => ContributionPolicy::resolve(name),
        }
    }
}

impl Default for Contributors {
    fn default() -> Self {
        ContributionPolicy::default().into()
    }
}

impl From<ContributionPolicy> for Contributors {
    fn from(policy: ContributionPolicy) -> Self {
        Self::Count(policy.count() as i64)
    }
}

/// League settings file.
///
/// ```toml
/// scoring_table = "F1"
/// contributors = 3   # or "Three"
///
/// [naming]
/// roster_suffix = "_teams.csv"
/// bonus_suffix = "_powerstage.csv"
/// ```
///
/// Unrecognized table names or contributor counts are not errors; they
/// resolve to the defaults when read through the accessor methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    pub scoring_table: String,
    pub contributors: Contributors,
    pub naming: NamingConvention,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            scoring_table: ScoringTableName::default().as_str().to_string(),
            contributors: Contributors::default(),
            naming: NamingConvention::default(),
        }
    }
}

impl LeagueConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Load the config file, falling back to defaults when it is missing or invalid
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) if e.is_not_found() => Self::default(),
            Err(e) => {
                warn!("Failed to load config {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    pub fn scoring_table(&self) -> ScoringTableName {
        ScoringTableName::resolve(&self.scoring_table)
    }

    pub fn contribution_policy(&self) -> ContributionPolicy {
        self.contributors.policy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LeagueConfig::default();
        assert_eq!(config.scoring_table(), ScoringTableName::Wrc);
        assert_eq!(config.contribution_policy(), ContributionPolicy::Two);
        assert_eq!(config.naming.roster_suffix, "_teams.csv");
        assert_eq!(config.naming.bonus_suffix, "_powerstage.csv");
    }

    #[test]
    fn test_parse_config() {
        let content = r#"
scoring_table = "F1"
contributors = 3

[naming]
roster_suffix = "_roster.csv"
bonus_suffix = "_bonus.csv"
"#;
        let config = LeagueConfig::parse(content).unwrap();
        assert_eq!(config.scoring_table(), ScoringTableName::F1);
        assert_eq!(config.contribution_policy(), ContributionPolicy::Three);
        assert_eq!(config.naming.roster_suffix, "_roster.csv");
        assert_eq!(config.naming.bonus_stem(), "_bonus");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = LeagueConfig::parse("contributors = 4").unwrap();
        assert_eq!(config.scoring_table(), ScoringTableName::Wrc);
        assert_eq!(config.contribution_policy(), ContributionPolicy::Four);
        assert_eq!(config.naming, NamingConvention::default());
    }

    #[test]
    fn test_unrecognized_values_fall_back() {
        let config = LeagueConfig::parse("scoring_table = \"MotoGP\"\ncontributors = 9").unwrap();
        assert_eq!(config.scoring_table(), ScoringTableName::Wrc);
        assert_eq!(config.contribution_policy(), ContributionPolicy::Two);
    }

    #[test]
    fn test_named_contributors() {
        let config = LeagueConfig::parse("contributors = \"Three\"").unwrap();
        assert_eq!(config.contribution_policy(), ContributionPolicy::Three);

        let config = LeagueConfig::parse("contributors = \"four\"").unwrap();
        assert_eq!(config.contribution_policy(), ContributionPolicy::Four);
    }

    #[test]
    fn test_out_of_range_contributors_keep_other_settings() {
        let config = LeagueConfig::parse("scoring_table = \"F1\"\ncontributors = 300").unwrap();
        assert_eq!(config.scoring_table(), ScoringTableName::F1);
        assert_eq!(config.contribution_policy(), ContributionPolicy::Two);

        let config = LeagueConfig::parse("scoring_table = \"F1\"\ncontributors = -3").unwrap();
        assert_eq!(config.scoring_table(), ScoringTableName::F1);
        assert_eq!(config.contribution_policy(), ContributionPolicy::Two);

        let config = LeagueConfig::parse("scoring_table = \"F1\"\ncontributors = \"Many\"").unwrap();
        assert_eq!(config.scoring_table(), ScoringTableName::F1);
        assert_eq!(config.contribution_policy(), ContributionPolicy::Two);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(LeagueConfig::parse("scoring_table = [").is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = LeagueConfig::load_or_default(dir.path().join("league.toml"));
        assert_eq!(config.scoring_table(), ScoringTableName::Wrc);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("league.toml");
        let config = LeagueConfig {
            scoring_table: "Rallycross".to_string(),
            contributors: Contributors::Name("Three".to_string()),
            naming: NamingConvention::default(),
        };
        config.save(&path).unwrap();

        let loaded = LeagueConfig::load(&path).unwrap();
        assert_eq!(loaded.scoring_table(), ScoringTableName::Rallycross);
        assert_eq!(loaded.contribution_policy(), ContributionPolicy::Three);
        assert_eq!(loaded.naming, config.naming);
    }

    #[test]
    fn test_bonus_stem_without_extension() {
        let naming = NamingConvention {
            roster_suffix: "_teams.csv".to_string(),
            bonus_suffix: "_ps".to_string(),
        };
        assert_eq!(naming.bonus_stem(), "_ps");
    }
}
