use std::path::Path;

use crate::config::NamingConvention;
use crate::error::{Error, Result};
use crate::record::ResultFormat;

/// Processing path for an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Username to team roster
    Roster,
    /// Event results scored with the selected table
    Standard,
    /// Event results scored with the bonus table
    Bonus,
}

/// Route a file by name.
///
/// `.csv` and `.json` files are accepted; anything else is rejected before
/// it is read. Names containing the roster suffix are rosters, names ending
/// with the bonus suffix (in either extension) are bonus results. Matching
/// is case-insensitive and only looks at the final path component.
pub fn classify(name: &str, naming: &NamingConvention) -> Result<(FileKind, ResultFormat)> {
    let file_name = display_name(name).to_lowercase();

    let format = if file_name.ends_with(".csv") {
        ResultFormat::Csv
    } else if file_name.ends_with(".json") {
        ResultFormat::Json
    } else {
        return Err(Error::UnsupportedFile(name.to_string()));
    };

    if file_name.contains(&naming.roster_suffix.to_lowercase()) {
        return Ok((FileKind::Roster, ResultFormat::Csv));
    }

    let bonus_stem = naming.bonus_stem().to_lowercase();
    let is_bonus = file_name.ends_with(&naming.bonus_suffix.to_lowercase())
        || file_name.ends_with(&format!("{}.csv", bonus_stem))
        || file_name.ends_with(&format!("{}.json", bonus_stem));

    if is_bonus {
        Ok((FileKind::Bonus, format))
    } else {
        Ok((FileKind::Standard, format))
    }
}

/// Final path component of `name`, used to label records
pub fn display_name(name: &str) -> &str {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(name: &str) -> Option<FileKind> {
        classify(name, &NamingConvention::default()).ok().map(|(kind, _)| kind)
    }

    #[test]
    fn test_classify_roster() {
        assert_eq!(kind("league_teams.csv"), Some(FileKind::Roster));
        assert_eq!(kind("demo_teams.csv"), Some(FileKind::Roster));
        assert_eq!(kind("uploads/Season_TEAMS.CSV"), Some(FileKind::Roster));
    }

    #[test]
    fn test_classify_bonus() {
        assert_eq!(kind("rally_sweden_powerstage.csv"), Some(FileKind::Bonus));
        assert_eq!(kind("rally_sweden_powerstage.json"), Some(FileKind::Bonus));
    }

    #[test]
    fn test_classify_standard() {
        assert_eq!(kind("round1.csv"), Some(FileKind::Standard));
        assert_eq!(kind("stage_2.json"), Some(FileKind::Standard));
        assert_eq!(kind("powerstage_notes.csv"), Some(FileKind::Standard));
    }

    #[test]
    fn test_reject_other_extensions() {
        let err = classify("results.xlsx", &NamingConvention::default()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFile(ref name) if name == "results.xlsx"));
        assert_eq!(kind("results.csv.bak"), None);
        assert_eq!(kind("results"), None);
    }

    #[test]
    fn test_formats() {
        let naming = NamingConvention::default();
        assert_eq!(classify("r.csv", &naming).unwrap().1, ResultFormat::Csv);
        assert_eq!(classify("r.json", &naming).unwrap().1, ResultFormat::Json);
    }

    #[test]
    fn test_custom_suffixes() {
        let naming = NamingConvention {
            roster_suffix: "-roster.csv".to_string(),
            bonus_suffix: "-ps.csv".to_string(),
        };
        assert_eq!(classify("x-roster.csv", &naming).unwrap().0, FileKind::Roster);
        assert_eq!(classify("x-ps.csv", &naming).unwrap().0, FileKind::Bonus);
        assert_eq!(classify("x_teams.csv", &naming).unwrap().0, FileKind::Standard);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("data/round1.csv"), "round1.csv");
        assert_eq!(display_name("round1.csv"), "round1.csv");
    }
}
