// 🏛️ Bureau - The three credit reporting agencies
// Source documents identify a bureau three different ways: a symbol ("TUC"),
// a descriptive name ("TransUnion"), or a substring inside a bundle
// component type marker ("TUCReportV6", "TUCVantageScoreV3").

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bureau {
    TransUnion,
    Experian,
    Equifax,
}

impl Bureau {
    pub const ALL: [Bureau; 3] = [Bureau::TransUnion, Bureau::Experian, Bureau::Equifax];

    /// Three-letter symbol used by the provider
    pub fn symbol(&self) -> &'static str {
        match self {
            Bureau::TransUnion => "TUC",
            Bureau::Experian => "EXP",
            Bureau::Equifax => "EQF",
        }
    }

    /// Descriptive name as it appears in source documents and canonical output
    pub fn description(&self) -> &'static str {
        match self {
            Bureau::TransUnion => "TransUnion",
            Bureau::Experian => "Experian",
            Bureau::Equifax => "Equifax",
        }
    }

    /// Component type marker of this bureau's individual report section
    pub fn report_component_type(&self) -> &'static str {
        match self {
            Bureau::TransUnion => "TUCReportV6",
            Bureau::Experian => "EXPReportV6",
            Bureau::Equifax => "EQFReportV6",
        }
    }

    /// Match a bundle component type marker by symbol substring
    /// ("TUCVantageScoreV3" → TransUnion)
    pub fn from_component_type(marker: &str) -> Option<Bureau> {
        Bureau::ALL
            .iter()
            .copied()
            .find(|b| marker.contains(b.symbol()))
    }

    /// Match a `Source.Bureau` block: exact symbol first, then descriptive
    /// name by substring (documents sometimes carry "TransUnion Consumer")
    pub fn from_source(symbol: Option<&str>, description: Option<&str>) -> Option<Bureau> {
        if let Some(symbol) = symbol {
            if let Some(b) = Bureau::ALL.iter().copied().find(|b| b.symbol() == symbol) {
                return Some(b);
            }
        }
        if let Some(description) = description {
            if let Some(b) = Bureau::ALL
                .iter()
                .copied()
                .find(|b| description.contains(b.description()))
            {
                return Some(b);
            }
        }
        None
    }

    /// Match a bare name as supplied by override files ("TransUnion" or "TUC")
    pub fn from_name(name: &str) -> Option<Bureau> {
        Bureau::ALL
            .iter()
            .copied()
            .find(|b| b.description() == name || b.symbol() == name)
    }
}
