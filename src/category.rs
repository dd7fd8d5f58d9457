// 🏷️ Activity Categories - Closed set of time-allocation buckets
//
// A category is a fixed label, not user data. The enum makes the rule table
// exhaustive at compile time; the display name is the exact label used in
// every output format.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Meetings & Calls")]
    MeetingsAndCalls,
    #[serde(rename = "Research & Documentation")]
    ResearchAndDocumentation,
    #[serde(rename = "Development & Engineering")]
    DevelopmentAndEngineering,
    #[serde(rename = "Planning & Strategy")]
    PlanningAndStrategy,
    #[serde(rename = "Communication & Coordination")]
    CommunicationAndCoordination,
    #[serde(rename = "Design & Creative")]
    DesignAndCreative,
    #[serde(rename = "Marketing & Content")]
    MarketingAndContent,
    #[serde(rename = "Project Management")]
    ProjectManagement,
    #[serde(rename = "Customer & Support")]
    CustomerAndSupport,
    #[serde(rename = "Administration & Ops")]
    AdministrationAndOps,
    #[serde(rename = "Learning & Growth")]
    LearningAndGrowth,

    /// Nothing in either rule table matched
    #[serde(rename = "Miscellaneous")]
    Miscellaneous,
}

impl Category {
    /// All categories in rule-table order, fallback last
    pub const ALL: [Category; 12] = [
        Category::MeetingsAndCalls,
        Category::ResearchAndDocumentation,
        Category::DevelopmentAndEngineering,
        Category::PlanningAndStrategy,
        Category::CommunicationAndCoordination,
        Category::DesignAndCreative,
        Category::MarketingAndContent,
        Category::ProjectManagement,
        Category::CustomerAndSupport,
        Category::AdministrationAndOps,
        Category::LearningAndGrowth,
        Category::Miscellaneous,
    ];

    /// Human-readable label for display and export
    pub fn name(&self) -> &'static str {
        match self {
            Category::MeetingsAndCalls => "Meetings & Calls",
            Category::ResearchAndDocumentation => "Research & Documentation",
            Category::DevelopmentAndEngineering => "Development & Engineering",
            Category::PlanningAndStrategy => "Planning & Strategy",
            Category::CommunicationAndCoordination => "Communication & Coordination",
            Category::DesignAndCreative => "Design & Creative",
            Category::MarketingAndContent => "Marketing & Content",
            Category::ProjectManagement => "Project Management",
            Category::CustomerAndSupport => "Customer & Support",
            Category::AdministrationAndOps => "Administration & Ops",
            Category::LearningAndGrowth => "Learning & Growth",
            Category::Miscellaneous => "Miscellaneous",
        }
    }

    /// Look up a category by its display label (exact match)
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.name() == name)
    }

    pub fn is_fallback(&self) -> bool {
        *self == Category::Miscellaneous
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// PALETTE
// ============================================================================

/// Chart colors, assigned to distribution records by position
pub const PALETTE: [&str; 12] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884d8", "#82ca9d",
    "#ffc658", "#ff7c43", "#665191", "#a05195", "#2f4b7c", "#f95d6a",
];

/// Color for the record at `index` (wraps around the palette)
pub fn color_for_index(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Category::ALL.len());
    }

    #[test]
    fn test_from_name_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
        assert_eq!(Category::from_name("meetings & calls"), None);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Category::CustomerAndSupport.to_string(), "Customer & Support");
        assert!(Category::Miscellaneous.is_fallback());
        assert!(!Category::LearningAndGrowth.is_fallback());
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(color_for_index(0), "#0088FE");
        assert_eq!(color_for_index(11), "#f95d6a");
        assert_eq!(color_for_index(12), "#0088FE");
    }
}
