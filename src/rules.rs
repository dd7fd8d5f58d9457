// 🏷️ Classification Rules - Rules as Data
// Keyword containment rules that map a task description to a Category

use crate::category::Category;
use serde::Serialize;
use std::sync::OnceLock;

// ============================================================================
// RULE DEFINITION
// ============================================================================

/// Primary rule: a category and the keywords that select it
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationRule {
    pub category: Category,

    /// Lowercase keywords, matched as plain substrings
    pub keywords: &'static [&'static str],
}

impl ClassificationRule {
    /// First keyword contained in `text` (expects lowercase input)
    pub fn matching_keyword(&self, text: &str) -> Option<&'static str> {
        self.keywords.iter().copied().find(|keyword| text.contains(keyword))
    }

    /// Check if any keyword is a substring of `text` (case-insensitive)
    pub fn matches(&self, text: &str) -> bool {
        self.matching_keyword(&text.to_lowercase()).is_some()
    }
}

/// Secondary rule: one work term mapped to a category
#[derive(Debug, Clone, Serialize)]
pub struct FallbackTerm {
    pub term: &'static str,
    pub category: Category,
}

// ============================================================================
// RULE TABLES
// ============================================================================

// Order matters: the first category with a matching keyword wins.
const PRIMARY_RULES: [ClassificationRule; 11] = [
    ClassificationRule {
        category: Category::MeetingsAndCalls,
        keywords: &[
            "call", "sync", "meeting", "standup", "catch-up", "catchup", "interview",
            "workshop", "session", "1:1", "one-on-one", "conference", "webinar",
        ],
    },
    ClassificationRule {
        category: Category::ResearchAndDocumentation,
        keywords: &[
            "research", "documentation", "write", "draft", "review", "read",
            "analyze", "analysis", "report", "document", "study", "explore",
            "investigation", "learn", "notes", "writing", "wiki",
        ],
    },
    ClassificationRule {
        category: Category::DevelopmentAndEngineering,
        keywords: &[
            "test", "develop", "code", "debug", "programming", "deployment",
            "feature", "fix", "build", "implementation", "coding", "testing",
            "qa", "architecture", "design system", "technical", "engineering",
        ],
    },
    ClassificationRule {
        category: Category::PlanningAndStrategy,
        keywords: &[
            "plan", "strategy", "prep", "roadmap", "goal", "okr", "vision",
            "initiative", "objective", "priority", "planning", "strategic",
            "forecast", "budget", "scope", "requirements",
        ],
    },
    ClassificationRule {
        category: Category::CommunicationAndCoordination,
        keywords: &[
            "message", "response", "coordination", "email", "slack", "chat",
            "discord", "telegram", "announcement", "communication", "respond",
            "follow-up", "followup", "update", "status",
        ],
    },
    ClassificationRule {
        category: Category::DesignAndCreative,
        keywords: &[
            "design", "mockup", "prototype", "wireframe", "ui", "ux",
            "visual", "graphics", "creative", "artwork", "illustration",
            "sketch", "figma", "styling",
        ],
    },
    ClassificationRule {
        category: Category::MarketingAndContent,
        keywords: &[
            "marketing", "content", "social media", "blog", "post", "tweet",
            "campaign", "promotion", "seo", "analytics", "metrics", "copy",
            "editorial", "publish", "social",
        ],
    },
    ClassificationRule {
        category: Category::ProjectManagement,
        keywords: &[
            "project", "management", "tracking", "jira", "trello", "asana",
            "milestone", "deadline", "timeline", "schedule", "coordination",
            "organizing", "backlog", "sprint",
        ],
    },
    ClassificationRule {
        category: Category::CustomerAndSupport,
        keywords: &[
            "customer", "support", "client", "user", "feedback", "help",
            "ticket", "issue", "service", "complaint", "resolution",
            "assistance", "troubleshoot",
        ],
    },
    ClassificationRule {
        category: Category::AdministrationAndOps,
        keywords: &[
            "admin", "operation", "process", "procedure", "policy",
            "system", "setup", "configure", "maintenance", "infrastructure",
            "organize", "filing", "documentation",
        ],
    },
    ClassificationRule {
        category: Category::LearningAndGrowth,
        keywords: &[
            "training", "learning", "course", "workshop", "education",
            "skill", "development", "growth", "mentor", "coaching",
            "onboarding", "tutorial",
        ],
    },
];

const FALLBACK_TERMS: [FallbackTerm; 7] = [
    FallbackTerm { term: "team", category: Category::ProjectManagement },
    FallbackTerm { term: "review", category: Category::ResearchAndDocumentation },
    FallbackTerm { term: "presentation", category: Category::CommunicationAndCoordination },
    FallbackTerm { term: "report", category: Category::ResearchAndDocumentation },
    FallbackTerm { term: "discussion", category: Category::MeetingsAndCalls },
    FallbackTerm { term: "brainstorm", category: Category::PlanningAndStrategy },
    FallbackTerm { term: "collaboration", category: Category::ProjectManagement },
];

// ============================================================================
// CLASSIFICATION RESULT
// ============================================================================

/// Which pass of the engine produced the category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Primary,
    Fallback,
    Default,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub category: Category,
    pub kind: MatchKind,
    /// Keyword or term that fired; `None` for the default category
    pub keyword: Option<&'static str>,
}

impl Default for ClassificationResult {
    fn default() -> Self {
        ClassificationResult {
            category: Category::Miscellaneous,
            kind: MatchKind::Default,
            keyword: None,
        }
    }
}

// ============================================================================
// RULE ENGINE
// ============================================================================

#[derive(Debug, Serialize)]
pub struct RuleEngine {
    rules: &'static [ClassificationRule],
    fallback_terms: &'static [FallbackTerm],
}

impl RuleEngine {
    /// The built-in rule tables, shared by every caller
    pub fn global() -> &'static RuleEngine {
        static ENGINE: OnceLock<RuleEngine> = OnceLock::new();
        ENGINE.get_or_init(|| RuleEngine {
            rules: &PRIMARY_RULES,
            fallback_terms: &FALLBACK_TERMS,
        })
    }

    /// Classify a description and report which rule fired
    pub fn explain(&self, text: &str) -> ClassificationResult {
        let text = text.to_lowercase();

        // Primary table, in order
        for rule in self.rules {
            if let Some(keyword) = rule.matching_keyword(&text) {
                return ClassificationResult {
                    category: rule.category,
                    kind: MatchKind::Primary,
                    keyword: Some(keyword),
                };
            }
        }

        // Secondary work terms
        for fallback in self.fallback_terms {
            if text.contains(fallback.term) {
                return ClassificationResult {
                    category: fallback.category,
                    kind: MatchKind::Fallback,
                    keyword: Some(fallback.term),
                };
            }
        }

        ClassificationResult::default()
    }

    /// Classify a description; total, never fails
    pub fn classify(&self, text: &str) -> Category {
        self.explain(text).category
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        self.rules
    }

    pub fn fallback_terms(&self) -> &[FallbackTerm] {
        self.fallback_terms
    }

    /// Get number of primary rules loaded
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

/// Classify with the built-in tables
pub fn classify(text: &str) -> Category {
    RuleEngine::global().classify(text)
}

/// Explain a classification with the built-in tables
pub fn explain(text: &str) -> ClassificationResult {
    RuleEngine::global().explain(text)
}

// ============================================================================
// TESTS
// ============================================================================
