//! Skill-to-domain classification
//!
//! A coarse category label for each skill, taken from a static table.
//! Skills absent from the table classify as [`Domain::Unknown`], which is
//! reportable but never fatal.

use std::collections::HashMap;
use std::fmt;

/// Coarse category assigned to a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Language,
    Backend,
    Frontend,
    Infrastructure,
    ApiArchitecture,
    Quality,
    Devops,
    Security,
    DataMl,
    Platform,
    Specialized,
    Workflow,
    /// Sentinel for skills absent from the classification table
    Unknown,
}

impl Domain {
    /// The label written into migrated frontmatter
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Language => "language",
            Domain::Backend => "backend",
            Domain::Frontend => "frontend",
            Domain::Infrastructure => "infrastructure",
            Domain::ApiArchitecture => "api-architecture",
            Domain::Quality => "quality",
            Domain::Devops => "devops",
            Domain::Security => "security",
            Domain::DataMl => "data-ml",
            Domain::Platform => "platform",
            Domain::Specialized => "specialized",
            Domain::Workflow => "workflow",
            Domain::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Built-in skill-to-domain table, derived from the skills guide
const BUILTIN: &[(&str, Domain)] = &[
    // language
    ("python-pro", Domain::Language),
    ("typescript-pro", Domain::Language),
    ("javascript-pro", Domain::Language),
    ("golang-pro", Domain::Language),
    ("rust-engineer", Domain::Language),
    ("sql-pro", Domain::Language),
    ("cpp-pro", Domain::Language),
    ("swift-expert", Domain::Language),
    ("kotlin-specialist", Domain::Language),
    ("csharp-developer", Domain::Language),
    ("php-pro", Domain::Language),
    ("java-architect", Domain::Language),
    // backend
    ("nestjs-expert", Domain::Backend),
    ("django-expert", Domain::Backend),
    ("fastapi-expert", Domain::Backend),
    ("spring-boot-engineer", Domain::Backend),
    ("laravel-specialist", Domain::Backend),
    ("rails-expert", Domain::Backend),
    ("dotnet-core-expert", Domain::Backend),
    // frontend
    ("react-expert", Domain::Frontend),
    ("nextjs-developer", Domain::Frontend),
    ("vue-expert", Domain::Frontend),
    ("vue-expert-js", Domain::Frontend),
    ("angular-architect", Domain::Frontend),
    ("react-native-expert", Domain::Frontend),
    ("flutter-expert", Domain::Frontend),
    // infrastructure
    ("kubernetes-specialist", Domain::Infrastructure),
    ("terraform-engineer", Domain::Infrastructure),
    ("postgres-pro", Domain::Infrastructure),
    ("cloud-architect", Domain::Infrastructure),
    ("database-optimizer", Domain::Infrastructure),
    // api-architecture
    ("graphql-architect", Domain::ApiArchitecture),
    ("api-designer", Domain::ApiArchitecture),
    ("websocket-engineer", Domain::ApiArchitecture),
    ("microservices-architect", Domain::ApiArchitecture),
    ("mcp-developer", Domain::ApiArchitecture),
    ("architecture-designer", Domain::ApiArchitecture),
    // quality
    ("test-master", Domain::Quality),
    ("playwright-expert", Domain::Quality),
    ("code-reviewer", Domain::Quality),
    ("code-documenter", Domain::Quality),
    ("debugging-wizard", Domain::Quality),
    // devops
    ("devops-engineer", Domain::Devops),
    ("monitoring-expert", Domain::Devops),
    ("sre-engineer", Domain::Devops),
    ("chaos-engineer", Domain::Devops),
    ("cli-developer", Domain::Devops),
    // security
    ("secure-code-guardian", Domain::Security),
    ("security-reviewer", Domain::Security),
    ("fullstack-guardian", Domain::Security),
    // data-ml
    ("pandas-pro", Domain::DataMl),
    ("spark-engineer", Domain::DataMl),
    ("ml-pipeline", Domain::DataMl),
    ("prompt-engineer", Domain::DataMl),
    ("rag-architect", Domain::DataMl),
    ("fine-tuning-expert", Domain::DataMl),
    // platform
    ("salesforce-developer", Domain::Platform),
    ("shopify-expert", Domain::Platform),
    ("wordpress-pro", Domain::Platform),
    ("atlassian-mcp", Domain::Platform),
    // specialized
    ("legacy-modernizer", Domain::Specialized),
    ("embedded-systems", Domain::Specialized),
    ("game-developer", Domain::Specialized),
    // workflow
    ("feature-forge", Domain::Workflow),
    ("spec-miner", Domain::Workflow),
];

/// Immutable skill-to-domain lookup
///
/// Built once at startup and passed by reference into the migrator and the
/// frontmatter builder.
#[derive(Debug, Clone)]
pub struct DomainMap {
    map: HashMap<&'static str, Domain>,
}

impl DomainMap {
    /// Construct the built-in classification table
    pub fn builtin() -> Self {
        Self {
            map: BUILTIN.iter().copied().collect(),
        }
    }

    /// Classify a skill by directory name, defaulting to [`Domain::Unknown`]
    pub fn classify(&self, skill: &str) -> Domain {
        self.map.get(skill).copied().unwrap_or(Domain::Unknown)
    }

    /// Check whether a skill has an explicit mapping
    pub fn contains(&self, skill: &str) -> bool {
        self.map.contains_key(skill)
    }

    /// Number of mapped skills
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for DomainMap {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_skill() {
        let domains = DomainMap::builtin();
        assert_eq!(domains.classify("react-expert"), Domain::Frontend);
        assert_eq!(domains.classify("fullstack-guardian"), Domain::Security);
    }

    #[test]
    fn test_classify_unknown_skill() {
        let domains = DomainMap::builtin();
        assert_eq!(domains.classify("no-such-skill"), Domain::Unknown);
        assert!(!domains.contains("no-such-skill"));
    }

    #[test]
    fn test_domain_labels() {
        assert_eq!(Domain::ApiArchitecture.to_string(), "api-architecture");
        assert_eq!(Domain::DataMl.to_string(), "data-ml");
        assert_eq!(Domain::Unknown.to_string(), "unknown");
    }
}
