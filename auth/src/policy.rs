use http::Method;

use crate::principal::Authority;

/// What a request must present before it reaches a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// No token needed. A valid token, if presented, is still honored.
    Public,
    /// A valid token is required.
    Authenticated,
    /// A valid token whose principal holds the given authority is required.
    RequiresAuthority(Authority),
}

/// Path pattern with an optional trailing wildcard segment.
///
/// `/dashboards/**` matches `/dashboards` itself and any sub-path; anything
/// else is an exact match.
#[derive(Debug, Clone)]
enum PathPattern {
    Exact(String),
    Subtree(String),
}

impl PathPattern {
    fn parse(pattern: &str) -> Self {
        match pattern.strip_suffix("/**") {
            Some(prefix) => PathPattern::Subtree(prefix.to_string()),
            None => PathPattern::Exact(pattern.to_string()),
        }
    }

    fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(pattern) => path == pattern,
            PathPattern::Subtree(prefix) => {
                path == prefix || (path.starts_with(prefix) && path[prefix.len()..].starts_with('/'))
            }
        }
    }
}

/// One access rule: method + path pattern + requirement.
#[derive(Debug, Clone)]
pub struct PolicyRule {
    method: Method,
    pattern: PathPattern,
    requirement: Requirement,
}

impl PolicyRule {
    pub fn new(method: Method, pattern: &str, requirement: Requirement) -> Self {
        Self {
            method,
            pattern: PathPattern::parse(pattern),
            requirement,
        }
    }

    fn matches(&self, method: &Method, path: &str) -> bool {
        self.method == *method && self.pattern.matches(path)
    }
}

/// Ordered access policy.
///
/// Rules are evaluated in declaration order and the first match wins, so
/// more specific rules belong ahead of broader ones. Requests matching no
/// rule fall through to the table's explicit default requirement — there is
/// no silent fallback, and a permissive default is a deliberate
/// configuration choice.
#[derive(Debug, Clone)]
pub struct PolicyTable {
    rules: Vec<PolicyRule>,
    default_requirement: Requirement,
}

impl PolicyTable {
    pub fn new(default_requirement: Requirement) -> Self {
        Self {
            rules: Vec::new(),
            default_requirement,
        }
    }

    /// Append a rule. Order of calls is the order of evaluation.
    pub fn rule(mut self, method: Method, pattern: &str, requirement: Requirement) -> Self {
        self.rules.push(PolicyRule::new(method, pattern, requirement));
        self
    }

    /// Resolve the requirement for a request.
    pub fn requirement_for(&self, method: &Method, path: &str) -> Requirement {
        self.rules
            .iter()
            .find(|rule| rule.matches(method, path))
            .map(|rule| rule.requirement)
            .unwrap_or(self.default_requirement)
    }
}
