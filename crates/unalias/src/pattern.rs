//! Alias pattern parsing and matching.
//!
//! A pattern key is either an exact specifier (`"@config"`) or contains a
//! single `*` wildcard (`"@app/*"`, `"*.css"`, `"*"`). Keys with more than one
//! wildcard are not supported and never match anything.

/// The wildcard marker in alias keys and targets.
pub const WILDCARD: char = '*';

/// A parsed alias key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Matches by string equality.
    Exact(String),
    /// Matches anything starting with `prefix` and ending with `suffix`.
    Wildcard { prefix: String, suffix: String },
}

impl Pattern {
    /// Parse an alias key. Returns `None` for keys with two or more wildcards.
    pub fn parse(key: &str) -> Option<Self> {
        let Some(star) = key.find(WILDCARD) else {
            return Some(Pattern::Exact(key.to_string()));
        };

        let (prefix, rest) = key.split_at(star);
        let suffix = &rest[WILDCARD.len_utf8()..];
        if suffix.contains(WILDCARD) {
            return None;
        }

        Some(Pattern::Wildcard {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    /// Whether `candidate` matches this pattern.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Pattern::Exact(text) => text == candidate,
            Pattern::Wildcard { prefix, suffix } => {
                candidate.len() >= prefix.len() + suffix.len()
                    && candidate.starts_with(prefix.as_str())
                    && candidate.ends_with(suffix.as_str())
            }
        }
    }

    /// The part of `candidate` standing in for the wildcard.
    ///
    /// `None` for exact patterns or when `candidate` does not match.
    pub fn capture<'s>(&self, candidate: &'s str) -> Option<&'s str> {
        match self {
            Pattern::Exact(_) => None,
            Pattern::Wildcard { prefix, suffix } => {
                if !self.matches(candidate) {
                    return None;
                }
                Some(&candidate[prefix.len()..candidate.len() - suffix.len()])
            }
        }
    }

    /// Length of the literal prefix; exact patterns have none.
    pub fn prefix_len(&self) -> Option<usize> {
        match self {
            Pattern::Exact(_) => None,
            Pattern::Wildcard { prefix, .. } => Some(prefix.len()),
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::Exact(text) => f.write_str(text),
            Pattern::Wildcard { prefix, suffix } => write!(f, "{prefix}{WILDCARD}{suffix}"),
        }
    }
}

/// A parsed alias key together with its substitution targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRule {
    pub pattern: Pattern,
    pub targets: Vec<String>,
}

impl AliasRule {
    /// The target used for substitution. Only the first one is ever used.
    pub fn primary_target(&self) -> Option<&str> {
        self.targets.first().map(String::as_str)
    }

    /// Substitute `capture` for the first wildcard in the primary target.
    ///
    /// An empty capture still replaces the wildcard.
    pub fn substitute(&self, capture: Option<&str>) -> Option<String> {
        let target = self.primary_target()?;
        Some(match capture {
            Some(captured) => target.replacen(WILDCARD, captured, 1),
            None => target.to_string(),
        })
    }
}

/// Parse every key of an alias table, dropping unsupported keys.
pub fn parse_rules<'k, I>(paths: I) -> Vec<AliasRule>
where
    I: IntoIterator<Item = (&'k String, &'k Vec<String>)>,
{
    paths
        .into_iter()
        .filter_map(|(key, targets)| match Pattern::parse(key) {
            Some(pattern) => Some(AliasRule {
                pattern,
                targets: targets.clone(),
            }),
            None => {
                tracing::debug!(pattern = %key, "ignoring alias pattern with more than one wildcard");
                None
            }
        })
        .collect()
}

/// Pick the rule that applies to `specifier`.
///
/// An exact key wins outright. Otherwise the wildcard rule with the longest
/// prefix wins; on equal prefix lengths the earliest rule is kept.
pub fn best_match<'r>(rules: &'r [AliasRule], specifier: &str) -> Option<&'r AliasRule> {
    if let Some(exact) = rules
        .iter()
        .find(|rule| matches!(&rule.pattern, Pattern::Exact(text) if text == specifier))
    {
        return Some(exact);
    }

    let mut best: Option<(&AliasRule, usize)> = None;
    for rule in rules {
        let Some(prefix_len) = rule.pattern.prefix_len() else {
            continue;
        };
        if !rule.pattern.matches(specifier) {
            continue;
        }
        if best.is_none_or(|(_, longest)| prefix_len > longest) {
            best = Some((rule, prefix_len));
        }
    }

    best.map(|(rule, _)| rule)
}
