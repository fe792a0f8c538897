//! Skill normalization: free-text listings in, canonical token sets out.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// One canonical skill: lowercase, whitespace-collapsed, synonym-folded.
///
/// Tokens only come out of [`normalize_skills`], so comparing two of them is
/// always comparing canonical forms.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillToken(String);

impl SkillToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered set of canonical skills; iteration order is deterministic.
pub type SkillSet = BTreeSet<SkillToken>;

/// Provider exports spell the same skill a dozen ways. These fold the common
/// aliases and abbreviations onto one canonical name before comparison.
/// Canonical names must not themselves appear as aliases, which keeps the
/// folding a fixed point.
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("angularjs", "angular"),
    ("c sharp", "c#"),
    ("es6", "javascript"),
    ("gcloud", "google cloud"),
    ("golang", "go"),
    ("js", "javascript"),
    ("k8s", "kubernetes"),
    ("node", "nodejs"),
    ("node.js", "nodejs"),
    ("postgres", "postgresql"),
    ("psql", "postgresql"),
    ("py", "python"),
    ("rb", "ruby"),
    ("reactjs", "react"),
    ("tf", "terraform"),
    ("ts", "typescript"),
    ("vuejs", "vue"),
];

/// Alias-to-canonical folding applied after tokens are cleaned.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    aliases: HashMap<String, String>,
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::with_aliases(DEFAULT_ALIASES.iter().copied())
    }
}

impl SynonymTable {
    /// Table with no aliases; every cleaned token is already canonical.
    pub fn empty() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    /// Build a table from alias/canonical pairs. Both sides run through the
    /// token cleaning rules; pairs that clean away to nothing are dropped.
    pub fn with_aliases<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut aliases = HashMap::new();
        for (alias, canonical) in pairs {
            if let (Some(alias), Some(canonical)) = (clean_token(alias), clean_token(canonical)) {
                aliases.insert(alias, canonical);
            }
        }
        Self { aliases }
    }

    fn fold(&self, token: String) -> String {
        match self.aliases.get(&token) {
            Some(canonical) => canonical.clone(),
            None => token,
        }
    }
}

/// Normalize one free-text skill listing into a canonical token set.
///
/// Listings split on commas, semicolons, and newlines. Each chunk is
/// lowercased, stripped to letters, digits, and `+ # . / -`, and
/// whitespace-collapsed before synonym folding. Chunks that clean away to
/// nothing drop out silently, so malformed input yields an empty set rather
/// than an error, and normalizing an already-normalized listing is a no-op.
pub fn normalize_skills(raw: &str, synonyms: &SynonymTable) -> SkillSet {
    raw.split([',', ';', '\n'])
        .filter_map(clean_token)
        .map(|token| SkillToken(synonyms.fold(token)))
        .collect()
}

/// Render a skill set back into a comma-separated listing.
pub fn render_skill_list(skills: &SkillSet) -> String {
    skills
        .iter()
        .map(SkillToken::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn clean_token(raw: &str) -> Option<String> {
    let lowered = raw.trim().to_lowercase();
    let mut kept = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        if ch.is_ascii_alphanumeric() || matches!(ch, '+' | '#' | '.' | '/' | '-') {
            kept.push(ch);
        } else if ch.is_whitespace() {
            kept.push(' ');
        }
    }

    let collapsed = kept.split_whitespace().collect::<Vec<_>>().join(" ");
    // Sentence periods sneak in from prose-style listings; inner dots stay
    // so names like "node.js" and ".net" survive.
    let token = collapsed.strip_suffix('.').unwrap_or(&collapsed);
    if token.chars().any(|ch| ch.is_ascii_alphanumeric()) {
        Some(token.to_string())
    } else {
        None
    }
}
