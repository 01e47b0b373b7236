// Affix rules and their entries

use regex::Regex;
use typo_core::enums::AffixKind;

/// One line of a `PFX` / `SFX` block.
///
/// `strip` and `condition` are compiled anchored at the end of the stem for
/// suffixes and at the start for prefixes.
#[derive(Debug, Clone)]
pub struct AffixEntry {
    /// Text attached to the stem (may be empty).
    pub add: String,
    /// Text removed from the stem before `add` is attached.
    pub strip: Option<Regex>,
    /// Condition the stem must satisfy for the entry to apply.
    pub condition: Option<Regex>,
    /// Rule codes applied once more to the derived form.
    pub continuation: Vec<String>,
}

impl AffixEntry {
    /// Whether this entry applies to `stem`.
    pub fn matches(&self, stem: &str) -> bool {
        self.condition.as_ref().is_none_or(|re| re.is_match(stem))
    }

    /// Derive the affixed form of `stem`. The caller checks [`Self::matches`].
    pub fn derive(&self, stem: &str, kind: AffixKind) -> String {
        let mut word = match &self.strip {
            Some(re) => re.replace(stem, "").into_owned(),
            None => stem.to_string(),
        };
        match kind {
            AffixKind::Suffix => word.push_str(&self.add),
            AffixKind::Prefix => word.insert_str(0, &self.add),
        }
        word
    }
}

/// A prefix or suffix rule keyed by its rule code.
#[derive(Debug, Clone)]
pub struct AffixRule {
    pub code: String,
    pub kind: AffixKind,
    /// May stack with a combineable rule of the opposite kind (`Y` in the header).
    pub combineable: bool,
    pub entries: Vec<AffixEntry>,
}

impl AffixRule {
    /// Forms produced by the entries of this rule alone, without following
    /// continuation classes.
    pub fn derive_all(&self, stem: &str) -> impl Iterator<Item = (&AffixEntry, String)> {
        self.entries
            .iter()
            .filter(move |entry| entry.matches(stem))
            .map(move |entry| (entry, entry.derive(stem, self.kind)))
    }

    /// Whether this rule may be stacked onto a form produced by `other`.
    pub fn combines_with(&self, other: &AffixRule) -> bool {
        self.combineable && other.combineable && other.kind == self.kind.opposite()
    }
}

/// A `REP <from> <to>` pair tried before the edit-distance search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementPair {
    pub from: String,
    pub to: String,
}

impl ReplacementPair {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Substitute the first occurrence of `from` in `word`, if any.
    pub fn apply(&self, word: &str) -> Option<String> {
        if self.from.is_empty() || !word.contains(self.from.as_str()) {
            return None;
        }
        Some(word.replacen(self.from.as_str(), &self.to, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffix_entry(strip: Option<&str>, add: &str, condition: Option<&str>) -> AffixEntry {
        AffixEntry {
            add: add.to_string(),
            strip: strip.map(|s| Regex::new(&format!("(?:{s})$")).unwrap()),
            condition: condition.map(|c| Regex::new(&format!("(?:{c})$")).unwrap()),
            continuation: Vec::new(),
        }
    }

    fn prefix_entry(strip: Option<&str>, add: &str, condition: Option<&str>) -> AffixEntry {
        AffixEntry {
            add: add.to_string(),
            strip: strip.map(|s| Regex::new(&format!("^(?:{s})")).unwrap()),
            condition: condition.map(|c| Regex::new(&format!("^(?:{c})")).unwrap()),
            continuation: Vec::new(),
        }
    }

    #[test]
    fn suffix_with_condition() {
        let entry = suffix_entry(None, "ed", Some("[^ey]"));
        assert!(entry.matches("walk"));
        assert!(!entry.matches("bake"));
        assert_eq!(entry.derive("walk", AffixKind::Suffix), "walked");
    }

    #[test]
    fn suffix_strips_before_adding() {
        let entry = suffix_entry(Some("y"), "ies", Some("[^aeiou]y"));
        assert!(entry.matches("city"));
        assert!(!entry.matches("day"));
        assert_eq!(entry.derive("city", AffixKind::Suffix), "cities");
    }

    #[test]
    fn prefix_strips_at_start_only() {
        let entry = prefix_entry(Some("a"), "re", None);
        assert_eq!(entry.derive("aria", AffixKind::Prefix), "reria");
        let plain = prefix_entry(None, "un", None);
        assert_eq!(plain.derive("do", AffixKind::Prefix), "undo");
    }

    #[test]
    fn unconditional_entry_matches_everything() {
        let entry = suffix_entry(None, "s", None);
        assert!(entry.matches(""));
        assert!(entry.matches("cat"));
    }

    #[test]
    fn derive_all_skips_non_matching_entries() {
        let rule = AffixRule {
            code: "S".to_string(),
            kind: AffixKind::Suffix,
            combineable: true,
            entries: vec![
                suffix_entry(Some("y"), "ies", Some("[^aeiou]y")),
                suffix_entry(None, "s", Some("[aeiou]y")),
                suffix_entry(None, "s", Some("[^y]")),
            ],
        };
        let forms: Vec<String> = rule.derive_all("city").map(|(_, w)| w).collect();
        assert_eq!(forms, vec!["cities"]);
        let forms: Vec<String> = rule.derive_all("cat").map(|(_, w)| w).collect();
        assert_eq!(forms, vec!["cats"]);
    }

    #[test]
    fn combination_requires_opposite_combineable_kinds() {
        let make = |kind, combineable| AffixRule {
            code: "X".to_string(),
            kind,
            combineable,
            entries: Vec::new(),
        };
        let pfx = make(AffixKind::Prefix, true);
        let sfx = make(AffixKind::Suffix, true);
        let sfx_no = make(AffixKind::Suffix, false);
        assert!(pfx.combines_with(&sfx));
        assert!(!pfx.combines_with(&sfx_no));
        assert!(!sfx.combines_with(&sfx));
    }

    #[test]
    fn replacement_first_occurrence_only() {
        let rep = ReplacementPair::new("f", "ph");
        assert_eq!(rep.apply("fone"), Some("phone".to_string()));
        assert_eq!(rep.apply("fluff"), Some("phluff".to_string()));
        assert_eq!(rep.apply("tone"), None);
    }
}
