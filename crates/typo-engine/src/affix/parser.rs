// Affix-file compiler: line scan over PFX/SFX blocks, COMPOUNDRULE, REP
// and bare keyword lines

use hashbrown::HashMap;
use regex::Regex;
use tracing::{debug, warn};
use typo_core::enums::{AffixKind, FlagMode, KW_COMPOUNDRULE, KW_FLAG, KW_REP};

use super::AffixTable;
use super::flags::FlagTable;
use super::rule::{AffixEntry, AffixRule, ReplacementPair};
use crate::CompileError;

/// Placeholder for "nothing" in the strip and add fields.
const EMPTY_FIELD: &str = "0";

/// Condition that matches every stem.
const ANY_CONDITION: &str = ".";

/// A meaningful affix-file line: its 1-based line number and its fields.
struct Line<'a> {
    number: usize,
    fields: Vec<&'a str>,
}

impl<'a> Line<'a> {
    fn keyword(&self) -> &'a str {
        self.fields[0]
    }
}

fn malformed(line: usize, reason: impl Into<String>) -> CompileError {
    CompileError::MalformedAffixSource {
        line,
        reason: reason.into(),
    }
}

/// Split the source into non-blank, non-comment lines.
fn meaningful_lines(text: &str) -> Vec<Line<'_>> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    text.lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            Some(Line {
                number: idx + 1,
                fields: trimmed.split_whitespace().collect(),
            })
        })
        .collect()
}

/// Find the flag encoding before any rule is parsed, so continuation
/// classes are decoded the same way as the word list will be.
fn scan_flag_mode(lines: &[Line<'_>]) -> FlagMode {
    let declared = lines
        .iter()
        .filter(|line| line.keyword() == KW_FLAG)
        .filter_map(|line| line.fields.get(1))
        .last();
    match declared {
        None => FlagMode::Char,
        Some(value) => value.parse().unwrap_or_else(|_| {
            warn!(value, "unsupported FLAG encoding, using one code per character");
            FlagMode::Char
        }),
    }
}

fn compile_pattern(line: usize, pattern: String) -> Result<Regex, CompileError> {
    Regex::new(&pattern).map_err(|source| CompileError::InvalidPattern {
        line,
        pattern,
        source,
    })
}

/// Anchor a strip or condition pattern to the side of the stem the rule
/// works on.
fn anchored(kind: AffixKind, pattern: &str) -> String {
    match kind {
        AffixKind::Suffix => format!("(?:{pattern})$"),
        AffixKind::Prefix => format!("^(?:{pattern})"),
    }
}

/// Parse one `PFX|SFX <code> <strip> <add>[/<cont>] [<condition>]` line.
fn parse_entry(
    line: &Line<'_>,
    kind: AffixKind,
    code: &str,
    mode: FlagMode,
) -> Result<AffixEntry, CompileError> {
    let fields = &line.fields;
    if fields.len() < 4 {
        return Err(malformed(
            line.number,
            format!("{kind} entry needs strip and add fields"),
        ));
    }
    if fields[0] != kind.to_string() || fields[1] != code {
        return Err(malformed(
            line.number,
            format!("expected a {kind} {code} entry, found {} {}", fields[0], fields[1]),
        ));
    }

    let strip = match fields[2] {
        EMPTY_FIELD => None,
        text => Some(compile_pattern(line.number, anchored(kind, text))?),
    };

    let (add, continuation) = match fields[3].split_once('/') {
        Some((add, cont)) => (add, mode.split_codes(cont)),
        None => (fields[3], Vec::new()),
    };
    let add = if add == EMPTY_FIELD { "" } else { add };

    let condition = match fields.get(4).copied() {
        None | Some(ANY_CONDITION) => None,
        Some(text) => Some(compile_pattern(line.number, anchored(kind, text))?),
    };

    Ok(AffixEntry {
        add: add.to_string(),
        strip,
        condition,
        continuation,
    })
}

fn parse_count(line: &Line<'_>, index: usize, what: &str) -> Result<usize, CompileError> {
    let field = line
        .fields
        .get(index)
        .ok_or_else(|| malformed(line.number, format!("{what} is missing")))?;
    field
        .parse()
        .map_err(|_| malformed(line.number, format!("{what} {field:?} is not a number")))
}

/// Take the `count` lines following a block header, failing when the file
/// ends early.
fn block_lines<'l, 'a>(
    lines: &'l [Line<'a>],
    header: usize,
    count: usize,
) -> Result<&'l [Line<'a>], CompileError> {
    let start = header + 1;
    let available = lines.len() - start;
    if count > available {
        return Err(malformed(
            lines[header].number,
            format!("header declares {count} lines but only {available} follow"),
        ));
    }
    Ok(&lines[start..start + count])
}

/// Compile the text of an affix file.
///
/// Every rule header must be followed by as many entry lines as it
/// declares; a short block, a non-numeric count or a pattern the regex
/// engine rejects fails the whole compile. Unknown keywords are stored in
/// the flag table.
pub fn compile_affixes(text: &str) -> Result<AffixTable, CompileError> {
    let lines = meaningful_lines(text);
    let flag_mode = scan_flag_mode(&lines);

    let mut rules: HashMap<String, AffixRule> = HashMap::new();
    let mut compound_rules = Vec::new();
    let mut replacements = Vec::new();
    let mut flags = FlagTable::new();

    let mut i = 0;
    while i < lines.len() {
        let line = &lines[i];
        let keyword = line.keyword();

        if let Some(kind) = AffixKind::from_keyword(keyword) {
            let code = *line.fields.get(1).ok_or_else(|| {
                malformed(line.number, format!("{kind} header without a rule code"))
            })?;
            let combineable = match line.fields.get(2) {
                Some(&"Y") => true,
                Some(_) => false,
                None => {
                    return Err(malformed(
                        line.number,
                        format!("{kind} {code} header without cross-product field"),
                    ));
                }
            };
            let count = parse_count(line, 3, "entry count")?;
            let body = block_lines(&lines, i, count)?;

            let entries = body
                .iter()
                .map(|entry| parse_entry(entry, kind, code, flag_mode))
                .collect::<Result<Vec<_>, _>>()?;

            rules
                .entry(code.to_string())
                .or_insert_with(|| AffixRule {
                    code: code.to_string(),
                    kind,
                    combineable,
                    entries: Vec::new(),
                })
                .entries
                .extend(entries);
            i += count + 1;
            continue;
        }

        match keyword {
            KW_COMPOUNDRULE => {
                let count = parse_count(line, 1, "compound rule count")?;
                for rule_line in block_lines(&lines, i, count)? {
                    match rule_line.fields.as_slice() {
                        [KW_COMPOUNDRULE, pattern, ..] => compound_rules.push(pattern.to_string()),
                        _ => {
                            return Err(malformed(
                                rule_line.number,
                                "expected a COMPOUNDRULE pattern line",
                            ));
                        }
                    }
                }
                i += count + 1;
                continue;
            }
            KW_REP => {
                // `REP <count>` has a single field and is not a pair.
                if let [_, from, to] = line.fields.as_slice() {
                    replacements.push(ReplacementPair::new(*from, *to));
                }
            }
            _ => {
                if let Some(value) = line.fields.get(1) {
                    flags.set(keyword, value);
                }
            }
        }
        i += 1;
    }

    debug!(
        rules = rules.len(),
        compound_rules = compound_rules.len(),
        replacements = replacements.len(),
        flags = flags.len(),
        ?flag_mode,
        "affix file compiled"
    );

    Ok(AffixTable {
        rules,
        compound_rules,
        replacements,
        flags,
        flag_mode,
    })
}
