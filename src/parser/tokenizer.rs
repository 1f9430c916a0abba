use std::collections::HashMap;
use std::fmt;

/// Marks the start of a field in command arguments, e.g. `n/` in `n/Pen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(pub &'static str);

impl Prefix {
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix("n/");
pub const PREFIX_QUANTITY: Prefix = Prefix("q/");
pub const PREFIX_DATE: Prefix = Prefix("d/");
pub const PREFIX_TIME: Prefix = Prefix("t/");
pub const PREFIX_AMOUNT: Prefix = Prefix("amt/");
pub const PREFIX_DATE_TIME: Prefix = Prefix("at/");
pub const PREFIX_PHONE: Prefix = Prefix("p/");
pub const PREFIX_EMAIL: Prefix = Prefix("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix("a/");
pub const PREFIX_TAG: Prefix = Prefix("t/");

/// Arguments split into the text before the first prefix (the preamble)
/// and the values that follow each prefix, in order of appearance.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .get(&prefix)
            .map(|v| v.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn has_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.values.contains_key(p))
    }
}

/// Split `args` on `prefixes`. A prefix only counts at the very start or
/// right after whitespace, so `amt/` never matches inside `mamt/` and
/// `t/` never matches inside `at/`. Values are trimmed.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for &prefix in prefixes {
        for (pos, _) in args.match_indices(prefix.as_str()) {
            let at_boundary = args[..pos]
                .chars()
                .next_back()
                .map_or(true, char::is_whitespace);
            if at_boundary && !positions.iter().any(|(p, _)| *p == pos) {
                positions.push((pos, prefix));
            }
        }
    }
    positions.sort_by_key(|(pos, _)| *pos);

    let preamble_end = positions.first().map_or(args.len(), |(pos, _)| *pos);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (pos, prefix)) in positions.iter().enumerate() {
        let start = pos + prefix.as_str().len();
        let end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        map.values
            .entry(*prefix)
            .or_default()
            .push(args[start..end].trim().to_string());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_prefixes_is_all_preamble() {
        let map = tokenize("  some text  ", &[PREFIX_NAME]);
        assert_eq!(map.preamble(), "some text");
        assert_eq!(map.value(PREFIX_NAME), None);
    }

    #[test]
    fn test_values_are_trimmed_and_split() {
        let map = tokenize(" n/Blue   Pen   q/ 10 ", &[PREFIX_NAME, PREFIX_QUANTITY]);
        assert_eq!(map.preamble(), "");
        assert_eq!(map.value(PREFIX_NAME), Some("Blue   Pen"));
        assert_eq!(map.value(PREFIX_QUANTITY), Some("10"));
    }

    #[test]
    fn test_preamble_before_first_prefix() {
        let map = tokenize(" 3 q/5", &[PREFIX_NAME, PREFIX_QUANTITY]);
        assert_eq!(map.preamble(), "3");
        assert_eq!(map.value(PREFIX_QUANTITY), Some("5"));
    }

    #[test]
    fn test_repeated_prefix_keeps_all_last_wins() {
        let map = tokenize(" t/a t/b", &[PREFIX_TAG]);
        assert_eq!(map.all_values(PREFIX_TAG), vec!["a", "b"]);
        assert_eq!(map.value(PREFIX_TAG), Some("b"));
    }

    #[test]
    fn test_prefix_must_follow_whitespace() {
        let map = tokenize(" n/pen/q/1 at/2024-01-01 10:00", &[PREFIX_NAME, PREFIX_QUANTITY, PREFIX_TAG]);
        assert_eq!(map.value(PREFIX_NAME), Some("pen/q/1 at/2024-01-01 10:00"));
        assert!(!map.has_all(&[PREFIX_QUANTITY]));
        assert!(map.all_values(PREFIX_TAG).is_empty());
    }

    #[test]
    fn test_empty_value() {
        let map = tokenize(" t/", &[PREFIX_TAG]);
        assert_eq!(map.all_values(PREFIX_TAG), vec![""]);
    }
}
