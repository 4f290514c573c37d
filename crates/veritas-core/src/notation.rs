//! Keyboard-friendly spellings of the connectives.

/// Spellings rewritten by [`from_ascii`], longest first.
const SPELLINGS: [(&str, char); 10] = [
    ("<->", '↔'),
    ("<=>", '↔'),
    ("->", '→'),
    ("=>", '→'),
    ("⇔", '↔'),
    ("⇒", '→'),
    ("~", '¬'),
    ("!", '¬'),
    ("&", '∧'),
    ("|", '∨'),
];

/// Rewrite ASCII spellings of connectives to their symbols.
///
/// `<->` and `<=>` become `↔`, `->` and `=>` become `→`, `~` and `!`
/// become `¬`, `&` becomes `∧` and `|` becomes `∨`. The arrows `⇒` and
/// `⇔` are also accepted. All other characters are kept as they are.
pub fn from_ascii(formula: &str) -> String {
    let mut out = String::with_capacity(formula.len());
    let mut rest = formula;

    'outer: while let Some(c) = rest.chars().next() {
        for (spelling, symbol) in SPELLINGS {
            if let Some(tail) = rest.strip_prefix(spelling) {
                out.push(symbol);
                rest = tail;
                continue 'outer;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_spellings() {
        assert_eq!(from_ascii("~P & Q | R -> S <-> T"), "¬P ∧ Q ∨ R → S ↔ T");
        assert_eq!(from_ascii("!P => Q <=> R"), "¬P → Q ↔ R");
        assert_eq!(from_ascii("P ⇒ Q ⇔ R"), "P → Q ↔ R");
    }

    #[test]
    fn test_symbols_untouched() {
        assert_eq!(from_ascii("(P ∧ Q) ∨ ¬P"), "(P ∧ Q) ∨ ¬P");
    }

    #[test]
    fn test_adjacent_operators() {
        assert_eq!(from_ascii("P<->~Q"), "P↔¬Q");
        assert_eq!(from_ascii("P-Q"), "P-Q");
    }
}
