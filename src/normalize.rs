//! Token rewriting for speech-transcript repair.
//!
//! The text returned by a speech recognizer is occasionally not what the user
//! meant ("for word 50" instead of "forward 50"). Because the command
//! vocabulary is small and fully known, a rules engine over the token stream
//! can massage the transcript into something the parser accepts. The entry
//! point is [`Normalizer::normalize`].

/// Splits a command line into lowercase tokens.
///
/// Tokens are separated by spaces or commas; empty tokens are discarded, so
/// `"goto 10, 20"` and `"goto 10 20"` tokenize identically. Shared by the
/// normalizer and the parser.
pub(crate) fn tokenize(line: &str) -> Vec<String> {
    line.to_lowercase()
        .split([' ', ','])
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// A literal token-sequence rewrite.
///
/// When `pattern` appears at the head of the remaining token stream, those
/// tokens are replaced by `replacement` in place.
#[derive(Clone, Debug)]
pub struct MatchRule {
    pattern: Vec<String>,
    replacement: Vec<String>,
}

impl MatchRule {
    /// Creates a rule rewriting `pattern` to `replacement`.
    ///
    /// `pattern` must be non-empty; an empty pattern would match everywhere
    /// and never consume anything.
    pub fn new(pattern: &[&str], replacement: &[&str]) -> Self {
        assert!(!pattern.is_empty(), "match rule pattern must be non-empty");
        Self {
            pattern: pattern.iter().map(|s| s.to_lowercase()).collect(),
            replacement: replacement.iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// Tests whether the full pattern sits at the head of `suffix`.
    fn matches(&self, suffix: &[String]) -> bool {
        suffix.len() >= self.pattern.len()
            && self.pattern.iter().zip(suffix).all(|(p, t)| p == t)
    }
}

/// The outcome of a [`FunctionRule`] that matched.
///
/// `consumed` tokens at the head of the window are replaced by `replacement`.
#[derive(Clone, Debug)]
pub struct RuleAction {
    /// Number of tokens consumed from the head of the window. Always ≥ 1.
    pub consumed: usize,
    /// Tokens spliced in where the consumed tokens were.
    pub replacement: Vec<String>,
}

/// A predicate-based rewrite over a token window.
///
/// Used for open-ended families a literal table cannot enumerate compactly,
/// such as English number words. Returns `None` when the head of the window
/// does not match.
pub type FunctionRule = fn(&[String]) -> Option<RuleAction>;

/// Ordered token-rewriting engine.
///
/// Rule order is significant and fixed once the normalizer is built; two equal
/// inputs against the same rule tables always normalize identically.
pub struct Normalizer {
    match_rules: Vec<MatchRule>,
    function_rules: Vec<FunctionRule>,
}

impl Default for Normalizer {
    /// The production rule set: recognizer-artifact repairs plus the
    /// English-number rewrite.
    fn default() -> Self {
        let mut normalizer = Self::empty();
        normalizer.push_match_rule(MatchRule::new(&["for", "word"], &["forward"]));
        normalizer.push_match_rule(MatchRule::new(&["4", "word"], &["forward"]));
        normalizer.push_match_rule(MatchRule::new(&["four", "word"], &["forward"]));
        normalizer.push_match_rule(MatchRule::new(&["go", "to"], &["goto"]));
        normalizer.push_match_rule(MatchRule::new(&["polygons"], &["polygon"]));
        normalizer.push_match_rule(MatchRule::new(&["write"], &["right"]));
        normalizer.push_function_rule(english_numbers);
        normalizer
    }
}

impl Normalizer {
    /// Creates a normalizer with no rules; [`normalize`](Self::normalize) is
    /// then the identity (modulo case folding and token separators).
    pub fn empty() -> Self {
        Self {
            match_rules: Vec::new(),
            function_rules: Vec::new(),
        }
    }

    /// Appends a literal rewrite rule. Rules fire in registration order.
    pub fn push_match_rule(&mut self, rule: MatchRule) {
        self.match_rules.push(rule);
    }

    /// Appends a predicate rewrite rule. Function rules fire after all match
    /// rules at each cursor position.
    pub fn push_function_rule(&mut self, rule: FunctionRule) {
        self.function_rules.push(rule);
    }

    /// Rewrites `text` according to the rule tables and returns the repaired
    /// line, tokens rejoined with single spaces.
    ///
    /// The scan keeps an explicit cursor over a mutable token buffer. At each
    /// position every match rule, then every function rule, is tested against
    /// the current suffix; a hit splices the replacement in at the cursor.
    /// The cursor then advances by exactly one — it is never re-anchored after
    /// a splice, so this is deliberately not a fixed-point rewrite system.
    /// Later rules at the same position see what earlier rules produced.
    ///
    /// Never fails; tokens no rule matches pass through unchanged.
    pub fn normalize(&self, text: &str) -> String {
        let mut tokens = tokenize(text);

        let mut index = 0;
        while index < tokens.len() {
            for rule in &self.match_rules {
                if rule.matches(&tokens[index..]) {
                    let consumed = rule.pattern.len();
                    tokens.splice(index..index + consumed, rule.replacement.iter().cloned());
                }
            }

            for rule in &self.function_rules {
                if let Some(action) = rule(&tokens[index..]) {
                    let consumed = action.consumed.min(tokens.len() - index);
                    tokens.splice(index..index + consumed, action.replacement);
                }
            }

            index += 1;
        }

        tokens.join(" ")
    }
}

/// Rewrites a leading English number word (`one`..`ten`) to its decimal form.
pub fn english_numbers(window: &[String]) -> Option<RuleAction> {
    let digits = match window.first()?.as_str() {
        "one" => "1",
        "two" => "2",
        "three" => "3",
        "four" => "4",
        "five" => "5",
        "six" => "6",
        "seven" => "7",
        "eight" => "8",
        "nine" => "9",
        "ten" => "10",
        _ => return None,
    };

    Some(RuleAction {
        consumed: 1,
        replacement: vec![digits.to_owned()],
    })
}
