/*!
 * Built-in English linguistic model.
 *
 * Tags tokens with a deterministic pipeline: Unicode word segmentation,
 * closed-class lexicon lookup for the function-word categories, shape
 * heuristics for numerals, emails, and URLs, a capitalization heuristic for
 * proper nouns, and inflectional suffix cues for the open classes. The
 * dependency label is derived from the tag, which is exact for the
 * function-word relations the analysis pipeline filters on.
 *
 * The model holds no mutable state; one instance can serve any number of
 * concurrent parses.
 */

use std::collections::HashSet;
use std::sync::LazyLock;

use unicode_segmentation::UnicodeSegmentation;

use crate::errors::ModelError;
use crate::tagger::{shape, DepLabel, LanguageModel, PosTag, Token};

use super::lemma::lemmatize;

/// High-frequency function words excluded from content-vocabulary analysis
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
        "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
        "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
        "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
        "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
        "for", "with", "about", "against", "between", "into", "through", "during", "before",
        "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
        "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
        "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
        "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "can", "will",
        "just", "should", "would", "could", "may", "might", "must", "shall", "now",
    ]
    .into_iter()
    .collect()
});

/// Determiners
static DETERMINERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
        "some", "any", "no", "another", "such", "all", "both", "half", "several", "enough",
        "much", "many", "few", "little", "certain", "various",
    ]
    .into_iter()
    .collect()
});

/// Adpositions
static ADPOSITIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
        "during", "before", "after", "above", "below", "from", "of", "off", "over", "under",
        "near", "across", "behind", "beyond", "despite", "except", "inside", "outside", "onto",
        "toward", "towards", "upon", "within", "without", "along", "among", "around", "beneath",
        "beside", "besides", "throughout", "underneath", "unlike", "via", "amid", "per", "till",
        "past", "since", "until", "regarding",
    ]
    .into_iter()
    .collect()
});

/// Coordinating conjunctions
static COORDINATING_CONJUNCTIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["and", "but", "or", "nor", "yet", "so"].into_iter().collect());

/// Subordinating conjunctions
static SUBORDINATING_CONJUNCTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "because", "if", "when", "while", "although", "though", "unless", "whereas", "whether",
        "once", "since", "until", "that", "after", "before",
    ]
    .into_iter()
    .collect()
});

/// Pronouns
static PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you", "your",
        "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
        "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "who",
        "whom", "whose", "what", "which", "anybody", "anyone", "anything", "everybody",
        "everyone", "everything", "nobody", "nothing", "somebody", "someone", "something",
    ]
    .into_iter()
    .collect()
});

/// Auxiliary verbs
static AUXILIARIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
        "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
        "must", "ought",
    ]
    .into_iter()
    .collect()
});

/// Particles
static PARTICLES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["not", "to", "n't"].into_iter().collect());

/// Interjections
static INTERJECTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "oh", "hey", "wow", "hmm", "yeah", "okay", "ok", "hello", "hi", "bye", "uh", "um", "huh",
        "ah", "oops",
    ]
    .into_iter()
    .collect()
});

/// Characters classified as symbols rather than punctuation
const SYMBOL_CHARS: &[char] = &['$', '€', '£', '¥', '%', '+', '=', '<', '>', '^', '~', '|', '§'];

/// Built-in English linguistic model
#[derive(Debug, Default)]
pub struct LexiconModel;

impl LexiconModel {
    /// Create a new lexicon model
    pub fn new() -> Self {
        LexiconModel
    }

    /// Assign a part-of-speech tag to one word
    ///
    /// `sentence_initial` carries whether the token opens a sentence, which
    /// gates the capitalized-proper-noun heuristic.
    fn tag_word(&self, word: &str, sentence_initial: bool) -> PosTag {
        if word.chars().all(char::is_whitespace) {
            return PosTag::Space;
        }

        if word.chars().all(|c| SYMBOL_CHARS.contains(&c)) {
            return PosTag::Sym;
        }

        if word.chars().all(|c| !c.is_alphanumeric()) {
            return PosTag::Punct;
        }

        if shape::like_num(word) {
            return PosTag::Num;
        }

        let lower = word.to_lowercase();

        if DETERMINERS.contains(lower.as_str()) {
            return PosTag::Det;
        }
        if ADPOSITIONS.contains(lower.as_str()) {
            return PosTag::Adp;
        }
        if COORDINATING_CONJUNCTIONS.contains(lower.as_str()) {
            return PosTag::Cconj;
        }
        if SUBORDINATING_CONJUNCTIONS.contains(lower.as_str()) {
            return PosTag::Sconj;
        }
        if PRONOUNS.contains(lower.as_str()) {
            return PosTag::Pron;
        }
        if AUXILIARIES.contains(lower.as_str()) {
            return PosTag::Aux;
        }
        if PARTICLES.contains(lower.as_str()) {
            return PosTag::Part;
        }
        if INTERJECTIONS.contains(lower.as_str()) {
            return PosTag::Intj;
        }

        // Capitalized away from a sentence opening reads as a proper noun
        if !sentence_initial && word.chars().next().is_some_and(char::is_uppercase) {
            return PosTag::Propn;
        }

        if !word.chars().all(char::is_alphabetic) {
            return PosTag::X;
        }

        // Inflectional cues for the open classes
        if lower.ends_with("ly") && lower.len() > 4 {
            return PosTag::Adv;
        }
        if (lower.ends_with("ing") || lower.ends_with("ed")) && lower.len() > 4 {
            return PosTag::Verb;
        }
        if lower.ends_with("ous")
            || lower.ends_with("ful")
            || lower.ends_with("ive")
            || lower.ends_with("able")
            || lower.ends_with("ible")
        {
            return PosTag::Adj;
        }

        PosTag::Noun
    }

    /// Derive the dependency label from the tag.
    /// Exact for the function-word relations; open-class tokens stay
    /// unclassified because no tree is built.
    fn dep_for(pos: PosTag) -> DepLabel {
        match pos {
            PosTag::Det => DepLabel::Det,
            PosTag::Adp => DepLabel::Case,
            PosTag::Cconj => DepLabel::Cc,
            PosTag::Sconj => DepLabel::Mark,
            PosTag::Punct => DepLabel::Punct,
            PosTag::Adv => DepLabel::Advmod,
            PosTag::Aux => DepLabel::Aux,
            PosTag::Pron => DepLabel::Nsubj,
            _ => DepLabel::Dep,
        }
    }

    /// Whether this token ends a sentence
    fn ends_sentence(word: &str) -> bool {
        matches!(word, "." | "!" | "?")
    }

    /// Build a fully-flagged token for one segment
    fn make_token(&self, segment: &str, sentence_initial: bool) -> Token {
        let pos = self.tag_word(segment, sentence_initial);
        let lower = segment.to_lowercase();

        Token {
            text: segment.to_string(),
            pos,
            dep: Self::dep_for(pos),
            is_stop: STOP_WORDS.contains(lower.as_str()),
            is_alpha: shape::is_alphabetic(segment),
            like_num: shape::like_num(segment),
            like_email: shape::like_email(segment),
            like_url: shape::like_url(segment),
        }
    }
}

impl LanguageModel for LexiconModel {
    fn parse(&self, text: &str) -> Result<Vec<Token>, ModelError> {
        let mut tokens = Vec::new();
        let mut sentence_initial = true;

        for chunk in text.split_whitespace() {
            // Emails and URLs stay in one piece; word-bound splitting would
            // break them at '@' and '.'
            let core = chunk
                .trim_end_matches(|c: char| matches!(c, '.' | ',' | '!' | '?' | ';' | ':'));
            if !core.is_empty() && (shape::like_email(core) || shape::like_url(core)) {
                tokens.push(self.make_token(core, sentence_initial));
                sentence_initial = false;
                for punct in chunk[core.len()..].split_word_bounds() {
                    tokens.push(self.make_token(punct, sentence_initial));
                    if Self::ends_sentence(punct) {
                        sentence_initial = true;
                    }
                }
                continue;
            }

            for segment in chunk.split_word_bounds() {
                if segment.chars().all(char::is_whitespace) {
                    continue;
                }

                let token = self.make_token(segment, sentence_initial);
                let pos = token.pos;
                tokens.push(token);

                if pos == PosTag::Punct {
                    if Self::ends_sentence(segment) {
                        sentence_initial = true;
                    }
                } else {
                    sentence_initial = false;
                }
            }
        }

        Ok(tokens)
    }

    fn lemma(&self, word: &str) -> Option<String> {
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(lemmatize(trimmed))
    }
}
