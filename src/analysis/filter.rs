/*!
 * Token filtering for content-vocabulary analysis.
 *
 * Decides which tokens count as meaningful words: function-word categories,
 * punctuation-like tags, stop words, and non-word shapes (numbers, emails,
 * URLs) are excluded, as are proper nouns.
 */

use std::collections::HashSet;

use crate::tagger::{DepLabel, PosTag, Token};

/// Filter that classifies tokens as meaningful or not
#[derive(Debug, Clone)]
pub struct TokenFilter {
    /// Part-of-speech tags excluded from the vocabulary
    exclude_pos: HashSet<PosTag>,

    /// Dependency labels excluded from the vocabulary
    exclude_deps: HashSet<DepLabel>,
}

impl Default for TokenFilter {
    fn default() -> Self {
        Self {
            exclude_pos: [
                PosTag::Punct,
                PosTag::Space,
                PosTag::Sym,
                PosTag::X,
                PosTag::Cconj,
                PosTag::Sconj,
                PosTag::Det,
                PosTag::Adp,
            ]
            .into_iter()
            .collect(),
            exclude_deps: [
                DepLabel::Cc,
                DepLabel::Punct,
                DepLabel::Det,
                DepLabel::Case,
                DepLabel::Mark,
            ]
            .into_iter()
            .collect(),
        }
    }
}

impl TokenFilter {
    /// Create a filter with custom exclusion sets
    pub fn new(exclude_pos: HashSet<PosTag>, exclude_deps: HashSet<DepLabel>) -> Self {
        Self {
            exclude_pos,
            exclude_deps,
        }
    }

    /// Whether the token counts as a meaningful word
    pub fn is_meaningful(&self, token: &Token) -> bool {
        // Proper nouns are rejected before anything else
        if token.pos == PosTag::Propn {
            return false;
        }

        !self.exclude_pos.contains(&token.pos)
            && !self.exclude_deps.contains(&token.dep)
            && !token.is_stop
            && token.is_alpha
            && !token.like_num
            && !token.like_email
            && !token.like_url
    }
}
