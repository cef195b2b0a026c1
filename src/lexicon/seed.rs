//! Built-in seed lexicon
//!
//! A small hand-picked slice of common English word forms per tag so the
//! binary answers sensibly without a corpus index file on disk.

use std::sync::LazyLock;

use super::vocabulary::TagLexicon;

/// (tag, attested word forms) seed entries
///
/// For words attested under several tags, the tag listed first here wins
/// the dictionary tagger's most-frequent slot.
static SEED_ENTRIES: &[(&str, &[&str])] = &[
    ("PRP", &["i", "you", "he", "she", "it", "we", "they"]),
    (
        "VB",
        &[
            "run", "eat", "go", "read", "write", "see", "play", "walk", "sing", "help", "sleep",
            "jump", "swim",
        ],
    ),
    (
        "VBZ",
        &[
            "runs", "eats", "goes", "reads", "writes", "sees", "plays", "walks", "sings", "helps",
            "sleeps", "jumps", "swims", "barks", "is",
        ],
    ),
    ("MD", &["can", "will", "may", "must", "should", "could", "would"]),
    ("DT", &["the", "a", "an", "this", "that"]),
    (
        "NN",
        &[
            "dog", "cat", "book", "food", "house", "song", "car", "tree", "ball", "bread", "bird",
            "fish", "water",
        ],
    ),
    (
        "NNS",
        &[
            "dogs", "cats", "books", "songs", "cars", "trees", "balls", "houses", "birds",
        ],
    ),
    (
        "JJ",
        &["happy", "sad", "big", "small", "fast", "slow", "good", "kind", "tall"],
    ),
    (
        "RB",
        &["quickly", "slowly", "loudly", "quietly", "here", "there", "well", "fast"],
    ),
    (".", &[".", "!", "?"]),
    (",", &[","]),
];

/// Seed index, built once on first use
pub static SEED_LEXICON: LazyLock<TagLexicon> = LazyLock::new(|| {
    let mut lexicon = TagLexicon::new();
    for (tag, words) in SEED_ENTRIES {
        for word in *words {
            lexicon.insert(word, tag);
        }
    }
    lexicon
});
