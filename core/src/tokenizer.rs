use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_normalization::UnicodeNormalization;
use std::collections::HashSet;

lazy_static! {
    static ref RE: Regex = Regex::new(r"(?u)\p{L}[\p{L}\p{N}_']*").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","can't","cannot","could","couldn't",
            "did","didn't","do","does","doesn't","doing","don't","down","during",
            "each","few","for","from","further",
            "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
            "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
            "let's","me","more","most","mustn't","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
            "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
            "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

/// Split text into word tokens using NFKC normalization and lowercasing.
/// Stop words are kept; see [`remove_stop_words`].
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    RE.find_iter(&normalized).map(|m| m.as_str().to_string()).collect()
}

pub fn remove_stop_words(tokens: Vec<String>) -> Vec<String> {
    tokens.into_iter().filter(|t| !is_stopword(t)).collect()
}

/// English Snowball stemming, applied token by token.
pub fn stem(tokens: Vec<String>) -> Vec<String> {
    tokens.into_iter().map(|t| STEMMER.stem(&t).to_string()).collect()
}

/// Turns raw text into the terms that make up vector dimensions.
///
/// Documents and queries must go through the same analyzer, otherwise query
/// terms will not line up with the vocabulary.
pub trait Analyzer {
    fn tokenize(&self, text: &str) -> Vec<String>;
    fn remove_stop_words(&self, tokens: Vec<String>) -> Vec<String>;

    fn analyze(&self, text: &str) -> Vec<String> {
        self.remove_stop_words(self.tokenize(text))
    }
}

/// Regex tokenizer with the English stop-word list. Stemming is opt-in.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardAnalyzer {
    pub stem: bool,
}

impl StandardAnalyzer {
    pub fn new(stem: bool) -> Self { Self { stem } }
}

impl Analyzer for StandardAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize(text)
    }

    fn remove_stop_words(&self, tokens: Vec<String>) -> Vec<String> {
        let kept = remove_stop_words(tokens);
        if self.stem { stem(kept) } else { kept }
    }
}
