//! Static phrase tables.
//!
//! Keys are lowercase; multi-word keys use single spaces and match any run of
//! whitespace in the text. Replacement values are lowercase too, the case of
//! the matched text is re-applied at substitution time.

use phf::{Map, Set, phf_map, phf_set};

/// Hedging and stock phrases deleted outright.
pub static FILLER_PHRASES: Set<&'static str> = phf_set! {
    "it should be noted that",
    "it is important to note that",
    "it is worth noting that",
    "at this point in time",
    "at the end of the day",
    "for the purpose of",
    "to a certain extent",
    "as previously mentioned",
    "for the avoidance of doubt",
    "with respect to",
    "in terms of",
    "in relation to",
    "by means of",
    "for the most part",
    "in many cases",
    "there is a need to",
};

/// Formal connectives and their plain replacements.
pub static CONNECTORS: Map<&'static str, &'static str> = phf_map! {
    "therefore" => "so",
    "thus" => "so",
    "hence" => "so",
    "consequently" => "so",
    "subsequently" => "so",
    "in the event that" => "if",
    "in case" => "if",
    "prior to" => "before",
};

/// Expanded forms and their contractions.
pub static CONTRACTIONS: Map<&'static str, &'static str> = phf_map! {
    "do not" => "don't",
    "does not" => "doesn't",
    "did not" => "didn't",
    "cannot" => "can't",
    "can not" => "can't",
    "will not" => "won't",
    "is not" => "isn't",
    "are not" => "aren't",
    "were not" => "weren't",
    "has not" => "hasn't",
    "have not" => "haven't",
    "had not" => "hadn't",
    "it is" => "it's",
    "that is" => "that's",
    "there is" => "there's",
    "i am" => "i'm",
    "we are" => "we're",
    "they are" => "they're",
    "you are" => "you're",
    "i have" => "i've",
};

/// Verbose words and phrases with their plain equivalents.
pub static VOCABULARY: Map<&'static str, &'static str> = phf_map! {
    "in order to" => "to",
    "due to the fact that" => "because",
    "in spite of the fact that" => "although",
    "despite the fact that" => "although",
    "a large number of" => "many",
    "a majority of" => "most",
    "at the present time" => "now",
    "in the near future" => "soon",
    "has the ability to" => "can",
    "is able to" => "can",
    "are able to" => "can",
    "with regard to" => "about",
    "utilize" => "use",
    "utilizes" => "uses",
    "utilized" => "used",
    "utilizing" => "using",
    "utilization" => "use",
    "leverage" => "use",
    "objective" => "goal",
    "objectives" => "goals",
    "facilitate" => "help",
    "facilitates" => "helps",
    "assistance" => "help",
    "commence" => "start",
    "commenced" => "started",
    "initiate" => "start",
    "initiated" => "started",
    "terminate" => "end",
    "terminated" => "ended",
    "approximately" => "about",
    "additional" => "more",
    "demonstrate" => "show",
    "demonstrates" => "shows",
    "demonstrated" => "showed",
    "indicate" => "show",
    "indicates" => "shows",
    "endeavor" => "try",
    "sufficient" => "enough",
    "numerous" => "many",
    "obtain" => "get",
    "obtained" => "got",
    "require" => "need",
    "requires" => "needs",
    "individuals" => "people",
    "regarding" => "about",
    "methodology" => "method",
    "functionality" => "feature",
    "ascertain" => "find out",
    "modification" => "change",
    "modifications" => "changes",
    "optimal" => "best",
    "principal" => "main",
    "remainder" => "rest",
    "transmit" => "send",
    "inquire" => "ask",
    "possess" => "have",
    "comprehend" => "understand",
    "subsequent to" => "after",
    "whereas" => "while",
};

/// Ultra-common words that the token simplifier never touches.
pub static COMMON_WORDS: Set<&'static str> = phf_set! {
    "the", "be", "and", "of", "a", "in", "to", "have", "it", "i", "that", "for",
    "you", "he", "with", "on", "do", "say", "this", "they", "at", "but", "we",
    "his", "from", "not", "by", "she", "or", "as", "what", "go", "their", "can",
    "who", "get", "if", "would", "her", "all", "my", "make", "about", "know",
    "will", "up", "one", "time", "there", "year", "so", "think", "when", "which",
    "them", "some", "me", "people", "take", "out", "into", "just", "see", "him",
    "your", "come", "could", "now", "than", "like", "other", "how", "then", "its",
    "our", "two", "more", "these", "want", "way", "look", "first", "also", "new",
    "because", "day", "use", "no", "man", "find", "here", "thing", "give", "many",
    "well", "only", "those", "tell", "very", "even", "back", "any", "good",
    "woman", "through", "us", "life", "child",
};

/// Words that close a passive "by <agent>" phrase: whatever follows is not
/// part of the agent.
pub static CLAUSE_BOUNDARIES: Set<&'static str> = phf_set! {
    "to", "in", "on", "at", "for", "with", "from", "into", "onto", "during",
    "because", "and", "but", "or", "so", "if", "when", "while", "after",
    "before", "since", "until", "unless", "although", "though", "that",
    "which", "who", "whom", "where", "as", "than", "via", "within", "without",
    "across", "through", "despite", "over", "under", "about", "against",
    "between", "among", "throughout", "toward", "towards", "upon",
};
