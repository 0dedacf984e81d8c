pub mod assets;
pub mod logging;

// Morphological matcher: normalizer, rule catalog, irregular lookup,
// suffix matcher, candidate ranker
pub mod grammar;

// Aggregation merger and the lexical store boundary
pub mod lexicon;

// analyze / contribute facade
pub mod service;
