mod keywords;

pub use keywords::KeywordClassifier;
