//! anagram
//!
//! Finds words and sentences made of the same letters as a given input,
//! against a line-oriented word dictionary.

mod dic;
mod dictionary;
mod index;
mod search;
mod signature;
mod word;

pub use dictionary::{Dictionary, DictionarySourceError, Source, DEFAULT_DICTIONARY_PATH};
pub use signature::{Occurrence, Signature};
pub use word::{Sentence, Word};
