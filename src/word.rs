//! Dictionary entries and sequences of them

use crate::signature::Signature;
use std::fmt;

/// A dictionary entry, displayed with its original casing
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

impl Word {
	/// Wraps `text` as is
	pub fn new(text: impl Into<String>) -> Self {
		Self(text.into())
	}

	/// Underlying text
	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Signature of the lowercased word
	#[must_use]
	pub fn signature(&self) -> Signature {
		Signature::of(&self.0)
	}
}

impl From<&str> for Word {
	fn from(text: &str) -> Self {
		Self::new(text)
	}
}

impl From<String> for Word {
	fn from(text: String) -> Self {
		Self(text)
	}
}

impl AsRef<str> for Word {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl PartialEq<&str> for Word {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

impl fmt::Display for Word {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Ordered list of [`Word`]s
///
/// Two sentences with the same words in a different order are different.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sentence(Vec<Word>);

impl Sentence {
	/// Words in order
	#[must_use]
	pub fn words(&self) -> &[Word] {
		&self.0
	}

	/// Number of words
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether the sentence has no word
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Signature of the words concatenated without separator
	#[must_use]
	pub fn signature(&self) -> Signature {
		Signature::of(&self.0.iter().map(Word::as_str).collect::<String>())
	}

	/// New sentence starting with `word` and followed by this one
	#[must_use]
	pub(crate) fn prepend(&self, word: Word) -> Self {
		let mut words = Vec::with_capacity(self.0.len() + 1);
		words.push(word);
		words.extend_from_slice(&self.0);
		Self(words)
	}
}

impl From<Vec<Word>> for Sentence {
	fn from(words: Vec<Word>) -> Self {
		Self(words)
	}
}

impl FromIterator<Word> for Sentence {
	fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl<'a> IntoIterator for &'a Sentence {
	type Item = &'a Word;
	type IntoIter = std::slice::Iter<'a, Word>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl PartialEq<[&str]> for Sentence {
	fn eq(&self, other: &[&str]) -> bool {
		self.0.len() == other.len() && self.0.iter().zip(other).all(|(w, o)| w == o)
	}
}

/// Words separated by a single space
impl fmt::Display for Sentence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, word) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}
			write!(f, "{word}")?;
		}
		Ok(())
	}
}
