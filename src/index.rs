//! Words grouped by [`Signature`]

use crate::{signature::Signature, word::Word};
use std::collections::HashMap;

/// Maps [`Signature::key`] to every word sharing that signature
///
/// Words keep the order they had in the source, duplicates included.
#[derive(Debug, Default)]
pub(crate) struct Index {
	entries: HashMap<String, Vec<Word>>,
	len: usize,
}

impl Index {
	pub(crate) fn new(words: impl IntoIterator<Item = Word>) -> Self {
		let mut index = Self::default();
		for word in words {
			index.insert(word);
		}
		index
	}

	fn insert(&mut self, word: Word) {
		let entry: &mut Vec<Word> = self.entries.entry(word.signature().key()).or_default();
		entry.push(word);
		self.len += 1;
	}

	/// Words with exactly this signature, empty when none match
	pub(crate) fn lookup(&self, signature: &Signature) -> &[Word] {
		self.entries
			.get(&signature.key())
			.map(Vec::as_slice)
			.unwrap_or_default()
	}

	/// Number of indexed words
	pub(crate) const fn len(&self) -> usize {
		self.len
	}

	/// Number of distinct signatures
	pub(crate) fn signatures(&self) -> usize {
		self.entries.len()
	}
}

impl FromIterator<Word> for Index {
	fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
		Self::new(iter)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn index(words: &[&str]) -> Index {
		words.iter().copied().map(Word::from).collect()
	}

	#[test]
	fn groups_words_in_source_order() {
		let index = index(&["tea", "me", "ate", "Eat", "em"]);
		assert_eq!(index.lookup(&Signature::of("eat")), ["tea", "ate", "Eat"]);
		assert_eq!(index.lookup(&Signature::of("ME")), ["me", "em"]);
		assert_eq!(index.len(), 5);
		assert_eq!(index.signatures(), 2);
	}

	#[test]
	fn keeps_duplicates() {
		let index = index(&["eat", "eat"]);
		assert_eq!(index.lookup(&Signature::of("tea")), ["eat", "eat"]);
	}

	#[test]
	fn missing_signature_is_empty() {
		let index = index(&["eat"]);
		assert!(index.lookup(&Signature::of("zzz")).is_empty());
		assert!(index.lookup(&Signature::default()).is_empty());
	}
}
