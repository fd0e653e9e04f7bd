//! Recursive composition of dictionary words into sentence anagrams

use crate::{index::Index, signature::Signature, word::Sentence};
use std::collections::HashMap;

/// Methods for searching sentences in the index
impl Index {
	/// Every sentence of indexed words whose letters are exactly `remaining`
	///
	/// Results follow the order of [`Signature::combinations`], then of the
	/// words in the index, then of the sentences found for the rest.
	pub(crate) fn sentences(&self, remaining: &Signature) -> Vec<Sentence> {
		let mut search = Search {
			index: self,
			memo: HashMap::new(),
		};
		search.run(remaining)
	}
}

/// State of one search, results are cached by signature key
struct Search<'a> {
	/// Index words are taken from
	index: &'a Index,
	/// Sentences already found for a signature key
	memo: HashMap<String, Vec<Sentence>>,
}

impl Search<'_> {
	fn run(&mut self, remaining: &Signature) -> Vec<Sentence> {
		if remaining.is_empty() {
			return vec![Sentence::default()];
		}

		let key = remaining.key();
		if let Some(sentences) = self.memo.get(&key) {
			log::trace!("Reusing {} sentences for `{key}`", sentences.len());
			return sentences.clone();
		}

		let index = self.index;
		let mut sentences = vec![];
		for piece in remaining.combinations() {
			// the empty piece would leave `remaining` unchanged
			if piece.is_empty() {
				continue;
			}

			let words = index.lookup(&piece);
			if words.is_empty() {
				continue;
			}

			let tails = self.run(&remaining.subtract(&piece));
			for word in words {
				sentences.extend(tails.iter().map(|tail| tail.prepend(word.clone())));
			}
		}

		self.memo.insert(key, sentences.clone());
		sentences
	}
}
