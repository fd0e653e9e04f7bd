//! Canonical letter-frequency representation of a piece of text
//!
//! Two strings are anagrams of each other iff their [`Signature`]s are equal.

use std::{collections::BTreeMap, fmt};

/// A character with the number of times it appears, always at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Occurrence {
	/// Lowercased character
	pub char: char,
	/// Number of times `char` appears
	pub count: usize,
}

impl Occurrence {
	/// Creates a new pair
	#[must_use]
	pub const fn new(char: char, count: usize) -> Self {
		Self { char, count }
	}
}

/// Sorted list of [`Occurrence`]s, at most one per character
///
/// Ordering is by character code point, which makes equality, hashing and
/// [`Signature::key`] depend only on the multiset of characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(Vec<Occurrence>);

impl Signature {
	/// Signature of `text` once lowercased
	///
	/// Every character counts, including digits, punctuation and whitespace.
	/// Characters are lowercased one at a time, without context.
	#[must_use]
	pub fn of(text: &str) -> Self {
		let mut counts = BTreeMap::<char, usize>::new();
		for char in text.chars().flat_map(char::to_lowercase) {
			*counts.entry(char).or_default() += 1;
		}

		Self(
			counts
				.into_iter()
				.map(|(char, count)| Occurrence::new(char, count))
				.collect(),
		)
	}

	/// Builds a signature from pairs given in any order
	///
	/// Counts of repeated characters are summed and zero counts are dropped.
	pub fn from_occurrences(occurrences: impl IntoIterator<Item = Occurrence>) -> Self {
		let mut counts = BTreeMap::<char, usize>::new();
		for occ in occurrences {
			*counts.entry(occ.char).or_default() += occ.count;
		}

		Self(
			counts
				.into_iter()
				.filter(|(_, count)| *count > 0)
				.map(|(char, count)| Occurrence::new(char, count))
				.collect(),
		)
	}

	/// Whether this is the signature of the empty string
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Total number of characters
	#[must_use]
	pub fn letters(&self) -> usize {
		self.0.iter().map(|occ| occ.count).sum()
	}

	/// Pairs in ascending character order
	pub fn iter(&self) -> impl Iterator<Item = &Occurrence> {
		self.0.iter()
	}

	/// Removes the characters of `other` from `self`
	///
	/// Characters of `other` absent from `self` are ignored, counts that reach
	/// zero disappear.
	#[must_use]
	pub fn subtract(&self, other: &Self) -> Self {
		let remaining = self
			.0
			.iter()
			.filter_map(|occ| {
				let removed = other
					.0
					.binary_search_by_key(&occ.char, |o| o.char)
					.map_or(0, |i| other.0[i].count);

				occ.count
					.checked_sub(removed)
					.filter(|count| *count > 0)
					.map(|count| Occurrence::new(occ.char, count))
			})
			.collect();

		Self(remaining)
	}

	/// Canonical string used to index the dictionary
	///
	/// Each pair is written as the character, its decimal count and a `;`.
	/// The terminator keeps keys distinct when digits are counted characters.
	#[must_use]
	pub fn key(&self) -> String {
		self.to_string()
	}

	/// Every signature whose counts are between zero and the counts of `self`
	///
	/// There are exactly `∏(count + 1)` of them, the empty one included. The
	/// first pair varies fastest.
	#[must_use]
	pub fn combinations(&self) -> Vec<Self> {
		let Some((head, tail)) = self.0.split_first() else {
			return vec![Self::default()];
		};

		let nexts = Self(tail.to_vec()).combinations();
		let mut combinations = Vec::with_capacity(nexts.len() * (head.count + 1));
		for next in nexts {
			let with_head = (1..=head.count)
				.map(|count| {
					let mut occurrences = Vec::with_capacity(next.0.len() + 1);
					occurrences.push(Occurrence::new(head.char, count));
					occurrences.extend_from_slice(&next.0);
					Self(occurrences)
				})
				.collect::<Vec<_>>();

			combinations.push(next);
			combinations.extend(with_head);
		}
		combinations
	}
}

impl fmt::Display for Signature {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for occ in &self.0 {
			write!(f, "{}{};", occ.char, occ.count)?;
		}
		Ok(())
	}
}

impl FromIterator<Occurrence> for Signature {
	fn from_iter<T: IntoIterator<Item = Occurrence>>(iter: T) -> Self {
		Self::from_occurrences(iter)
	}
}
