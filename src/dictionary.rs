//! High level interface to query anagrams
//!
//! Entrypoint methods are
//! - [`Dictionary::word_anagrams`]: single words made of the same letters
//! - [`Dictionary::sentence_anagrams`]: sequences of words using all the letters of a sentence
//!
//! The underlying index is built once, on first use.

use crate::{dic::DicFile, index::Index, signature::Signature, word::Sentence, word::Word};
use std::{
	fmt, io,
	path::{Path, PathBuf},
	sync::{Arc, OnceLock},
};

/// Path read by [`Dictionary::default`]
pub const DEFAULT_DICTIONARY_PATH: &str = "dictionary.txt";

/// Where a [`Dictionary`] takes its words from
#[derive(Debug, Clone)]
pub enum Source {
	/// Line-oriented file, one word per line
	Path(PathBuf),
	/// Line-oriented text already in memory
	Text(String),
	/// Words already split
	Words(Vec<Word>),
}

impl Source {
	/// Reads and splits the source into words
	fn read(&self) -> Result<Vec<Word>, DictionarySourceError> {
		match self {
			Self::Path(path) => Ok(DicFile::file(path)?.words),
			Self::Text(text) => Ok(DicFile::new(text)?.words),
			Self::Words(words) => Ok(words.clone()),
		}
	}
}

impl Default for Source {
	fn default() -> Self {
		Self::Path(PathBuf::from(DEFAULT_DICTIONARY_PATH))
	}
}

impl fmt::Display for Source {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Path(path) => write!(f, "`{}`", path.display()),
			Self::Text(_) => write!(f, "text"),
			Self::Words(_) => write!(f, "word list"),
		}
	}
}

/// Ways loading a [`Dictionary`] could go wrong
///
/// This is fatal: a dictionary that failed to load answers every later query
/// with the same error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DictionarySourceError {
	/// Source is not a valid line-oriented word list
	#[error("Could not parse line {line} of dictionary: {kind:?}")]
	Parser {
		/// 1-based line number
		line: usize,
		/// What the parser expected
		kind: nom::error::ErrorKind,
	},

	/// Could not open or read the given file
	#[error("Could not read dictionary `{}`: {source}", path.display())]
	Io {
		/// File that was read
		path: PathBuf,
		/// Underlying failure
		source: Arc<io::Error>,
	},
}

/// Anagram finder over a lazily indexed word list
#[derive(Debug, Default)]
pub struct Dictionary {
	/// Words to index on first use
	source: Source,
	/// Outcome of the one-time load
	index: OnceLock<Result<Index, DictionarySourceError>>,
}

/// Constructors
impl Dictionary {
	/// Nothing is read until the first query or [`Dictionary::load`].
	#[must_use]
	pub const fn new(source: Source) -> Self {
		Self {
			source,
			index: OnceLock::new(),
		}
	}

	/// Dictionary reading `path`, one word per line
	pub fn from_path(path: impl AsRef<Path>) -> Self {
		Self::new(Source::Path(path.as_ref().to_owned()))
	}

	/// Dictionary over `content`, one word per line
	pub fn from_slice(content: impl Into<String>) -> Self {
		Self::new(Source::Text(content.into()))
	}

	/// Dictionary over already split words
	pub fn from_words<W: Into<Word>>(words: impl IntoIterator<Item = W>) -> Self {
		Self::new(Source::Words(words.into_iter().map(Into::into).collect()))
	}

	/// Replaces the source, the index is fully rebuilt on next use
	pub fn reseed(&mut self, source: Source) {
		log::debug!("Reseeding dictionary from {source}");
		self.source = source;
		self.index = OnceLock::new();
	}
}

/// Methods for querying the dictionary
impl Dictionary {
	/// Builds the index if it was not built yet
	///
	/// Concurrent first callers wait for a single load to complete.
	///
	/// # Errors
	///
	/// Will error if the source could not be read or parsed, now or during
	/// the first load.
	pub fn load(&self) -> Result<(), DictionarySourceError> {
		self.index().map(|_| ())
	}

	/// Number of indexed words, duplicates included
	///
	/// # Errors
	///
	/// See [`Dictionary::load`]
	pub fn len(&self) -> Result<usize, DictionarySourceError> {
		self.index().map(Index::len)
	}

	/// Dictionary words made of the same letters as `word`, in source order
	///
	/// No match is an empty list.
	///
	/// # Errors
	///
	/// See [`Dictionary::load`]
	pub fn word_anagrams(&self, word: &str) -> Result<&[Word], DictionarySourceError> {
		let words = self.index()?.lookup(&Signature::of(word));
		log::debug!("Found {} anagrams of `{word}`", words.len());
		Ok(words)
	}

	/// Sentences of dictionary words using exactly the letters of `sentence`
	///
	/// Word boundaries in `sentence` are ignored. No match is an empty list.
	///
	/// # Errors
	///
	/// See [`Dictionary::load`]
	pub fn sentence_anagrams<S: AsRef<str>>(
		&self,
		sentence: &[S],
	) -> Result<Vec<Sentence>, DictionarySourceError> {
		let index = self.index()?;
		let text = sentence.iter().map(AsRef::as_ref).collect::<String>();
		let sentences = index.sentences(&Signature::of(&text));
		log::debug!("Found {} anagrams of `{text}`", sentences.len());
		Ok(sentences)
	}

	fn index(&self) -> Result<&Index, DictionarySourceError> {
		self.index
			.get_or_init(|| {
				let index = self.source.read()?.into_iter().collect::<Index>();
				log::info!(
					"Indexed {} words under {} signatures from {}",
					index.len(),
					index.signatures(),
					self.source
				);
				Ok(index)
			})
			.as_ref()
			.map_err(Clone::clone)
	}
}
