// shared by several test binaries, each using a subset
#![allow(dead_code)]

use anagram::{Dictionary, Sentence};
use std::collections::HashSet;

#[derive(Debug, thiserror::Error)]
#[error("{0} anagrams were missing or unexpected")]
struct AnagramErrors(usize);

pub(crate) fn init_logger() {
	let _ = pretty_env_logger::try_init();
}

/// Render sentences the way the CLI prints them
pub(crate) fn render(sentences: &[Sentence]) -> Vec<String> {
	sentences.iter().map(ToString::to_string).collect()
}

/// Check that `sentence` has exactly the `expected` anagrams, in any order
pub(crate) fn test_sentence_anagrams(
	dic: &str,
	sentence: &[&str],
	expected: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
	init_logger();

	let dict = Dictionary::from_slice(dic);
	let found = render(&dict.sentence_anagrams(sentence)?);
	let found_set = found.iter().map(String::as_str).collect::<HashSet<_>>();
	let expected_set = expected.iter().copied().collect::<HashSet<_>>();

	let mut errors = 0;

	errors += expected_set
		.difference(&found_set)
		.inspect(|s| log::error!("`{s}` is supposed to be an anagram but was not found"))
		.count();

	errors += found_set
		.difference(&expected_set)
		.inspect(|s| log::error!("`{s}` was found but is not expected"))
		.count();

	if found.len() != found_set.len() {
		log::error!("{} anagrams were found more than once", found.len() - found_set.len());
		errors += found.len() - found_set.len();
	}

	if errors == 0 {
		Ok(())
	} else {
		Err(Box::new(AnagramErrors(errors)))
	}
}
