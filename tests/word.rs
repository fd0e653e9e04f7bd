mod utils;

use anagram::Dictionary;

const DIC: &str = "\
admirer
ate
eat
married
parley
pearly
player
replay
tea
";

#[test]
fn eat() -> Result<(), Box<dyn std::error::Error>> {
	utils::init_logger();

	let dict = Dictionary::from_words(["ate", "eat", "tea"]);
	assert_eq!(dict.word_anagrams("eat")?, ["ate", "eat", "tea"]);

	Ok(())
}

#[test]
fn keeps_source_order() -> Result<(), Box<dyn std::error::Error>> {
	utils::init_logger();

	let dict = Dictionary::from_slice(DIC);
	assert_eq!(dict.word_anagrams("married")?, ["admirer", "married"]);
	assert_eq!(
		dict.word_anagrams("player")?,
		["parley", "pearly", "player", "replay"]
	);
	assert_eq!(dict.word_anagrams("TEA")?, ["ate", "eat", "tea"]);

	Ok(())
}

#[test]
fn no_match_is_empty() -> Result<(), Box<dyn std::error::Error>> {
	utils::init_logger();

	let dict = Dictionary::from_slice(DIC);
	assert!(dict.word_anagrams("xyz")?.is_empty());
	assert!(dict.word_anagrams("eat!")?.is_empty());
	assert!(dict.word_anagrams("")?.is_empty());

	Ok(())
}

#[test]
fn idempotent() -> Result<(), Box<dyn std::error::Error>> {
	utils::init_logger();

	let dict = Dictionary::from_slice(DIC);
	let first = dict.word_anagrams("replay")?.to_vec();
	assert_eq!(dict.word_anagrams("replay")?, first.as_slice());

	Ok(())
}
