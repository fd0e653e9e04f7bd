mod utils;

use anagram::{Dictionary, DictionarySourceError, Source};
use std::{io::Write, thread};

#[test]
fn reads_file() -> Result<(), Box<dyn std::error::Error>> {
	utils::init_logger();

	let mut file = tempfile::NamedTempFile::new()?;
	write!(file, "ate\r\neat\r\ntea")?;

	let dict = Dictionary::from_path(file.path());
	assert_eq!(dict.len()?, 3);
	assert_eq!(dict.word_anagrams("eat")?, ["ate", "eat", "tea"]);

	Ok(())
}

#[test]
fn missing_file_is_fatal() {
	utils::init_logger();

	let dir = tempfile::tempdir().expect("temporary directory");
	let dict = Dictionary::from_path(dir.path().join("dictionary.txt"));

	assert!(matches!(dict.load(), Err(DictionarySourceError::Io { .. })));
	assert!(dict.word_anagrams("eat").is_err());
	assert!(dict.sentence_anagrams(&["eat", "me"]).is_err());
}

#[test]
fn failure_outlives_fixed_source() -> Result<(), Box<dyn std::error::Error>> {
	utils::init_logger();

	let dir = tempfile::tempdir()?;
	let path = dir.path().join("dictionary.txt");
	let mut dict = Dictionary::from_path(&path);
	assert!(dict.load().is_err());

	std::fs::write(&path, "ate\neat\ntea\n")?;
	assert!(dict.word_anagrams("eat").is_err());

	dict.reseed(Source::Path(path));
	assert_eq!(dict.word_anagrams("eat")?, ["ate", "eat", "tea"]);

	Ok(())
}

#[test]
fn concurrent_first_access() -> Result<(), Box<dyn std::error::Error>> {
	utils::init_logger();

	let mut file = tempfile::NamedTempFile::new()?;
	writeln!(file, "em\nme\nate\neat\ntea\nMae\net")?;
	let dict = Dictionary::from_path(file.path());

	let results = thread::scope(|s| {
		let handles = (0..8)
			.map(|_| s.spawn(|| dict.sentence_anagrams(&["eat", "me"])))
			.collect::<Vec<_>>();
		handles
			.into_iter()
			.map(|h| h.join().expect("search thread panicked"))
			.collect::<Result<Vec<_>, _>>()
	})?;

	assert!(results.iter().all(|r| r.len() == 14));
	assert!(results.windows(2).all(|w| w[0] == w[1]));
	assert_eq!(dict.len()?, 7);

	Ok(())
}
