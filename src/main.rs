//! Anagram CLI
//!
//! Historic~ test sentence: `Linux rulez`

use anagram::{Dictionary, DEFAULT_DICTIONARY_PATH};
use clap::{CommandFactory, Parser};
use std::{
	io::{stdin, stdout, Write},
	path::PathBuf,
};

#[derive(clap::Parser)]
#[command(about = "Find anagrams of a sentence in a word dictionary")]
struct Args {
	/// Words of the sentence to rearrange
	words: Vec<String>,

	/// Dictionary file, one word per line
	#[arg(long, short, env = "ANAGRAM_DICT", default_value = DEFAULT_DICTIONARY_PATH)]
	dict: PathBuf,

	/// List single-word anagrams of each word instead
	#[arg(long, short)]
	word: bool,

	/// Read sentences from stdin, one per line
	#[arg(long, short)]
	interactive: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	pretty_env_logger::init();

	let args = Args::parse();

	if args.words.is_empty() && !args.interactive {
		Args::command().print_help()?;
		return Ok(());
	}

	let dict = Dictionary::from_path(&args.dict);
	dict.load()?;

	if !args.words.is_empty() {
		find_and_print(&dict, &args.words, args.word)?;
	}

	if args.interactive {
		loop {
			print!("anagram(s) of ❯ ");
			stdout().flush()?;

			let mut input = String::new();
			if let 0 = stdin().read_line(&mut input)? {
				return Ok(());
			};

			let Some(words) = sentence(&input) else {
				continue;
			};
			if let Err(err) = find_and_print(&dict, &words, args.word) {
				log::error!("Could not find anagrams of `{}`: {err}", input.trim());
			}
		}
	}

	Ok(())
}

/// Words of an input line, `None` when it is blank
fn sentence(input: &str) -> Option<Vec<&str>> {
	let words = input.split_whitespace().collect::<Vec<_>>();
	(!words.is_empty()).then_some(words)
}

fn find_and_print<S: AsRef<str>>(
	dict: &Dictionary,
	words: &[S],
	single: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let mut out = stdout().lock();

	if single {
		for word in words {
			for anagram in dict.word_anagrams(word.as_ref())? {
				writeln!(out, "{anagram}")?;
			}
		}
	} else {
		for sentence in dict.sentence_anagrams(words)? {
			writeln!(out, "{sentence}")?;
		}
	}

	Ok(())
}
