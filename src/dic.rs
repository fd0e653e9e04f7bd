//! Line-oriented word list parsing
//!
//! Every line is one word: the `\n` or `\r\n` terminator is stripped and
//! nothing else is trimmed. Bytes that are not UTF-8 are replaced with
//! `U+FFFD` rather than rejecting the file.

use crate::{dictionary::DictionarySourceError, word::Word};
use nom::{
	bytes::complete::take_till,
	character::complete::char,
	multi::many0,
	IResult, Parser,
};
use nom_supreme::ParserExt;
use std::{fs::File, io::Read, path::Path, sync::Arc};

/// Raw words of a dictionary source, in source order
pub(crate) struct DicFile {
	pub(crate) words: Vec<Word>,
}

impl DicFile {
	pub(crate) fn new(content: &str) -> Result<Self, DictionarySourceError> {
		let parser_err = |e: nom::Err<nom::error::Error<&str>>| parser_error(content, e);

		let (i, mut words) = many0(Self::parse_entry).parse(content).map_err(parser_err)?;
		// last line has no terminator
		if !i.is_empty() {
			words.push(Word::from(i));
		}

		Ok(Self { words })
	}

	pub(crate) fn file(path: &Path) -> Result<Self, DictionarySourceError> {
		let io_err = |source| DictionarySourceError::Io {
			path: path.to_owned(),
			source: Arc::new(source),
		};

		let mut file = File::open(path).map_err(io_err)?;
		let mut buffer = Vec::new();
		file.read_to_end(&mut buffer).map_err(io_err)?;
		Self::new(&String::from_utf8_lossy(&buffer))
	}

	fn parse_entry(i: &str) -> IResult<&str, Word> {
		take_till(|c: char| c == '\n')
			.terminated(char('\n'))
			.map(|line: &str| Word::from(line.strip_suffix('\r').unwrap_or(line)))
			.parse(i)
	}
}

/// Locates the failing line for error reporting
fn parser_error(content: &str, err: nom::Err<nom::error::Error<&str>>) -> DictionarySourceError {
	match err {
		nom::Err::Error(e) | nom::Err::Failure(e) => {
			let consumed = &content[..content.len() - e.input.len()];
			DictionarySourceError::Parser {
				line: consumed.matches('\n').count() + 1,
				kind: e.code,
			}
		}
		nom::Err::Incomplete(_) => DictionarySourceError::Parser {
			line: content.lines().count(),
			kind: nom::error::ErrorKind::Eof,
		},
	}
}
