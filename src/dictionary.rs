//! Loading the starting word list.

use std::fs;
use std::path::Path;

use log::info;

use crate::candidates::CandidateSet;
use crate::error::{Error, Result};
use crate::word::Word;

/// Load the dictionary from the embedded file
pub fn load_dictionary() -> Result<CandidateSet> {
    parse_words(include_str!("../dictionary/dictionary.txt").lines())
}

/// Load a dictionary from disk.
///
/// A `.json` file must hold a JSON array of words; anything else is read as
/// one word per line.
pub fn read_dictionary(path: &Path) -> Result<CandidateSet> {
    let text = fs::read_to_string(path).map_err(|source| Error::Dictionary {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
    let words = if is_json {
        let words: Vec<String> =
            serde_json::from_str(&text).map_err(|source| Error::DictionaryFormat {
                path: path.to_path_buf(),
                source,
            })?;
        parse_words(words.iter().map(String::as_str))?
    } else {
        parse_words(text.lines())?
    };

    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Lower-case and validate every non-blank entry.
pub fn parse_words<'a, I>(lines: I) -> Result<CandidateSet>
where
    I: IntoIterator<Item = &'a str>,
{
    let words = lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Word::parse(&line.to_lowercase()).map_err(Error::from))
        .collect::<Result<CandidateSet>>()?;

    if words.is_empty() {
        return Err(Error::EmptyDictionary);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::path::PathBuf;
    use std::process;

    use super::*;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("wordle-assistant-{}-{}", process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn embedded_dictionary_loads() {
        let words = load_dictionary().unwrap();
        assert!(words.len() > 100);
        assert!(words.contains(&Word::parse("crane").unwrap()));
    }

    #[test]
    fn parse_skips_blanks_and_lowercases() {
        let words = parse_words(["Crane", "", "  slate  ", "crane"]).unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.contains(&Word::parse("slate").unwrap()));
    }

    #[test]
    fn parse_rejects_bad_entries() {
        assert!(matches!(
            parse_words(["crane", "cranes"]),
            Err(Error::Input(_))
        ));
        assert!(matches!(parse_words(["", " "]), Err(Error::EmptyDictionary)));
    }

    #[test]
    fn read_json_array_lowercases() {
        let path = scratch_file("upper.json", r#"["crane", "SLATE", " Crate "]"#);
        let words = read_dictionary(&path);
        fs::remove_file(&path).unwrap();

        let words = words.unwrap();
        assert_eq!(words.len(), 3);
        assert!(words.contains(&Word::parse("slate").unwrap()));
        assert!(words.contains(&Word::parse("crate").unwrap()));
    }

    #[test]
    fn read_plain_text_list() {
        let path = scratch_file("list.txt", "crane\nslate\n\nplate\n");
        let words = read_dictionary(&path);
        fs::remove_file(&path).unwrap();

        let words = words.unwrap();
        assert_eq!(words.len(), 3);
        assert!(words.contains(&Word::parse("plate").unwrap()));
    }

    #[test]
    fn read_missing_file_names_the_path() {
        let path = env::temp_dir().join(format!("wordle-assistant-{}-missing.txt", process::id()));
        match read_dictionary(&path) {
            Err(Error::Dictionary { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected a dictionary read error, got {:?}", other),
        }
    }

    #[test]
    fn read_json_that_is_not_an_array() {
        for (name, contents) in [("object.json", r#"{"words": []}"#), ("string.json", r#""crane""#)] {
            let path = scratch_file(name, contents);
            let result = read_dictionary(&path);
            fs::remove_file(&path).unwrap();

            assert!(
                matches!(result, Err(Error::DictionaryFormat { .. })),
                "{} should not parse",
                name
            );
        }
    }
}
