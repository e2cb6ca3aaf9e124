extern crate serde;

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Languages offered by the compiler service.
///
/// Each variant carries every identifier the workflow needs: the compiler's
/// language id and version index, the editor syntax id, the snippet key used
/// to store starter code, and the problem bank's own slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "python3")]
    Python3,
    #[serde(rename = "java")]
    Java,
    #[serde(rename = "cpp17")]
    Cpp17,
    #[serde(rename = "nodejs")]
    NodeJs,
    #[serde(rename = "c")]
    C,
    #[serde(rename = "csharp")]
    CSharp,
    #[serde(rename = "ruby")]
    Ruby,
    #[serde(rename = "swift")]
    Swift,
    #[serde(rename = "kotlin")]
    Kotlin,
    #[serde(rename = "go")]
    Go,
}

struct Entry {
    name: &'static str,
    id: &'static str,
    version_index: &'static str,
    syntax: &'static str,
    snippet_key: &'static str,
    supplier_slug: &'static str,
    comment: &'static str,
}

impl Language {
    fn entry(self) -> Entry {
        let (name, id, version_index, syntax, snippet_key, supplier_slug, comment) = match self {
            Self::Python3 => ("Python 3", "python3", "4", "python", "python", "python3", "#"),
            Self::Java => ("Java", "java", "4", "java", "java", "java", "//"),
            Self::Cpp17 => ("C++ 17", "cpp17", "1", "cpp", "cpp", "cpp", "//"),
            Self::NodeJs => ("NodeJS", "nodejs", "4", "javascript", "javascript", "javascript", "//"),
            Self::C => ("C", "c", "5", "c", "c", "c", "//"),
            Self::CSharp => ("C#", "csharp", "4", "csharp", "csharp", "csharp", "//"),
            Self::Ruby => ("Ruby", "ruby", "4", "ruby", "ruby", "ruby", "#"),
            Self::Swift => ("Swift", "swift", "4", "swift", "swift", "swift", "//"),
            Self::Kotlin => ("Kotlin", "kotlin", "3", "kotlin", "kotlin", "kotlin", "//"),
            Self::Go => ("Go", "go", "4", "go", "golang", "golang", "//"),
        };
        Entry {
            name,
            id,
            version_index,
            syntax,
            snippet_key,
            supplier_slug,
            comment,
        }
    }

    pub fn all() -> &'static [Language] {
        &[
            Self::Python3,
            Self::Java,
            Self::Cpp17,
            Self::NodeJs,
            Self::C,
            Self::CSharp,
            Self::Ruby,
            Self::Swift,
            Self::Kotlin,
            Self::Go,
        ]
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }
    pub fn id(self) -> &'static str {
        self.entry().id
    }
    pub fn version_index(self) -> &'static str {
        self.entry().version_index
    }
    pub fn syntax(self) -> &'static str {
        self.entry().syntax
    }
    pub fn snippet_key(self) -> &'static str {
        self.entry().snippet_key
    }
    pub fn supplier_slug(self) -> &'static str {
        self.entry().supplier_slug
    }
    pub fn comment(self) -> &'static str {
        self.entry().comment
    }

    /// Maps a problem-bank language slug onto the catalog.
    pub fn from_supplier_slug(slug: &str) -> Option<Language> {
        let key = normalize_slug(slug);
        Self::all()
            .iter()
            .copied()
            .find(|l| l.snippet_key() == key)
    }
}

fn normalize_slug(slug: &str) -> &str {
    match slug {
        "python3" => "python",
        other => other,
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::Python3
    }
}
impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
impl FromStr for Language {
    type Err = String;

    /// Accepts the compiler id, the snippet key or the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|l| {
                l.id().eq_ignore_ascii_case(s)
                    || l.snippet_key().eq_ignore_ascii_case(s)
                    || l.name().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| format!("unknown language \"{}\"", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supplier_slugs_normalize_onto_catalog() {
        assert_eq!(Language::from_supplier_slug("python3"), Some(Language::Python3));
        assert_eq!(Language::from_supplier_slug("golang"), Some(Language::Go));
        assert_eq!(Language::from_supplier_slug("javascript"), Some(Language::NodeJs));
        assert_eq!(Language::from_supplier_slug("cpp"), Some(Language::Cpp17));
        assert_eq!(Language::from_supplier_slug("typescript"), None);
        assert_eq!(Language::from_supplier_slug("rust"), None);
    }

    #[test]
    fn every_language_round_trips_through_its_slug() {
        for &language in Language::all() {
            assert_eq!(
                Language::from_supplier_slug(language.supplier_slug()),
                Some(language)
            );
        }
    }

    #[test]
    fn parses_any_identifier() {
        assert_eq!("cpp17".parse::<Language>(), Ok(Language::Cpp17));
        assert_eq!("golang".parse::<Language>(), Ok(Language::Go));
        assert_eq!("C#".parse::<Language>(), Ok(Language::CSharp));
        assert_eq!("Python 3".parse::<Language>(), Ok(Language::Python3));
        assert!("cobol".parse::<Language>().is_err());
    }

    #[test]
    fn deserializes_from_compiler_id() {
        let language: Language = serde_yaml::from_str("nodejs").unwrap();
        assert_eq!(language, Language::NodeJs);
        let language: Language = serde_yaml::from_str("cpp17").unwrap();
        assert_eq!(language, Language::Cpp17);
    }
}
