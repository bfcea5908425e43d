//! Extension to category folder lookup.
//!
//! The organizer never hardcodes its table: callers hand it an `ExtensionMap`,
//! either the standard one or a custom table built for a specific run.
//!
//! # Examples
//!
//! ```
//! use sortdir::extension_map::ExtensionMap;
//!
//! let map = ExtensionMap::default();
//! assert_eq!(map.category_for("pdf"), Some("PDFs"));
//! assert_eq!(map.category_for("JPG"), Some("Images"));
//! assert_eq!(map.category_for("unknownext"), None);
//! ```
use std::collections::{BTreeSet, HashMap};

/// Standard table, grouped by category folder.
const STANDARD_CATEGORIES: &[(&str, &[&str])] = &[
    ("PDFs", &["pdf"]),
    (
        "Images",
        &["png", "jpg", "jpeg", "gif", "svg", "webp", "heic", "psd", "ai"],
    ),
    ("Documents", &["doc", "docx", "txt", "md", "ppt", "pptx"]),
    ("Data", &["csv", "xlsx", "xls", "json", "xml"]),
    ("Archives", &["zip", "rar", "7z", "tar", "gz", "iso", "pka"]),
    ("Executables", &["exe", "dll"]),
    ("Music", &["mp3", "wav", "ogg", "flac", "m4a"]),
    ("Videos", &["mp4", "avi", "flv", "wmv", "mkv", "mov"]),
    ("Scripts", &["py", "pyc", "bat", "sh"]),
    ("Web", &["js", "css", "html"]),
];

/// Maps lowercase file extensions (without the dot) to category folder names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionMap {
    entries: HashMap<String, String>,
}

impl ExtensionMap {
    /// Creates an empty map. Nothing matches until entries are inserted.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Creates a map holding the standard extension table.
    pub fn standard() -> Self {
        let mut map = Self::new();
        for (category, extensions) in STANDARD_CATEGORIES {
            for ext in *extensions {
                map.insert(ext, category);
            }
        }
        map
    }

    /// Adds or replaces the category for an extension.
    ///
    /// The key is normalised: lowercased, with one leading dot removed.
    pub fn insert(&mut self, ext: &str, category: &str) {
        self.entries.insert(normalize(ext), category.to_string());
    }

    /// Returns the category folder for `ext`, ignoring case and a leading dot.
    ///
    /// ```
    /// use sortdir::extension_map::ExtensionMap;
    ///
    /// let map = ExtensionMap::default();
    /// assert_eq!(map.category_for(".Mp3"), Some("Music"));
    /// assert_eq!(map.category_for(""), None);
    /// ```
    pub fn category_for(&self, ext: &str) -> Option<&str> {
        self.entries.get(&normalize(ext)).map(String::as_str)
    }

    /// Looks up the category for a file name using [`extension_of`].
    pub fn category_for_file(&self, file_name: &str) -> Option<&str> {
        let ext = extension_of(file_name);
        if ext.is_empty() {
            return None;
        }
        self.entries.get(&ext).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct category folder names, sorted.
    pub fn categories(&self) -> Vec<&str> {
        self.entries
            .values()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl Default for ExtensionMap {
    fn default() -> Self {
        Self::standard()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for ExtensionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (ext, category) in iter {
            map.insert(ext.as_ref(), category.as_ref());
        }
        map
    }
}

fn normalize(ext: &str) -> String {
    ext.strip_prefix('.').unwrap_or(ext).to_lowercase()
}

/// Derives the lookup extension of a file name.
///
/// This is the text after the last `.`, lowercased. A name without a dot, or
/// one ending in a dot, has an empty extension. Hidden files are not special:
/// `.gitignore` yields `gitignore`.
///
/// ```
/// use sortdir::extension_map::extension_of;
///
/// assert_eq!(extension_of("Report.PDF"), "pdf");
/// assert_eq!(extension_of("archive.tar.gz"), "gz");
/// assert_eq!(extension_of("notes"), "");
/// ```
pub fn extension_of(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(idx) => file_name[idx + 1..].to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_categories() {
        let map = ExtensionMap::standard();
        assert_eq!(map.category_for("pdf"), Some("PDFs"));
        assert_eq!(map.category_for("heic"), Some("Images"));
        assert_eq!(map.category_for("pptx"), Some("Documents"));
        assert_eq!(map.category_for("json"), Some("Data"));
        assert_eq!(map.category_for("7z"), Some("Archives"));
        assert_eq!(map.category_for("dll"), Some("Executables"));
        assert_eq!(map.category_for("m4a"), Some("Music"));
        assert_eq!(map.category_for("mkv"), Some("Videos"));
        assert_eq!(map.category_for("sh"), Some("Scripts"));
        assert_eq!(map.category_for("css"), Some("Web"));
    }

    #[test]
    fn test_standard_table_size() {
        let map = ExtensionMap::default();
        assert_eq!(map.len(), 48);
        assert_eq!(map.categories().len(), 10);
    }

    #[test]
    fn test_new_map_is_empty() {
        let map = ExtensionMap::new();
        assert!(map.is_empty());
        assert_eq!(map.category_for("pdf"), None);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let map = ExtensionMap::default();
        assert_eq!(map.category_for("PNG"), Some("Images"));
        assert_eq!(map.category_for("Jpeg"), Some("Images"));
    }

    #[test]
    fn test_insert_normalizes_key() {
        let mut map = ExtensionMap::new();
        map.insert(".LOG", "Logs");
        assert_eq!(map.category_for("log"), Some("Logs"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_insert_replaces_existing_category() {
        let mut map = ExtensionMap::default();
        map.insert("txt", "Notes");
        assert_eq!(map.category_for("txt"), Some("Notes"));
    }

    #[test]
    fn test_from_iterator() {
        let map: ExtensionMap = [("rs", "Rust"), ("toml", "Rust"), ("md", "Docs")]
            .into_iter()
            .collect();
        assert_eq!(map.len(), 3);
        assert_eq!(map.categories(), vec!["Docs", "Rust"]);
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("a.pdf"), "pdf");
        assert_eq!(extension_of("photo.JPG"), "jpg");
        assert_eq!(extension_of("archive.tar.gz"), "gz");
        assert_eq!(extension_of("notes"), "");
        assert_eq!(extension_of("trailing."), "");
    }

    #[test]
    fn test_extension_of_hidden_file() {
        assert_eq!(extension_of(".gitignore"), "gitignore");
        assert_eq!(extension_of(".config.json"), "json");
    }

    #[test]
    fn test_category_for_file() {
        let map = ExtensionMap::default();
        assert_eq!(map.category_for_file("Song.MP3"), Some("Music"));
        assert_eq!(map.category_for_file("notes"), None);
        assert_eq!(map.category_for_file("b.unknownext"), None);
    }
}
