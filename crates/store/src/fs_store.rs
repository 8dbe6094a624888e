use crate::error::{StoreError, StoreResult};
use crate::name::validate_name;
use crate::stamp::FileStamp;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// One article as read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredArticle {
    /// File name without its extension.
    pub name: String,
    /// Raw markup source.
    pub text: String,
    pub stamp: FileStamp,
}

/// Directory of `<name>.<ext>` article files.
#[derive(Debug, Clone)]
pub struct ArticleStore {
    root: PathBuf,
    extension: String,
}

impl ArticleStore {
    /// Opens (and creates, if missing) the store directory.
    ///
    /// `extension` may be given with or without its leading dot.
    ///
    /// # Example
    /// ```no_run
    /// use store::ArticleStore;
    ///
    /// let store = ArticleStore::open("articles", "rst").unwrap();
    /// let text = store.read_article("intro").unwrap();
    /// ```
    pub fn open(root: impl Into<PathBuf>, extension: &str) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        let extension = extension.trim_start_matches('.').to_string();
        tracing::debug!(root = %root.display(), extension = %extension, "opened article store");
        Ok(Self { root, extension })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Path of the file backing `name`, after validating the name.
    pub fn path_for(&self, name: &str) -> StoreResult<PathBuf> {
        validate_name(name)?;
        Ok(self.root.join(format!("{name}.{}", self.extension)))
    }

    /// Returns the raw text of article `name`.
    pub fn read_article(&self, name: &str) -> StoreResult<String> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            return Err(StoreError::NotFound(name.to_string()));
        }
        read_text(&path, name)
    }

    /// File names of every article in the store, sorted by name.
    ///
    /// Only regular files carrying the store extension are returned; files
    /// whose stem is not a valid article name are skipped.
    pub fn list_article_files(&self) -> StoreResult<Vec<String>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            let Ok(file_name) = entry.file_name().into_string() else {
                continue;
            };
            let Some(stem) = self.stem_of(&file_name) else {
                continue;
            };
            if validate_name(stem).is_err() {
                tracing::debug!(file = %file_name, "skipping article file with unaddressable name");
                continue;
            }
            files.push(file_name);
        }
        files.sort();
        Ok(files)
    }

    /// Reads one listed article file together with its timestamp.
    pub fn load_article(&self, file_name: &str) -> StoreResult<StoredArticle> {
        let name = self
            .stem_of(file_name)
            .ok_or_else(|| StoreError::NotFound(file_name.to_string()))?;
        validate_name(name)?;

        let path = self.root.join(file_name);
        let text = read_text(&path, name)?;
        let meta = fs::metadata(&path).map_err(|err| not_found_or_io(err, name))?;
        let stamp = FileStamp::from_metadata(&meta)?;

        Ok(StoredArticle {
            name: name.to_string(),
            text,
            stamp,
        })
    }

    /// Creates or replaces article `name` with `text`.
    ///
    /// The text is written to a hidden temporary file in the store directory
    /// and then renamed over the target.
    pub fn write_article(&self, name: &str, text: &str) -> StoreResult<()> {
        let path = self.path_for(name)?;

        let mut tmp = tempfile::Builder::new()
            .prefix(".folio-")
            .suffix(".tmp")
            .tempfile_in(&self.root)?;
        tmp.write_all(text.as_bytes())?;
        tmp.as_file().sync_all()?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))?;
        }

        tmp.persist(&path).map_err(|err| StoreError::Io(err.error))?;

        tracing::info!(name = %name, bytes = text.len(), "article written");
        Ok(())
    }

    fn stem_of<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name
            .strip_suffix(self.extension.as_str())
            .and_then(|rest| rest.strip_suffix('.'))
    }
}

fn read_text(path: &Path, name: &str) -> StoreResult<String> {
    fs::read_to_string(path).map_err(|err| not_found_or_io(err, name))
}

fn not_found_or_io(err: io::Error, name: &str) -> StoreError {
    if err.kind() == io::ErrorKind::NotFound {
        StoreError::NotFound(name.to_string())
    } else {
        StoreError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, ArticleStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ArticleStore::open(dir.path(), ".rst").unwrap();
        (dir, store)
    }

    #[test]
    fn open_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("articles");
        let store = ArticleStore::open(&root, "rst").unwrap();
        assert!(root.is_dir());
        assert_eq!(store.extension(), "rst");
    }

    #[test]
    fn stem_requires_dot_before_extension() {
        let (_dir, store) = store();
        assert_eq!(store.stem_of("intro.rst"), Some("intro"));
        assert_eq!(store.stem_of("introrst"), None);
        assert_eq!(store.stem_of("notes.txt"), None);
        assert_eq!(store.stem_of(".rst"), Some(""));
    }

    #[test]
    fn listing_ignores_other_files() {
        let (dir, store) = store();
        fs::write(dir.path().join("b.rst"), "B\n=\n").unwrap();
        fs::write(dir.path().join("a.rst"), "A\n=\n").unwrap();
        fs::write(dir.path().join("stopwords.txt"), "the\n").unwrap();
        fs::write(dir.path().join("bad name.rst"), "x").unwrap();
        fs::create_dir(dir.path().join("dir.rst")).unwrap();

        assert_eq!(store.list_article_files().unwrap(), vec!["a.rst", "b.rst"]);
    }

    #[test]
    fn read_missing_and_directory_are_not_found() {
        let (dir, store) = store();
        fs::create_dir(dir.path().join("folder.rst")).unwrap();
        assert!(matches!(store.read_article("nope"), Err(StoreError::NotFound(n)) if n == "nope"));
        assert!(matches!(store.read_article("folder"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn write_leaves_no_temp_files_behind() {
        let (dir, store) = store();
        store.write_article("intro", "Intro\n=====\n").unwrap();
        let entries: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(entries, vec!["intro.rst"]);
    }

    #[cfg(unix)]
    #[test]
    fn written_articles_are_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let (dir, store) = store();
        store.write_article("intro", "x").unwrap();
        let mode = fs::metadata(dir.path().join("intro.rst")).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}
