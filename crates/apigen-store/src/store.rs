//! Artifact storage implementation.
//!
//! Provides the main [`ArtifactStore`] type for loading the endpoint
//! selection and saving the emitted Go source.

use std::fs;
use std::path::{Path, PathBuf};

use apigen_core::{EndpointDescriptor, Error, Result};

/// Default directory holding pipeline artifacts.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// File name of the selection input written by the upstream stage.
pub const SELECTED_FILE: &str = "selected_apis.json";

/// File name of the emitted Go client source.
pub const GENERATED_FILE: &str = "generated_client.go";

/// Artifact directory manager.
///
/// Reads the selection file and writes the generated source in one base
/// directory, so the CLI stages agree on paths without passing them
/// around.
///
/// # Examples
///
/// ```no_run
/// use apigen_store::ArtifactStore;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = ArtifactStore::new("output");
/// let endpoints = store.load_selected()?;
/// println!("{} endpoints selected", endpoints.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    base_dir: PathBuf,
}

impl ArtifactStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is not created here; it appears lazily on the first
    /// save.
    #[must_use]
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the path of the selection input file.
    #[must_use]
    pub fn selected_path(&self) -> PathBuf {
        self.base_dir.join(SELECTED_FILE)
    }

    /// Returns the path of the emitted source file.
    #[must_use]
    pub fn generated_path(&self) -> PathBuf {
        self.base_dir.join(GENERATED_FILE)
    }

    /// Loads the endpoint selection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SelectionNotFound`] if the file does not exist,
    /// [`Error::SerializationError`] if it is not a JSON array of
    /// descriptors, and [`Error::Io`] for other read failures.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use apigen_store::ArtifactStore;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let store = ArtifactStore::new("output");
    /// for endpoint in store.load_selected()? {
    ///     println!("{} {}", endpoint.method, endpoint.path);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_selected(&self) -> Result<Vec<EndpointDescriptor>> {
        let path = self.selected_path();
        if !path.exists() {
            return Err(Error::SelectionNotFound { path });
        }

        let raw = fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;

        let endpoints: Vec<EndpointDescriptor> =
            serde_json::from_str(&raw).map_err(|e| Error::SerializationError {
                message: format!("failed to parse {}", path.display()),
                source: Some(e),
            })?;

        tracing::debug!(
            path = %path.display(),
            count = endpoints.len(),
            "loaded endpoint selection"
        );
        Ok(endpoints)
    }

    /// Saves the emitted Go source and returns its path.
    ///
    /// The write goes through a temporary file in the same directory
    /// followed by a rename, so a crash mid-write never leaves a truncated
    /// artifact behind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the directory cannot be created or the
    /// write or rename fails.
    pub fn save_source(&self, content: &str) -> Result<PathBuf> {
        if !self.base_dir.exists() {
            fs::create_dir_all(&self.base_dir).map_err(|source| Error::Io {
                path: self.base_dir.clone(),
                source,
            })?;
            tracing::debug!(dir = %self.base_dir.display(), "created artifact directory");
        }

        let path = self.generated_path();
        let tmp_path = self.base_dir.join(format!("{GENERATED_FILE}.tmp"));

        fs::write(&tmp_path, content).map_err(|source| Error::Io {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(
            path = %path.display(),
            bytes = content.len(),
            "saved generated source"
        );
        Ok(path)
    }
}

impl Default for ArtifactStore {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, ArtifactStore) {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_load_selected_missing_file() {
        let (_dir, store) = temp_store();
        let err = store.load_selected().unwrap_err();
        assert!(err.is_selection_not_found());
    }

    #[test]
    fn test_load_selected_roundtrip() {
        let (_dir, store) = temp_store();
        fs::write(
            store.selected_path(),
            r#"[{"name": "get user", "method": "GET", "path": "/users/<id>"}]"#,
        )
        .unwrap();

        let endpoints = store.load_selected().unwrap();
        assert_eq!(endpoints.len(), 1);
        assert_eq!(endpoints[0].name, "get user");
        assert_eq!(endpoints[0].path, "/users/<id>");
    }

    #[test]
    fn test_load_selected_empty_array_is_ok_here() {
        // An empty selection is the generator's error, not the store's.
        let (_dir, store) = temp_store();
        fs::write(store.selected_path(), "[]").unwrap();

        let endpoints = store.load_selected().unwrap();
        assert!(endpoints.is_empty());
    }

    #[test]
    fn test_load_selected_malformed_json() {
        let (_dir, store) = temp_store();
        fs::write(store.selected_path(), "{not json").unwrap();

        let err = store.load_selected().unwrap_err();
        assert!(err.is_serialization_error());
    }

    #[test]
    fn test_load_selected_wrong_shape() {
        let (_dir, store) = temp_store();
        fs::write(store.selected_path(), r#"{"name": "not an array"}"#).unwrap();

        let err = store.load_selected().unwrap_err();
        assert!(err.is_serialization_error());
    }

    #[test]
    fn test_save_source_writes_file() {
        let (_dir, store) = temp_store();
        let path = store.save_source("package main\n").unwrap();

        assert_eq!(path, store.generated_path());
        assert_eq!(fs::read_to_string(path).unwrap(), "package main\n");
    }

    #[test]
    fn test_save_source_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = ArtifactStore::new(&nested);

        store.save_source("package main\n").unwrap();
        assert!(nested.join(GENERATED_FILE).exists());
    }

    #[test]
    fn test_save_source_overwrites_previous() {
        let (_dir, store) = temp_store();
        store.save_source("old\n").unwrap();
        store.save_source("new\n").unwrap();

        assert_eq!(
            fs::read_to_string(store.generated_path()).unwrap(),
            "new\n"
        );
    }

    #[test]
    fn test_save_source_leaves_no_temp_file() {
        let (dir, store) = temp_store();
        store.save_source("package main\n").unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![GENERATED_FILE.to_string()]);
    }

    #[test]
    fn test_default_store_paths() {
        let store = ArtifactStore::default();
        assert_eq!(
            store.selected_path(),
            PathBuf::from("output").join("selected_apis.json")
        );
        assert_eq!(
            store.generated_path(),
            PathBuf::from("output").join("generated_client.go")
        );
    }
}
