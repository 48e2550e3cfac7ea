//! Where the last run's solution lives between invocations.

use super::codec::{decode_solution, encode_solution};
use crate::error::{AnnealError, Result};
use crate::tsp::{Solution, SolutionFactory};
use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads and saves the single solution carried across runs.
pub trait SolutionStore {
    /// Returns the saved solution, or `None` if nothing has been saved.
    ///
    /// A saved tour that does not fit `factory` is an error, never `None`.
    fn load_prior(&self, factory: &SolutionFactory) -> Result<Option<Solution>>;

    /// Replaces the saved solution.
    fn save_prior(&self, solution: &Solution) -> Result<()>;
}

/// Stores the solution as JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SolutionStore for JsonFileStore {
    fn load_prior(&self, factory: &SolutionFactory) -> Result<Option<Solution>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no prior solution");
                return Ok(None);
            }
            Err(e) => return Err(AnnealError::io(&self.path, e)),
        };
        let solution = decode_solution(&bytes, factory)?;
        debug!(path = %self.path.display(), cost = solution.cost(), "loaded prior solution");
        Ok(Some(solution))
    }

    fn save_prior(&self, solution: &Solution) -> Result<()> {
        let bytes = encode_solution(solution)?;
        // Write beside the target and rename so a crash never leaves half a file.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes).map_err(|e| AnnealError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| AnnealError::io(&self.path, e))?;
        debug!(path = %self.path.display(), "saved solution");
        Ok(())
    }
}

/// In-process store holding the encoded blob.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: RefCell<Option<Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw blob last saved, if any.
    pub fn blob(&self) -> Option<Vec<u8>> {
        self.blob.borrow().clone()
    }
}

impl SolutionStore for MemoryStore {
    fn load_prior(&self, factory: &SolutionFactory) -> Result<Option<Solution>> {
        match self.blob.borrow().as_deref() {
            Some(bytes) => decode_solution(bytes, factory).map(Some),
            None => Ok(None),
        }
    }

    fn save_prior(&self, solution: &Solution) -> Result<()> {
        *self.blob.borrow_mut() = Some(encode_solution(solution)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::sa::Annealer;

    #[test]
    fn test_file_store_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("Solution.json"));
        let factory = SolutionFactory::new(10).unwrap();
        assert!(store.load_prior(&factory).unwrap().is_none());
    }

    #[test]
    fn test_file_store_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("Solution.json"));
        let factory = SolutionFactory::new(40).unwrap();
        let s = factory.random_solution(&mut create_rng(8));

        store.save_prior(&s).unwrap();
        assert!(store.path().exists());
        assert!(!store.path().with_extension("tmp").exists());

        let loaded = store.load_prior(&factory).unwrap().unwrap();
        assert_eq!(loaded.tour(), s.tour());
    }

    #[test]
    fn test_file_store_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("Solution.json"));
        let factory = SolutionFactory::new(12).unwrap();
        let mut rng = create_rng(3);
        let first = factory.random_solution(&mut rng);
        let second = factory.solution_from_tour((0..12).collect()).unwrap();

        store.save_prior(&first).unwrap();
        store.save_prior(&second).unwrap();
        let loaded = store.load_prior(&factory).unwrap().unwrap();
        assert_eq!(loaded.tour(), second.tour());
    }

    #[test]
    fn test_file_store_rejects_other_city_count() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("Solution.json"));
        let saved = SolutionFactory::new(999).unwrap();
        store
            .save_prior(&saved.random_solution(&mut create_rng(1)))
            .unwrap();

        let current = SolutionFactory::new(1000).unwrap();
        assert!(store.load_prior(&current).unwrap_err().is_mismatch());
    }

    #[test]
    fn test_file_store_unreadable_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be read as a file.
        let store = JsonFileStore::new(dir.path());
        let factory = SolutionFactory::new(5).unwrap();
        assert!(matches!(
            store.load_prior(&factory),
            Err(AnnealError::Io { .. })
        ));
    }

    #[test]
    fn test_resume_across_runs() {
        let store = MemoryStore::new();
        let factory = SolutionFactory::new(25).unwrap();

        let prior = store.load_prior(&factory).unwrap();
        assert!(prior.is_none());
        let mut first = Annealer::new(factory.clone(), prior.as_ref(), create_rng(1)).unwrap();
        first.run(0.1, 200).unwrap();
        store.save_prior(first.solution()).unwrap();

        let prior = store.load_prior(&factory).unwrap().unwrap();
        assert_eq!(prior.tour(), first.solution().tour());

        let second = Annealer::new(factory, Some(&prior), create_rng(2)).unwrap();
        let changed = prior
            .tour()
            .iter()
            .zip(second.solution().tour())
            .filter(|(a, b)| a != b)
            .count();
        assert!(changed <= 2);
    }
}
