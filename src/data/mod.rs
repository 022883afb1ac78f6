pub mod cache;
pub mod datetime;
pub mod loader;

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::{Path, PathBuf};

    /// CSV file in the temp dir, removed on drop.
    pub struct TempCsv {
        path: PathBuf,
    }

    impl TempCsv {
        pub fn new(name: &str, content: &str) -> Self {
            let path = std::env::temp_dir()
                .join(format!("voltdash-{}-{}.csv", name, std::process::id()));
            std::fs::write(&path, content).unwrap();
            Self { path }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        pub fn rewrite(&self, content: &str) {
            std::fs::write(&self.path, content).unwrap();
        }
    }

    impl Drop for TempCsv {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}
