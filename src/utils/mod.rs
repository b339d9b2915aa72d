mod atomic;

pub use atomic::atomic_write;

use std::path::{Path, PathBuf};

/// The name of the per-user grocery folder
pub const GROCERY_FOLDER: &str = ".grocery";

/// The name of the data file inside the grocery folder
pub const DATA_FILE: &str = "grocery-lists.json";

/// Get the per-user grocery folder (`~/.grocery`), falling back to the
/// current directory when no home directory is known.
#[must_use]
pub fn get_grocery_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(GROCERY_FOLDER)
}

/// Get the path of the data file inside a grocery folder
#[must_use]
pub fn get_data_file_path(grocery_home: &Path) -> PathBuf {
    grocery_home.join(DATA_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_data_file_path() {
        let home = Path::new("/home/user/.grocery");
        assert_eq!(
            get_data_file_path(home),
            Path::new("/home/user/.grocery/grocery-lists.json")
        );
    }

    #[test]
    fn test_grocery_home_ends_with_folder() {
        assert!(get_grocery_home().ends_with(GROCERY_FOLDER));
    }

    #[test]
    fn test_data_file_inside_grocery_home() {
        let home = get_grocery_home();
        assert!(get_data_file_path(&home).starts_with(&home));
    }
}
