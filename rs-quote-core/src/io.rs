use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Reads a whole text file into a `String`.
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub(crate) fn normalize_folder(input: &Path) -> PathBuf {
	if input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Lists all files with a given extension in a directory.
///
/// Returns full paths, sorted so that merge order is stable.
pub(crate) fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			files.push(path);
		}
	}

	files.sort();
	Ok(files)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn list_files_filters_on_extension() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("b.json"), "{}").unwrap();
		fs::write(dir.path().join("a.json"), "{}").unwrap();
		fs::write(dir.path().join("notes.txt"), "").unwrap();
		fs::create_dir(dir.path().join("nested.json")).unwrap();

		let files = list_files(dir.path(), "json").unwrap();
		let names: Vec<_> = files
			.iter()
			.map(|p| p.file_name().unwrap().to_string_lossy().to_string())
			.collect();
		assert_eq!(names, vec!["a.json", "b.json"]);
	}

	#[test]
	fn normalize_folder_resolves_current_dir() {
		let cwd = env::current_dir().unwrap();
		assert_eq!(normalize_folder(Path::new(".")), cwd);
		assert_eq!(normalize_folder(Path::new("data")), PathBuf::from("data"));
	}

	#[test]
	fn read_file_returns_contents() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("quotes.json");
		fs::write(&path, "{\"life\": []}").unwrap();
		assert_eq!(read_file(&path).unwrap(), "{\"life\": []}");
	}
}
