//! Output path derivation — extension swap mirroring the input tree.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::BatchError;

/// Derive the relative output path for one relative input path.
///
/// The final segment's extension (everything from the *last* `.`) is
/// replaced with `output_extension`; a segment with no `.` keeps its whole
/// name as the base. Directory segments pass through unchanged, so the
/// output tree mirrors the input tree exactly.
///
/// A name that is only an extension (`.json`) degenerates to `.<ext>` —
/// defined, not an error.
pub fn derive(relative_input: &Path, output_extension: &str) -> PathBuf {
    let file_name = relative_input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = match file_name.rfind('.') {
        Some(pos) => &file_name[..pos],
        None => file_name.as_str(),
    };

    let mut out = relative_input
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    out.push(format!("{base}.{output_extension}"));
    out
}

/// Validate that no two inputs derive the same output path.
///
/// Extension-differing siblings (`a.json` and `a.yaml`) would otherwise
/// silently overwrite each other mid-batch; this runs before any rendering
/// so a collision aborts with nothing written.
pub fn check_collisions(inputs: &[PathBuf], output_extension: &str) -> Result<(), BatchError> {
    let mut seen: HashMap<PathBuf, &PathBuf> = HashMap::with_capacity(inputs.len());
    for input in inputs {
        let output = derive(input, output_extension);
        if let Some(first) = seen.get(&output) {
            return Err(BatchError::OutputCollision {
                output,
                first: (*first).clone(),
                second: input.clone(),
            });
        }
        seen.insert(output, input);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derived(input: &str, ext: &str) -> String {
        derive(Path::new(input), ext)
            .to_string_lossy()
            .replace('\\', "/")
    }

    #[test]
    fn swaps_extension_keeping_directories() {
        assert_eq!(derived("a/b/model.json", "txt"), "a/b/model.txt");
    }

    #[test]
    fn no_extension_appends_one() {
        assert_eq!(derived("a/b/model", "txt"), "a/b/model.txt");
        assert_eq!(derived("README", "html"), "README.html");
    }

    #[test]
    fn only_last_extension_is_stripped() {
        assert_eq!(derived("archive.tar.gz", "txt"), "archive.tar.txt");
    }

    #[test]
    fn extension_only_name_degenerates_to_dot_ext() {
        assert_eq!(derived("a/b/.json", "txt"), "a/b/.txt");
    }

    #[test]
    fn top_level_file_has_no_directory_prefix() {
        assert_eq!(derived("model.json", "txt"), "model.txt");
    }

    #[test]
    fn collision_between_extension_siblings_is_detected() {
        let inputs = vec![
            PathBuf::from("x/a.json"),
            PathBuf::from("x/b.json"),
            PathBuf::from("x/a.yaml"),
        ];
        let err = check_collisions(&inputs, "txt").unwrap_err();
        let BatchError::OutputCollision {
            output,
            first,
            second,
        } = err
        else {
            panic!("expected OutputCollision");
        };
        assert_eq!(output, PathBuf::from("x/a.txt"));
        assert_eq!(first, PathBuf::from("x/a.json"));
        assert_eq!(second, PathBuf::from("x/a.yaml"));
    }

    #[test]
    fn distinct_outputs_pass_validation() {
        let inputs = vec![
            PathBuf::from("a.json"),
            PathBuf::from("sub/a.json"),
            PathBuf::from("b.json"),
        ];
        assert!(check_collisions(&inputs, "txt").is_ok());
    }
}
