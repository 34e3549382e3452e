//! External Typst invocation.
//!
//! The pipeline's contract ends at the generated markup; everything in
//! this module treats the typesetter as an external collaborator and
//! surfaces its failures verbatim.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{io_err, BuildError};

#[cfg(windows)]
const TYPST_BIN: &str = "typst.exe";
#[cfg(not(windows))]
const TYPST_BIN: &str = "typst";

/// Locate the `typst` binary by walking PATH.
pub fn find_typst() -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(TYPST_BIN))
        .find(|candidate| candidate.is_file())
}

/// Run `typst compile <input> <output> --root <root>`.
pub fn compile_pdf(
    typst: &Path,
    input: &Path,
    output: &Path,
    root: &Path,
) -> Result<(), BuildError> {
    let result = Command::new(typst)
        .arg("compile")
        .arg(input)
        .arg(output)
        .arg("--root")
        .arg(root)
        .output()
        .map_err(|e| io_err(typst, e))?;

    if !result.status.success() {
        let status = match result.status.code() {
            Some(code) => format!("exit code {code}"),
            None => "terminated by signal".to_owned(),
        };
        return Err(BuildError::Typst {
            status,
            stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn fake_typst(dir: &Path, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join("typst");
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    #[cfg(unix)]
    fn failing_compiler_surfaces_stderr_and_status() {
        let tmp = tempfile::TempDir::new().unwrap();
        let typst = fake_typst(tmp.path(), "#!/bin/sh\necho 'bad markup' >&2\nexit 1\n");

        let err = compile_pdf(
            &typst,
            Path::new("in.typ"),
            Path::new("out.pdf"),
            tmp.path(),
        )
        .unwrap_err();

        match err {
            BuildError::Typst { status, stderr } => {
                assert_eq!(status, "exit code 1");
                assert!(stderr.contains("bad markup"));
            }
            other => panic!("expected Typst error, got {other:?}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn successful_compiler_returns_ok() {
        let tmp = tempfile::TempDir::new().unwrap();
        let typst = fake_typst(tmp.path(), "#!/bin/sh\nexit 0\n");

        compile_pdf(
            &typst,
            Path::new("in.typ"),
            Path::new("out.pdf"),
            tmp.path(),
        )
        .expect("compile should succeed");
    }

    #[test]
    fn missing_binary_is_io_error() {
        let err = compile_pdf(
            Path::new("/nonexistent/typst-binary"),
            Path::new("in.typ"),
            Path::new("out.pdf"),
            Path::new("."),
        )
        .unwrap_err();
        assert!(matches!(err, BuildError::Io { .. }));
    }
}
