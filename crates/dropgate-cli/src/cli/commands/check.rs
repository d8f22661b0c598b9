//! `dropgate check <paths...>` – run the admission gate on files on disk.

use anyhow::{bail, Context, Result};
use dropgate_core::{AdmissionGate, BuiltinRegistry};
use std::fs;
use std::path::PathBuf;

/// Checks each file and prints one line per file. Fails if any is rejected.
pub fn run_check(gate: &AdmissionGate<'_, BuiltinRegistry>, paths: &[PathBuf]) -> Result<()> {
    let mut rejected = 0usize;
    for path in paths {
        let meta = fs::metadata(path).with_context(|| format!("stat {}", path.display()))?;
        if !meta.is_file() {
            bail!("{} is not a regular file", path.display());
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match gate.should_reject_file(&name, meta.len()) {
            Ok(()) => println!("ok        {}", path.display()),
            Err(rejection) => {
                rejected += 1;
                println!("rejected  {}: {} {}", path.display(), name, rejection);
            }
        }
    }

    if rejected > 0 {
        bail!("{rejected} of {} file(s) rejected", paths.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dropgate_core::SizeLimits;

    #[test]
    fn accepts_small_text_files() {
        let dir = tempfile::tempdir().unwrap();
        let css = dir.path().join("style.css");
        let md = dir.path().join("README.md");
        fs::write(&css, "body { margin: 0 }").unwrap();
        fs::write(&md, "# hi").unwrap();

        let reg = BuiltinRegistry::new();
        let gate = AdmissionGate::new(&reg);
        run_check(&gate, &[css, md]).unwrap();
    }

    #[test]
    fn rejects_unknown_type() {
        let dir = tempfile::tempdir().unwrap();
        let ok = dir.path().join("index.html");
        let bad = dir.path().join("payload.exe");
        fs::write(&ok, "<p>hi</p>").unwrap();
        fs::write(&bad, [0u8; 16]).unwrap();

        let reg = BuiltinRegistry::new();
        let gate = AdmissionGate::new(&reg);
        let err = run_check(&gate, &[ok, bad]).unwrap_err();
        assert!(err.to_string().contains("1 of 2"));
    }

    #[test]
    fn rejects_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let big = dir.path().join("notes.txt");
        fs::write(&big, vec![b'a'; 64]).unwrap();

        let reg = BuiltinRegistry::new();
        let limits = SizeLimits {
            regular_file: 32,
            ..SizeLimits::default()
        };
        let gate = AdmissionGate::new(&reg).with_limits(limits);
        assert!(run_check(&gate, &[big]).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let reg = BuiltinRegistry::new();
        let gate = AdmissionGate::new(&reg);
        let err = run_check(&gate, &[dir.path().join("absent.png")]).unwrap_err();
        assert!(format!("{err:#}").contains("absent.png"));
    }

    #[test]
    fn directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let reg = BuiltinRegistry::new();
        let gate = AdmissionGate::new(&reg);
        assert!(run_check(&gate, &[dir.path().to_path_buf()]).is_err());
    }
}
