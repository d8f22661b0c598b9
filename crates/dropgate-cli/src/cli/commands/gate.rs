//! `dropgate gate <filename> <size>` – admission check without filesystem access.

use anyhow::{bail, Result};
use dropgate_core::{AdmissionGate, BuiltinRegistry};

pub fn run_gate(gate: &AdmissionGate<'_, BuiltinRegistry>, filename: &str, size: u64) -> Result<()> {
    let limit = gate.limit_for(filename);
    match gate.should_reject_file(filename, size) {
        Ok(()) => {
            println!(
                "ok  {filename} ({size} bytes, limit {} MB)",
                gate.limits().to_megabytes(limit)
            );
            Ok(())
        }
        Err(rejection) => bail!("{filename} {rejection}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_and_rejected() {
        let reg = BuiltinRegistry::new();
        let gate = AdmissionGate::new(&reg);
        assert!(run_gate(&gate, "index.html", 1024).is_ok());

        let err = run_gate(&gate, "data.xyz", 10).unwrap_err();
        assert!(err.to_string().starts_with("data.xyz "));
    }
}
