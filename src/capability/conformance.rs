//! Capability conformance checks.
//!
//! The traits guarantee the method set at compile time. These checks probe the
//! behavior a registered implementation promises, right after it has been
//! instantiated and before the pipeline uses it.

use std::collections::HashSet;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::error_handling::CapabilityError;
use crate::fetch::Requester;
use crate::parse::Extractor;

const PROBE_HTML: &[u8] = b"<html><head><title>probe</title></head><body></body></html>";
const PROBE_JS: &[u8] = b"var probe = 1;";
const PROBE_PATHS: &[&str] = &["/b", "/a", "/a ", "", "/c"];

/// Runs the requester's own `self_check` hook.
pub fn check_requester(name: &str, requester: &dyn Requester) -> Result<(), CapabilityError> {
    guarded(name, "requester", || requester.self_check())?
}

/// Probes an extractor with fixed inputs.
///
/// Every operation must return without panicking on a script-free document
/// and a literal-free script, and `clean` must return a strictly ascending
/// sequence with no empty entries.
pub fn check_extractor(name: &str, extractor: &dyn Extractor) -> Result<(), CapabilityError> {
    guarded(name, "extractor", || extractor.self_check())??;

    guarded(name, "extractor", || {
        extractor.extract_scripts(PROBE_HTML);
        extractor.extract_inline_scripts(PROBE_HTML);
        extractor.extract_urls_from_js(PROBE_JS);
    })?;

    let probe: HashSet<String> = PROBE_PATHS.iter().map(|s| s.to_string()).collect();
    let cleaned = guarded(name, "extractor", || extractor.clean(&probe))?;

    if cleaned.iter().any(|path| path.is_empty()) {
        return Err(nonconforming(name, "clean() kept an empty entry"));
    }
    if !cleaned.windows(2).all(|pair| pair[0] < pair[1]) {
        return Err(nonconforming(
            name,
            "clean() output is not sorted ascending without duplicates",
        ));
    }

    Ok(())
}

fn guarded<T>(
    name: &str,
    capability: &'static str,
    probe: impl FnOnce() -> T,
) -> Result<T, CapabilityError> {
    catch_unwind(AssertUnwindSafe(probe)).map_err(|_| CapabilityError::Conformance {
        name: name.to_string(),
        capability,
        reason: "panicked while probed".to_string(),
    })
}

fn nonconforming(name: &str, reason: &str) -> CapabilityError {
    CapabilityError::Conformance {
        name: name.to_string(),
        capability: "extractor",
        reason: reason.to_string(),
    }
}
