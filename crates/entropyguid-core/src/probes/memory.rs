//! MemoryIdentityProbe — address of a freshly allocated, then freed, heap object.
//!
//! Address-space layout differs between process runs, so the address text is a
//! cheap per-process differentiator.

use std::alloc::{Layout, alloc, dealloc};

use crate::error::{GuidError, Result};
use crate::probe::{EntropyProbe, EntropySample, ProbeInfo, ProbeKind};

/// Allocates one byte, records its address with `{:p}`, and frees it.
///
/// An allocator returning null is reported as [`GuidError::AllocationFailure`].
pub struct MemoryIdentityProbe;

static MEMORY_INFO: ProbeInfo = ProbeInfo {
    name: "memory_identity",
    kind: ProbeKind::MemoryIdentity,
    description: "Address of a short-lived one-byte heap allocation",
    rationale: "Heap placement varies across runs with address-space layout \
                and allocator state.",
    soft: false,
};

impl EntropyProbe for MemoryIdentityProbe {
    fn info(&self) -> &ProbeInfo {
        &MEMORY_INFO
    }

    fn sample(&self) -> Result<EntropySample> {
        let layout = Layout::new::<u8>();
        // SAFETY: `layout` has non-zero size.
        let ptr = unsafe { alloc(layout) };
        if ptr.is_null() {
            return Err(GuidError::AllocationFailure {
                size: layout.size(),
            });
        }
        let text = format!("{ptr:p}");
        // SAFETY: `ptr` came from `alloc` with this exact layout and is freed once.
        unsafe { dealloc(ptr, layout) };
        Ok(EntropySample::new(ProbeKind::MemoryIdentity, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sample_is_hex_address() {
        let s = MemoryIdentityProbe.sample().unwrap();
        assert!(s.text().starts_with("0x"), "got {}", s.text());
        assert!(s.text()[2..].bytes().all(|b| b.is_ascii_hexdigit()));
    }
}
