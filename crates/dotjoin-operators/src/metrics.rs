//! Tracing hooks.
//!
//! This module purposefully avoids pulling a subscriber; wire one up in the
//! binary that embeds the library.

#[cfg(feature = "tracing")]
pub fn emit_event(event: &str, key_values: &[(&str, String)]) {
    let span = tracing::trace_span!("dotjoin", event);
    let _entered = span.enter();
    for (k, v) in key_values {
        tracing::trace!(%event, %k, %v, "metric");
    }
}

#[cfg(not(feature = "tracing"))]
pub fn emit_event(_event: &str, _key_values: &[(&str, String)]) { /* no-op */
}
