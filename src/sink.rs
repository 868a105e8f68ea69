//! The caller-supplied sink for non-fatal parse diagnostics.

/// Receives diagnostics produced while parsing a tag that never affect
/// the returned `Result` — unknown frame identifiers, and (under
/// `ParseOptions { lenient: true }`) frames dropped after a recoverable
/// frame-level error.
pub trait DiagnosticSink {
    /// Called when a frame identifier is not present in the version's
    /// dispatch table. The frame's header bytes and body were still
    /// consumed so iteration could continue; the frame itself does not
    /// appear in the resulting `Tag`.
    fn unknown_frame(&mut self, label: &str);

    /// Called under lenient parsing when a frame failed to decode and
    /// was dropped instead of aborting the whole parse.
    fn frame_dropped(&mut self, label: &str, error: &crate::Error) {
        let _ = (label, error);
    }
}

/// The default sink: discards every diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardSink;

impl DiagnosticSink for DiscardSink {
    fn unknown_frame(&mut self, _label: &str) {}
}
