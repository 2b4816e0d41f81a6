use crate::locale::Locale;

// -----------------------------------------------------------------------------
// AtomValue

/// A "final" value: rendered as its own literal text, never recursed into.
///
/// Atoms are the leaves of a printed tree. They carry no members, no cycle
/// tracking, and no header line; the engine consults member and type rules
/// *before* reaching this leaf case, so an implementation only supplies the
/// default renderings.
pub trait AtomValue {
    /// The default textual rendering.
    fn literal(&self) -> String;

    /// Locale-aware rendering, for values that support it.
    ///
    /// Numeric atoms return `Some`; everything else keeps the default of
    /// `None`, which makes locale rules fall through to the next rule in
    /// the resolution order.
    #[inline]
    fn format_with(&self, locale: &Locale) -> Option<String> {
        let _ = locale;
        None
    }
}
