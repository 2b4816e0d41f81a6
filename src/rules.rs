use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::inspect::Inspect;
use crate::locale::Locale;

// -----------------------------------------------------------------------------
// RuleSet

/// Identity of a member rule target: declaring type plus member name.
pub(crate) type MemberKey = (TypeId, &'static str);

/// A registered custom formatter, type-erased over the inspection trait.
///
/// `Send + Sync` so a finished configuration can be shared read-only across
/// threads; each print call still gets its own traversal state.
pub(crate) type FormatFn = Arc<dyn Fn(&dyn Inspect) -> String + Send + Sync>;

/// The configuration snapshot consulted at every member during traversal.
///
/// All lookups are keyed by stable identities — a `TypeId`, or a declaring
/// type plus member name — never by runtime object identity. The builder
/// mutates this structure; the render engine only reads it.
#[derive(Clone, Default)]
pub(crate) struct RuleSet {
    pub(crate) excluded_types: HashSet<TypeId>,
    pub(crate) excluded_members: HashSet<MemberKey>,
    pub(crate) member_formatters: HashMap<MemberKey, FormatFn>,
    pub(crate) type_formatters: HashMap<TypeId, FormatFn>,
    pub(crate) member_trims: HashMap<MemberKey, usize>,
    pub(crate) member_locales: HashMap<MemberKey, Locale>,
    pub(crate) type_locales: HashMap<TypeId, Locale>,
}
