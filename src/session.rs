use std::any::TypeId;
use std::collections::HashSet;

use crate::info::MemberDescriptor;
use crate::inspect::{Inspect, ValueRef};
use crate::rules::{MemberKey, RuleSet};
use crate::util::truncate_chars;
use crate::value::{MapValue, SequenceValue, StructValue};

// -----------------------------------------------------------------------------
// Session

/// Sentinel emitted when traversal re-enters a value on the active path.
pub(crate) const CYCLE_MARKER: &str = "<cyclic reference>";

const NULL_LITERAL: &str = "null";

/// One print run: a borrowed rule snapshot plus path-scoped visited state.
///
/// A session is created fresh for every top-level print call and discarded
/// afterwards, so a configuration reused across calls never sees residual
/// cycle state.
pub(crate) struct Session<'a> {
    rules: &'a RuleSet,
    visited: HashSet<(usize, TypeId)>,
}

impl<'a> Session<'a> {
    pub(crate) fn new(rules: &'a RuleSet) -> Self {
        Self {
            rules,
            visited: HashSet::new(),
        }
    }

    /// Renders `value` at the given nesting depth.
    ///
    /// Returns a single- or multi-line block with no trailing newline;
    /// nested lines are indented one tab per level.
    pub(crate) fn render(&mut self, value: &dyn Inspect, level: usize) -> String {
        match value.classify() {
            ValueRef::Absent => NULL_LITERAL.to_owned(),
            ValueRef::Atom(atom) => atom.literal(),
            ValueRef::Wrapped(inner) => self.render(inner, level),
            ValueRef::Cell(cell) => {
                let mut out = String::new();
                cell.with_inner(&mut |inner| out = self.render(inner, level));
                out
            }
            ValueRef::Map(map) => self.guarded(value, |session| session.render_map(map, level)),
            ValueRef::Sequence(sequence) => {
                self.guarded(value, |session| session.render_sequence(sequence, level))
            }
            ValueRef::Struct(object) => {
                self.guarded(value, |session| session.render_struct(object, level))
            }
        }
    }

    /// Runs `body` with `value` registered on the active path.
    ///
    /// Identity is the pointee address paired with the runtime type: a
    /// struct and its first member share an address but never a type, while
    /// a genuine cycle re-enters through a heap indirection with both parts
    /// equal. The identity is removed again on exit, so the same value on a
    /// sibling branch prints in full.
    fn guarded(
        &mut self,
        value: &dyn Inspect,
        body: impl FnOnce(&mut Self) -> String,
    ) -> String {
        let identity = (value as *const dyn Inspect as *const () as usize, value.ty_id());
        if !self.visited.insert(identity) {
            return CYCLE_MARKER.to_owned();
        }
        let out = body(self);
        self.visited.remove(&identity);
        out
    }

    fn render_map(&mut self, map: &dyn MapValue, level: usize) -> String {
        let mut out = String::new();
        out.push_str(&map.type_name());
        let indent = "\t".repeat(level + 1);
        for (key, value) in map.iter_entries() {
            let key_text = self.render(key, level + 1);
            let value_text = self.render(value, level + 1);
            out.push('\n');
            out.push_str(&indent);
            out.push('[');
            out.push_str(&key_text);
            out.push_str("] = ");
            out.push_str(&value_text);
        }
        out
    }

    fn render_sequence(&mut self, sequence: &dyn SequenceValue, level: usize) -> String {
        let mut out = String::new();
        out.push_str(&sequence.type_name());
        let indent = "\t".repeat(level + 1);
        for (index, element) in sequence.iter_elements().enumerate() {
            let element_text = self.render(element, level + 1);
            out.push('\n');
            out.push_str(&indent);
            out.push('[');
            out.push_str(&index.to_string());
            out.push_str("] = ");
            out.push_str(&element_text);
        }
        out
    }

    fn render_struct(&mut self, object: &dyn StructValue, level: usize) -> String {
        let mut out = String::new();
        out.push_str(&object.type_name());
        let owner = object.ty_id();
        let indent = "\t".repeat(level + 1);
        for (index, descriptor) in object.descriptors().iter().enumerate() {
            let Some(value) = object.member_at(index) else {
                continue;
            };
            if let Some(line) = self.render_member(owner, descriptor, value, level) {
                out.push('\n');
                out.push_str(&indent);
                out.push_str(&line);
            }
        }
        out
    }

    // -------------------------------------------------------------------------
    // Member rule resolution

    /// Renders one member line, or `None` if the member is excluded.
    ///
    /// Rule priority: member exclusion, declared-type exclusion, member
    /// formatter, runtime-type formatter, member locale, type locale,
    /// recursion. Member-level rules beat type-level rules; formatters beat
    /// locales; a registered truncation limit layers over whichever
    /// formatter applies, independent of registration order.
    fn render_member(
        &mut self,
        owner: TypeId,
        descriptor: &MemberDescriptor,
        value: &dyn Inspect,
        level: usize,
    ) -> Option<String> {
        let key: MemberKey = (owner, descriptor.name());
        if self.rules.excluded_members.contains(&key) {
            return None;
        }
        if self.rules.excluded_types.contains(&descriptor.ty_id()) {
            return None;
        }
        let rendered = self.render_member_value(key, value, level);
        Some(format!("{} = {rendered}", descriptor.name()))
    }

    fn render_member_value(&mut self, key: MemberKey, value: &dyn Inspect, level: usize) -> String {
        let trim = self.rules.member_trims.get(&key).copied();

        // Formatter and locale rules only fire for present values; absent
        // members fall through to recursion, which renders the null literal.
        if let Some(present) = peel(value) {
            if let Some(format) = self.rules.member_formatters.get(&key) {
                return apply_trim(format.as_ref()(value), trim);
            }
            if let Some(format) = self.rules.type_formatters.get(&present.ty_id()) {
                return apply_trim(format.as_ref()(present), trim);
            }
            if let Some(max_chars) = trim {
                if let ValueRef::Atom(atom) = present.classify() {
                    return truncate_chars(&atom.literal(), max_chars);
                }
            }
            if let Some(locale) = self.rules.member_locales.get(&key) {
                if let ValueRef::Atom(atom) = present.classify() {
                    if let Some(text) = atom.format_with(locale) {
                        return text;
                    }
                }
            }
            if let Some(locale) = self.rules.type_locales.get(&present.ty_id()) {
                if let ValueRef::Atom(atom) = present.classify() {
                    if let Some(text) = atom.format_with(locale) {
                        return text;
                    }
                }
            }
        }

        self.render(value, level + 1)
    }
}

// -----------------------------------------------------------------------------
// Helpers

/// Unwraps transparent wrappers down to the effective value.
///
/// Returns `None` for an absent optional. Interior-mutable cells are not
/// peeled; their runtime type is the cell's own.
fn peel(value: &dyn Inspect) -> Option<&dyn Inspect> {
    let mut current = value;
    loop {
        match current.classify() {
            ValueRef::Absent => return None,
            ValueRef::Wrapped(inner) => current = inner,
            _ => return Some(current),
        }
    }
}

fn apply_trim(text: String, limit: Option<usize>) -> String {
    match limit {
        Some(max_chars) => truncate_chars(&text, max_chars),
        None => text,
    }
}
