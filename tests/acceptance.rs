#![cfg(all(feature = "uuid", feature = "chrono"))]

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;
use std::time::Duration;

use chrono::NaiveDate;
use insta::assert_snapshot;
use objprint::{Inspect, Locale, PrintToString, Printer, SelectorError};
use uuid::Uuid;

// -----------------------------------------------------------------------------
// Test data

#[derive(Inspect)]
struct Person {
    id: Uuid,
    name: String,
    surname: String,
    height: f64,
    age: i32,
}

fn person() -> Person {
    Person {
        id: Uuid::nil(),
        name: "John".to_string(),
        surname: "Wick".to_string(),
        height: 80.05,
        age: 50,
    }
}

#[derive(Inspect)]
struct Node {
    id: i32,
    child: Option<Rc<RefCell<Node>>>,
}

fn node(id: i32) -> Rc<RefCell<Node>> {
    Rc::new(RefCell::new(Node { id, child: None }))
}

#[derive(Inspect)]
struct Tree {
    root: Node,
    size: i32,
}

#[derive(Inspect)]
struct Profile {
    nickname: Option<String>,
    rating: Option<i32>,
}

#[derive(Inspect)]
enum Status {
    Active,
    Disabled,
}

#[derive(Inspect)]
struct Toggle {
    status: Status,
}

#[derive(Inspect)]
struct Stint {
    started: NaiveDate,
    elapsed: Duration,
}

// -----------------------------------------------------------------------------
// Default rendering

#[test]
fn prints_person_with_default_configuration() {
    assert_snapshot!(person().print_to_string(), @r"
Person
	id = 00000000-0000-0000-0000-000000000000
	name = John
	surname = Wick
	height = 80.05
	age = 50
");
}

#[test]
fn prints_atoms_and_absent_roots_directly() {
    assert_snapshot!(42.print_to_string(), @"42");
    assert_snapshot!("hello".to_string().print_to_string(), @"hello");
    assert_snapshot!(Option::<Person>::None.print_to_string(), @"null");
}

#[test]
fn prints_enum_members_as_variant_names() {
    let toggle = Toggle {
        status: Status::Active,
    };

    assert_snapshot!(toggle.print_to_string(), @r"
Toggle
	status = Active
");
    assert_eq!(Status::Disabled.print_to_string(), "Disabled");
}

#[test]
fn prints_date_and_duration_members() {
    let stint = Stint {
        started: NaiveDate::from_ymd_opt(2024, 5, 17).expect("valid date"),
        elapsed: Duration::from_secs(90),
    };

    assert_snapshot!(stint.print_to_string(), @r"
Stint
	started = 2024-05-17
	elapsed = 90s
");
}

#[test]
fn prints_null_for_absent_members() {
    let profile = Profile {
        nickname: None,
        rating: None,
    };

    assert_snapshot!(profile.print_to_string(), @r"
Profile
	nickname = null
	rating = null
");
}

#[test]
fn unwraps_present_optionals() {
    let profile = Profile {
        nickname: Some("ada".to_string()),
        rating: Some(7),
    };

    assert_snapshot!(profile.print_to_string(), @r"
Profile
	nickname = ada
	rating = 7
");
}

#[test]
fn prints_nested_structs_with_deeper_indentation() {
    let tree = Tree {
        root: Node {
            id: 1,
            child: None,
        },
        size: 15,
    };

    assert_snapshot!(tree.print_to_string(), @r"
Tree
	root = Node
		id = 1
		child = null
	size = 15
");
}

// -----------------------------------------------------------------------------
// Collections

#[test]
fn prints_arrays_with_indices() {
    assert_snapshot!([1, 2, 3].print_to_string(), @r"
[i32; 3]
	[0] = 1
	[1] = 2
	[2] = 3
");
}

#[test]
fn prints_lists_with_indices() {
    assert_snapshot!(vec![3, 4, 5].print_to_string(), @r"
Vec<i32>
	[0] = 3
	[1] = 4
	[2] = 5
");
}

#[test]
fn prints_empty_list_as_bare_header() {
    assert_snapshot!(Vec::<i32>::new().print_to_string(), @"Vec<i32>");
}

#[test]
fn prints_ordered_sets_like_sequences() {
    assert_snapshot!(BTreeSet::from([3, 1, 2]).print_to_string(), @r"
BTreeSet<i32>
	[0] = 1
	[1] = 2
	[2] = 3
");
}

#[test]
fn prints_maps_with_rendered_keys() {
    let map = BTreeMap::from([(1, 1), (2, 2), (3, 3)]);

    assert_snapshot!(map.print_to_string(), @r"
BTreeMap<i32, i32>
	[1] = 1
	[2] = 2
	[3] = 3
");
}

#[test]
fn prints_empty_map_as_bare_header() {
    assert_snapshot!(BTreeMap::<i32, i32>::new().print_to_string(), @"BTreeMap<i32, i32>");
}

#[test]
fn prints_hash_maps() {
    let mut scores = HashMap::new();
    scores.insert("total".to_string(), 3);

    assert_snapshot!(scores.print_to_string(), @r"
HashMap<String, i32>
	[total] = 3
");
}

#[test]
fn prints_struct_elements_inside_collections() {
    let people = vec![person()];

    assert_snapshot!(
        people.print_with(|config| config.exclude_type::<Uuid>().exclude_type::<f64>()),
        @r"
Vec<Person>
	[0] = Person
		name = John
		surname = Wick
		age = 50
");
}

// -----------------------------------------------------------------------------
// Exclusion rules

#[test]
fn excludes_a_member() -> Result<(), SelectorError> {
    let printer = Printer::<Person>::new().exclude_member("age")?;

    assert_snapshot!(printer.print(&person()), @r"
Person
	id = 00000000-0000-0000-0000-000000000000
	name = John
	surname = Wick
	height = 80.05
");
    Ok(())
}

#[test]
fn excludes_members_by_declared_type() {
    let printer = Printer::<Person>::new().exclude_type::<String>();

    assert_snapshot!(printer.print(&person()), @r"
Person
	id = 00000000-0000-0000-0000-000000000000
	height = 80.05
	age = 50
");
}

#[test]
fn excludes_declared_types_at_any_depth() {
    let tree = Tree {
        root: Node {
            id: 1,
            child: None,
        },
        size: 15,
    };

    assert_snapshot!(
        tree.print_with(|config| config.exclude_type::<i32>()),
        @r"
Tree
	root = Node
		child = null
");
}

#[test]
fn excluding_an_unused_type_is_a_noop() {
    let subject = person();
    let excluded = Printer::<Person>::new()
        .exclude_type::<Node>()
        .print(&subject);

    assert_eq!(excluded, subject.print_to_string());
}

// -----------------------------------------------------------------------------
// Custom formatters

#[test]
fn applies_a_type_formatter_to_every_value_of_that_type() {
    let printer = Printer::<Person>::new()
        .for_type::<String>()
        .format(|s| s.to_uppercase());

    assert_snapshot!(printer.print(&person()), @r"
Person
	id = 00000000-0000-0000-0000-000000000000
	name = JOHN
	surname = WICK
	height = 80.05
	age = 50
");
}

#[test]
fn applies_a_member_formatter() -> Result<(), SelectorError> {
    let printer = Printer::<Person>::new()
        .member::<i32>("age")?
        .format(|age| format!("{age} years"));

    assert_snapshot!(printer.print(&person()), @r"
Person
	id = 00000000-0000-0000-0000-000000000000
	name = John
	surname = Wick
	height = 80.05
	age = 50 years
");
    Ok(())
}

#[test]
fn member_formatter_beats_type_formatter_regardless_of_order() -> Result<(), SelectorError> {
    let member_first = Printer::<Person>::new()
        .text_member("name")?
        .format(|s| s.to_lowercase())
        .for_type::<String>()
        .format(|s| s.to_uppercase());
    let type_first = Printer::<Person>::new()
        .for_type::<String>()
        .format(|s| s.to_uppercase())
        .text_member("name")?
        .format(|s| s.to_lowercase());

    let subject = person();
    assert_eq!(member_first.print(&subject), type_first.print(&subject));
    assert_snapshot!(member_first.print(&subject), @r"
Person
	id = 00000000-0000-0000-0000-000000000000
	name = john
	surname = WICK
	height = 80.05
	age = 50
");
    Ok(())
}

#[test]
fn last_registration_wins_for_one_member() -> Result<(), SelectorError> {
    let printer = Printer::<Person>::new()
        .member::<i32>("age")?
        .format(|age| format!("{age} years"))
        .member::<i32>("age")?
        .format(|age| format!("age: {age}"));

    let rendered = printer.print(&person());
    assert!(rendered.contains("age = age: 50"));
    assert!(!rendered.contains("years"));
    Ok(())
}

#[test]
fn member_formatters_apply_to_nested_types() -> Result<(), SelectorError> {
    let tree = Tree {
        root: Node {
            id: 1,
            child: None,
        },
        size: 15,
    };
    let printer = Printer::<Tree>::new()
        .member_of::<Node, i32>("id")?
        .format(|id| format!("#{id}"));

    assert_snapshot!(printer.print(&tree), @r"
Tree
	root = Node
		id = #1
		child = null
	size = 15
");
    Ok(())
}

#[test]
fn formatters_skip_absent_members() -> Result<(), SelectorError> {
    let printer = Printer::<Profile>::new()
        .member::<Option<String>>("nickname")?
        .format(|nickname| match nickname {
            Some(n) => format!("@{n}"),
            None => "anonymous".to_string(),
        });

    let present = Profile {
        nickname: Some("ada".to_string()),
        rating: None,
    };
    let absent = Profile {
        nickname: None,
        rating: None,
    };

    assert!(printer.print(&present).contains("nickname = @ada"));
    // An absent member bypasses its formatter and renders the null literal.
    assert!(printer.print(&absent).contains("nickname = null"));
    Ok(())
}

// -----------------------------------------------------------------------------
// Locales

#[test]
fn applies_a_type_locale() {
    let printer = Printer::<Person>::new()
        .for_type::<f64>()
        .with_locale(Locale::DE_DE);

    assert!(printer.print(&person()).contains("height = 80,05"));
}

#[test]
fn member_locale_beats_type_locale_regardless_of_order() -> Result<(), SelectorError> {
    let member_first = Printer::<Person>::new()
        .member::<f64>("height")?
        .with_locale(Locale::INVARIANT)
        .for_type::<f64>()
        .with_locale(Locale::DE_DE);
    let type_first = Printer::<Person>::new()
        .for_type::<f64>()
        .with_locale(Locale::DE_DE)
        .member::<f64>("height")?
        .with_locale(Locale::INVARIANT);

    let subject = person();
    assert_eq!(member_first.print(&subject), type_first.print(&subject));
    assert!(member_first.print(&subject).contains("height = 80.05"));
    Ok(())
}

#[test]
fn formatter_beats_locale_for_the_same_member() -> Result<(), SelectorError> {
    let printer = Printer::<Person>::new()
        .member::<f64>("height")?
        .with_locale(Locale::DE_DE)
        .member::<f64>("height")?
        .format(|height| format!("{height:.0}cm"));

    assert!(printer.print(&person()).contains("height = 80cm"));
    Ok(())
}

// -----------------------------------------------------------------------------
// Truncation

#[test]
fn trims_a_text_member() -> Result<(), SelectorError> {
    let printer = Printer::<Person>::new().text_member("name")?.trim(2);

    assert!(printer.print(&person()).contains("name = Jo"));
    Ok(())
}

#[test]
fn trim_beyond_the_string_length_is_a_noop() -> Result<(), SelectorError> {
    let printer = Printer::<Person>::new().text_member("name")?.trim(10);

    assert!(printer.print(&person()).contains("name = John"));
    Ok(())
}

#[test]
fn trim_layers_over_a_type_formatter_regardless_of_order() -> Result<(), SelectorError> {
    let trim_first = Printer::<Person>::new()
        .text_member("name")?
        .trim(2)
        .for_type::<String>()
        .format(|s| s.to_uppercase());
    let format_first = Printer::<Person>::new()
        .for_type::<String>()
        .format(|s| s.to_uppercase())
        .text_member("name")?
        .trim(2);

    let subject = person();
    assert_eq!(trim_first.print(&subject), format_first.print(&subject));
    assert_snapshot!(trim_first.print(&subject), @r"
Person
	id = 00000000-0000-0000-0000-000000000000
	name = JO
	surname = WICK
	height = 80.05
	age = 50
");
    Ok(())
}

#[test]
fn trim_wraps_a_member_formatter() -> Result<(), SelectorError> {
    let printer = Printer::<Person>::new()
        .text_member("name")?
        .format(|s| s.to_uppercase())
        .text_member("name")?
        .trim(2);

    assert!(printer.print(&person()).contains("name = JO"));
    Ok(())
}

// -----------------------------------------------------------------------------
// Cyclic references

#[test]
fn renders_a_direct_cycle_as_a_marker() {
    let root = node(1);
    root.borrow_mut().child = Some(Rc::clone(&root));

    assert_snapshot!(Printer::<Node>::new().print(&root.borrow()), @r"
Node
	id = 1
	child = <cyclic reference>
");

    root.borrow_mut().child = None;
}

#[test]
fn renders_a_deep_cycle_at_the_point_it_closes() {
    let root = node(1);
    let second = node(2);
    let third = node(3);
    let fourth = node(4);
    root.borrow_mut().child = Some(Rc::clone(&second));
    second.borrow_mut().child = Some(Rc::clone(&third));
    third.borrow_mut().child = Some(Rc::clone(&fourth));
    fourth.borrow_mut().child = Some(Rc::clone(&root));

    assert_snapshot!(Printer::<Node>::new().print(&root.borrow()), @r"
Node
	id = 1
	child = Node
		id = 2
		child = Node
			id = 3
			child = Node
				id = 4
				child = <cyclic reference>
");

    fourth.borrow_mut().child = None;
}

#[test]
fn cycle_tracking_is_scoped_to_the_active_path() {
    let first = node(1);
    let second = node(2);
    first.borrow_mut().child = Some(Rc::clone(&second));
    second.borrow_mut().child = Some(Rc::clone(&first));
    let list = vec![Rc::clone(&first), Rc::clone(&second)];

    // Each top-level element renders in full; the cycle marker appears only
    // where traversal re-enters a value already on its own branch.
    assert_snapshot!(list.print_to_string(), @r"
Vec<Rc<RefCell<Node>>>
	[0] = Node
		id = 1
		child = Node
			id = 2
			child = <cyclic reference>
	[1] = Node
		id = 2
		child = Node
			id = 1
			child = <cyclic reference>
");

    first.borrow_mut().child = None;
}

#[test]
fn a_reused_printer_starts_every_call_with_fresh_state() {
    let root = node(1);
    root.borrow_mut().child = Some(Rc::clone(&root));

    let printer = Printer::<Node>::new();
    let first = printer.print(&root.borrow());
    let second = printer.print(&root.borrow());

    assert_eq!(first, second);

    root.borrow_mut().child = None;
}

// -----------------------------------------------------------------------------
// Selector errors

#[test]
fn unknown_members_fail_at_configuration_time() {
    let error = Printer::<Person>::new()
        .exclude_member("alias")
        .err()
        .expect("selector must be rejected");

    assert_eq!(
        error.to_string(),
        format!(
            "type `{}` has no member named `alias`",
            std::any::type_name::<Person>()
        )
    );
}

#[test]
fn mistyped_selectors_fail_at_configuration_time() {
    let error = Printer::<Person>::new()
        .member::<String>("height")
        .err()
        .expect("selector must be rejected");

    assert!(matches!(
        error,
        SelectorError::MemberTypeMismatch {
            member: "height",
            ..
        }
    ));

    let error = Printer::<Person>::new()
        .text_member("age")
        .err()
        .expect("selector must be rejected");

    assert!(matches!(error, SelectorError::NotText { member: "age", .. }));
}

// -----------------------------------------------------------------------------
// Extension sugar

#[test]
fn configures_ad_hoc_through_print_with() {
    assert_snapshot!(
        person().print_with(|config| config.exclude_type::<f64>().exclude_type::<Uuid>()),
        @r"
Person
	name = John
	surname = Wick
	age = 50
");
}

#[test]
fn configures_fallibly_through_try_print_with() -> Result<(), SelectorError> {
    let rendered = person().try_print_with(|config| {
        config
            .text_member("name")?
            .trim(2)
            .exclude_member("surname")
    })?;

    assert_snapshot!(rendered, @r"
Person
	id = 00000000-0000-0000-0000-000000000000
	name = Jo
	height = 80.05
	age = 50
");
    Ok(())
}
