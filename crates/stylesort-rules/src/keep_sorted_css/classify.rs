//! Property-name classification
//!
//! Pure string transforms that drive the sort comparator: extracting a
//! sortable name from a member, stripping vendor prefixes down to a
//! canonical name, ranking the prefixes themselves, and resolving a name
//! against an order table in either kebab-case or camelCase.

use stylesort_core::tree::{Member, MemberKind};

/// Vendor prefixes in rank order: webkit < moz < ms < o. A name carrying
/// none of them ranks after all of them.
const VENDOR_PREFIXES: [&str; 4] = ["webkit", "moz", "ms", "o"];

/// The rank of an unprefixed property
pub const STANDARD_RANK: u8 = VENDOR_PREFIXES.len() as u8;

/// Extract the sortable property name from a member.
///
/// Identifier keys yield their text unchanged; quoted keys yield the
/// literal value with surrounding quotes stripped. Spreads, computed keys
/// and methods yield `None`, which excludes the member from reordering
/// while keeping it in place.
pub fn property_name(member: &Member) -> Option<String> {
    match &member.kind {
        MemberKind::IdentifierKey(name) => Some(name.clone()),
        MemberKind::LiteralKey(value) => {
            Some(value.trim_matches(|c| c == '\'' || c == '"').to_string())
        }
        MemberKind::Spread | MemberKind::Other => None,
    }
}

/// Reduce a property name to its canonical form: strip one leading vendor
/// prefix, then lowercase.
///
/// The hyphen-delimited form (`-webkit-transform`) is tried first, else the
/// camel-case leading token (`WebkitTransform`, `webkitTransform`). The
/// camel form requires an uppercase letter right after the token, so names
/// like `order` and `opacity` pass through whole. At most one prefix is
/// stripped, and stripping happens before lowercasing.
pub fn base_property(name: &str) -> String {
    for prefix in VENDOR_PREFIXES {
        if let Some(rest) = strip_hyphenated_prefix(name, prefix) {
            return rest.to_ascii_lowercase();
        }
    }
    for prefix in VENDOR_PREFIXES {
        if let Some(rest) = strip_camel_prefix(name, prefix) {
            return rest.to_ascii_lowercase();
        }
    }
    name.to_ascii_lowercase()
}

/// Rank a name by its vendor prefix: webkit 0, moz 1, ms 2, o 3, standard 4.
///
/// Accepts the bare token (`webkit`), the hyphenated form (`-webkit-`) and
/// the camel-case leading form (`WebkitTransform`), case-insensitively.
/// Only meaningful between variants of the same canonical property; the
/// unprefixed form always ranks last among its siblings.
pub fn vendor_prefix_rank(name: &str) -> u8 {
    for (rank, prefix) in VENDOR_PREFIXES.iter().enumerate() {
        if has_vendor_prefix(name, prefix) {
            return rank as u8;
        }
    }
    STANDARD_RANK
}

/// Resolve a property against an order table, returning its index.
///
/// Tries the name as written, then its canonical form, then a kebab-case
/// conversion, then a camelCase conversion. The four-way fallback lets a
/// table authored in either naming convention match either convention in
/// source.
pub fn property_index(order: &[&str], name: &str, base: &str) -> Option<usize> {
    if let Some(index) = order.iter().position(|entry| *entry == name) {
        return Some(index);
    }
    if let Some(index) = order.iter().position(|entry| *entry == base) {
        return Some(index);
    }
    let kebab = to_kebab_case(name);
    if let Some(index) = order.iter().position(|entry| *entry == kebab) {
        return Some(index);
    }
    let camel = to_camel_case(name);
    order.iter().position(|entry| *entry == camel)
}

fn strip_hyphenated_prefix<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    name.strip_prefix('-')
        .and_then(|rest| strip_token_ignore_case(rest, prefix))
        .and_then(|rest| rest.strip_prefix('-'))
}

fn strip_camel_prefix<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = strip_token_ignore_case(name, prefix)?;
    if rest.starts_with(|c: char| c.is_ascii_uppercase()) {
        Some(rest)
    } else {
        None
    }
}

fn strip_token_ignore_case<'a>(name: &'a str, token: &str) -> Option<&'a str> {
    let head = name.get(..token.len())?;
    if head.eq_ignore_ascii_case(token) {
        Some(&name[token.len()..])
    } else {
        None
    }
}

fn has_vendor_prefix(name: &str, prefix: &str) -> bool {
    name.eq_ignore_ascii_case(prefix)
        || strip_hyphenated_prefix(name, prefix).is_some()
        || strip_camel_prefix(name, prefix).is_some()
}

/// `backgroundColor` -> `background-color`
fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `background-color` -> `backgroundColor`
fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-' {
            match chars.peek() {
                Some(&next) if next.is_ascii_lowercase() => {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                }
                _ => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    out
}
