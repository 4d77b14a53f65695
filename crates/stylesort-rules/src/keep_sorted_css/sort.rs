//! Segment sorting and replacement-text reconstruction
//!
//! Members are never moved individually: the whole editable region is
//! rebuilt by concatenating per-member text slices in the sorted order,
//! so comments, commas and whitespace inside the region travel with the
//! member they belong to and everything outside it is untouched.

use std::cmp::Ordering;

use stylesort_core::text::{line_col_to_offset, offset_to_line};
use stylesort_core::tree::ObjectLiteral;
use stylesort_core::{Edit, Span};

use super::classify::{base_property, property_index, property_name, vendor_prefix_rank};
use super::properties::CSS_PROPERTY_ORDER;

/// Effective options for one invocation: rule configuration with any
/// inline trigger overrides already applied.
#[derive(Debug, Clone)]
pub(crate) struct SortOptions {
    pub order: Vec<String>,
    pub group_vendor_prefixes: bool,
}

/// The text a member contributes to the rebuilt region: its exact source
/// slice, extended over its trailing comma (synthesized for a last member
/// that lacked one) and a directly following newline.
struct MemberText {
    span: Span,
    text: String,
}

/// Sort the object's members and build the replacement edit.
///
/// Returns `None` when there is nothing to do: fewer than two members, or
/// the sorted order equals the original order.
pub(crate) fn sort_object(
    source: &str,
    object: &ObjectLiteral,
    options: &SortOptions,
) -> Option<Edit> {
    let members = &object.members;
    if members.len() < 2 {
        return None;
    }

    let names: Vec<Option<String>> = members.iter().map(property_name).collect();
    let (region_start, region_end, texts) = member_texts(source, object);

    let combined: Vec<&str> = options
        .order
        .iter()
        .map(String::as_str)
        .chain(CSS_PROPERTY_ORDER.iter().copied())
        .collect();

    let mut reordered: Vec<usize> = (0..members.len()).collect();
    for (start, end) in sortable_segments(&names) {
        reordered[start..end].sort_by(|&a, &b| {
            compare_members(a, b, &names, &combined, options.group_vendor_prefixes)
        });
    }

    // Unchanged is decided by index sequence, not node identity
    if reordered
        .iter()
        .enumerate()
        .all(|(position, &index)| position == index)
    {
        return None;
    }

    let replacement: String = reordered
        .iter()
        .map(|&index| texts[index].text.as_str())
        .collect();

    Some(Edit::new(Span::new(region_start, region_end), replacement))
}

/// Compute the editable region and each member's emitted text.
///
/// The region starts at the later of: the end of the opening brace, and
/// column 0 of the first member's line. Leading same-line trivia joins
/// the first member without ever reaching back past the brace. Each
/// member's slice runs from the previous member's absorbed end, so the
/// whitespace and comments before a member move together with it.
fn member_texts(source: &str, object: &ObjectLiteral) -> (usize, usize, Vec<MemberText>) {
    let members = &object.members;
    let Some(first) = members.first() else {
        let at = object.open_brace.end;
        return (at, at, Vec::new());
    };

    let first_line_start = line_col_to_offset(source, offset_to_line(source, first.span.start), 0);
    let region_start = object.open_brace.end.max(first_line_start);

    let mut texts = Vec::with_capacity(members.len());
    let mut cursor = region_start;
    let last_index = members.len() - 1;

    for (index, member) in members.iter().enumerate() {
        let mut end = member.span.end;
        if let Some(comma) = member.comma {
            end = comma.end;
        }
        let mut text = source[cursor..end].to_string();

        // The last member of the whole list gets a comma synthesized when
        // it has none, so it stays valid wherever sorting lands it.
        if index == last_index && member.comma.is_none() {
            text.push(',');
        }

        // A newline right after the member travels with it.
        if source.as_bytes().get(end) == Some(&b'\n') {
            end += 1;
            text.push('\n');
        }

        texts.push(MemberText {
            span: Span::new(cursor, end),
            text,
        });
        cursor = end;
    }

    (region_start, cursor, texts)
}

/// Split the member list into maximal runs of sortable (named) members.
/// Unnamed members are barriers: they never move and no reordering
/// crosses them.
fn sortable_segments(names: &[Option<String>]) -> Vec<(usize, usize)> {
    let mut segments = Vec::new();
    let mut segment_start: Option<usize> = None;

    for (index, name) in names.iter().enumerate() {
        if name.is_none() {
            if let Some(start) = segment_start.take() {
                segments.push((start, index));
            }
        } else if segment_start.is_none() {
            segment_start = Some(index);
        }
    }
    if let Some(start) = segment_start {
        segments.push((start, names.len()));
    }

    segments
}

/// Comparator for two members (by original index) within one segment.
fn compare_members(
    a: usize,
    b: usize,
    names: &[Option<String>],
    order: &[&str],
    group_vendor_prefixes: bool,
) -> Ordering {
    // Unnamed members never enter a segment, but sort after named ones if
    // they somehow do
    let (name_a, name_b) = match (&names[a], &names[b]) {
        (Some(name_a), Some(name_b)) => (name_a, name_b),
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Greater,
        (Some(_), None) => return Ordering::Less,
    };

    let base_a = base_property(name_a);
    let base_b = base_property(name_b);

    // Variants of the same property cluster, prefixed forms first
    if group_vendor_prefixes && base_a == base_b {
        return vendor_prefix_rank(name_a).cmp(&vendor_prefix_rank(name_b));
    }

    match (
        property_index(order, name_a, &base_a),
        property_index(order, name_b, &base_b),
    ) {
        (Some(index_a), Some(index_b)) => index_a.cmp(&index_b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        // Neither listed: keep original relative order
        (None, None) => a.cmp(&b),
    }
}
