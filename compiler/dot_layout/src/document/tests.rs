//! Tests for the document model and builder.

use super::*;

fn tags(doc: &Document) -> Vec<Tag> {
    doc.nodes.iter().map(|node| node.tag.clone()).collect()
}

fn spans(doc: &Document) -> Vec<usize> {
    doc.nodes.iter().map(|node| node.span).collect()
}

// =============================================================================
// Builder
// =============================================================================

#[test]
fn empty_document() {
    let doc = Document::new(10);
    assert!(doc.is_empty());
    assert_eq!(doc.len(), 0);
    assert_eq!(doc.max_column(), 10);
}

#[test]
fn leaves_are_appended_in_order() {
    let mut doc = Document::new(10);
    doc.text("a").space().break_lines(2).text_if("b", Condition::Flat);

    assert_eq!(
        tags(&doc),
        vec![
            Tag::Text("a".into()),
            Tag::Space,
            Tag::Break(2),
            Tag::Text("b".into()),
        ]
    );
    assert_eq!(doc.nodes[3].condition, Condition::Flat);
}

#[test]
fn composites_record_descendant_count() {
    let mut doc = Document::new(10);
    doc.text("a")
        .group(|doc| {
            doc.text("b").indent(1, |doc| {
                doc.text("c");
            });
        })
        .text("d");

    assert_eq!(
        tags(&doc),
        vec![
            Tag::Text("a".into()),
            Tag::Group,
            Tag::Text("b".into()),
            Tag::Indent(1),
            Tag::Text("c".into()),
            Tag::Text("d".into()),
        ]
    );
    assert_eq!(spans(&doc), vec![0, 3, 0, 1, 0, 0]);
}

#[test]
fn empty_group_has_zero_span() {
    let mut doc = Document::new(10);
    doc.group(|_| {}).text("a");
    assert_eq!(spans(&doc), vec![0, 0]);
}

#[test]
fn negative_indent_is_recorded() {
    let mut doc = Document::new(10);
    doc.indent(-1, |doc| {
        doc.text("a");
    });
    assert_eq!(doc.nodes[0].tag, Tag::Indent(-1));
}

// =============================================================================
// Space merging
// =============================================================================

#[test]
fn consecutive_spaces_merge() {
    let mut doc = Document::new(10);
    doc.space().space().space();
    assert_eq!(doc.len(), 1);
}

#[test]
fn spaces_inside_group_merge() {
    let mut doc = Document::new(10);
    doc.group(|doc| {
        doc.space().space();
    });
    assert_eq!(tags(&doc), vec![Tag::Group, Tag::Space]);
    assert_eq!(spans(&doc), vec![1, 0]);
}

#[test]
fn spaces_with_different_conditions_do_not_merge() {
    let mut doc = Document::new(10);
    doc.space().space_if(Condition::Flat).space_if(Condition::Broken);
    assert_eq!(doc.len(), 3);
}

#[test]
fn spaces_separated_by_text_do_not_merge() {
    let mut doc = Document::new(10);
    doc.space().text("a").space();
    assert_eq!(doc.len(), 3);
}

#[test]
fn space_after_group_ending_in_space_is_kept() {
    let mut doc = Document::new(10);
    doc.group(|doc| {
        doc.text("a").space();
    })
    .space();

    assert_eq!(
        tags(&doc),
        vec![Tag::Group, Tag::Text("a".into()), Tag::Space, Tag::Space]
    );
}

#[test]
fn first_space_in_group_is_kept_after_outer_space() {
    let mut doc = Document::new(10);
    doc.space().group(|doc| {
        doc.space();
    });
    assert_eq!(tags(&doc), vec![Tag::Space, Tag::Group, Tag::Space]);
}

// =============================================================================
// Preconditions
// =============================================================================

#[test]
#[should_panic(expected = "break count must be positive")]
fn zero_break_count_panics() {
    Document::new(10).break_lines(0);
}

#[test]
#[should_panic(expected = "break count must be positive")]
fn zero_conditional_break_count_panics() {
    Document::new(10).break_lines_if(0, Condition::Broken);
}

#[test]
#[should_panic(expected = "max column must be positive")]
fn zero_max_column_panics() {
    let _ = Document::new(0);
}

#[test]
#[should_panic(expected = "spans 5 nodes")]
fn span_past_scope_end_panics() {
    let mut doc = Document::new(10);
    doc.group(|doc| {
        doc.text("a");
    });
    doc.nodes[0].span = 5;
    let _ = doc.children(0..doc.len()).count();
}

#[test]
#[should_panic(expected = "leaf node 0 records a span")]
fn leaf_with_span_panics() {
    let mut doc = Document::new(10);
    doc.text("a").text("b");
    doc.nodes[0].span = 1;
    let _ = doc.children(0..doc.len()).count();
}

// =============================================================================
// Traversal
// =============================================================================

#[test]
fn children_yield_direct_children_with_their_spans() {
    let mut doc = Document::new(10);
    doc.text("a")
        .group(|doc| {
            doc.text("b").text("c");
        })
        .text("d");

    let top: Vec<(Tag, Range<usize>)> = doc
        .children(0..doc.len())
        .map(|(node, span)| (node.tag.clone(), span))
        .collect();
    assert_eq!(
        top,
        vec![
            (Tag::Text("a".into()), 1..1),
            (Tag::Group, 2..4),
            (Tag::Text("d".into()), 5..5),
        ]
    );

    let nested: Vec<Tag> = doc
        .children(2..4)
        .map(|(node, _)| node.tag.clone())
        .collect();
    assert_eq!(nested, vec![Tag::Text("b".into()), Tag::Text("c".into())]);
}

#[test]
fn cursor_steps_over_composites() {
    let mut doc = Document::new(10);
    doc.indent(1, |doc| {
        doc.group(|doc| {
            doc.text("a");
        });
    })
    .text("b");

    let mut cursor = Cursor::new(0..doc.len());
    assert_eq!(cursor.advance(&doc.nodes), Some((0, 1..3)));
    assert_eq!(cursor.advance(&doc.nodes), Some((3, 4..4)));
    assert_eq!(cursor.advance(&doc.nodes), None);
}

// =============================================================================
// Conditions
// =============================================================================

#[test]
fn condition_gating() {
    assert!(Condition::Always.renders_in(Mode::Flat));
    assert!(Condition::Always.renders_in(Mode::Broken));
    assert!(Condition::Flat.renders_in(Mode::Flat));
    assert!(!Condition::Flat.renders_in(Mode::Broken));
    assert!(!Condition::Broken.renders_in(Mode::Flat));
    assert!(Condition::Broken.renders_in(Mode::Broken));
}

#[test]
fn condition_and_mode_display() {
    assert_eq!(Condition::Always.to_string(), "always");
    assert_eq!(Condition::Broken.to_string(), "broken");
    assert_eq!(Mode::Flat.to_string(), "flat");
}

// =============================================================================
// Cloning
// =============================================================================

#[test]
fn clone_resets_pass_caches() {
    let mut doc = Document::new(3);
    doc.group(|doc| {
        doc.text("abcd").space();
    });
    doc.measure();
    doc.layout();
    assert_eq!(doc.nodes[0].mode, Some(Mode::Broken));

    let copy = doc.clone();
    assert_eq!(copy.stage, Stage::Built);
    assert_eq!(tags(&copy), tags(&doc));
    assert_eq!(spans(&copy), spans(&doc));
    for node in &copy.nodes {
        assert_eq!(node.measure, Measure::default());
        assert_eq!(node.mode, None);
    }
}

#[test]
fn clone_keeps_building_state() {
    let mut doc = Document::new(10);
    doc.space();
    let mut copy = doc.clone();
    copy.space();
    assert_eq!(copy.len(), 1);
    assert_eq!(copy, doc);
}
