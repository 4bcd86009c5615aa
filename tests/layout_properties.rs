use cellframe::text::{display_height, display_width, line_width, truncate, wrap_words};
use cellframe::*;
use proptest::prelude::*;

fn row_of(widths: &[usize], grows: &[u32], spacing: usize) -> FlexNode {
    let items = widths.iter().zip(grows).map(|(&width, &grow)| {
        let item = FlexItem::new("x").with_width(width);
        if grow > 0 {
            item.with_grow(grow)
        } else {
            item
        }
    });
    FlexNode::row(items).with_spacing(spacing)
}

/// Width left for flexible items once spacing and fixed items are paid for.
fn flexible_budget(node: &FlexNode, parent_width: usize) -> usize {
    let gaps = node.spacing * node.items.len().saturating_sub(1);
    let mut available = parent_width.saturating_sub(gaps);
    for item in &node.items {
        if let Some(width) = item.fixed_width() {
            available -= width.min(available);
        }
    }
    available
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_flexible_widths_sum_to_available(
        widths in prop::collection::vec(prop_oneof![Just(0usize), 1usize..20], 1..8),
        spacing in 0usize..4,
        parent_width in 0usize..120
    ) {
        let grows = vec![0; widths.len()];
        let node = row_of(&widths, &grows, spacing);
        let assigned = node.row_widths(parent_width);
        let budget = flexible_budget(&node, parent_width);

        let flexible: Vec<usize> = node.items.iter().zip(&assigned)
            .filter(|(item, _)| item.fixed_width().is_none())
            .map(|(_, &w)| w)
            .collect();

        if !flexible.is_empty() {
            prop_assert_eq!(flexible.iter().sum::<usize>(), budget);
        }
    }

    #[test]
    fn prop_even_split_remainder_goes_to_lowest_indices(
        count in 1usize..10,
        parent_width in 0usize..200
    ) {
        let node = FlexNode::row((0..count).map(|_| FlexItem::new("x")));
        let widths = node.row_widths(parent_width);
        let base = parent_width / count;
        let remainder = parent_width % count;

        for (i, &width) in widths.iter().enumerate() {
            let expected = if i < remainder { base + 1 } else { base };
            prop_assert_eq!(width, expected, "index {}", i);
        }
    }

    #[test]
    fn prop_grow_leftover_goes_to_lowest_indices(
        grows in prop::collection::vec(1u32..6, 1..8),
        parent_width in 0usize..200
    ) {
        let widths = vec![0; grows.len()];
        let node = row_of(&widths, &grows, 0);
        let assigned = node.row_widths(parent_width);

        let total: usize = grows.iter().map(|&g| g as usize).sum();
        let floors: Vec<usize> = grows.iter().map(|&g| parent_width * g as usize / total).collect();
        let leftover = parent_width - floors.iter().sum::<usize>();

        prop_assert_eq!(assigned.iter().sum::<usize>(), parent_width);
        for (i, (&width, &floor)) in assigned.iter().zip(&floors).enumerate() {
            prop_assert_eq!(width, floor + usize::from(i < leftover), "index {}", i);
        }
    }

    #[test]
    fn prop_rendered_row_width_matches_parent(
        count in 1usize..6,
        spacing in 0usize..3,
        parent_width in 20usize..100
    ) {
        let node = FlexNode::row((0..count).map(|i| FlexItem::new(format!("item{i}"))))
            .with_spacing(spacing);
        let renderer = Renderer::with_config(RenderConfig::plain());
        let out = renderer.render(&View::sized(Size::new(parent_width, 0), [Node::from(node)]));
        let gaps = spacing * (count - 1);
        // Every item here is at most 5 columns, so only wide items overflow.
        if parent_width.saturating_sub(gaps) / count >= 5 {
            prop_assert_eq!(display_width(&out), parent_width);
        }
    }

    #[test]
    fn prop_flow_columns_within_bounds(
        count in 1usize..30,
        min_width in 0usize..40,
        spacing in 0usize..6,
        parent_width in 0usize..200
    ) {
        let flow = FlowNode::new(min_width, (0..count).map(|_| Node::from("x")))
            .with_spacing(spacing, 0);
        let columns = flow.columns(parent_width);
        prop_assert!(columns >= 1);
        prop_assert!(columns <= count);
    }

    #[test]
    fn prop_wrap_respects_width_and_keeps_words(
        words in prop::collection::vec("[a-z]{1,12}", 1..20),
        separators in prop::collection::vec("[ \t]{1,3}", 20),
        width in 1usize..30
    ) {
        let mut text = String::new();
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                text.push_str(&separators[i % separators.len()]);
            }
            text.push_str(word);
        }
        let lines = wrap_words(&text, width);

        for line in &lines {
            prop_assert!(!line.contains('\t'), "tab kept in {:?}", line);
            prop_assert!(!line.contains("  "), "space run kept in {:?}", line);
            prop_assert!(
                line_width(line) <= width || !line.contains(' '),
                "line {:?} exceeds {}", line, width
            );
        }

        // Lines are exactly the single-space-joined words, split at line ends.
        prop_assert_eq!(lines.join(" "), words.join(" "));
    }

    #[test]
    fn prop_truncate_is_exact(
        line in "[a-z日本語 ]{1,40}",
        width in 1usize..30,
        suffix in prop_oneof![Just(""), Just("..."), Just("…")]
    ) {
        prop_assume!(line_width(&line) > width);
        let cut = truncate(&line, width, suffix);
        prop_assert_eq!(line_width(&cut), width);
    }

    #[test]
    fn prop_filled_box_matches_size(
        width in 7usize..60,
        height in 7usize..30,
        padding in 0usize..=2,
        value in "[a-z ]{0,80}",
        border in prop_oneof![
            Just(BorderStyle::Thin),
            Just(BorderStyle::Thick),
            Just(BorderStyle::Rounded),
            Just(BorderStyle::Double),
        ]
    ) {
        let style = BoxStyle::new().with_border(border).with_padding(Padding::all(padding)).filled();
        let node = BoxNode::new(style).with_child(TextNode::new(value).truncated());
        let out = render(&View::sized(Size::new(width, height), [Node::from(node)]));

        prop_assert_eq!(display_width(&out), width);
        prop_assert_eq!(display_height(&out), height);
        for line in out.split('\n') {
            prop_assert_eq!(display_width(line), width);
        }
    }
}
