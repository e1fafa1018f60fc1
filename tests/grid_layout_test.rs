// Grid layout and composition tests

use grid_depict::grid::{compose_grid_with, ComposedGrid, PlacedItem, ROW_MARGIN};
use grid_depict::models::{BoundingBox, Depictable, Depiction, Fragment, Plane, Point, Viewport};
use grid_depict::{
    compose_grid, ElementEmitter, GraphEmitter, GridError, RenderConfig, RenderError, NO_LABELS,
};

/// Test item that can be told to fail at render time
struct StubItem {
    id: String,
    plane: Plane,
    fail: bool,
}

impl StubItem {
    fn new(id: &str, points: &[(f64, f64)]) -> Self {
        Self {
            id: id.to_string(),
            plane: points
                .iter()
                .enumerate()
                .map(|(i, &p)| (i * 10 + 1, Point::from(p)))
                .collect(),
            fail: false,
        }
    }

    fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl Depictable for StubItem {
    fn plane(&self) -> &Plane {
        &self.plane
    }

    fn plane_mut(&mut self) -> &mut Plane {
        &mut self.plane
    }

    fn render(&self, _config: &RenderConfig) -> Result<Fragment, RenderError> {
        if self.fail {
            return Err(RenderError::Failed(format!("{} refused to render", self.id)));
        }
        let mut fragment = Fragment::new(self.id.clone());
        for p in self.plane.values() {
            fragment.points.push(format!("    <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"0.1\"/>", p.x, -p.y));
        }
        Ok(fragment)
    }
}

/// Emits one marker group per fragment so output order can be read back
struct MarkerEmitter;

impl ElementEmitter for MarkerEmitter {
    fn emit(&self, fragment: &Fragment, _viewport: &Viewport) -> Vec<String> {
        vec![format!("  <g id=\"{}\"/>", fragment.uid)]
    }
}

fn config() -> RenderConfig {
    RenderConfig {
        font_size: 1.0,
        ..RenderConfig::default()
    }
}

fn block(id: &str, width: f64, height: f64) -> Depiction {
    Depiction::with_id(id)
        .with_point(0, 0.3, 1.7)
        .with_point(1, 0.3 + width, 1.7 + height)
        .with_connection(0, 1)
}

fn compose<D: Depictable>(items: &mut [D], labels: Option<&[&str]>, cols: usize) -> Result<ComposedGrid, GridError> {
    compose_grid_with(items, labels, cols, &config(), &MarkerEmitter)
}

/// Marker ids with the per-render suffix stripped
fn marker_ids(svg: &str) -> Vec<String> {
    let doc = roxmltree::Document::parse(svg).expect("composed SVG should be well-formed XML");
    doc.descendants()
        .filter(|n| n.has_tag_name("g"))
        .filter_map(|n| n.attribute("id"))
        .map(|id| id.split('-').next().unwrap_or(id).to_string())
        .collect()
}

#[test]
fn test_fragments_follow_input_order() {
    let mut items: Vec<Depiction> = (0..7)
        .map(|i| block(&format!("m{}", i), 1.0 + i as f64 * 0.5, 2.0 - i as f64 * 0.2))
        .collect();

    for cols in 1..=4 {
        let composed = compose(&mut items, None, cols).unwrap();
        let expected: Vec<String> = (0..7).map(|i| format!("m{}", i)).collect();

        assert_eq!(marker_ids(&composed.svg), expected, "SVG order with {} columns", cols);

        let indices: Vec<usize> = composed.display.items().map(|p| p.index).collect();
        assert_eq!(indices, (0..7).collect::<Vec<_>>());
    }
}

#[test]
fn test_planes_restored_after_success() {
    let mut items = vec![
        StubItem::new("a", &[(0.1, 0.7), (1.3, -2.9), (0.33, 0.0)]),
        StubItem::new("b", &[(-5.5, 3.25)]),
        StubItem::new("c", &[(1e-9, 7.1), (2.2, 7.3)]),
    ];
    let before: Vec<Plane> = items.iter().map(|i| i.plane().clone()).collect();

    compose(&mut items, Some(&["x", "y", "z"]), 2).unwrap();

    let after: Vec<Plane> = items.iter().map(|i| i.plane().clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_planes_restored_after_render_failure() {
    let mut items = vec![
        StubItem::new("a", &[(0.1, 0.7), (1.3, -2.9)]),
        StubItem::new("b", &[(4.0, 4.0), (5.0, 6.5)]),
        StubItem::new("c", &[(0.0, 0.0), (3.0, 1.0)]),
        StubItem::new("d", &[(2.5, -1.5), (2.6, 1.5)]).failing(),
        StubItem::new("e", &[(9.0, 9.0)]),
    ];
    let before: Vec<Plane> = items.iter().map(|i| i.plane().clone()).collect();

    let result = compose(&mut items, None, 2);
    match result {
        Err(GridError::RenderFailure { index, source }) => {
            assert_eq!(index, 3);
            assert_eq!(source, RenderError::Failed("d refused to render".to_string()));
        }
        other => panic!("expected render failure, got {:?}", other.map(|c| c.svg)),
    }

    let after: Vec<Plane> = items.iter().map(|i| i.plane().clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_label_count_mismatch_rejected_without_touching_items() {
    let mut items = vec![block("a", 1.0, 1.0), block("b", 1.0, 1.0), block("c", 1.0, 1.0)];
    let before: Vec<Plane> = items.iter().map(|i| i.plane().clone()).collect();

    let result = compose(&mut items, Some(&["only", "two"]), 3);
    assert_eq!(
        result.map(|c| c.svg),
        Err(GridError::ShapeMismatch { labels: 2, items: 3 })
    );

    let after: Vec<Plane> = items.iter().map(|i| i.plane().clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_zero_columns_rejected() {
    let mut items = vec![block("a", 1.0, 1.0)];
    assert!(matches!(
        compose(&mut items, None, 0),
        Err(GridError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_row_height_normalization() {
    let mut items = vec![block("short", 1.0, 2.0), block("tall", 1.0, 5.0)];
    let composed = compose(&mut items, None, 3).unwrap();

    assert_eq!(composed.display.rows.len(), 1);
    assert_eq!(composed.display.rows[0].height, 5.0);

    let bounds: Vec<BoundingBox> = composed
        .display
        .items()
        .map(|p| p.bounds.expect("non-empty plane"))
        .collect();

    // both centered in the 5.0 band that starts at y = 0
    for b in &bounds {
        assert!((b.center_y() - -2.5).abs() < 1e-9, "center {}", b.center_y());
    }
    assert!((bounds[0].height() - 2.0).abs() < 1e-9);
    assert!((bounds[1].min_y - -5.0).abs() < 1e-9);
    assert!(bounds[1].max_y.abs() < 1e-9);
}

#[test]
fn test_no_two_items_overlap() {
    let sizes = [(1.0, 2.0), (3.5, 0.5), (0.0, 4.0), (2.0, 2.0), (0.7, 0.0), (5.0, 3.0), (1.1, 1.9), (0.2, 6.0), (4.4, 0.1)];

    for n in 0..=sizes.len() {
        for cols in 1..=4 {
            for labelled in [false, true] {
                let mut items: Vec<Depiction> = sizes[..n]
                    .iter()
                    .enumerate()
                    .map(|(i, &(w, h))| block(&format!("i{}", i), w, h))
                    .collect();
                let names: Vec<String> = (0..n).map(|i| format!("label {}", i)).collect();
                let labels: Vec<&str> = names.iter().map(String::as_str).collect();

                let composed = compose(&mut items, labelled.then_some(labels.as_slice()), cols).unwrap();
                let placed: Vec<&PlacedItem> = composed.display.items().collect();
                assert_eq!(placed.len(), n);

                for (i, a) in placed.iter().enumerate() {
                    for b in &placed[i + 1..] {
                        let (ba, bb) = (a.bounds.unwrap(), b.bounds.unwrap());
                        assert!(
                            !ba.intersects(&bb),
                            "items {} and {} overlap (n={}, cols={}, labelled={})",
                            a.index,
                            b.index,
                            n,
                            cols,
                            labelled
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_zero_items_produce_minimal_document() {
    let mut items: Vec<Depiction> = Vec::new();
    let svg = compose_grid(&mut items, NO_LABELS, 3).expect("empty grid should compose");

    let doc = roxmltree::Document::parse(&svg).expect("empty grid should be well-formed XML");
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(root.attribute("width"), Some("1.50cm"));
    assert_eq!(root.attribute("height"), Some("1.25cm"));
    assert_eq!(root.children().filter(|n| n.is_element()).count(), 1, "only the label layer");
}

#[test]
fn test_column_wrapping() {
    let mut items = vec![block("a", 1.0, 3.0), block("b", 2.0, 1.0), block("c", 1.0, 4.0)];
    let composed = compose(&mut items, None, 2).unwrap();

    let row_sizes: Vec<usize> = composed.display.rows.iter().map(|r| r.items.len()).collect();
    assert_eq!(row_sizes, vec![2, 1]);

    let third = &composed.display.rows[1].items[0];
    assert_eq!(third.index, 2);
    assert_eq!(third.column, 0);
    assert_eq!(third.target_x, 0.0);

    let second_row_top = -(3.0 + ROW_MARGIN);
    assert_eq!(composed.display.rows[1].top, second_row_top);
    assert!((third.target_y - (second_row_top - 2.0)).abs() < 1e-9);

    let bounds = third.bounds.unwrap();
    assert!(bounds.max_y <= second_row_top + 1e-9);
}

#[test]
fn test_labels_are_escaped_and_grouped() {
    let mut items = vec![block("a", 1.0, 1.0), block("b", 1.0, 1.0)];
    let config = config();
    let composed = compose_grid_with(
        &mut items,
        Some(&["C&O", "<R>"]),
        2,
        &config,
        &GraphEmitter::new(&config),
    )
    .unwrap();

    let doc = roxmltree::Document::parse(&composed.svg).unwrap();
    let texts: Vec<&str> = doc
        .descendants()
        .filter(|n| n.has_tag_name("text"))
        .filter_map(|n| n.text())
        .collect();
    assert_eq!(texts, vec!["C&O", "<R>"]);

    let layer = doc
        .descendants()
        .find(|n| n.has_tag_name("g") && n.attribute("font-family").is_some())
        .expect("label layer");
    assert_eq!(layer.attribute("font-size"), Some("0.75"));
    assert_eq!(layer.children().filter(|n| n.is_element()).count(), 2);
}

#[test]
fn test_heterogeneous_items_through_boxes() {
    let mut items: Vec<Box<dyn Depictable>> = vec![
        Box::new(block("depiction", 1.0, 1.0)),
        Box::new(StubItem::new("stub", &[(0.0, 0.0), (1.0, 2.0)])),
    ];

    let composed = compose(&mut items, None, 3).unwrap();
    assert_eq!(marker_ids(&composed.svg), vec!["depiction", "stub"]);
}

#[test]
fn test_display_list_serializes_to_json() {
    let mut items = vec![block("a", 1.0, 1.0)];
    let composed = compose(&mut items, Some(&["first"]), 3).unwrap();

    let json = composed.display.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let uid = value["rows"][0]["items"][0]["uid"].as_str().unwrap();
    assert!(uid.starts_with("a-"), "uid {}", uid);
    assert_eq!(value["rows"][0]["items"][0]["label"], "first");
}

#[test]
fn test_cloned_depictions_get_separate_masks() {
    let d = Depiction::with_id("dup")
        .with_symbol(0, 0.0, 0.0, "O")
        .with_point(1, 1.0, 1.0)
        .with_connection(0, 1);
    let mut items = vec![d.clone(), d];
    let config = config();
    let composed = compose_grid_with(&mut items, NO_LABELS, 2, &config, &GraphEmitter::new(&config)).unwrap();

    let doc = roxmltree::Document::parse(&composed.svg).unwrap();
    let mask_ids: Vec<&str> = doc
        .descendants()
        .filter(|n| n.has_tag_name("mask"))
        .filter_map(|n| n.attribute("id"))
        .collect();
    assert_eq!(mask_ids.len(), 2);
    assert_ne!(mask_ids[0], mask_ids[1], "each clone needs its own mask");

    let refs: Vec<&str> = doc
        .descendants()
        .filter_map(|n| n.attribute("mask"))
        .collect();
    assert_eq!(refs, vec![format!("url(#{})", mask_ids[0]), format!("url(#{})", mask_ids[1])]);
}

#[test]
fn test_invalid_config_rejected_before_items_move() {
    let mut items = vec![block("a", 1.0, 1.0)];
    let before: Vec<Plane> = items.iter().map(|i| i.plane().clone()).collect();

    for font_size in [f64::NAN, 0.0, -1.0] {
        let config = RenderConfig {
            font_size,
            ..RenderConfig::default()
        };
        let result = compose_grid_with(&mut items, NO_LABELS, 3, &config, &MarkerEmitter);
        assert!(
            matches!(result, Err(GridError::InvalidConfiguration(_))),
            "font_size {} should be rejected",
            font_size
        );
    }

    let after: Vec<Plane> = items.iter().map(|i| i.plane().clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_labelled_rows_stay_apart_with_large_font() {
    // label gap 2.5 exceeds the fixed row margin
    let config = RenderConfig {
        font_size: 2.0,
        ..RenderConfig::default()
    };
    let mut items = vec![block("a", 1.0, 3.0), block("b", 1.0, 3.0), block("c", 1.0, 3.0)];
    let composed =
        compose_grid_with(&mut items, Some(&["x", "y", "z"]), 1, &config, &MarkerEmitter).unwrap();

    let rows = &composed.display.rows;
    assert_eq!(rows.len(), 3);
    for pair in rows.windows(2) {
        assert!((pair[0].top - pair[1].top - (3.0 + ROW_MARGIN + 2.5)).abs() < 1e-9);

        let upper = pair[0].items[0].bounds.unwrap();
        let lower = pair[1].items[0].bounds.unwrap();
        // structure of the upper row ends above the next row's label line
        assert!(upper.min_y > pair[1].top, "{} vs {}", upper.min_y, pair[1].top);
        assert!(!upper.intersects(&lower));
    }
}
