use pinboard_layout::prelude::*;
use pinboard_layout::{ColumnIndex, LayoutError};
use std::cell::RefCell;
use std::rc::Rc;

/// A photo with a known aspect ratio and a caption of some number of lines.
#[derive(Clone, Copy)]
struct Pin {
    aspect_ratio: f32,
    caption_lines: u32,
}

const LINE_HEIGHT: f32 = 17.0;

/// Host-side data source shared with the layout, the way a view controller
/// keeps its model next to the collection view.
#[derive(Clone)]
struct Board {
    pins: Rc<RefCell<Vec<Pin>>>,
}

impl Board {
    fn with_pins(pins: &[Pin]) -> Self {
        Self {
            pins: Rc::new(RefCell::new(pins.to_vec())),
        }
    }

    fn len(&self) -> usize {
        self.pins.borrow().len()
    }

    fn push(&self, pin: Pin) {
        self.pins.borrow_mut().push(pin);
    }
}

impl MeasurementProvider for Board {
    fn content_height(&self, index: usize, width: f32) -> f32 {
        let pin = self.pins.borrow()[index];
        (width / pin.aspect_ratio).round()
    }

    fn annotation_height(&self, index: usize, _width: f32) -> f32 {
        self.pins.borrow()[index].caption_lines as f32 * LINE_HEIGHT
    }
}

fn sample_pins() -> Vec<Pin> {
    (0..30)
        .map(|i| Pin {
            aspect_ratio: [0.75, 1.0, 1.5, 0.5][i % 4],
            caption_lines: (i % 3) as u32,
        })
        .collect()
}

#[test]
fn scrolling_viewport_sees_every_item() {
    let board = Board::with_pins(&sample_pins());
    let mut layout = PinboardLayout::new(board.clone());
    let container = ContainerMetrics::new(375.0, board.len())
        .with_content_inset(EdgeInsets::from_components(8.0, 20.0, 8.0, 0.0));
    let content = layout.collection_view_content_size(&container).unwrap();
    assert_eq!(content.width, 359.0);

    let viewport_height = 667.0;
    let mut seen = vec![false; board.len()];
    let mut top = 0.0;
    while top < content.height {
        let rect = Rect::new(0.0, top, content.width, viewport_height);
        for attrs in layout
            .layout_attributes_for_elements(&container, rect)
            .unwrap()
        {
            assert!(attrs.frame.intersects(&rect));
            seen[attrs.item_index] = true;
        }
        top += viewport_height / 2.0;
    }

    assert!(seen.iter().all(|&s| s), "some items were never visible");
    assert_eq!(layout.generation(), 1);
}

#[test]
fn stale_cache_until_host_invalidates() {
    let board = Board::with_pins(&sample_pins()[..4]);
    let mut layout = PinboardLayout::new(board.clone());
    let before = layout
        .collection_view_content_size(&ContainerMetrics::new(320.0, board.len()))
        .unwrap();

    board.push(Pin {
        aspect_ratio: 0.25,
        caption_lines: 2,
    });
    let container = ContainerMetrics::new(320.0, board.len());

    let stale = layout.collection_view_content_size(&container).unwrap();
    assert_eq!(stale, before);
    assert!(matches!(
        layout.layout_attributes_for_item(4),
        Err(LayoutError::IndexOutOfRange { index: 4, len: 4 })
    ));

    layout.invalidate_layout();
    let fresh = layout.collection_view_content_size(&container).unwrap();
    assert!(fresh.height > before.height);
    let added = layout.layout_attributes_for_item(4).unwrap();
    assert_eq!(added.content_height, 592.0);
    assert_eq!(added.annotation_height(), 2.0 * LINE_HEIGHT);
}

#[test]
fn boxed_provider_drives_the_layout() {
    let provider: Box<dyn MeasurementProvider> =
        Box::new(FnMeasurementProvider::new(|i, _| 40.0 + i as f32, |_, _| 10.0));
    let config = PinboardLayoutConfig::default()
        .with_number_of_columns(3)
        .with_cell_padding(4.0);
    let mut layout = PinboardLayout::with_config(provider, config).unwrap();

    let size = layout
        .collection_view_content_size(&ContainerMetrics::new(300.0, 6))
        .unwrap();

    // Column 2 holds items 2 and 5: (8 + 42 + 10) + (8 + 45 + 10).
    assert_eq!(size, Size::new(300.0, 123.0));
}

#[test]
fn shortest_column_policy_is_opt_in() {
    let pins = [
        Pin {
            aspect_ratio: 0.25,
            caption_lines: 0,
        },
        Pin {
            aspect_ratio: 1.0,
            caption_lines: 0,
        },
        Pin {
            aspect_ratio: 1.0,
            caption_lines: 0,
        },
    ];
    let board = Board::with_pins(&pins);
    let container = ContainerMetrics::new(320.0, pins.len());

    let mut round_robin = PinboardLayout::new(board.clone());
    round_robin.prepare(&container).unwrap();
    assert_eq!(round_robin.cache().columns(), &[0, 1, 0]);

    let mut balanced = PinboardLayout::new(board);
    balanced.set_column_policy(ColumnPolicy::ShortestColumn);
    balanced.prepare(&container).unwrap();
    assert_eq!(balanced.cache().columns(), &[0, 1, 1]);
    assert!(balanced.cache().content_height() < round_robin.cache().content_height());
}

#[test]
fn column_index_is_exposed_for_hosts() {
    let board = Board::with_pins(&sample_pins());
    let mut layout = PinboardLayout::new(board.clone());
    layout
        .prepare(&ContainerMetrics::new(320.0, board.len()))
        .unwrap();

    let cache = layout.cache();
    let index = ColumnIndex::build(cache.columns(), cache.column_count());
    assert_eq!(index.column_count(), 2);
    assert_eq!(index.column(0).len() + index.column(1).len(), board.len());

    let rect = Rect::new(0.0, 500.0, 320.0, 400.0);
    assert_eq!(
        index.query(cache.attributes(), rect),
        pinboard_layout::query(cache.attributes(), rect)
    );
}
