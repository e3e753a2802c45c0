mod photos;

use anyhow::{Context, Result};
use pinboard_layout::prelude::*;

use photos::SampleBoard;

const SCREEN_WIDTH: f32 = 375.0;
const SCREEN_HEIGHT: f32 = 667.0;

fn parse_arg<T: std::str::FromStr>(value: Option<String>, name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid {name}: {raw:?}")),
        None => Ok(default),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut args = std::env::args().skip(1);
    let item_count: usize = parse_arg(args.next(), "item count", 24)?;
    let columns: usize = parse_arg(args.next(), "column count", 2)?;

    let board = SampleBoard::generate(item_count);
    let config = PinboardLayoutConfig::default().with_number_of_columns(columns);
    let mut layout =
        PinboardLayout::with_config(board, config).context("invalid board configuration")?;

    let container = ContainerMetrics::new(SCREEN_WIDTH, item_count)
        .with_content_inset(EdgeInsets::from_components(0.0, 20.0, 0.0, 0.0));
    let content = layout
        .collection_view_content_size(&container)
        .context("laying out sample board")?;
    log::info!(
        "board of {} pins in {} columns: {:.0} x {:.0}",
        item_count,
        columns,
        content.width,
        content.height
    );

    let mut top = 0.0;
    while top < content.height {
        let viewport = Rect::new(0.0, top, content.width, SCREEN_HEIGHT);
        let visible = layout.layout_attributes_for_elements(&container, viewport)?;
        let titles: Vec<&str> = visible
            .iter()
            .map(|attrs| layout.provider().title(attrs.item_index))
            .collect();
        log::info!(
            "viewport {:>6.0}..{:<6.0} {} visible: {}",
            viewport.y,
            viewport.max_y(),
            visible.len(),
            titles.join(", ")
        );
        top += SCREEN_HEIGHT;
    }

    if let Some(last) = item_count.checked_sub(1) {
        let attrs = layout.layout_attributes_for_item(last)?;
        log::info!(
            "last pin {:?} at ({:.0}, {:.0}) {:.0}x{:.0}, photo {:.0} caption {:.0}",
            layout.provider().title(last),
            attrs.frame.x,
            attrs.frame.y,
            attrs.frame.width,
            attrs.frame.height,
            attrs.content_height,
            attrs.annotation_height()
        );
    }

    Ok(())
}
