//! One-shot load printed as plain text.

use std::io::Write;
use std::sync::Arc;

use crate::config::Config;
use crate::feed::{FeedAction, FeedState, FeedStore, Snapshot};
use crate::fetch::HttpSectionSource;
use crate::model::ImageScale;

/// Load the feed once and write it to `out`.
///
/// Returns the final feed state; nothing is written when the load failed.
pub async fn run_once<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<FeedState> {
    let source = HttpSectionSource::from_config(&config.feed)?;
    let mut store = FeedStore::new(Arc::new(source), config.feed.url.clone());

    store.send(FeedAction::Load);
    while store.next_completion().await {}

    if let Some(request) = store.state().render_request() {
        write_snapshot(&request.snapshot, config.ui.image_scale, out)?;
    }
    Ok(store.state().clone())
}

/// Plain-text listing: one header line per section, one indented line per item.
pub fn write_snapshot<W: Write>(
    snapshot: &Snapshot,
    scale: ImageScale,
    out: &mut W,
) -> std::io::Result<()> {
    for section in snapshot.sections() {
        writeln!(
            out,
            "{} [{}] ({} of {})",
            section.header, section.key, section.items_to_show, section.items_total
        )?;
        for key in &section.item_keys {
            if let Some(data) = snapshot.render_item(key, scale) {
                writeln!(out, "  {}\t{}", data.title, data.image_url)?;
            }
        }
    }
    Ok(())
}
