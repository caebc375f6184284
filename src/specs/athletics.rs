// src/specs/athletics.rs
//! Dynamic athletics schedule (Dragonfly OHSAA site, infinite scroll).
//!
//! One `div.card.event-grid` per game. Inside it:
//! - teams: every `h2` in the title container, joined with " vs "
//! - date: the bold 20px span; time: its sibling span without that style
//! - location: `title` attribute of the location text span
//! - sport: the `link-highlight` span

use tracing::{info, warn};

use crate::align::{align, filter_organization};
use crate::browser::{Convergence, Locator, Page, WebDriverSession, wait_for_full_load};
use crate::config::ScrapeOptions;
use crate::error::ScrapeError;
use crate::events::EventRecord;
use crate::extract::{BlockSpec, FieldRead, extract_blocks, locate_blocks};
use crate::progress::{NullProgress, Progress};

pub const EVENT_BLOCKS: BlockSpec = BlockSpec {
    block: Locator::XPath(r#"//div[@class="card event-grid"]"#),
    teams: FieldRead::JoinedText(
        Locator::XPath(r#".//div[@class="event-title-container roboto-font"]/h2"#),
        " vs ",
    ),
    date: FieldRead::Text(Locator::XPath(
        r#".//div[@class="event-sport roboto-font"]/span/span[@style="font-weight: 700; font-size: 20px;"]"#,
    )),
    time: FieldRead::Text(Locator::XPath(
        r#".//div[@class="event-sport roboto-font"]/span/span[not(@style="font-weight: 700; font-size: 20px;")]"#,
    )),
    location: FieldRead::Attribute(
        Locator::XPath(r#".//div[@class="event-location"]/span[@class="event-location-text"]"#),
        "title",
    ),
    sport: FieldRead::Text(Locator::XPath(
        r#".//div[@class="event-sport roboto-font"]/span[@class="link-highlight"]"#,
    )),
};

const STAGES: usize = 4;

/// Run the pipeline on an already-navigated page: wait for the page to stop
/// growing, locate the event cards, extract, align, then keep only rows
/// mentioning the configured organization.
pub fn collect<P: Page>(
    page: &mut P,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<EventRecord>, ScrapeError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(STAGES);
    }

    let convergence = Convergence::from_options(opts);
    let report = match progress.as_deref_mut() {
        Some(p) => wait_for_full_load(page, &convergence, p)?,
        None => wait_for_full_load(page, &convergence, &mut NullProgress)?,
    };
    info!("Page settled after {} scrolls at height {}", report.scrolls, report.final_height);
    stage_done(&mut progress, "Page fully loaded");

    let blocks = locate_blocks(page, &EVENT_BLOCKS, opts.block_wait())?;
    stage_done(&mut progress, &format!("Found {} event cards", blocks.len()));

    let fields = extract_blocks(page, &blocks, &EVENT_BLOCKS)?;
    let records = align(fields);
    stage_done(&mut progress, &format!("Extracted {} complete events", records.len()));

    let kept = filter_organization(records, &opts.organization);
    info!("{} events mention {:?}", kept.len(), opts.organization);
    stage_done(&mut progress, &format!("{} events for {}", kept.len(), opts.organization));

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(kept)
}

/// Open a browser session, load the athletics page and collect. The session
/// is released whether or not collection succeeds; a failure to release it
/// after a good collection is only logged.
pub fn fetch(opts: &ScrapeOptions, progress: Option<&mut dyn Progress>) -> Result<Vec<EventRecord>, ScrapeError> {
    let mut session = WebDriverSession::from_options(opts)?;
    session.goto(&opts.athletics_url)?;
    let records = collect(&mut session, opts, progress)?;
    Ok(after_quit(records, session.quit()))
}

/// Records collected before the session was closed survive a failed close.
fn after_quit(records: Vec<EventRecord>, quit: Result<(), ScrapeError>) -> Vec<EventRecord> {
    if let Err(e) = quit {
        warn!("Could not close the browser session: {e}");
    }
    records
}

fn stage_done(progress: &mut Option<&mut dyn Progress>, label: &str) {
    if let Some(p) = progress.as_deref_mut() {
        p.item_done(label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_close_keeps_collected_records() {
        let rec = EventRecord { teams: s!("Aurora City Schools vs Kent"), ..Default::default() };
        let err = ScrapeError::driver("delete session", "invalid session id");
        assert_eq!(after_quit(vec![rec.clone()], Err(err)), vec![rec.clone()]);
        assert_eq!(after_quit(vec![rec.clone()], Ok(())), vec![rec]);
    }
}
