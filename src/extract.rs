// src/extract.rs
//! Block Extractor: five fields per repeated block, each read on its own.
//!
//! A field whose element is missing in a block is simply not pushed for that
//! block. The per-field sequences can therefore end up with different
//! lengths; `align` decides what survives.

use std::time::Duration;

use tracing::{debug, info};

use crate::browser::page::{Locator, Page};
use crate::error::ScrapeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Teams,
    Date,
    Time,
    Location,
    Sport,
}

impl Field {
    pub const ALL: [Field; 5] = [Field::Teams, Field::Date, Field::Time, Field::Location, Field::Sport];

    pub fn name(self) -> &'static str {
        match self {
            Field::Teams => "Teams",
            Field::Date => "Date",
            Field::Time => "Time",
            Field::Location => "Location",
            Field::Sport => "Sport",
        }
    }
}

/// How one field is read out of a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldRead {
    /// Text of the first match.
    Text(Locator),
    /// Texts of every match joined with `sep`; absent when nothing matches.
    JoinedText(Locator, &'static str),
    /// An attribute of the first match.
    Attribute(Locator, &'static str),
}

/// Where the blocks are and how to read each field inside one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockSpec {
    pub block: Locator,
    pub teams: FieldRead,
    pub date: FieldRead,
    pub time: FieldRead,
    pub location: FieldRead,
    pub sport: FieldRead,
}

impl BlockSpec {
    pub fn read_for(&self, field: Field) -> &FieldRead {
        match field {
            Field::Teams => &self.teams,
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Location => &self.location,
            Field::Sport => &self.sport,
        }
    }
}

/// One block's fields; `None` where the element was absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockFields {
    pub teams: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub sport: Option<String>,
}

impl BlockFields {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Teams => self.teams.as_deref(),
            Field::Date => self.date.as_deref(),
            Field::Time => self.time.as_deref(),
            Field::Location => self.location.as_deref(),
            Field::Sport => self.sport.as_deref(),
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Teams => &mut self.teams,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Location => &mut self.location,
            Field::Sport => &mut self.sport,
        }
    }
}

/// Five independently grown sequences. Index `i` in each is meant to come
/// from the same block, which only holds while no block had a gap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSequence {
    pub teams: Vec<String>,
    pub dates: Vec<String>,
    pub times: Vec<String>,
    pub locations: Vec<String>,
    pub sports: Vec<String>,
}

impl FieldSequence {
    pub fn get(&self, field: Field) -> &[String] {
        match field {
            Field::Teams => &self.teams,
            Field::Date => &self.dates,
            Field::Time => &self.times,
            Field::Location => &self.locations,
            Field::Sport => &self.sports,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut Vec<String> {
        match field {
            Field::Teams => &mut self.teams,
            Field::Date => &mut self.dates,
            Field::Time => &mut self.times,
            Field::Location => &mut self.locations,
            Field::Sport => &mut self.sports,
        }
    }

    /// Lengths in `Field::ALL` order.
    pub fn lens(&self) -> [usize; 5] {
        Field::ALL.map(|f| self.get(f).len())
    }

    /// Append every present field of one block.
    pub fn push_block(&mut self, mut block: BlockFields) {
        for field in Field::ALL {
            if let Some(v) = block.slot(field).take() {
                self.get_mut(field).push(v);
            }
        }
    }

    pub fn from_blocks<I: IntoIterator<Item = BlockFields>>(blocks: I) -> Self {
        let mut seq = Self::default();
        for b in blocks {
            seq.push_block(b);
        }
        seq
    }
}

/// Wait for the repeated blocks. Finding none is fatal: an empty page and a
/// page with no events today must not look the same.
pub fn locate_blocks<P: Page>(page: &mut P, spec: &BlockSpec, timeout: Duration) -> Result<Vec<P::Element>, ScrapeError> {
    let blocks = page.wait_for_all(&spec.block, timeout)?;
    if blocks.is_empty() {
        return Err(ScrapeError::NoContent { locator: spec.block.to_string() });
    }
    info!("Located {} event blocks", blocks.len());
    Ok(blocks)
}

/// Read every field of the block at position `index`. Absent elements become
/// `None`, and so does a field the driver refuses to read (stale or detached
/// element). HTTP failures propagate.
pub fn extract_block<P: Page>(
    page: &mut P,
    index: usize,
    block: &P::Element,
    spec: &BlockSpec,
) -> Result<BlockFields, ScrapeError> {
    let mut out = BlockFields::default();
    for field in Field::ALL {
        *out.slot(field) = match read_field(page, block, spec.read_for(field)) {
            Ok(v) => v,
            Err(e @ ScrapeError::Driver { .. }) => {
                debug!("Block {index}: {} unreadable: {e}", field.name());
                None
            }
            Err(e) => return Err(e),
        };
    }
    Ok(out)
}

/// Extract all blocks in document order into parallel sequences.
pub fn extract_blocks<P: Page>(page: &mut P, blocks: &[P::Element], spec: &BlockSpec) -> Result<FieldSequence, ScrapeError> {
    let mut seq = FieldSequence::default();
    for (i, block) in blocks.iter().enumerate() {
        let fields = extract_block(page, i, block, spec)?;
        for field in Field::ALL {
            if fields.get(field).is_none() {
                debug!("Block {i}: no {}", field.name());
            }
        }
        seq.push_block(fields);
    }
    Ok(seq)
}

fn read_field<P: Page>(page: &mut P, block: &P::Element, read: &FieldRead) -> Result<Option<String>, ScrapeError> {
    match *read {
        FieldRead::Text(loc) => match page.find_first_within(block, &loc)? {
            Some(el) => page.text(&el).map(|t| Some(t.trim().to_string())),
            None => Ok(None),
        },
        FieldRead::JoinedText(loc, sep) => {
            let els = page.find_within(block, &loc)?;
            if els.is_empty() {
                return Ok(None);
            }
            let mut parts = Vec::with_capacity(els.len());
            for el in &els {
                parts.push(page.text(el)?.trim().to_string());
            }
            Ok(Some(parts.join(sep)))
        }
        FieldRead::Attribute(loc, name) => match page.find_first_within(block, &loc)? {
            Some(el) => page.attribute(&el, name),
            None => Ok(None),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(n: &str) -> BlockFields {
        BlockFields {
            teams: Some(format!("T{n}")),
            date: Some(format!("D{n}")),
            time: Some(format!("H{n}")),
            location: Some(format!("L{n}")),
            sport: Some(format!("S{n}")),
        }
    }

    #[test]
    fn gaps_make_sequences_ragged() {
        let mut gap = full("1");
        gap.time = None;
        let seq = FieldSequence::from_blocks([full("0"), gap, full("2")]);
        assert_eq!(seq.lens(), [3, 3, 2, 3, 3]);
        // positional drift after a gap
        assert_eq!(seq.times, vec!["H0", "H2"]);
    }

    #[test]
    fn field_names_match_export_header() {
        let names: Vec<&str> = Field::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["Teams", "Date", "Time", "Location", "Sport"]);
    }
}
