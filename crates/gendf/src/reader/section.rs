// standard library
use std::io::BufRead;

// xstools modules
use xstools_endf::{Card, CardReader};

// crate modules
use crate::core::{GroupRecord, Section};
use crate::error::{Error, Result};

use super::{all_required, count, identifier, number};

// external crates
use log::{debug, trace};

// ! Section blocks
pub(super) fn read_section<R: BufRead>(cards: &mut CardReader<R>) -> Result<Option<Section>> {
    let Some(cont) = next_section_head(cards)? else {
        debug!("End of sections at line {}", cards.line_number());
        return Ok(None);
    };

    let line = cards.line_number();
    let mut section = Section {
        material: cont.mat,
        file_type: identifier(cont.mf, "MF", line)?,
        reaction: identifier(cont.mt, "MT", line)?,
        zaid: number(cont.value(0), "ZA", line)?,
        n_legendre: count(cont.value(2), "NL", line)?,
        n_dilutions: count(cont.value(3), "NZ", line)?,
        n_groups: count(cont.value(5), "NGN", line)?,
        ..Default::default()
    };

    debug!("----------------------------");
    debug!(" Parsing MF{} MT{} section", section.file_type, section.reaction);
    debug!("----------------------------");
    debug!("NL          = {}", section.n_legendre);
    debug!("NZ          = {}", section.n_dilutions);
    debug!("NGN         = {}", section.n_groups);

    // first list card of the first group
    let mut list = cards.next_card()?;
    section.temperature = list.value(0).unwrap_or_default();

    loop {
        let record = read_group(cards, &list, &section)?;
        trace!(
            "IG {:>4}: {} values, IG2LO {:?}",
            record.group,
            record.values.len(),
            record.min_secondary_group
        );
        section.records.push(record);

        // either the next group list card or the section terminator
        list = cards.next_card()?;
        if list.mt == Some(0) {
            break;
        }
    }

    debug!("Groups read = {}", section.records.len());
    Ok(Some(section))
}

/// Control card opening the next section
///
/// File (FEND) and section (SEND) terminators between sections are skipped,
/// `None` is returned for the material (MEND) or tape (TEND) end markers.
fn next_section_head<R: BufRead>(cards: &mut CardReader<R>) -> Result<Option<Card>> {
    loop {
        let card = cards.next_card()?;

        if card.mat.is_some_and(|mat| mat <= 0) {
            return Ok(None);
        }

        if card.mf == Some(0) || card.mt == Some(0) {
            trace!("Skipping terminator at line {}", cards.line_number());
            continue;
        }

        return Ok(Some(card));
    }
}

/// Read the logical record for a single group
fn read_group<R: BufRead>(
    cards: &mut CardReader<R>,
    list: &Card,
    section: &Section,
) -> Result<GroupRecord> {
    let line = cards.line_number();
    let n_words = count(list.value(4), "NW", line)?;
    let group = number(list.value(5), "IG", line)?;

    if n_words == 0 {
        return Err(Error::InvalidSectionGeometry(format!(
            "group {group} of MF{} MT{} has no words (line {line})",
            section.file_type, section.reaction
        )));
    }

    let min_secondary_group = match section.file_type {
        6 => Some(number(list.value(3), "IG2LO", line)?),
        _ => None,
    };

    // flux weights lead the record and are not kept
    let n_flux = section.width();
    if n_words < n_flux {
        return Err(Error::InvalidSectionGeometry(format!(
            "group {group} of MF{} MT{} has {n_words} words, fewer than {n_flux} flux values (line {line})",
            section.file_type, section.reaction
        )));
    }

    let fields = cards.read_fields(n_words)?;
    let values = all_required(&fields[n_flux..], "group value", cards.line_number())?;

    Ok(GroupRecord {
        group,
        min_secondary_group,
        values,
    })
}
