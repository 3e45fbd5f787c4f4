// standard library
use std::io::BufRead;

// xstools modules
use xstools_endf::CardReader;

// crate modules
use crate::core::Header;
use crate::error::{Error, Result};

use super::{all_required, count, number, required};

// external crates
use log::{debug, trace, warn};

// ! Header block
pub(super) fn read_header<R: BufRead>(cards: &mut CardReader<R>) -> Result<Header> {
    debug!("-----------------------");
    debug!(" Parsing Header block ");
    debug!("-----------------------");

    // title line, kept as free text
    let title = cards.next_line()?.trim().to_string();
    debug!("Title       = {title:?}");

    // CONT record
    let cont = cards.next_card()?;
    let line = cards.line_number();
    let zaid = number(cont.value(0), "ZA", line)?;
    let awr = required(cont.value(1), "AWR", line)?;
    let n_dilutions = count(cont.value(3), "NZ", line)?;
    let n_title_words = match cont.value(5) {
        Some(_) => count(cont.value(5), "NTW", line)?,
        None => 1,
    };
    debug!("ZA          = {zaid}");
    debug!("AWR         = {awr}");
    debug!("Dilutions   = {n_dilutions}");

    // LIST record
    let list = cards.next_card()?;
    let line = cards.line_number();
    let temperature = required(list.value(0), "TEMP", line)?;
    let n_neutron_groups = count(list.value(2), "NGN", line)?;
    let n_gamma_groups = count(list.value(3), "NGG", line)?;
    let n_words = count(list.value(4), "NW", line)?;
    debug!("Temperature = {temperature}");
    debug!("NGN         = {n_neutron_groups}");
    debug!("NGG         = {n_gamma_groups}");
    debug!("NW          = {n_words}");

    // remainder of LIST, sliced positionally
    let fields = cards.read_fields(n_words)?;
    let line = cards.line_number();

    let dilution_start = n_title_words;
    let energy_start = dilution_start + n_dilutions;
    let gamma_start = energy_start + n_neutron_groups + 1;
    if gamma_start > n_words {
        return Err(Error::InvalidSectionGeometry(format!(
            "header list of {n_words} words cannot hold {n_title_words} title words, \
             {n_dilutions} dilutions and {} energy bounds",
            n_neutron_groups + 1
        )));
    }

    let gamma_end = (gamma_start + n_gamma_groups + 1).min(n_words);
    if gamma_end - gamma_start < n_gamma_groups + 1 {
        warn!(
            "Header list holds {} of {} gamma bounds",
            gamma_end - gamma_start,
            n_gamma_groups + 1
        );
    }

    let dilutions = all_required(&fields[dilution_start..energy_start], "dilution", line)?;
    let energy_bounds = all_required(&fields[energy_start..gamma_start], "energy bound", line)?;
    let gamma_bounds = all_required(&fields[gamma_start..gamma_end], "gamma bound", line)?;
    trace!("Dilutions   = {dilutions:?}");
    trace!("Energies    = {energy_bounds:?}");
    trace!("Gamma       = {gamma_bounds:?}");

    // trailing control record must carry zeros
    let trailer = cards.next_card()?;
    let sum = trailer.trailer_sum();
    if sum != 0 {
        return Err(Error::HeaderChecksumMismatch {
            line: cards.line_number(),
            sum,
        });
    }
    debug!("Header read successful");

    Ok(Header {
        title,
        material: cont.mat,
        zaid,
        awr,
        n_dilutions,
        n_title_words,
        temperature,
        n_neutron_groups,
        n_gamma_groups,
        n_words,
        dilutions,
        energy_bounds,
        gamma_bounds,
    })
}
