// Author: Dustin Pilgrim
// License: MIT

use super::*;

/// Looks a link up among the sections and options parsed so far.
///
/// Resolution is single-pass: forward references and the option currently being
/// built are not visible.
pub(super) fn resolve_link<'d>(link: &Link<'_>, doc: &'d Document) -> Option<&'d ConfigOption> {
    doc.section(link.section)?.option(link.option)
}
