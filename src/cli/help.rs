use std::fmt::Write;

use crate::options::{OptionFlags, OptionTable};

const USAGE_WIDTH: usize = 36;

/// Usage text listing every option the frontend accepts, in catalog order.
#[must_use]
pub fn render_help() -> String {
    let mut out = String::new();
    out.push_str("OVERVIEW: Chic frontend invocation resolver\n\n");
    out.push_str("USAGE: chic-frontend [options] <inputs>\n\n");
    out.push_str("OPTIONS:\n");
    for option in OptionTable::chic().visible(OptionFlags::FRONTEND) {
        let _ = writeln!(out, "  {:USAGE_WIDTH$} {}", option.usage(), option.help);
    }
    out.push('\n');
    out.push_str("The resolved invocation is printed as JSON on stdout.");
    out
}
