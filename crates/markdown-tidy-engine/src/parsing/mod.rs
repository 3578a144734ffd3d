//! # Line-classification parsing
//!
//! Two-phase block parsing: raw text in, typed block tree out.
//!
//! 1. **Line classification** (`classify`): each line is classified into a
//!    [`LineClass`] containing local facts only (blank status, opener
//!    markers), with no reference to surrounding lines.
//!
//! 2. **Run grouping** (this module + `kinds`): a cursor walks the line
//!    sequence and groups contiguous runs into typed blocks. Openers are
//!    tried in priority order (heading, list, table) with paragraph as
//!    the fallback. Once a block opens, only its own continuation rule
//!    decides where it ends.
//!
//! Parsing never fails: any input produces some tree, in the worst case a
//! single paragraph holding the whole input.

pub mod classify;
pub mod kinds;

use crate::tree::{Document, Node};
use classify::LineClass;

/// Parses a whole document into its block tree.
///
/// Lines are split on `\n` with no line-ending normalization; a stray
/// `\r` stays part of its line's text.
pub fn parse(input: &str) -> Document {
    let lines: Vec<&str> = input.split('\n').collect();
    let classes: Vec<LineClass> = lines.iter().map(|line| LineClass::of(line)).collect();

    let mut children = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let class = &classes[i];

        // Blank lines neither open nor close a block.
        if class.is_blank {
            i += 1;
            continue;
        }

        if class.opens_heading {
            children.push(kinds::heading::parse_line(lines[i]));
            i += 1;
            continue;
        }

        if class.opens_list {
            let (list, next) = kinds::list::consume_run(&lines, &classes, i);
            children.push(list);
            children.push(Node::ListEnd);
            i = next;
            continue;
        }

        if class.opens_table {
            let (table, next) = kinds::table::consume_run(&lines, &classes, i);
            children.push(table);
            i = next;
            continue;
        }

        let (paragraph, next) = kinds::paragraph::consume_run(&lines, &classes, i);
        children.push(paragraph);
        i = next;
    }

    Document::new(children)
}
