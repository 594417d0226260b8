//! # Manual Entry Parser
//!
//! This module turns a block of free text typed by the user into pantry items.
//!
//! ## Grammar
//!
//! The text is split on commas and newlines. Each trimmed, non-empty segment
//! is read as
//!
//! ```text
//! segment  := quantity? unit? name
//! quantity := digits ( "." digits | "/" digits | ws+ digits "/" digits )?
//! unit     := a single alphabetic word directly after the quantity
//! name     := the remainder
//! ```
//!
//! The unit is folded back into the item name ("2 cups spinach" becomes
//! `cups spinach` with quantity 2). A segment without a leading number is a
//! name-only item, including one that opens with a bare decimal point
//! such as ".5 cup milk".
//!
//! ## Usage
//!
//! ```rust
//! use pantry_chef::parse;
//!
//! let items = parse("2 cups spinach, 1 lime\n1 avocado");
//! assert_eq!(items.len(), 3);
//! assert_eq!(items[0].name, "cups spinach");
//! assert_eq!(items[0].quantity, Some(2.0));
//! ```

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::name_normalizer::normalize;
use crate::pantry_model::PantryItem;

lazy_static! {
    static ref SEGMENT_SEPARATOR: Regex =
        Regex::new(r"[,\r\n]").expect("Segment separator pattern should be valid");
}

/// The tokens recognized in one segment of manual entry
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEntry {
    /// Parsed leading number, unset when absent or not positive
    pub quantity: Option<f64>,
    /// Alphabetic word following the number, if any
    pub unit: Option<String>,
    /// Remainder of the segment after quantity and unit
    pub name: String,
}

impl ParsedEntry {
    /// The display name with the unit folded in, normalized
    pub fn display_name(&self) -> String {
        match &self.unit {
            Some(unit) => normalize(&format!("{} {}", unit, self.name)),
            None => normalize(&self.name),
        }
    }

    /// Convert into a pantry item
    pub fn into_item(self) -> PantryItem {
        PantryItem {
            name: self.display_name(),
            quantity: self.quantity,
        }
    }
}

/// Parse a block of free text into pantry items
///
/// Never fails. Segments that carry only a number produce an item with an
/// empty name; [`crate::merge`] discards those.
pub fn parse(text: &str) -> Vec<PantryItem> {
    let items: Vec<PantryItem> = SEGMENT_SEPARATOR
        .split(text)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| parse_segment(segment).into_item())
        .collect();

    debug!("Parsed {} pantry items from manual entry", items.len());
    items
}

/// Parse one trimmed segment into its tokens
pub fn parse_segment(segment: &str) -> ParsedEntry {
    let segment = segment.trim();

    let Some((number, rest)) = split_number(segment) else {
        trace!("No leading quantity in '{}'", segment);
        return ParsedEntry {
            quantity: None,
            unit: None,
            name: segment.to_string(),
        };
    };

    let quantity = number_value(number).filter(|value| value.is_finite() && *value > 0.0);
    let (unit, name) = split_unit(rest.trim_start());

    trace!(
        "Segment '{}' -> quantity={:?}, unit={:?}, name='{}'",
        segment,
        quantity,
        unit,
        name
    );

    ParsedEntry {
        quantity,
        unit: unit.map(str::to_string),
        name: name.trim().to_string(),
    }
}

/// Split a leading number token off the segment
///
/// Returns the number text and the remainder, or `None` when the segment
/// does not start with a digit.
fn split_number(segment: &str) -> Option<(&str, &str)> {
    let whole_end = leading_digits(segment);
    if whole_end == 0 {
        return None;
    }

    let after_whole = &segment[whole_end..];
    let mut end = whole_end;

    if let Some(tail) = after_whole.strip_prefix(['.', '/']) {
        let digits = leading_digits(tail);
        if digits > 0 {
            end += 1 + digits;
        }
    } else {
        // Mixed number such as "1 1/2"
        let trimmed = after_whole.trim_start();
        let gap = after_whole.len() - trimmed.len();
        let numerator = leading_digits(trimmed);
        if gap > 0 && numerator > 0 {
            if let Some(tail) = trimmed[numerator..].strip_prefix('/') {
                let denominator = leading_digits(tail);
                if denominator > 0 {
                    end += gap + numerator + 1 + denominator;
                }
            }
        }
    }

    Some(segment.split_at(end))
}

fn leading_digits(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

/// Evaluate a number token produced by [`split_number`]
fn number_value(number: &str) -> Option<f64> {
    if let Some((whole, fraction)) = number.split_once(char::is_whitespace) {
        let whole: f64 = whole.parse().ok()?;
        return Some(whole + fraction_value(fraction.trim())?);
    }
    if number.contains('/') {
        return fraction_value(number);
    }
    number.parse().ok()
}

fn fraction_value(fraction: &str) -> Option<f64> {
    let (numerator, denominator) = fraction.split_once('/')?;
    let numerator: f64 = numerator.parse().ok()?;
    let denominator: f64 = denominator.parse().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

/// Split an optional alphabetic unit word off the front of the remainder
fn split_unit(rest: &str) -> (Option<&str>, &str) {
    let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let word = &rest[..word_end];

    if !word.is_empty() && word.chars().all(char::is_alphabetic) {
        (Some(word), &rest[word_end..])
    } else {
        (None, rest)
    }
}
