//! Card number layout: blocks, masks and grouped display.
//!
//! A brand describes its layout with gap positions (digit offsets where the
//! number is split) and allowed lengths. From those this module derives
//!
//! - the block widths of the longest allowed number,
//! - an input mask such as `0000 0000 0000 0000`,
//! - the "nice" grouped rendering of whatever digits were actually entered.
//!
//! # Example
//!
//! ```
//! use card_info::format::{number_blocks, number_mask, number_nice};
//!
//! // American Express: 4-6-5
//! let blocks = number_blocks(&[4, 10], &[15]);
//! assert_eq!(blocks, vec![4, 6, 5]);
//! assert_eq!(number_mask(&blocks, "0", " "), "0000 000000 00000");
//! assert_eq!(number_nice("3782822463", &[4, 10]), "3782 822463");
//! ```

/// Gap positions used when no brand is resolved.
pub const DEFAULT_GAPS: [usize; 3] = [4, 8, 12];

/// Allowed lengths used when no brand is resolved.
pub const DEFAULT_LENGTHS: [usize; 8] = [12, 13, 14, 15, 16, 17, 18, 19];

/// Computes block widths for the longest allowed length.
///
/// Gaps are walked from last to first; each block spans from its gap to the
/// end of the remaining length, and whatever is left before the first gap is
/// the first block. Widths saturate at zero when a gap lies past the
/// remaining length.
///
/// # Example
///
/// ```
/// use card_info::format::number_blocks;
///
/// assert_eq!(number_blocks(&[4, 8, 12], &[16]), vec![4, 4, 4, 4]);
/// assert_eq!(number_blocks(&[4, 8, 12], &[12, 19]), vec![4, 4, 4, 7]);
/// ```
pub fn number_blocks(gaps: &[usize], lengths: &[usize]) -> Vec<usize> {
    let mut remaining = lengths.last().copied().unwrap_or(0);
    let mut blocks = Vec::with_capacity(gaps.len() + 1);

    for &gap in gaps.iter().rev() {
        let width = remaining.saturating_sub(gap);
        remaining -= width;
        blocks.push(width);
    }
    blocks.push(remaining);

    blocks.reverse();
    blocks
}

/// Builds a mask string from block widths.
///
/// Each block becomes `width` copies of `digit`; blocks are joined with
/// `delimiter`.
///
/// # Example
///
/// ```
/// use card_info::format::number_mask;
///
/// assert_eq!(number_mask(&[4, 4, 4, 4], "0", " "), "0000 0000 0000 0000");
/// assert_eq!(number_mask(&[4, 6, 5], "9", "-"), "9999-999999-99999");
/// ```
pub fn number_mask(blocks: &[usize], digit: &str, delimiter: &str) -> String {
    let capacity = blocks.iter().sum::<usize>() * digit.len()
        + blocks.len().saturating_sub(1) * delimiter.len();
    let mut mask = String::with_capacity(capacity);

    for (i, &width) in blocks.iter().enumerate() {
        if i > 0 {
            mask.push_str(delimiter);
        }
        for _ in 0..width {
            mask.push_str(digit);
        }
    }

    mask
}

/// Groups the entered digits by gap positions, separated by single spaces.
///
/// Works on partial numbers and on numbers longer than any allowed length:
/// digits past the last gap form one final, unbounded group.
///
/// # Example
///
/// ```
/// use card_info::format::number_nice;
///
/// assert_eq!(number_nice("424242", &[4, 8, 12]), "4242 42");
/// assert_eq!(number_nice("4242424242424242", &[4, 8, 12]), "4242 4242 4242 4242");
/// assert_eq!(number_nice("", &[4, 8, 12]), "");
/// ```
pub fn number_nice(number: &str, gaps: &[usize]) -> String {
    let len = number.len();
    let mut offsets = Vec::with_capacity(gaps.len() + 2);
    offsets.push(0);
    offsets.extend_from_slice(gaps);
    offsets.push(len);

    let mut groups: Vec<&str> = Vec::with_capacity(offsets.len());
    for pair in offsets.windows(2) {
        let (start, next) = (pair[0], pair[1]);
        if start >= len {
            break;
        }
        let end = next.min(len).max(start);
        if let Some(group) = number.get(start..end) {
            groups.push(group);
        }
    }

    groups.join(" ")
}
