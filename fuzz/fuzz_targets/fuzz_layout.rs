//! Fuzz target for layout derivation.
//!
//! Tests that block, mask and nice functions never panic, even on unsorted
//! or oversized gaps.

#![no_main]

use arbitrary::Arbitrary;
use card_info::format::{number_blocks, number_mask, number_nice};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    number: &'a str,
    gaps: Vec<u8>,
    lengths: Vec<u8>,
    digit: &'a str,
    delimiter: &'a str,
}

fuzz_target!(|input: Input| {
    let gaps: Vec<usize> = input.gaps.iter().map(|&g| g as usize).collect();
    let lengths: Vec<usize> = input.lengths.iter().map(|&l| l as usize).collect();

    // These should never panic
    let blocks = number_blocks(&gaps, &lengths);
    assert_eq!(blocks.len(), gaps.len() + 1);
    let _ = number_mask(&blocks, input.digit, input.delimiter);
    let _ = number_nice(input.number, &gaps);

    // Sorted gaps over ASCII digits keep every digit
    let mut sorted = gaps.clone();
    sorted.sort_unstable();
    sorted.dedup();
    let digits: String = input.number.chars().filter(|c| c.is_ascii_digit()).collect();
    let nice = number_nice(&digits, &sorted);
    let regrouped: String = nice.chars().filter(|c| *c != ' ').collect();
    assert_eq!(regrouped, digits, "Nice grouping should preserve digits");
});
