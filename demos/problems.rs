//! Runs every utility on a few sample inputs and prints the results.
//!
//! Run with: cargo run --example problems
//! Add `RUST_LOG=seqkit=trace` to see the library's diagnostics.

use seqkit::{
    deduplicate, deduplicate_by_scan, factorial_with, filter_even, filter_odd,
    is_even_by_last_digit, is_palindrome, longest_word, maximum, minimum, FactorialStrategy,
    UtilResult,
};
use tracing_subscriber::EnvFilter;

fn main() -> UtilResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("========================================");
    println!(" seqkit sample problems");
    println!("========================================\n");

    // -------------------------------------------------------------------------
    // 1. Deduplication
    // -------------------------------------------------------------------------
    println!("Dedup (linear scan): {:?}", deduplicate_by_scan(&[1, 2, 3, 4, 5, 6, 7, 2, 5, 1, 4]));
    println!("Dedup (hash set):    {:?}", deduplicate(&[1, 2, 3, 4, 5, 6, 6, 3, 4, 10, 2, 1, 1]));

    // -------------------------------------------------------------------------
    // 2. Parity
    // -------------------------------------------------------------------------
    let digits = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0];
    println!("Even:                {:?}", filter_even(&digits));
    println!("Odd:                 {:?}", filter_odd(&digits));
    let long = 100_000_990_u64;
    println!(
        "{} by last digit:  {}",
        long,
        if is_even_by_last_digit(&long) { "even" } else { "odd" }
    );

    // -------------------------------------------------------------------------
    // 3. Text
    // -------------------------------------------------------------------------
    for word in ["madam", "hello"] {
        let label = format!("Palindrome {:?}:", word);
        println!("{:<21}{}", label, is_palindrome(word));
    }
    let sentence = "hi baby i love you ra no i am sigma!!!!";
    println!("Longest word:        {:?}", longest_word(sentence));

    // -------------------------------------------------------------------------
    // 4. Factorial
    // -------------------------------------------------------------------------
    for strategy in [FactorialStrategy::Recursive, FactorialStrategy::Iterative] {
        let label = format!("4! ({:?}):", strategy);
        println!("{:<21}{}", label, factorial_with(4, strategy)?);
    }

    // -------------------------------------------------------------------------
    // 5. Extrema
    // -------------------------------------------------------------------------
    let mixed = [1, 2, 3, 0, 4, 5, -6, -10, -1, 10, 100, 9];
    println!("Maximum:             {}", maximum(&mixed)?);
    println!("Minimum:             {}", minimum(&mixed)?);
    println!("Maximum of [-5, -2, -9]: {}", maximum(&[-5, -2, -9])?);

    Ok(())
}
