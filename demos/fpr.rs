#![allow(clippy::uninlined_format_args)]

use comfy_table::{
    Cell, CellAlignment, ContentArrangement, Table,
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
};
use rand::{Rng, distr::Alphanumeric};
use seeded_bloom_rs::{
    BloomFilter, BloomFilterOps, BloomFilterStats, common::bits2hr,
};
use std::collections::HashSet;

const TEST_SAMPLES: usize = 10_000; // Number of unknown elements to test for FPR

fn generate_random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("╔═══════════════════════════════════════════════╗");
    println!("║  Bloom Filter - False Positive Rate Tester    ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    let capacities = [1_000, 10_000, 100_000];
    let target_fprs = [0.01, 0.05, 0.1];

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Capacity").set_alignment(CellAlignment::Center),
            Cell::new("Target FPR").set_alignment(CellAlignment::Center),
            Cell::new("Bits (m)").set_alignment(CellAlignment::Center),
            Cell::new("Hashes (k)").set_alignment(CellAlignment::Center),
            Cell::new("Memory").set_alignment(CellAlignment::Center),
            Cell::new("False Positives").set_alignment(CellAlignment::Center),
            Cell::new("Observed FPR").set_alignment(CellAlignment::Center),
            Cell::new("Deviation").set_alignment(CellAlignment::Center),
        ]);

    for &capacity in &capacities {
        for &target_fpr in &target_fprs {
            print!(
                "Testing capacity={}, target_fpr={:.2}%: ",
                capacity,
                target_fpr * 100.0
            );

            let mut filter = BloomFilter::with_rate(capacity, target_fpr)?;
            let known_elements: Vec<String> =
                (0..capacity).map(|_| generate_random_string(32)).collect();
            let known_set: HashSet<&String> = known_elements.iter().collect();

            for element in &known_elements {
                filter.add(element.as_bytes())?;
            }

            let mut false_positives = 0;
            let mut tested = 0;
            while tested < TEST_SAMPLES {
                let unknown = generate_random_string(32);
                if known_set.contains(&unknown) {
                    continue;
                }
                tested += 1;
                if filter.check(unknown.as_bytes())? {
                    false_positives += 1;
                }
            }

            let observed_fpr = false_positives as f64 / TEST_SAMPLES as f64;
            let deviation = (observed_fpr - target_fpr) / target_fpr * 100.0;
            println!("Done!");

            table.add_row(vec![
                Cell::new(format!("{}", capacity)),
                Cell::new(format!("{:.2}%", target_fpr * 100.0)),
                Cell::new(format!("{}", filter.bit_vector_size())),
                Cell::new(format!("{}", filter.num_hashes())),
                Cell::new(bits2hr(filter.bit_vector_size())),
                Cell::new(format!("{}/{}", false_positives, TEST_SAMPLES)),
                Cell::new(format!("{:.4}%", observed_fpr * 100.0)),
                Cell::new(format!("{:+.2}%", deviation)),
            ]);
        }
    }

    println!("\nResults:");
    println!("{}", table);

    Ok(())
}
