use itemsets::{apriori, find_frequent_itemsets, FrequencyOrder};
use rand::Rng;
use std::time::Instant;

fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Vec<Vec<u32>> {
    let mut rng = rand::thread_rng();

    (0..num_transactions)
        .map(|_| {
            let random_factor: f64 = rng.r#gen();
            let num_items_in_tx =
                (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
            let num_items_in_tx = num_items_in_tx.min(num_items);

            let mut tx = Vec::with_capacity(num_items_in_tx);
            for _ in 0..num_items_in_tx {
                let density_check: f64 = rng.r#gen();
                if density_check < density {
                    let item = rng.gen_range(0..num_items as u32);
                    if !tx.contains(&item) {
                        tx.push(item);
                    }
                }
            }
            tx
        })
        .collect()
}

fn print_memory_stats() {
    #[cfg(target_os = "macos")]
    {
        use std::process::Command;
        if let Ok(output) = Command::new("ps")
            .args(["-o", "rss=", "-p", &std::process::id().to_string()])
            .output()
        {
            if let Ok(rss) = String::from_utf8(output.stdout) {
                if let Ok(kb) = rss.trim().parse::<usize>() {
                    println!("  Memory: {} MB", kb / 1024);
                }
            }
        }
    }
}

fn stress_test_large_inputs() {
    println!("\n=== Large Input Test ===");

    let configs = vec![
        ("10K x 50", 10_000, 50, 15),
        ("50K x 80", 50_000, 80, 20),
        ("100K x 100", 100_000, 100, 25),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        println!("\nTesting: {}", name);
        println!("  Generating {} transactions...", num_tx);

        let start_gen = Instant::now();
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);
        println!("  Generated in {:?}", start_gen.elapsed());
        print_memory_stats();

        println!("  Running FP-Growth (min_support=0.05)...");
        let start = Instant::now();

        match find_frequent_itemsets(&transactions, 0.05, FrequencyOrder::Descending) {
            Ok(result) => {
                println!("  ✓ Completed in {:?}", start.elapsed());
                println!("  Found {} patterns", result.len());
                print_memory_stats();
            }
            Err(err) => {
                println!("  ✗ {}", err);
            }
        }
    }
}

fn stress_test_engines() {
    println!("\n=== FP-Growth vs Apriori ===");

    let configs = vec![("2K x 30", 2_000, 30, 8), ("5K x 40", 5_000, 40, 10)];

    for (name, num_tx, num_items, avg_size) in configs {
        println!("\nDataset: {}", name);
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);
        let min_support = 0.05;

        let start = Instant::now();
        let fp_result = find_frequent_itemsets(&transactions, min_support, FrequencyOrder::Descending);
        let fp_time = start.elapsed();

        let start = Instant::now();
        let apriori_result = apriori(&transactions, min_support);
        let apriori_time = start.elapsed();

        match (fp_result, apriori_result) {
            (Ok(mut fp), Ok(mut level_wise)) => {
                fp.sort_canonical();
                level_wise.sort_canonical();
                println!("  FP-Growth: {:?}, {} patterns", fp_time, fp.len());
                println!("  Apriori:   {:?}, {} patterns", apriori_time, level_wise.len());
                println!("  Agree: {}", fp == level_wise);
            }
            (Err(err), _) | (_, Err(err)) => println!("  ✗ {}", err),
        }
    }
}

fn stress_test_extreme_low_support() {
    println!("\n=== Extreme Low Support Test ===");

    let transactions = generate_transactions(20_000, 100, 20, 0.6);
    let support_levels = vec![0.05, 0.02, 0.01, 0.005];

    for &min_support in &support_levels {
        println!("\nTesting min_support = {}", min_support);
        let start = Instant::now();

        match find_frequent_itemsets(&transactions, min_support, FrequencyOrder::Descending) {
            Ok(result) => {
                println!("  Time: {:?}", start.elapsed());
                println!("  Patterns: {}", result.len());
                println!("  Max itemset size: {}", result.max_itemset_size());
                print_memory_stats();

                if result.len() > 1_000_000 {
                    println!("  ⚠ Pattern explosion detected!");
                }
            }
            Err(err) => {
                println!("  ✗ {}", err);
            }
        }
    }
}

fn stress_test_dense_data() {
    println!("\n=== Dense Data Test (worst case) ===");

    let configs = vec![
        ("Dense 80%", 10_000, 50, 40, 0.8),
        ("Dense 90%", 10_000, 50, 45, 0.9),
    ];

    for (name, num_tx, num_items, avg_size, density) in configs {
        println!("\nTesting: {}", name);
        let transactions = generate_transactions(num_tx, num_items, avg_size, density);

        for order in [FrequencyOrder::Descending, FrequencyOrder::Ascending] {
            let start = Instant::now();
            match find_frequent_itemsets(&transactions, 0.3, order) {
                Ok(result) => {
                    println!("  {:?}: {:?}, {} patterns", order, start.elapsed(), result.len());
                    print_memory_stats();
                }
                Err(err) => println!("  ✗ {}", err),
            }
        }
    }
}

fn main() {
    println!("=== FP-Growth Stress Testing Suite ===");
    println!("Testing memory limits and performance degradation\n");

    stress_test_large_inputs();
    stress_test_engines();
    stress_test_extreme_low_support();
    stress_test_dense_data();

    println!("\n=== Stress Testing Complete ===");
}
