extern crate argparse;
extern crate fnv;
extern crate itertools;
extern crate ordered_float;

#[cfg(test)]
#[macro_use]
extern crate approx;
#[cfg(test)]
extern crate tempfile;

mod apriori;
mod command_line_args;
mod error;
mod generate_rules;
mod index;
mod item;
mod item_counter;
mod itemizer;
mod itemset;
mod ranking;
mod report;
mod rule;
mod transaction_reader;
mod vec_sets;

use apriori::mine;
use command_line_args::parse_args_or_exit;
use command_line_args::Arguments;
use generate_rules::generate_rules;
use itemizer::Itemizer;
use ranking::{rank_itemsets, rank_rules};
use report::write_report_file;
use transaction_reader::load_transactions;

use std::error::Error;
use std::process;
use std::time::Instant;

fn mine_apriori(args: &Arguments) -> Result<(), Box<dyn Error>> {
    println!("Mining data set: {}", args.input_file_path);
    let start = Instant::now();

    println!("Loading transactions...");
    let timer = Instant::now();
    let mut itemizer = Itemizer::new();
    let transactions = load_transactions(&args.input_file_path, &mut itemizer)?;
    println!(
        "Loaded {} transactions with {} distinct items in {} ms.",
        transactions.len(),
        itemizer.len(),
        timer.elapsed().as_millis()
    );

    println!("Mining frequent itemsets with min_support={}...", args.min_support);
    let timer = Instant::now();
    let itemsets = mine(&transactions, args.min_support)?;
    println!(
        "Apriori generated {} frequent itemsets of up to {} items in {} ms.",
        itemsets.len(),
        itemsets.max_size(),
        timer.elapsed().as_millis()
    );
    if itemsets.is_empty() {
        println!("No itemset reaches min_support; the report will be empty.");
    }

    println!("Generating rules with min_confidence={}...", args.min_confidence);
    let timer = Instant::now();
    let rules = generate_rules(&itemsets, args.min_confidence)?;
    println!(
        "Generated {} rules in {} ms.",
        rules.len(),
        timer.elapsed().as_millis()
    );

    let ranked_itemsets = rank_itemsets(itemsets.to_itemsets());
    let ranked_rules = rank_rules(rules);

    println!("Writing report to {}", args.output_report_path);
    write_report_file(
        &args.output_report_path,
        &ranked_itemsets,
        &ranked_rules,
        args.min_support,
        args.min_confidence,
        &itemizer,
    )?;
    println!(
        "Reported {} itemsets and {} rules.",
        ranked_itemsets.len(),
        ranked_rules.len()
    );

    println!("Total runtime: {} ms", start.elapsed().as_millis());

    Ok(())
}

fn main() {
    let arguments = parse_args_or_exit();

    if let Err(err) = mine_apriori(&arguments) {
        println!("Error: {}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::mine_apriori;
    use command_line_args::Arguments;
    use std::fs;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn write_csv(rows: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "item1,item2,item3").unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file
    }

    fn run(input: &NamedTempFile, min_support: f64, min_confidence: f64) -> String {
        let dir = tempdir().unwrap();
        let output = dir.path().join("example-run.txt");
        let args = Arguments {
            input_file_path: String::from(input.path().to_str().unwrap()),
            output_report_path: String::from(output.to_str().unwrap()),
            min_support,
            min_confidence,
        };
        mine_apriori(&args).unwrap();
        fs::read_to_string(&output).unwrap()
    }

    #[test]
    fn test_market_baskets() {
        let input = write_csv(&["A,B,", "A,B,C", "A,,", "B,C,"]);
        let report = run(&input, 0.5, 0.6);
        assert_eq!(
            report,
            "==Frequent itemsets (min_sup=0.5)\n\
             [A], 75.0000%\n\
             [B], 75.0000%\n\
             [C], 50.0000%\n\
             [A, B], 50.0000%\n\
             [B, C], 50.0000%\n\
             ==High-confidence association rules (min_conf=0.6)\n\
             [A] => [B] (Conf: 66.67%, Supp: 50.0000%)\n\
             [B] => [C] (Conf: 66.67%, Supp: 50.0000%)\n"
        );
    }

    #[test]
    fn test_support_too_high_gives_empty_sections() {
        let input = write_csv(&["A,B,", "A,B,C", "A,,", "B,C,"]);
        let report = run(&input, 1.0, 0.5);
        assert_eq!(
            report,
            "==Frequent itemsets (min_sup=1.0)\n\
             ==High-confidence association rules (min_conf=0.5)\n"
        );
    }

    #[test]
    fn test_weakest_itemsets_dropped() {
        // Item i appears alone in 21 - i rows, so there are 21 frequent
        // itemsets with distinct supports and the rarest one is dropped.
        let mut rows: Vec<String> = vec![];
        for i in 0..21 {
            for _ in 0..(21 - i) {
                rows.push(format!("i{:02},,", i));
            }
        }
        let rows: Vec<&str> = rows.iter().map(|s| s.as_str()).collect();
        let input = write_csv(&rows);
        let report = run(&input, 0.001, 0.0);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 2 + 20);
        assert!(lines[1].starts_with("[i00], "));
        assert!(lines[20].starts_with("[i19], "));
        assert!(!report.contains("[i20]"));
    }

    #[test]
    fn test_missing_input_writes_no_report() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("example-run.txt");
        let args = Arguments {
            input_file_path: String::from("/no/such/input.csv"),
            output_report_path: String::from(output.to_str().unwrap()),
            min_support: 0.5,
            min_confidence: 0.5,
        };
        assert!(mine_apriori(&args).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_deterministic() {
        let input = write_csv(&["a,b,c", "b,c,d", "a,c,d", "a,b,d", "c,d,", "a,b,"]);
        let first = run(&input, 0.3, 0.5);
        let second = run(&input, 0.3, 0.5);
        assert_eq!(first, second);
        assert!(first.contains("==High-confidence association rules (min_conf=0.5)\n["));
    }
}
