use error::InputError;
use item::Item;
use itemizer::Itemizer;
use itemset::ItemSet;
use rule::Rule;
use std::fs::File;
use std::io::{self, BufWriter, Write};

pub fn write_report<W: Write>(
    output: &mut W,
    itemsets: &[ItemSet],
    rules: &[Rule],
    min_support: f64,
    min_confidence: f64,
    itemizer: &Itemizer,
) -> io::Result<()> {
    // {:?} keeps the decimal point on whole numbers, e.g. "1.0".
    writeln!(output, "==Frequent itemsets (min_sup={:?})", min_support)?;
    for itemset in itemsets {
        writeln!(
            output,
            "{}, {:.4}%",
            Item::item_vec_to_string(&itemset.items, itemizer),
            itemset.support * 100.0
        )?;
    }
    writeln!(
        output,
        "==High-confidence association rules (min_conf={:?})",
        min_confidence
    )?;
    for rule in rules {
        writeln!(
            output,
            "{} (Conf: {:.2}%, Supp: {:.4}%)",
            rule.to_string(itemizer),
            rule.confidence * 100.0,
            rule.support * 100.0
        )?;
    }
    Ok(())
}

pub fn write_report_file(
    path: &str,
    itemsets: &[ItemSet],
    rules: &[Rule],
    min_support: f64,
    min_confidence: f64,
    itemizer: &Itemizer,
) -> Result<(), InputError> {
    let io_error = |source: io::Error| InputError::Io {
        path: String::from(path),
        source,
    };
    let mut output = BufWriter::new(File::create(path).map_err(&io_error)?);
    write_report(
        &mut output,
        itemsets,
        rules,
        min_support,
        min_confidence,
        itemizer,
    )
    .map_err(&io_error)?;
    output.flush().map_err(&io_error)
}

#[cfg(test)]
mod tests {
    use super::{write_report, write_report_file};
    use itemizer::Itemizer;
    use itemset::ItemSet;
    use rule::Rule;
    use std::fs;
    use tempfile::tempdir;

    fn sample(itemizer: &mut Itemizer) -> (Vec<ItemSet>, Vec<Rule>) {
        let itemsets = vec![
            ItemSet::new(itemizer.to_id_vec(&["A"]), 0.75),
            ItemSet::new(itemizer.to_id_vec(&["A", "B"]), 0.5),
        ];
        let rules = vec![Rule {
            antecedent: itemizer.to_id_vec(&["A"]),
            consequent: itemizer.to_id_vec(&["B"]),
            confidence: 0.5 / 0.75,
            support: 0.5,
        }];
        (itemsets, rules)
    }

    #[test]
    fn test_write_report() {
        let mut itemizer = Itemizer::new();
        let (itemsets, rules) = sample(&mut itemizer);
        let mut output: Vec<u8> = vec![];
        write_report(&mut output, &itemsets, &rules, 0.5, 0.6, &itemizer).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "==Frequent itemsets (min_sup=0.5)\n\
             [A], 75.0000%\n\
             [A, B], 50.0000%\n\
             ==High-confidence association rules (min_conf=0.6)\n\
             [A] => [B] (Conf: 66.67%, Supp: 50.0000%)\n"
        );
    }

    #[test]
    fn test_write_empty_report() {
        let itemizer = Itemizer::new();
        let mut output: Vec<u8> = vec![];
        write_report(&mut output, &[], &[], 1.0, 0.0, &itemizer).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "==Frequent itemsets (min_sup=1.0)\n\
             ==High-confidence association rules (min_conf=0.0)\n"
        );
    }

    #[test]
    fn test_write_report_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let path = path.to_str().unwrap();
        let mut itemizer = Itemizer::new();
        let (itemsets, rules) = sample(&mut itemizer);
        write_report_file(path, &itemsets, &rules, 0.5, 0.6, &itemizer).unwrap();
        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(contents.lines().count(), 5);

        let missing_dir = dir.path().join("missing").join("report.txt");
        assert!(write_report_file(
            missing_dir.to_str().unwrap(),
            &itemsets,
            &rules,
            0.5,
            0.6,
            &itemizer
        )
        .is_err());
    }
}
