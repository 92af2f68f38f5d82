// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use error::InputError;
use item::Item;
use itemizer::Itemizer;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::mem;

pub struct TransactionReader<'a, R> {
    reader: R,
    path: String,
    itemizer: &'a mut Itemizer,
    skipped_header: bool,
}

impl<'a> TransactionReader<'a, BufReader<File>> {
    pub fn open(
        path: &str,
        itemizer: &'a mut Itemizer,
    ) -> Result<TransactionReader<'a, BufReader<File>>, InputError> {
        let file = File::open(path).map_err(|source| InputError::Io {
            path: String::from(path),
            source,
        })?;
        Ok(TransactionReader::new(BufReader::new(file), path, itemizer))
    }
}

impl<'a, R: BufRead> TransactionReader<'a, R> {
    pub fn new(reader: R, path: &str, itemizer: &'a mut Itemizer) -> TransactionReader<'a, R> {
        TransactionReader {
            reader,
            path: String::from(path),
            itemizer,
            skipped_header: false,
        }
    }

    fn read_line(&mut self, line: &mut String) -> Result<usize, InputError> {
        line.clear();
        let path = &self.path;
        self.reader.read_line(line).map_err(|source| InputError::Io {
            path: path.clone(),
            source,
        })
    }
}

impl<'a, R: BufRead> Iterator for TransactionReader<'a, R> {
    type Item = Result<Vec<Item>, InputError>;
    fn next(&mut self) -> Option<Result<Vec<Item>, InputError>> {
        let mut line = String::new();
        // The first line holds column headers, which carry no items.
        if !self.skipped_header {
            self.skipped_header = true;
            match self.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }
        }
        loop {
            match self.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }
            // Blank lines aren't rows. A row of empty cells is still a
            // transaction, just one with no items.
            if line.trim().is_empty() {
                continue;
            }
            let itemizer = &mut self.itemizer;
            // Empty cells are missing items, not an item named "".
            let mut splits = split_cells(&line)
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(|s| itemizer.id_of(s))
                .collect::<Vec<Item>>();

            // Some input files have transactions with duplicates items.
            // Remove any duplicates here.
            splits.sort();
            dedupe_sorted(&mut splits);

            return Some(Ok(splits));
        }
    }
}

// Splits a CSV line into cells. A double quoted cell may contain commas,
// and "" inside quotes is a literal quote.
fn split_cells(line: &str) -> Vec<String> {
    let mut cells: Vec<String> = vec![];
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = line.trim_end_matches(|c: char| c == '\n' || c == '\r').chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                cell.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => cells.push(mem::replace(&mut cell, String::new())),
            _ => cell.push(c),
        }
    }
    cells.push(cell);
    cells
}

// Reads every transaction in the file at `path`, then renumbers the items
// so that item id order matches the order items are displayed in.
pub fn load_transactions(path: &str, itemizer: &mut Itemizer) -> Result<Vec<Vec<Item>>, InputError> {
    let transactions = TransactionReader::open(path, itemizer)?.collect::<Result<Vec<_>, _>>()?;
    Ok(renumber(transactions, itemizer))
}

fn renumber(transactions: Vec<Vec<Item>>, itemizer: &mut Itemizer) -> Vec<Vec<Item>> {
    let remap = itemizer.reorder_sorted();
    transactions
        .into_iter()
        .map(|transaction| {
            let mut t: Vec<Item> = transaction.iter().map(|item| remap[item.as_index()]).collect();
            debug_assert!(t.iter().all(|item| !item.is_null()));
            t.sort();
            t
        })
        .collect()
}

fn dedupe_sorted(v: &mut Vec<Item>) {
    let mut i = 0;
    let mut k = 0;
    while i < v.len() {
        v[k] = v[i];
        while i < v.len() && v[k] == v[i] {
            i += 1;
        }
        k += 1;
    }
    assert!(k <= v.len());
    v.resize(k, Item::null());
}
