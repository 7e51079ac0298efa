//! Build script to generate the AGLFN lookup table.
//!
//! The table is emitted as a static slice sorted by codepoint so that lookups
//! can binary search it.

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const OUT_FILE: &str = "aglfn_codegen.rs";

fn main() {
    println!("cargo:rerun-if-changed=resources/aglfn.txt");

    let path = Path::new(&env::var("OUT_DIR").unwrap()).join(OUT_FILE);
    let mut file = BufWriter::new(File::create(&path).unwrap());
    let names = include_str!("resources/aglfn.txt");

    let mut entries = Vec::new();
    for line in names.lines().filter(|l| !l.starts_with('#') && !l.trim().is_empty()) {
        let mut split = line.split(';');
        match (split.next(), split.next(), split.next(), split.next()) {
            (Some(cpoint), Some(ps_name), Some(_unic_name), None) => {
                let cpoint = u32::from_str_radix(cpoint, 16)
                    .unwrap_or_else(|_| panic!("bad codepoint in line: '{line}'"));
                entries.push((cpoint, ps_name.to_string()));
            }
            _ => panic!("malformed line: '{line}'"),
        }
    }
    entries.sort();
    for pair in entries.windows(2) {
        assert!(pair[0].0 != pair[1].0, "duplicate codepoint {:04X}", pair[0].0);
    }

    writeln!(&mut file, "static AGLFN: &[(u32, &str)] = &[").unwrap();
    for (cpoint, name) in &entries {
        writeln!(&mut file, "    (0x{cpoint:04X}, \"{name}\"),").unwrap();
    }
    writeln!(&mut file, "];").unwrap();
}
