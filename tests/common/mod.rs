// tests/common/mod.rs
//
// Small hand-made export shared by the integration tests.
//
// Events (display order): 333, 222, 333bf, 333A, 222A
// Defaults:               4,   3,   2,     3,    2
//
//   2003BRUC01  Ron van Bruchem   [4, 2, 2, 3, 2]
//   2005AKKE01  Erik Akkersdijk   [3, 3, 1, 3, 2]
//   2007VALK01  Mats Valk         [2, 1, 2, 2, 2]
//   2009ZEMD01  Feliks Zemdegs    [1, 3, 2, 1, 2]
//   2010NONA01  (no subid 1 row)  [4, 3, 2, 3, 1]
#![allow(dead_code)]

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use sum_of_ranks::archive;
use sum_of_ranks::dataset::Dataset;
use sum_of_ranks::tables::Bundle;
use zip::write::SimpleFileOptions;

pub const EVENTS: &str = "\
id\tname\trank\tformat\tcellName
333\t3x3x3 Cube\t10\ttime\t3x3x3
222\t2x2x2 Cube\t20\ttime\t2x2x2
333bf\t3x3x3 Blindfolded\t70\ttime\t3x3 blindfolded
444\t4x4x4 Cube\t30\ttime\t4x4x4
";

pub const PERSONS: &str = "\
id\tsubid\tname\tcountryId\tgender
2003BRUC01\t1\tRon van Bruchem\tNetherlands\tm
2003BRUC01\t2\tRon v. Bruchem\tNetherlands\tm
2005AKKE01\t1\tErik Akkersdijk\tNetherlands\tm
2007VALK01\t1\tMats Valk\tNetherlands\tm
2009ZEMD01\t1\tFeliks Zemdegs\tAustralia\tm
2010NONA01\t2\tNo Name\tAustralia\tm
";

pub const RANKS_SINGLE: &str = "\
personId\teventId\tbest\tworldRank\tcontinentRank\tcountryRank
2009ZEMD01\t333\t473\t1\t1\t1
2007VALK01\t333\t474\t2\t1\t1
2005AKKE01\t333\t708\t3\t2\t2
2007VALK01\t222\t49\t1\t1\t1
2003BRUC01\t222\t88\t2\t2\t2
2005AKKE01\t333bf\t2311\t1\t1\t1
";

pub const RANKS_AVERAGE: &str = "\
personId\teventId\tbest\tworldRank\tcontinentRank\tcountryRank
2009ZEMD01\t333\t621\t1\t1\t1
2007VALK01\t333\t685\t2\t1\t1
2010NONA01\t222\t121\t1\t1\t1
";

pub fn bundle() -> Bundle {
    Bundle::from_tables([
        ("Events", EVENTS),
        ("Persons", PERSONS),
        ("RanksSingle", RANKS_SINGLE),
        ("RanksAverage", RANKS_AVERAGE),
    ])
}

pub fn dataset() -> Dataset {
    Dataset::from_bundle(&bundle()).unwrap()
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("sum_of_ranks_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Zip `tables` the way the export names its entries.
pub fn write_zip(path: &Path, tables: &[(&str, &str)]) {
    let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
    for (name, text) in tables {
        zip.start_file(archive::entry_name(name), SimpleFileOptions::default()).unwrap();
        zip.write_all(text.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}

pub fn write_fixture_zip(path: &Path) {
    write_zip(
        path,
        &[
            ("Events", EVENTS),
            ("Persons", PERSONS),
            ("RanksSingle", RANKS_SINGLE),
            ("RanksAverage", RANKS_AVERAGE),
        ],
    );
}

/// One event, `ranks[i]` being the world rank of person `P0000 + i`.
pub fn single_event(ranks: &[u32]) -> Dataset {
    let mut persons = String::from("id\tsubid\tname\n");
    let mut singles = String::from("personId\teventId\tworldRank\n");
    for (i, r) in ranks.iter().enumerate() {
        persons.push_str(&format!("P{i:04}\t1\tPerson {i}\n"));
        singles.push_str(&format!("P{i:04}\t333\t{r}\n"));
    }
    let bundle = Bundle::from_tables([
        ("Events", s("id\tcellName\trank\n333\t3x3x3\t10\n")),
        ("Persons", persons),
        ("RanksSingle", singles),
        ("RanksAverage", s("personId\teventId\tworldRank\n")),
    ]);
    Dataset::from_bundle(&bundle).unwrap()
}

fn s(text: &str) -> String {
    text.to_string()
}

/// Bare HTTP/1.1 responder on 127.0.0.1 for exactly `requests` connections.
/// `routes` maps request paths to bodies; anything else is a 404. Returns the
/// base URL and a handle yielding the paths requested, in order.
pub fn serve(routes: Vec<(String, Vec<u8>)>, requests: usize) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for _ in 0..requests {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            let path = request_line.split_whitespace().nth(1).unwrap_or("/").to_string();
            loop {
                let mut header = String::new();
                if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
                    break;
                }
            }

            match routes.iter().find(|(p, _)| *p == path) {
                Some((_, body)) => {
                    write!(
                        stream,
                        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                        body.len()
                    )
                    .unwrap();
                    stream.write_all(body).unwrap();
                }
                None => {
                    write!(stream, "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                        .unwrap();
                }
            }
            stream.flush().unwrap();
            seen.push(path);
        }
        seen
    });

    (base, handle)
}

/// Listing page naming `export`, plus the fixture archive served under that name.
pub fn export_routes(export: &str) -> Vec<(String, Vec<u8>)> {
    let src = tmp_dir(&format!("served_{export}")).join("served.zip");
    write_fixture_zip(&src);
    let listing = format!("<p>Latest: <a href=\"/{export}\">{export}</a></p>");
    vec![
        ("/export.html".to_string(), listing.into_bytes()),
        (format!("/{export}"), fs::read(&src).unwrap()),
    ]
}

/// Backdate `path`'s mtime by `by`.
pub fn age(path: &Path, by: std::time::Duration) {
    let f = File::options().write(true).open(path).unwrap();
    f.set_modified(std::time::SystemTime::now() - by).unwrap();
}
