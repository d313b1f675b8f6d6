use grn_identity::edge::RawEdge;
use std::fs::File;
use std::io::BufReader;

#[allow(dead_code)]
pub fn load_edges(table_file: &str) -> Vec<RawEdge> {
    let file = File::open(table_file).unwrap();
    serde_json::from_reader(BufReader::new(file)).unwrap()
}

#[allow(dead_code)]
pub fn records(pairs: &[(&str, &str)]) -> Vec<RawEdge> {
    pairs.iter().map(|&(from, to)| RawEdge::new(from, to)).collect()
}

#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
