use crate::table::HEXAGRAMS;

/// One line per hexagram, in King Wen order
pub fn list_hexagrams() -> String {
    let mut output = String::new();
    for h in HEXAGRAMS.iter() {
        output.push_str(&format!(
            "{:>2} {} {:<4} {:<12} {}\n",
            h.number, h.symbol, h.chinese, h.roman, h.english
        ));
    }
    output
}
