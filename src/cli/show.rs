use crate::error::Result;
use crate::format::OutputFormat;
use crate::pipeline::{trigrams_for_hexagram, Trigram};
use crate::table::{hexagram_info, HexagramInfo};
use serde::Serialize;

#[derive(Serialize)]
struct HexagramSummary<'a> {
    #[serde(flatten)]
    info: &'a HexagramInfo,
    lower: Trigram,
    upper: Trigram,
}

/// Describe a hexagram by King Wen number
pub fn show_hexagram(number: u8, format: OutputFormat) -> Result<String> {
    let info = hexagram_info(number)?;
    let (lower, upper) = trigrams_for_hexagram(number)?;

    if format == OutputFormat::Json {
        let summary = HexagramSummary { info, lower, upper };
        let mut output = serde_json::to_string_pretty(&summary)?;
        output.push('\n');
        return Ok(output);
    }

    let mut output = String::new();
    output.push_str(&format!("Hexagram {} {}\n", info.number, info.symbol));
    output.push_str(&format!("  Chinese: {}\n", info.chinese));
    output.push_str(&format!("  Pinyin: {}\n", info.roman));
    output.push_str(&format!("  English: {}\n", info.english));
    output.push_str(&format!("  Upper trigram: {}\n", upper));
    output.push_str(&format!("  Lower trigram: {}\n", lower));
    Ok(output)
}
