use crate::entropy::{read_block, EntropySource};
use crate::error::Result;
use crate::format::OutputFormat;
use crate::reading::Reading;

/// Options for the cast command
#[derive(Debug, Clone, Default)]
pub struct CastOptions {
    pub source: EntropySource,
    pub format: OutputFormat,
}

/// Cast a hexagram and keep the full reading
pub fn cast_reading(options: &CastOptions) -> Result<Reading> {
    let block = read_block(&options.source)?;
    let reading = Reading::cast(&block)?;
    log::info!(
        "cast hexagram {} from {}",
        reading.number(),
        reading.entropy
    );
    Ok(reading)
}

/// Cast a hexagram and render it in the requested format
pub fn cast(options: &CastOptions) -> Result<String> {
    let reading = cast_reading(options)?;
    match options.format {
        OutputFormat::Text => Ok(reading.to_string()),
        OutputFormat::Json => {
            let mut output = serde_json::to_string_pretty(&reading)?;
            output.push('\n');
            Ok(output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_from_hex() {
        let options = CastOptions {
            source: EntropySource::Hex("10b940".into()),
            ..Default::default()
        };
        let output = cast(&options).unwrap();
        assert!(output.starts_with("Hexagram 60 ䷻"));
        assert!(output.contains("Limitation"));
        assert!(output.contains("Lower trigram: ☱ Lake"));
        assert!(output.contains("Upper trigram: ☵ Water"));
    }

    #[test]
    fn test_cast_json() {
        let options = CastOptions {
            source: EntropySource::Hex("000000".into()),
            format: OutputFormat::Json,
        };
        let output = cast(&options).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["hexagram"]["number"], 2);
        assert_eq!(json["entropy"], "000000");
    }

    #[test]
    fn test_cast_seeded_is_reproducible() {
        let options = CastOptions {
            source: EntropySource::Seed("a question".into()),
            ..Default::default()
        };
        assert_eq!(cast(&options).unwrap(), cast(&options).unwrap());
    }

    #[test]
    fn test_cast_rejects_bad_block() {
        let options = CastOptions {
            source: EntropySource::Hex("10b94000".into()),
            ..Default::default()
        };
        assert!(cast(&options).is_err());
    }
}
