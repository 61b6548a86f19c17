use anyhow::{Context, Result};
use dia_security::{Masker, RedactionInfo};
use serde::Serialize;
use std::io::Read;

#[derive(Serialize)]
struct MaskOutput {
    masked_text: String,
    redactions: Vec<RedactionInfo>,
}

pub fn handle(text: Option<String>, json: bool) -> Result<()> {
    let input = match text {
        Some(text) => text,
        None => {
            // OCR dumps and pasted text aren't always valid UTF-8
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            String::from_utf8_lossy(&buf).into_owned()
        }
    };

    let (masked_text, redactions) = Masker::new().mask_with_report(&input);

    if json {
        let output = MaskOutput {
            masked_text,
            redactions,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", masked_text.trim_end_matches('\n'));
    }

    Ok(())
}
