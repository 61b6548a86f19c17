use anyhow::Result;
use dia_security::Masker;

pub fn handle() -> Result<()> {
    let masker = Masker::new();

    println!("Detection rules (applied in order):");
    for (i, rule) in masker.rules().iter().enumerate() {
        println!("  {}. {} -> {}", i + 1, rule.name, rule.placeholder);
        println!("     Pattern: {}", rule.pattern());
    }

    Ok(())
}
