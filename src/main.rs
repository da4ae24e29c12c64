use anyhow::Context;
use compute::enrich_accounts;
use read::read_accounts;
use std::path::Path;
use write::write_accounts;

mod compute;
mod data;
mod read;
mod write;

const INPUT_PATH: &str = "real_accounts.json";
const OUTPUT_PATH: &str = "real_accounts_fixed.json";

/// Loads, enriches, then writes. The output file is only created once every
/// account went through, so a bad input never leaves a half-written file behind.
fn run(input: &Path, output: &Path) -> Result<usize, anyhow::Error> {
    log::info!("reading accounts from {}", input.display());
    let file = std::fs::File::open(input)
        .with_context(|| format!("cannot open {}", input.display()))?;
    let mut accounts =
        read_accounts(file).with_context(|| format!("cannot parse {}", input.display()))?;
    let count = enrich_accounts(&mut accounts)?;
    log::info!("writing {count} accounts to {}", output.display());
    let file = std::fs::File::create(output)
        .with_context(|| format!("cannot create {}", output.display()))?;
    write_accounts(file, &accounts).with_context(|| format!("cannot write {}", output.display()))?;
    Ok(count)
}

fn completion_message(count: usize) -> String {
    format!("✅ Fixed {count} accounts with link and followers fields")
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    let count = run(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH))?;
    println!("{}", completion_message(count));
    Ok(())
}
