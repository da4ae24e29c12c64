use crate::data::Account;
use std::io::Write;

/// Basic JSON exporter for `Account`s, pretty-printed with two spaces of indentation.
pub(crate) fn write_accounts<W: std::io::Write>(
    writer: W,
    accounts: &[Account],
) -> Result<(), anyhow::Error> {
    let mut wtr = std::io::BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut wtr, accounts)?;
    wtr.flush()?;
    Ok(())
}
