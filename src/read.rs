use crate::data::Account;
use anyhow::Context;

/// Simple JSON importer for `Account`s. Anything that is a JSON array loads; the
/// elements are checked later, when they get enriched.
pub(crate) fn read_accounts<R: std::io::Read>(reader: R) -> Result<Vec<Account>, anyhow::Error> {
    let accounts: Vec<Account> = serde_json::from_reader(std::io::BufReader::new(reader))
        .context("expected a JSON array of accounts")?;
    log::debug!("loaded {} accounts", accounts.len());
    Ok(accounts)
}

#[cfg(test)]
mod tests {
    use crate::read::read_accounts;
    use serde_json::json;

    #[test]
    fn read_keeps_order_and_fields() {
        let accounts_json = br#"[
            {"username": "zed", "bio": "last alphabetically"},
            {"username": "abc", "followers": 1200},
            {"username": "mid", "tags": ["a", "b"]}
        ]"#;
        let accounts = read_accounts(&accounts_json[..]).unwrap();
        assert_eq!(
            accounts,
            [
                json!({"username": "zed", "bio": "last alphabetically"}),
                json!({"username": "abc", "followers": 1200}),
                json!({"username": "mid", "tags": ["a", "b"]}),
            ]
        );
    }

    #[test]
    fn read_empty_array() {
        assert!(read_accounts(&b"[]"[..]).unwrap().is_empty());
    }

    #[test]
    fn read_accepts_non_objects() {
        let accounts = read_accounts(&br#"[1, "two", null]"#[..]).unwrap();
        assert_eq!(accounts, [json!(1), json!("two"), json!(null)]);
    }

    #[test]
    fn read_malformed() {
        assert!(read_accounts(&br#"[{"username": "abc""#[..]).is_err());
        assert!(read_accounts(&b"not json at all"[..]).is_err());
    }

    #[test]
    fn read_not_an_array() {
        assert!(read_accounts(&br#"{"username": "abc"}"#[..]).is_err());
    }
}
