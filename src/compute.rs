use crate::data::{
    Account, Error, FOLLOWERS_FIELD, LINK_FIELD, PLACEHOLDER_FOLLOWERS, PROFILE_URL_PREFIX,
    USERNAME_FIELD,
};
use serde_json::Value;

/// Builds the public profile URL for `username`.
pub(crate) fn profile_link(username: &str) -> String {
    format!("{PROFILE_URL_PREFIX}{username}")
}

/// Sets `followers` and `link` on a single account. Both are overwritten if already
/// there; with `preserve_order` an existing key keeps its position and a new one is
/// appended, so enriching twice gives the exact same document as enriching once.
///
/// `index` is only used to tell the caller which record was bad.
pub(crate) fn enrich_account(account: &mut Account, index: usize) -> Result<(), Error> {
    let fields = account.as_object_mut().ok_or(Error::NotAnObject(index))?;
    let username = match fields.get(USERNAME_FIELD) {
        Some(Value::String(s)) => s.clone(),
        // anything else goes in as its JSON text
        Some(other) => other.to_string(),
        None => return Err(Error::MissingUsername(index)),
    };
    let link = profile_link(&username);
    log::trace!("account #{index}: {link}");
    fields.insert(FOLLOWERS_FIELD.to_owned(), PLACEHOLDER_FOLLOWERS.into());
    fields.insert(LINK_FIELD.to_owned(), Value::String(link));
    Ok(())
}

/// Enriches every account in place, in order, and returns how many were processed.
/// Stops at the first bad record; the ones before it are already modified, which is
/// fine since nothing gets written unless the whole slice went through.
pub(crate) fn enrich_accounts(accounts: &mut [Account]) -> Result<usize, Error> {
    for (index, account) in accounts.iter_mut().enumerate() {
        enrich_account(account, index)?;
    }
    Ok(accounts.len())
}
