use thiserror::Error;

/// An account record as found in the input file. We don't know (nor care about)
/// its schema beyond `username`, so it stays a raw JSON value: every other field
/// is carried through untouched, in its original key order.
pub(crate) type Account = serde_json::Value;

/// Value written into `followers`. There is no way to know the real count without
/// hitting the platform API, so every record gets this, whatever it held before.
pub const PLACEHOLDER_FOLLOWERS: u64 = 0;

/// Profile URLs are this prefix followed by the username.
pub const PROFILE_URL_PREFIX: &str = "https://tiktok.com/@";

pub const USERNAME_FIELD: &str = "username";
pub const FOLLOWERS_FIELD: &str = "followers";
pub const LINK_FIELD: &str = "link";

/// Record-level errors. Each one carries the position of the offending record in
/// the input array, which is about the only thing that helps finding it in a big file.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Account #{0} is not a JSON object")]
    NotAnObject(usize),
    #[error("Account #{0} has no `username` field")]
    MissingUsername(usize),
}
