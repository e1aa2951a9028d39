//! Recovers secret names from the text printed by `security dump-keychain`.
//!
//! The dump lists every keychain item as a run of attribute lines such as
//!
//! ```text
//! class: "genp"
//! attributes:
//!     "acct"<blob>="vault"
//!     "svce"<blob>="anthropic-api-key"
//! ```
//!
//! Items are not delimited in any reliable way, so the parser tracks whether
//! the most recent account line belonged to the reserved account and takes
//! the next service line as the item's name.

const ACCOUNT_TAG: &str = "\"acct\"";
const SERVICE_TAG: &str = "\"svce\"";
const BLOB_PREFIX: &str = "<blob>=\"";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside any item that belongs to the reserved account.
    Scanning,
    /// Saw the reserved account; the next service line names the secret.
    AwaitingService,
}

/// Returns the service names of all items stored under `account`, sorted.
///
/// Duplicates are kept: every matching item contributes one name. An account
/// line always decides the state afresh, so an item whose service line never
/// arrives before the next account line contributes nothing.
pub fn parse_service_names(dump: &str, account: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut state = State::Scanning;

    for line in dump.lines() {
        if let Some(value) = attribute_value(line, ACCOUNT_TAG) {
            state = if value == account {
                State::AwaitingService
            } else {
                State::Scanning
            };
            continue;
        }

        if state == State::AwaitingService {
            if let Some(value) = attribute_value(line, SERVICE_TAG) {
                names.push(value.to_string());
                state = State::Scanning;
            }
        }
    }

    names.sort();
    names
}

/// Extracts `<value>` from a line of the form `    "tag"<blob>="<value>"`.
///
/// Returns `None` for other tags, empty values, and non-blob forms such as
/// `<blob>=<NULL>` or hex-encoded values.
fn attribute_value<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    let value = line
        .trim_start()
        .trim_end_matches('\r')
        .strip_prefix(tag)?
        .strip_prefix(BLOB_PREFIX)?
        .strip_suffix('"')?;

    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
