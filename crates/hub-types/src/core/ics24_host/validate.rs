use super::error::ValidationError as Error;

/// Path separator (ie. forward slash '/')
const PATH_SEPARATOR: char = '/';
const VALID_SPECIAL_CHARS: &str = "._+-#[]<>";

/// Prefix of channel identifiers allocated by the channel handshake.
pub const CHANNEL_PREFIX: &str = "channel-";

/// Default validator function for identifiers.
///
/// A valid identifier only contain ASCII alphanumeric characters or one of
/// `.`, `_`, `+`, `-`, `#`, `[`, `]`, `<`, `>` and has a length between
/// `min` and `max` (inclusive).
pub fn validate_identifier(id: &str, min: usize, max: usize) -> Result<(), Error> {
    debug_assert!(max >= min);

    if id.is_empty() {
        return Err(Error::empty());
    }

    if id.contains(PATH_SEPARATOR) {
        return Err(Error::contain_separator(id.to_string()));
    }

    if id.len() < min || id.len() > max {
        return Err(Error::invalid_length(id.to_string(), id.len(), min, max));
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || VALID_SPECIAL_CHARS.contains(c))
    {
        return Err(Error::invalid_character(id.to_string()));
    }

    Ok(())
}

/// Port identifiers are between 2 and 128 characters long.
pub fn validate_port_identifier(id: &str) -> Result<(), Error> {
    validate_identifier(id, 2, 128)
}

/// Channel identifiers are between 8 and 64 characters long.
pub fn validate_channel_identifier(id: &str) -> Result<(), Error> {
    validate_identifier(id, 8, 64)
}

/// Parses the sequence number out of a `channel-{N}` identifier.
///
/// Only identifiers allocated by the channel handshake qualify; this is how a
/// hop is told apart from a slash inside a base denomination.
pub fn parse_channel_sequence(id: &str) -> Result<u64, Error> {
    let sequence = id
        .strip_prefix(CHANNEL_PREFIX)
        .ok_or_else(|| Error::invalid_channel_sequence(id.to_string()))?;

    if sequence.is_empty() || !sequence.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid_channel_sequence(id.to_string()));
    }

    sequence
        .parse::<u64>()
        .map_err(|_| Error::invalid_channel_sequence(id.to_string()))
}
