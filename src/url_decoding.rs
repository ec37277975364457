//! Tokenizing and decoding of `application/x-www-form-urlencoded` style query strings.

use std::collections::HashMap;

use crate::error::Error;

/// Decode a single key or value. `+` becomes a space before percent-decoding, so an encoded
/// `%2B` still decodes to a literal `+`.
pub fn decode_component(encoded: &str) -> Result<String, Error> {
    let mut bytes = encoded.bytes();

    while let Some(byte) = bytes.next() {
        if byte != b'%' {
            continue;
        }

        let first = bytes.next();
        let second = bytes.next();

        match (first, second) {
            (Some(a), Some(b)) if a.is_ascii_hexdigit() && b.is_ascii_hexdigit() => {}
            _ => {
                return Err(Error::MalformedEscape {
                    input: encoded.to_string(),
                })
            }
        }
    }

    let spaced = encoded.replace('+', " ");

    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| Error::InvalidEncoding {
            input: encoded.to_string(),
        })
}

/// Iterator over the raw `key=value` tokens of a query string.
///
/// A key is a non-empty run of anything but `&` and `=`; the `=value` part is optional and the
/// value runs up to the next `&`. Bytes that can't start a key are skipped.
pub struct Pairs<'a> {
    rest: &'a str,
}

impl<'a> Pairs<'a> {
    pub fn new(query: &'a str) -> Self {
        Self { rest: query }
    }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest.trim_start_matches(&['&', '='][..]);

        if rest.is_empty() {
            self.rest = rest;
            return None;
        }

        let key_end = rest.find(&['&', '='][..]).unwrap_or(rest.len());
        let (key, rest) = rest.split_at(key_end);

        let rest = rest.strip_prefix('=').unwrap_or(rest);

        let value_end = rest.find('&').unwrap_or(rest.len());
        let (value, rest) = rest.split_at(value_end);

        self.rest = rest;

        Some((key, value))
    }
}

/// Decode every pair of `query` into a map. Later duplicates overwrite earlier ones.
pub fn map(query: &str) -> Result<HashMap<String, String>, Error> {
    let mut map = HashMap::new();

    for (key, value) in Pairs::new(query) {
        map.insert(decode_component(key)?, decode_component(value)?);
    }

    Ok(map)
}
