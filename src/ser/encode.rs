use std::borrow::Cow;

use percent_encoding::AsciiSet;

/// As defined in https://url.spec.whatwg.org/#query-percent-encode-set
///
/// The set of characters that need to be encoded in a _query_ string
/// are:
/// - CONTROL characters
/// - SPACE (but it is encoded separately, as `+` or `%20`)
/// - U+0022 ("), U+0023 (#), U+003C (<), and U+003E (>).
///
/// NOTE: the querystring control characters are added here because
/// this set is only ever applied to a single key or value. Commas and
/// pipes are left alone so that delimited lists stay readable.
const MINIMAL_QS_SET: &AsciiSet = &percent_encoding::CONTROLS
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    // `+` is used to represent a space in query strings
    .add(b'+')
    // a literal `%` would be read back as an escape
    .add(b'%')
    // denote nested keys
    .add(b'[')
    .add(b']')
    // key, value separator
    .add(b'=')
    // denote key-value pairs
    .add(b'&');

/// [`MINIMAL_QS_SET`] with space percent-encoded as `%20`.
const STRICT_QS_SET: &AsciiSet = &MINIMAL_QS_SET.add(b' ');

/// Keys written by `deepObject` carry their own bracket addressing and
/// already-escaped member names, which must survive escaping.
const MINIMAL_KEY_SET: &AsciiSet = &MINIMAL_QS_SET
    .remove(b'[')
    .remove(b']')
    .remove(b'%');

/// As defined in https://url.spec.whatwg.org/#application-x-www-form-urlencoded-percent-encode-set
///
/// The application/x-www-form-urlencoded percent-encode set contains all code points, except the ASCII alphanumeric,
/// U+002A (*), U+002D (-), U+002E (.), and U+005F (_).
const FORM_URLENCODED_SET: &AsciiSet = &percent_encoding::NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// How a space is written once percent-encoding is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Space {
    /// `a b` -> `a+b`
    Plus,
    /// `a b` -> `a%20b`
    Percent,
}

/// Percent-encodes `b` with `set`, replacing any space the set leaves
/// untouched according to `space`.
///
/// The function returns an iterator to avoid allocations when no encoding is needed.
fn encode<'a>(
    b: &'a [u8],
    set: &'static AsciiSet,
    space: Space,
) -> impl Iterator<Item = Cow<'a, [u8]>> + 'a {
    percent_encoding::percent_encode(b, set).map(move |s| {
        if space == Space::Plus && s.as_bytes().contains(&b' ') {
            Cow::Owned(
                s.as_bytes()
                    .iter()
                    .map(|b| if *b == b' ' { b'+' } else { *b })
                    .collect(),
            )
        } else {
            Cow::Borrowed(s.as_bytes())
        }
    })
}

fn encode_str<'a>(input: &'a str, set: &'static AsciiSet, space: Space) -> Cow<'a, str> {
    let mut chunks = encode(input.as_bytes(), set, space);
    let Some(first) = chunks.next() else {
        return Cow::Borrowed("");
    };
    // a single chunk pointing into the input means nothing needed escaping
    let mut out = match first {
        Cow::Borrowed(bytes) if bytes.len() == input.len() && bytes.as_ptr() == input.as_ptr() => {
            return Cow::Borrowed(input);
        }
        first => first.into_owned(),
    };
    for chunk in chunks {
        out.extend_from_slice(&chunk);
    }
    // every byte produced is either copied from valid UTF-8 input or ASCII
    Cow::Owned(String::from_utf8_lossy(&out).into_owned())
}

/// Escapes a delimited `form` value: space becomes `+`.
pub fn encode_plus(input: &str) -> Cow<'_, str> {
    encode_str(input, MINIMAL_QS_SET, Space::Plus)
}

/// Escapes a `spaceDelimited` or `pipeDelimited` value: space becomes `%20`.
pub fn encode_strict(input: &str) -> Cow<'_, str> {
    encode_str(input, STRICT_QS_SET, Space::Percent)
}

/// Escapes the key of an entry at query-string assembly time.
pub fn encode_key(input: &str, use_form_encoding: bool) -> Cow<'_, str> {
    if use_form_encoding {
        encode_str(input, FORM_URLENCODED_SET, Space::Percent)
    } else {
        encode_str(input, MINIMAL_KEY_SET, Space::Plus)
    }
}

/// Escapes the value of an entry at query-string assembly time.
pub fn encode_value(input: &str, use_form_encoding: bool) -> Cow<'_, str> {
    if use_form_encoding {
        encode_str(input, FORM_URLENCODED_SET, Space::Percent)
    } else {
        encode_str(input, MINIMAL_QS_SET, Space::Plus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_for_space() {
        assert_eq!(encode_plus("a b,c"), "a+b,c");
        assert_eq!(encode_plus("role,admin"), "role,admin");
        assert_eq!(encode_plus("1+1=2&x"), "1%2B1%3D2%26x");
    }

    #[test]
    fn strict_space() {
        assert_eq!(encode_strict("3 4 5"), "3%204%205");
        assert_eq!(encode_strict("3|4|5"), "3|4|5");
        assert_eq!(encode_strict("50% off"), "50%25%20off");
    }

    #[test]
    fn unchanged_input_is_borrowed() {
        assert!(matches!(encode_strict("plain"), Cow::Borrowed("plain")));
        assert!(matches!(encode_plus(""), Cow::Borrowed("")));
        assert_eq!(encode_plus("\"ab"), "%22ab");
    }

    #[test]
    fn non_ascii_is_escaped() {
        assert_eq!(encode_plus("café"), "caf%C3%A9");
        assert_eq!(encode_value("café", true), "caf%C3%A9");
    }

    #[test]
    fn keys_keep_brackets_unless_form_encoded() {
        assert_eq!(encode_key("filter[a b][0]", false), "filter[a+b][0]");
        assert_eq!(encode_key("f[a%5Db]", false), "f[a%5Db]");
        assert_eq!(encode_key("filter[a][0]", true), "filter%5Ba%5D%5B0%5D");
    }
}
