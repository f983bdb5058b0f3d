/// Takes the next character from the slice. If none is found, the slice is left as-is.
pub const fn take_1(bytes: &[u8]) -> (Option<u8>, &[u8]) {
    let [b, bytes @ ..] = bytes else {
        return (None, bytes);
    };

    (Some(*b), bytes)
}

/// Like `take_1`, but doesn't consume the token
pub fn peek_1(bytes: &[u8]) -> Option<u8> {
    let [b, _bytes @ ..] = bytes else { return None };

    Some(*b)
}

/// Consumes spaces, tabs and carriage returns, but never a `\n`. Returns how many bytes were
/// consumed.
pub fn take_blanks(bytes: &[u8]) -> (usize, &[u8]) {
    let i = bytes
        .iter()
        .position(|&b| !matches!(b, b' ' | b'\t' | b'\r'))
        .unwrap_or(bytes.len());

    (i, &bytes[i..])
}

/// Takes everything up to the next `\n`, consuming the `\n` without adding it to the output.
///
/// Returns `None` only once `bytes` is empty. A final line without a trailing `\n` is still a line.
pub fn take_line(bytes: &[u8]) -> (Option<&[u8]>, &[u8]) {
    if bytes.is_empty() {
        return (None, bytes);
    }

    match bytes.iter().position(|&b| b == b'\n') {
        Some(i) => (Some(&bytes[..i]), &bytes[i + 1..]),
        None => (Some(bytes), &[]),
    }
}

/// Splits `bytes` into lines, numbered from 1
pub fn lines(mut bytes: &[u8]) -> impl Iterator<Item = (usize, &[u8])> {
    let mut n = 0;

    std::iter::from_fn(move || {
        let (line, rest) = take_line(bytes);
        bytes = rest;
        n += 1;

        line.map(|line| (n, line))
    })
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_take_blanks_stops_at_newline() {
        let (n, rest) = super::take_blanks(b" \t\r\n1");

        assert_eq!(n, 3);
        assert_eq!(rest, b"\n1");
    }

    #[test]
    fn test_take_line_without_trailing_newline() {
        let (line, rest) = super::take_line(b"1 0");

        assert_eq!(line, Some(b"1 0".as_slice()));
        assert_eq!(rest, b"");
        assert_eq!(super::take_line(rest).0, None);
    }

    #[test]
    fn test_lines_are_numbered() {
        let lines: Vec<_> = super::lines(b"a\n\nb\n").collect();

        assert_eq!(
            lines,
            [(1, b"a".as_slice()), (2, b"".as_slice()), (3, b"b".as_slice())]
        );
    }
}
