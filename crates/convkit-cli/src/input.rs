use std::io::Read;

/// Returns the literal argument, or everything readable from `stdin` when the argument
/// is absent or `-`. One trailing line ending is removed from stdin input, since shells
/// and `echo` add one.
pub fn resolve_input(arg: Option<&str>, mut stdin: impl Read) -> std::io::Result<String> {
    match arg {
        Some(text) if text != "-" => Ok(text.to_string()),
        _ => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            strip_line_ending(&mut buf);
            Ok(buf)
        }
    }
}

fn strip_line_ending(buf: &mut String) {
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_argument_wins() {
        let input = resolve_input(Some("abc\n"), "ignored".as_bytes()).unwrap();
        assert_eq!(input, "abc\n");
    }

    #[test]
    fn dash_and_missing_read_stdin() {
        assert_eq!(resolve_input(Some("-"), "from stdin\n".as_bytes()).unwrap(), "from stdin");
        assert_eq!(resolve_input(None, "x\r\n".as_bytes()).unwrap(), "x");
    }

    #[test]
    fn only_one_line_ending_is_removed() {
        assert_eq!(resolve_input(None, "a\n\n".as_bytes()).unwrap(), "a\n");
        assert_eq!(resolve_input(None, "".as_bytes()).unwrap(), "");
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        assert!(resolve_input(None, &[0xff, 0xfe][..]).is_err());
    }
}
