/// The upstream API leaks bare non-finite numeric literals (`NaN`,
/// `Infinity`, `-Infinity`) into its JSON. Python's parser accepts them;
/// serde_json does not, so they are rewritten to `null` at the token level
/// before parsing. Occurrences inside JSON strings are left untouched.
pub fn scrub_non_finite(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if in_string {
            out.push(b);
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        match b {
            b'"' => {
                in_string = true;
                out.push(b);
                i += 1;
            }
            b'N' if bytes[i..].starts_with(b"NaN") => {
                out.extend_from_slice(b"null");
                i += 3;
            }
            b'I' if bytes[i..].starts_with(b"Infinity") => {
                out.extend_from_slice(b"null");
                i += 8;
            }
            b'-' if bytes[i + 1..].starts_with(b"Infinity") => {
                out.extend_from_slice(b"null");
                i += 9;
            }
            _ => {
                out.push(b);
                i += 1;
            }
        }
    }

    // Only ASCII tokens were replaced, so the output is still valid UTF-8.
    String::from_utf8_lossy(&out).into_owned()
}
