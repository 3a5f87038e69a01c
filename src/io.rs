//! Reading dictionaries and texts with unknown encodings.

use std::{
    fs::File,
    io::{self, Read},
    path::Path,
    string::String,
    vec::Vec,
};

/// Reads the contents of a file into a String, detecting and decoding non-UTF-8 contents.
pub fn read_to_string<P: AsRef<Path>>(path: P) -> io::Result<String> {
    decode_to_string(File::open(path)?)
}

/// Reads everything from `reader` and decodes it into a String.
///
/// A byte order mark wins over the guess. Otherwise the encoding is guessed from the contents:
/// valid UTF-8 stays UTF-8 and anything else is decoded with the most likely legacy encoding.
/// Malformed sequences are replaced with U+FFFD rather than failing the read.
pub fn decode_to_string<R: Read>(mut reader: R) -> io::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(&bytes, true);
    let encoding = detector.guess(None, true);

    let (text, actual, had_errors) = encoding.decode(&bytes);
    if had_errors {
        log::warn!(
            "input contained malformed {} sequences which were replaced",
            actual.name()
        );
    }
    log::trace!("decoded {} bytes as {}", bytes.len(), actual.name());

    Ok(text.into_owned())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn utf8_passes_through() {
        let text = decode_to_string("naïve\ncafé\n".as_bytes()).unwrap();
        assert_eq!(text, "naïve\ncafé\n");
    }

    #[test]
    fn bom_is_stripped() {
        let text = decode_to_string(&b"\xEF\xBB\xBFhello\n"[..]).unwrap();
        assert_eq!(text, "hello\n");
    }

    #[test]
    fn legacy_encodings_are_decoded() {
        let (bytes, _, _) = encoding_rs::WINDOWS_1252
            .encode("Le café est très bon à Paris pendant l'été, même en hiver.\n");
        let text = decode_to_string(&bytes[..]).unwrap();
        assert_eq!(
            text,
            "Le café est très bon à Paris pendant l'été, même en hiver.\n"
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_to_string("/this/path/does/not/exist.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
