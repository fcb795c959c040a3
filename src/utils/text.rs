use crate::utils::error::{Result, UtilsError};
use encoding_rs::{Encoding, UTF_8};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Decodes `bytes` with `encoding`.
///
/// A byte order mark takes precedence over `encoding` and is stripped.
/// Malformed sequences are replaced with U+FFFD.
pub fn decode_text(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

/// Looks up an encoding by its WHATWG label (`utf-8`, `windows-1252`, `gbk`...).
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| UtilsError::UnknownEncoding {
        label: label.to_string(),
    })
}

/// Reads the whole file at `path` as text, UTF-8 unless `encoding` says otherwise.
pub fn read_file_as_text<P: AsRef<Path>>(
    path: P,
    encoding: Option<&'static Encoding>,
) -> Result<String> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(UtilsError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut bytes = Vec::new();
    File::open(path)?.read_to_end(&mut bytes)?;

    Ok(decode_text(&bytes, encoding.unwrap_or(UTF_8)))
}

/// Same as [`read_file_as_text`] with the encoding given by label.
pub fn read_file_as_text_with_label<P: AsRef<Path>>(path: P, label: &str) -> Result<String> {
    let encoding = resolve_encoding(label)?;
    read_file_as_text(path, Some(encoding))
}
