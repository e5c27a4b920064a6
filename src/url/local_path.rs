use crate::config::DEFAULT_INDEX_FILE;
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use url::Url;

/// Maps a URL to the local file path its body is stored at
///
/// Uses the default index filename, see [`map_path_with_index`].
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use url::Url;
/// use site_mirror::url::map_path;
///
/// let root = Path::new("out");
/// let url = Url::parse("http://a.com/x/").unwrap();
/// assert_eq!(map_path(&url, root), root.join("x").join("index.html"));
/// ```
pub fn map_path(url: &Url, output_root: &Path) -> PathBuf {
    map_path_with_index(url, output_root, DEFAULT_INDEX_FILE)
}

/// Maps a URL to a local file path under `output_root`
///
/// The URL's path component is joined onto the root segment by segment, so
/// the platform's separator is used. Query strings and fragments play no
/// part: `/page?x=1` and `/page?x=2` map to the same file. When the path is
/// empty or ends with `/`, `index_file` is appended.
///
/// Each segment is percent-decoded (invalid UTF-8 is replaced), so `/a%20b`
/// is stored as `a b`. A decoded `/`, `\` or NUL becomes `_` so one URL
/// segment always stays one path component. `.` segments are dropped and
/// `..` segments never climb above `output_root`.
///
/// Pure: no filesystem access happens here.
pub fn map_path_with_index(url: &Url, output_root: &Path, index_file: &str) -> PathBuf {
    let url_path = url.path();
    let mut local = output_root.to_path_buf();
    let mut depth = 0usize;

    for raw in url_path.split('/') {
        let segment = decode_segment(raw);
        match segment.as_ref() {
            "" | "." => {}
            ".." => {
                if depth > 0 {
                    local.pop();
                    depth -= 1;
                }
            }
            segment => {
                local.push(segment);
                depth += 1;
            }
        }
    }

    if url_path.is_empty() || url_path.ends_with('/') {
        local.push(index_file);
    }

    local
}

/// Percent-decodes one path segment and replaces separator characters
fn decode_segment(raw: &str) -> Cow<'_, str> {
    let decoded = percent_decode_str(raw).decode_utf8_lossy();
    if decoded.contains(['/', '\\', '\0']) {
        Cow::Owned(decoded.replace(['/', '\\', '\0'], "_"))
    } else {
        decoded
    }
}
