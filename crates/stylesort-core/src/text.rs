//! Line/offset conversion helpers

/// Get line number (0-indexed) for a byte offset
pub fn offset_to_line(source: &str, offset: usize) -> usize {
    source[..offset.min(source.len())].matches('\n').count()
}

/// Calculate the byte offset for a line and column (both 0-indexed).
///
/// Columns past the end of the line clamp to the line's last byte before
/// the terminator; lines past the end of the source clamp to its length.
pub fn line_col_to_offset(source: &str, line: usize, col: usize) -> usize {
    let mut offset = 0;
    for (i, l) in source.split_inclusive('\n').enumerate() {
        if i == line {
            let content_len = l.trim_end_matches(['\n', '\r']).len();
            return offset + col.min(content_len);
        }
        offset += l.len();
    }
    source.len()
}
