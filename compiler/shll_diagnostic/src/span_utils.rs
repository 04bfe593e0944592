//! Line and column lookup for byte offsets.
//!
//! ```
//! use shll_diagnostic::span_utils::LineOffsetTable;
//!
//! let source = "f(\n  x=1,\n  y=2)";
//! let table = LineOffsetTable::build(source);
//! assert_eq!(table.line_col(source, 0), (1, 1));
//! assert_eq!(table.line_col(source, 5), (2, 3));
//! assert_eq!(table.line_text(source, 3), "  y=2)");
//! ```

/// Byte offset of every line start, built once per source.
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        offsets.extend(newline_positions(source).filter_map(|i| u32::try_from(i + 1).ok()));
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    pub fn line_of(&self, offset: u32) -> u32 {
        let idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(idx + 1).unwrap_or(u32::MAX)
    }

    /// 1-based `(line, column)`; columns count characters, not bytes.
    pub fn line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_of(offset);
        let start = self.line_start(line);
        let end = (offset as usize).min(source.len());
        let col = source
            .get(start..end)
            .map_or(0, |prefix| prefix.chars().count());
        (line, u32::try_from(col + 1).unwrap_or(u32::MAX))
    }

    /// Text of a 1-based line without its line terminator.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> &'s str {
        let start = self.line_start(line);
        let end = self
            .offsets
            .get(line as usize)
            .map_or(source.len(), |&next| next as usize);
        source
            .get(start..end)
            .unwrap_or_default()
            .trim_end_matches(['\n', '\r'])
    }

    fn line_start(&self, line: u32) -> usize {
        let idx = (line as usize).saturating_sub(1);
        self.offsets.get(idx).copied().unwrap_or(0) as usize
    }
}

fn newline_positions(source: &str) -> impl Iterator<Item = usize> + '_ {
    source
        .bytes()
        .enumerate()
        .filter_map(|(i, b)| (b == b'\n').then_some(i))
}

#[cfg(test)]
mod tests;
