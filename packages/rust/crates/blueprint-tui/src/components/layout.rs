//! Grid arithmetic shared by the page and panel layouts

/// Gap between grid columns and rows
pub const GRID_GAP: u16 = 1;

/// Pick a column count from `(min_width, columns)` breakpoints, widest first
pub fn columns_for(width: u16, breakpoints: &[(u16, u16)], fallback: u16) -> u16 {
    breakpoints
        .iter()
        .find(|(min_width, _)| width >= *min_width)
        .map_or(fallback, |(_, columns)| *columns)
        .max(1)
}

/// Width of one column when `total` is split into `columns` with gaps
pub fn column_width(total: u16, columns: u16, gap: u16) -> u16 {
    let columns = columns.max(1);
    total.saturating_sub(gap.saturating_mul(columns - 1)) / columns
}

/// Left edge of column `column`
pub fn column_x(origin: u16, column: u16, width: u16, gap: u16) -> u16 {
    origin.saturating_add(column.saturating_mul(width.saturating_add(gap)))
}

/// Rows needed to lay `count` cells out in `columns` columns
pub fn grid_rows(count: usize, columns: u16) -> u16 {
    u16::try_from(count.div_ceil(usize::from(columns.max(1)))).unwrap_or(u16::MAX)
}

/// Row and column of cell `index` in row-major order
pub fn grid_position(index: usize, columns: u16) -> (u16, u16) {
    let columns = usize::from(columns.max(1));
    let row = u16::try_from(index / columns).unwrap_or(u16::MAX);
    let column = u16::try_from(index % columns).unwrap_or(0);
    (row, column)
}
