//! Span - 源码位置信息

/// 源码位置范围 (字节偏移)
pub type Span = std::ops::Range<usize>;

/// 把字节偏移换算成 1 起始的 (行, 列)
///
/// 偏移超出源码长度时按源码末尾计算。列按字符计数，而不是字节。
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }

    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = source[line_start..offset].chars().count() + 1;

    (line, column)
}
