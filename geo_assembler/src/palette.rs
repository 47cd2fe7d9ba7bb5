/// Fill colors cycled over sibling prefixes. Neighboring prefixes get
/// distinct colors as long as fewer than twelve siblings share a parent.
pub const PALETTE: [&str; 12] = [
    "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69", "#fccde5",
    "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f",
];

/// Returns the display color for the prefix at the given position among its
/// siblings. The ordinal comes from the airport index's sorted enumeration
/// of all prefixes of the same length, so the mapping is stable across
/// repeated aggregation passes.
pub fn prefix_color(ordinal: usize) -> String {
    PALETTE[ordinal % PALETTE.len()].to_string()
}
