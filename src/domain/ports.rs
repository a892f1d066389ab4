/// Display settings the interactive shell reads, independent of where they came from.
pub trait ConfigProvider {
    /// Decimal places for rendered results; `None` prints floats with at least one decimal.
    fn precision(&self) -> Option<usize>;
    fn show_banner(&self) -> bool;
}
