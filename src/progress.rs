/// One emission of an in-flight backend call.
///
/// Every repository operation produces exactly two of these per invocation:
/// `Loading` first, then a single terminal `Success` or `Error`. Consumers
/// must match exhaustively; there is no "null means loading" encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> Progress<T> {
    /// Terminal values end an invocation; `Loading` never does.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Progress::Loading)
    }
}
