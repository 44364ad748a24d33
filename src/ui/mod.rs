/// UI components
///
/// Every view here is a plain function returning an `Element`; the pieces
/// the market grid and the favorites view share (the watch cell, the
/// wrapped grid) are parameterized by `CellStyle` instead of duplicated.

pub mod cell;
pub mod favorites;
pub mod grid;
