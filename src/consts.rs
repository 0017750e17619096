pub(crate) const N_CELLS: usize = 81;

// houses are numbered rows first, then columns, then blocks
pub(crate) const COL_OFFSET: u8 = 9;
pub(crate) const BLOCK_OFFSET: u8 = 18;
