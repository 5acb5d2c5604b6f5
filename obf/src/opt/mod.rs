pub mod best_fit;
pub mod estimate;
pub mod obf_bpp;
pub mod order;
