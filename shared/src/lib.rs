pub mod buckets;
pub mod data;
pub mod filter;
pub mod normalize;
pub mod view;
