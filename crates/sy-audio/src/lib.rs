// Audio decoding and feature extraction for synesthe.

pub mod decode;
pub mod features;
