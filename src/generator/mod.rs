pub(crate) mod fingerprint;
pub(crate) mod params;
pub(crate) mod seed;
pub(crate) mod sequence;
pub(crate) mod stats;
