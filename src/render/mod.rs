pub(crate) mod composite;
pub(crate) mod filter;
pub(crate) mod preview;
