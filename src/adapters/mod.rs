// Adapters: concrete implementations of the domain ports.
// - directory: in-memory employee registry + submission ledger
// - shipping: reqwest client for the external shipping service

pub mod directory;
pub mod shipping;
