//! Domain types: the opaque account record, delivery outcomes and the sink port.

pub mod delivery;
pub mod ports;
pub mod record;
