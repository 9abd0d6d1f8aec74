//! JSON persistence for binary quadratic models.
//!
//! - [`serializable`]: model ⇄ [`SerializableBqm`] record.
//! - [`io`]: record ⇄ JSON text on any reader/writer or file path.
//! - [`utils`]: bitstring energies and best-sample export.
//! - [`conversions`]: BINARY model ⇄ Ising operator.
//! - [`commands`]: the `qubo` binary's subcommands.
//!
//! Nothing here logs; every failure is returned as a [`QuboError`].

pub mod commands;
pub mod conversions;
pub mod error;
pub mod io;
pub mod serializable;
pub mod utils;

pub use conversions::{convert_ising_to_qubo, convert_qubo_to_ising, IsingModel};
pub use error::QuboError;
pub use io::{
    load_qubo, load_qubo_from_path, qubo_from_str, qubo_to_string, save_qubo, save_qubo_to_path,
    save_qubo_with, SaveOptions,
};
pub use serializable::{bqm_from_serializable, bqm_to_serializable, SerializableBqm};
pub use utils::{
    evaluate_bitstring_for_qubo, save_sample_set, save_sample_set_to_path, Bits, OptimalSample,
    SCHEMA_VERSION,
};

pub use qubo_bqm;
