//! Pricing Module
//!
//! This module prices selections against the catalog tables.
//! Missing lookups degrade to zero (see [`calculator`]).

mod calculator;

pub use calculator::*;
