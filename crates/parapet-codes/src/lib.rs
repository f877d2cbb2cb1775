//! Building code and jurisdiction mapping for Parapet
//!
//! Maps a jurisdiction identity to the code regime in force there:
//! code cycle, ASCE edition, basic wind speed, HVHZ designation, and
//! any product-approval requirements. Backed by an embedded annotated
//! JSON table with a county -> state -> global-default fallback
//! ladder; every answer carries provenance.

pub mod error;
pub mod hvhz;
pub mod jsonc;
pub mod mapper;
pub mod table;

pub use error::{CodeTableError, Result};
pub use hvhz::{is_hvhz_county, validate_hvhz_consistency, HVHZ_COUNTIES, HVHZ_STATE};
pub use mapper::CodeMapper;
