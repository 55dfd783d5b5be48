//! Amino acid table endpoints

use axum::{extract::Path, response::Json};

use crate::amino_acid::{table, StopSymbol};
use crate::cli::{lookup_code, CodeLookup};
use crate::service::{
    handlers::{error_reply, ErrorReply},
    types::{AminoAcidsResponse, ServiceError},
};

/// The twenty-entry lookup table plus stop spellings
pub async fn list_amino_acids() -> Json<AminoAcidsResponse> {
    Json(AminoAcidsResponse {
        amino_acids: table(),
        stop_symbols: StopSymbol::ALIASES.to_vec(),
    })
}

/// Look up one code (`Leu`, `L`, `Ter`, `*`, ...)
pub async fn lookup(Path(code): Path<String>) -> Result<Json<CodeLookup>, ErrorReply> {
    lookup_code(&code).map(Json).ok_or_else(|| {
        error_reply(ServiceError::NotFound(format!(
            "Unknown amino acid code '{}'",
            code
        )))
    })
}
