//! Print Request Model

use serde::{Deserialize, Serialize};

/// Body of `POST /api/print`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrintRequest {
    pub content: Option<String>,
    #[serde(rename = "printerName")]
    pub printer_name: Option<String>,
}

/// Content printed when the request carries none
pub const TEST_PRINT_CONTENT: &str = "Teste de impressão do Sistema de Restaurante.";
