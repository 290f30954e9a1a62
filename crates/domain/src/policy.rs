use serde::{Deserialize, Serialize};

/// A policy record as stored in the external document store. Amounts
/// and dates are optional; missing values render as placeholders
/// instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub numero_poliza: String,
    pub contratante: String,
    #[serde(default)]
    pub fecha_fin: Option<String>,
    #[serde(default)]
    pub fecha_proximo_pago: Option<String>,
    #[serde(default)]
    pub pago_total_o_prima_total: Option<f64>,
    #[serde(default)]
    pub pago_parcial: Option<f64>,
    /// Payment frequency label, e.g. "ANUAL" or "MENSUAL"
    #[serde(default)]
    pub forma_pago: Option<String>,
}

/// Which report a policy record is being read for. Each kind selects
/// the due-date and amount fields once, instead of re-branching on a
/// collection-name string per access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Vencimientos,
    PagosParciales,
}

impl RecordKind {
    /// The concept word used in subject lines
    pub fn concept(self) -> &'static str {
        match self {
            Self::Vencimientos => "Vencimiento",
            Self::PagosParciales => "Pago Parcial",
        }
    }

    pub fn due_date(self, record: &PolicyRecord) -> Option<&str> {
        match self {
            Self::Vencimientos => record.fecha_fin.as_deref(),
            Self::PagosParciales => record.fecha_proximo_pago.as_deref(),
        }
    }

    pub fn amount(self, record: &PolicyRecord) -> Option<f64> {
        match self {
            Self::Vencimientos => record.pago_total_o_prima_total,
            Self::PagosParciales => record.pago_parcial,
        }
    }
}
