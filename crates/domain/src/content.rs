use crate::policy::{PolicyRecord, RecordKind};

pub const NOT_AVAILABLE: &str = "N/A";

/// Rendered email content for a reminder. Pure data, the dispatch
/// endpoint decides how it is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub html_body: String,
}

fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(amount) => format!("${:.2}", amount),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Renders the subject and HTML body for a policy reminder. Missing
/// optional fields render as "N/A" rather than failing.
pub fn render_reminder(
    record: &PolicyRecord,
    kind: RecordKind,
    ordinal_label: &str,
    days_until_due: i64,
) -> EmailContent {
    let subject = format!(
        "{} - {} Póliza {} - {}",
        ordinal_label,
        kind.concept(),
        record.numero_poliza,
        record.contratante
    );

    let due_date = kind.due_date(record).unwrap_or(NOT_AVAILABLE);
    let amount = format_amount(kind.amount(record));

    let html_body = format!(
        "<div style=\"font-family: Arial, sans-serif;\">\
            <h2>{ordinal}</h2>\
            <p>La póliza <strong>{poliza}</strong> de <strong>{contratante}</strong> \
            tiene un {concepto} en <strong>{dias}</strong> día(s).</p>\
            <table>\
                <tr><td>Fecha:</td><td>{fecha}</td></tr>\
                <tr><td>Monto:</td><td>{monto}</td></tr>\
            </table>\
            <p>Este es un recordatorio automático, favor de no responder.</p>\
        </div>",
        ordinal = ordinal_label,
        poliza = record.numero_poliza,
        contratante = record.contratante,
        concepto = kind.concept().to_lowercase(),
        dias = days_until_due,
        fecha = due_date,
        monto = amount,
    );

    EmailContent { subject, html_body }
}
