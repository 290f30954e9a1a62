use chrono::{Duration, NaiveDate};

/// Payment frequency of a policy, parsed case-insensitively from the
/// free-text label stored on the record. Unrecognized labels map to
/// `Otra`, which uses the default offset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentFrequency {
    Anual,
    Semestral,
    Trimestral,
    Bimestral,
    Mensual,
    Otra,
}

impl PaymentFrequency {
    pub fn parse(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "ANUAL" => Self::Anual,
            "SEMESTRAL" => Self::Semestral,
            "TRIMESTRAL" => Self::Trimestral,
            "BIMESTRAL" => Self::Bimestral,
            "MENSUAL" => Self::Mensual,
            _ => Self::Otra,
        }
    }

    /// Days before the due date at which each reminder fires,
    /// descending. At most 3 entries per frequency.
    pub fn offsets(&self) -> &'static [i64] {
        match self {
            Self::Anual => &[30, 15, 3],
            Self::Semestral => &[21, 7, 1],
            Self::Trimestral => &[14, 7, 1],
            Self::Bimestral => &[10, 3, 1],
            Self::Mensual => &[7, 3, 1],
            Self::Otra => &[15, 7, 1],
        }
    }
}

/// The reminder schedule for a given payment frequency. Constructed on
/// demand from the static offset table, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderSpec {
    pub frequency: PaymentFrequency,
    pub offsets: &'static [i64],
}

impl ReminderSpec {
    pub fn for_frequency(label: &str) -> Self {
        let frequency = PaymentFrequency::parse(label);
        Self {
            frequency,
            offsets: frequency.offsets(),
        }
    }
}

/// A single upcoming reminder derived from a due date. Ephemeral,
/// recomputed every time it is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderInstance {
    pub fire_date: NaiveDate,
    pub days_before: i64,
    pub ordinal_label: &'static str,
}

// Position within the original offset list, not the filtered one. A
// filtered-out first offset does not promote the second reminder to
// "Primer Recordatorio".
fn ordinal_label(position: usize) -> &'static str {
    match position {
        0 => "Primer Recordatorio",
        1 => "Segundo Recordatorio",
        _ => "Recordatorio Final",
    }
}

fn parse_due_date(datestr: &str) -> Option<NaiveDate> {
    let datestr = datestr.trim();
    NaiveDate::parse_from_str(datestr, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(datestr, "%d/%m/%Y"))
        .ok()
}

/// Computes the upcoming reminders for a due date, given the payment
/// frequency label of the record. Reminders whose fire date has already
/// passed are dropped; the result is sorted ascending by fire date. An
/// unparseable due date yields no reminders rather than an error.
pub fn compute_reminders(
    due_date: &str,
    payment_frequency: &str,
    today: NaiveDate,
) -> Vec<ReminderInstance> {
    let due = match parse_due_date(due_date) {
        Some(due) => due,
        None => return Vec::new(),
    };

    let spec = ReminderSpec::for_frequency(payment_frequency);
    let mut reminders = spec
        .offsets
        .iter()
        .enumerate()
        .map(|(position, &days_before)| ReminderInstance {
            fire_date: due - Duration::days(days_before),
            days_before,
            ordinal_label: ordinal_label(position),
        })
        .filter(|r| r.fire_date >= today)
        .collect::<Vec<_>>();

    reminders.sort_by_key(|r| r.fire_date);
    reminders
}
