mod helpers;

use agencia_notify::api::{execute, GetUpcomingRemindersUseCase};
use agencia_notify::domain::{PolicyRecord, RecordKind};
use agencia_notify::infra::ISys;
use chrono::{Duration, NaiveDate};
use helpers::setup::test_context;
use std::sync::Arc;

struct StaticTimeSys;
impl ISys for StaticTimeSys {
    fn get_timestamp_millis(&self) -> i64 {
        1766620800000 // Thu Dec 25 2025 00:00:00 GMT+0000
    }
}

fn record_with_due_in(days: i64) -> PolicyRecord {
    let due = (NaiveDate::from_ymd(2025, 12, 25) + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string();
    PolicyRecord {
        numero_poliza: "POL-2025-0113".into(),
        contratante: "Lucía Herrera".into(),
        fecha_fin: Some(due),
        fecha_proximo_pago: None,
        pago_total_o_prima_total: Some(18250.5),
        pago_parcial: None,
        forma_pago: Some("Anual".into()),
    }
}

#[actix_web::main]
#[test]
async fn report_view_previews_the_full_reminder_schedule() {
    let mut ctx = test_context("http://127.0.0.1:9/api/notifications".into());
    ctx.sys = Arc::new(StaticTimeSys {});

    let usecase = GetUpcomingRemindersUseCase {
        record: record_with_due_in(40),
        kind: RecordKind::Vencimientos,
    };
    let res = execute(usecase, &ctx).await.expect("Use case to succeed");

    assert_eq!(res.len(), 3);
    let labels: Vec<_> = res.iter().map(|r| r.instance.ordinal_label).collect();
    assert_eq!(
        labels,
        vec![
            "Primer Recordatorio",
            "Segundo Recordatorio",
            "Recordatorio Final"
        ]
    );
    assert_eq!(
        res[0].instance.fire_date,
        NaiveDate::from_ymd(2025, 12, 25) + Duration::days(10)
    );
    assert!(res[2].content.subject.contains("Póliza POL-2025-0113"));
    assert!(res[0].content.html_body.contains("$18250.50"));
}

#[actix_web::main]
#[test]
async fn near_due_dates_lose_the_first_reminder_but_keep_labels() {
    let mut ctx = test_context("http://127.0.0.1:9/api/notifications".into());
    ctx.sys = Arc::new(StaticTimeSys {});

    let mut record = record_with_due_in(10);
    record.forma_pago = Some("TRIMESTRAL".into());
    let usecase = GetUpcomingRemindersUseCase {
        record,
        kind: RecordKind::Vencimientos,
    };
    let res = execute(usecase, &ctx).await.expect("Use case to succeed");

    assert_eq!(res.len(), 2);
    assert_eq!(res[0].instance.ordinal_label, "Segundo Recordatorio");
    assert_eq!(res[1].instance.ordinal_label, "Recordatorio Final");
    assert!(res[0]
        .content
        .subject
        .starts_with("Segundo Recordatorio - Vencimiento"));
}
