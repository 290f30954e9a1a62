use crate::shared::usecase::UseCase;
use agencia_notify_domain::{
    compute_reminders, render_reminder, EmailContent, PolicyRecord, RecordKind, ReminderInstance,
};
use agencia_notify_infra::NotifyContext;

/// Previews the upcoming reminders for a policy record, as shown by the
/// expiration and partial-payment report views. Pure computation, no
/// dispatch happens here.
#[derive(Debug)]
pub struct GetUpcomingRemindersUseCase {
    pub record: PolicyRecord,
    pub kind: RecordKind,
}

#[derive(Debug)]
pub struct UpcomingReminder {
    pub instance: ReminderInstance,
    pub content: EmailContent,
}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUpcomingRemindersUseCase {
    type Response = Vec<UpcomingReminder>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &NotifyContext) -> Result<Self::Response, Self::Errors> {
        let due_date = self.kind.due_date(&self.record).unwrap_or("");
        let frequency = self.record.forma_pago.as_deref().unwrap_or("");

        let reminders = compute_reminders(due_date, frequency, ctx.sys.today())
            .into_iter()
            .map(|instance| {
                let content = render_reminder(
                    &self.record,
                    self.kind,
                    instance.ordinal_label,
                    instance.days_before,
                );
                UpcomingReminder { instance, content }
            })
            .collect();

        Ok(reminders)
    }
}
