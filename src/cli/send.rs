use anyhow::bail;
use dentalcare_contact::{ContactPage, ContactFormData, SubmitOutcome};

/// Delivers one message through the configured provider, the same way the page does.
pub async fn send(config: crate::config::Config, data: ContactFormData) -> anyhow::Result<()> {
    let dispatcher = crate::email::dispatcher(&config)?;
    let page = ContactPage::new();
    page.fill(&data).await;

    match dispatcher.submit(&page).await {
        SubmitOutcome::Delivered => {
            tracing::info!(email = %data.email, "Message delivered");
            Ok(())
        }
        SubmitOutcome::Invalid => bail!("name, email and message are required"),
        SubmitOutcome::Failed => bail!("delivery failed, see logs for the reason"),
        SubmitOutcome::InProgress => bail!("a submission is already running"),
    }
}
