//! # commons-mail
//!
//! Notification emails for form submissions.
//!
//! Contact and membership forms notify the organization's inbox through an
//! authenticated SMTP relay (an app password, not the account password).
//! Sends are user-initiated, so failures always propagate to the caller —
//! the person submitting the form must learn their message did not go out.

mod error;

pub use error::MailError;

use commons_config::SmtpConfig;
use commons_core::entities::{ContactSubmission, MembershipApplication};
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Tokio1Executor};

/// Async SMTP mailer for form notifications.
///
/// Notifications go from the configured account to the configured inbox;
/// the submitter's address rides along as `Reply-To` so replying in the
/// mail client reaches them directly.
#[derive(Debug)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl Mailer {
    /// Build a mailer from SMTP configuration.
    ///
    /// Returns `Ok(None)` when mail is not configured (missing user or app
    /// password) — the caller decides whether that disables the form
    /// endpoints or the whole service.
    ///
    /// # Errors
    ///
    /// Returns [`MailError`] when a configured address does not parse or
    /// the STARTTLS transport cannot be set up.
    pub fn from_config(config: &SmtpConfig) -> Result<Option<Self>, MailError> {
        if !config.is_configured() {
            return Ok(None);
        }

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.user.clone(),
                config.app_password.clone(),
            ))
            .build();

        Ok(Some(Self {
            transport,
            from: config.user.parse()?,
            to: config.notify_to().parse()?,
        }))
    }

    /// Send the contact-form notification.
    ///
    /// # Errors
    ///
    /// Returns [`MailError`] when the submitter's address is invalid or
    /// delivery fails.
    pub async fn send_contact(&self, submission: &ContactSubmission) -> Result<(), MailError> {
        let message = self.contact_message(submission)?;
        self.transport.send(message).await?;
        tracing::debug!(from = %submission.email, "contact notification sent");
        Ok(())
    }

    /// Send the membership-application notification.
    ///
    /// # Errors
    ///
    /// Returns [`MailError`] when the applicant's address is invalid or
    /// delivery fails.
    pub async fn send_membership(
        &self,
        application: &MembershipApplication,
    ) -> Result<(), MailError> {
        let message = self.membership_message(application)?;
        self.transport.send(message).await?;
        tracing::debug!(from = %application.email, "membership notification sent");
        Ok(())
    }

    fn contact_message(&self, submission: &ContactSubmission) -> Result<Message, MailError> {
        let subject = match submission.subject.as_deref() {
            Some(s) if !s.is_empty() => format!("Contact form: {s}"),
            _ => format!("Contact form submission from {}", submission.name),
        };
        self.notification(&submission.name, &submission.email, &subject)?
            .body(contact_body(submission))
            .map_err(MailError::from)
    }

    fn membership_message(
        &self,
        application: &MembershipApplication,
    ) -> Result<Message, MailError> {
        let subject = format!("Membership application from {}", application.name);
        self.notification(&application.name, &application.email, &subject)?
            .body(membership_body(application))
            .map_err(MailError::from)
    }

    fn notification(
        &self,
        submitter_name: &str,
        submitter_email: &str,
        subject: &str,
    ) -> Result<lettre::message::MessageBuilder, MailError> {
        let reply_to = Mailbox::new(
            Some(submitter_name.to_string()),
            submitter_email.parse::<Address>()?,
        );
        Ok(Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .reply_to(reply_to)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN))
    }
}

fn contact_body(submission: &ContactSubmission) -> String {
    format!(
        "New contact form submission\n\
         \n\
         Name: {}\n\
         Email: {}\n\
         Subject: {}\n\
         \n\
         Message:\n\
         {}\n",
        submission.name,
        submission.email,
        submission.subject.as_deref().unwrap_or("(none)"),
        submission.message,
    )
}

fn membership_body(application: &MembershipApplication) -> String {
    format!(
        "New membership application\n\
         \n\
         Name: {}\n\
         Email: {}\n\
         Phone: {}\n\
         Address: {}\n\
         Membership type: {}\n\
         \n\
         Message:\n\
         {}\n",
        application.name,
        application.email,
        application.phone.as_deref().unwrap_or("(not provided)"),
        application.address.as_deref().unwrap_or("(not provided)"),
        application.membership_type,
        application.message.as_deref().unwrap_or("(none)"),
    )
}
