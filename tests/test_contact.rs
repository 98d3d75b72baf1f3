mod common;

use std::time::Duration;

use anyhow::Result;
use common::*;
use folio::core::contact::{
    FAILURE_MESSAGE, SUCCESS_MESSAGE, SimulatedTransport, SubmitError, TransportError, validate,
};

#[test]
fn test_empty_form_reports_every_field() -> Result<()> {
    let errors = validate(&ContactForm::default());

    assert_eq!(errors.len(), 4);
    assert_eq!(errors.message(Field::Name).as_deref(), Some("Name is required"));
    assert_eq!(errors.message(Field::Email).as_deref(), Some("Email is required"));
    assert_eq!(errors.message(Field::Subject).as_deref(), Some("Subject is required"));
    assert_eq!(errors.message(Field::Message).as_deref(), Some("Message is required"));

    Ok(())
}

#[test]
fn test_whitespace_only_fields_are_empty() -> Result<()> {
    let errors = validate(&form("   ", "\t", " ", "\n  "));

    assert_eq!(errors.get(Field::Name), Some(ValidationError::NameRequired));
    assert_eq!(errors.get(Field::Email), Some(ValidationError::EmailRequired));
    assert_eq!(errors.get(Field::Subject), Some(ValidationError::SubjectRequired));
    assert_eq!(errors.get(Field::Message), Some(ValidationError::MessageRequired));

    Ok(())
}

#[test]
fn test_short_message_is_the_only_error() -> Result<()> {
    let errors = validate(&form("A", "a@b.co", "S", "short"));

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.message(Field::Message).as_deref(),
        Some("Message must be at least 10 characters")
    );

    // Trimmed length counts, not raw length
    let errors = validate(&form("A", "a@b.co", "S", "   123456789    "));
    assert_eq!(errors.get(Field::Message), Some(ValidationError::MessageTooShort));

    Ok(())
}

#[test]
fn test_message_length_counts_characters() -> Result<()> {
    // Five emoji are five characters, ten UTF-16 units
    let errors = validate(&form("A", "a@b.co", "S", "😀😀😀😀😀"));
    assert_eq!(errors.get(Field::Message), Some(ValidationError::MessageTooShort));

    let errors = validate(&form("A", "a@b.co", "S", "😀😀😀😀😀😀😀😀😀😀"));
    assert!(errors.is_empty());

    Ok(())
}

#[test]
fn test_invalid_email_is_the_only_error() -> Result<()> {
    let errors = validate(&form("A", "bad-email", "S", "1234567890"));

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.message(Field::Email).as_deref(),
        Some("Invalid email address")
    );

    Ok(())
}

#[test]
fn test_email_pattern() -> Result<()> {
    for email in ["a@b.co", "First.Last+tag@Example.COM", "x_y%z@sub.domain.org"] {
        assert_eq!(validate(&form("A", email, "S", "1234567890")).get(Field::Email), None, "{}", email);
    }
    for email in ["a@b", "a@b.c", "@b.co", "a b@c.de", "a@b.co "] {
        assert_eq!(
            validate(&form("A", email, "S", "1234567890")).get(Field::Email),
            Some(ValidationError::InvalidEmail),
            "{}",
            email
        );
    }

    Ok(())
}

#[test]
fn test_validation_is_idempotent_and_empty_iff_valid() -> Result<()> {
    let forms = [
        ContactForm::default(),
        valid_form(),
        form("A", "bad-email", "S", "short"),
    ];
    for f in &forms {
        let first = validate(f);
        let second = validate(f);
        assert_eq!(first, second);
    }
    assert!(validate(&valid_form()).is_empty());

    Ok(())
}

#[test]
fn test_set_field_clears_only_that_error() -> Result<()> {
    let mut session = ContactSession::new();

    // 1. Surface all errors
    assert_eq!(session.validate().len(), 4);

    // 2. Editing a field drops its error even if still invalid
    session.set_field(Field::Email, "nope");
    assert_eq!(session.errors().get(Field::Email), None);
    assert_eq!(session.errors().len(), 3);
    assert_eq!(session.form().email, "nope");

    // 3. A fresh pass recomputes everything
    assert_eq!(session.validate().get(Field::Email), Some(ValidationError::InvalidEmail));

    Ok(())
}

fn fill(session: &mut ContactSession, source: &ContactForm) {
    for field in Field::ALL {
        session.set_field(field, source.get(field));
    }
}

#[tokio::test]
async fn test_invalid_submit_changes_only_errors() -> Result<()> {
    let mut session = ContactSession::new();
    let transport = CountingTransport::succeeding();

    let result = session.submit(&transport).await;

    assert!(matches!(result, Err(SubmitError::Invalid(ref errors)) if errors.len() == 4));
    assert_eq!(session.status(), &SubmissionStatus::NotSubmitted);
    assert_eq!(session.errors().len(), 4);
    assert_eq!(transport.call_count(), 0);

    Ok(())
}

#[tokio::test]
async fn test_successful_submit_clears_form() -> Result<()> {
    let mut session = ContactSession::new();
    fill(&mut session, &valid_form());
    let transport = CountingTransport::succeeding();

    let status = session.submit(&transport).await?.clone();

    assert_eq!(
        status,
        SubmissionStatus::Succeeded {
            message: SUCCESS_MESSAGE.to_string()
        }
    );
    assert_eq!(status.message(), Some(SUCCESS_MESSAGE));
    assert_eq!(session.form(), &ContactForm::default());
    assert!(session.errors().is_empty());
    assert_eq!(transport.call_count(), 1);

    Ok(())
}

#[tokio::test]
async fn test_failed_submit_keeps_form() -> Result<()> {
    let mut session = ContactSession::new();
    fill(&mut session, &valid_form());
    let transport = CountingTransport::failing();

    let status = session.submit(&transport).await?.clone();

    assert_eq!(
        status,
        SubmissionStatus::Failed {
            message: FAILURE_MESSAGE.to_string()
        }
    );
    assert_eq!(session.form(), &valid_form());

    Ok(())
}

#[tokio::test]
async fn test_submit_is_rejected_while_pending() -> Result<()> {
    let mut session = ContactSession::new();
    fill(&mut session, &valid_form());

    // 1. First submit goes out
    let snapshot = session.begin_submit()?;
    assert_eq!(snapshot, valid_form());
    assert!(session.status().is_pending());

    // 2. Second submit is refused and nothing moves
    let transport = CountingTransport::succeeding();
    let again = session.submit(&transport).await;
    assert!(matches!(again, Err(SubmitError::AlreadyPending)));
    assert_eq!(transport.call_count(), 0);
    assert!(session.status().is_pending());

    // 3. The outstanding one completes
    session.complete(Ok(()));
    assert_eq!(session.status().message(), Some(SUCCESS_MESSAGE));

    Ok(())
}

#[test]
fn test_late_outcome_without_pending_is_ignored() -> Result<()> {
    let mut session = ContactSession::new();
    fill(&mut session, &valid_form());

    session.complete(Err(TransportError::Rejected("spam".to_string())));

    assert_eq!(session.status(), &SubmissionStatus::NotSubmitted);
    assert_eq!(session.form(), &valid_form());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_simulated_transport_waits_its_delay() -> Result<()> {
    let transport = SimulatedTransport::new(Duration::from_millis(1500));
    let started = tokio::time::Instant::now();

    transport_send(&transport).await?;

    assert!(started.elapsed() >= Duration::from_millis(1500));

    Ok(())
}

async fn transport_send(transport: &SimulatedTransport) -> Result<()> {
    use folio::core::contact::Transport;
    transport.send(&valid_form()).await?;
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_simulated_failure_surfaces_banner() -> Result<()> {
    let transport = SimulatedTransport::failing(
        Duration::from_millis(10),
        TransportError::Unavailable("offline".to_string()),
    );
    let mut session = ContactSession::new();
    fill(&mut session, &valid_form());

    let status = session.submit(&transport).await?;

    assert_eq!(status.message(), Some(FAILURE_MESSAGE));

    Ok(())
}
