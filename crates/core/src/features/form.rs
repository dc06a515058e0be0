use std::sync::LazyLock;

use folio_protocol::{DomCommand, FormField, FormValues, Target};
use regex::Regex;

use crate::config::FormConfig;
use crate::outbox::Outbox;
use crate::schedule::TaskKey;

#[allow(clippy::expect_used)]
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("valid name pattern"));

#[allow(clippy::expect_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

const SENDING_HTML: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;
const SENT_HTML: &str = r#"<i class="fas fa-check"></i> Message Sent!"#;
const SENDING_BACKGROUND: &str = "linear-gradient(135deg, #6366f1, #06b6d4)";
const SENT_BACKGROUND: &str = "linear-gradient(135deg, #10b981, #3b82f6)";
const SUCCESS_HTML: &str = r#"<div class="success-content"><i class="fas fa-check-circle"></i><h3>Thank you for your message!</h3><p>I'll get back to you as soon as possible.</p></div>"#;

/// Check one field. The value is trimmed first; lengths count characters.
pub fn validate(field: FormField, value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    let len = value.chars().count();
    match field {
        FormField::Name if len < 2 => Err("Name must be at least 2 characters long"),
        FormField::Name if !NAME_RE.is_match(value) => {
            Err("Name can only contain letters and spaces")
        }
        FormField::Email if !EMAIL_RE.is_match(value) => {
            Err("Please enter a valid email address")
        }
        FormField::Subject if len < 3 => Err("Subject must be at least 3 characters long"),
        FormField::Message if len < 10 => Err("Message must be at least 10 characters long"),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Simulated request in flight.
    Sending,
    /// Confirmation shown; waiting to reset.
    Sent,
}

/// Contact form: live validation plus a simulated send with a success
/// overlay.
#[derive(Debug, Clone)]
pub struct ContactForm {
    present: bool,
    fields: Vec<FormField>,
    has_submit_button: bool,
    button_html: String,
    phase: SubmitPhase,
    config: FormConfig,
}

impl ContactForm {
    pub fn new(
        present: bool,
        fields: Vec<FormField>,
        has_submit_button: bool,
        button_html: String,
        config: FormConfig,
    ) -> Self {
        Self {
            present,
            fields,
            has_submit_button,
            button_html,
            phase: SubmitPhase::Idle,
            config,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    fn has_field(&self, field: FormField) -> bool {
        self.present && self.fields.contains(&field)
    }

    /// Validate and mark one field. Returns whether it is valid.
    pub fn check_field(&self, field: FormField, value: &str, out: &mut Outbox<'_>) -> bool {
        if !self.has_field(field) {
            return true;
        }
        let result = validate(field, value);
        let target = Target::Field(field);
        out.push(DomCommand::text(
            Target::FieldError(field),
            result.err().unwrap_or(""),
        ));
        match result {
            Ok(()) => {
                out.push(DomCommand::remove_class(target, "error"));
                out.push(DomCommand::add_class(target, "valid"));
                true
            }
            Err(_) => {
                out.push(DomCommand::add_class(target, "error"));
                out.push(DomCommand::remove_class(target, "valid"));
                false
            }
        }
    }

    pub fn on_focus(&self, field: FormField, out: &mut Outbox<'_>) {
        if !self.has_field(field) {
            return;
        }
        out.push(DomCommand::remove_class(Target::Field(field), "error"));
        out.push(DomCommand::text(Target::FieldError(field), ""));
    }

    pub fn submit(&mut self, values: &FormValues, out: &mut Outbox<'_>) {
        if !self.present {
            return;
        }
        if self.phase != SubmitPhase::Idle {
            tracing::debug!(phase = ?self.phase, "submission already in flight");
            return;
        }

        // Every field is checked so each one gets its feedback.
        let mut valid = true;
        for &field in &self.fields {
            valid &= self.check_field(field, values.get(field).unwrap_or(""), out);
        }

        if !valid {
            out.push(DomCommand::style(
                Target::ContactForm,
                "animation",
                "shake 0.5s ease-in-out",
            ));
            out.after(self.config.shake_ms, TaskKey::FormShakeEnd);
            return;
        }
        if !self.has_submit_button {
            tracing::warn!("contact form has no submit button");
            return;
        }

        self.phase = SubmitPhase::Sending;
        out.push(DomCommand::SetInnerHtml {
            target: Target::SubmitButton,
            html: SENDING_HTML.into(),
        });
        out.push(DomCommand::SetDisabled {
            target: Target::SubmitButton,
            disabled: true,
        });
        out.push(DomCommand::style(
            Target::SubmitButton,
            "background",
            SENDING_BACKGROUND,
        ));
        out.after(self.config.sending_ms, TaskKey::FormSent);
        tracing::info!("contact form submitted");
    }

    pub fn on_sent(&mut self, out: &mut Outbox<'_>) {
        if self.phase != SubmitPhase::Sending {
            return;
        }
        self.phase = SubmitPhase::Sent;
        out.push(DomCommand::SetInnerHtml {
            target: Target::SubmitButton,
            html: SENT_HTML.into(),
        });
        out.push(DomCommand::style(
            Target::SubmitButton,
            "background",
            SENT_BACKGROUND,
        ));
        out.push(DomCommand::Spawn {
            target: Target::SuccessMessage,
            parent: Target::Body,
            tag: "div".into(),
            class: "success-message".into(),
            css: None,
            html: Some(SUCCESS_HTML.into()),
        });
        out.after(self.config.success_show_ms, TaskKey::SuccessShow);
        out.after(self.config.success_hide_ms, TaskKey::SuccessHide);
        out.after(self.config.reset_after_ms, TaskKey::FormReset);
    }

    pub fn on_reset(&mut self, out: &mut Outbox<'_>) {
        if self.phase != SubmitPhase::Sent {
            return;
        }
        self.phase = SubmitPhase::Idle;
        out.push(DomCommand::ResetForm);
        out.push(DomCommand::SetInnerHtml {
            target: Target::SubmitButton,
            html: self.button_html.clone().into(),
        });
        out.push(DomCommand::SetDisabled {
            target: Target::SubmitButton,
            disabled: false,
        });
        out.push(DomCommand::clear_style(Target::SubmitButton, "background"));
        for &field in &self.fields {
            out.push(DomCommand::remove_class(Target::Field(field), "valid"));
            out.push(DomCommand::remove_class(Target::Field(field), "error"));
        }
    }

    pub fn on_shake_end(&self, out: &mut Outbox<'_>) {
        out.push(DomCommand::clear_style(Target::ContactForm, "animation"));
    }

    pub fn on_success_show(&self, out: &mut Outbox<'_>) {
        out.push(DomCommand::add_class(Target::SuccessMessage, "visible"));
    }

    pub fn on_success_hide(&self, out: &mut Outbox<'_>) {
        out.push(DomCommand::remove_class(Target::SuccessMessage, "visible"));
        out.after(self.config.success_remove_ms, TaskKey::SuccessRemove);
    }

    pub fn on_success_remove(&self, out: &mut Outbox<'_>) {
        out.push(DomCommand::Remove {
            target: Target::SuccessMessage,
        });
    }
}
