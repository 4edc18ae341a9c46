//! View tree for the contact section.
//!
//! [`render_section`] is a pure function of the configuration and a state
//! snapshot. The tree is turned into HTML by the [`maud::Render`] impls in
//! [`html`].

pub mod html;

use crate::config::ContactConfig;
use crate::core::contact::ContactSnapshot;
use crate::domain::model::{FieldKind, StatusKind};

pub const SECTION_ID: &str = "contact";
pub const MESSAGE_ROWS: u32 = 7;
pub const SEND_LABEL: &str = "Send";
pub const SENDING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub id: &'static str,
    pub header: HeaderView,
    pub form_motion: SlideIn,
    pub fields: Vec<FieldView>,
    pub submit_label: &'static str,
    pub status: Option<StatusView>,
    pub canvas_motion: SlideIn,
    pub canvas: CanvasSlot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub sub_text: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub key: String,
    pub label: String,
    pub placeholder: String,
    pub value: String,
    pub control: Control,
    /// Inline validation message; only ever set on the email field.
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Input { input_type: &'static str },
    TextArea { rows: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusView {
    pub fn color_class(&self) -> &'static str {
        match self.kind {
            StatusKind::Success => "text-green-500",
            _ => "text-red-500",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Left,
    Right,
}

/// Entrance animation metadata, passed through to the page as data attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideIn {
    pub direction: SlideDirection,
    pub delay: f32,
    pub duration: f32,
}

impl SlideIn {
    pub fn toward(direction: SlideDirection) -> Self {
        Self {
            direction,
            delay: 0.2,
            duration: 1.0,
        }
    }
}

/// Mount point for the decorative globe; drawn client-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasSlot {
    pub id: &'static str,
}

pub fn render_section(contact: &ContactConfig, snapshot: &ContactSnapshot) -> SectionView {
    let fields = contact
        .form
        .iter()
        .map(|field| {
            let kind = field.kind();
            let control = match kind {
                FieldKind::Message => Control::TextArea { rows: MESSAGE_ROWS },
                FieldKind::Email => Control::Input { input_type: "email" },
                FieldKind::Text => Control::Input { input_type: "text" },
            };
            let error = match kind {
                FieldKind::Email if !snapshot.form.email_error().is_empty() => {
                    Some(snapshot.form.email_error().to_string())
                }
                _ => None,
            };
            FieldView {
                key: field.key.clone(),
                label: field.span.clone(),
                placeholder: field.placeholder.clone(),
                value: snapshot.form.get(&field.key).to_string(),
                control,
                error,
            }
        })
        .collect();

    let status = snapshot.status.is_visible().then(|| StatusView {
        kind: snapshot.status.kind,
        text: snapshot.status.text.clone(),
    });

    SectionView {
        id: SECTION_ID,
        header: HeaderView {
            sub_text: contact.sub_text.clone(),
            title: contact.title.clone(),
        },
        form_motion: SlideIn::toward(SlideDirection::Left),
        fields,
        submit_label: if snapshot.busy { SENDING_LABEL } else { SEND_LABEL },
        status,
        canvas_motion: SlideIn::toward(SlideDirection::Right),
        canvas: CanvasSlot { id: "earth-canvas" },
    }
}
