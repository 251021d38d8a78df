//! Rendering of extracted payment data into user-facing text.

use crate::models::{PaymentInfo, Platform};

/// Renders [`PaymentInfo`] records as Spanish summary text.
#[derive(Debug, Clone)]
pub struct Presenter {
    placeholder: String,
}

impl Presenter {
    /// Create a presenter with the given placeholder for absent fields.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }

    fn field<'a>(&'a self, value: &'a Option<String>) -> &'a str {
        value.as_deref().unwrap_or(&self.placeholder)
    }

    /// Multi-line summary of one extraction result.
    pub fn summary(&self, info: &PaymentInfo) -> String {
        let number_label = if info.platform.is_phone_based() {
            "Celular"
        } else {
            "Cuenta"
        };
        format!(
            "💳 Plataforma: {}\n📱 {}: {}\n🏪 Comercio: {}\n📍 Ciudad: {}\n🪪 Documento: {}",
            info.platform,
            number_label,
            self.field(&info.number),
            self.field(&info.merchant_name),
            info.location,
            self.field(&info.national_id),
        )
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new("No encontrado")
    }
}
