use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Input of the contact form, addressed by the `name` attribute it carries in the page.
#[derive(
    EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl Field {
    /// Fields that must be non-empty before the form can be sent.
    pub const REQUIRED: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Subject {
    Agendamento,
    Orcamento,
    Duvida,
    Emergencia,
    Outro,
}

impl Subject {
    pub fn value(&self) -> &'static str {
        match self {
            Subject::Agendamento => "agendamento",
            Subject::Orcamento => "orcamento",
            Subject::Duvida => "duvida",
            Subject::Emergencia => "emergencia",
            Subject::Outro => "outro",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Subject::Agendamento => "Agendamento de Consulta",
            Subject::Orcamento => "Solicitar Orçamento",
            Subject::Duvida => "Tirar Dúvidas",
            Subject::Emergencia => "Emergência",
            Subject::Outro => "Outro",
        }
    }
}
