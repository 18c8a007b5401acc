//! Test fixtures for building forms and board events.

use conecta_core::domains::board::BoardEvent;
use conecta_core::domains::locations::AddressFields;
use conecta_core::domains::needs::{FormField, NeedForm};

pub fn praca_da_se() -> AddressFields {
    AddressFields {
        street: "Praça da Sé".to_string(),
        neighborhood: "Sé".to_string(),
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
    }
}

/// A form that passes validation.
pub fn complete_form() -> NeedForm {
    NeedForm {
        institution: "Instituto Mãos Dadas".to_string(),
        category: "outros".to_string(),
        title: "Pintura da sede".to_string(),
        description: "Mutirão para pintar as salas de atividades".to_string(),
        postal_code: "01001-000".to_string(),
        street: "Praça da Sé".to_string(),
        neighborhood: "Sé".to_string(),
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
        contact: "(11) 91234-5678".to_string(),
    }
}

/// Events typing every non-postal field of `form`, in form order.
pub fn typing_events(form: &NeedForm) -> Vec<BoardEvent> {
    FormField::REQUIRED
        .into_iter()
        .filter(|field| *field != FormField::PostalCode)
        .map(|field| BoardEvent::FieldEdited {
            field,
            value: form.get(field).to_string(),
        })
        .collect()
}
