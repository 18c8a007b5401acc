use tracing::{debug, error, warn};

use super::commands::BoardCommand;
use super::events::BoardEvent;
use super::state::{AddressStatus, BoardState, Notice};
use crate::domains::locations::{
    completed_postal_code, mask_postal_input, AddressFields, AddressLookupResult, LookupError,
    LookupTicket,
};
use crate::domains::needs::{
    validate, FormField, HelpCategory, NeedForm, NeedRecord, NeedRegistry,
};

const ADDRESS_FIELDS: [FormField; 4] = [
    FormField::Street,
    FormField::Neighborhood,
    FormField::City,
    FormField::State,
];

/// Board state machine
/// Pure decision logic - NO IO, only state transitions
pub struct BoardMachine {
    state: BoardState,
}

impl BoardMachine {
    pub fn new(registry: NeedRegistry) -> Self {
        Self {
            state: BoardState::new(registry),
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn decide(&mut self, event: &BoardEvent) -> Option<BoardCommand> {
        let state = &mut self.state;
        match event {
            BoardEvent::SearchChanged(text) => {
                state.query.text = text.clone();
                None
            }

            BoardEvent::CategoryChanged(category) => {
                on_category_changed(state, *category);
                None
            }

            BoardEvent::FieldEdited {
                field: FormField::PostalCode,
                value,
            }
            | BoardEvent::PostalCodeEdited(value) => on_postal_code_edited(state, value),

            BoardEvent::FieldEdited { field, value } => {
                state.form.set(*field, value.clone());
                state.field_errors.remove(field);
                None
            }

            BoardEvent::SubmitRequested => {
                on_submit(state);
                None
            }

            BoardEvent::AddressResolved { ticket, outcome } => {
                on_address_resolved(state, ticket, outcome);
                None
            }
        }
    }
}

fn on_category_changed(state: &mut BoardState, category: Option<HelpCategory>) {
    state.query.category = category;
}

fn on_postal_code_edited(state: &mut BoardState, raw: &str) -> Option<BoardCommand> {
    let masked = mask_postal_input(raw);
    if masked == state.form.postal_code {
        // Input re-emitted an unchanged value; retrying needs a real edit.
        return None;
    }

    state.form.postal_code = masked;
    state.field_errors.remove(&FormField::PostalCode);
    state.lookups.invalidate();

    let Some(postal_code) = completed_postal_code(&state.form.postal_code) else {
        state.address_status = AddressStatus::Idle;
        return None;
    };

    let ticket = state.lookups.begin(postal_code.clone());
    debug!(
        postal_code = %postal_code,
        generation = ticket.generation,
        "Dispatching postal code lookup"
    );
    state.address_status = AddressStatus::Pending(postal_code);
    Some(BoardCommand::LookupAddress(ticket))
}

fn on_submit(state: &mut BoardState) {
    match validate(&state.form) {
        Ok(record) => admit(state, record),
        Err(e) => {
            debug!(error = %e, "Registration rejected");
            state.field_errors = e.failed_fields();
            state.notice = Some(Notice::ValidationFailed(e));
        }
    }
}

/// Store a validated record. The form is only reset once the registry accepts it.
fn admit(state: &mut BoardState, record: NeedRecord) {
    match state.registry.add(record) {
        Ok(id) => {
            state.form = NeedForm::default();
            state.field_errors.clear();
            state.lookups.invalidate();
            state.address_status = AddressStatus::Idle;
            state.notice = Some(Notice::NeedRegistered(id));
        }
        Err(e) => {
            error!(error = %e, "Registry refused a validated need");
            state.notice = Some(Notice::RegistrationRefused(e));
        }
    }
}

fn on_address_resolved(
    state: &mut BoardState,
    ticket: &LookupTicket,
    outcome: &Result<AddressLookupResult, LookupError>,
) {
    if !state.lookups.complete(ticket) {
        debug!(
            postal_code = %ticket.postal_code,
            generation = ticket.generation,
            current_generation = state.lookups.generation(),
            "Discarding stale postal code lookup"
        );
        return;
    }

    let postal_code = ticket.postal_code.clone();
    match outcome {
        Ok(AddressLookupResult::Found(address)) => {
            fill_address(state, address);
            state.field_errors.remove(&FormField::PostalCode);
            state.address_status = AddressStatus::Found(postal_code);
        }
        Ok(AddressLookupResult::NotFound) => {
            warn!(postal_code = %postal_code, "Postal code not found");
            state.field_errors.insert(FormField::PostalCode);
            state.address_status = AddressStatus::NotFound(postal_code);
        }
        Err(e) => {
            error!(postal_code = %postal_code, error = %e, "Postal code lookup failed");
            state.field_errors.insert(FormField::PostalCode);
            state.address_status = AddressStatus::Failed(postal_code);
        }
    }
}

fn fill_address(state: &mut BoardState, address: &AddressFields) {
    state.form.street = address.street.clone();
    state.form.neighborhood = address.neighborhood.clone();
    state.form.city = address.city.clone();
    state.form.state = address.state.clone();
    for field in ADDRESS_FIELDS {
        state.field_errors.remove(&field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::locations::PostalCode;
    use crate::domains::needs::RegistryError;

    fn machine() -> BoardMachine {
        BoardMachine::new(NeedRegistry::seeded())
    }

    fn lookup_ticket(command: Option<BoardCommand>) -> LookupTicket {
        match command {
            Some(BoardCommand::LookupAddress(ticket)) => ticket,
            None => panic!("expected a lookup command"),
        }
    }

    fn se() -> AddressFields {
        AddressFields {
            street: "Praça da Sé".into(),
            neighborhood: "Sé".into(),
            city: "São Paulo".into(),
            state: "SP".into(),
        }
    }

    #[test]
    fn partial_postal_code_dispatches_nothing() {
        let mut machine = machine();
        assert_eq!(
            machine.decide(&BoardEvent::PostalCodeEdited("0100".into())),
            None
        );
        assert_eq!(machine.state().form.postal_code, "0100");
        assert_eq!(machine.state().address_status, AddressStatus::Idle);
    }

    #[test]
    fn complete_postal_code_dispatches_one_lookup() {
        let mut machine = machine();
        let ticket =
            lookup_ticket(machine.decide(&BoardEvent::PostalCodeEdited("01001000".into())));

        assert_eq!(ticket.postal_code.as_str(), "01001-000");
        assert_eq!(machine.state().form.postal_code, "01001-000");
        assert_eq!(
            machine.state().address_status,
            AddressStatus::Pending(PostalCode::parse("01001-000").unwrap())
        );

        // The masked value echoed back by the input does not fire a second request.
        assert_eq!(
            machine.decide(&BoardEvent::PostalCodeEdited("01001-000".into())),
            None
        );
    }

    #[test]
    fn found_address_fills_the_form() {
        let mut machine = machine();
        let ticket =
            lookup_ticket(machine.decide(&BoardEvent::PostalCodeEdited("01001-000".into())));

        machine.decide(&BoardEvent::AddressResolved {
            ticket,
            outcome: Ok(AddressLookupResult::Found(se())),
        });

        let form = &machine.state().form;
        assert_eq!(form.street, "Praça da Sé");
        assert_eq!(form.neighborhood, "Sé");
        assert_eq!(form.city, "São Paulo");
        assert_eq!(form.state, "SP");
        assert!(matches!(
            machine.state().address_status,
            AddressStatus::Found(_)
        ));
    }

    #[test]
    fn not_found_flags_postal_code_and_keeps_manual_address() {
        let mut machine = machine();
        machine.decide(&BoardEvent::FieldEdited {
            field: FormField::Street,
            value: "Rua digitada".into(),
        });
        let ticket =
            lookup_ticket(machine.decide(&BoardEvent::PostalCodeEdited("99999-999".into())));

        machine.decide(&BoardEvent::AddressResolved {
            ticket,
            outcome: Ok(AddressLookupResult::NotFound),
        });

        assert!(machine.state().has_error(FormField::PostalCode));
        assert_eq!(machine.state().form.street, "Rua digitada");
        assert!(matches!(
            machine.state().address_status,
            AddressStatus::NotFound(_)
        ));
    }

    #[test]
    fn transport_failure_is_reported_as_failed() {
        let mut machine = machine();
        let ticket =
            lookup_ticket(machine.decide(&BoardEvent::PostalCodeEdited("01001-000".into())));

        machine.decide(&BoardEvent::AddressResolved {
            ticket,
            outcome: Err(LookupError::Timeout),
        });

        assert!(machine.state().has_error(FormField::PostalCode));
        assert!(machine.state().form.street.is_empty());
        assert!(matches!(
            machine.state().address_status,
            AddressStatus::Failed(_)
        ));
    }

    #[test]
    fn stale_lookup_result_is_discarded() {
        let mut machine = machine();
        let stale =
            lookup_ticket(machine.decide(&BoardEvent::PostalCodeEdited("01001-000".into())));
        let current =
            lookup_ticket(machine.decide(&BoardEvent::PostalCodeEdited("20040-002".into())));

        machine.decide(&BoardEvent::AddressResolved {
            ticket: stale,
            outcome: Ok(AddressLookupResult::Found(se())),
        });

        assert!(machine.state().form.street.is_empty());
        assert_eq!(
            machine.state().address_status,
            AddressStatus::Pending(current.postal_code.clone())
        );
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut machine = machine();
        machine.decide(&BoardEvent::SubmitRequested);
        assert!(machine.state().has_error(FormField::Title));

        machine.decide(&BoardEvent::FieldEdited {
            field: FormField::Title,
            value: "Horta comunitária".into(),
        });
        assert!(!machine.state().has_error(FormField::Title));
        assert!(machine.state().has_error(FormField::Contact));
    }

    #[test]
    fn rejected_submit_adds_nothing() {
        let mut machine = machine();
        let before = machine.state().registry.len();

        machine.decide(&BoardEvent::SubmitRequested);

        assert_eq!(machine.state().registry.len(), before);
        assert!(matches!(
            machine.state().notice,
            Some(Notice::ValidationFailed(ref e)) if e.has_missing()
        ));
    }

    #[test]
    fn refused_record_keeps_the_form_and_reports_it() {
        let mut machine = machine();
        let existing = machine.state().registry.all()[0].clone();
        machine.decide(&BoardEvent::FieldEdited {
            field: FormField::Title,
            value: "Mutirão de pintura".into(),
        });
        let before = machine.state().registry.len();

        admit(&mut machine.state, existing.clone());

        let state = machine.state();
        assert_eq!(state.registry.len(), before);
        assert_eq!(
            state.notice,
            Some(Notice::RegistrationRefused(RegistryError::DuplicateId(
                existing.id
            )))
        );
        assert_eq!(state.form.title, "Mutirão de pintura");
    }

    #[test]
    fn search_and_category_drive_the_listing() {
        let mut machine = machine();
        machine.decide(&BoardEvent::CategoryChanged(Some(HelpCategory::Health)));
        assert_eq!(machine.state().listing().len(), 1);

        machine.decide(&BoardEvent::SearchChanged("limpeza".into()));
        assert!(machine.state().listing().is_empty());

        machine.decide(&BoardEvent::CategoryChanged(None));
        assert_eq!(machine.state().listing().len(), 1);
    }
}
