//! Board runtime - feeds events to the machine and executes its commands.

use std::collections::HashMap;

use tokio::runtime::Handle;
use tokio::task::{self, JoinError, JoinSet};
use tracing::{debug, error};

use super::commands::BoardCommand;
use super::events::BoardEvent;
use super::machine::BoardMachine;
use super::state::BoardState;
use crate::domains::locations::{AddressLookupResult, LookupError, LookupTicket};
use crate::domains::needs::NeedRegistry;
use crate::kernel::BoardDeps;

type LookupOutcome = Result<AddressLookupResult, LookupError>;

/// Single owner of the board state.
///
/// Lookups run as tasks in a `JoinSet`; their results are only applied when
/// the owner calls [`BoardRuntime::settle_next`] or [`BoardRuntime::settle_ready`],
/// so all state changes stay on one logical thread. A task that panics still
/// resolves its ticket, as a failed lookup.
pub struct BoardRuntime {
    machine: BoardMachine,
    deps: BoardDeps,
    lookups: JoinSet<LookupOutcome>,
    tickets: HashMap<task::Id, LookupTicket>,
}

impl BoardRuntime {
    pub fn new(registry: NeedRegistry, deps: BoardDeps) -> Self {
        Self {
            machine: BoardMachine::new(registry),
            deps,
            lookups: JoinSet::new(),
            tickets: HashMap::new(),
        }
    }

    pub fn state(&self) -> &BoardState {
        self.machine.state()
    }

    /// Number of lookups dispatched whose results have not been applied yet.
    pub fn in_flight(&self) -> usize {
        self.lookups.len()
    }

    /// Apply a visitor action. Never waits on the network.
    ///
    /// Outside a tokio runtime a lookup cannot start; it is reported as failed.
    pub fn dispatch(&mut self, event: BoardEvent) {
        if let Some(command) = self.machine.decide(&event) {
            self.execute(command);
        }
    }

    fn execute(&mut self, command: BoardCommand) {
        match command {
            BoardCommand::LookupAddress(ticket) => {
                let Ok(handle) = Handle::try_current() else {
                    error!(
                        postal_code = %ticket.postal_code,
                        "No async runtime; postal code lookup not started"
                    );
                    self.dispatch(BoardEvent::AddressResolved {
                        ticket,
                        outcome: Err(LookupError::Internal("no async runtime".into())),
                    });
                    return;
                };

                let lookup = self.deps.address_lookup.clone();
                let postal_code = ticket.postal_code.clone();
                let abort = self.lookups.spawn_on(
                    async move { lookup.lookup(&postal_code).await },
                    &handle,
                );
                self.tickets.insert(abort.id(), ticket);
            }
        }
    }

    fn resolve(&mut self, joined: Result<(task::Id, LookupOutcome), JoinError>) {
        let (id, outcome) = match joined {
            Ok((id, outcome)) => (id, outcome),
            Err(e) => {
                error!(error = %e, "Postal code lookup task aborted");
                (e.id(), Err(LookupError::Internal("lookup task aborted".into())))
            }
        };

        match self.tickets.remove(&id) {
            Some(ticket) => self.dispatch(BoardEvent::AddressResolved { ticket, outcome }),
            None => error!(task_id = %id, "Finished lookup has no ticket"),
        }
    }

    /// Wait for the next lookup to finish and apply it.
    ///
    /// Returns `false` immediately when nothing is in flight.
    pub async fn settle_next(&mut self) -> bool {
        match self.lookups.join_next_with_id().await {
            Some(joined) => {
                self.resolve(joined);
                true
            }
            None => false,
        }
    }

    /// Wait for every in-flight lookup and apply the results in arrival order.
    pub async fn settle_all(&mut self) {
        while self.settle_next().await {}
    }

    /// Apply lookups that have already finished, without waiting.
    pub fn settle_ready(&mut self) -> usize {
        let mut applied = 0;
        while let Some(joined) = self.lookups.try_join_next_with_id() {
            self.resolve(joined);
            applied += 1;
        }
        if applied > 0 {
            debug!(applied, in_flight = self.in_flight(), "Applied finished lookups");
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::board::AddressStatus;
    use crate::domains::locations::{AddressFields, PostalCode};
    use crate::domains::needs::FormField;
    use crate::kernel::{BaseAddressLookup, MockAddressLookup};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct PanickingLookup;

    #[async_trait]
    impl BaseAddressLookup for PanickingLookup {
        async fn lookup(&self, _: &PostalCode) -> Result<AddressLookupResult, LookupError> {
            panic!("lookup blew up");
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

    #[tokio::test]
    async fn panicking_lookup_is_reported_as_failed() {
        let mut board = BoardRuntime::new(
            NeedRegistry::new(),
            BoardDeps::new(Arc::new(PanickingLookup)),
        );

        board.dispatch(BoardEvent::PostalCodeEdited("01001000".into()));
        let settled =
            tokio::time::timeout(std::time::Duration::from_secs(2), board.settle_all()).await;

        assert!(settled.is_ok());
        assert_eq!(board.in_flight(), 0);
        assert!(board.state().has_error(FormField::PostalCode));
        assert_eq!(
            board.state().address_status,
            AddressStatus::Failed(PostalCode::parse("01001-000").unwrap())
        );
    }

    #[tokio::test]
    async fn settle_ready_applies_finished_lookups() {
        let mock = MockAddressLookup::new().with_address("01001-000", se());
        let mut board = BoardRuntime::new(NeedRegistry::new(), mock.into_deps());

        board.dispatch(BoardEvent::PostalCodeEdited("01001000".into()));
        assert_eq!(board.in_flight(), 1);

        let mut applied = 0;
        for _ in 0..100 {
            applied += board.settle_ready();
            if applied > 0 {
                break;
            }
            tokio::task::yield_now().await;
        }

        assert_eq!(applied, 1);
        assert_eq!(board.in_flight(), 0);
        assert_eq!(board.state().form.city, "São Paulo");
        assert_eq!(board.settle_ready(), 0);
    }

    #[test]
    fn lookup_outside_a_runtime_fails_instead_of_panicking() {
        let mut board = BoardRuntime::new(NeedRegistry::new(), MockAddressLookup::new().into_deps());

        board.dispatch(BoardEvent::PostalCodeEdited("01001000".into()));

        assert_eq!(board.in_flight(), 0);
        assert!(board.state().has_error(FormField::PostalCode));
        assert!(matches!(
            board.state().address_status,
            AddressStatus::Failed(_)
        ));
    }
}
