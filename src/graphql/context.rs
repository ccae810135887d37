use crate::state::State;

pub struct Context {
    state: State,
    strict_references: bool,
}

impl Context {
    pub fn new(state: State, strict_references: bool) -> Self {
        Context {
            state: state,
            strict_references: strict_references,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Whether `createOrder` must reject ids that resolve to nothing.
    pub fn strict_references(&self) -> bool {
        self.strict_references
    }
}

impl juniper::Context for Context {}
