// Crate entry point. Declares modules so the binary and the tests can reach them.
//
// Layout
// - core: the employee record, the store and the directory read model. Framework-free.
// - adapters: inbound GraphQL mapping onto the store.
// - shell: configuration, shared state, schema and HTTP wiring.

pub mod core {
    pub mod directory;
    pub mod employee;
    pub mod employee_store;
}

pub mod adapters {
    pub mod inbound {
        pub mod graphql;
    }
}

pub mod shell;
